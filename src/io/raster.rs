//! Line rasterization into an RGBA image with PNG export

use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::io::configuration::{BACKGROUND_COLOR, MAX_IMAGE_DIMENSION};
use crate::io::draw::{Color, LineSink};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::{Grid, Vec2, Vec3};

const MAX_LINE_SPAN: i64 = 4 * MAX_IMAGE_DIMENSION as i64;

/// Image-backed line sink
///
/// Maps a world-space view rectangle onto pixels: the view's top-left corner
/// lands on pixel `(0, 0)` and `y` is flipped so that world up is image up.
/// The `z` component of drawn points is ignored.
pub struct RasterCanvas {
    image: RgbaImage,
    top_left: Vec2,
    pixels_per_unit: f32,
}

impl RasterCanvas {
    /// Create a canvas covering `size` world units from `top_left`
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is not a positive finite number or the
    /// resulting image would be empty or exceed `MAX_IMAGE_DIMENSION`.
    pub fn new(top_left: Vec2, size: Vec2, pixels_per_unit: f32) -> Result<Self> {
        if !(pixels_per_unit.is_finite() && pixels_per_unit > 0.0) {
            return Err(invalid_parameter(
                "pixels_per_unit",
                &pixels_per_unit,
                &"must be a positive finite number",
            ));
        }

        let width = Self::pixel_extent("width", size.x * pixels_per_unit)?;
        let height = Self::pixel_extent("height", size.y * pixels_per_unit)?;

        let mut image = RgbaImage::new(width, height);
        for pixel in image.pixels_mut() {
            *pixel = Rgba(BACKGROUND_COLOR.0);
        }

        Ok(Self {
            image,
            top_left,
            pixels_per_unit,
        })
    }

    /// Create a canvas framing a grid's extent with a world-space margin
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`RasterCanvas::new`].
    /// A zero spacing with no margin frames a single point and is rejected.
    pub fn framing<T>(grid: &Grid<T>, pixels_per_unit: f32, margin: f32) -> Result<Self> {
        let (near, far) = (grid.origin(), grid.bottom_right());
        let min_x = near.x.min(far.x);
        let max_x = near.x.max(far.x);
        let min_y = near.y.min(far.y);
        let max_y = near.y.max(far.y);

        let top_left = Vec2::new(min_x - margin, max_y + margin);
        let size = Vec2::new(
            2.0f32.mul_add(margin, max_x - min_x),
            2.0f32.mul_add(margin, max_y - min_y),
        );

        Self::new(top_left, size, pixels_per_unit)
    }

    fn pixel_extent(parameter: &'static str, extent: f32) -> Result<u32> {
        let pixels = extent.ceil();
        if pixels.is_finite() && pixels >= 1.0 && pixels <= MAX_IMAGE_DIMENSION as f32 {
            Ok(pixels as u32)
        } else {
            Err(invalid_parameter(
                parameter,
                &extent,
                &format!("image extent must be between 1 and {MAX_IMAGE_DIMENSION} pixels"),
            ))
        }
    }

    /// Pixel position of a world-space point; may lie outside the image
    pub fn to_pixel(&self, point: Vec3) -> (i64, i64) {
        let x = (point.x - self.top_left.x) * self.pixels_per_unit;
        let y = (self.top_left.y - point.y) * self.pixels_per_unit;
        (x.floor() as i64, y.floor() as i64)
    }

    /// Color of a pixel, if it lies within the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|pixel| Color(pixel.0))
    }

    /// Width and height in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Underlying image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
                *pixel = Rgba(color.0);
            }
        }
    }

    /// Save the canvas as a PNG file, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The image cannot be encoded or written
    pub fn save_png(&self, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
                    path: parent.to_path_buf(),
                    operation: "create directory",
                    source: e,
                })?;
            }
        }

        self.image
            .save_with_format(output_path, image::ImageFormat::Png)
            .map_err(|e| GridError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}

impl LineSink for RasterCanvas {
    // Integer Bresenham; pixels falling outside the image are clipped and
    // segments longer than MAX_LINE_SPAN pixels on either axis are skipped
    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color) {
        let (mut x, mut y) = self.to_pixel(from);
        let (x_end, y_end) = self.to_pixel(to);

        let dx = x_end.saturating_sub(x).saturating_abs();
        let dy = -y_end.saturating_sub(y).saturating_abs();
        if dx > MAX_LINE_SPAN || -dy > MAX_LINE_SPAN {
            return;
        }
        let step_x = if x < x_end { 1 } else { -1 };
        let step_y = if y < y_end { 1 } else { -1 };
        let mut error = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == x_end && y == y_end {
                break;
            }

            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }
}
