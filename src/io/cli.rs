//! Command-line demo: build a lattice, probe it with pointer positions and
//! render a debug image

use crate::io::configuration::{
    CELL_OUTLINE_COLOR, DEFAULT_COLS, DEFAULT_OUTPUT, DEFAULT_PIXELS_PER_UNIT,
    DEFAULT_PROBE_COUNT, DEFAULT_ROWS, DEFAULT_SEED, DEFAULT_SPACING_X, DEFAULT_SPACING_Y,
    LATTICE_COLOR, MAX_GRID_DIMENSION, PROBE_HIT_COLOR, RENDER_MARGIN,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::input::{Probe, RandomPointer, probe_positions};
use crate::io::mask::HitMask;
use crate::io::progress::ProgressManager;
use crate::io::raster::RasterCanvas;
use crate::spatial::{Grid, Vec2, Vec3};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridlattice")]
#[command(
    author,
    version,
    about = "Render a debug view of a lattice and resolve pointer positions to cells"
)]
/// Command-line arguments for the lattice demo
pub struct Cli {
    /// Number of rows (non-positive builds an empty grid)
    #[arg(short, long, default_value_t = DEFAULT_ROWS, allow_negative_numbers = true)]
    pub rows: i32,

    /// Number of columns (non-positive builds an empty grid)
    #[arg(short, long, default_value_t = DEFAULT_COLS, allow_negative_numbers = true)]
    pub cols: i32,

    /// Horizontal distance between cell centres
    #[arg(long, default_value_t = DEFAULT_SPACING_X)]
    pub spacing_x: f32,

    /// Vertical distance between cell centres
    #[arg(long, default_value_t = DEFAULT_SPACING_Y)]
    pub spacing_y: f32,

    /// World position of cell (0, 0) as `x,y[,z]`
    #[arg(long, value_parser = parse_point, default_value = "0,0,0", allow_hyphen_values = true)]
    pub origin: Vec3,

    /// Explicit pointer position as `x,y[,z]`; may be repeated
    #[arg(long = "at", value_parser = parse_point, allow_hyphen_values = true)]
    pub at: Vec<Vec3>,

    /// Number of random pointer positions sampled over the grid extent
    #[arg(short, long, default_value_t = DEFAULT_PROBE_COUNT)]
    pub probes: usize,

    /// Random seed for reproducible pointer positions
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Rendered image scale
    #[arg(long, default_value_t = DEFAULT_PIXELS_PER_UNIT)]
    pub pixels_per_unit: f32,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Suppress progress output and lower log verbosity
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Configured spacing between cell centres
    pub const fn spacing(&self) -> Vec2 {
        Vec2::new(self.spacing_x, self.spacing_y)
    }

    /// Validate arguments that clap cannot check on its own
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension exceeds `MAX_GRID_DIMENSION` or a
    /// spacing component is not finite.
    pub fn validate(&self) -> Result<()> {
        if self.rows > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "rows",
                &self.rows,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.cols > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "cols",
                &self.cols,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if !self.spacing_x.is_finite() {
            return Err(invalid_parameter(
                "spacing_x",
                &self.spacing_x,
                &"must be finite",
            ));
        }
        if !self.spacing_y.is_finite() {
            return Err(invalid_parameter(
                "spacing_y",
                &self.spacing_y,
                &"must be finite",
            ));
        }
        Ok(())
    }
}

/// Parse a world-space point written as `x,y` or `x,y,z`
///
/// # Errors
///
/// Returns a message if the text does not contain two or three numbers.
pub fn parse_point(text: &str) -> std::result::Result<Vec3, String> {
    let components = text
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid point '{text}': {e}"))?;

    match components.as_slice() {
        [x, y] => Ok(Vec3::new(*x, *y, 0.0)),
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!(
            "invalid point '{text}': expected 2 or 3 comma-separated numbers"
        )),
    }
}

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence; otherwise the level is `info`, or `warn`
/// when quiet.
pub fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Owner of the demo's lattice
///
/// The grid is never resized: when the requested dimensions change it is
/// replaced by a fresh grid carrying the same spacing and origin.
pub struct GridSession {
    grid: Grid<i32>,
}

impl GridSession {
    /// Create a session with a default-initialized grid
    pub fn new(rows: i32, cols: i32, spacing: Vec2, origin: Vec3) -> Self {
        Self {
            grid: Grid::new(rows, cols)
                .with_cell_spacing(spacing)
                .with_origin(origin),
        }
    }

    /// Current grid
    pub const fn grid(&self) -> &Grid<i32> {
        &self.grid
    }

    /// Mutable access to the current grid's payloads and placement
    pub fn grid_mut(&mut self) -> &mut Grid<i32> {
        &mut self.grid
    }

    /// Replace the grid if its dimensions differ from the requested ones
    ///
    /// Returns `true` when a replacement happened. Payloads of a replaced
    /// grid are discarded.
    pub fn ensure_dimensions(&mut self, rows: i32, cols: i32) -> bool {
        let requested = if rows > 0 && cols > 0 {
            (rows, cols)
        } else {
            (-1, -1)
        };

        if requested == (self.grid.row_count(), self.grid.col_count()) {
            return false;
        }

        debug!(
            from_rows = self.grid.row_count(),
            from_cols = self.grid.col_count(),
            rows,
            cols,
            "replacing grid"
        );
        self.grid = Grid::new(rows, cols)
            .with_cell_spacing(self.grid.cell_spacing())
            .with_origin(self.grid.origin());
        true
    }

    /// Change the spacing of the current grid
    pub fn set_cell_spacing(&mut self, spacing: Vec2) {
        self.grid.set_cell_spacing(spacing);
    }
}

/// What a demo run produced
#[derive(Debug)]
pub struct RunSummary {
    /// Number of cells in the rendered grid
    pub cells: usize,
    /// Every probe, in the order positions were supplied
    pub probes: Vec<Probe>,
    /// Number of distinct cells hit by valid probes
    pub hits: usize,
    /// Path of the written image
    pub output: PathBuf,
}

/// Run the demo described by the command-line arguments
///
/// # Errors
///
/// Returns an error if argument validation fails, the grid extent cannot be
/// rendered at the requested scale, or the image cannot be written.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    cli.validate()?;

    let session = GridSession::new(cli.rows, cli.cols, cli.spacing(), cli.origin);
    let grid = session.grid();

    if grid.is_empty() {
        warn!(rows = cli.rows, cols = cli.cols, "grid has no cells");
    }
    for cell in grid {
        debug!(cell = %cell.coordinate(), data = cell.data(), "cell");
    }
    if grid.cell_spacing().length() <= 0.0 {
        warn!("cell spacing is zero; every cell maps to the origin");
    }

    let mut canvas = RasterCanvas::framing(grid, cli.pixels_per_unit, RENDER_MARGIN)?;
    let mut progress = if cli.should_show_progress() {
        ProgressManager::new()
    } else {
        ProgressManager::hidden()
    };

    {
        let mut sink = progress.track("cells", &mut canvas);
        grid.draw_debug_cells(&mut sink, CELL_OUTLINE_COLOR);
    }
    {
        let mut sink = progress.track("lattice", &mut canvas);
        grid.draw_debug_grid(&mut sink, LATTICE_COLOR);
    }

    let mut source = cli
        .at
        .iter()
        .copied()
        .chain(RandomPointer::over_grid(grid, cli.probes, cli.seed));
    let probes = probe_positions(grid, &mut source);

    let mut mask = HitMask::for_grid(grid);
    for probe in &probes {
        info!(
            position = %probe.position,
            cell = %probe.coordinate,
            valid = probe.valid,
            "pointer probe"
        );
        if probe.valid {
            mask.mark(probe.coordinate);
        }
    }

    {
        let mut sink = progress.track("probes", &mut canvas);
        for coordinate in mask.coordinates() {
            grid.draw_debug_cell(coordinate, &mut sink, PROBE_HIT_COLOR);
        }
    }
    progress.finish();

    canvas.save_png(&cli.output)?;
    info!(path = %cli.output.display(), "wrote debug render");

    Ok(RunSummary {
        cells: grid.len(),
        probes,
        hits: mask.count(),
        output: cli.output.clone(),
    })
}
