//! World-space input sources for probing the lattice

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::spatial::{Coordinate, Grid, Vec3};

/// Supplier of world-space positions, such as a pointer device
pub trait PositionSource {
    /// Next position, or `None` once the source is exhausted
    fn next_position(&mut self) -> Option<Vec3>;
}

impl<I> PositionSource for I
where
    I: Iterator<Item = Vec3>,
{
    fn next_position(&mut self) -> Option<Vec3> {
        self.next()
    }
}

/// Seeded pointer emitting uniformly distributed positions over a rectangle
///
/// Positions are sampled in the `z` plane of `min`.
pub struct RandomPointer {
    rng: StdRng,
    min: Vec3,
    max: Vec3,
    remaining: usize,
}

impl RandomPointer {
    /// Create a pointer producing `count` positions between two corners
    pub fn new(min: Vec3, max: Vec3, count: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min: Vec3::new(min.x.min(max.x), min.y.min(max.y), min.z),
            max: Vec3::new(min.x.max(max.x), min.y.max(max.y), min.z),
            remaining: count,
        }
    }

    /// Create a pointer covering a grid's extent
    pub fn over_grid<T>(grid: &Grid<T>, count: usize, seed: u64) -> Self {
        Self::new(grid.origin(), grid.bottom_right(), count, seed)
    }

    fn sample(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.random_range(min..=max)
        } else {
            min
        }
    }
}

impl Iterator for RandomPointer {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let x = self.sample(self.min.x, self.max.x);
        let y = self.sample(self.min.y, self.max.y);
        Some(Vec3::new(x, y, self.min.z))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Outcome of converting one input position to a lattice coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    /// Position supplied by the source
    pub position: Vec3,
    /// Nearest cell centre, possibly outside the grid
    pub coordinate: Coordinate,
    /// Whether the coordinate addresses a cell of the grid
    pub valid: bool,
}

/// Drain a position source, resolving every position against a grid
pub fn probe_positions<T, S>(grid: &Grid<T>, source: &mut S) -> Vec<Probe>
where
    S: PositionSource + ?Sized,
{
    let mut probes = Vec::new();
    while let Some(position) = source.next_position() {
        let coordinate = grid.coordinate_from_world_position(position);
        probes.push(Probe {
            position,
            coordinate,
            valid: grid.is_valid_index(coordinate),
        });
    }
    probes
}
