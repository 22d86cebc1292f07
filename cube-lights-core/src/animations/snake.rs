//! A short snake wandering the floor plan. Every position lights its whole vertical column.
use rand::RngCore;

use super::trail::{Trail, serpentine};
use super::{Animation, Pacing};
use crate::cube::Cube;
use crate::errors::CubeResult;
use crate::sensors::Sensors;
use crate::vector::Vector;

/// moves within the x/z plane
pub const PLANE_DIRECTIONS: [Vector; 4] = [
    Vector::new(-1, 0, 0),
    Vector::new(1, 0, 0),
    Vector::new(0, 0, -1),
    Vector::new(0, 0, 1),
];

/// head first
pub const SNAKE_BRIGHTNESS: [u8; 3] = [255, 127, 63];

pub struct Snake<const X: usize, const Y: usize, const Z: usize> {
    trail: Trail<3>,
}

impl<const X: usize, const Y: usize, const Z: usize> Default for Snake<X, Y, Z> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const X: usize, const Y: usize, const Z: usize> Snake<X, Y, Z> {
    /// starts at the first cells of the floor, head at the origin
    pub fn new() -> Self {
        const {
            assert!(X * Z >= 3, "the floor is too small for the snake");
        }

        let points = core::array::from_fn(|n| {
            let (x, z) = serpentine(n, X);
            Vector::new(x as i8, 0, z as i8)
        });

        Self {
            trail: Trail::new(points),
        }
    }

    pub fn trail(&self) -> &Trail<3> {
        &self.trail
    }
}

impl<const X: usize, const Y: usize, const Z: usize> Animation<X, Y, Z> for Snake<X, Y, Z> {
    fn next_image<S: Sensors, R: RngCore>(
        &mut self,
        cube: &mut Cube<X, Y, Z>,
        _sensors: &mut S,
        rng: &mut R,
    ) -> CubeResult<()> {
        self.trail.advance::<X, Y, Z, 4, R>(&PLANE_DIRECTIONS, rng)?;

        cube.clear();

        for (point, brightness) in self.trail.iter().zip(SNAKE_BRIGHTNESS) {
            for y in 0..Y {
                cube.set(Vector::new(point.x, y as i8, point.z), brightness)?;
            }
        }

        Ok(())
    }

    fn pacing(&self) -> Pacing {
        Pacing::SpeedKnob
    }
}
