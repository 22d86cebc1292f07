//! A snake free to move in all three dimensions. One voxel per position, fading toward the tail.
use rand::RngCore;

use super::trail::{Trail, serpentine};
use super::{Animation, Pacing};
use crate::cube::Cube;
use crate::errors::CubeResult;
use crate::sensors::Sensors;
use crate::vector::Vector;

/// head first
pub const SNAKE3D_BRIGHTNESS: [u8; 4] = [255, 192, 128, 64];

pub struct Snake3d<const X: usize, const Y: usize, const Z: usize> {
    trail: Trail<4>,
}

impl<const X: usize, const Y: usize, const Z: usize> Default for Snake3d<X, Y, Z> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const X: usize, const Y: usize, const Z: usize> Snake3d<X, Y, Z> {
    /// starts curled up in the bottom layer so that every position is different from the first frame
    pub fn new() -> Self {
        const {
            assert!(X * Y >= 4, "the bottom layer is too small for the snake");
        }

        let points = core::array::from_fn(|n| {
            let (x, y) = serpentine(n, X);
            Vector::new(x as i8, y as i8, 0)
        });

        Self {
            trail: Trail::new(points),
        }
    }

    pub fn trail(&self) -> &Trail<4> {
        &self.trail
    }
}

impl<const X: usize, const Y: usize, const Z: usize> Animation<X, Y, Z> for Snake3d<X, Y, Z> {
    fn next_image<S: Sensors, R: RngCore>(
        &mut self,
        cube: &mut Cube<X, Y, Z>,
        _sensors: &mut S,
        rng: &mut R,
    ) -> CubeResult<()> {
        self.trail.advance::<X, Y, Z, 6, R>(&Vector::DIRECTIONS, rng)?;

        cube.clear();

        for (point, brightness) in self.trail.iter().zip(SNAKE3D_BRIGHTNESS) {
            cube.set(*point, brightness)?;
        }

        Ok(())
    }

    fn pacing(&self) -> Pacing {
        Pacing::SpeedKnob
    }
}
