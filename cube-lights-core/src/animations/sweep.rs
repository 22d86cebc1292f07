//! Lights one voxel at a time in wiring order. Slow enough to spot a dead LED or a crossed wire.
use rand::RngCore;

use super::{Animation, Pacing};
use crate::config::Config;
use crate::cube::Cube;
use crate::errors::CubeResult;
use crate::logging::debug;
use crate::sensors::Sensors;
use crate::vector::Vector;

pub struct Sweep<const X: usize, const Y: usize, const Z: usize> {
    point: Vector,
    hold_ms: u32,
}

impl<const X: usize, const Y: usize, const Z: usize> Sweep<X, Y, Z> {
    pub fn new(config: &Config) -> Self {
        Self {
            point: Vector::ZERO,
            hold_ms: config.sweep_ms,
        }
    }

    /// the voxel the next frame will light
    pub fn point(&self) -> Vector {
        self.point
    }

    /// x first, carrying into y and then z. wraps back to the origin
    fn advance(&mut self) {
        self.point.x += 1;
        if self.point.x as usize >= X {
            self.point.x = 0;
            self.point.y += 1;
            if self.point.y as usize >= Y {
                self.point.y = 0;
                self.point.z += 1;
                if self.point.z as usize >= Z {
                    self.point.z = 0;
                    debug!("sweep complete");
                }
            }
        }
    }
}

impl<const X: usize, const Y: usize, const Z: usize> Animation<X, Y, Z> for Sweep<X, Y, Z> {
    fn next_image<S: Sensors, R: RngCore>(
        &mut self,
        cube: &mut Cube<X, Y, Z>,
        _sensors: &mut S,
        _rng: &mut R,
    ) -> CubeResult<()> {
        cube.clear();
        cube.set(self.point, u8::MAX)?;

        self.advance();

        Ok(())
    }

    fn pacing(&self) -> Pacing {
        Pacing::Fixed(self.hold_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::Sweep;
    use crate::animations::{Animation, Pacing};
    use crate::config::Config;
    use crate::cube::{Cube, SmallCube};
    use crate::sensors::FixedSensors;
    use crate::vector::Vector;
    use biski64::Biski64Rng;

    #[test]
    fn test_visits_every_voxel_in_order() {
        let mut sweep = Sweep::<3, 3, 3>::new(&Config::default());
        let mut cube = SmallCube::new();
        let mut sensors = FixedSensors::default();
        let mut rng = Biski64Rng::from_seed_for_stream(0, 0, 2);

        // twice around to check the wrap
        for expected in SmallCube::points().chain(SmallCube::points()) {
            sweep.next_image(&mut cube, &mut sensors, &mut rng).unwrap();

            assert_eq!(cube.lit(), 1);
            assert_eq!(cube.get(expected), Some(255));
        }

        assert_eq!(sweep.point(), Vector::ZERO);
    }

    #[test]
    fn test_uneven_cube() {
        let mut sweep = Sweep::<2, 3, 4>::new(&Config::default());
        let mut cube = Cube::<2, 3, 4>::new();
        let mut sensors = FixedSensors::default();
        let mut rng = Biski64Rng::from_seed_for_stream(0, 0, 2);

        for _ in 0..24 {
            sweep.next_image(&mut cube, &mut sensors, &mut rng).unwrap();
        }

        assert_eq!(cube.get(Vector::new(1, 2, 3)), Some(255));
        assert_eq!(sweep.point(), Vector::ZERO);
    }

    #[test]
    fn test_pacing() {
        let config = Config {
            sweep_ms: 1_500,
            ..Default::default()
        };

        let sweep = Sweep::<3, 3, 3>::new(&config);

        assert_eq!(Animation::<3, 3, 3>::pacing(&sweep), Pacing::Fixed(1_500));
    }
}
