//! Water sloshing around the cube. The surface is a plane perpendicular to gravity; the knob sets the level.
use rand::RngCore;

use super::{Animation, Pacing};
use crate::config::Config;
use crate::cube::Cube;
use crate::errors::CubeResult;
use crate::logging::trace;
use crate::sensors::{ANALOG_MAX, Acceleration, Sensors};
use crate::vector::Vector;

pub struct Liquid<const X: usize, const Y: usize, const Z: usize> {
    gain: f32,
    band: i16,
    level_center: i16,
    level_divisor: i16,
}

/// widest fade that still drops at least one brightness step per unit of distance
pub const MAX_BAND: i16 = 128;

/// Brightness of a voxel `distance` above the surface. Fully lit below the band, dark above it and a linear fade
/// through it. Never increases with distance.
pub fn surface_brightness(distance: i16, band: i16) -> u8 {
    let band = band.clamp(1, MAX_BAND);

    if distance < -band {
        u8::MAX
    } else if distance >= band {
        0
    } else {
        // spread 256 steps across the band so the top of the fade lands just above zero
        let step = (128 / band).max(1);

        (255 - (distance + band) * step).clamp(0, 255) as u8
    }
}

impl<const X: usize, const Y: usize, const Z: usize> Liquid<X, Y, Z> {
    pub fn new(config: &Config) -> Self {
        Self {
            gain: config.liquid_gain,
            band: config.liquid_band.clamp(1, MAX_BAND),
            level_center: config.liquid_level_center,
            level_divisor: config.liquid_level_divisor.max(1),
        }
    }

    /// The direction gravity pulls in cube coordinates. `as` saturates, so a hard shake can't wrap around.
    pub fn down(&self, acceleration: Acceleration) -> Vector {
        Vector::new(
            (self.gain * acceleration.x) as i8,
            (-self.gain * acceleration.y) as i8,
            (self.gain * acceleration.z) as i8,
        )
    }

    /// the middle voxel. (1,1,1) on the small cube
    pub fn center() -> Vector {
        Vector::new(((X - 1) / 2) as i8, ((Y - 1) / 2) as i8, ((Z - 1) / 2) as i8)
    }

    /// where the surface crosses `down`. knob centered puts it through the middle of the cube
    pub fn surface(&self, down: Vector, analog: u16) -> i16 {
        let level = (analog.min(ANALOG_MAX) as i16).wrapping_sub(self.level_center) / self.level_divisor;

        Self::center().dot(down).wrapping_add(level)
    }
}

impl<const X: usize, const Y: usize, const Z: usize> Animation<X, Y, Z> for Liquid<X, Y, Z> {
    fn next_image<S: Sensors, R: RngCore>(
        &mut self,
        cube: &mut Cube<X, Y, Z>,
        sensors: &mut S,
        _rng: &mut R,
    ) -> CubeResult<()> {
        let analog = sensors.analog();
        let acceleration = sensors.acceleration()?;

        let down = self.down(acceleration);
        let surface = self.surface(down, analog);

        trace!("liquid down={} surface={}", down, surface);

        for p in Cube::<X, Y, Z>::points() {
            let distance = p.dot(down) - surface;

            cube.set(p, surface_brightness(distance, self.band))?;
        }

        Ok(())
    }

    fn pacing(&self) -> Pacing {
        Pacing::FrameRate
    }
}
