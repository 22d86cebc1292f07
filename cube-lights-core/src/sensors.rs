//! Inputs the animations read and the display they hand frames to. The hardware drivers live with the firmware.
use crate::cube::Cube;
use crate::errors::CubeResult;

/// full scale of the 10-bit ADC
pub const ANALOG_MAX: u16 = 1023;

/// gravity in g. lying flat, z is about 1.0
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Acceleration {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn flat() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

pub trait Sensors {
    /// the knob on the analog pin. 0..=ANALOG_MAX
    fn analog(&mut self) -> u16;

    /// a fresh accelerometer reading
    fn acceleration(&mut self) -> CubeResult<Acceleration>;
}

/// The display refresh driver. `show` is called once per drawn frame and should copy the buffer somewhere the
/// refresh can scan it out without tearing.
pub trait FrameSink<const X: usize, const Y: usize, const Z: usize> {
    fn show(&mut self, cube: &Cube<X, Y, Z>);
}

/// fixed readings. useful for tests and for running without the sensor board attached
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedSensors {
    pub analog: u16,
    pub acceleration: Acceleration,
}

impl Default for FixedSensors {
    fn default() -> Self {
        Self {
            analog: ANALOG_MAX / 2,
            acceleration: Acceleration::flat(),
        }
    }
}

impl Sensors for FixedSensors {
    fn analog(&mut self) -> u16 {
        self.analog.min(ANALOG_MAX)
    }

    fn acceleration(&mut self) -> CubeResult<Acceleration> {
        Ok(self.acceleration)
    }
}

/// throws every frame away
pub struct NullSink;

impl<const X: usize, const Y: usize, const Z: usize> FrameSink<X, Y, Z> for NullSink {
    fn show(&mut self, _cube: &Cube<X, Y, Z>) {}
}
