//! Stand-ins for the cube's hardware so the animations can run on a desktop.
use std::f32::consts::TAU;
use std::fmt::Write;
use std::time::Instant;

use cube_lights_core::CubeResult;
use cube_lights_core::cube::Cube;
use cube_lights_core::logging::info;
use cube_lights_core::sensors::{ANALOG_MAX, Acceleration, FrameSink, Sensors};

/// darkest to brightest
const SHADES: &[u8] = b" .:-=+*#%@";

/// A fixed knob and a cube being slowly rocked back and forth.
pub struct SimulatedSensors {
    analog: u16,
    start: Instant,
    /// seconds for one full rock
    period_s: f32,
}

impl SimulatedSensors {
    pub fn new(analog: u16, period_s: f32) -> Self {
        Self {
            analog: analog.min(ANALOG_MAX),
            start: Instant::now(),
            period_s: period_s.max(0.1),
        }
    }

    /// tilted up to 30 degrees, circling around the z axis
    pub fn acceleration_at(&self, elapsed_s: f32) -> Acceleration {
        let phase = TAU * elapsed_s / self.period_s;
        let tilt = 30f32.to_radians();

        Acceleration::new(tilt.sin() * phase.cos(), tilt.sin() * phase.sin(), tilt.cos())
    }
}

impl Sensors for SimulatedSensors {
    fn analog(&mut self) -> u16 {
        self.analog
    }

    fn acceleration(&mut self) -> CubeResult<Acceleration> {
        Ok(self.acceleration_at(self.start.elapsed().as_secs_f32()))
    }
}

/// Logs every frame as the layers side by side, bottom layer on the left.
#[derive(Default)]
pub struct TerminalSink {
    frame: u64,
}

pub fn shade(brightness: u8) -> char {
    SHADES[brightness as usize * SHADES.len() / 256] as char
}

pub fn render<const X: usize, const Y: usize, const Z: usize>(cube: &Cube<X, Y, Z>) -> String {
    let layers: Vec<_> = (0..Z).filter_map(|z| cube.layer(z)).collect();

    let mut out = String::new();

    // top row first so it reads like looking at the side of the cube
    for y in (0..Y).rev() {
        for layer in layers.iter() {
            for column in layer.iter() {
                out.push(shade(column[y]));
            }
            out.push_str("  ");
        }
        let _ = writeln!(out);
    }

    out
}

impl<const X: usize, const Y: usize, const Z: usize> FrameSink<X, Y, Z> for TerminalSink {
    fn show(&mut self, cube: &Cube<X, Y, Z>) {
        self.frame += 1;

        info!("frame {}\n{}", self.frame, render(cube));
    }
}

#[cfg(test)]
mod tests {
    use super::{SimulatedSensors, render, shade};
    use cube_lights_core::{SmallCube, Vector};

    #[test]
    fn test_shades() {
        assert_eq!(shade(0), ' ');
        assert_eq!(shade(255), '@');
        assert_eq!(shade(127), '=');
    }

    #[test]
    fn test_render() {
        let mut cube = SmallCube::new();
        cube.set(Vector::new(0, 2, 0), 255).unwrap();
        cube.set(Vector::new(2, 0, 2), 255).unwrap();

        let expected = concat!(
            "@              \n",
            "               \n",
            "            @  \n",
        );

        assert_eq!(render(&cube), expected);
    }

    #[test]
    fn test_tilt_stays_near_one_g() {
        let sensors = SimulatedSensors::new(512, 4.0);

        for step in 0..16 {
            let a = sensors.acceleration_at(step as f32 * 0.25);
            let g = (a.x * a.x + a.y * a.y + a.z * a.z).sqrt();

            assert!((g - 1.0).abs() < 1e-4);
            assert!(a.z > 0.8);
        }
    }
}
