//! Frame timing and the per-tick entry point the host loop calls.
use rand::RngCore;

use crate::animations::{Animation, AnimationKind, Animations};
use crate::config::Config;
use crate::cube::Cube;
use crate::errors::CubeResult;
use crate::logging::{debug, info, trace};
use crate::sensors::{ANALOG_MAX, FrameSink, Sensors};

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Pacing {
    /// `Config::frames_per_second`
    FrameRate,
    /// the analog knob sets the speed. all the way down pauses
    SpeedKnob,
    Fixed(u32),
}

/// Milliseconds between frames for a knob reading. `None` means the knob is at zero and the animation is paused.
pub fn speed_delay_ms(analog: u16, config: &Config) -> Option<u32> {
    if analog == 0 {
        return None;
    }

    let frequency = analog.min(ANALOG_MAX) as f32 * config.max_speed_hz / ANALOG_MAX as f32;

    let delay_ms = (1_000.0 / frequency) as u32;

    Some(delay_ms.min(config.max_frame_ms))
}

/// Owns the cube and runs whichever animation is selected, one tick at a time.
pub struct Player<const X: usize, const Y: usize, const Z: usize> {
    animation: Animations<X, Y, Z>,
    config: Config,
    cube: Cube<X, Y, Z>,
    frames: u64,
    /// waiting for the speed knob to come off zero before drawing again
    paused: bool,
}

impl<const X: usize, const Y: usize, const Z: usize> Player<X, Y, Z> {
    pub fn new(kind: AnimationKind, config: Config) -> Self {
        info!("playing {} on a {}x{}x{} cube", kind.name(), X, Y, Z);

        Self {
            animation: Animations::new(kind, &config),
            config,
            cube: Cube::new(),
            frames: 0,
            paused: false,
        }
    }

    pub fn cube(&self) -> &Cube<X, Y, Z> {
        &self.cube
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn kind(&self) -> AnimationKind {
        self.animation.kind()
    }

    /// frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// start a different animation from a dark cube
    pub fn switch(&mut self, kind: AnimationKind) {
        info!("switching from {} to {}", self.kind().name(), kind.name());

        self.animation = Animations::new(kind, &self.config);
        self.cube.clear();
        self.paused = false;
    }

    /// Draw the next frame, hand it to `sink` and return how many milliseconds to wait before calling again.
    ///
    /// While paused on the speed knob this only re-reads the knob.
    pub fn tick<S, R, F>(&mut self, sensors: &mut S, rng: &mut R, sink: &mut F) -> CubeResult<u32>
    where
        S: Sensors,
        R: RngCore,
        F: FrameSink<X, Y, Z>,
    {
        if self.paused {
            return Ok(self.knob_delay(sensors));
        }

        self.animation.next_image(&mut self.cube, sensors, rng)?;

        sink.show(&self.cube);

        self.frames += 1;

        let delay_ms = match self.animation.pacing() {
            Pacing::FrameRate => self.config.frame_ms(),
            Pacing::Fixed(ms) => ms,
            Pacing::SpeedKnob => self.knob_delay(sensors),
        };

        trace!("frame {} drawn. waiting {}ms", self.frames, delay_ms);

        Ok(delay_ms)
    }

    fn knob_delay<S: Sensors>(&mut self, sensors: &mut S) -> u32 {
        match speed_delay_ms(sensors.analog(), &self.config) {
            Some(delay_ms) => {
                if self.paused {
                    debug!("speed knob turned up. resuming");
                    self.paused = false;
                }
                delay_ms
            }
            None => {
                if !self.paused {
                    debug!("speed knob at zero. pausing");
                    self.paused = true;
                }
                self.config.idle_poll_ms
            }
        }
    }
}
