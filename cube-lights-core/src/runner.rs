//! The host loop for embassy executors. Firmware and the terminal simulator both run this as a task.
use embassy_time::Timer;
use rand::RngCore;

use crate::errors::CubeResult;
use crate::fps::FpsTracker;
use crate::logging::{error, info};
use crate::pacing::Player;
use crate::sensors::{FrameSink, Sensors};

/// Tick `player` forever. Only returns if an animation fails.
pub async fn run<const X: usize, const Y: usize, const Z: usize, S, R, F>(
    mut player: Player<X, Y, Z>,
    mut sensors: S,
    mut rng: R,
    mut sink: F,
) -> CubeResult<()>
where
    S: Sensors,
    R: RngCore,
    F: FrameSink<X, Y, Z>,
{
    info!("starting {}", player.kind().name());

    let mut fps = FpsTracker::new("cube");

    loop {
        let frames = player.frames();

        let delay_ms = match player.tick(&mut sensors, &mut rng, &mut sink) {
            Ok(delay_ms) => delay_ms,
            Err(err) => {
                error!("{} stopped after {} frames: {}", player.kind().name(), frames, err);
                return Err(err);
            }
        };

        if player.frames() != frames {
            fps.tick();
        }

        Timer::after_millis(delay_ms as u64).await;
    }
}
