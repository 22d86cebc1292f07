#![feature(type_alias_impl_trait)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use biski64::Biski64Rng;
use cube_lights_core::animations::AnimationKind;
use cube_lights_core::config::Config;
use cube_lights_core::pacing::Player;
use cube_lights_core::runner::run;
use cube_terminal::{SimulatedSensors, TerminalSink};
use embassy_executor::Spawner;
use log::*;

/// seconds for the simulated cube to rock all the way around
const ROCK_PERIOD_S: f32 = 8.0;

#[embassy_executor::task]
async fn small_cube_task(player: Player<3, 3, 3>, sensors: SimulatedSensors, rng: Biski64Rng) {
    if let Err(err) = run(player, sensors, rng, TerminalSink::default()).await {
        error!("small cube failed: {err}");
    }
}

#[embassy_executor::task]
async fn big_cube_task(player: Player<8, 8, 8>, sensors: SimulatedSensors, rng: Biski64Rng) {
    if let Err(err) = run(player, sensors, rng, TerminalSink::default()).await {
        error!("big cube failed: {err}");
    }
}

fn setup() -> anyhow::Result<(AnimationKind, bool, u16)> {
    let mut args = env::args().skip(1);

    let kind: AnimationKind = args.next().as_deref().unwrap_or("snake3d").parse()?;

    let big = match args.next().as_deref() {
        None | Some("3") => false,
        Some("8") => true,
        Some(x) => anyhow::bail!("cube size must be 3 or 8, not {x}"),
    };

    let analog = match env::var("CUBE_KNOB") {
        Ok(x) => x.parse()?,
        Err(_) => 512,
    };

    Ok((kind, big, analog))
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // TODO: Audit that the environment access only happens in single-threaded code.
    unsafe {
        env::set_var(
            "RUST_LOG",
            env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        )
    };

    env_logger::builder()
        .format_timestamp_nanos()
        .parse_default_env()
        .init();

    let (kind, big, analog) = match setup() {
        Ok(x) => x,
        Err(err) => {
            error!("{err}. usage: cube_terminal [snake|snake3d|liquid|test] [3|8]");
            std::process::exit(1);
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|x| x.as_nanos() as u64)
        .unwrap_or_default();
    debug!("seed {seed}");

    let rng = Biski64Rng::from_seed_for_stream(seed, 0, 2);
    let sensors = SimulatedSensors::new(analog, ROCK_PERIOD_S);

    if big {
        spawner.must_spawn(big_cube_task(Player::new(kind, Config::default()), sensors, rng));
    } else {
        spawner.must_spawn(small_cube_task(Player::new(kind, Config::default()), sensors, rng));
    }

    debug!("cube task spawned");
}
