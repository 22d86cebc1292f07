//! Everything that draws into the cube.
//!
//! Ideas for more animations:
//! - rain falling from the top layer, sped up by the knob
mod liquid;
mod snake;
mod snake3d;
mod sweep;
mod trail;

pub use liquid::{Liquid, surface_brightness};
pub use snake::{PLANE_DIRECTIONS, SNAKE_BRIGHTNESS, Snake};
pub use snake3d::{SNAKE3D_BRIGHTNESS, Snake3d};
pub use sweep::Sweep;
pub use trail::{Trail, serpentine};

pub use crate::pacing::Pacing;

use core::fmt;
use core::str::FromStr;

use rand::RngCore;

use crate::config::Config;
use crate::cube::Cube;
use crate::errors::{CubeError, CubeResult};
use crate::sensors::Sensors;

pub trait Animation<const X: usize, const Y: usize, const Z: usize> {
    /// Draw one frame. Sensors are read here, not in `pacing`.
    fn next_image<S: Sensors, R: RngCore>(
        &mut self,
        cube: &mut Cube<X, Y, Z>,
        sensors: &mut S,
        rng: &mut R,
    ) -> CubeResult<()>;

    /// how long the host waits after a frame
    fn pacing(&self) -> Pacing;
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    Snake,
    Snake3d,
    Liquid,
    /// the voxel-by-voxel test sweep
    Test,
}

impl AnimationKind {
    pub const ALL: [Self; 4] = [Self::Snake, Self::Snake3d, Self::Liquid, Self::Test];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Snake => "snake",
            Self::Snake3d => "snake3d",
            Self::Liquid => "liquid",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationKind {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or(CubeError::UnknownAnimation)
    }
}

/// One of the animations along with its state.
pub enum Animations<const X: usize, const Y: usize, const Z: usize> {
    Snake(Snake<X, Y, Z>),
    Snake3d(Snake3d<X, Y, Z>),
    Liquid(Liquid<X, Y, Z>),
    Test(Sweep<X, Y, Z>),
}

impl<const X: usize, const Y: usize, const Z: usize> Animations<X, Y, Z> {
    pub fn new(kind: AnimationKind, config: &Config) -> Self {
        match kind {
            AnimationKind::Snake => Self::Snake(Snake::new()),
            AnimationKind::Snake3d => Self::Snake3d(Snake3d::new()),
            AnimationKind::Liquid => Self::Liquid(Liquid::new(config)),
            AnimationKind::Test => Self::Test(Sweep::new(config)),
        }
    }

    pub fn kind(&self) -> AnimationKind {
        match self {
            Self::Snake(_) => AnimationKind::Snake,
            Self::Snake3d(_) => AnimationKind::Snake3d,
            Self::Liquid(_) => AnimationKind::Liquid,
            Self::Test(_) => AnimationKind::Test,
        }
    }
}

impl<const X: usize, const Y: usize, const Z: usize> Animation<X, Y, Z> for Animations<X, Y, Z> {
    fn next_image<S: Sensors, R: RngCore>(
        &mut self,
        cube: &mut Cube<X, Y, Z>,
        sensors: &mut S,
        rng: &mut R,
    ) -> CubeResult<()> {
        match self {
            Self::Snake(x) => x.next_image(cube, sensors, rng),
            Self::Snake3d(x) => x.next_image(cube, sensors, rng),
            Self::Liquid(x) => x.next_image(cube, sensors, rng),
            Self::Test(x) => x.next_image(cube, sensors, rng),
        }
    }

    fn pacing(&self) -> Pacing {
        match self {
            Self::Snake(x) => x.pacing(),
            Self::Snake3d(x) => x.pacing(),
            Self::Liquid(x) => x.pacing(),
            Self::Test(x) => x.pacing(),
        }
    }
}
