use thiserror::Error;

use crate::vector::Vector;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Error, Debug, PartialEq)]
pub enum CubeError {
    #[error("voxel {0} is outside the cube")]
    OutOfCube(Vector),
    /// every neighbor of the head is off the cube or already part of the trail
    #[error("snake is trapped at {0}")]
    SnakeTrapped(Vector),
    #[error("accelerometer read failed")]
    Accelerometer,
    #[error("need {needed} bytes of grayscale buffer, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
    #[error("unknown animation")]
    UnknownAnimation,
}

pub type CubeResult<T> = Result<T, CubeError>;
