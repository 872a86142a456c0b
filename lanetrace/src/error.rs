use thiserror::Error;

use crate::primitive::{PrimitiveId, PrimitiveKind};

/// Errors from scene construction and settings loading.
///
/// A ray missing geometry is never an error, see
/// [IntersectionResult](crate::IntersectionResult).
#[derive(Error, Debug)]
pub enum Error {
    #[error("batch is full, it holds at most {capacity} primitives")]
    BatchFull { capacity: usize },
    #[error("lane {index} is out of range for a batch of {capacity}")]
    LaneOutOfRange { index: usize, capacity: usize },
    #[error("a {expected} batch can't hold a {found}")]
    KindMismatch {
        expected: PrimitiveKind,
        found: PrimitiveKind,
    },
    #[error("transform matrix is not invertible")]
    SingularTransform,
    #[error("primitive {0} is not in the arena")]
    UnknownPrimitive(PrimitiveId),
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
