//! Batched ray intersection against spheres, planes, boxes, triangles and
//! parallelograms.
//!
//! Primitives live in a [PrimitiveArena] and are referenced by [PrimitiveId].
//! Same-kind primitives are packed eight at a time into structure-of-arrays
//! batches that are intersected in one pass, and a small geometry graph composes
//! batches, single primitives, bounding volumes and transforms into a [Scene].

#[macro_use]
mod macros;

pub mod error;
pub mod geometry;
pub mod intersection;
pub mod lanes;
pub mod math;
pub mod primitive;
pub mod scene;
pub mod settings;
pub mod shapes;
pub mod soa;

#[doc(hidden)]
pub use log;

pub use error::{Error, Result};
pub use geometry::{BoundingVolume, Collection, Geometry, Intersectable, TransformedGeometry};
pub use intersection::IntersectionResult;
pub use lanes::{LaneReal, LaneVector, FALLBACK_LANE, LANE_COUNT};
pub use primitive::{MaterialId, Primitive, PrimitiveArena, PrimitiveId, PrimitiveKind, PrimitiveShape};
pub use scene::{Scene, SceneBuilder};
pub use settings::{BuildSettings, OverflowPolicy};
pub use shapes::{AxisAlignedBox, Parallelogram, Plane, Shape, ShapeHit, Sphere, Triangle};
pub use soa::{Batch, BatchState, LaneHit, SoaBatch};
