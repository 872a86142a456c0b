#[macro_use]
mod tuple;

mod bounds;
mod common;
mod matrix;
mod normal;
mod point;
mod ray;
mod transform;
pub mod transforms;
mod vector;

pub use bounds::Bounds3;
pub use common::{FloatValueType, Maxi, Mini, ValueType};
pub use matrix::{Matrix3x3, Matrix4x4};
pub use normal::{normal, Normal};
pub use point::{point2, point3, Point2, Point3};
pub use ray::Ray;
pub use transform::Transform;
pub use vector::{vec2, vec3, vec4, Vec2, Vec3, Vec4};
