use std::fmt;

use strum::{Display, EnumString, EnumVariantNames};

use crate::{
    math::{Bounds3, FloatValueType, Normal, Point3, Ray},
    shapes::{AxisAlignedBox, Parallelogram, Plane, Shape, ShapeHit, Sphere, Triangle},
};

/// Stable handle of a [Primitive] inside a [PrimitiveArena].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(pub u32);

impl PrimitiveId {
    /// Returns the arena index this handle points to.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque material handle. Only carried through to the hit, never inspected here.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

/// The kind of a [Primitive], also the kind of batch it can go into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumVariantNames)]
pub enum PrimitiveKind {
    Sphere,
    Plane,
    AxisAlignedBox,
    Triangle,
    Parallelogram,
}

/// Geometry of a [Primitive].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PrimitiveShape<T>
where
    T: FloatValueType,
{
    Sphere(Sphere<T>),
    Plane(Plane<T>),
    AxisAlignedBox(AxisAlignedBox<T>),
    Triangle(Triangle<T>),
    Parallelogram(Parallelogram<T>),
}

macro_rules! dispatch_shape {
    ($shape:expr, $s:ident => $body:expr) => {
        match $shape {
            PrimitiveShape::Sphere($s) => $body,
            PrimitiveShape::Plane($s) => $body,
            PrimitiveShape::AxisAlignedBox($s) => $body,
            PrimitiveShape::Triangle($s) => $body,
            PrimitiveShape::Parallelogram($s) => $body,
        }
    };
}

impl<T> PrimitiveShape<T>
where
    T: FloatValueType,
{
    /// Returns the kind of this shape.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveShape::Sphere(_) => PrimitiveKind::Sphere,
            PrimitiveShape::Plane(_) => PrimitiveKind::Plane,
            PrimitiveShape::AxisAlignedBox(_) => PrimitiveKind::AxisAlignedBox,
            PrimitiveShape::Triangle(_) => PrimitiveKind::Triangle,
            PrimitiveShape::Parallelogram(_) => PrimitiveKind::Parallelogram,
        }
    }
}

impl<T> Shape<T> for PrimitiveShape<T>
where
    T: FloatValueType,
{
    fn intersect(&self, ray: &Ray<T>) -> Option<ShapeHit<T>> {
        dispatch_shape!(self, s => s.intersect(ray))
    }

    fn normal_at(&self, p: Point3<T>) -> Normal<T> {
        dispatch_shape!(self, s => s.normal_at(p))
    }

    fn world_bound(&self) -> Bounds3<T> {
        dispatch_shape!(self, s => s.world_bound())
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident),+) => {
        $(
            impl<T> From<$variant<T>> for PrimitiveShape<T>
            where
                T: FloatValueType,
            {
                fn from(s: $variant<T>) -> Self {
                    PrimitiveShape::$variant(s)
                }
            }
        )+
    };
}
impl_from_shape!(Sphere, Plane, AxisAlignedBox, Triangle, Parallelogram);

/// A shape together with the material it is rendered with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Primitive<T>
where
    T: FloatValueType,
{
    pub shape: PrimitiveShape<T>,
    pub material: MaterialId,
}

impl<T> Primitive<T>
where
    T: FloatValueType,
{
    /// Creates a new `Primitive`.
    pub fn new(shape: impl Into<PrimitiveShape<T>>, material: MaterialId) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    /// Returns the kind of this primitive's shape.
    pub fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }
}

/// Append-only storage that owns every [Primitive] of a scene.
///
/// Batches and geometry nodes refer to primitives by [PrimitiveId] only, so they
/// can't outlive or mutate what they index.
#[derive(Clone, Debug)]
pub struct PrimitiveArena<T>
where
    T: FloatValueType,
{
    primitives: Vec<Primitive<T>>,
}

impl<T> PrimitiveArena<T>
where
    T: FloatValueType,
{
    /// Creates a new empty `PrimitiveArena`.
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
        }
    }

    /// Stores `primitive` and returns its handle.
    pub fn push(&mut self, primitive: Primitive<T>) -> PrimitiveId {
        debug_assert!(self.primitives.len() < u32::MAX as usize);
        let id = PrimitiveId(self.primitives.len() as u32);
        self.primitives.push(primitive);
        id
    }

    /// Returns the primitive behind `id` if this arena holds it.
    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive<T>> {
        self.primitives.get(id.index())
    }

    /// Checks if `id` points into this arena.
    pub fn contains(&self, id: PrimitiveId) -> bool {
        id.index() < self.primitives.len()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Iterates all primitives in insertion order along with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive<T>)> {
        self.primitives
            .iter()
            .enumerate()
            .map(|(i, p)| (PrimitiveId(i as u32), p))
    }
}

impl<T> Default for PrimitiveArena<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self::new()
    }
}
