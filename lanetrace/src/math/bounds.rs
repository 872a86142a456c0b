use approx::{AbsDiffEq, RelativeEq};

use super::{common::FloatValueType, point::Point3, ray::Ray, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Bounding_Boxes.html

/// Three-dimensional axis-aligned bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3<T>
where
    T: FloatValueType,
{
    /// The minimum extent of the bounds.
    pub p_min: Point3<T>,
    /// The maximum extent of the bounds.
    pub p_max: Point3<T>,
}

impl<T> Bounds3<T>
where
    T: FloatValueType,
{
    /// Creates new bounds spanning the two points, in any order.
    pub fn new(p0: Point3<T>, p1: Point3<T>) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Creates inverted bounds that any union overrides.
    pub fn empty() -> Self {
        Self {
            p_min: Point3::from(T::infinity()),
            p_max: Point3::from(T::neg_infinity()),
        }
    }

    /// Creates bounds that contain all of space, e.g. for planes.
    pub fn infinite() -> Self {
        Self {
            p_min: Point3::from(T::neg_infinity()),
            p_max: Point3::from(T::infinity()),
        }
    }

    /// Creates the smallest bounds holding all of `points`.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point3<T>>,
    {
        points
            .into_iter()
            .fold(Self::empty(), |b, p| b.union_p(p))
    }

    /// Checks if these bounds contain no points.
    pub fn is_empty(&self) -> bool {
        self.p_min.x > self.p_max.x || self.p_min.y > self.p_max.y || self.p_min.z > self.p_max.z
    }

    /// Checks if both corners are finite.
    pub fn is_bounded(&self) -> bool {
        self.p_min.is_finite() && self.p_max.is_finite()
    }

    /// Returns the bounds grown to contain `p`.
    pub fn union_p(&self, p: Point3<T>) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Returns the bounds grown to contain `other`.
    pub fn union_b(&self, other: Self) -> Self {
        Self {
            p_min: self.p_min.min(other.p_min),
            p_max: self.p_max.max(other.p_max),
        }
    }

    /// Returns the vector from `p_min` to `p_max`.
    pub fn diagonal(&self) -> Vec3<T> {
        self.p_max - self.p_min
    }

    /// Returns the center point.
    pub fn center(&self) -> Point3<T> {
        (self.p_min + self.p_max) * T::lit(0.5)
    }

    /// Checks if `p` is inside or on the boundary.
    pub fn inside(&self, p: Point3<T>) -> bool {
        p.x >= self.p_min.x
            && p.x <= self.p_max.x
            && p.y >= self.p_min.y
            && p.y <= self.p_max.y
            && p.z >= self.p_min.z
            && p.z <= self.p_max.z
    }

    /// Returns corner `i` in `0..8`, bit `k` of `i` picking `p_max` on axis `k`.
    pub fn corner(&self, i: usize) -> Point3<T> {
        let pick = |axis: usize| {
            if i & (1 << axis) == 0 {
                self.p_min[axis]
            } else {
                self.p_max[axis]
            }
        };
        Point3::new(pick(0), pick(1), pick(2))
    }

    /// Slab test against `ray`.
    ///
    /// Returns the parametric entry and exit distances, clamping the entry to 0
    /// when the ray starts inside. `None` if the ray misses or the bounds lie
    /// entirely behind it.
    pub fn intersect_p(&self, ray: &Ray<T>) -> Option<(T, T)> {
        if self.is_empty() {
            return None;
        }
        let inv_d = ray.inv_d();
        let mut t0 = T::zero();
        let mut t1 = T::infinity();
        for axis in 0..3 {
            let near = (self.p_min[axis] - ray.o[axis]) * inv_d[axis];
            let far = (self.p_max[axis] - ray.o[axis]) * inv_d[axis];
            let (near, far) = if near > far { (far, near) } else { (near, far) };
            // Comparisons are written so a NaN slab (0 * inf) leaves the interval as is
            if near > t0 {
                t0 = near;
            }
            if far < t1 {
                t1 = far;
            }
            if t0 > t1 {
                return None;
            }
        }
        Some((t0, t1))
    }
}

impl<T> Default for Bounds3<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> AbsDiffEq for Bounds3<T>
where
    T: FloatValueType,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.p_min.abs_diff_eq(&other.p_min, epsilon) && self.p_max.abs_diff_eq(&other.p_max, epsilon)
    }
}

impl<T> RelativeEq for Bounds3<T>
where
    T: FloatValueType,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.p_min.relative_eq(&other.p_min, epsilon, max_relative)
            && self.p_max.relative_eq(&other.p_max, epsilon, max_relative)
    }
}
