use super::{accept_lanes, LaneKernel, LaneVec3, SoaBatch};
use crate::{
    lanes::{LaneReal, LaneVector},
    math::Ray,
    primitive::PrimitiveKind,
    shapes::Triangle,
};

/// Lane version of the Möller-Trumbore solve, returning `(u, v, t)`.
///
/// Written term by term like the scalar one so both round identically.
#[inline]
pub(super) fn planar_coordinates_lanes<T, V>(
    ray: &Ray<T>,
    (ox, oy, oz): (V, V, V),
    (e1x, e1y, e1z): (V, V, V),
    (e2x, e2y, e2z): (V, V, V),
) -> (V, V, V)
where
    T: LaneReal,
    V: LaneVector<T>,
{
    let (dx, dy, dz) = (V::splat(ray.d.x), V::splat(ray.d.y), V::splat(ray.d.z));

    // p = d x e2
    let px = dy * e2z - dz * e2y;
    let py = dz * e2x - dx * e2z;
    let pz = dx * e2y - dy * e2x;
    let inv_det = V::splat(T::one()) / (e1x * px + e1y * py + e1z * pz);

    // s = o - origin
    let sx = V::splat(ray.o.x) - ox;
    let sy = V::splat(ray.o.y) - oy;
    let sz = V::splat(ray.o.z) - oz;
    let u = (sx * px + sy * py + sz * pz) * inv_det;

    // q = s x e1
    let qx = sy * e1z - sz * e1y;
    let qy = sz * e1x - sx * e1z;
    let qz = sx * e1y - sy * e1x;
    let v = (dx * qx + dy * qy + dz * qz) * inv_det;
    let t = (e2x * qx + e2y * qy + e2z * qz) * inv_det;

    (u, v, t)
}

/// Lane storage for triangles: the three vertices.
#[derive(Copy, Clone, Debug)]
pub struct TriangleLanes<T> {
    v0: LaneVec3<T>,
    v1: LaneVec3<T>,
    v2: LaneVec3<T>,
}

/// A batch of up to eight triangles.
pub type TriangleSoa<T> = SoaBatch<T, TriangleLanes<T>>;

impl<T> LaneKernel<T> for TriangleLanes<T>
where
    T: LaneReal,
{
    type Shape = Triangle<T>;

    const KIND: PrimitiveKind = PrimitiveKind::Triangle;

    fn padded() -> Self {
        Self {
            v0: LaneVec3::nan(),
            v1: LaneVec3::nan(),
            v2: LaneVec3::nan(),
        }
    }

    fn store(&mut self, lane: usize, shape: &Triangle<T>) {
        self.v0.set_point(lane, shape.v0);
        self.v1.set_point(lane, shape.v1);
        self.v2.set_point(lane, shape.v2);
    }

    fn pad(&mut self, lane: usize) {
        self.v0.pad(lane);
        self.v1.pad(lane);
        self.v2.pad(lane);
    }

    fn load(&self, lane: usize) -> Triangle<T> {
        Triangle::new(
            self.v0.point(lane),
            self.v1.point(lane),
            self.v2.point(lane),
        )
    }

    fn distances<V>(&self, ray: &Ray<T>) -> V
    where
        V: LaneVector<T>,
    {
        let v0 = self.v0.load::<V>();
        let (v1x, v1y, v1z) = self.v1.load::<V>();
        let (v2x, v2y, v2z) = self.v2.load::<V>();
        let e1 = (v1x - v0.0, v1y - v0.1, v1z - v0.2);
        let e2 = (v2x - v0.0, v2y - v0.1, v2z - v0.2);

        let (u, v, t) = planar_coordinates_lanes(ray, v0, e1, e2);
        let (zero, one) = (V::zero(), V::splat(T::one()));
        let inside = u.cmp_ge(zero) & v.cmp_ge(zero) & (u + v).cmp_le(one);
        t.keep_or_nan(inside & accept_lanes::<T, V>(t))
    }
}
