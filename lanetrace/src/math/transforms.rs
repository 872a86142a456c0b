use super::{common::FloatValueType, matrix::Matrix4x4, vector::Vec3, Transform};

/// Creates a new `Transform` that is a translation by `delta`.
pub fn translation<T>(delta: Vec3<T>) -> Transform<T>
where
    T: FloatValueType,
{
    let mut m = Matrix4x4::identity();
    let mut m_inv = Matrix4x4::identity();
    for i in 0..3 {
        m.m[i][3] = delta[i];
        m_inv.m[i][3] = -delta[i];
    }
    Transform::new_full(m, m_inv)
}

/// Creates a new `Transform` that is a scaling by `x`, `y` and `z`.
///
/// Returns `None` if any of the factors is zero.
pub fn scale<T>(x: T, y: T, z: T) -> Option<Transform<T>>
where
    T: FloatValueType,
{
    if x == T::zero() || y == T::zero() || z == T::zero() {
        return None;
    }
    let mut m = Matrix4x4::identity();
    let mut m_inv = Matrix4x4::identity();
    for (i, s) in [x, y, z].into_iter().enumerate() {
        m.m[i][i] = s;
        m_inv.m[i][i] = s.recip();
    }
    Some(Transform::new_full(m, m_inv))
}

/// Creates a new `Transform` that is a uniform scaling by `s`.
pub fn uniform_scale<T>(s: T) -> Option<Transform<T>>
where
    T: FloatValueType,
{
    scale(s, s, s)
}

// Rotations are orthonormal so the inverse is the transpose
fn from_rotation<T>(r: [[T; 3]; 3]) -> Transform<T>
where
    T: FloatValueType,
{
    let mut m = Matrix4x4::identity();
    for (row, r_row) in r.iter().enumerate() {
        m.m[row][..3].copy_from_slice(r_row);
    }
    Transform::new_full(m, m.transposed())
}

/// Creates a new `Transform` that is a rotation of `theta` radians around the x-axis.
pub fn rotation_x<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    let (s, c) = theta.sin_cos();
    let (o, z) = (T::one(), T::zero());
    from_rotation([[o, z, z], [z, c, -s], [z, s, c]])
}

/// Creates a new `Transform` that is a rotation of `theta` radians around the y-axis.
pub fn rotation_y<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    let (s, c) = theta.sin_cos();
    let (o, z) = (T::one(), T::zero());
    from_rotation([[c, z, s], [z, o, z], [-s, z, c]])
}

/// Creates a new `Transform` that is a rotation of `theta` radians around the z-axis.
pub fn rotation_z<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    let (s, c) = theta.sin_cos();
    let (o, z) = (T::one(), T::zero());
    from_rotation([[c, -s, z], [s, c, z], [z, z, o]])
}

/// Creates a new `Transform` that is a rotation of `theta` radians around `axis`.
pub fn rotation<T>(theta: T, axis: Vec3<T>) -> Transform<T>
where
    T: FloatValueType,
{
    // Rodrigues' rotation formula
    let a = axis.normalized();
    let (s, c) = theta.sin_cos();
    let t = T::one() - c;
    from_rotation([
        [t * a.x * a.x + c, t * a.x * a.y - s * a.z, t * a.x * a.z + s * a.y],
        [t * a.x * a.y + s * a.z, t * a.y * a.y + c, t * a.y * a.z - s * a.x],
        [t * a.x * a.z - s * a.y, t * a.y * a.z + s * a.x, t * a.z * a.z + c],
    ])
}
