//! Euler-angle extraction from head pose matrices.
//!
//! Static-frame y-z-x decomposition of the rotation block, matching
//! transforms3d's `mat2euler(mat, 'syzx')`: the returned angles are rotations
//! about the fixed y, z, and x axes, in that order, in radians.

/// Extract static-frame (y, z, x) Euler angles from an affine pose matrix.
///
/// Only the upper-left 3×3 rotation block is read. Near the z-gimbal
/// singularity (`cos(z) ≈ 0`) the x angle is conventionally zeroed and the
/// y angle absorbs the remaining rotation.
pub fn mat2euler_syzx(m: &[[f64; 4]; 4]) -> [f64; 3] {
    let cy = (m[1][1] * m[1][1] + m[2][1] * m[2][1]).sqrt();
    if cy > 4.0 * f64::EPSILON {
        [
            m[0][2].atan2(m[0][0]),
            (-m[0][1]).atan2(cy),
            m[2][1].atan2(m[1][1]),
        ]
    } else {
        [(-m[2][0]).atan2(m[2][2]), (-m[0][1]).atan2(cy), 0.0]
    }
}
