// glTF is right-handed with cameras looking down -Z. The renderer is
// left-handed and looks down +Z, so imported data is mirrored across the
// XY plane.

use glam::{Quat, Vec3};

// `0.0 - x` keeps zero components at +0, so they print as `0` and not `-0`.
pub fn mirror_z(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0 - v.z)
}

pub fn mirror_z_rotation(q: Quat) -> Quat {
    Quat::from_xyzw(0.0 - q.x, 0.0 - q.y, q.z, q.w)
}

/// A mirror reverses winding. Swapping the last two corners of every
/// triangle keeps front faces front-facing after [`mirror_z`].
pub fn flip_winding(indices: &mut [u32]) {
    for triangle in indices.chunks_exact_mut(3) {
        triangle.swap(1, 2);
    }
}
