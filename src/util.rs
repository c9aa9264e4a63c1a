//! Small shared numeric helpers used throughout the narrow-phase core.

use glam::Vec2;

/// 2D cross product (the z-component of the 3D cross of `a` and `b`).
///
/// Spelled out as a free function, matching `SPEC_FULL.md`'s notation, rather than relying
/// on callers to remember which operand order `Vec2::perp_dot` takes.
#[inline]
pub(crate) fn cross(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b)
}
