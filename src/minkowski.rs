//! Component B: Minkowski-difference point representation and segment-to-origin algebra
//! shared by GJK and EPA.

use glam::Vec2;

use crate::support::SupportPoint;
use crate::CPFLOAT_MIN;

/// A point on the Minkowski difference `B - A`, carrying the two support points it came
/// from so downstream stages can recover world-space contact locations and stable ids.
#[derive(Debug, Clone, Copy)]
pub struct MinkowskiPoint {
    pub a: SupportPoint,
    pub b: SupportPoint,
    pub ab: Vec2,
    /// `(a.index << 8) | b.index`, the per-vertex-pair id packed into the warm-start cache.
    pub id: u16,
}

impl MinkowskiPoint {
    pub(crate) fn new(a: SupportPoint, b: SupportPoint) -> Self {
        let ab = b.p - a.p;
        let id = ((a.index as u16) << 8) | b.index as u16;
        Self { a, b, ab, id }
    }
}

/// Symmetric `[-1, 1]` barycentric parameter of the origin's projection onto segment
/// `(v0, v1)`. `t = -1` is `v0`, `t = 1` is `v1`; see `lerp_t`.
pub(crate) fn closest_t(v0: Vec2, v1: Vec2) -> f32 {
    let delta = v1 - v0;
    let denom = delta.dot(delta);
    if denom < CPFLOAT_MIN {
        return 0.0;
    }
    (-delta.dot(v0 + v1) / denom).clamp(-1.0, 1.0)
}

/// Evaluate the segment `(a, b)` at symmetric parameter `t` (see `closest_t`).
pub(crate) fn lerp_t(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a.lerp(b, (t + 1.0) * 0.5)
}

pub(crate) fn closest_dist2(v0: Vec2, v1: Vec2) -> f32 {
    lerp_t(v0, v1, closest_t(v0, v1)).length_squared()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_t_is_zero_for_origin_on_segment() {
        let t = closest_t(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        assert!((t - 0.0).abs() < 1e-5);
    }

    #[test]
    fn closest_t_clamps_to_endpoints() {
        let t = closest_t(Vec2::new(1.0, 1.0), Vec2::new(2.0, 1.0));
        assert_eq!(t, -1.0);
    }

    #[test]
    fn lerp_t_reproduces_endpoints() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert!((lerp_t(a, b, -1.0) - a).length() < 1e-5);
        assert!((lerp_t(a, b, 1.0) - b).length() < 1e-5);
    }

    #[test]
    fn closest_dist2_matches_point_to_segment_distance() {
        let d2 = closest_dist2(Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.0));
        assert!((d2 - 1.0).abs() < 1e-5);
    }
}
