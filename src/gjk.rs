//! Component C: GJK iterator.
//!
//! Bisects a 1-simplex across the origin of the Minkowski difference `B - A` until either
//! a separating axis is found (shapes apart) or the simplex encloses the origin (shapes
//! overlap, handed off to EPA).

use glam::Vec2;

use crate::contact::ClosestPoints;
use crate::minkowski::{closest_dist2, closest_t, lerp_t, MinkowskiPoint};
use crate::support::support;
use crate::util::cross;
use crate::{CPFLOAT_MIN, MAX_GJK_ITERATIONS, WARN_ITERATIONS};

/// Supplies Minkowski-difference support points for a shape pair.
pub(crate) struct SupportContext<'a> {
    pub verts_a: &'a [Vec2],
    pub verts_b: &'a [Vec2],
}

impl<'a> SupportContext<'a> {
    pub(crate) fn support(&self, direction: Vec2) -> MinkowskiPoint {
        let a = support(self.verts_a, -direction);
        let b = support(self.verts_b, direction);
        MinkowskiPoint::new(a, b)
    }
}

pub(crate) enum GjkOutcome {
    Separated(ClosestPoints),
    Overlapping { v0: MinkowskiPoint, p: MinkowskiPoint, v1: MinkowskiPoint },
}

pub(crate) fn run(ctx: &SupportContext, mut v0: MinkowskiPoint, mut v1: MinkowskiPoint) -> GjkOutcome {
    let mut iter = 0usize;
    loop {
        if iter >= MAX_GJK_ITERATIONS {
            return GjkOutcome::Separated(closest_points(v0, v1));
        }

        let delta = v1.ab - v0.ab;
        if cross(delta, v0.ab + v1.ab) > 0.0 {
            core::mem::swap(&mut v0, &mut v1);
            continue;
        }

        if iter == WARN_ITERATIONS {
            tracing::warn!(iterations = iter, "gjk approaching iteration cap");
        }

        let t = closest_t(v0.ab, v1.ab);
        let n = if t > -1.0 && t < 1.0 { delta.perp() } else { -lerp_t(v0.ab, v1.ab, t) };

        let p = ctx.support(n);

        if cross(v1.ab - p.ab, v1.ab + p.ab) > 0.0 && cross(v0.ab - p.ab, v0.ab + p.ab) < 0.0 {
            return GjkOutcome::Overlapping { v0, p, v1 };
        }

        let advance = p.ab.dot(n);
        if advance <= v0.ab.dot(n).max(v1.ab.dot(n)) {
            return GjkOutcome::Separated(closest_points(v0, v1));
        }

        if closest_dist2(v0.ab, p.ab) < closest_dist2(p.ab, v1.ab) {
            v1 = p;
        } else {
            v0 = p;
        }
        iter += 1;
    }
}

/// Builds the separated-case `ClosestPoints` from the final 1-simplex.
fn closest_points(v0: MinkowskiPoint, v1: MinkowskiPoint) -> ClosestPoints {
    let t = closest_t(v0.ab, v1.ab);
    let ab = lerp_t(v0.ab, v1.ab, t);
    let dist = ab.length();
    let n = if dist > CPFLOAT_MIN { ab / dist } else { Vec2::X };
    let pa = lerp_t(v0.a.p, v1.a.p, t);
    let pb = lerp_t(v0.b.p, v1.b.p, t);
    ClosestPoints { pa, pb, n, d: dist, id: ((v0.id as u32) << 16) | v1.id as u32 }
}
