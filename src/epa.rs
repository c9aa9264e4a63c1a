//! Component D: EPA iterator.
//!
//! Expands the Minkowski-difference hull outward, edge by edge, from the triangle GJK
//! handed off until the closest edge to the origin is the true polytope boundary.

use glam::Vec2;

use crate::contact::ClosestPoints;
use crate::gjk::SupportContext;
use crate::minkowski::{closest_dist2, closest_t, lerp_t, MinkowskiPoint};
use crate::util::cross;
use crate::{CPFLOAT_MIN, MAX_EPA_ITERATIONS, WARN_ITERATIONS};

pub(crate) fn run(
    ctx: &SupportContext,
    v0: MinkowskiPoint,
    p: MinkowskiPoint,
    v1: MinkowskiPoint,
) -> ClosestPoints {
    let mut hull = vec![v0, p, v1];
    let mut iter = 0usize;

    loop {
        let (i, j) = closest_edge(&hull);
        let edge_dir = hull[j].ab - hull[i].ab;
        let new_point = ctx.support(edge_dir.perp());

        // Twice the signed area of triangle (hull[i], hull[j], new_point), via the edge's
        // midpoint rather than an endpoint directly, for better numerical balance.
        let midpoint = (hull[i].ab + hull[j].ab) * 0.5;
        let area2 = cross(edge_dir, new_point.ab - midpoint);

        if area2 <= 0.0 || iter >= MAX_EPA_ITERATIONS {
            return closest_points_from_edge(hull[i], hull[j]);
        }

        if iter == WARN_ITERATIONS {
            tracing::warn!(iterations = iter, "epa approaching iteration cap");
        }

        hull = expand(hull, i, new_point);
        iter += 1;
    }
}

fn closest_edge(hull: &[MinkowskiPoint]) -> (usize, usize) {
    let mut best = (0usize, 1usize);
    let mut best_d2 = f32::MAX;
    for i in 0..hull.len() {
        let j = (i + 1) % hull.len();
        let d2 = closest_dist2(hull[i].ab, hull[j].ab);
        if d2 < best_d2 {
            best_d2 = d2;
            best = (i, j);
        }
    }
    best
}

/// Insert `p` right after index `i`, then drop any vertex that is no longer
/// outward-convex relative to its neighbours in the new hull.
fn expand(hull: Vec<MinkowskiPoint>, i: usize, p: MinkowskiPoint) -> Vec<MinkowskiPoint> {
    let mut next = Vec::with_capacity(hull.len() + 1);
    for (k, v) in hull.into_iter().enumerate() {
        next.push(v);
        if k == i {
            next.push(p);
        }
    }

    while next.len() > 3 {
        let len = next.len();
        let mut removed = None;
        for k in 0..len {
            let prev = next[(k + len - 1) % len].ab;
            let cur = next[k].ab;
            let nxt = next[(k + 1) % len].ab;
            if cross(cur - prev, nxt - cur) <= 0.0 {
                removed = Some(k);
                break;
            }
        }
        match removed {
            Some(k) => {
                next.remove(k);
            }
            None => break,
        }
    }

    next
}

fn closest_points_from_edge(v0: MinkowskiPoint, v1: MinkowskiPoint) -> ClosestPoints {
    let delta = v1.ab - v0.ab;
    let raw_normal = -delta.perp();
    let raw_len = raw_normal.length();
    let n = if raw_len > CPFLOAT_MIN { raw_normal / raw_len } else { Vec2::X };

    let t = closest_t(v0.ab, v1.ab);
    let closest = lerp_t(v0.ab, v1.ab, t);
    // `depth = -dot(n, closest)` is positive when the edge touches the origin from the
    // outside (penetration depth). `ClosestPoints.d` is negative when penetrating, so the
    // stored distance negates it back.
    let depth = -n.dot(closest);
    let d = -depth;

    let pa = lerp_t(v0.a.p, v1.a.p, t);
    let pb = lerp_t(v0.b.p, v1.b.p, t);
    ClosestPoints { pa, pb, n, d, id: ((v0.id as u32) << 16) | v1.id as u32 }
}
