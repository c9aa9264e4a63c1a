//! Component G: shape-pair dispatch and the analytic fast paths that bypass GJK/EPA
//! entirely for any pair involving a circle.

use std::sync::atomic::{AtomicBool, Ordering};

use glam::Vec2;

use crate::clip::clip;
use crate::contact::{CollisionInfo, ContactPoint};
use crate::edge::{pair, supporting_edge, vertex_hash};
use crate::epa;
use crate::gjk::{self, GjkOutcome, SupportContext};
use crate::shape::{Circle, Polygon, Segment, Shape, ShapeKind};
use crate::warmstart;
use crate::CPFLOAT_MIN;
use crate::MAX_CONTACTS_PER_PAIR;

static SEGMENT_TO_SEGMENT_ENABLED: AtomicBool = AtomicBool::new(false);

/// Opts the process into segment-vs-segment narrow-phase collisions (§4.G, §5, §6).
/// One-shot and idempotent: there is deliberately no corresponding disable, mirroring a
/// startup configuration switch rather than general runtime-mutable state.
pub fn enable_segment_to_segment_collisions() {
    SEGMENT_TO_SEGMENT_ENABLED.store(true, Ordering::Relaxed);
}

fn segment_to_segment_enabled() -> bool {
    SEGMENT_TO_SEGMENT_ENABLED.load(Ordering::Relaxed)
}

/// Narrow-phase entry point (§6). Requires `a.kind() <= b.kind()` (`Circle < Segment <
/// Polygon`) — callers order the pair before calling in, this function does not reorder.
pub fn collide_shapes(
    a: &Shape,
    b: &Shape,
    warm_start_id: u32,
    out_contacts: &mut [ContactPoint; MAX_CONTACTS_PER_PAIR],
) -> CollisionInfo {
    debug_assert!(a.kind() <= b.kind(), "collide_shapes requires shape_type(a) <= shape_type(b)");

    *out_contacts = [ContactPoint::default(); MAX_CONTACTS_PER_PAIR];

    use ShapeKind::*;
    match (a.kind(), b.kind()) {
        (Circle, Circle) => {
            from_analytic(circle_circle(as_circle(a), as_circle(b)), a.body_position(), b.body_position(), out_contacts)
        }
        (Circle, Segment) => {
            from_analytic(circle_segment(as_circle(a), as_segment(b)), a.body_position(), b.body_position(), out_contacts)
        }
        (Circle, Polygon) => {
            from_analytic(circle_polygon(as_circle(a), as_polygon(b)), a.body_position(), b.body_position(), out_contacts)
        }
        (Segment, Segment) => {
            if segment_to_segment_enabled() {
                convex_pair(a, b, warm_start_id, out_contacts)
            } else {
                CollisionInfo { n: Vec2::X, count: 0, id: 0 }
            }
        }
        (Segment, Polygon) | (Polygon, Polygon) => convex_pair(a, b, warm_start_id, out_contacts),
        (Segment, Circle) | (Polygon, Circle) | (Polygon, Segment) => {
            unreachable!("caller violated the shape_type(a) <= shape_type(b) precondition")
        }
    }
}

fn as_circle(s: &Shape) -> &Circle {
    match s {
        Shape::Circle(c) => c,
        _ => unreachable!(),
    }
}

fn as_segment(s: &Shape) -> &Segment {
    match s {
        Shape::Segment(s) => s,
        _ => unreachable!(),
    }
}

fn as_polygon(s: &Shape) -> &Polygon {
    match s {
        Shape::Polygon(p) => p,
        _ => unreachable!(),
    }
}

fn convex_pair(a: &Shape, b: &Shape, warm_start_id: u32, out_contacts: &mut [ContactPoint; MAX_CONTACTS_PER_PAIR]) -> CollisionInfo {
    let ctx = SupportContext { verts_a: a.support_vertices(), verts_b: b.support_vertices() };
    let (v0, v1) = warmstart::seed(&ctx, warm_start_id, a.body_position(), b.body_position());

    let points = match gjk::run(&ctx, v0, v1) {
        GjkOutcome::Separated(points) => points,
        GjkOutcome::Overlapping { v0, p, v1 } => epa::run(&ctx, v0, p, v1),
    };

    let radius_sum = a.radius() + b.radius();
    if points.d > radius_sum {
        return CollisionInfo { n: points.n, count: 0, id: points.id };
    }

    let e1 = supporting_edge(a, points.n);
    let e2 = supporting_edge(b, -points.n);
    let count = clip(&e1, &e2, points.n, points.d, a.body_position(), b.body_position(), out_contacts);

    CollisionInfo { n: points.n, count, id: points.id }
}

/// A single analytic contact, prior to conversion into the body-relative `ContactPoint`
/// representation `collide_shapes` writes out.
struct AnalyticContact {
    n: Vec2,
    point: Vec2,
    /// Signed, `<= 0` when touching (matches `ContactPoint::dist`).
    depth: f32,
    hash: u32,
}

fn from_analytic(
    contact: Option<AnalyticContact>,
    body_a: Vec2,
    body_b: Vec2,
    out_contacts: &mut [ContactPoint; MAX_CONTACTS_PER_PAIR],
) -> CollisionInfo {
    match contact {
        Some(c) => {
            out_contacts[0] = ContactPoint { r1: c.point - body_a, r2: c.point - body_b, dist: c.depth, hash: c.hash };
            CollisionInfo { n: c.n, count: 1, id: 0 }
        }
        None => CollisionInfo { n: Vec2::X, count: 0, id: 0 },
    }
}

fn circle_circle(a: &Circle, b: &Circle) -> Option<AnalyticContact> {
    let delta = b.center - a.center;
    let dist2 = delta.length_squared();
    let radius_sum = a.radius + b.radius;
    if dist2 >= radius_sum * radius_sum {
        return None;
    }

    let dist = dist2.sqrt();
    let n = if dist > CPFLOAT_MIN { delta / dist } else { Vec2::X };
    let point = a.center + n * (a.radius / radius_sum.max(CPFLOAT_MIN));
    Some(AnalyticContact { n, point, depth: dist - radius_sum, hash: pair(vertex_hash(a.id, 0), vertex_hash(b.id, 0)) })
}

fn circle_segment(circle: &Circle, seg: &Segment) -> Option<AnalyticContact> {
    let ab = seg.b() - seg.a();
    let len2 = ab.length_squared();
    let raw_t = if len2 > CPFLOAT_MIN { (circle.center - seg.a()).dot(ab) / len2 } else { 0.0 };
    let t = raw_t.clamp(0.0, 1.0);
    let closest = seg.a().lerp(seg.b(), t);

    let delta = closest - circle.center;
    let dist2 = delta.length_squared();
    let radius_sum = circle.radius + seg.radius;
    if dist2 >= radius_sum * radius_sum {
        return None;
    }

    let dist = dist2.sqrt();
    let n = if dist > CPFLOAT_MIN { delta / dist } else { Vec2::X };
    let point = circle.center + n * (circle.radius / radius_sum.max(CPFLOAT_MIN));
    let depth = dist - radius_sum;

    let (hash, tangent) = if raw_t <= 0.0 {
        (pair(vertex_hash(circle.id, 0), vertex_hash(seg.id, 0)), seg.tangent_a)
    } else if raw_t >= 1.0 {
        (pair(vertex_hash(circle.id, 0), vertex_hash(seg.id, 1)), seg.tangent_b)
    } else {
        (pair(vertex_hash(circle.id, 0), pair(seg.id, 0xFF)), None)
    };

    if let Some(tangent) = tangent {
        if n.dot(tangent) >= 0.0 {
            return None;
        }
    }

    Some(AnalyticContact { n, point, depth, hash })
}

fn circle_polygon(circle: &Circle, poly: &Polygon) -> Option<AnalyticContact> {
    let count = poly.vertices.len();
    let mut best_i = 0usize;
    let mut best_dist = f32::MIN;
    for i in 0..count {
        let d = poly.normals[i].dot(circle.center - poly.vertices[i]);
        if d > best_dist {
            best_dist = d;
            best_i = i;
        }
    }

    if best_dist > circle.radius {
        return None;
    }

    let i0 = best_i;
    let i1 = (best_i + 1) % count;
    let a = poly.vertices[i0];
    let b = poly.vertices[i1];
    let n = poly.normals[i0];

    let ab = b - a;
    let len2 = ab.length_squared();
    let raw_t = if len2 > CPFLOAT_MIN { (circle.center - a).dot(ab) / len2 } else { 0.0 };

    if raw_t <= 0.0 {
        return circle_vertex_contact(circle, a, poly.radius, vertex_hash(poly.id, i0 as u8));
    }
    if raw_t >= 1.0 {
        return circle_vertex_contact(circle, b, poly.radius, vertex_hash(poly.id, i1 as u8));
    }

    let penetration = circle.radius - best_dist;
    if penetration <= 0.0 {
        return None;
    }

    let point = circle.center - n * (circle.radius + penetration * 0.5);
    Some(AnalyticContact {
        n: -n,
        point,
        depth: -penetration,
        hash: pair(vertex_hash(circle.id, 0), pair(poly.id, i0 as u32)),
    })
}

fn circle_vertex_contact(circle: &Circle, vertex: Vec2, other_radius: f32, vertex_hash_val: u32) -> Option<AnalyticContact> {
    let delta = vertex - circle.center;
    let dist2 = delta.length_squared();
    let radius_sum = circle.radius + other_radius;
    if dist2 >= radius_sum * radius_sum {
        return None;
    }

    let dist = dist2.sqrt();
    let n = if dist > CPFLOAT_MIN { delta / dist } else { Vec2::X };
    let point = circle.center + n * (circle.radius / radius_sum.max(CPFLOAT_MIN));
    Some(AnalyticContact {
        n,
        point,
        depth: dist - radius_sum,
        hash: pair(vertex_hash(circle.id, 0), vertex_hash_val),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(id: u32, center: Vec2, radius: f32) -> Shape {
        Shape::Circle(Circle { id, body_position: center, center, radius })
    }

    fn box_polygon(id: u32, center: Vec2, half: f32) -> Shape {
        let v = |dx: f32, dy: f32| center + Vec2::new(dx, dy);
        Shape::Polygon(Polygon {
            id,
            body_position: center,
            vertices: vec![v(-half, -half), v(half, -half), v(half, half), v(-half, half)],
            normals: vec![Vec2::new(0.0, -1.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0)],
            radius: 0.0,
        })
    }

    #[test]
    fn touching_circles_produce_one_contact() {
        let a = circle(1, Vec2::ZERO, 1.0);
        let b = circle(2, Vec2::new(1.5, 0.0), 1.0);
        let mut out = [ContactPoint::default(); MAX_CONTACTS_PER_PAIR];
        let info = collide_shapes(&a, &b, 0, &mut out);
        assert_eq!(info.count, 1);
        assert!(out[0].dist < 0.0);
        assert!((info.n - Vec2::X).length() < 1e-4);
    }

    #[test]
    fn separated_circles_produce_no_contact() {
        let a = circle(1, Vec2::ZERO, 1.0);
        let b = circle(2, Vec2::new(5.0, 0.0), 1.0);
        let mut out = [ContactPoint::default(); MAX_CONTACTS_PER_PAIR];
        let info = collide_shapes(&a, &b, 0, &mut out);
        assert_eq!(info.count, 0);
    }

    #[test]
    fn circle_resting_on_box_produces_contact() {
        let poly = box_polygon(1, Vec2::ZERO, 1.0);
        let c = circle(2, Vec2::new(0.0, 1.5), 1.0);
        let mut out = [ContactPoint::default(); MAX_CONTACTS_PER_PAIR];
        let info = collide_shapes(&c, &poly, 0, &mut out);
        assert_eq!(info.count, 1);
    }

    #[test]
    fn overlapping_boxes_produce_manifold_via_gjk_and_clip() {
        let a = box_polygon(1, Vec2::ZERO, 1.0);
        let b = box_polygon(2, Vec2::new(1.5, 0.0), 1.0);
        let mut out = [ContactPoint::default(); MAX_CONTACTS_PER_PAIR];
        let info = collide_shapes(&a, &b, 0, &mut out);
        assert!(info.count >= 1);
        assert!(out[..info.count].iter().all(|c| c.dist <= 1e-4));
    }

    #[test]
    fn segment_segment_is_disabled_by_default() {
        let seg = |id: u32, y: f32| {
            Shape::Segment(Segment {
                id,
                body_position: Vec2::ZERO,
                points: [Vec2::new(-1.0, y), Vec2::new(1.0, y)],
                radius: 0.0,
                normal: Vec2::Y,
                tangent_a: None,
                tangent_b: None,
            })
        };
        let a = seg(1, 0.0);
        let b = seg(2, 0.0);
        let mut out = [ContactPoint::default(); MAX_CONTACTS_PER_PAIR];
        let info = collide_shapes(&a, &b, 0, &mut out);
        assert_eq!(info.count, 0);
    }
}
