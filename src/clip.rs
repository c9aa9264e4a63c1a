//! Component F: contact clipping.
//!
//! Given two supporting edges and a separating normal, emit 0, 1, or 2 contact points by
//! clipping each edge against the other's endpoints along the perpendicular axis.

use glam::Vec2;

use crate::edge::{pair, Edge};
use crate::util::cross;
use crate::{ContactPoint, CPFLOAT_MIN, MAX_CONTACTS_PER_PAIR};

pub(crate) fn clip(
    e1: &Edge,
    e2: &Edge,
    n: Vec2,
    separation: f32,
    body_a: Vec2,
    body_b: Vec2,
    out: &mut [ContactPoint; MAX_CONTACTS_PER_PAIR],
) -> usize {
    if separation > e1.radius + e2.radius {
        return 0;
    }

    let d_e1a = cross(e1.a, n);
    let d_e1b = cross(e1.b, n);
    let d_e2a = cross(e2.a, n);
    let d_e2b = cross(e2.b, n);

    let mut count = 0;

    if let Some(contact) = clip_pair(e1, e2, n, body_a, body_b, d_e1a, d_e1b, d_e2a, d_e2b, d_e2b, d_e1a, e1.hash_a, e2.hash_b)
    {
        out[count] = contact;
        count += 1;
    }

    if count < MAX_CONTACTS_PER_PAIR {
        if let Some(contact) = clip_pair(e1, e2, n, body_a, body_b, d_e1a, d_e1b, d_e2a, d_e2b, d_e2a, d_e1b, e1.hash_b, e2.hash_a)
        {
            out[count] = contact;
            count += 1;
        }
    }

    count
}

#[allow(clippy::too_many_arguments)]
fn clip_pair(
    e1: &Edge,
    e2: &Edge,
    n: Vec2,
    body_a: Vec2,
    body_b: Vec2,
    d_e1a: f32,
    d_e1b: f32,
    d_e2a: f32,
    d_e2b: f32,
    target_for_e1: f32,
    target_for_e2: f32,
    hash_e1: u32,
    hash_e2: u32,
) -> Option<ContactPoint> {
    let clip_on_e1 = invert_lerp(d_e1a, d_e1b, target_for_e1);
    let clip_on_e2 = invert_lerp(d_e2a, d_e2b, target_for_e2);

    let r1 = n * e1.radius + e1.a.lerp(e1.b, clip_on_e1);
    let r2 = -n * e2.radius + e2.a.lerp(e2.b, clip_on_e2);

    let dist = (r2 - r1).dot(n);
    if dist > 0.0 {
        return None;
    }

    if tangent_blocks(e1, clip_on_e1, n) || tangent_blocks(e2, clip_on_e2, -n) {
        return None;
    }

    Some(ContactPoint { r1: r1 - body_a, r2: r2 - body_b, dist, hash: pair(hash_e1, hash_e2) })
}

/// Applies the same one-way rejection used in circle-segment fast paths (§4.G): a contact
/// landing exactly at an endpoint with a configured tangent is dropped if the normal points
/// outward past that tangent.
fn tangent_blocks(edge: &Edge, clip_t: f32, normal: Vec2) -> bool {
    let tangent = if clip_t <= 0.0 {
        edge.tangent_a
    } else if clip_t >= 1.0 {
        edge.tangent_b
    } else {
        None
    };
    matches!(tangent, Some(t) if normal.dot(t) >= 0.0)
}

fn invert_lerp(a: f32, b: f32, target: f32) -> f32 {
    let span = b - a;
    if span.abs() < CPFLOAT_MIN {
        0.0
    } else {
        ((target - a) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: Vec2, b: Vec2, normal: Vec2) -> Edge {
        Edge { a, b, hash_a: 1, hash_b: 2, normal, radius: 0.0, tangent_a: None, tangent_b: None }
    }

    #[test]
    fn overlapping_edges_produce_two_contacts() {
        let e1 = edge(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), Vec2::Y);
        let e2 = edge(Vec2::new(1.0, -0.5), Vec2::new(-1.0, -0.5), -Vec2::Y);
        let mut out = [ContactPoint::default(); MAX_CONTACTS_PER_PAIR];
        let count = clip(&e1, &e2, Vec2::Y, -0.5, Vec2::ZERO, Vec2::ZERO, &mut out);
        assert_eq!(count, 2);
        for c in &out[..count] {
            assert!(c.dist <= 0.0);
        }
    }

    #[test]
    fn separation_beyond_combined_radius_yields_no_contacts() {
        let e1 = edge(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), Vec2::Y);
        let e2 = edge(Vec2::new(1.0, 5.0), Vec2::new(-1.0, 5.0), -Vec2::Y);
        let mut out = [ContactPoint::default(); MAX_CONTACTS_PER_PAIR];
        let count = clip(&e1, &e2, Vec2::Y, 5.0, Vec2::ZERO, Vec2::ZERO, &mut out);
        assert_eq!(count, 0);
    }

    #[test]
    fn tangent_rejects_contact_at_configured_endpoint() {
        let mut e1 = edge(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), Vec2::Y);
        e1.tangent_a = Some(Vec2::Y);
        let e2 = edge(Vec2::new(-1.2, -0.1), Vec2::new(-1.0, -0.1), -Vec2::Y);
        let mut out = [ContactPoint::default(); MAX_CONTACTS_PER_PAIR];
        let count = clip(&e1, &e2, Vec2::Y, -0.1, Vec2::ZERO, Vec2::ZERO, &mut out);
        assert!(count <= 1);
    }
}
