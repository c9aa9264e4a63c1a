//! Component E: edge selection and the stable vertex-hash scheme contact ids are built from.

use glam::Vec2;

use crate::shape::{Polygon, Segment, Shape};
use crate::support::support;

/// A supporting edge, carrying per-endpoint hashes (for contact identity) and optional
/// one-way tangents (for segment-end rejection, §4.G).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Edge {
    pub a: Vec2,
    pub b: Vec2,
    pub hash_a: u32,
    pub hash_b: u32,
    pub normal: Vec2,
    pub radius: f32,
    pub tangent_a: Option<Vec2>,
    pub tangent_b: Option<Vec2>,
}

/// Cantor-style pairing function over two 32-bit keys. Deliberately not routed through
/// `std::hash::Hasher`: that algorithm is unspecified across builds and versions, and
/// contact identity must reproduce bit-for-bit from one frame to the next.
pub(crate) fn pair(k1: u32, k2: u32) -> u32 {
    let k1 = k1 as u64;
    let k2 = k2 as u64;
    let sum = k1.wrapping_add(k2);
    let triangular = sum.wrapping_mul(sum.wrapping_add(1)) / 2;
    triangular.wrapping_add(k2) as u32
}

/// Stable hash of a single vertex, combining the owning shape's caller-assigned id with
/// the vertex's index within that shape.
pub(crate) fn vertex_hash(shape_id: u32, vertex_index: u8) -> u32 {
    pair(shape_id, vertex_index as u32)
}

/// Picks the supporting edge of a polygon or segment shape for a given normal, oriented so
/// its outward side faces away from the shape (§4.E). Circles never reach this: dispatch
/// (§4.G) resolves any pair involving a circle analytically.
pub(crate) fn supporting_edge(shape: &Shape, direction: Vec2) -> Edge {
    match shape {
        Shape::Polygon(poly) => polygon_edge(poly, direction),
        Shape::Segment(seg) => segment_edge(seg, direction),
        Shape::Circle(_) => unreachable!("circles are resolved analytically before edge selection"),
    }
}

fn polygon_edge(poly: &Polygon, direction: Vec2) -> Edge {
    let count = poly.vertices.len();
    let support_point = support(&poly.vertices, direction);
    let i1 = support_point.index as usize;
    let i0 = (i1 + count - 1) % count;
    let i2 = (i1 + 1) % count;

    let normal0 = poly.normals[i0];
    let normal1 = poly.normals[i1];

    if normal0.dot(direction) > normal1.dot(direction) {
        Edge {
            a: poly.vertices[i0],
            b: poly.vertices[i1],
            hash_a: vertex_hash(poly.id, i0 as u8),
            hash_b: vertex_hash(poly.id, i1 as u8),
            normal: normal0,
            radius: poly.radius,
            tangent_a: None,
            tangent_b: None,
        }
    } else {
        Edge {
            a: poly.vertices[i1],
            b: poly.vertices[i2],
            hash_a: vertex_hash(poly.id, i1 as u8),
            hash_b: vertex_hash(poly.id, i2 as u8),
            normal: normal1,
            radius: poly.radius,
            tangent_a: None,
            tangent_b: None,
        }
    }
}

fn segment_edge(seg: &Segment, direction: Vec2) -> Edge {
    let hash_a = vertex_hash(seg.id, 0);
    let hash_b = vertex_hash(seg.id, 1);
    if seg.normal.dot(direction) > 0.0 {
        Edge {
            a: seg.a(),
            b: seg.b(),
            hash_a,
            hash_b,
            normal: seg.normal,
            radius: seg.radius,
            tangent_a: seg.tangent_a,
            tangent_b: seg.tangent_b,
        }
    } else {
        Edge {
            a: seg.b(),
            b: seg.a(),
            hash_a: hash_b,
            hash_b: hash_a,
            normal: -seg.normal,
            radius: seg.radius,
            tangent_a: seg.tangent_b,
            tangent_b: seg.tangent_a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_is_deterministic() {
        assert_eq!(pair(7, 3), pair(7, 3));
    }

    #[test]
    fn pairing_distinguishes_operand_order() {
        assert_ne!(pair(7, 3), pair(3, 7));
    }

    #[test]
    fn polygon_edge_picks_face_most_parallel_to_direction() {
        let square = Polygon {
            id: 9,
            body_position: Vec2::ZERO,
            vertices: vec![
                Vec2::new(-1.0, -1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, 1.0),
            ],
            normals: vec![Vec2::new(0.0, -1.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0)],
            radius: 0.0,
        };
        let edge = polygon_edge(&square, Vec2::new(1.0, 0.0));
        assert_eq!(edge.normal, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn segment_edge_reverses_when_normal_opposes_direction() {
        let seg = Segment {
            id: 2,
            body_position: Vec2::ZERO,
            points: [Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)],
            radius: 0.0,
            normal: Vec2::Y,
            tangent_a: None,
            tangent_b: None,
        };
        let edge = segment_edge(&seg, -Vec2::Y);
        assert_eq!(edge.normal, -Vec2::Y);
        assert_eq!(edge.a, seg.b());
        assert_eq!(edge.b, seg.a());
    }
}
