//! Shape definitions consumed by the narrow-phase core.
//!
//! Shapes carry already-transformed, world-space geometry. This crate does not own body
//! construction, transform caching, or broad-phase culling — those are external
//! collaborators (`SPEC_FULL.md` §1).

use glam::Vec2;

/// Stable per-shape identity used to derive cross-frame-stable contact hashes (§4.E).
/// Owned and assigned by the caller; never derived from memory addresses or array slots,
/// both of which are free to change frame to frame.
pub type ShapeId = u32;

/// Discriminant used to put a shape pair into canonical order before dispatch.
/// `collide_shapes` requires `shape_type(a) <= shape_type(b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShapeKind {
    Circle,
    Segment,
    Polygon,
}

#[derive(Debug, Clone)]
pub struct Circle {
    pub id: ShapeId,
    pub body_position: Vec2,
    pub center: Vec2,
    pub radius: f32,
}

/// A one-sided or two-sided line segment. `tangent_a`/`tangent_b` configure one-way
/// rejection at the corresponding endpoint (§4.G) — `None` leaves that end unfiltered.
#[derive(Debug, Clone)]
pub struct Segment {
    pub id: ShapeId,
    pub body_position: Vec2,
    /// Endpoints `[a, b]`, world space.
    pub points: [Vec2; 2],
    pub radius: f32,
    /// Unit normal, independent of travel direction along the segment.
    pub normal: Vec2,
    pub tangent_a: Option<Vec2>,
    pub tangent_b: Option<Vec2>,
}

impl Segment {
    pub fn a(&self) -> Vec2 {
        self.points[0]
    }

    pub fn b(&self) -> Vec2 {
        self.points[1]
    }
}

/// A convex polygon, vertices wound counter-clockwise, `normals[i]` the outward normal of
/// the edge from `vertices[i]` to `vertices[(i + 1) % len]`.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub id: ShapeId,
    pub body_position: Vec2,
    pub vertices: Vec<Vec2>,
    pub normals: Vec<Vec2>,
    pub radius: f32,
}

#[derive(Debug, Clone)]
pub enum Shape {
    Circle(Circle),
    Segment(Segment),
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Circle(c) => c.id,
            Shape::Segment(s) => s.id,
            Shape::Polygon(p) => p.id,
        }
    }

    pub fn body_position(&self) -> Vec2 {
        match self {
            Shape::Circle(c) => c.body_position,
            Shape::Segment(s) => s.body_position,
            Shape::Polygon(p) => p.body_position,
        }
    }

    pub fn radius(&self) -> f32 {
        match self {
            Shape::Circle(c) => c.radius,
            Shape::Segment(s) => s.radius,
            Shape::Polygon(p) => p.radius,
        }
    }

    /// Vertex set consulted by GJK support mapping (§4.A). Circles never reach this path:
    /// dispatch (§4.G) resolves any pair involving a circle analytically before GJK runs.
    pub(crate) fn support_vertices(&self) -> &[Vec2] {
        match self {
            Shape::Circle(_) => &[],
            Shape::Segment(s) => &s.points,
            Shape::Polygon(p) => &p.vertices,
        }
    }
}
