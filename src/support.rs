//! Component A: support mapping.

use glam::Vec2;

/// A vertex returned by support mapping, tagged with its index in the owning shape's
/// vertex array so contact hashing (§4.E) and warm-start ids (§4.H) can reference it later.
#[derive(Debug, Clone, Copy)]
pub struct SupportPoint {
    pub p: Vec2,
    pub index: u8,
}

/// Linear-scan support mapping: the vertex farthest along `direction`. Ties are broken
/// toward the first such vertex in iteration order, matching the shape's own winding.
pub(crate) fn support(vertices: &[Vec2], direction: Vec2) -> SupportPoint {
    debug_assert!(!vertices.is_empty(), "support mapping requires at least one vertex");

    let mut best_index = 0usize;
    let mut best_dot = vertices[0].dot(direction);
    for (index, vertex) in vertices.iter().enumerate().skip(1) {
        let d = vertex.dot(direction);
        if d > best_dot {
            best_dot = d;
            best_index = index;
        }
    }

    SupportPoint { p: vertices[best_index], index: best_index as u8 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_picks_farthest_vertex_along_axis() {
        let square = [
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ];
        let s = support(&square, Vec2::X);
        assert!(s.p.x == 1.0);
    }

    #[test]
    fn support_breaks_ties_toward_first_vertex() {
        let two_on_axis = [Vec2::new(1.0, 1.0), Vec2::new(1.0, -1.0)];
        let s = support(&two_on_axis, Vec2::X);
        assert_eq!(s.index, 0);
    }
}
