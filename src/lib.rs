//! 2D convex narrow-phase collision detection: GJK separating-distance queries, EPA
//! penetration resolution, and stable contact-manifold generation for circles, segments,
//! and convex polygons.
//!
//! The broad phase, rigid-body integration, and shape/transform construction are external
//! collaborators — this crate only decides, for a pair of already-transformed convex
//! shapes, whether they touch and how (`SPEC_FULL.md` §1, §2).

mod clip;
mod contact;
mod dispatch;
mod edge;
mod epa;
mod gjk;
mod minkowski;
mod shape;
mod support;
mod util;
mod warmstart;

pub use contact::{CollisionInfo, ContactPoint};
pub use dispatch::{collide_shapes, enable_segment_to_segment_collisions};
pub use shape::{Circle, Polygon, Segment, Shape, ShapeId, ShapeKind};

// Re-export glam for convenience, matching the teacher crate's convention of re-exporting
// its core math dependency.
pub use glam;

/// Maximum number of contact points produced per shape pair.
pub const MAX_CONTACTS_PER_PAIR: usize = 2;

/// Iteration cap for the GJK iterator (§4.C).
pub(crate) const MAX_GJK_ITERATIONS: usize = 30;

/// Iteration cap for the EPA iterator (§4.D).
pub(crate) const MAX_EPA_ITERATIONS: usize = 30;

/// Soft warning threshold shared by GJK and EPA: crossing it logs once via `tracing::warn!`
/// but never aborts the iteration (§7, §10.2).
pub(crate) const WARN_ITERATIONS: usize = 20;

/// Small epsilon guarding normalize/divide-by-zero paths throughout the crate.
pub(crate) const CPFLOAT_MIN: f32 = 1e-6;
