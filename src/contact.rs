//! Contact output types (§3 `CollisionInfo`, `ContactPoint`).

use glam::Vec2;

/// World-space closest-point result shared by the GJK-separated and EPA-penetrating paths.
/// `d` is negative when the underlying (zero-radius) shapes penetrate, positive when they
/// are apart; `id` packs the two Minkowski-point ids that produced it (§4.H).
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClosestPoints {
    pub pa: Vec2,
    pub pb: Vec2,
    pub n: Vec2,
    pub d: f32,
    pub id: u32,
}

/// A single contact point. `r1`/`r2` are world-space contact positions expressed relative
/// to each shape's owning body, `dist` is signed penetration depth (`<= 0` when touching).
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactPoint {
    pub r1: Vec2,
    pub r2: Vec2,
    pub dist: f32,
    pub hash: u32,
}

/// Output of [`crate::collide_shapes`] (§3, §6).
#[derive(Debug, Clone, Copy)]
pub struct CollisionInfo {
    /// Unit normal pointing from shape `a` toward shape `b`.
    pub n: Vec2,
    /// Number of valid entries in the caller's output contact array, `0..=MAX_CONTACTS_PER_PAIR`.
    pub count: usize,
    /// Warm-start id to pass back into the next frame's `collide_shapes` call for this pair.
    /// `0` means "no cache" (analytic fast paths never populate a GJK simplex to cache).
    pub id: u32,
}
