//! Component H: warm-start seeding.
//!
//! `CollisionInfo.id` already packs the two terminal Minkowski-point ids that produced it
//! (§4.C, §4.D); this module just decodes that id back into a starting 1-simplex, or falls
//! back to a cold-start axis when there is none to decode.

use glam::Vec2;

use crate::gjk::SupportContext;
use crate::minkowski::MinkowskiPoint;
use crate::support::SupportPoint;
use crate::CPFLOAT_MIN;

/// Seeds the initial GJK simplex. `warm_start_id == 0` means "no cache" (first contact, or
/// a fast-path pair that never produced one) and always falls back to cold-start.
pub(crate) fn seed(
    ctx: &SupportContext,
    warm_start_id: u32,
    center_a: Vec2,
    center_b: Vec2,
) -> (MinkowskiPoint, MinkowskiPoint) {
    if warm_start_id != 0 {
        if let Some(seeded) = decode(ctx, warm_start_id) {
            return seeded;
        }
    }

    let raw_axis = (center_a - center_b).perp();
    let len = raw_axis.length();
    let axis = if len > CPFLOAT_MIN { raw_axis / len } else { Vec2::X };
    (ctx.support(axis), ctx.support(-axis))
}

fn decode(ctx: &SupportContext, id: u32) -> Option<(MinkowskiPoint, MinkowskiPoint)> {
    let v0 = decode_point(ctx, (id >> 16) as u16)?;
    let v1 = decode_point(ctx, (id & 0xFFFF) as u16)?;
    Some((v0, v1))
}

/// Stale ids (vertex counts shrank since the id was cached) decode to `None` rather than
/// panicking; GJK still converges correctly from the cold-start seed.
fn decode_point(ctx: &SupportContext, id: u16) -> Option<MinkowskiPoint> {
    let a_index = (id >> 8) as usize;
    let b_index = (id & 0xFF) as usize;
    let a = *ctx.verts_a.get(a_index)?;
    let b = *ctx.verts_b.get(b_index)?;
    Some(MinkowskiPoint::new(
        SupportPoint { p: a, index: a_index as u8 },
        SupportPoint { p: b, index: b_index as u8 },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_id_falls_back_to_cold_start() {
        let a = [Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0), Vec2::new(1.0, 1.0), Vec2::new(-1.0, 1.0)];
        let b = [Vec2::new(3.0, -1.0), Vec2::new(5.0, -1.0), Vec2::new(5.0, 1.0), Vec2::new(3.0, 1.0)];
        let ctx = SupportContext { verts_a: &a, verts_b: &b };
        let (v0, v1) = seed(&ctx, 0, Vec2::ZERO, Vec2::new(4.0, 0.0));
        assert_ne!(v0.ab, v1.ab);
    }

    #[test]
    fn stale_id_decodes_to_none_and_falls_back() {
        let a = [Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)];
        let b = [Vec2::new(3.0, -1.0), Vec2::new(5.0, 1.0)];
        let ctx = SupportContext { verts_a: &a, verts_b: &b };
        // index 7 is out of range for a two-vertex shape
        let bogus_id = (7u32 << 24) | (0u32 << 16) | (7u32 << 8);
        let (v0, v1) = seed(&ctx, bogus_id, Vec2::ZERO, Vec2::new(4.0, 0.0));
        assert_ne!(v0.ab, v1.ab);
    }
}
