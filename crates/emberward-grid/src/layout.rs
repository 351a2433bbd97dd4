//! Axial to world-space conversion (pointy-top layout).
//!
//! Used by presentation queries only; simulation rules never depend on
//! world-space positions.

use glam::Vec2;

use emberward_core::types::Hex;

/// World-space size of one hex (center to corner).
pub const HEX_SIZE: f32 = 1.0;

/// Center of a hex in world space.
pub fn hex_to_world(hex: Hex) -> Vec2 {
    let q = hex.q as f32;
    let r = hex.r as f32;
    let x = HEX_SIZE * (3.0_f32.sqrt() * q + 3.0_f32.sqrt() / 2.0 * r);
    let y = HEX_SIZE * (1.5 * r);
    Vec2::new(x, y)
}

/// Interpolated world position between two hex centers (projectiles).
pub fn lerp_world(from: Hex, to: Hex, t: f32) -> Vec2 {
    hex_to_world(from).lerp(hex_to_world(to), t.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_origin() {
        assert_eq!(hex_to_world(Hex::ORIGIN), Vec2::ZERO);
    }

    #[test]
    fn test_neighbor_spacing_is_uniform() {
        let center = hex_to_world(Hex::ORIGIN);
        for d in 0..6u8 {
            let n = hex_to_world(Hex::ORIGIN.neighbor(d));
            let spacing = center.distance(n);
            assert!(
                (spacing - 3.0_f32.sqrt() * HEX_SIZE).abs() < 1e-4,
                "direction {d} spacing {spacing}"
            );
        }
    }

    #[test]
    fn test_lerp_world_clamps() {
        let a = Hex::ORIGIN;
        let b = Hex::new(1, 0);
        assert_eq!(lerp_world(a, b, -1.0), hex_to_world(a));
        assert_eq!(lerp_world(a, b, 2.0), hex_to_world(b));
        let mid = lerp_world(a, b, 0.5);
        assert!((mid - (hex_to_world(a) + hex_to_world(b)) / 2.0).length() < 1e-6);
    }
}
