//! ARGB8888 color helpers and the demo palette.

use crate::math::Vec4;

pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const CHECKER_LIGHT: u32 = 0xFFE0E0E0;
pub const CHECKER_DARK: u32 = 0xFF6A4A2A;

pub const WALL: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);
pub const PLAYER: Vec4 = Vec4::new(1.0, 1.0, 0.0, 1.0);

/// Unpacks ARGB8888 into an RGBA vector with components in [0, 1].
#[inline]
pub fn unpack_color(color: u32) -> Vec4 {
    let channel = |shift: u32| ((color >> shift) & 0xFF) as f32 / 255.0;
    Vec4::new(channel(16), channel(8), channel(0), channel(24))
}

/// Packs an RGBA vector (components clamped to [0, 1]) into ARGB8888.
#[inline]
pub fn pack_color(color: Vec4) -> u32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (channel(color.w) << 24) | (channel(color.x) << 16) | (channel(color.y) << 8) | channel(color.z)
}
