//! ARGB8888 color constants and packing helpers.

pub const BACKGROUND: u32 = 0xFF101014;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const BLACK: u32 = 0xFF000000;

/// Packs RGB bytes into an opaque ARGB8888 pixel.
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Packs a single intensity into an opaque gray ARGB8888 pixel.
#[inline]
pub const fn grayscale(level: u8) -> u32 {
    pack_rgb(level, level, level)
}
