//! Conversion from [`Colour`] to a host surface's native 32-bit pixel.

use crate::core::data::colour::Colour;

pub trait PixelFormat: Send + Sync {
    /// Encodes an opaque colour as one native pixel.
    fn encode(&self, colour: Colour) -> u32;
}

/// Bytes R, G, B, A in memory order, as used by `pixels`/wgpu RGBA8 frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rgba8888;

impl PixelFormat for Rgba8888 {
    #[inline]
    fn encode(&self, colour: Colour) -> u32 {
        u32::from_ne_bytes([colour.r, colour.g, colour.b, 255])
    }
}

/// Packed `0xAARRGGBB`, the usual 32-bit software-surface layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argb8888;

impl PixelFormat for Argb8888 {
    #[inline]
    fn encode(&self, colour: Colour) -> u32 {
        0xff00_0000 | (colour.r as u32) << 16 | (colour.g as u32) << 8 | colour.b as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8888_memory_order() {
        let encoded = Rgba8888.encode(Colour {
            r: 10,
            g: 20,
            b: 30,
        });

        assert_eq!(encoded.to_ne_bytes(), [10, 20, 30, 255]);
    }

    #[test]
    fn test_argb8888_packing() {
        let encoded = Argb8888.encode(Colour {
            r: 0x12,
            g: 0x34,
            b: 0x56,
        });

        assert_eq!(encoded, 0xff12_3456);
    }

    #[test]
    fn test_white_and_black() {
        assert_eq!(Argb8888.encode(Colour::WHITE), 0xffff_ffff);
        assert_eq!(Argb8888.encode(Colour::BLACK), 0xff00_0000);
        assert_eq!(Rgba8888.encode(Colour::WHITE), u32::MAX);
    }
}
