//! Packed ARGB8888 color helpers.
//!
//! Shading happens in linear `[0, 1]` RGB stored in a [`Vec3`]; the frame
//! buffer and textures store packed `0xAARRGGBB` words.

use crate::math::Vec3;

pub const BLACK: u32 = 0xFF000000;
pub const MAGENTA: u32 = 0xFFFF00FF;

/// Packs `[0, 1]` channels into ARGB8888. Values outside the range are clamped.
#[inline]
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
    (to_byte(a) << 24) | (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
}

#[inline]
pub fn pack_rgb(color: Vec3) -> u32 {
    pack_color(color.x, color.y, color.z, 1.0)
}

/// Unpacks the RGB channels of an ARGB8888 word into `[0, 1]`.
#[inline]
pub fn unpack_rgb(color: u32) -> Vec3 {
    Vec3::new(
        ((color >> 16) & 0xFF) as f32 / 255.0,
        ((color >> 8) & 0xFF) as f32 / 255.0,
        (color & 0xFF) as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_clamps_out_of_range_channels() {
        assert_eq!(pack_color(2.0, -1.0, 1.0, 1.0), 0xFFFF00FF);
    }

    #[test]
    fn unpack_reverses_pack() {
        let c = unpack_rgb(pack_color(1.0, 0.0, 0.5, 1.0));
        assert_eq!(c.x, 1.0);
        assert_eq!(c.y, 0.0);
        assert!((c.z - 0.5).abs() < 1.0 / 255.0);
    }
}
