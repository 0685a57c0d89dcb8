//! 2D textures and sampling.
//!
//! Texels are stored as packed ARGB words with row 0 at the **bottom** of the
//! image, so `v = 0` samples the bottom row the same way a GL texture does
//! once the decoded image has been flipped.

use std::path::Path;

use log::debug;

use crate::colors::{self, MAGENTA};
use crate::error::{Error, Result};
use crate::math::{Vec2, Vec3};

/// What happens to texture coordinates outside `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WrapMode {
    #[default]
    Repeat,
    MirroredRepeat,
    ClampToEdge,
    /// Out-of-range texels take [`BORDER_COLOR`].
    ClampToBorder,
}

impl WrapMode {
    /// Maps an integer texel coordinate into `0..size`, or `None` for border.
    #[inline]
    fn resolve(self, i: i64, size: i64) -> Option<i64> {
        match self {
            WrapMode::Repeat => Some(i.rem_euclid(size)),
            WrapMode::MirroredRepeat => {
                let m = i.rem_euclid(2 * size);
                Some(if m >= size { 2 * size - 1 - m } else { m })
            }
            WrapMode::ClampToEdge => Some(i.clamp(0, size - 1)),
            WrapMode::ClampToBorder => (0..size).contains(&i).then_some(i),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    Nearest,
    #[default]
    Linear,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sampler {
    pub wrap: WrapMode,
    pub filter: Filter,
}

pub const BORDER_COLOR: u32 = MAGENTA;

#[derive(Clone, Debug)]
pub struct Texture {
    data: Vec<u32>,
    width: u32,
    height: u32,
    sampler: Sampler,
}

impl Texture {
    /// Decodes an RGB or RGBA image file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| Error::Texture {
            path: path.to_path_buf(),
            source,
        })?;

        let channels = img.color().channel_count();
        if channels != 3 && channels != 4 {
            return Err(Error::UnsupportedChannels {
                path: path.to_path_buf(),
                channels,
            });
        }

        let mut rgba = img.to_rgba8();
        // Image rows run top to bottom; texture rows start at the bottom.
        image::imageops::flip_vertical_in_place(&mut rgba);
        let (width, height) = rgba.dimensions();
        debug!(
            "loaded texture {} ({width}x{height}, {channels} channels)",
            path.display()
        );

        let data = rgba
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();

        Ok(Self {
            data,
            width,
            height,
            sampler: Sampler::default(),
        })
    }

    /// Wraps already packed ARGB texels, bottom row first.
    pub fn from_argb(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != (width as usize) * (height as usize) {
            return Err(Error::TextureSize {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            sampler: Sampler::default(),
        })
    }

    /// Builds a texture from tightly packed RGBA bytes, bottom row first.
    pub fn from_rgba(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(Error::TextureSize {
                width,
                height,
                actual: bytes.len() / 4,
            });
        }
        let data = bytes
            .chunks_exact(4)
            .map(|p| ((p[3] as u32) << 24) | ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | (p[2] as u32))
            .collect();
        Self::from_argb(width, height, data)
    }

    /// Single-texel texture, handy as a fallback and in tests.
    pub fn solid(color: u32) -> Self {
        Self {
            data: vec![color],
            width: 1,
            height: 1,
            sampler: Sampler::default(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn sampler(&self) -> Sampler {
        self.sampler
    }

    pub fn set_sampler(&mut self, sampler: Sampler) {
        self.sampler = sampler;
    }

    pub fn set_wrap(&mut self, wrap: WrapMode) {
        self.sampler.wrap = wrap;
    }

    #[inline]
    fn texel(&self, x: i64, y: i64) -> u32 {
        let wrap = self.sampler.wrap;
        match (
            wrap.resolve(x, self.width as i64),
            wrap.resolve(y, self.height as i64),
        ) {
            (Some(x), Some(y)) => self.data[y as usize * self.width as usize + x as usize],
            _ => BORDER_COLOR,
        }
    }

    /// Samples the texture at `uv` with the texture's current sampler.
    #[inline]
    pub fn sample(&self, uv: Vec2) -> u32 {
        let x = uv.x * self.width as f32;
        let y = uv.y * self.height as f32;

        match self.sampler.filter {
            Filter::Nearest => self.texel(x.floor() as i64, y.floor() as i64),
            Filter::Linear => {
                // Texel centres sit at half-integer coordinates.
                let x = x - 0.5;
                let y = y - 0.5;
                let (x0, y0) = (x.floor(), y.floor());
                let (fx, fy) = (x - x0, y - y0);
                let (x0, y0) = (x0 as i64, y0 as i64);

                // Non-finite coordinates saturate in the casts above.
                let (x1, y1) = (x0.saturating_add(1), y0.saturating_add(1));
                let row0 = lerp_channels(self.texel(x0, y0), self.texel(x1, y0), fx);
                let row1 = lerp_channels(self.texel(x0, y1), self.texel(x1, y1), fx);
                lerp_to_argb(row0, row1, fy)
            }
        }
    }

    /// Samples and unpacks to `[0, 1]` RGB.
    #[inline]
    pub fn sample_rgb(&self, uv: Vec2) -> Vec3 {
        colors::unpack_rgb(self.sample(uv))
    }
}

#[inline]
fn channels(c: u32) -> [f32; 4] {
    [
        ((c >> 24) & 0xFF) as f32,
        ((c >> 16) & 0xFF) as f32,
        ((c >> 8) & 0xFF) as f32,
        (c & 0xFF) as f32,
    ]
}

#[inline]
fn lerp_channels(a: u32, b: u32, t: f32) -> [f32; 4] {
    let (a, b) = (channels(a), channels(b));
    std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t)
}

#[inline]
fn lerp_to_argb(a: [f32; 4], b: [f32; 4], t: f32) -> u32 {
    let c: [u32; 4] = std::array::from_fn(|i| (a[i] + (b[i] - a[i]) * t).round().clamp(0.0, 255.0) as u32);
    (c[0] << 24) | (c[1] << 16) | (c[2] << 8) | c[3]
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: u32 = 0xFFFF0000;
    const BLUE: u32 = 0xFF0000FF;

    /// 2x1 texture: red on the left, blue on the right.
    fn red_blue() -> Texture {
        Texture::from_argb(2, 1, vec![RED, BLUE]).unwrap()
    }

    fn nearest(mut tex: Texture, wrap: WrapMode) -> Texture {
        tex.set_sampler(Sampler {
            wrap,
            filter: Filter::Nearest,
        });
        tex
    }

    #[test]
    fn nearest_picks_the_covering_texel() {
        let tex = nearest(red_blue(), WrapMode::Repeat);
        assert_eq!(tex.sample(Vec2::new(0.25, 0.5)), RED);
        assert_eq!(tex.sample(Vec2::new(0.75, 0.5)), BLUE);
    }

    #[test]
    fn repeat_wraps_coordinates() {
        let tex = nearest(red_blue(), WrapMode::Repeat);
        assert_eq!(tex.sample(Vec2::new(1.25, 0.5)), RED);
        assert_eq!(tex.sample(Vec2::new(-0.25, 0.5)), BLUE);
    }

    #[test]
    fn mirrored_repeat_reflects_every_other_tile() {
        let tex = nearest(red_blue(), WrapMode::MirroredRepeat);
        assert_eq!(tex.sample(Vec2::new(1.25, 0.5)), BLUE);
        assert_eq!(tex.sample(Vec2::new(1.75, 0.5)), RED);
    }

    #[test]
    fn clamp_to_edge_repeats_the_border_texel() {
        let tex = nearest(red_blue(), WrapMode::ClampToEdge);
        assert_eq!(tex.sample(Vec2::new(3.0, 0.5)), BLUE);
        assert_eq!(tex.sample(Vec2::new(-3.0, 0.5)), RED);
    }

    #[test]
    fn clamp_to_border_returns_magenta() {
        let tex = nearest(red_blue(), WrapMode::ClampToBorder);
        assert_eq!(tex.sample(Vec2::new(1.5, 0.5)), BORDER_COLOR);
        assert_eq!(tex.sample(Vec2::new(0.25, 0.5)), RED);
    }

    #[test]
    fn linear_blends_between_texel_centres() {
        let mut tex = red_blue();
        tex.set_wrap(WrapMode::ClampToEdge);
        let mid = colors::unpack_rgb(tex.sample(Vec2::new(0.5, 0.5)));
        assert!((mid.x - 0.5).abs() < 0.01);
        assert!((mid.z - 0.5).abs() < 0.01);
        assert_eq!(tex.sample(Vec2::new(0.25, 0.5)), RED);
    }

    #[test]
    fn v_zero_is_the_bottom_row() {
        // Bottom row red, top row blue.
        let tex = nearest(
            Texture::from_argb(1, 2, vec![RED, BLUE]).unwrap(),
            WrapMode::ClampToEdge,
        );
        assert_eq!(tex.sample(Vec2::new(0.5, 0.1)), RED);
        assert_eq!(tex.sample(Vec2::new(0.5, 0.9)), BLUE);
    }

    #[test]
    fn from_rgba_packs_channels() {
        let tex = Texture::from_rgba(1, 1, &[0x11, 0x22, 0x33, 0x44]).unwrap();
        assert_eq!(tex.sample(Vec2::new(0.5, 0.5)), 0x44112233);
    }

    #[test]
    fn mismatched_size_is_rejected() {
        assert!(matches!(
            Texture::from_argb(2, 2, vec![RED]),
            Err(Error::TextureSize { actual: 1, .. })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Texture::from_file("does/not/exist.png").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.png"));
    }

    fn temp_png(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("deskscene-{}-{name}.png", std::process::id()))
    }

    #[test]
    fn loaded_images_are_flipped_so_v_zero_is_the_bottom() {
        // Image row 0 (the top) is red, row 1 (the bottom) is blue.
        let path = temp_png("flip");
        let img = image::RgbImage::from_fn(1, 2, |_, y| {
            if y == 0 {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 255])
            }
        });
        img.save(&path).unwrap();

        let tex = nearest(Texture::from_file(&path).unwrap(), WrapMode::ClampToEdge);
        std::fs::remove_file(&path).ok();
        assert_eq!((tex.width(), tex.height()), (1, 2));
        assert_eq!(tex.sample(Vec2::new(0.5, 0.1)), BLUE);
        assert_eq!(tex.sample(Vec2::new(0.5, 0.9)), RED);
    }

    #[test]
    fn grayscale_images_are_rejected() {
        let path = temp_png("gray");
        image::GrayImage::from_pixel(2, 2, image::Luma([128])).save(&path).unwrap();

        let result = Texture::from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            result,
            Err(Error::UnsupportedChannels { channels: 1, .. })
        ));
    }

    #[test]
    fn non_finite_uvs_do_not_panic() {
        let tex = red_blue();
        tex.sample(Vec2::new(f32::INFINITY, 0.5));
        tex.sample(Vec2::new(f32::NAN, f32::NEG_INFINITY));
        let tex = nearest(red_blue(), WrapMode::MirroredRepeat);
        tex.sample(Vec2::new(f32::INFINITY, f32::INFINITY));
    }
}
