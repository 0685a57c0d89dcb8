//! Startup configuration for the demo binaries.

use std::path::PathBuf;

use clap::Parser;

use crate::window::FPS;

pub const DEFAULT_TEXTURE_DIR: &str = "resources/textures";

/// Command-line overrides shared by both demos.
#[derive(Debug, Clone, Default, Parser)]
#[command(version, about)]
pub struct Args {
    /// Directory holding the `*-texture.png` files.
    #[arg(long, value_name = "DIR")]
    pub textures: Option<PathBuf>,

    /// Window width in pixels.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Window height in pixels.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub texture_dir: PathBuf,
    pub fps: u64,
}

impl Config {
    /// The desk scene: 800x600.
    pub fn desk() -> Self {
        Self {
            title: "Desk Scene".to_string(),
            width: 800,
            height: 600,
            texture_dir: PathBuf::from(DEFAULT_TEXTURE_DIR),
            fps: FPS,
        }
    }

    /// The texturing milestone: 600x600.
    pub fn milestone() -> Self {
        Self {
            title: "Texturing Milestone".to_string(),
            width: 600,
            height: 600,
            texture_dir: PathBuf::from(DEFAULT_TEXTURE_DIR),
            fps: FPS,
        }
    }

    /// Applies whatever the command line overrides.
    pub fn with_args(mut self, args: Args) -> Self {
        if let Some(dir) = args.textures {
            self.texture_dir = dir;
        }
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        self
    }

    /// Path of the `<name>-texture.png` file in the texture directory.
    pub fn texture_path(&self, name: &str) -> PathBuf {
        self.texture_dir.join(format!("{name}-texture.png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_override_defaults() {
        let args = Args::try_parse_from(["deskscene", "--width", "1024", "--textures", "assets"])
            .unwrap();
        let config = Config::desk().with_args(args);
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 600);
        assert_eq!(config.texture_path("wood"), PathBuf::from("assets/wood-texture.png"));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(Args::try_parse_from(["deskscene", "--height", "0"]).is_err());
    }

    #[test]
    fn no_args_keeps_milestone_size() {
        let config = Config::milestone().with_args(Args::default());
        assert_eq!((config.width, config.height), (600, 600));
    }
}
