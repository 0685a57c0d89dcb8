use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// SDL reports its failures as plain strings.
    #[error("platform error: {0}")]
    Platform(String),

    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("texture {path} has {channels} channels, only RGB and RGBA are supported")]
    UnsupportedChannels { path: PathBuf, channels: u8 },

    #[error("texture data is {actual} texels, expected {width}x{height}")]
    TextureSize {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("invalid mesh parameters: {0}")]
    InvalidMesh(&'static str),

    #[error("scene references unknown mesh `{0}`")]
    UnknownMesh(String),

    #[error("scene references unknown texture `{0}`")]
    UnknownTexture(String),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Platform(message)
    }
}
