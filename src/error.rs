//! Error types for charset decoding and page rendering

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or decoding a charset ROM.
#[derive(Debug, Error)]
pub enum CharsetError {
    #[error("charset data too short: needed {needed} bytes, got {available}")]
    InsufficientInput { needed: usize, available: usize },
    #[error("failed to read charset: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while rasterizing glyphs or emitting output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode glyph {index} as PNG: {source}")]
    PngEncode {
        index: usize,
        source: image::ImageError,
    },
    #[error("output path unavailable: {}: {source}", .path.display())]
    OutputPathUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write page: {0}")]
    Io(#[from] std::io::Error),
}
