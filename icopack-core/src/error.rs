use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the icon conversion pipeline.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("size list is empty (need at least one size)")]
    EmptySizeList,

    #[error("invalid icon size: {0} (must be 1..=256)")]
    InvalidSize(u32),

    #[error("no decoder for {format:?} is enabled in this build")]
    DecoderUnavailable { format: image::ImageFormat },

    #[error("not a valid ICO file: {reason}")]
    MalformedIco { reason: String },

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
