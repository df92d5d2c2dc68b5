//! Decoder availability check.
//!
//! The imaging capability is a compile-time dependency, so the only thing
//! left to verify at run time is that a decoder for the input's format was
//! actually compiled into this build.

use std::path::Path;

use image::ImageFormat;
use tracing::debug;

use crate::error::IconError;

/// Check that the input's format is recognized and that a decoder for it
/// is enabled in this build.
pub fn ensure_decoder(input: &Path) -> crate::Result<ImageFormat> {
    let format = ImageFormat::from_path(input)?;
    if !format.reading_enabled() {
        return Err(IconError::DecoderUnavailable { format });
    }
    debug!("Decoder available for {format:?}");
    Ok(format)
}
