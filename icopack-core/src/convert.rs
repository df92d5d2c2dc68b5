//! Resize-and-pack: one raster source in, one multi-resolution ICO out.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::ExtendedColorType;
use tracing::{debug, info};

use crate::error::IconError;
use crate::sizes::SizeList;

/// Summary of a successful conversion, for the caller's status report.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub source_width: u32,
    pub source_height: u32,
    /// Sizes written, in request order.
    pub sizes: Vec<u32>,
    pub output: PathBuf,
}

/// Convert `input` into a multi-resolution ICO at `output`.
///
/// The source is decoded once and resampled to an exact `s × s` square for
/// each entry of `sizes` with a Lanczos3 filter. Aspect ratio is not
/// preserved: a non-square source is distorted to fit. All variants are
/// encoded jointly into one container, each frame PNG-compressed and
/// tagged with its own dimensions.
///
/// On failure no cleanup is attempted; a partially written `output` may
/// remain.
pub fn convert(input: &Path, output: &Path, sizes: &SizeList) -> crate::Result<ConversionReport> {
    if !input.exists() {
        return Err(IconError::InputNotFound(input.to_path_buf()));
    }

    let img = image::open(input)?;
    let (source_width, source_height) = (img.width(), img.height());
    debug!(
        "Decoded {} ({source_width}×{source_height})",
        input.display()
    );

    let mut frames = Vec::with_capacity(sizes.len());
    for size in sizes.iter() {
        let resized = img.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();
        let (w, h) = resized.dimensions();
        frames.push(IcoFrame::as_png(
            &resized.into_raw(),
            w,
            h,
            ExtendedColorType::Rgba8,
        )?);
        debug!("Resampled {size}×{size} variant");
    }

    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    IcoEncoder::new(writer).encode_images(&frames)?;

    info!(
        "Wrote {} with {} embedded size(s)",
        output.display(),
        frames.len()
    );

    Ok(ConversionReport {
        source_width,
        source_height,
        sizes: sizes.as_slice().to_vec(),
        output: output.to_path_buf(),
    })
}
