//! Frame decoding and normalization.
//!
//! Stage 2 of the assembly pipeline. Each [`Candidate`] decodes into a
//! [`Frame`] holding a plain RGB8 buffer:
//!
//! - Alpha-channel sources have their alpha dropped, not composited. A fully
//!   transparent pixel comes out as whatever RGB the file stored there
//!   (typically black). Transparency never survives into the output.
//! - Palette-indexed sources expand through their color table.
//! - Animated GIF inputs contribute their first frame only.
//!
//! Resizing is a stretch to exact target dimensions with Lanczos3 — aspect
//! ratio is the caller's problem, by way of the first-frame-sets-the-canvas
//! rule in [`assemble`](crate::assemble).

use crate::scan::Candidate;
use image::imageops::FilterType;
use image::{ImageReader, RgbImage};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("failed to decode {filename}: {source}")]
pub struct DecodeError {
    /// Bare file name of the offending source.
    pub filename: String,
    pub source: image::ImageError,
}

/// One decoded, normalized image destined for one position in the output.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Three-channel pixel data. Always RGB8, whatever the source mode was.
    pub pixels: RgbImage,
    /// Bare file name of the source, kept for reporting.
    pub file_name: String,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Decode a candidate file into an RGB8 frame.
///
/// Any failure — unreadable file, corrupt data, unsupported sub-format — is
/// terminal for the whole run; there is no skip-and-continue.
pub fn decode(candidate: &Candidate) -> Result<Frame, DecodeError> {
    let decoded = ImageReader::open(&candidate.path)
        .map_err(image::ImageError::from)
        .and_then(|reader| reader.decode())
        .map_err(|source| DecodeError {
            filename: candidate.file_name.clone(),
            source,
        })?;

    Ok(Frame {
        pixels: decoded.to_rgb8(),
        file_name: candidate.file_name.clone(),
    })
}

/// Stretch-resize a frame to exactly `width` x `height` (Lanczos3).
///
/// A frame already at the target size is left untouched.
pub fn resize_to(frame: &mut Frame, width: u32, height: u32) {
    if frame.width() == width && frame.height() == height {
        return;
    }
    frame.pixels = image::imageops::resize(&frame.pixels, width, height, FilterType::Lanczos3);
}
