//! Animated GIF encoding.
//!
//! Stage 3 of the assembly pipeline. Writes every frame, in order, into one
//! GIF with a uniform per-frame delay and a loop count.
//!
//! ## Container Mapping
//!
//! | Setting | GIF field |
//! |---------|-----------|
//! | `duration_ms` | per-frame delay, stored in centiseconds (rounded) |
//! | `loop_count` 0 | Netscape loop extension, infinite |
//! | `loop_count` N | Netscape loop extension, N plays |
//!
//! Each frame is palette-quantized by the encoder; quantization shrinks the
//! file but never reorders frames or changes timing.
//!
//! ## Atomic Replace
//!
//! Frames encode into a dot-prefixed staging file in the destination
//! directory, renamed over the target on success. A failed run removes the
//! staging file and leaves whatever was previously at the destination
//! untouched — there is never a half-written GIF at the target path.

use crate::frame::Frame;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("failed to create output at {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("GIF encoding failed for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to move output into place at {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write `frames` as one animated GIF at `path`.
///
/// Consumes the frames — each pixel buffer is handed to the encoder and
/// dropped as soon as its frame is written.
pub fn write_gif(
    frames: Vec<Frame>,
    path: &Path,
    duration_ms: u32,
    loop_count: u16,
) -> Result<(), EncodeError> {
    let staging = staging_path(path);

    let result = encode_into(&staging, path, frames, duration_ms, loop_count).and_then(|()| {
        fs::rename(&staging, path).map_err(|source| EncodeError::Persist {
            path: path.to_path_buf(),
            source,
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

/// Staging file beside the destination, so the final rename never crosses a
/// filesystem boundary.
fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("frameloop"));
    let mut staged = OsString::from(".");
    staged.push(file_name);
    staged.push(".partial");
    path.with_file_name(staged)
}

fn encode_into(
    staging: &Path,
    destination: &Path,
    frames: Vec<Frame>,
    duration_ms: u32,
    loop_count: u16,
) -> Result<(), EncodeError> {
    // Errors name the destination, not the staging file — that is the path
    // the user asked for.
    let file = File::create(staging).map_err(|source| EncodeError::Create {
        path: destination.to_path_buf(),
        source,
    })?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));

    let repeat = match loop_count {
        0 => Repeat::Infinite,
        n => Repeat::Finite(n),
    };
    encoder
        .set_repeat(repeat)
        .map_err(|source| EncodeError::Encode {
            path: destination.to_path_buf(),
            source,
        })?;

    for frame in frames {
        let delay = Delay::from_numer_denom_ms(duration_ms, 1);
        // The GIF encoder wants RGBA buffers; frames are opaque RGB8, so the
        // added alpha channel is uniformly 255.
        let rgba = DynamicImage::ImageRgb8(frame.pixels).to_rgba8();
        encoder
            .encode_frame(image::Frame::from_parts(rgba, 0, 0, delay))
            .map_err(|source| EncodeError::Encode {
                path: destination.to_path_buf(),
                source,
            })?;
    }

    Ok(())
}
