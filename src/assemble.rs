//! End-to-end pipeline orchestration.
//!
//! [`assemble`] runs the stage sequence
//! `Discovering → Sorting → Decoding → Encoding → Done`; any stage error
//! transitions straight to failure and nothing is retried or revisited.
//! Errors stay typed ([`AssemblyError`] wraps each stage's own enum) so
//! callers branch on kind, never on message text — only the CLI boundary
//! renders them as strings.

use crate::config::AnimationConfig;
use crate::encode::{self, EncodeError};
use crate::frame::{self, DecodeError, Frame};
use crate::scan::{self, ScanError};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    FrameDecode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Summary of a successful run. Serialized as-is for `--json` output.
#[derive(Debug, Serialize)]
pub struct AssemblyReport {
    pub output_path: PathBuf,
    pub frame_count: usize,
    /// Canonical frame dimensions — the first sorted frame's original size.
    pub width: u32,
    pub height: u32,
}

/// Assemble every qualifying image in `config.input_dir` into an animated
/// GIF at `config.output_path`.
pub fn assemble(config: &AnimationConfig) -> Result<AssemblyReport, AssemblyError> {
    let mut candidates = scan::discover(&config.input_dir)?;
    scan::sort_candidates(&mut candidates, config.sort_mode);

    // Index-preserving scatter/gather: decode in parallel into sort-order
    // positions, then surface the first failure in that order. Keeps both
    // the frame sequence and the reported error identical to a sequential
    // run.
    let results: Vec<Result<Frame, DecodeError>> =
        candidates.par_iter().map(frame::decode).collect();
    let mut frames = Vec::with_capacity(results.len());
    for result in results {
        frames.push(result?);
    }

    // The first frame in sort order fixes the canonical canvas; everything
    // after it is stretched to match.
    let Some(first) = frames.first() else {
        return Err(ScanError::NoImagesFound(config.input_dir.clone()).into());
    };
    let (width, height) = (first.width(), first.height());
    frames
        .par_iter_mut()
        .skip(1)
        .for_each(|f| frame::resize_to(f, width, height));

    let frame_count = frames.len();
    encode::write_gif(
        frames,
        &config.output_path,
        config.frame_duration_ms,
        config.loop_count,
    )?;

    Ok(AssemblyReport {
        output_path: config.output_path.clone(),
        frame_count,
        width,
        height,
    })
}
