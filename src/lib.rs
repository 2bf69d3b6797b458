//! # Frameloop
//!
//! Assemble a directory of still images into a single animated GIF. Your
//! filesystem is the data source: every supported image directly inside the
//! input directory becomes one frame, ordered by filename or by modification
//! time.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! Frameloop is a linear pipeline. Each stage either produces the input for
//! the next or fails the whole run:
//!
//! ```text
//! 1. Scan    input dir   →  ordered candidate list   (filter + sort)
//! 2. Decode  candidates  →  normalized frames        (RGB8, uniform size)
//! 3. Encode  frames      →  output.gif               (delay + loop count)
//! ```
//!
//! There is no skip-and-continue mode: a single corrupt frame aborts the run
//! before any output becomes visible. This is deliberate — a timelapse with a
//! silently missing frame is worse than no timelapse.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — enumerates candidate files, filters by extension, sorts |
//! | [`frame`] | Stage 2 — decodes each candidate, flattens color mode, resizes |
//! | [`encode`] | Stage 3 — writes all frames as one animated GIF, atomically |
//! | [`assemble`] | Runs the pipeline end to end, produces an [`assemble::AssemblyReport`] |
//! | [`config`] | [`config::AnimationConfig`], sort modes, `frameloop.toml` loading |
//! | [`output`] | CLI status-line formatting — pure `format_*` + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## First Frame Sets the Canvas
//!
//! The first frame *in sort order* establishes the output dimensions; every
//! later frame is stretch-resized (Lanczos3) to match, distorting aspect if
//! sources disagree. No letterboxing, no cropping. Under `--sort mtime` the
//! canvas is therefore whichever file is oldest — surprising but kept, since
//! downstream tooling depends on it.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, resampling, and GIF encoding all go through the `image` crate —
//! no ImageMagick, no FFmpeg, no system dependencies. The binary is fully
//! self-contained.
//!
//! ## Parallel Decode, Sequential Semantics
//!
//! Candidates decode on a rayon pool, but results land in sort-order
//! positions and the first *in-order* failure is the one reported. Output is
//! byte-identical to a sequential run.
//!
//! ## Whole-Set Memory Model
//!
//! Every decoded frame stays in memory until the final encode, so peak usage
//! is the sum of all decoded pixel buffers. That is the real scaling limit of
//! this tool; for directories that exceed RAM, use something stream-based.

pub mod assemble;
pub mod config;
pub mod encode;
pub mod frame;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
