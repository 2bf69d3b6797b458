//! Shared test utilities: synthetic image fixtures.
//!
//! All fixtures are generated in-process — no binary blobs in the repo.

use crate::frame::Frame;
use crate::scan::Candidate;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;
use std::time::SystemTime;

/// Write a solid-color RGB PNG.
pub fn write_rgb_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(path)
        .unwrap();
}

/// Write a solid-color PNG with an alpha channel.
pub fn write_rgba_png(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(path)
        .unwrap();
}

/// Write a small gradient JPEG with the given dimensions.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Wrap a path in a [`Candidate`] the way discovery would.
pub fn candidate_for(path: &Path) -> Candidate {
    Candidate {
        path: path.to_path_buf(),
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        modified: SystemTime::UNIX_EPOCH,
    }
}

/// Build an in-memory solid-color frame without touching the filesystem.
pub fn solid_frame(name: &str, width: u32, height: u32, color: [u8; 3]) -> Frame {
    Frame {
        pixels: RgbImage::from_pixel(width, height, Rgb(color)),
        file_name: name.to_string(),
    }
}
