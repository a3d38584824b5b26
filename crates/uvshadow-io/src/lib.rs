//! uvshadow-io - Raster file I/O
//!
//! A thin bridge between [`Raster`] and files on disk, for the external
//! layer that persists captures and derived artifacts. Any format the
//! `image` crate can decode is accepted on read; the output format is
//! inferred from the file extension on write. Pixels travel as RGBA8 in
//! both directions, matching the raster's native layout.

mod error;

pub use error::{IoError, IoResult};

use std::path::Path;
use uvshadow_core::Raster;

/// Read an image file into a raster.
///
/// # Errors
///
/// Fails when the file cannot be opened or decoded, or when the decoded
/// frame has no usable pixel buffer.
pub fn read_raster(path: impl AsRef<Path>) -> IoResult<Raster> {
    let decoded = image::open(path.as_ref()).map_err(|e| IoError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(Raster::from_rgba_bytes(w, h, rgba.as_raw())?)
}

/// Write a raster to an image file.
///
/// The format is chosen from the path's extension (e.g. `.png`, `.jpg`).
///
/// # Errors
///
/// Fails when the raster cannot be encoded or the file cannot be written.
pub fn write_raster(path: impl AsRef<Path>, img: &Raster) -> IoResult<()> {
    let buffer = image::RgbaImage::from_raw(img.width(), img.height(), img.to_rgba_bytes())
        .ok_or_else(|| IoError::Encode("raster buffer does not match dimensions".into()))?;
    buffer
        .save(path.as_ref())
        .map_err(|e| IoError::Encode(e.to_string()))?;
    Ok(())
}
