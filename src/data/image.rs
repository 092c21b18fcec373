//! Turns stored digit images into classifier inputs.
//!
//! Images are decoded (BMP or PNG), resized to `side × side` with
//! nearest-neighbour sampling so no grey pixels are invented, and flattened
//! row by row from the top. Pure white is background (0.0); every other
//! colour counts as ink (1.0).

use std::path::Path;

use image::{imageops::FilterType, GenericImageView};

use crate::error::{DigitError, Result};

const WHITE: [u8; 3] = [255, 255, 255];

/// Decodes image bytes into a binary input vector of length `side * side`.
pub fn decode_binary(bytes: &[u8], side: u32) -> Result<Vec<f64>> {
    let img = image::load_from_memory(bytes).map_err(|e| DigitError::Image(e.to_string()))?;
    let img = if img.dimensions() == (side, side) {
        img
    } else {
        img.resize_exact(side, side, FilterType::Nearest)
    };
    let rgb = img.to_rgb8();
    Ok(rgb.pixels().map(|p| if p.0 == WHITE { 0.0 } else { 1.0 }).collect())
}

/// Reads and decodes the image at `path`. See [`decode_binary`].
pub fn decode_binary_file<P: AsRef<Path>>(path: P, side: u32) -> Result<Vec<f64>> {
    let bytes = std::fs::read(path.as_ref())?;
    decode_binary(&bytes, side)
}

#[cfg(test)]
pub(crate) fn encode_bmp(img: &image::RgbImage) -> Vec<u8> {
    let mut cursor = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut cursor, image::ImageOutputFormat::Bmp)
        .unwrap();
    cursor.into_inner()
}
