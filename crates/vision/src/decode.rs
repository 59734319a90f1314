//! Image ingestion from encoded bytes or base64 transport strings.
//!
//! The lenient `decode_*` functions never fail: anything undecodable becomes a
//! black [`PLACEHOLDER_SIZE`] square so downstream stages always get pixels.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::RgbImage;
use tracing::warn;

use crate::{constants::PLACEHOLDER_SIZE, error::Result};

/// Uniform black image substituted for undecodable payloads
pub fn placeholder() -> RgbImage {
    RgbImage::new(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE)
}

/// Decode an encoded image (JPEG, PNG, TIFF)
pub fn try_decode_bytes(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgb8())
}

/// Decode a base64 payload, with or without a `data:<mime>;base64,` prefix
pub fn try_decode_base64(payload: &str) -> Result<RgbImage> {
    let bytes = STANDARD.decode(strip_data_uri(payload).trim())?;
    try_decode_bytes(&bytes)
}

pub fn decode_bytes(bytes: &[u8]) -> RgbImage {
    try_decode_bytes(bytes).unwrap_or_else(|e| {
        warn!(error = %e, len = bytes.len(), "Image decode failed, using placeholder");
        placeholder()
    })
}

pub fn decode_base64(payload: &str) -> RgbImage {
    try_decode_base64(payload).unwrap_or_else(|e| {
        warn!(error = %e, len = payload.len(), "Base64 image decode failed, using placeholder");
        placeholder()
    })
}

/// Segment after the first comma, or the whole payload when there is none
fn strip_data_uri(payload: &str) -> &str {
    match payload.split_once(',') {
        Some((_, rest)) => rest.split(',').next().unwrap_or(rest),
        None => payload,
    }
}
