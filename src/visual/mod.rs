mod hash;

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{DynamicImage, Rgb, RgbImage};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::domain::ScreenshotSource;
use crate::rounding::round4;

pub use hash::{ahash, dhash, hamming};

const BLANK_SIZE: u32 = 64;

static DATA_URI_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:image/[^;]+;base64,").expect("valid data uri regex"));

/// Canonical stand-in for missing or undecodable screenshots: a uniform
/// white 64x64 image. Two absent screenshots compare as identical.
pub fn blank_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(
        BLANK_SIZE,
        BLANK_SIZE,
        Rgb([255, 255, 255]),
    ))
}

/// Decodes any accepted screenshot encoding into an image. Decode failures
/// and empty inputs degrade to [`blank_image`]; this never fails.
pub fn load_image(source: &ScreenshotSource) -> DynamicImage {
    match source {
        ScreenshotSource::Absent => blank_image(),
        ScreenshotSource::Bytes(bytes) if bytes.is_empty() => blank_image(),
        ScreenshotSource::Bytes(bytes) => decode_bytes(bytes),
        ScreenshotSource::Encoded(value) => decode_encoded(value.trim()),
    }
}

fn decode_bytes(bytes: &[u8]) -> DynamicImage {
    match image::load_from_memory(bytes) {
        Ok(img) => img,
        Err(err) => {
            warn!(target: "visual", error = %err, "screenshot decode failed; using blank image");
            blank_image()
        }
    }
}

fn decode_encoded(value: &str) -> DynamicImage {
    if value.is_empty() {
        return blank_image();
    }
    if let Some(prefix) = DATA_URI_PREFIX.find(value) {
        return match BASE64.decode(value[prefix.end()..].trim()) {
            Ok(bytes) => decode_bytes(&bytes),
            Err(err) => {
                warn!(target: "visual", error = %err, "invalid base64 in data URI; using blank image");
                blank_image()
            }
        };
    }
    if Path::new(value).exists() {
        return match image::open(value) {
            Ok(img) => img,
            Err(err) => {
                warn!(target: "visual", error = %err, path = value, "screenshot file unreadable; using blank image");
                blank_image()
            }
        };
    }
    // last resort: treat the string as a bare base64 payload
    match BASE64.decode(value) {
        Ok(bytes) => decode_bytes(&bytes),
        Err(_) => blank_image(),
    }
}

/// Perceptual similarity in [0, 1]; 1.0 means visually identical.
///
/// Convex blend of average-hash, difference-hash and global grayscale
/// intensity similarity (0.5 / 0.3 / 0.2).
pub fn perceptual_similarity(prev: &DynamicImage, cur: &DynamicImage) -> f64 {
    let ah = fingerprint_similarity(ahash(prev), ahash(cur));
    let dh = fingerprint_similarity(dhash(prev), dhash(cur));
    let rms = hash::intensity_similarity(prev, cur);
    let combined = 0.5 * ah + 0.3 * dh + 0.2 * rms;
    round4(combined.clamp(0.0, 1.0))
}

fn fingerprint_similarity(a: u64, b: u64) -> f64 {
    1.0 - f64::from(hamming(a, b)) / 64.0
}
