use image::{GrayImage, Luma, RgbImage};
use imageproc::{
    contrast::{threshold, ThresholdType},
    distance_transform::Norm,
    morphology::{close, open},
};
use tracing::debug;

use crate::{
    color::{grayscale, rgb_to_hsv},
    constants::*,
};

/// Binary foreground mask (255 = garment) for contour analysis.
///
/// Bright garments are isolated by darkness against a light background,
/// everything else by a hue band around the dominant color.
pub fn foreground_mask(image: &RgbImage, dominant: Option<[u8; 3]>) -> GrayImage {
    match dominant {
        Some(rgb) if rgb.iter().all(|&c| c > BRIGHT_DOMINANT_MIN_CHANNEL) => {
            debug!("Segmenting bright garment by gray level");
            dark_foreground(image, BRIGHT_FOREGROUND_THRESHOLD)
        }
        Some(rgb) => {
            let mask = hue_band(image, rgb_to_hsv(rgb).h);
            close(&open(&mask, Norm::LInf, MORPH_RADIUS), Norm::LInf, MORPH_RADIUS)
        }
        None => dark_foreground(image, FALLBACK_FOREGROUND_THRESHOLD),
    }
}

/// Pixels at or below `level` in gray
pub fn dark_foreground(image: &RgbImage, level: u8) -> GrayImage {
    let mut mask = threshold(&grayscale(image), level, ThresholdType::Binary);
    image::imageops::invert(&mut mask);
    mask
}

/// Pixels whose hue lies within the tolerance band around `hue`
pub fn hue_band(image: &RgbImage, hue: u8) -> GrayImage {
    let hue = hue as i32;
    let low = (hue - HUE_TOLERANCE).max(0);
    let high = (hue + HUE_TOLERANCE).min(HUE_MAX);

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let hsv = rgb_to_hsv(image.get_pixel(x, y).0);
        let inside = (low..=high).contains(&(hsv.h as i32)) && hsv.s >= MIN_SATURATION && hsv.v >= MIN_VALUE;
        Luma([if inside { 255 } else { 0 }])
    })
}
