use image::{imageops::FilterType, RgbImage};
use tracing::debug;
use wardrobe_common::ColorSample;

use super::{
    kmeans::{kmeans, KMeansConfig, Point},
    palette::ColorPalette,
};
use crate::{
    constants::*,
    error::{Result, VisionError},
    traits::ColorExtractor,
};

/// Dominant color from k-means over the background-filtered center crop
#[derive(Debug, Clone, Default)]
pub struct KMeansColorExtractor {
    pub palette: ColorPalette,
    pub config: KMeansConfig,
}

impl KMeansColorExtractor {
    pub fn with_palette(palette: ColorPalette) -> Self {
        Self {
            palette,
            ..Default::default()
        }
    }

    /// Pixels that go into clustering
    pub fn sample_pixels(image: &RgbImage) -> Result<Vec<Point>> {
        let crop = crop_fraction(image, COLOR_CROP_START, COLOR_CROP_END)?;
        let small = image::imageops::resize(&crop, COLOR_SAMPLE_SIZE, COLOR_SAMPLE_SIZE, FilterType::Triangle);

        let kept = drop_background(small.pixels().map(|p| p.0).collect());
        Ok(kept.into_iter().map(|rgb| rgb.map(f64::from)).collect())
    }
}

impl ColorExtractor for KMeansColorExtractor {
    fn extract(&self, image: &RgbImage) -> Result<ColorSample> {
        let pixels = Self::sample_pixels(image)?;
        let clustering = kmeans(&pixels, &self.config)?;
        let centroid = clustering
            .dominant()
            .ok_or_else(|| VisionError::Clustering("no dominant cluster".to_string()))?;

        let rgb = centroid.map(|c| c.round().clamp(0.0, 255.0) as u8);
        let sample = ColorSample::new(rgb, self.palette.name_for(rgb));

        debug!(hex = %sample.hex, name = %sample.name, pixels = pixels.len(), "Extracted dominant color");
        Ok(sample)
    }
}

/// Drop near-white pixels unless fewer than the foreground fraction would remain
pub(crate) fn drop_background(pixels: Vec<[u8; 3]>) -> Vec<[u8; 3]> {
    let foreground: Vec<[u8; 3]> = pixels
        .iter()
        .copied()
        .filter(|rgb| rgb.iter().any(|&c| c < BACKGROUND_MIN_CHANNEL))
        .collect();

    if foreground.len() as f64 > pixels.len() as f64 * MIN_FOREGROUND_FRACTION {
        foreground
    } else {
        pixels
    }
}

/// Crop `[start, end)` of each dimension, truncating to whole pixels
pub(crate) fn crop_fraction(image: &RgbImage, start: f64, end: f64) -> Result<RgbImage> {
    let (w, h) = image.dimensions();
    let (x0, x1) = ((w as f64 * start) as u32, (w as f64 * end) as u32);
    let (y0, y1) = ((h as f64 * start) as u32, (h as f64 * end) as u32);

    if x1 <= x0 || y1 <= y0 {
        return Err(VisionError::EmptyImage);
    }

    Ok(image::imageops::crop_imm(image, x0, y0, x1 - x0, y1 - y0).to_image())
}
