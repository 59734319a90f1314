use image::{GrayImage, Luma, RgbImage};
use imageproc::{
    definitions::Image,
    filter::{gaussian_blur_f32, laplacian_filter},
};
use tracing::debug;

use crate::{
    color::{extractor::crop_fraction, grayscale},
    constants::*,
    error::{Result, VisionError},
    traits::TextureAnalyzer,
    types::TextureSignal,
};

/// Laplacian-variance roughness over the central crop
#[derive(Debug, Clone, Copy, Default)]
pub struct LaplacianTextureAnalyzer;

impl TextureAnalyzer for LaplacianTextureAnalyzer {
    fn analyze(&self, image: &RgbImage) -> Result<TextureSignal> {
        if image.width() == 0 || image.height() == 0 {
            return Err(VisionError::EmptyImage);
        }

        // images too small for a crop are measured whole
        let crop = crop_fraction(image, TEXTURE_CROP_START, TEXTURE_CROP_END).unwrap_or_else(|_| image.clone());
        let gray = grayscale(&crop);

        // imageproc replicates edge pixels rather than reflecting them
        // (OpenCV's BORDER_REFLECT_101), so on small crops the variance can
        // drift slightly near the fabric cutoffs.
        let blurred = gaussian_blur_f32(&gray, TEXTURE_BLUR_SIGMA);
        let signal = TextureSignal {
            variance: response_variance(&laplacian_filter(&blurred)),
            brightness: mean_level(&gray),
        };

        debug!(variance = signal.variance, brightness = signal.brightness, "Measured texture");
        Ok(signal)
    }
}

/// Population variance of the filter response
fn response_variance(response: &Image<Luma<i16>>) -> f64 {
    let n = (response.width() * response.height()) as f64;
    if n == 0.0 {
        return 0.0;
    }
    let mean = response.pixels().map(|p| p.0[0] as f64).sum::<f64>() / n;
    response.pixels().map(|p| (p.0[0] as f64 - mean).powi(2)).sum::<f64>() / n
}

fn mean_level(gray: &GrayImage) -> f64 {
    let n = (gray.width() * gray.height()) as f64;
    if n == 0.0 {
        return 0.0;
    }
    gray.pixels().map(|p| p.0[0] as f64).sum::<f64>() / n
}
