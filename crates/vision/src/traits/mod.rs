use image::RgbImage;
use wardrobe_common::{Category, ColorSample, Fabric};

use crate::{error::Result, types::TextureSignal};

/// Trait for dominant color extraction
pub trait ColorExtractor: Send + Sync {
    /// Dominant color of the garment, named from a reference palette
    fn extract(&self, image: &RgbImage) -> Result<ColorSample>;
}

/// Trait for silhouette-based category classification
pub trait ShapeClassifier: Send + Sync {
    /// Classify the garment, optionally segmenting around its dominant color
    fn classify(&self, image: &RgbImage, dominant: Option<[u8; 3]>) -> Result<Category>;
}

/// Trait for texture statistics
pub trait TextureAnalyzer: Send + Sync {
    fn analyze(&self, image: &RgbImage) -> Result<TextureSignal>;
}

/// Trait for fabric inference from texture, color and category
pub trait FabricClassifier: Send + Sync {
    /// Must be a pure function of its inputs
    fn classify(&self, texture: TextureSignal, color: &str, category: &Category) -> Fabric;
}
