//! Silhouette-based garment classification.
//!
//! The garment is segmented into a binary mask, its largest outer contour is
//! measured, and an ordered decision tree maps the measurements to a category:
//! small objects (jewelry, watches, clutches) first, then bags, then clothing
//! by checking the waistband, neckline and leg gap of the filled silhouette.

pub mod contour;
pub mod segmentation;

pub use contour::{largest_external_contour, BoundingBox, GarmentContour};
pub use segmentation::{dark_foreground, foreground_mask, hue_band};

use image::RgbImage;
use tracing::debug;
use wardrobe_common::Category;

use crate::{
    constants::*,
    error::Result,
    traits::ShapeClassifier,
    types::{RegionFills, ShapeMetrics},
};

/// Contour-geometry classifier over a color-driven foreground mask
#[derive(Debug, Clone, Copy, Default)]
pub struct ContourShapeClassifier;

/// What the classifier observed about the largest foreground contour
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Silhouette {
    /// The mask has no foreground at all
    Missing,
    /// The contour's bounding box collapsed to zero width or height.
    ///
    /// Traced contours use an inclusive box of at least one pixel, so only
    /// custom measurements produce this.
    Degenerate,
    Measured(ShapeMetrics, RegionFills),
}

impl ContourShapeClassifier {
    pub fn measure(image: &RgbImage, dominant: Option<[u8; 3]>) -> Silhouette {
        let mask = foreground_mask(image, dominant);
        let Some(contour) = largest_external_contour(&mask) else {
            return Silhouette::Missing;
        };

        if contour.bbox.width == 0 || contour.bbox.height == 0 {
            return Silhouette::Degenerate;
        }

        let image_area = image.width() as f64 * image.height() as f64;
        let metrics = ShapeMetrics {
            aspect_ratio: contour.aspect_ratio(),
            relative_area: contour.area / image_area,
            solidity: contour.solidity(),
        };
        let fills = contour.region_fills(&contour.filled_mask(image.width(), image.height()));

        Silhouette::Measured(metrics, fills)
    }
}

impl ShapeClassifier for ContourShapeClassifier {
    fn classify(&self, image: &RgbImage, dominant: Option<[u8; 3]>) -> Result<Category> {
        Ok(classify_silhouette(&Self::measure(image, dominant)))
    }
}

/// Category for a measured silhouette, with the fixed fallbacks for
/// missing and collapsed contours
pub fn classify_silhouette(silhouette: &Silhouette) -> Category {
    match silhouette {
        Silhouette::Missing => {
            debug!("No contour found, defaulting to Top");
            Category::Top
        }
        Silhouette::Degenerate => {
            debug!("Contour has an empty bounding box, defaulting to Accessory");
            Category::Accessory
        }
        Silhouette::Measured(metrics, fills) => {
            let category = classify_shape(metrics, fills);
            debug!(
                aspect_ratio = metrics.aspect_ratio,
                relative_area = metrics.relative_area,
                solidity = metrics.solidity,
                ?fills,
                %category,
                "Classified silhouette"
            );
            category
        }
    }
}

fn between(value: f64, (low, high): (f64, f64)) -> bool {
    low < value && value < high
}

/// Ordered decision tree; the first matching rule wins.
pub fn classify_shape(metrics: &ShapeMetrics, fills: &RegionFills) -> Category {
    let &ShapeMetrics {
        aspect_ratio,
        relative_area,
        solidity,
    } = metrics;

    if relative_area < SMALL_OBJECT_AREA {
        return small_object(aspect_ratio, relative_area, solidity);
    }

    if between(aspect_ratio, BAG_ASPECT) && solidity > BAG_MIN_SOLIDITY {
        if fills.has_handle_gap() || solidity > TOTE_MIN_SOLIDITY {
            return Category::Bag;
        }
    }

    if fills.has_flat_waistband() && !fills.has_neckline() {
        return match (fills.has_leg_gap(), aspect_ratio) {
            (true, ar) if ar < TROUSERS_MAX_ASPECT => Category::Trousers,
            (true, _) => Category::Shorts,
            (false, ar) if ar < JEANS_MAX_ASPECT => Category::Jeans,
            (false, _) => Category::Skirt,
        };
    }

    if fills.has_neckline() {
        return if aspect_ratio < DRESS_MAX_ASPECT {
            Category::Dress
        } else {
            Category::Top
        };
    }

    if aspect_ratio < FALLBACK_TROUSERS_ASPECT {
        Category::Trousers
    } else if aspect_ratio < FALLBACK_DRESS_ASPECT {
        Category::Dress
    } else {
        Category::Top
    }
}

fn small_object(aspect_ratio: f64, relative_area: f64, solidity: f64) -> Category {
    if solidity < NECKLACE_MAX_SOLIDITY {
        Category::Necklace
    } else if aspect_ratio > WATCH_MIN_ASPECT || aspect_ratio < WATCH_MAX_ASPECT {
        Category::Watch
    } else if between(aspect_ratio, RING_ASPECT) && solidity > RING_MIN_SOLIDITY {
        if relative_area < TINY_OBJECT_AREA {
            Category::Earrings
        } else {
            Category::Ring
        }
    } else if relative_area < EARRINGS_MAX_AREA {
        Category::Earrings
    } else if solidity > CLUTCH_MIN_SOLIDITY && between(aspect_ratio, CLUTCH_ASPECT) {
        Category::Bag
    } else {
        Category::Jewellery
    }
}
