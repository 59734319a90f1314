pub mod builder;

use image::RgbImage;
use matcher::CompatibilityScorer;
use tracing::{debug, error};
use wardrobe_common::{Category, Fabric, GarmentRecord, WardrobeItem};

use crate::{
    decode::{decode_base64, decode_bytes},
    error::Result,
    traits::{ColorExtractor, FabricClassifier, ShapeClassifier, TextureAnalyzer},
};

/// Partner colors tried when suggesting a complementary color for a scan
pub const SCAN_PARTNER_COLORS: &[&str] = &["White", "Black", "Denim", "Navy", "Beige"];

/// Returned when no candidate beats the starting score
pub const DEFAULT_PARTNER_COLOR: &str = "Denim";

/// Image-to-attributes pipeline: color, then shape, then texture and fabric
pub struct GarmentPipeline {
    color_extractor: Box<dyn ColorExtractor>,
    shape_classifier: Box<dyn ShapeClassifier>,
    texture_analyzer: Box<dyn TextureAnalyzer>,
    fabric_classifier: Box<dyn FabricClassifier>,
    scorer: CompatibilityScorer,
}

impl GarmentPipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    pub fn new(
        color_extractor: Box<dyn ColorExtractor>,
        shape_classifier: Box<dyn ShapeClassifier>,
        texture_analyzer: Box<dyn TextureAnalyzer>,
        fabric_classifier: Box<dyn FabricClassifier>,
        scorer: CompatibilityScorer,
    ) -> Self {
        Self {
            color_extractor,
            shape_classifier,
            texture_analyzer,
            fabric_classifier,
            scorer,
        }
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        &self.scorer
    }

    pub(crate) fn color_extractor(&self) -> &dyn ColorExtractor {
        self.color_extractor.as_ref()
    }

    pub(crate) fn shape_classifier(&self) -> &dyn ShapeClassifier {
        self.shape_classifier.as_ref()
    }

    /// Tag one garment photo, propagating stage failures
    pub fn try_tag(&self, image: &RgbImage) -> Result<GarmentRecord> {
        let color = self.color_extractor.extract(image)?;
        let category = self.shape_classifier.classify(image, Some(color.rgb))?;
        let texture = self.texture_analyzer.analyze(image)?;
        let fabric = self.fabric_classifier.classify(texture, &color.name, &category);

        let (category, name) = refine(category, &fabric, &color.name);
        let best_color = self.best_color(&color.name, &category, &fabric);

        debug!(%name, %category, %fabric, color = %color.name, %best_color, "Tagged garment");

        Ok(GarmentRecord {
            success: true,
            details: format!("AI Scan: {fabric} | {category}"),
            name,
            category,
            fabric,
            color: color.name,
            best_color,
            confidence: GarmentRecord::SCAN_CONFIDENCE,
        })
    }

    /// Tag one garment photo; any stage failure yields [`GarmentRecord::fallback`]
    pub fn tag(&self, image: &RgbImage) -> GarmentRecord {
        self.try_tag(image).unwrap_or_else(|e| {
            error!(error = %e, "Garment tagging failed, returning fallback record");
            GarmentRecord::fallback()
        })
    }

    /// Tag an encoded image; undecodable bytes are tagged as the placeholder
    pub fn tag_bytes(&self, bytes: &[u8]) -> GarmentRecord {
        self.tag(&decode_bytes(bytes))
    }

    /// Tag a base64 (optionally data-URI) payload
    pub fn tag_base64(&self, payload: &str) -> GarmentRecord {
        self.tag(&decode_base64(payload))
    }

    /// Complementary color for the opposite garment role (a bottom for a
    /// top, otherwise a top)
    pub fn best_color(&self, color: &str, category: &Category, fabric: &Fabric) -> String {
        let scanned = WardrobeItem::new("", category.clone(), color, fabric.clone());
        let partner_category = if *category == Category::Top {
            Category::Bottom
        } else {
            Category::Top
        };

        best_partner_color(&self.scorer, &scanned, SCAN_PARTNER_COLORS, &partner_category, 0.0, |_| 0.0)
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "GarmentPipeline: 1 color extractor, 1 shape classifier, 1 texture analyzer, 1 fabric classifier, {} partner colors",
            SCAN_PARTNER_COLORS.len()
        )
    }
}

impl Default for GarmentPipeline {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Final category and display name after the denim and material rules
pub fn refine(mut category: Category, fabric: &Fabric, color: &str) -> (Category, String) {
    let mut prefix: Option<String> = None;

    if fabric.is_denim() {
        match category {
            Category::Trousers => {
                category = Category::Jeans;
                prefix = Some("Denim".to_string());
            }
            Category::Shorts | Category::Skirt => prefix = Some("Denim".to_string()),
            _ => {}
        }
    }

    if matches!(
        category,
        Category::Watch | Category::Bag | Category::Necklace | Category::Ring | Category::Earrings
    ) {
        prefix = Some(fabric.to_string());
    }

    let name = match prefix.as_deref().map(str::trim) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix} {category}"),
        _ => format!("{color} {category}"),
    };

    (category, name)
}

/// Candidate whose score (plus `jitter`) strictly beats every earlier one and
/// `floor`; [`DEFAULT_PARTNER_COLOR`] when none does
pub(crate) fn best_partner_color(
    scorer: &CompatibilityScorer,
    item: &WardrobeItem,
    candidates: &[&str],
    partner_category: &Category,
    floor: f64,
    mut jitter: impl FnMut(&str) -> f64,
) -> String {
    let mut best_score = floor;
    let mut best_color = DEFAULT_PARTNER_COLOR;

    for &candidate in candidates {
        let partner = WardrobeItem::new("", partner_category.clone(), candidate, Fabric::Cotton);
        let score = scorer.score(item, &partner).overall_score as f64 + jitter(candidate);
        if score > best_score {
            best_score = score;
            best_color = candidate;
        }
    }

    best_color.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_refine_denim() {
        assert_eq!(
            refine(Category::Trousers, &Fabric::Denim, "Navy"),
            (Category::Jeans, "Denim Jeans".to_string())
        );
        assert_eq!(
            refine(Category::Skirt, &Fabric::Denim, "Navy"),
            (Category::Skirt, "Denim Skirt".to_string())
        );
        assert_eq!(
            refine(Category::Trousers, &Fabric::Cotton, "Olive"),
            (Category::Trousers, "Olive Trousers".to_string())
        );
    }

    #[test]
    fn test_refine_material_prefix() {
        assert_eq!(refine(Category::Watch, &Fabric::LeatherStrap, "Brown").1, "Leather Strap Watch");
        assert_eq!(refine(Category::Bag, &Fabric::Canvas, "Olive").1, "Canvas Bag");
        assert_eq!(refine(Category::Ring, &Fabric::Gold, "Yellow").1, "Gold Ring");
        assert_eq!(refine(Category::Dress, &Fabric::Satin, "Pink").1, "Pink Dress");
    }

    #[test]
    fn test_generic_jewellery_keeps_color_name() {
        assert_eq!(refine(Category::Jewellery, &Fabric::Gold, "Yellow").1, "Yellow Jewellery");
        assert_eq!(refine(Category::Accessory, &Fabric::Silver, "Gray").1, "Gray Accessory");
    }

    #[test]
    fn test_best_color_for_navy_top() {
        let pipeline = GarmentPipeline::default();
        let color = pipeline.best_color("Navy", &Category::Top, &Fabric::Cotton);
        assert!(SCAN_PARTNER_COLORS.contains(&color.as_str()));
        // deterministic for identical input
        assert_eq!(color, pipeline.best_color("Navy", &Category::Top, &Fabric::Cotton));
    }

    #[test]
    fn test_best_color_first_candidate_wins_ties() {
        let scorer = CompatibilityScorer::default();
        let item = WardrobeItem::new("", Category::Top, "Teal", Fabric::Cotton);
        // same color repeated: later duplicates never beat the first
        let best = best_partner_color(&scorer, &item, &["White", "White"], &Category::Bottom, 0.0, |_| 0.0);
        assert_eq!(best, "White");

        let none = best_partner_color(&scorer, &item, &["White"], &Category::Bottom, 1000.0, |_| 0.0);
        assert_eq!(none, DEFAULT_PARTNER_COLOR);
    }

    struct FailingExtractor;

    impl ColorExtractor for FailingExtractor {
        fn extract(&self, _image: &RgbImage) -> Result<wardrobe_common::ColorSample> {
            Err(crate::error::VisionError::EmptyImage)
        }
    }

    #[test]
    fn test_stage_failure_returns_fallback() {
        let pipeline = GarmentPipeline::builder().set_color_extractor(FailingExtractor).build();
        let record = pipeline.tag(&RgbImage::from_pixel(10, 10, Rgb([1, 2, 3])));
        assert_eq!(record, GarmentRecord::fallback());
        assert!(pipeline.try_tag(&RgbImage::new(10, 10)).is_err());
    }

    #[test]
    fn test_tag_solid_square() {
        let mut img = RgbImage::from_pixel(100, 100, Rgb([255, 255, 255]));
        for y in 30..70 {
            for x in 30..70 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        let record = GarmentPipeline::default().tag(&img);
        assert!(record.success);
        assert_eq!(record.color, "Black");
        assert_eq!(record.confidence, GarmentRecord::SCAN_CONFIDENCE);
        assert_eq!(record.details, format!("AI Scan: {} | {}", record.fabric, record.category));
    }
}
