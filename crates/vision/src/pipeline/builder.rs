use matcher::{CompatibilityScorer, MatchingRules};

use crate::{
    color::{ColorPalette, KMeansColorExtractor},
    fabric::RuleFabricClassifier,
    pipeline::GarmentPipeline,
    shape::ContourShapeClassifier,
    texture::LaplacianTextureAnalyzer,
    traits::{ColorExtractor, FabricClassifier, ShapeClassifier, TextureAnalyzer},
};

/// Builder for garment pipelines with a fluent API
pub struct PipelineBuilder {
    color_extractor: Option<Box<dyn ColorExtractor>>,
    shape_classifier: Option<Box<dyn ShapeClassifier>>,
    texture_analyzer: Option<Box<dyn TextureAnalyzer>>,
    fabric_classifier: Option<Box<dyn FabricClassifier>>,
    scorer: Option<CompatibilityScorer>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            color_extractor: None,
            shape_classifier: None,
            texture_analyzer: None,
            fabric_classifier: None,
            scorer: None,
        }
    }

    /// Set the color extractor (replaces any existing one)
    pub fn set_color_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ColorExtractor + 'static,
    {
        self.color_extractor = Some(Box::new(extractor));
        self
    }

    /// Set the shape classifier (replaces any existing one)
    pub fn set_shape_classifier<S>(mut self, classifier: S) -> Self
    where
        S: ShapeClassifier + 'static,
    {
        self.shape_classifier = Some(Box::new(classifier));
        self
    }

    /// Set the texture analyzer (replaces any existing one)
    pub fn set_texture_analyzer<T>(mut self, analyzer: T) -> Self
    where
        T: TextureAnalyzer + 'static,
    {
        self.texture_analyzer = Some(Box::new(analyzer));
        self
    }

    /// Set the fabric classifier (replaces any existing one)
    pub fn set_fabric_classifier<F>(mut self, classifier: F) -> Self
    where
        F: FabricClassifier + 'static,
    {
        self.fabric_classifier = Some(Box::new(classifier));
        self
    }

    /// Use the k-means extractor with a custom reference palette
    pub fn with_palette(self, palette: ColorPalette) -> Self {
        self.set_color_extractor(KMeansColorExtractor::with_palette(palette))
    }

    pub fn with_scorer(mut self, scorer: CompatibilityScorer) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Score complementary colors with custom matching tables
    pub fn with_rules(self, rules: MatchingRules) -> Self {
        self.with_scorer(CompatibilityScorer::new(rules))
    }

    /// Build the pipeline with default components if not specified
    pub fn build(self) -> GarmentPipeline {
        let color_extractor = self
            .color_extractor
            .unwrap_or_else(|| Box::new(KMeansColorExtractor::default()));

        let shape_classifier = self
            .shape_classifier
            .unwrap_or_else(|| Box::new(ContourShapeClassifier));

        let texture_analyzer = self
            .texture_analyzer
            .unwrap_or_else(|| Box::new(LaplacianTextureAnalyzer));

        let fabric_classifier = self
            .fabric_classifier
            .unwrap_or_else(|| Box::new(RuleFabricClassifier));

        GarmentPipeline::new(
            color_extractor,
            shape_classifier,
            texture_analyzer,
            fabric_classifier,
            self.scorer.unwrap_or_default(),
        )
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
