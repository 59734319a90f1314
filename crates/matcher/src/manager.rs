use rand::{rngs::StdRng, SeedableRng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};
use tracing::info;
use wardrobe_common::{StyleHistoryEntry, WardrobeItem};

use crate::{
    analyzer::{WardrobeAnalysis, WardrobeAnalyzer},
    brand::{audit_brand, BrandAudit},
    composer::{CompositionRules, Outfit, OutfitComposer, OutfitStyle, OutfitSummary},
    error::{MatcherError, Result},
    evolution::{evolution, EvolutionReport},
    rules::MatchingRules,
    scorer::{CompatibilityResult, CompatibilityScorer},
};

#[derive(
    Debug, Clone,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
    PartialEq
)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StylistCommand {
    /// Score two wardrobe items against each other
    ScoreItems {
        first_id: String,
        second_id: String,
    },

    /// Compose one outfit in the given style
    ComposeOutfit {
        #[schemars(length(min = 1, max = 20))]
        style: String,
    },

    /// One outfit each for casual, business and streetwear
    CurateOutfits,

    /// Coverage, color variety and health score of the wardrobe
    AnalyzeWardrobe,

    /// Style timeline from quiz history, newest first
    Evolution {
        #[serde(default)]
        history: Vec<StyleHistoryEntry>,
    },

    /// Sustainability audit of a brand
    AuditBrand {
        #[schemars(length(min = 1, max = 100))]
        brand: String,
    },
}

impl StylistCommand {
    /// Get the JSON schema for all commands
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(StylistCommand)
    }

    /// Get a list of all available command names
    pub fn command_names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ScoreItems { .. } => "Score the compatibility of two wardrobe items (0-100) with explanations",
            Self::ComposeOutfit { .. } => "Compose an outfit for a style: casual, formal, business, evening or streetwear",
            Self::CurateOutfits => "Compose casual, business and streetwear outfits from the wardrobe",
            Self::AnalyzeWardrobe => "Report missing essentials, color preferences and a wardrobe health score",
            Self::Evolution { .. } => "Build a style timeline from quiz history plus wardrobe insights",
            Self::AuditBrand { .. } => "Look up or estimate a brand's sustainability scores",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "result", rename_all = "snake_case")]
pub enum StylistResponse {
    Compatibility(CompatibilityResult),
    Outfit(Option<Outfit>),
    Outfits(Vec<OutfitSummary>),
    Analysis(WardrobeAnalysis),
    Evolution(EvolutionReport),
    Brand(BrandAudit),
}

/// Runs [`StylistCommand`]s against a held wardrobe.
pub struct Stylist {
    wardrobe: Vec<WardrobeItem>,
    scorer: CompatibilityScorer,
    composer: OutfitComposer,
    rng: StdRng,
}

impl Stylist {
    pub fn new() -> Self {
        Self::with_rules(MatchingRules::default(), CompositionRules::default())
    }

    /// Create a stylist with custom lookup tables
    pub fn with_rules(matching: MatchingRules, composition: CompositionRules) -> Self {
        let scorer = CompatibilityScorer::new(matching);
        Self {
            wardrobe: Vec::new(),
            composer: OutfitComposer::new(scorer.clone(), composition),
            scorer,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Fix the random source used for outfit composition
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn set_wardrobe(&mut self, items: Vec<WardrobeItem>) {
        self.wardrobe = items;
    }

    /// Load the wardrobe from a JSON array of items
    pub fn load_wardrobe_json(&mut self, json: &str) -> Result<()> {
        self.wardrobe = serde_json::from_str(json)?;
        Ok(())
    }

    pub fn add_item(&mut self, item: WardrobeItem) {
        self.wardrobe.push(item);
    }

    pub fn wardrobe(&self) -> &[WardrobeItem] {
        &self.wardrobe
    }

    fn find_item(&self, id: &str) -> Result<&WardrobeItem> {
        self.wardrobe
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| MatcherError::UnknownItem(id.to_string()))
    }

    pub fn execute(&mut self, command: StylistCommand) -> Result<StylistResponse> {
        info!(command = %command, items = self.wardrobe.len(), "Executing stylist command");

        let response = match command {
            StylistCommand::ScoreItems { first_id, second_id } => {
                let first = self.find_item(&first_id)?;
                let second = self.find_item(&second_id)?;
                StylistResponse::Compatibility(self.scorer.score(first, second))
            }
            StylistCommand::ComposeOutfit { style } => {
                let style = OutfitStyle::parse_or_default(&style);
                StylistResponse::Outfit(self.composer.compose(&self.wardrobe, style, &mut self.rng))
            }
            StylistCommand::CurateOutfits => {
                StylistResponse::Outfits(self.composer.curate(&self.wardrobe, &mut self.rng))
            }
            StylistCommand::AnalyzeWardrobe => StylistResponse::Analysis(WardrobeAnalyzer.analyze(&self.wardrobe)),
            StylistCommand::Evolution { history } => StylistResponse::Evolution(evolution(&self.wardrobe, &history)),
            StylistCommand::AuditBrand { brand } => StylistResponse::Brand(audit_brand(&brand)),
        };

        Ok(response)
    }
}

impl Default for Stylist {
    fn default() -> Self {
        Self::new()
    }
}
