use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::debug;
use wardrobe_common::{Category, WardrobeItem};

/// Label reported as the dominant style of an empty wardrobe
pub const NEWCOMER_STYLE: &str = "Newcomer";

/// Categories every wardrobe is expected to hold
pub const ESSENTIALS: [Category; 4] = [Category::Top, Category::Bottom, Category::Shoes, Category::Jacket];

const HEALTH_POINTS_PER_ITEM: usize = 5;
const HEALTH_POINTS_PER_COLOR: usize = 5;
const MIN_COLOR_VARIETY: usize = 3;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum StyleBucket {
    Casual,
    Formal,
    Versatile,
}

impl StyleBucket {
    /// Bucket implied by keywords in the garment name
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("jeans") || name.contains("tee") {
            Self::Casual
        } else if name.contains("suit") || name.contains("blazer") {
            Self::Formal
        } else {
            Self::Versatile
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WardrobeAnalysis {
    pub dominant_style: String,
    /// Item count per category label, in first-seen order
    pub category_distribution: IndexMap<String, usize>,
    /// Item count per keyword style bucket, in bucket order
    pub style_counts: IndexMap<StyleBucket, usize>,
    /// Item count per color, in first-seen order
    pub color_preferences: IndexMap<String, usize>,
    pub missing_essentials: Vec<String>,
    pub recommendations: Vec<String>,
    /// 0-100
    pub health_score: u32,
    pub total_items: usize,
}

/// Coverage, color variety and style balance of a wardrobe.
#[derive(Debug, Clone, Default)]
pub struct WardrobeAnalyzer;

impl WardrobeAnalyzer {
    pub fn analyze(&self, items: &[WardrobeItem]) -> WardrobeAnalysis {
        let mut category_distribution: IndexMap<String, usize> = IndexMap::new();
        let mut color_preferences: IndexMap<String, usize> = IndexMap::new();
        let mut style_counts: IndexMap<StyleBucket, usize> = StyleBucket::iter().map(|bucket| (bucket, 0)).collect();

        for item in items {
            *category_distribution.entry(item.category.to_string()).or_default() += 1;
            *color_preferences.entry(item.color.clone()).or_default() += 1;
            *style_counts.entry(StyleBucket::from_name(&item.name)).or_default() += 1;
        }

        let dominant_style = if items.is_empty() {
            NEWCOMER_STYLE.to_string()
        } else {
            dominant_bucket(&style_counts).to_string()
        };

        let missing_essentials: Vec<String> = ESSENTIALS
            .iter()
            .filter(|essential| !category_distribution.contains_key(essential.as_str()))
            .map(|essential| essential.to_string())
            .collect();

        let mut recommendations = Vec::new();
        if missing_essentials.is_empty() {
            recommendations.push("Good foundation of essentials.".to_string());
        } else {
            recommendations.push(format!("Missing essentials: {}", missing_essentials.join(", ")));
        }
        if color_preferences.len() < MIN_COLOR_VARIETY {
            recommendations.push("Try adding more color variety.".to_string());
        }

        let raw_health = items.len() * HEALTH_POINTS_PER_ITEM + color_preferences.len() * HEALTH_POINTS_PER_COLOR;
        let health_score = raw_health.min(100) as u32;

        debug!(
            total_items = items.len(),
            colors = color_preferences.len(),
            health_score,
            %dominant_style,
            "Analyzed wardrobe"
        );

        WardrobeAnalysis {
            dominant_style,
            category_distribution,
            style_counts,
            color_preferences,
            missing_essentials,
            recommendations,
            health_score,
            total_items: items.len(),
        }
    }
}

/// Highest count wins; ties go to the earlier bucket
fn dominant_bucket(counts: &IndexMap<StyleBucket, usize>) -> StyleBucket {
    let mut best = StyleBucket::Casual;
    let mut best_count = 0;
    for (bucket, count) in counts {
        if *count > best_count {
            best = *bucket;
            best_count = *count;
        }
    }
    best
}
