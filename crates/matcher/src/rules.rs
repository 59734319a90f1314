//! Fixed lookup tables driving the compatibility scorer.
//!
//! The defaults reproduce the tuned tables; a deployment can override any of
//! them through [`TableFile`] (TOML or JSON) and hand the result to
//! [`CompatibilityScorer::new`](crate::CompatibilityScorer::new).

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wardrobe_common::{Fabric, TableFile};

/// Hue assumed for colors missing from the hue table
pub const DEFAULT_HUE: i32 = 0;

/// Fabrics that are worn in the same season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FabricSeason {
    pub season: String,
    #[schemars(with = "Vec<String>")]
    pub fabrics: Vec<Fabric>,
}

/// Keywords that tie a garment name to an aesthetic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleKeywords {
    pub style: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchingRules {
    pub neutral_colors: Vec<String>,
    /// Unordered pairs; lookups check both orderings
    pub classic_pairs: Vec<(String, String)>,
    /// Color name to hue in degrees (0-360)
    pub hues: IndexMap<String, i32>,
    /// Checked in order, first shared season wins
    pub fabric_seasons: Vec<FabricSeason>,
    /// Checked in order, first shared style wins
    pub style_keywords: Vec<StyleKeywords>,
}

impl TableFile for MatchingRules {}

impl MatchingRules {
    pub fn color_to_hue(&self, color: &str) -> i32 {
        self.hues.get(color).copied().unwrap_or(DEFAULT_HUE)
    }

    pub fn is_neutral(&self, color: &str) -> bool {
        self.neutral_colors.iter().any(|neutral| neutral == color)
    }

    pub fn is_classic_pair(&self, first: &str, second: &str) -> bool {
        self.classic_pairs
            .iter()
            .any(|(a, b)| (a == first && b == second) || (a == second && b == first))
    }

    /// Season shared by both fabrics, if any
    pub fn shared_season(&self, first: &Fabric, second: &Fabric) -> Option<&str> {
        self.fabric_seasons
            .iter()
            .find(|season| season.fabrics.contains(first) && season.fabrics.contains(second))
            .map(|season| season.season.as_str())
    }

    /// Style both (lowercased) names carry at least one keyword of
    pub fn shared_style(&self, first_name: &str, second_name: &str) -> Option<&str> {
        self.style_keywords
            .iter()
            .find(|set| {
                let hit = |name: &str| set.keywords.iter().any(|kw| name.contains(kw.as_str()));
                hit(first_name) && hit(second_name)
            })
            .map(|set| set.style.as_str())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for MatchingRules {
    fn default() -> Self {
        const HUES: &[(&str, i32)] = &[
            ("Red", 0), ("Orange", 30), ("Yellow", 60), ("Green", 120),
            ("Teal", 180), ("Blue", 240), ("Purple", 270), ("Pink", 300),
            ("Brown", 20), ("Beige", 45), ("White", 0), ("Black", 0),
            ("Gray", 0), ("Navy", 240), ("Denim", 210), ("Cream", 60),
            ("Camel", 30), ("Olive", 80), ("Burgundy", 350), ("Rust", 15),
            ("Mint", 150), ("Lavender", 270), ("Sage", 100), ("Taupe", 30),
            ("Gold", 45), ("Silver", 0), ("Charcoal", 200), ("Rose", 330),
        ];
        const CLASSIC_PAIRS: &[(&str, &str)] = &[
            ("Navy", "White"), ("Black", "White"), ("Red", "Denim"),
            ("Green", "Brown"), ("Pink", "Gray"), ("Blue", "Orange"),
            ("Purple", "Yellow"), ("Coral", "Teal"), ("Camel", "Black"),
            ("Gold", "Black"), ("Silver", "Blue"), ("Denim", "White"),
        ];

        use Fabric::*;
        let fabric_seasons = vec![
            FabricSeason {
                season: "summer".into(),
                fabrics: vec![Linen, Cotton, Silk, Chiffon, Jersey],
            },
            FabricSeason {
                season: "winter".into(),
                fabrics: vec![Wool, Cashmere, Tweed, Fleece, Velvet],
            },
            FabricSeason {
                season: "all_season".into(),
                fabrics: vec![Denim, Polyester, Rayon, Spandex, Leather, Metal, Gold, Silver],
            },
        ];

        let style_keywords = [
            ("casual", &["casual", "tee", "jeans", "sneakers", "cotton"]),
            ("formal", &["formal", "suit", "dress", "blazer", "silk"]),
            ("bohemian", &["boho", "flowy", "embroidered", "fringe", "maxi"]),
            ("streetwear", &["street", "hoodie", "oversized", "sneaker", "graphic"]),
            ("minimalist", &["minimal", "basic", "plain", "simple", "neutral"]),
        ]
        .into_iter()
        .map(|(style, keywords)| StyleKeywords {
            style: style.to_string(),
            keywords: strings(keywords),
        })
        .collect();

        Self {
            neutral_colors: strings(&["Black", "White", "Gray", "Beige", "Cream", "Taupe", "Denim"]),
            classic_pairs: CLASSIC_PAIRS
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            hues: HUES.iter().map(|(name, hue)| (name.to_string(), *hue)).collect(),
            fabric_seasons,
            style_keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_lookup_defaults_to_zero() {
        let rules = MatchingRules::default();
        assert_eq!(rules.color_to_hue("Navy"), 240);
        assert_eq!(rules.color_to_hue("Chartreuse"), DEFAULT_HUE);
        for hue in rules.hues.values() {
            assert!((0..360).contains(hue));
        }
    }

    #[test]
    fn test_classic_pairs_are_unordered() {
        let rules = MatchingRules::default();
        assert!(rules.is_classic_pair("Navy", "White"));
        assert!(rules.is_classic_pair("White", "Navy"));
        assert!(!rules.is_classic_pair("Navy", "Navy"));
    }

    #[test]
    fn test_first_shared_season_wins() {
        let rules = MatchingRules::default();
        assert_eq!(rules.shared_season(&Fabric::Linen, &Fabric::Cotton), Some("summer"));
        assert_eq!(rules.shared_season(&Fabric::Gold, &Fabric::Denim), Some("all_season"));
        assert_eq!(rules.shared_season(&Fabric::Wool, &Fabric::Cotton), None);
    }

    #[test]
    fn test_shared_style_needs_both_names() {
        let rules = MatchingRules::default();
        assert_eq!(rules.shared_style("graphic hoodie", "oversized tee"), Some("streetwear"));
        assert_eq!(rules.shared_style("blue jeans", "white tee"), Some("casual"));
        assert_eq!(rules.shared_style("blue jeans", "silk blouse"), None);
    }

    #[test]
    fn test_rules_load_from_toml() {
        let rules = MatchingRules::default();
        let toml = rules.to_toml().unwrap();
        let reloaded = MatchingRules::from_toml(&toml).unwrap();
        assert_eq!(reloaded, rules);
    }
}
