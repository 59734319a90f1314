use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;
use wardrobe_common::{CategoryGroup, WardrobeItem};

use crate::rules::MatchingRules;

pub const COLOR_CAP: u32 = 40;
pub const CATEGORY_CAP: u32 = 30;
pub const FABRIC_CAP: u32 = 20;
pub const STYLE_CAP: u32 = 10;

const STYLE_MATCH_POINTS: u32 = 8;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum CompatibilityLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CompatibilityLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => "Perfect match! Wear together confidently.",
            Self::Good => "Works well together. Consider adding accessories.",
            Self::Fair => "Could work with the right styling and accessories.",
            Self::Poor => "Consider different combinations for better harmony.",
        }
    }
}

/// Per-axis points, each already clamped to its cap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    pub color: u32,
    pub category: u32,
    pub fabric: u32,
    pub style: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.color + self.category + self.fabric + self.style
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompatibilityResult {
    /// Sum of the breakdown, 0-100
    pub overall_score: u32,
    pub level: CompatibilityLevel,
    pub breakdown: ScoreBreakdown,
    /// In the order the rules fired
    pub explanations: Vec<String>,
    pub recommendation: String,
    pub category_match: String,
    pub color_match: String,
    pub fabric_match: String,
}

/// Pairwise garment compatibility over color, category, fabric and style.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    rules: MatchingRules,
}

impl CompatibilityScorer {
    pub fn new(rules: MatchingRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &MatchingRules {
        &self.rules
    }

    pub fn score(&self, first: &WardrobeItem, second: &WardrobeItem) -> CompatibilityResult {
        let mut explanations = Vec::new();

        let breakdown = ScoreBreakdown {
            color: self.color_axis(&first.color, &second.color, &mut explanations),
            category: self.category_axis(first, second, &mut explanations),
            fabric: self.fabric_axis(first, second, &mut explanations),
            style: self.style_axis(&first.name, &second.name, &mut explanations),
        };
        let overall_score = breakdown.total();
        let level = CompatibilityLevel::from_score(overall_score);

        debug!(
            first = %first.name,
            second = %second.name,
            overall_score,
            ?breakdown,
            "Scored garment pair"
        );

        CompatibilityResult {
            overall_score,
            level,
            breakdown,
            explanations,
            recommendation: level.recommendation().to_string(),
            category_match: format!("{} + {}", first.category, second.category),
            color_match: format!("{} + {}", first.color, second.color),
            fabric_match: format!("{} + {}", first.fabric, second.fabric),
        }
    }

    fn color_axis(&self, first: &str, second: &str, explanations: &mut Vec<String>) -> u32 {
        let mut score = 0;

        if first == second {
            score += 30;
            explanations.push(format!("Monochromatic: Both items are {first}"));
        } else if self.rules.is_neutral(second) {
            score += 25;
            explanations.push(format!("Neutral pairing: {first} works with neutral {second}"));
        } else if self.rules.is_neutral(first) {
            score += 25;
            explanations.push(format!("Neutral pairing: {second} works with neutral {first}"));
        } else {
            let distance = (self.rules.color_to_hue(first) - self.rules.color_to_hue(second)).abs();
            if distance == 150 || distance == 210 {
                score += 35;
                explanations.push(format!("Complementary colors: {first} and {second} create contrast"));
            } else if distance < 30 {
                score += 20;
                explanations.push(format!("Analogous colors: {first} and {second} are harmonious"));
            }
        }

        // Stacks on top of the harmony bonus; the cap absorbs the overflow
        if self.rules.is_classic_pair(first, second) {
            score += 30;
            explanations.push(format!("Classic combination: {first} and {second}"));
        }

        score.min(COLOR_CAP)
    }

    fn category_axis(&self, first: &WardrobeItem, second: &WardrobeItem, explanations: &mut Vec<String>) -> u32 {
        let in_group = |item: &WardrobeItem, group| item.category.is_in(group);
        let pairs = |a: CategoryGroup, b: CategoryGroup| {
            (in_group(first, a) && in_group(second, b)) || (in_group(second, a) && in_group(first, b))
        };
        let exactly_one = |group: CategoryGroup| in_group(first, group) != in_group(second, group);

        let (score, message) = if pairs(CategoryGroup::Tops, CategoryGroup::Bottoms) {
            (25, "Perfect combination: Top with Bottom")
        } else if pairs(CategoryGroup::Dresses, CategoryGroup::Outerwear) {
            (20, "Layered look: Dress with Outerwear")
        } else if exactly_one(CategoryGroup::Accessories) {
            (15, "Accessory complements clothing item")
        } else if exactly_one(CategoryGroup::Shoes) {
            (20, "Shoes complete the outfit")
        } else {
            return 0;
        };

        explanations.push(message.to_string());
        u32::min(score, CATEGORY_CAP)
    }

    fn fabric_axis(&self, first: &WardrobeItem, second: &WardrobeItem, explanations: &mut Vec<String>) -> u32 {
        let mut score = 0;

        if let Some(season) = self.rules.shared_season(&first.fabric, &second.fabric) {
            score += 15;
            explanations.push(format!("Seasonally appropriate: Both are {season} fabrics"));
        }

        // base points for mixing fabrics
        score += 5;

        u32::min(score, FABRIC_CAP)
    }

    fn style_axis(&self, first: &str, second: &str, explanations: &mut Vec<String>) -> u32 {
        let first = first.to_lowercase();
        let second = second.to_lowercase();

        match self.rules.shared_style(&first, &second) {
            Some(style) => {
                explanations.push(format!("Style match: Both items have {style} elements"));
                STYLE_MATCH_POINTS.min(STYLE_CAP)
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_common::{Category, Fabric};

    fn item(name: &str, category: Category, color: &str, fabric: Fabric) -> WardrobeItem {
        WardrobeItem::new(name, category, color, fabric)
    }

    #[test]
    fn test_navy_top_with_white_bottom() {
        let scorer = CompatibilityScorer::default();
        let top = item("", Category::Top, "Navy", Fabric::Unknown);
        let bottom = item("", Category::Bottom, "White", Fabric::Unknown);

        let result = scorer.score(&top, &bottom);
        assert!(result.breakdown.color >= 25);
        assert_eq!(result.breakdown.color, 40);
        assert_eq!(result.breakdown.category, 25);
        assert_eq!(result.breakdown.fabric, 5);
        assert_eq!(result.overall_score, 70);
        assert_eq!(result.level, CompatibilityLevel::Good);
        assert_eq!(
            result.explanations,
            vec![
                "Neutral pairing: Navy works with neutral White",
                "Classic combination: Navy and White",
                "Perfect combination: Top with Bottom",
            ]
        );
    }

    #[test]
    fn test_complementary_and_analogous_hues() {
        let scorer = CompatibilityScorer::default();
        // Red (0) vs Mint (150)
        let red = item("", Category::Dress, "Red", Fabric::Unknown);
        let mint = item("", Category::Jacket, "Mint", Fabric::Unknown);
        let result = scorer.score(&red, &mint);
        assert_eq!(result.breakdown.color, 35);
        assert_eq!(result.breakdown.category, 20);

        // Orange (30) vs Camel (30)
        let orange = item("", Category::Top, "Orange", Fabric::Unknown);
        let camel = item("", Category::Top, "Camel", Fabric::Unknown);
        let result = scorer.score(&orange, &camel);
        assert_eq!(result.breakdown.color, 20);
        assert_eq!(result.breakdown.category, 0);
    }

    #[test]
    fn test_monochrome_classic_stack_is_clamped() {
        let scorer = CompatibilityScorer::default();
        // Red + Denim: neutral (25) + classic (30) -> 40
        let red = item("", Category::Top, "Red", Fabric::Denim);
        let denim = item("", Category::Jeans, "Denim", Fabric::Denim);
        let result = scorer.score(&red, &denim);
        assert_eq!(result.breakdown.color, COLOR_CAP);
        assert_eq!(result.breakdown.fabric, 20);
    }

    #[test]
    fn test_color_and_category_axes_are_symmetric() {
        let scorer = CompatibilityScorer::default();
        let colors = ["Navy", "White", "Red", "Mint", "Teal", "Coral", "Gold", "Unknown"];
        let categories = [Category::Top, Category::Jeans, Category::Dress, Category::Coat, Category::Ring, Category::Boots];

        for (i, color_a) in colors.iter().enumerate() {
            for color_b in &colors[i..] {
                for cat_a in &categories {
                    for cat_b in &categories {
                        let a = item("", cat_a.clone(), color_a, Fabric::Cotton);
                        let b = item("", cat_b.clone(), color_b, Fabric::Wool);
                        let ab = scorer.score(&a, &b);
                        let ba = scorer.score(&b, &a);
                        assert_eq!(ab.breakdown.color, ba.breakdown.color);
                        assert_eq!(ab.breakdown.category, ba.breakdown.category);
                        assert_eq!(ab.overall_score, ab.breakdown.total());
                        assert!(ab.overall_score <= 100);
                    }
                }
            }
        }
    }

    #[test]
    fn test_category_priority_order() {
        let scorer = CompatibilityScorer::default();
        let ring = item("", Category::Ring, "Gold", Fabric::Gold);
        let boots = item("", Category::Boots, "Black", Fabric::Leather);
        // accessory rule fires before the shoe rule
        let result = scorer.score(&ring, &boots);
        assert_eq!(result.breakdown.category, 15);

        let both_shoes = scorer.score(&boots, &boots);
        assert_eq!(both_shoes.breakdown.category, 0);
    }

    #[test]
    fn test_style_keywords_and_seasons() {
        let scorer = CompatibilityScorer::default();
        let tee = item("Basic Cotton Tee", Category::TShirt, "White", Fabric::Cotton);
        let jeans = item("Slim Jeans", Category::Jeans, "Denim", Fabric::Linen);
        let result = scorer.score(&tee, &jeans);
        assert_eq!(result.breakdown.style, 8);
        assert_eq!(result.breakdown.fabric, 20);
        assert!(result
            .explanations
            .contains(&"Style match: Both items have casual elements".to_string()));
        assert!(result
            .explanations
            .contains(&"Seasonally appropriate: Both are summer fabrics".to_string()));
    }

    #[test]
    fn test_scoring_is_pure() {
        let scorer = CompatibilityScorer::default();
        let a = item("Graphic Hoodie", Category::Sweater, "Black", Fabric::Polyester);
        let b = item("Oversized Cargo", Category::Pants, "Olive", Fabric::Cotton);
        assert_eq!(scorer.score(&a, &b), scorer.score(&a, &b));
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(CompatibilityLevel::from_score(100), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(80), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(79), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(40), CompatibilityLevel::Fair);
        assert_eq!(CompatibilityLevel::from_score(39), CompatibilityLevel::Poor);
    }
}
