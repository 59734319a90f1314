//! Outfit composition from a caller-supplied wardrobe.

use std::collections::HashMap;

use indexmap::IndexMap;
use rand::{seq::IndexedRandom, Rng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::{debug, info};
use wardrobe_common::{CategoryGroup, TableFile, WardrobeItem};

use crate::scorer::CompatibilityScorer;

/// An optional bucket contributes an item when a uniform draw exceeds this
pub const OPTIONAL_SKIP_THRESHOLD: f64 = 0.3;

/// Aggregate compatibility reported when fewer than two items were picked
pub const SOLO_COMPATIBILITY: f64 = 85.0;

/// Styles composed by [`OutfitComposer::curate`]
pub const CURATED_STYLES: [OutfitStyle; 3] = [
    OutfitStyle::Casual,
    OutfitStyle::Business,
    OutfitStyle::Streetwear,
];

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutfitStyle {
    #[default]
    Casual,
    Formal,
    Business,
    Evening,
    Streetwear,
}

impl OutfitStyle {
    /// Lenient parse: unknown style tags compose as casual
    pub fn parse_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// "Casual", "Business", ...
    pub fn title(self) -> String {
        let tag: &'static str = self.into();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Buckets a style draws from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompositionRule {
    /// One random item from each of these buckets
    pub required: Vec<CategoryGroup>,
    /// Replaces `required` when any required bucket is empty
    #[serde(default)]
    pub fallback_required: Vec<CategoryGroup>,
    /// One random item each, kept when the draw beats [`OPTIONAL_SKIP_THRESHOLD`]
    #[serde(default)]
    pub optional: Vec<CategoryGroup>,
    /// Never drawn from, even when listed above
    #[serde(default)]
    pub avoid: Vec<CategoryGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompositionRules {
    pub styles: IndexMap<OutfitStyle, CompositionRule>,
}

impl TableFile for CompositionRules {}

impl CompositionRules {
    /// Rule for `style`; styles missing from the table use the casual rule
    pub fn rule_for(&self, style: OutfitStyle) -> CompositionRule {
        self.styles
            .get(&style)
            .or_else(|| self.styles.get(&OutfitStyle::Casual))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for CompositionRules {
    fn default() -> Self {
        use CategoryGroup::*;

        let rule = |required: &[CategoryGroup], fallback: &[CategoryGroup], optional: &[CategoryGroup], avoid: &[CategoryGroup]| {
            CompositionRule {
                required: required.to_vec(),
                fallback_required: fallback.to_vec(),
                optional: optional.to_vec(),
                avoid: avoid.to_vec(),
            }
        };

        let styles = IndexMap::from([
            (OutfitStyle::Casual, rule(&[Tops, Bottoms], &[], &[Shoes, Accessories], &[Formal])),
            (OutfitStyle::Formal, rule(&[Formal, Shoes], &[], &[Accessories], &[])),
            (OutfitStyle::Business, rule(&[Tops, Bottoms], &[], &[Outerwear, Shoes, Accessories], &[])),
            (OutfitStyle::Evening, rule(&[Dresses], &[Tops, Bottoms], &[Shoes, Accessories, Outerwear], &[])),
            (OutfitStyle::Streetwear, rule(&[Tops, Bottoms], &[], &[Shoes, Accessories, Outerwear], &[])),
        ]);

        Self { styles }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Outfit {
    pub name: String,
    pub vibe: String,
    pub item_ids: Vec<String>,
    pub items: Vec<WardrobeItem>,
    /// Mean pairwise score of the selected items
    pub compatibility_score: f64,
    pub styling_tips: Vec<String>,
}

/// Compact outfit view returned by curation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutfitSummary {
    pub name: String,
    pub vibe: String,
    pub item_ids: Vec<String>,
}

impl From<&Outfit> for OutfitSummary {
    fn from(outfit: &Outfit) -> Self {
        Self {
            name: outfit.name.clone(),
            vibe: outfit.vibe.clone(),
            item_ids: outfit.item_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutfitComposer {
    scorer: CompatibilityScorer,
    rules: CompositionRules,
}

impl OutfitComposer {
    pub fn new(scorer: CompatibilityScorer, rules: CompositionRules) -> Self {
        Self { scorer, rules }
    }

    /// Compose an outfit for `style`, or `None` when fewer than two items exist.
    pub fn compose<R>(&self, items: &[WardrobeItem], style: OutfitStyle, rng: &mut R) -> Option<Outfit>
    where
        R: Rng + ?Sized,
    {
        if items.len() < 2 {
            debug!(items = items.len(), "Not enough items to compose an outfit");
            return None;
        }

        let buckets = bucket_items(items);
        let bucket = |group: &CategoryGroup| buckets.get(group).filter(|b| !b.is_empty());
        let rule = self.rules.rule_for(style);
        let allowed = |group: &&CategoryGroup| !rule.avoid.contains(*group);

        let required = if !rule.fallback_required.is_empty() && rule.required.iter().any(|g| bucket(g).is_none()) {
            &rule.fallback_required
        } else {
            &rule.required
        };

        let mut selected: Vec<&WardrobeItem> = Vec::new();

        for group in required.iter().filter(allowed) {
            if let Some(pick) = bucket(group).and_then(|b| b.choose(rng)).copied() {
                selected.push(pick);
            }
        }

        for group in rule.optional.iter().filter(allowed) {
            if let Some(candidates) = bucket(group) {
                if rng.random::<f64>() > OPTIONAL_SKIP_THRESHOLD {
                    if let Some(pick) = candidates.choose(rng) {
                        selected.push(*pick);
                    }
                }
            }
        }

        if selected.len() < 2 {
            let tops = bucket(&CategoryGroup::Tops);
            let bottoms = bucket(&CategoryGroup::Bottoms);
            let dresses = bucket(&CategoryGroup::Dresses);

            if let (Some(tops), Some(bottoms)) = (tops, bottoms) {
                selected = tops.choose(rng).into_iter().chain(bottoms.choose(rng)).copied().collect();
            } else if let Some(dresses) = dresses {
                selected = dresses.choose(rng).into_iter().copied().collect();
            }
        }

        let name = outfit_name(&selected, style, rng);
        let compatibility_score = self.mean_compatibility(&selected);

        info!(
            %style,
            name = %name,
            selected = selected.len(),
            compatibility_score,
            "Composed outfit"
        );

        Some(Outfit {
            name,
            vibe: style.title(),
            item_ids: selected.iter().map(|item| item.id.clone()).collect(),
            items: selected.into_iter().cloned().collect(),
            compatibility_score,
            styling_tips: styling_tips(style),
        })
    }

    /// One outfit per curated style (casual, business, streetwear)
    pub fn curate<R>(&self, items: &[WardrobeItem], rng: &mut R) -> Vec<OutfitSummary>
    where
        R: Rng + ?Sized,
    {
        CURATED_STYLES
            .iter()
            .filter_map(|style| self.compose(items, *style, rng))
            .map(|outfit| OutfitSummary::from(&outfit))
            .collect()
    }

    fn mean_compatibility(&self, selected: &[&WardrobeItem]) -> f64 {
        let mut scores = Vec::new();
        for (i, first) in selected.iter().enumerate() {
            for second in &selected[i + 1..] {
                scores.push(self.scorer.score(first, second).overall_score as f64);
            }
        }

        if scores.is_empty() {
            SOLO_COMPATIBILITY
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        }
    }
}

fn bucket_items(items: &[WardrobeItem]) -> HashMap<CategoryGroup, Vec<&WardrobeItem>> {
    let mut buckets: HashMap<CategoryGroup, Vec<&WardrobeItem>> = HashMap::new();
    for item in items {
        if let Some(group) = item.category.group() {
            buckets.entry(group).or_default().push(item);
        }
    }
    buckets
}

fn outfit_name<R>(selected: &[&WardrobeItem], style: OutfitStyle, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let title = style.title();
    match selected {
        [first, second, ..] => {
            let templates = [
                format!("{title} {} Combo", first.color),
                format!("{} & {} Mix", first.color, second.color),
                format!("{title} Ensemble"),
                format!("Modern {title}"),
            ];
            templates
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| format!("{title} Ensemble"))
        }
        _ => format!("{title} Look"),
    }
}

fn styling_tips(style: OutfitStyle) -> Vec<String> {
    let mut tips = vec!["Mix of colors adds visual interest".to_string()];
    if style == OutfitStyle::Casual {
        tips.push("Tuck in the front for a relaxed look".to_string());
    }
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use wardrobe_common::{Category, Fabric};

    fn wardrobe() -> Vec<WardrobeItem> {
        vec![
            WardrobeItem::new("White Tee", Category::TShirt, "White", Fabric::Cotton).with_id("1"),
            WardrobeItem::new("Blue Jeans", Category::Jeans, "Denim", Fabric::Denim).with_id("2"),
            WardrobeItem::new("Leather Boots", Category::Boots, "Black", Fabric::Leather).with_id("3"),
            WardrobeItem::new("Wool Coat", Category::Coat, "Camel", Fabric::Wool).with_id("4"),
            WardrobeItem::new("Silver Ring", Category::Ring, "Silver", Fabric::Silver).with_id("5"),
        ]
    }

    #[test]
    fn test_too_few_items_yields_none() {
        let composer = OutfitComposer::default();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(composer.compose(&[], OutfitStyle::Casual, &mut rng).is_none());
        assert!(composer.compose(&wardrobe()[..1], OutfitStyle::Casual, &mut rng).is_none());
    }

    #[test]
    fn test_casual_outfit_has_top_and_bottom() {
        let composer = OutfitComposer::default();
        let items = wardrobe();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outfit = composer.compose(&items, OutfitStyle::Casual, &mut rng).unwrap();

            assert_eq!(&outfit.item_ids[..2], &["1".to_string(), "2".to_string()]);
            assert!(outfit.items.iter().all(|item| item.category != Category::Coat));
            assert_eq!(outfit.vibe, "Casual");
            assert_eq!(outfit.styling_tips.len(), 2);
            assert!(outfit.compatibility_score > 0.0 && outfit.compatibility_score <= 100.0);
        }
    }

    #[test]
    fn test_same_seed_same_outfit() {
        let composer = OutfitComposer::default();
        let items = wardrobe();
        let first = composer.compose(&items, OutfitStyle::Streetwear, &mut StdRng::seed_from_u64(3));
        let second = composer.compose(&items, OutfitStyle::Streetwear, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_evening_prefers_dress_and_falls_back() {
        let composer = OutfitComposer::default();
        let mut rng = StdRng::seed_from_u64(11);

        let mut items = wardrobe();
        items.push(WardrobeItem::new("Silk Dress", Category::Dress, "Burgundy", Fabric::Silk).with_id("6"));
        let outfit = composer.compose(&items, OutfitStyle::Evening, &mut rng).unwrap();
        assert_eq!(outfit.item_ids[0], "6");

        let outfit = composer.compose(&wardrobe(), OutfitStyle::Evening, &mut rng).unwrap();
        assert_eq!(&outfit.item_ids[..2], &["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_lone_dress_fallback_scores_default() {
        let composer = OutfitComposer::default();
        let items = vec![
            WardrobeItem::new("Maxi Dress", Category::Dress, "Sage", Fabric::Linen).with_id("d"),
            WardrobeItem::new("Straw Hat", Category::Hat, "Beige", Fabric::Other("Straw".into())).with_id("h"),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        // formal needs formal pieces and shoes: nothing matches, falls back to the dress
        let outfit = composer.compose(&items, OutfitStyle::Formal, &mut rng).unwrap();
        assert_eq!(outfit.item_ids, vec!["d".to_string()]);
        assert_eq!(outfit.compatibility_score, SOLO_COMPATIBILITY);
        assert_eq!(outfit.name, "Formal Look");
    }

    #[test]
    fn test_curate_three_styles() {
        let composer = OutfitComposer::default();
        let mut rng = StdRng::seed_from_u64(1);
        let outfits = composer.curate(&wardrobe(), &mut rng);
        let vibes: Vec<_> = outfits.iter().map(|o| o.vibe.as_str()).collect();
        assert_eq!(vibes, vec!["Casual", "Business", "Streetwear"]);
    }

    #[test]
    fn test_style_parsing_is_lenient() {
        assert_eq!(OutfitStyle::parse_or_default("Business"), OutfitStyle::Business);
        assert_eq!(OutfitStyle::parse_or_default("grunge"), OutfitStyle::Casual);
        assert_eq!(OutfitStyle::Streetwear.title(), "Streetwear");
    }

    #[test]
    fn test_unknown_style_rule_uses_casual() {
        let mut rules = CompositionRules::default();
        rules.styles.shift_remove(&OutfitStyle::Evening);
        assert_eq!(rules.rule_for(OutfitStyle::Evening), rules.rule_for(OutfitStyle::Casual));
    }
}
