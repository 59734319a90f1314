use wardrobe_common::{Category, Fabric};

use crate::{constants::*, traits::FabricClassifier, types::TextureSignal};

const GOLD_TONES: &[&str] = &["Gold", "Yellow", "Orange", "Beige", "Cream"];
const SILVER_TONES: &[&str] = &["Silver", "Gray", "White", "Platinum", "Ash"];
const STRAP_COLORS: &[&str] = &["Black", "Brown", "Tan"];
const LEATHER_BAG_COLORS: &[&str] = &["Brown", "Tan", "Black", "Camel", "Cognac", "Red"];
const DENIM_COLORS: &[&str] = &[
    "Denim",
    "Light Denim",
    "Navy",
    "Blue",
    "Charcoal",
    "Ice Blue",
    "Gray",
    "Black",
    "Light Blue",
    "Royal Blue",
    "Sky Blue",
    "Slate",
    "Indigo",
];
const VELVET_COLORS: &[&str] = &["Red", "Burgundy", "Navy", "Black", "Green"];
const LEATHER_COLORS: &[&str] = &["Black", "Brown", "Camel", "Tan"];
const LINEN_COLORS: &[&str] = &["White", "Beige", "Cream", "Olive"];

fn listed(colors: &[&str], color: &str) -> bool {
    colors.contains(&color)
}

/// Ordered rules over texture, color name and category
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleFabricClassifier;

impl FabricClassifier for RuleFabricClassifier {
    fn classify(&self, texture: TextureSignal, color: &str, category: &Category) -> Fabric {
        let TextureSignal { variance, brightness } = texture;

        if category.is_jewelry_family() {
            return if listed(GOLD_TONES, color) {
                Fabric::Gold
            } else if listed(SILVER_TONES, color) {
                Fabric::Silver
            } else if *category == Category::Watch && listed(STRAP_COLORS, color) {
                Fabric::LeatherStrap
            } else {
                Fabric::Metal
            };
        }

        if *category == Category::Bag {
            return if listed(LEATHER_BAG_COLORS, color) {
                Fabric::Leather
            } else if variance > CANVAS_MIN_VARIANCE {
                Fabric::Canvas
            } else {
                Fabric::Synthetic
            };
        }

        if category.is_denim_candidate() && listed(DENIM_COLORS, color) {
            return Fabric::Denim;
        }

        if variance > WOOL_MIN_VARIANCE {
            if listed(VELVET_COLORS, color) && brightness < VELVET_MAX_BRIGHTNESS {
                return Fabric::Velvet;
            }
            return Fabric::Wool;
        }

        if listed(LEATHER_COLORS, color) && variance < LEATHER_MAX_VARIANCE {
            return Fabric::Leather;
        }

        let (linen_low, linen_high) = LINEN_VARIANCE;
        if linen_low < variance && variance < linen_high && listed(LINEN_COLORS, color) {
            return Fabric::Linen;
        }

        if variance < SATIN_MAX_VARIANCE && brightness > SATIN_MIN_BRIGHTNESS {
            return Fabric::Satin;
        }

        if variance < COTTON_MAX_VARIANCE {
            Fabric::Cotton
        } else {
            Fabric::Polyester
        }
    }
}
