//! Image-driven outfit advice: what to wear with the photographed piece.

use image::RgbImage;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use wardrobe_common::{Category, Fabric, WardrobeItem};

use crate::{
    decode::decode_base64,
    error::Result,
    pipeline::{best_partner_color, GarmentPipeline},
};

/// Partner colors tried when suggesting a match piece
pub const SUGGESTION_COLORS: &[&str] = &[
    "Black", "White", "Navy", "Beige", "Denim", "Gray", "Olive", "Camel", "Red", "Silver",
];

/// Vibes cycled through by the `variation` counter
pub const VIBES: &[&str] = &["Minimalist", "Boho", "Chic", "Streetwear", "Elegant", "Casual"];

/// Upper bound (exclusive) of the score jitter applied when varying
pub const VARIATION_JITTER: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutfitSuggestion {
    pub vibe: String,
    /// "{color} {category}" of the photographed piece
    pub identified_item: String,
    pub match_piece: String,
    pub jewelry: String,
    pub shoes: String,
    pub bag: String,
    pub best_color: String,
}

impl OutfitSuggestion {
    fn new(color: &str, category: &Category, best_color: String, variation: u32) -> Self {
        let vibe = VIBES[variation as usize % VIBES.len()];

        let match_piece = match category {
            Category::Bag => format!("{best_color} Dress or Top & Bottom"),
            Category::Dress | Category::Jumpsuit => format!("{best_color} Blazer"),
            Category::Top | Category::TShirt | Category::Sweater => format!("{best_color} Trousers"),
            _ => format!("{best_color} Top"),
        };

        Self {
            vibe: vibe.to_string(),
            identified_item: format!("{color} {category}"),
            match_piece,
            jewelry: match vibe {
                "Chic" | "Elegant" => "Gold Chain",
                _ => "Silver Minimalist",
            }
            .to_string(),
            shoes: if vibe == "Streetwear" { "Sneakers" } else { "Loafers" }.to_string(),
            bag: if vibe == "Casual" { "Crossbody" } else { "Clutch" }.to_string(),
            best_color,
        }
    }
}

/// Garment role a partner should fill for the photographed category
pub fn partner_category(category: &Category) -> Category {
    match category {
        Category::Bag => Category::Dress,
        Category::Top | Category::TShirt | Category::Sweater | Category::Blouse | Category::Shirt => {
            Category::Bottom
        }
        Category::Dress | Category::Jumpsuit => Category::Jacket,
        _ => Category::Top,
    }
}

impl GarmentPipeline {
    /// Suggest a complementary outfit for a garment photo.
    ///
    /// With `variation > 0` every candidate score gets uniform jitter in
    /// `[0, 10)` drawn from `rng`, so repeated requests can differ.
    pub fn try_suggest_outfit<R: Rng + ?Sized>(
        &self,
        image: &RgbImage,
        variation: u32,
        rng: &mut R,
    ) -> Result<OutfitSuggestion> {
        let color = self.color_extractor().extract(image)?;
        // segmented by brightness alone
        let category = self.shape_classifier().classify(image, None)?;

        let item = WardrobeItem::new("", category.clone(), color.name.as_str(), Fabric::Unknown);
        let best_color = best_partner_color(
            self.scorer(),
            &item,
            SUGGESTION_COLORS,
            &partner_category(&category),
            -1.0,
            |_| {
                if variation > 0 {
                    rng.random::<f64>() * VARIATION_JITTER
                } else {
                    0.0
                }
            },
        );

        let suggestion = OutfitSuggestion::new(&color.name, &category, best_color, variation);
        debug!(
            item = %suggestion.identified_item,
            vibe = %suggestion.vibe,
            best_color = %suggestion.best_color,
            "Suggested outfit"
        );
        Ok(suggestion)
    }

    /// Best-effort [`Self::try_suggest_outfit`]; failures are logged and yield `None`
    pub fn suggest_outfit<R: Rng + ?Sized>(
        &self,
        image: &RgbImage,
        variation: u32,
        rng: &mut R,
    ) -> Option<OutfitSuggestion> {
        self.try_suggest_outfit(image, variation, rng)
            .inspect_err(|e| error!(error = %e, "Outfit suggestion failed"))
            .ok()
    }

    /// Suggest from a base64 payload using the thread-local random source
    pub fn suggest_outfit_base64(&self, payload: &str, variation: u32) -> Option<OutfitSuggestion> {
        self.suggest_outfit(&decode_base64(payload), variation, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rand::{rngs::StdRng, SeedableRng};

    fn navy_square() -> RgbImage {
        let mut img = RgbImage::from_pixel(100, 100, Rgb([255, 255, 255]));
        for y in 20..80 {
            for x in 20..80 {
                img.put_pixel(x, y, Rgb([0, 0, 128]));
            }
        }
        img
    }

    #[test]
    fn test_partner_roles() {
        assert_eq!(partner_category(&Category::Bag), Category::Dress);
        assert_eq!(partner_category(&Category::Blouse), Category::Bottom);
        assert_eq!(partner_category(&Category::Jumpsuit), Category::Jacket);
        assert_eq!(partner_category(&Category::Jeans), Category::Top);
    }

    #[test]
    fn test_advice_follows_vibe() {
        let chic = OutfitSuggestion::new("Red", &Category::Dress, "Black".to_string(), 2);
        assert_eq!(chic.vibe, "Chic");
        assert_eq!(chic.match_piece, "Black Blazer");
        assert_eq!(chic.jewelry, "Gold Chain");
        assert_eq!(chic.shoes, "Loafers");
        assert_eq!(chic.bag, "Clutch");
        assert_eq!(chic.identified_item, "Red Dress");

        let casual = OutfitSuggestion::new("Navy", &Category::Bag, "White".to_string(), 11);
        assert_eq!(casual.vibe, "Casual");
        assert_eq!(casual.bag, "Crossbody");
        assert_eq!(casual.match_piece, "White Dress or Top & Bottom");

        let street = OutfitSuggestion::new("Navy", &Category::Jeans, "White".to_string(), 3);
        assert_eq!(street.shoes, "Sneakers");
        assert_eq!(street.jewelry, "Silver Minimalist");
        assert_eq!(street.match_piece, "White Top");
    }

    #[test]
    fn test_blouse_match_piece_is_a_top() {
        // blouses get a bottom partner but the generic piece label
        let blouse = OutfitSuggestion::new("Pink", &Category::Blouse, "Navy".to_string(), 0);
        assert_eq!(blouse.match_piece, "Navy Top");
        assert_eq!(blouse.vibe, "Minimalist");
    }

    #[test]
    fn test_without_variation_is_deterministic() {
        let pipeline = GarmentPipeline::default();
        let img = navy_square();
        let first = pipeline.suggest_outfit(&img, 0, &mut StdRng::seed_from_u64(1)).unwrap();
        let second = pipeline.suggest_outfit(&img, 0, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second);
        assert!(first.identified_item.starts_with("Navy "));
        assert!(SUGGESTION_COLORS.contains(&first.best_color.as_str()));
    }

    #[test]
    fn test_seeded_variation_is_reproducible() {
        let pipeline = GarmentPipeline::default();
        let img = navy_square();
        let first = pipeline.suggest_outfit(&img, 4, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = pipeline.suggest_outfit(&img, 4, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.vibe, "Elegant");
    }

    #[test]
    fn test_tiny_image_yields_none() {
        let pipeline = GarmentPipeline::default();
        assert!(pipeline.suggest_outfit(&RgbImage::new(1, 1), 0, &mut StdRng::seed_from_u64(1)).is_none());
    }
}
