use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Garment taxonomy shared by the shape classifier and the scoring engine.
///
/// Labels the classifier never produces (e.g. `Blazer`) still appear here
/// because stored items may carry them after a user edit. Anything outside
/// the taxonomy round-trips through [`Category::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Top,
    #[strum(to_string = "T-Shirt")]
    TShirt,
    Blouse,
    Shirt,
    Sweater,
    Tank,
    #[strum(to_string = "Crop Top")]
    CropTop,

    Bottom,
    Trousers,
    Jeans,
    Skirt,
    Shorts,
    Pants,

    Jacket,
    Blazer,
    Coat,
    Cardigan,

    Dress,
    Jumpsuit,
    Romper,

    Shoes,
    Boots,
    Sandals,
    Sneakers,
    Heels,

    Accessory,
    Jewelry,
    Jewellery,
    Bag,
    Hat,
    Scarf,
    Belt,
    Necklace,
    Ring,
    Earrings,
    Watch,

    Suit,
    #[strum(to_string = "Dress Pants")]
    DressPants,
    #[strum(to_string = "Cocktail Dress")]
    CocktailDress,

    #[strum(default)]
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Other(label) => label,
            known => known.into(),
        }
    }

    /// First group (in [`CategoryGroup`] order) this category belongs to
    pub fn group(&self) -> Option<CategoryGroup> {
        use strum::IntoEnumIterator;
        CategoryGroup::iter().find(|group| group.contains(self))
    }

    pub fn is_in(&self, group: CategoryGroup) -> bool {
        group.contains(self)
    }

    /// Small worn pieces whose material is read from their color
    pub fn is_jewelry_family(&self) -> bool {
        matches!(
            self,
            Self::Necklace | Self::Ring | Self::Earrings | Self::Watch | Self::Jewellery
        )
    }

    /// Bottoms eligible for the denim override of the fabric classifier
    pub fn is_denim_candidate(&self) -> bool {
        matches!(
            self,
            Self::Trousers | Self::Jeans | Self::Shorts | Self::Skirt | Self::Bottom
        )
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other("Unknown".to_string())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        label.parse().unwrap_or(Self::Other(label))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// Buckets used for pairing rules and outfit composition.
///
/// Iteration order matters: it decides which bucket a category lands in when
/// it is listed under several groups (`Blazer` is outerwear before formal).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CategoryGroup {
    Tops,
    Bottoms,
    Outerwear,
    Dresses,
    Shoes,
    Accessories,
    Formal,
}

impl CategoryGroup {
    pub fn contains(self, category: &Category) -> bool {
        use Category::*;
        match self {
            Self::Tops => matches!(category, Top | TShirt | Blouse | Shirt | Sweater | Tank | CropTop),
            Self::Bottoms => matches!(category, Bottom | Trousers | Jeans | Skirt | Shorts | Pants),
            Self::Outerwear => matches!(category, Jacket | Blazer | Coat | Cardigan),
            Self::Dresses => matches!(category, Dress | Jumpsuit | Romper),
            Self::Shoes => matches!(category, Shoes | Boots | Sandals | Sneakers | Heels),
            Self::Accessories => matches!(
                category,
                Accessory | Jewelry | Jewellery | Bag | Hat | Scarf | Belt | Necklace | Ring | Earrings | Watch
            ),
            Self::Formal => matches!(category, Suit | Blazer | DressPants | CocktailDress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_custom_labels() {
        assert_eq!("T-Shirt".parse::<Category>().unwrap(), Category::TShirt);
        assert_eq!(Category::from("Cocktail Dress".to_string()), Category::CocktailDress);
        assert_eq!(Category::from("Poncho".to_string()), Category::Other("Poncho".to_string()));
        assert_eq!(Category::CropTop.to_string(), "Crop Top");
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&Category::DressPants).unwrap();
        assert_eq!(json, "\"Dress Pants\"");

        let parsed: Category = serde_json::from_str("\"Kimono\"").unwrap();
        assert_eq!(parsed, Category::Other("Kimono".to_string()));
    }

    #[test]
    fn test_primary_group_follows_group_order() {
        assert_eq!(Category::Blazer.group(), Some(CategoryGroup::Outerwear));
        assert!(Category::Blazer.is_in(CategoryGroup::Formal));
        assert_eq!(Category::Suit.group(), Some(CategoryGroup::Formal));
        assert_eq!(Category::Jeans.group(), Some(CategoryGroup::Bottoms));
        assert_eq!(Category::Other("Kimono".into()).group(), None);
    }

    #[test]
    fn test_family_predicates() {
        assert!(Category::Watch.is_jewelry_family());
        assert!(!Category::Bag.is_jewelry_family());
        assert!(Category::Skirt.is_denim_candidate());
        assert!(!Category::Dress.is_denim_candidate());
    }
}
