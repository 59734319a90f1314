use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Category, Fabric};

/// Dominant color of a garment photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColorSample {
    /// Lowercase `#rrggbb`
    pub hex: String,
    /// Name from the reference palette (after refinement)
    pub name: String,
    pub rgb: [u8; 3],
}

impl ColorSample {
    pub fn new(rgb: [u8; 3], name: impl Into<String>) -> Self {
        Self {
            hex: format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]),
            name: name.into(),
            rgb,
        }
    }
}

/// Output of tagging a single garment photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GarmentRecord {
    /// `false` when the record is the fixed fallback
    pub success: bool,
    pub name: String,
    #[schemars(with = "String")]
    pub category: Category,
    #[schemars(with = "String")]
    pub fabric: Fabric,
    pub color: String,
    /// Complementary color suggested for the opposite garment role
    pub best_color: String,
    pub details: String,
    pub confidence: f32,
}

impl GarmentRecord {
    pub const SCAN_CONFIDENCE: f32 = 0.96;

    /// Fixed record returned when tagging fails internally
    pub fn fallback() -> Self {
        Self {
            success: false,
            name: "Scanned Item".to_string(),
            category: Category::Top,
            fabric: Fabric::Cotton,
            color: "Multi".to_string(),
            best_color: "Denim".to_string(),
            details: String::new(),
            confidence: 0.0,
        }
    }

    /// View this record as a wardrobe item under the given identifier
    pub fn to_item(&self, id: impl Into<String>) -> WardrobeItem {
        WardrobeItem {
            id: id.into(),
            name: self.name.clone(),
            category: self.category.clone(),
            color: self.color.clone(),
            fabric: self.fabric.clone(),
        }
    }
}

fn unknown() -> String {
    "Unknown".to_string()
}

/// A stored garment as handed over by the persistence layer.
///
/// Identifiers are opaque: they are carried through outfit results untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WardrobeItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[schemars(with = "String")]
    pub category: Category,
    #[serde(default = "unknown")]
    pub color: String,
    #[serde(default)]
    #[schemars(with = "String")]
    pub fabric: Fabric,
}

impl WardrobeItem {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        color: impl Into<String>,
        fabric: Fabric,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            category,
            color: color.into(),
            fabric,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// One saved style-quiz result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleHistoryEntry {
    /// JSON-encoded list of style tags, e.g. `["minimalist", "classic"]`
    #[serde(default)]
    pub styles: Option<String>,
    #[serde(default)]
    pub comfort_level: Option<i64>,
    /// ISO-8601 timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub archetype: Option<String>,
}

impl StyleHistoryEntry {
    /// Decoded style tags; missing or malformed encodings give an empty list
    pub fn style_list(&self) -> Vec<String> {
        self.styles
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
            .unwrap_or_default()
    }
}
