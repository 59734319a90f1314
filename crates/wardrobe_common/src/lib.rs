//! # Wardrobe Common - Shared Types and Contracts
//!
//! Data contracts shared by the `matcher` and `vision` crates: the garment
//! taxonomy, fabric labels, tagged-garment records and the plain records the
//! persistence layer hands to the scoring engine.
//!
//! ## Example
//!
//! ```rust
//! use wardrobe_common::{Category, CategoryGroup, Fabric, WardrobeItem};
//!
//! let item = WardrobeItem::new("Navy Top", Category::Top, "Navy", Fabric::Cotton);
//! assert_eq!(item.category.group(), Some(CategoryGroup::Tops));
//!
//! // Unknown labels coming from storage are kept verbatim
//! let custom: Category = "Poncho".parse().unwrap();
//! assert_eq!(custom.to_string(), "Poncho");
//! ```

pub mod category;
pub mod config;
pub mod fabric;
pub mod records;

use thiserror::Error;

pub use category::{Category, CategoryGroup};
pub use config::TableFile;
pub use fabric::Fabric;
pub use records::{ColorSample, GarmentRecord, StyleHistoryEntry, WardrobeItem};

/// Result type for wardrobe operations
pub type Result<T> = std::result::Result<T, WardrobeError>;

/// Standard error type for loading and saving wardrobe tables and records
#[derive(Error, Debug)]
pub enum WardrobeError {
    #[error("Invalid value: {message}")]
    InvalidValue { message: String },

    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}
