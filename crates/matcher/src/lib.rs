//! # Matcher
//!
//! Rule-based fashion intelligence over already-tagged garments: pairwise
//! compatibility scoring, style-driven outfit composition, wardrobe gap
//! analysis, a style-evolution timeline and brand sustainability audits.
//!
//! All lookup tables ([`MatchingRules`], [`CompositionRules`]) ship with
//! defaults and can be loaded from TOML or JSON through
//! [`TableFile`](wardrobe_common::TableFile).
//!
//! ## Quick Start
//!
//! ```rust
//! use matcher::{CompatibilityLevel, CompatibilityScorer};
//! use wardrobe_common::{Category, Fabric, WardrobeItem};
//!
//! let scorer = CompatibilityScorer::default();
//! let top = WardrobeItem::new("Navy Top", Category::Top, "Navy", Fabric::Cotton);
//! let bottom = WardrobeItem::new("White Trousers", Category::Bottom, "White", Fabric::Linen);
//!
//! let result = scorer.score(&top, &bottom);
//! assert!(result.level >= CompatibilityLevel::Good);
//! ```
//!
//! ## Composing outfits
//!
//! ```rust
//! use matcher::{OutfitComposer, OutfitStyle};
//! use rand::{SeedableRng, rngs::StdRng};
//! use wardrobe_common::{Category, Fabric, WardrobeItem};
//!
//! let items = vec![
//!     WardrobeItem::new("White Tee", Category::TShirt, "White", Fabric::Cotton).with_id("1"),
//!     WardrobeItem::new("Blue Jeans", Category::Jeans, "Denim", Fabric::Denim).with_id("2"),
//! ];
//! let mut rng = StdRng::seed_from_u64(42);
//! let outfit = OutfitComposer::default().compose(&items, OutfitStyle::Casual, &mut rng);
//! assert_eq!(outfit.map(|o| o.item_ids.len()), Some(2));
//! ```

pub mod analyzer;
pub mod brand;
pub mod composer;
pub mod error;
pub mod evolution;
pub mod manager;
pub mod rules;
pub mod scorer;

pub use analyzer::{StyleBucket, WardrobeAnalysis, WardrobeAnalyzer};
pub use brand::{audit_brand, BrandAudit, Source};
pub use composer::{CompositionRule, CompositionRules, Outfit, OutfitComposer, OutfitStyle, OutfitSummary};
pub use error::{MatcherError, Result};
pub use evolution::{evolution, style_archetype, EvolutionReport, StyleInsights, TimelineEntry};
pub use manager::{Stylist, StylistCommand, StylistResponse};
pub use rules::MatchingRules;
pub use scorer::{CompatibilityLevel, CompatibilityResult, CompatibilityScorer, ScoreBreakdown};
