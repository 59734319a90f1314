//! # Garment Vision
//!
//! A trait-based pipeline that turns a garment photo into a tagged record:
//! dominant color, silhouette category, texture-driven fabric, and a
//! complementary color suggested by the [`matcher`] scoring engine.
//!
//! ## Core Features
//!
//! - **Trait-based Architecture**: swap any stage by implementing
//!   [`ColorExtractor`], [`ShapeClassifier`], [`TextureAnalyzer`] or [`FabricClassifier`]
//! - **Lenient Ingestion**: undecodable payloads become a placeholder image
//!   and internal failures become a fixed fallback record
//! - **Deterministic**: clustering runs on a fixed seed; randomness elsewhere
//!   comes from a caller-supplied source
//!
//! ## Quick Start
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use vision::GarmentPipeline;
//!
//! let pipeline = GarmentPipeline::builder().build();
//!
//! let mut image = RgbImage::from_pixel(120, 120, Rgb([255, 255, 255]));
//! for y in 30..90 {
//!     for x in 30..90 {
//!         image.put_pixel(x, y, Rgb([0, 0, 128]));
//!     }
//! }
//!
//! let record = pipeline.tag(&image);
//! assert!(record.success);
//! assert_eq!(record.color, "Navy");
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust,no_run
//! use vision::{GarmentPipeline, ColorPalette, LaplacianTextureAnalyzer};
//! use wardrobe_common::TableFile;
//!
//! let palette = ColorPalette::from_toml_file("palette.toml")?;
//! let pipeline = GarmentPipeline::builder()
//!     .with_palette(palette)
//!     .set_texture_analyzer(LaplacianTextureAnalyzer)
//!     .build();
//! let record = pipeline.tag_bytes(&std::fs::read("shirt.jpg")?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod color;
pub mod constants;
pub mod decode;
pub mod error;
pub mod fabric;
pub mod pipeline;
pub mod shape;
pub mod suggestion;
pub mod texture;
pub mod traits;
pub mod types;

pub use color::{ColorPalette, KMeansColorExtractor, NamedColor};
pub use decode::{decode_base64, decode_bytes, placeholder, try_decode_base64, try_decode_bytes};
pub use error::{Result, VisionError};
pub use fabric::RuleFabricClassifier;
pub use pipeline::{builder::PipelineBuilder, refine, GarmentPipeline};
pub use shape::{classify_shape, classify_silhouette, ContourShapeClassifier, Silhouette};
pub use suggestion::{partner_category, OutfitSuggestion};
pub use texture::LaplacianTextureAnalyzer;
pub use traits::*;
pub use types::{RegionFills, ShapeMetrics, TextureSignal};
