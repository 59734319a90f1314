pub mod convert;
pub mod extractor;
pub mod kmeans;
pub mod palette;

pub use convert::{grayscale, luma, rgb_to_hsv, Hsv};
pub use extractor::KMeansColorExtractor;
pub use kmeans::{kmeans, Clustering, KMeansConfig};
pub use self::palette::{refine_name, ColorPalette, NamedColor};
