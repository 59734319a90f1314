//! Empirical thresholds of the tagging pipeline.
//!
//! Classification outcomes on boundary cases depend on these exact values.

/// Side of the square placeholder returned for undecodable payloads
pub const PLACEHOLDER_SIZE: u32 = 256;

// Color extraction

/// Central crop (fraction of width and height) sampled for the dominant color
pub const COLOR_CROP_START: f64 = 0.25;
pub const COLOR_CROP_END: f64 = 0.75;
/// The crop is resized to this square before clustering
pub const COLOR_SAMPLE_SIZE: u32 = 64;
/// A pixel is background when every channel is at least this bright
pub const BACKGROUND_MIN_CHANNEL: u8 = 250;
/// Background filtering is skipped if it would keep this fraction or less
pub const MIN_FOREGROUND_FRACTION: f64 = 0.1;

pub const KMEANS_CLUSTERS: usize = 3;
pub const KMEANS_RESTARTS: usize = 5;
pub const KMEANS_SEED: u64 = 42;
pub const KMEANS_MAX_ITER: usize = 300;
pub const KMEANS_TOLERANCE: f64 = 1e-4;

// Shape segmentation

/// Dominant colors brighter than this on every channel use grayscale thresholding
pub const BRIGHT_DOMINANT_MIN_CHANNEL: u8 = 230;
pub const BRIGHT_FOREGROUND_THRESHOLD: u8 = 230;
/// Threshold used when no dominant color is known
pub const FALLBACK_FOREGROUND_THRESHOLD: u8 = 240;
/// Half-width of the hue band around the dominant hue (OpenCV hue scale, 0-180)
pub const HUE_TOLERANCE: i32 = 25;
pub const HUE_MAX: i32 = 180;
/// Lower bound on saturation and value inside the hue band
pub const MIN_SATURATION: u8 = 20;
pub const MIN_VALUE: u8 = 20;
/// Radius of the square structuring element (5x5)
pub const MORPH_RADIUS: u8 = 2;

// Shape classification

pub const SMALL_OBJECT_AREA: f64 = 0.25;
pub const NECKLACE_MAX_SOLIDITY: f64 = 0.65;
pub const WATCH_MIN_ASPECT: f64 = 2.5;
pub const WATCH_MAX_ASPECT: f64 = 0.4;
pub const RING_ASPECT: (f64, f64) = (0.8, 1.2);
pub const RING_MIN_SOLIDITY: f64 = 0.85;
pub const TINY_OBJECT_AREA: f64 = 0.05;
pub const EARRINGS_MAX_AREA: f64 = 0.08;
pub const CLUTCH_MIN_SOLIDITY: f64 = 0.9;
pub const CLUTCH_ASPECT: (f64, f64) = (1.0, 1.8);

pub const BAG_ASPECT: (f64, f64) = (0.6, 1.8);
pub const BAG_MIN_SOLIDITY: f64 = 0.8;
pub const TOTE_MIN_SOLIDITY: f64 = 0.92;
/// Handle region: top 30% of the bounding box, 30-70% of its width
pub const HANDLE_HEIGHT: f64 = 0.3;
pub const HANDLE_SPAN: (f64, f64) = (0.3, 0.7);
pub const HANDLE_MAX_FILL: f64 = 0.5;

/// Waistband region: top 10% of the bounding box, full width
pub const WAIST_HEIGHT: f64 = 0.1;
pub const WAIST_MIN_FILL: f64 = 0.85;
/// Neckline region: top 15%, 35-65% of the width
pub const NECK_HEIGHT: f64 = 0.15;
pub const NECK_SPAN: (f64, f64) = (0.35, 0.65);
pub const NECK_MAX_FILL: f64 = 0.6;
/// Crotch region: from 60% of the height down, 40-60% of the width
pub const CROTCH_START: f64 = 0.6;
pub const CROTCH_SPAN: (f64, f64) = (0.4, 0.6);
pub const CROTCH_MAX_FILL: f64 = 0.4;

pub const TROUSERS_MAX_ASPECT: f64 = 0.8;
pub const JEANS_MAX_ASPECT: f64 = 0.5;
pub const DRESS_MAX_ASPECT: f64 = 0.7;
pub const FALLBACK_TROUSERS_ASPECT: f64 = 0.4;
pub const FALLBACK_DRESS_ASPECT: f64 = 0.75;

// Texture

/// Central crop used for texture statistics
pub const TEXTURE_CROP_START: f64 = 0.3;
pub const TEXTURE_CROP_END: f64 = 0.7;
/// Sigma OpenCV derives for a 3x3 Gaussian kernel
pub const TEXTURE_BLUR_SIGMA: f32 = 0.8;

// Fabric

pub const WOOL_MIN_VARIANCE: f64 = 800.0;
pub const VELVET_MAX_BRIGHTNESS: f64 = 150.0;
pub const LEATHER_MAX_VARIANCE: f64 = 100.0;
pub const LINEN_VARIANCE: (f64, f64) = (300.0, 700.0);
pub const SATIN_MAX_VARIANCE: f64 = 60.0;
pub const SATIN_MIN_BRIGHTNESS: f64 = 120.0;
pub const COTTON_MAX_VARIANCE: f64 = 200.0;
pub const CANVAS_MIN_VARIANCE: f64 = 300.0;
