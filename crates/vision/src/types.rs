use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Texture roughness and brightness of the garment's center
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextureSignal {
    /// Variance of the Laplacian response over the blurred crop
    pub variance: f64,
    /// Mean gray level (0-255) of the unblurred crop
    pub brightness: f64,
}

/// Geometry of the largest foreground contour
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ShapeMetrics {
    /// Bounding box width / height
    pub aspect_ratio: f64,
    /// Contour area / image area
    pub relative_area: f64,
    /// Contour area / convex hull area, 0 for a degenerate hull
    pub solidity: f64,
}

/// Fill ratios of sample regions inside the filled contour
///
/// Waist, neck and crotch fills are `lit / (size + 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RegionFills {
    /// Lit fraction of the handle region; an empty region counts as filled
    pub handle: f64,
    pub waist: f64,
    pub neck: f64,
    pub crotch: f64,
}

impl RegionFills {
    pub fn has_handle_gap(&self) -> bool {
        self.handle < crate::constants::HANDLE_MAX_FILL
    }

    pub fn has_flat_waistband(&self) -> bool {
        self.waist > crate::constants::WAIST_MIN_FILL
    }

    pub fn has_neckline(&self) -> bool {
        self.neck < crate::constants::NECK_MAX_FILL
    }

    pub fn has_leg_gap(&self) -> bool {
        self.crotch < crate::constants::CROTCH_MAX_FILL
    }
}
