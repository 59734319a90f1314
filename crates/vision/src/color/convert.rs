//! Pixel conversions using the 8-bit OpenCV conventions the thresholds were
//! tuned against: hue in 0-180, saturation and value in 0-255, BT.601 luma.

use image::{GrayImage, Luma, RgbImage};
use palette::{FromColor, Hsv as PaletteHsv, Srgb};

/// 8-bit HSV with hue on the 0-180 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl From<PaletteHsv> for Hsv {
    fn from(hsv: PaletteHsv) -> Self {
        // degrees halved; a hue that rounds up to 180 is red again
        let h = (hsv.hue.into_positive_degrees() / 2.0).round() as u16 % 180;
        Self {
            h: h as u8,
            s: to_byte(hsv.saturation),
            v: to_byte(hsv.value),
        }
    }
}

fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn rgb_to_hsv([r, g, b]: [u8; 3]) -> Hsv {
    PaletteHsv::from_color(Srgb::new(r, g, b).into_format::<f32>()).into()
}

/// BT.601 luma, rounded.
///
/// `image`'s own grayscale weights by Rec.709, which shifts near-white
/// cyans and greens across the segmentation cutoffs.
pub fn luma([r, g, b]: [u8; 3]) -> u8 {
    let weighted = 4899 * r as u32 + 9617 * g as u32 + 1868 * b as u32;
    ((weighted + (1 << 13)) >> 14) as u8
}

pub fn grayscale(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([luma(image.get_pixel(x, y).0)])
    })
}
