use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wardrobe_common::TableFile;

use super::convert::rgb_to_hsv;

/// Palette names that can be reinterpreted as tinted neutrals
const TINTABLE_NEUTRALS: [&str; 4] = ["Gray", "Silver", "White", "Beige"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NamedColor {
    pub name: String,
    pub rgb: [u8; 3],
}

/// Named reference colors used to label a dominant color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColorPalette {
    /// Order matters: the first of several equidistant colors wins
    pub colors: Vec<NamedColor>,
}

impl TableFile for ColorPalette {}

impl ColorPalette {
    /// Nearest palette color by Euclidean RGB distance
    pub fn nearest(&self, rgb: [u8; 3]) -> Option<&NamedColor> {
        let mut best: Option<(&NamedColor, u32)> = None;
        for color in &self.colors {
            let distance = squared_distance(rgb, color.rgb);
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((color, distance));
            }
        }
        best.map(|(color, _)| color)
    }

    /// Palette name for `rgb` after the tinted-neutral and navy refinements
    pub fn name_for(&self, rgb: [u8; 3]) -> String {
        let initial = self
            .nearest(rgb)
            .map(|color| color.name.as_str())
            .unwrap_or("Unknown");
        refine_name(initial, rgb).to_string()
    }
}

fn squared_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

/// Ordered overrides: each step sees the previous step's result.
pub fn refine_name(initial: &str, rgb: [u8; 3]) -> &str {
    let [r, g, b] = rgb.map(i32::from);
    let hsv = rgb_to_hsv(rgb);
    let v = hsv.v as i32;

    let mut name = initial;

    if TINTABLE_NEUTRALS.iter().any(|neutral| *neutral == name) {
        if b > r + 8 && b > g + 5 && v > 160 {
            name = "Ice Blue";
        } else if g > r + 8 && g > b + 8 && v > 180 {
            name = "Mint";
        } else if b > g + 8 && r > g + 8 && v > 160 {
            name = "Lavender";
        }
    }

    if name == "Black" && b > r + 10 && b > g + 10 {
        name = "Navy";
    }

    if name == "Navy" && hsv.s < 90 {
        name = "Denim";
    }

    name
}

impl Default for ColorPalette {
    fn default() -> Self {
        const COLORS: &[(&str, [u8; 3])] = &[
            ("Black", [15, 15, 15]), ("White", [250, 250, 250]), ("Off-White", [248, 248, 255]),
            ("Gray", [128, 128, 128]), ("Charcoal", [54, 69, 79]), ("Silver", [192, 192, 192]),
            ("Slate", [112, 128, 144]), ("Taupe", [135, 124, 113]),
            ("Beige", [245, 245, 220]), ("Cream", [255, 253, 208]), ("Camel", [193, 154, 107]),
            ("Khaki", [240, 230, 140]), ("Brown", [100, 50, 20]), ("Coffee", [111, 78, 55]),
            ("Tan", [210, 180, 140]), ("Rust", [183, 65, 14]),
            ("Red", [220, 20, 60]), ("Burgundy", [128, 0, 32]),
            ("Pink", [255, 192, 203]), ("Hot Pink", [255, 105, 180]),
            ("Coral", [255, 127, 80]), ("Peach", [255, 218, 185]),
            ("Orange", [255, 165, 0]), ("Yellow", [255, 255, 0]), ("Gold", [212, 175, 55]),
            ("Green", [0, 128, 0]), ("Emerald", [80, 200, 120]), ("Forest Green", [34, 139, 34]),
            ("Olive", [85, 107, 47]), ("Sage", [156, 175, 136]), ("Lime", [50, 205, 50]),
            ("Mint", [162, 228, 184]), ("Teal", [0, 128, 128]),
            ("Blue", [0, 0, 255]), ("Navy", [0, 0, 128]), ("Royal Blue", [65, 105, 225]),
            ("Denim", [70, 130, 180]), ("Light Denim", [135, 206, 250]), ("Sky Blue", [135, 206, 235]),
            ("Ice Blue", [200, 230, 240]), ("Cyan", [0, 255, 255]), ("Turquoise", [64, 224, 208]),
            ("Purple", [128, 0, 128]), ("Lavender", [230, 230, 250]), ("Lilac", [200, 162, 200]),
            ("Mauve", [224, 176, 255]), ("Plum", [142, 69, 133]),
        ];

        Self {
            colors: COLORS
                .iter()
                .map(|(name, rgb)| NamedColor {
                    name: name.to_string(),
                    rgb: *rgb,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_palette_hits() {
        let palette = ColorPalette::default();
        for color in &palette.colors {
            assert_eq!(palette.nearest(color.rgb).map(|c| c.name.as_str()), Some(color.name.as_str()));
        }
    }

    #[test]
    fn test_tinted_neutrals() {
        let palette = ColorPalette::default();
        // bluish light gray
        assert_eq!(palette.name_for([180, 188, 200]), "Ice Blue");
        // greenish silver
        assert_eq!(refine_name("Silver", [180, 200, 185]), "Mint");
        // pinkish silver
        assert_eq!(refine_name("Silver", [200, 180, 200]), "Lavender");
        // plain gray stays
        assert_eq!(palette.name_for([128, 128, 128]), "Gray");
    }

    #[test]
    fn test_black_navy_denim_chain() {
        // near-black with a strong blue cast: Black -> Navy, saturated so it stays Navy
        assert_eq!(refine_name("Black", [5, 5, 40]), "Navy");
        // washed-out navy becomes denim
        assert_eq!(refine_name("Navy", [60, 70, 90]), "Denim");
        assert_eq!(refine_name("Navy", [0, 0, 128]), "Navy");
    }

    #[test]
    fn test_empty_palette_names_unknown() {
        let palette = ColorPalette { colors: Vec::new() };
        assert_eq!(palette.name_for([1, 2, 3]), "Unknown");
    }
}
