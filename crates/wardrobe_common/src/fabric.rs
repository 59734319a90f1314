use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Fabric / material label attached to a garment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr)]
#[serde(from = "String", into = "String")]
pub enum Fabric {
    // Jewelry and accessory materials
    Gold,
    Silver,
    #[strum(to_string = "Leather Strap")]
    LeatherStrap,
    Metal,
    Leather,
    Canvas,
    Synthetic,

    Denim,
    Velvet,
    Wool,
    Linen,
    Satin,
    Cotton,
    Polyester,

    // Never produced by the classifier, only by user edits
    Silk,
    Chiffon,
    Jersey,
    Cashmere,
    Tweed,
    Fleece,
    Rayon,
    Spandex,

    #[default]
    Unknown,
    #[strum(default)]
    Other(String),
}

impl Fabric {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Other(label) => label,
            known => known.into(),
        }
    }

    /// Denim family check (matches "Denim", "Stretch Denim", ...)
    pub fn is_denim(&self) -> bool {
        self.as_str().contains("Denim")
    }
}

impl fmt::Display for Fabric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Fabric {
    fn from(label: String) -> Self {
        label.parse().unwrap_or(Self::Other(label))
    }
}

impl From<Fabric> for String {
    fn from(fabric: Fabric) -> Self {
        fabric.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        assert_eq!(Fabric::LeatherStrap.to_string(), "Leather Strap");
        assert_eq!(Fabric::from("Leather Strap".to_string()), Fabric::LeatherStrap);
        assert_eq!(Fabric::from("Bouclé".to_string()), Fabric::Other("Bouclé".to_string()));
    }

    #[test]
    fn test_denim_family() {
        assert!(Fabric::Denim.is_denim());
        assert!(Fabric::Other("Stretch Denim".to_string()).is_denim());
        assert!(!Fabric::Cotton.is_denim());
    }
}
