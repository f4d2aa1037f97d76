//! The spacing scale.

use serde::{Deserialize, Serialize};

/// A step on the spacing scale, rendered as a utility-class suffix
/// (`p-4`, `gap-0.5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Space {
    /// `0`
    #[serde(rename = "0")]
    S0,
    /// `0.5`
    #[serde(rename = "0.5")]
    Half,
    /// `1`
    #[serde(rename = "1")]
    S1,
    /// `2`
    #[serde(rename = "2")]
    S2,
    /// `3`
    #[serde(rename = "3")]
    S3,
    /// `4`
    #[serde(rename = "4")]
    S4,
    /// `5`
    #[serde(rename = "5")]
    S5,
    /// `6`
    #[serde(rename = "6")]
    S6,
    /// `8`
    #[serde(rename = "8")]
    S8,
    /// `10`
    #[serde(rename = "10")]
    S10,
    /// `12`
    #[serde(rename = "12")]
    S12,
    /// `16`
    #[serde(rename = "16")]
    S16,
}

impl Space {
    /// Every step, smallest first.
    pub const SCALE: [Space; 12] = [
        Self::S0,
        Self::Half,
        Self::S1,
        Self::S2,
        Self::S3,
        Self::S4,
        Self::S5,
        Self::S6,
        Self::S8,
        Self::S10,
        Self::S12,
        Self::S16,
    ];

    /// The class suffix.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::S0 => "0",
            Self::Half => "0.5",
            Self::S1 => "1",
            Self::S2 => "2",
            Self::S3 => "3",
            Self::S4 => "4",
            Self::S5 => "5",
            Self::S6 => "6",
            Self::S8 => "8",
            Self::S10 => "10",
            Self::S12 => "12",
            Self::S16 => "16",
        }
    }

    /// `{prefix}-{suffix}`, e.g. `Space::S4.class("px")` is `px-4`.
    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

impl core::fmt::Display for Space {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_sorted_and_suffixes_parse() {
        let mut previous = -1.0_f64;
        for step in Space::SCALE {
            let value: f64 = step.suffix().parse().unwrap();
            assert!(value > previous);
            previous = value;
        }
    }

    #[test]
    fn class_and_serde_agree() {
        assert_eq!(Space::Half.class("gap"), "gap-0.5");
        assert_eq!(serde_json::to_string(&Space::S12).unwrap(), r#""12""#);
        let parsed: Space = serde_json::from_str(r#""0.5""#).unwrap();
        assert_eq!(parsed, Space::Half);
    }
}
