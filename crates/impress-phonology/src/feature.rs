//! Core feature types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PhonologyError;

/// A distinctive feature.
///
/// Declaration order is the display order, and `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Syllabic,
    Sonorant,
    Consonantal,
    Continuant,
    Nasal,
    Anterior,
    Coronal,
    Lateral,
    Voice,
}

impl Feature {
    /// Number of features in the system.
    pub const COUNT: usize = 9;

    /// Every feature, in display order.
    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::Syllabic,
        Feature::Sonorant,
        Feature::Consonantal,
        Feature::Continuant,
        Feature::Nasal,
        Feature::Anterior,
        Feature::Coronal,
        Feature::Lateral,
        Feature::Voice,
    ];

    /// Position of this feature in [`Feature::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used in tables and on screen.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Syllabic => "syllabic",
            Self::Sonorant => "sonorant",
            Self::Consonantal => "consonantal",
            Self::Continuant => "continuant",
            Self::Nasal => "nasal",
            Self::Anterior => "anterior",
            Self::Coronal => "coronal",
            Self::Lateral => "lateral",
            Self::Voice => "voice",
        }
    }

    /// Look up a feature by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = PhonologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::from_name(&name).ok_or_else(|| PhonologyError::UnknownFeature(s.trim().to_string()))
    }
}

/// Value of a feature for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureValue {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "0")]
    Unspecified,
}

impl FeatureValue {
    /// Parse from the single character symbol.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' | '−' => Some(Self::Minus),
            '0' => Some(Self::Unspecified),
            _ => None,
        }
    }

    /// Symbol shown before a feature name (`+nasal`).
    pub fn symbol(&self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Unspecified => '0',
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for FeatureValue {
    type Err = PhonologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| PhonologyError::UnknownValue(s.trim().to_string()))
            }
            _ => Err(PhonologyError::UnknownValue(s.trim().to_string())),
        }
    }
}
