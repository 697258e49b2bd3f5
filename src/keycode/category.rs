//! Semantic key categories and their color encoding.

use serde::Serialize;
use std::fmt;

use super::display::{MODIFIER_GLYPHS, TRANSPARENT_GLYPH};
use crate::models::RgbColor;

/// Semantic bucket a key label falls into; drives key colors only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyCategory {
    /// Passes through to the layer below (`▽`)
    Transparent,
    /// Momentary or layer-tap switch (`MO(`, `LT`)
    LayerSwitch,
    /// Changes the default layer (`DF(`)
    DefaultLayerChange,
    /// Contains at least one modifier glyph
    ModifierCombo,
    /// Anything else
    Regular,
}

/// Fill and border color of a rendered key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyColors {
    /// Key face
    pub fill: RgbColor,
    /// Key outline
    pub border: RgbColor,
}

impl KeyCategory {
    /// All categories in legend order.
    pub const ALL: [Self; 5] = [
        Self::Regular,
        Self::ModifierCombo,
        Self::LayerSwitch,
        Self::DefaultLayerChange,
        Self::Transparent,
    ];

    /// Human-readable category name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Transparent => "Transparent",
            Self::LayerSwitch => "Layer switch",
            Self::DefaultLayerChange => "Default layer change",
            Self::ModifierCombo => "Modifier combo",
            Self::Regular => "Regular key",
        }
    }

    /// Stable identifier used as a CSS class / data attribute.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::LayerSwitch => "layer-switch",
            Self::DefaultLayerChange => "default-layer-change",
            Self::ModifierCombo => "modifier-combo",
            Self::Regular => "regular",
        }
    }

    /// Fill and border colors for this category.
    #[must_use]
    pub const fn colors(self) -> KeyColors {
        let (fill, border) = match self {
            Self::Transparent => (
                RgbColor::new(0xF0, 0xF0, 0xF0),
                RgbColor::new(0xCC, 0xCC, 0xCC),
            ),
            Self::LayerSwitch => (
                RgbColor::new(0xFF, 0xCC, 0xCC),
                RgbColor::new(0xCC, 0x00, 0x00),
            ),
            Self::DefaultLayerChange => (
                RgbColor::new(0xCC, 0xCC, 0xFF),
                RgbColor::new(0x00, 0x00, 0xCC),
            ),
            Self::ModifierCombo => (
                RgbColor::new(0xFF, 0xFF, 0xCC),
                RgbColor::new(0xCC, 0xCC, 0x00),
            ),
            Self::Regular => (
                RgbColor::new(0xE0, 0xE0, 0xE0),
                RgbColor::new(0x66, 0x66, 0x66),
            ),
        };
        KeyColors { fill, border }
    }
}

impl fmt::Display for KeyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Classifies a display label.
///
/// Rules are checked in order and the first match wins, so every label maps
/// to exactly one category.
///
/// # Examples
///
/// ```
/// use keyboard_visualizer::keycode::{classify, KeyCategory};
///
/// assert_eq!(classify("▽"), KeyCategory::Transparent);
/// assert_eq!(classify("MO(1)"), KeyCategory::LayerSwitch);
/// assert_eq!(classify("DF(0)"), KeyCategory::DefaultLayerChange);
/// assert_eq!(classify("⇧(1)"), KeyCategory::ModifierCombo);
/// assert_eq!(classify("A"), KeyCategory::Regular);
/// ```
#[must_use]
pub fn classify(label: &str) -> KeyCategory {
    if label == TRANSPARENT_GLYPH {
        KeyCategory::Transparent
    } else if label.starts_with("MO(") || label.starts_with("LT") {
        KeyCategory::LayerSwitch
    } else if label.starts_with("DF(") {
        KeyCategory::DefaultLayerChange
    } else if MODIFIER_GLYPHS.iter().any(|glyph| label.contains(glyph)) {
        KeyCategory::ModifierCombo
    } else {
        KeyCategory::Regular
    }
}

/// Colors for a display label.
#[must_use]
pub fn color_for(label: &str) -> KeyColors {
    classify(label).colors()
}
