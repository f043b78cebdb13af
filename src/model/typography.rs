// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Font family plus the host's style label (`"Inter"` / `"Semi Bold"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontName {
    pub family: SmolStr,
    pub style: SmolStr,
}

impl FontName {
    pub fn new(family: impl Into<SmolStr>, style: impl Into<SmolStr>) -> Self {
        Self { family: family.into(), style: style.into() }
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "unit", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    /// Font-relative default, conventionally 1.2x the font size.
    #[default]
    Auto,
    Pixels(f64),
    Percent(f64),
}

impl LineHeight {
    /// Absolute line height in pixels for the given font size; `None` for `Auto`.
    pub fn resolve(self, font_size: f64) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Pixels(value) => Some(value),
            Self::Percent(value) => Some(font_size * value / 100.0),
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Short label used in property keys and listings (`auto`, `20px`, `150%`).
    pub fn key_label(self) -> String {
        match self {
            Self::Auto => "auto".to_owned(),
            Self::Pixels(value) => format!("{value}px"),
            Self::Percent(value) => format!("{value}%"),
        }
    }

    pub fn display_label(self) -> String {
        match self {
            Self::Auto => "Auto".to_owned(),
            Self::Pixels(value) => format!("{}px", round_to(value, 100.0)),
            Self::Percent(value) => format!("{}%", round_to(value, 1.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterSpacing {
    Pixels(f64),
    Percent(f64),
}

impl Default for LetterSpacing {
    fn default() -> Self {
        Self::Percent(0.0)
    }
}

impl LetterSpacing {
    pub fn display_label(self) -> String {
        match self {
            Self::Pixels(value) => format!("{}px", round_to(value, 100.0)),
            Self::Percent(value) => format!("{}%", round_to(value, 10.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
    SmallCaps,
    SmallCapsForced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Strikethrough,
}

/// Rounds half toward positive infinity. Never yields `-0`.
fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale + 0.5).floor() / scale + 0.0
}

#[cfg(test)]
mod tests {
    use super::{LetterSpacing, LineHeight};

    #[test]
    fn line_height_resolves_against_its_own_font_size() {
        assert_eq!(LineHeight::Auto.resolve(16.0), None);
        assert_eq!(LineHeight::Pixels(24.0).resolve(16.0), Some(24.0));
        assert_eq!(LineHeight::Percent(150.0).resolve(16.0), Some(24.0));
    }

    #[test]
    fn display_labels_round_like_the_style_list() {
        assert_eq!(LineHeight::Pixels(21.3333).display_label(), "21.33px");
        assert_eq!(LineHeight::Percent(149.6).display_label(), "150%");
        assert_eq!(LineHeight::Auto.display_label(), "Auto");
        assert_eq!(LetterSpacing::Percent(-2.04).display_label(), "-2%");
        assert_eq!(LetterSpacing::Percent(1.25).display_label(), "1.3%");
        assert_eq!(LetterSpacing::Pixels(0.5).display_label(), "0.5px");
    }

    #[test]
    fn display_labels_round_halves_up_and_drop_negative_zero() {
        assert_eq!(LetterSpacing::Percent(-0.04).display_label(), "0%");
        assert_eq!(LetterSpacing::Percent(-0.25).display_label(), "-0.2%");
        assert_eq!(LetterSpacing::Pixels(-0.001).display_label(), "0px");
        assert_eq!(LineHeight::Percent(-0.4).display_label(), "0%");
        assert_eq!(LineHeight::Percent(120.5).display_label(), "121%");
    }

    #[test]
    fn key_labels_keep_raw_values() {
        assert_eq!(LineHeight::Pixels(20.0).key_label(), "20px");
        assert_eq!(LineHeight::Percent(120.5).key_label(), "120.5%");
    }

    #[test]
    fn line_height_serializes_with_unit_tag() {
        let json = serde_json::to_value(LineHeight::Percent(150.0)).expect("serialize");
        assert_eq!(json, serde_json::json!({ "unit": "PERCENT", "value": 150.0 }));
        let auto: LineHeight =
            serde_json::from_value(serde_json::json!({ "unit": "AUTO" })).expect("deserialize");
        assert_eq!(auto, LineHeight::Auto);
    }
}
