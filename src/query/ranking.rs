// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Style ranking: tolerance-windowed nearest match and the unconstrained closest match.

use crate::model::RegisteredStyle;

use super::extract::TextProperties;

/// Named weights on the 100..=900 scale, longest keys first so substring matching prefers
/// `semibold` over `bold`.
const WEIGHT_SCALE: &[(&str, u16)] = &[
    ("extralight", 200),
    ("ultralight", 200),
    ("extrabold", 800),
    ("ultrabold", 800),
    ("demibold", 600),
    ("semibold", 600),
    ("hairline", 100),
    ("regular", 400),
    ("medium", 500),
    ("normal", 400),
    ("black", 900),
    ("heavy", 900),
    ("light", 300),
    ("thin", 100),
    ("book", 400),
    ("bold", 700),
];

const DEFAULT_WEIGHT: u16 = 400;

/// Maps a font style label (`"Semi Bold"`, `"ExtraLight Italic"`, `"700"`) to the numeric weight
/// scale. Unknown labels read as regular.
pub fn weight_scale(label: &str) -> u16 {
    let normalized = label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect::<String>();
    if normalized.is_empty() {
        return DEFAULT_WEIGHT;
    }

    if let Ok(numeric) = normalized.parse::<u16>() {
        if (1..=1000).contains(&numeric) {
            return numeric;
        }
    }

    if let Some((_, weight)) = WEIGHT_SCALE.iter().find(|(key, _)| *key == normalized) {
        return *weight;
    }

    WEIGHT_SCALE
        .iter()
        .find(|(key, _)| normalized.contains(key) || key.contains(normalized.as_str()))
        .map_or(DEFAULT_WEIGHT, |(_, weight)| *weight)
}

fn weight_delta(a: &str, b: &str) -> f64 {
    f64::from(weight_scale(a).abs_diff(weight_scale(b)))
}

/// How far a candidate's weight may drift from the node's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightPolicy {
    /// Numeric weights may differ by at most `max_delta` on the 100..=900 scale.
    Window { max_delta: u16 },
    /// Weight labels must be equal.
    Exact,
}

impl WeightPolicy {
    fn accepts(self, style_weight: &str, node_weight: &str) -> bool {
        match self {
            Self::Window { max_delta } => {
                weight_scale(style_weight).abs_diff(weight_scale(node_weight)) <= max_delta
            }
            Self::Exact => style_weight == node_weight,
        }
    }
}

/// Windows a catalog style must fall into to count as the nearest match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub weight: WeightPolicy,
    /// Maximum absolute font size difference.
    pub size: f64,
    /// Maximum relative line height difference, measured against the node's resolved value.
    pub line_height_ratio: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { weight: WeightPolicy::Window { max_delta: 100 }, size: 1.0, line_height_ratio: 0.20 }
    }
}

impl Tolerances {
    fn line_height_compatible(&self, style: &RegisteredStyle, props: &TextProperties) -> bool {
        let (Some(style_px), Some(node_px)) = (
            style.line_height().resolve(style.font_size()),
            props.line_height.resolve(props.font_size),
        ) else {
            return true;
        };
        if node_px == 0.0 {
            return style_px == 0.0;
        }
        (style_px - node_px).abs() / node_px <= self.line_height_ratio
    }

    fn accepts(&self, style: &RegisteredStyle, props: &TextProperties) -> bool {
        style.font_family() == props.font_family.as_str()
            && self.weight.accepts(style.font_weight(), &props.font_weight)
            && (style.font_size() - props.font_size).abs() <= self.size
            && self.line_height_compatible(style, props)
    }
}

/// The same-family style with the smallest size drift inside every tolerance window.
pub fn find_nearest<'a>(
    props: &TextProperties,
    catalog: &'a [RegisteredStyle],
    tolerances: &Tolerances,
) -> Option<&'a RegisteredStyle> {
    let mut best: Option<(&RegisteredStyle, f64)> = None;
    for style in catalog.iter().filter(|style| tolerances.accepts(style, props)) {
        let size_delta = (style.font_size() - props.font_size).abs();
        if best.map_or(true, |(_, best_delta)| size_delta < best_delta) {
            best = Some((style, size_delta));
        }
    }
    best.map(|(style, _)| style)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate<'a> {
    pub style: &'a RegisteredStyle,
    pub size_delta: f64,
    pub weight_delta: f64,
    pub is_different_family: bool,
}

impl MatchCandidate<'_> {
    /// Size dominates; half a point per 100 weight units breaks near-ties.
    pub fn total_delta(&self) -> f64 {
        self.size_delta + 0.5 * (self.weight_delta / 100.0)
    }
}

/// The catalog style with the smallest combined size and weight distance, ignoring tolerances.
///
/// A same-family style always wins over any other family, however far it is. `None` only for an
/// empty catalog.
pub fn find_closest<'a>(
    props: &TextProperties,
    catalog: &'a [RegisteredStyle],
) -> Option<MatchCandidate<'a>> {
    let mut same_family: Option<MatchCandidate<'a>> = None;
    let mut any_family: Option<MatchCandidate<'a>> = None;

    for style in catalog {
        let candidate = MatchCandidate {
            style,
            size_delta: (style.font_size() - props.font_size).abs(),
            weight_delta: weight_delta(style.font_weight(), &props.font_weight),
            is_different_family: style.font_family() != props.font_family.as_str(),
        };
        let total = candidate.total_delta();

        if !candidate.is_different_family
            && same_family.as_ref().map_or(true, |best| total < best.total_delta())
        {
            same_family = Some(candidate.clone());
        }
        if any_family.as_ref().map_or(true, |best| total < best.total_delta()) {
            any_family = Some(candidate);
        }
    }

    same_family
        .or_else(|| any_family.map(|candidate| MatchCandidate { is_different_family: true, ..candidate }))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use smol_str::SmolStr;

    use super::{find_closest, find_nearest, weight_scale, Tolerances, WeightPolicy};
    use crate::model::{FontName, LineHeight, RegisteredStyle, StyleId};
    use crate::query::TextProperties;

    fn props(family: &str, weight: &str, size: f64, line_height: LineHeight) -> TextProperties {
        TextProperties {
            font_family: SmolStr::new(family),
            font_weight: SmolStr::new(weight),
            font_size: size,
            line_height,
        }
    }

    fn style(id: &str, family: &str, weight: &str, size: f64) -> RegisteredStyle {
        RegisteredStyle::new(StyleId::new(id).expect("style id"), id)
            .with_font(FontName::new(family, weight), size)
    }

    #[rstest]
    #[case("Thin", 100)]
    #[case("ExtraLight", 200)]
    #[case("Light", 300)]
    #[case("Regular", 400)]
    #[case("Medium", 500)]
    #[case("Semi Bold", 600)]
    #[case("SemiBold", 600)]
    #[case("semi-bold", 600)]
    #[case("Bold", 700)]
    #[case("Extra Bold", 800)]
    #[case("Black", 900)]
    #[case("Heavy", 900)]
    #[case("Bold Italic", 700)]
    #[case("SemiBold Italic", 600)]
    #[case("650", 650)]
    #[case("Italic", 400)]
    #[case("", 400)]
    fn weight_scale_reads_named_and_numeric_labels(#[case] label: &str, #[case] expected: u16) {
        assert_eq!(weight_scale(label), expected);
    }

    #[test]
    fn nearest_accepts_small_size_drift_with_auto_line_height() {
        let catalog = vec![style("A", "Inter", "Regular", 14.0)];
        let query = props("Inter", "Regular", 14.5, LineHeight::Auto);
        let nearest = find_nearest(&query, &catalog, &Tolerances::default()).expect("nearest");
        assert_eq!(nearest.id().as_str(), "A");
    }

    #[test]
    fn nearest_rejects_size_outside_window_but_closest_still_matches() {
        let catalog = vec![style("A", "Inter", "Regular", 14.0)];
        let query = props("Inter", "Regular", 20.0, LineHeight::Auto);
        assert!(find_nearest(&query, &catalog, &Tolerances::default()).is_none());

        let closest = find_closest(&query, &catalog).expect("closest");
        assert_eq!(closest.style.id().as_str(), "A");
        assert!(!closest.is_different_family);
        assert_eq!(closest.size_delta, 6.0);
    }

    #[test]
    fn closest_on_empty_catalog_is_none() {
        let query = props("Inter", "Regular", 14.0, LineHeight::Auto);
        assert!(find_closest(&query, &[]).is_none());
    }

    #[rstest]
    #[case("Medium", true)]
    #[case("Semi Bold", false)]
    #[case("Light", true)]
    fn weight_window_bounds_nearest(#[case] node_weight: &str, #[case] matches: bool) {
        let catalog = vec![style("A", "Inter", "Regular", 16.0)];
        let query = props("Inter", node_weight, 16.0, LineHeight::Auto);
        assert_eq!(find_nearest(&query, &catalog, &Tolerances::default()).is_some(), matches);
    }

    #[test]
    fn exact_weight_policy_requires_equal_labels() {
        let catalog = vec![style("A", "Inter", "Regular", 16.0)];
        let tolerances = Tolerances { weight: WeightPolicy::Exact, ..Tolerances::default() };
        assert!(find_nearest(&props("Inter", "Medium", 16.0, LineHeight::Auto), &catalog, &tolerances)
            .is_none());
        assert!(find_nearest(&props("Inter", "Regular", 16.0, LineHeight::Auto), &catalog, &tolerances)
            .is_some());
    }

    #[test]
    fn nearest_never_crosses_family() {
        let catalog = vec![style("A", "Roboto", "Regular", 16.0)];
        let query = props("Inter", "Regular", 16.0, LineHeight::Auto);
        assert!(find_nearest(&query, &catalog, &Tolerances::default()).is_none());
    }

    #[test]
    fn family_comparison_is_case_sensitive() {
        let catalog = vec![style("A", "inter", "Regular", 16.0)];
        let query = props("Inter", "Regular", 16.0, LineHeight::Auto);
        assert!(find_nearest(&query, &catalog, &Tolerances::default()).is_none());
    }

    #[rstest]
    // 150% of 16 = 24px on both sides.
    #[case(LineHeight::Percent(150.0), LineHeight::Pixels(24.0), true)]
    // 20% window around 24px.
    #[case(LineHeight::Pixels(28.0), LineHeight::Pixels(24.0), true)]
    #[case(LineHeight::Pixels(29.0), LineHeight::Pixels(24.0), false)]
    #[case(LineHeight::Percent(100.0), LineHeight::Pixels(24.0), false)]
    #[case(LineHeight::Pixels(40.0), LineHeight::Auto, true)]
    #[case(LineHeight::Auto, LineHeight::Pixels(40.0), true)]
    fn line_height_window(
        #[case] style_line_height: LineHeight,
        #[case] node_line_height: LineHeight,
        #[case] matches: bool,
    ) {
        let catalog =
            vec![style("A", "Inter", "Regular", 16.0).with_line_height(style_line_height)];
        let query = props("Inter", "Regular", 16.0, node_line_height);
        assert_eq!(find_nearest(&query, &catalog, &Tolerances::default()).is_some(), matches);
    }

    #[test]
    fn nearest_prefers_smallest_size_delta_then_catalog_order() {
        let catalog = vec![
            style("far", "Inter", "Regular", 15.0),
            style("first", "Inter", "Regular", 16.5),
            style("second", "Inter", "Medium", 15.5),
        ];
        let query = props("Inter", "Regular", 16.0, LineHeight::Auto);
        let nearest = find_nearest(&query, &catalog, &Tolerances::default()).expect("nearest");
        assert_eq!(nearest.id().as_str(), "first");
    }

    #[test]
    fn closest_prefers_same_family_regardless_of_distance() {
        let catalog = vec![style("roboto", "Roboto", "Regular", 16.0), style("inter", "Inter", "Black", 72.0)];
        let query = props("Inter", "Regular", 16.0, LineHeight::Auto);
        let closest = find_closest(&query, &catalog).expect("closest");
        assert_eq!(closest.style.id().as_str(), "inter");
        assert!(!closest.is_different_family);
    }

    #[test]
    fn closest_falls_back_to_other_family_and_flags_it() {
        let catalog = vec![style("big", "Roboto", "Regular", 30.0), style("near", "Georgia", "Bold", 17.0)];
        let query = props("Inter", "Regular", 16.0, LineHeight::Auto);
        let closest = find_closest(&query, &catalog).expect("closest");
        assert_eq!(closest.style.id().as_str(), "near");
        assert!(closest.is_different_family);
        assert_eq!(closest.weight_delta, 300.0);
        assert_eq!(closest.total_delta(), 2.5);
    }

    #[test]
    fn closest_weight_breaks_size_ties() {
        let catalog = vec![style("bold", "Inter", "Bold", 18.0), style("medium", "Inter", "Medium", 18.0)];
        let query = props("Inter", "Regular", 16.0, LineHeight::Auto);
        let closest = find_closest(&query, &catalog).expect("closest");
        assert_eq!(closest.style.id().as_str(), "medium");
    }
}
