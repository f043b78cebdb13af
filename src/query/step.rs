// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

use crate::model::{Prop, RegisteredStyle, TextNode};

use super::extract::{extract, ExtractError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Larger,
    Smaller,
}

impl fmt::Display for StepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Larger => "larger",
            Self::Smaller => "smaller",
        })
    }
}

/// Family and size a step starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReference {
    pub family: SmolStr,
    pub size: f64,
    /// Styled nodes step to the next size; unstyled nodes snap to the closest one.
    pub styled: bool,
}

/// Where `node` currently sits: its style's family and size when uniformly styled, otherwise its
/// own effective properties.
///
/// `Ok(None)` when the node references a style that is no longer in the catalog.
pub fn step_reference(
    node: &TextNode,
    catalog: &[RegisteredStyle],
) -> Result<Option<StepReference>, ExtractError> {
    if let Prop::Uniform(style_id) = node.style_id() {
        return Ok(catalog.iter().find(|style| style.id() == &style_id).map(|style| {
            StepReference {
                family: SmolStr::new(style.font_family()),
                size: style.font_size(),
                styled: true,
            }
        }));
    }

    let props = extract(node)?;
    Ok(Some(StepReference { family: props.font_family, size: props.font_size, styled: false }))
}

/// Next style by size within the reference family, wrapping around at either end.
pub fn step<'a>(
    reference: &StepReference,
    catalog: &'a [RegisteredStyle],
    direction: StepDirection,
) -> Option<&'a RegisteredStyle> {
    let mut family = catalog
        .iter()
        .filter(|style| style.font_family() == reference.family.as_str())
        .collect::<Vec<_>>();
    match direction {
        StepDirection::Larger => family.sort_by(|a, b| a.font_size().total_cmp(&b.font_size())),
        StepDirection::Smaller => family.sort_by(|a, b| b.font_size().total_cmp(&a.font_size())),
    }
    let first = *family.first()?;

    if !reference.styled {
        let mut best = first;
        for &style in &family[1..] {
            if (style.font_size() - reference.size).abs() < (best.font_size() - reference.size).abs() {
                best = style;
            }
        }
        return Some(best);
    }

    let past = |style: &&RegisteredStyle| match direction {
        StepDirection::Larger => style.font_size() > reference.size,
        StepDirection::Smaller => style.font_size() < reference.size,
    };
    Some(family.iter().copied().find(past).unwrap_or(first))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use smol_str::SmolStr;

    use super::{step, step_reference, StepDirection, StepReference};
    use crate::model::fixtures::demo_document;
    use crate::model::{FontName, NodeId, RegisteredStyle, StyleId, TextNode};

    fn styled(family: &str, size: f64) -> StepReference {
        StepReference { family: SmolStr::new(family), size, styled: true }
    }

    fn step_id(reference: &StepReference, catalog: &[RegisteredStyle], direction: StepDirection) -> String {
        step(reference, catalog, direction).expect("step target").id().to_string()
    }

    #[rstest]
    #[case(16.0, StepDirection::Larger, "S:h2")]
    #[case(24.0, StepDirection::Smaller, "S:body")]
    #[case(32.0, StepDirection::Larger, "S:caption")]
    #[case(12.0, StepDirection::Smaller, "S:h1")]
    fn styled_nodes_step_within_family(
        #[case] size: f64,
        #[case] direction: StepDirection,
        #[case] expected: &str,
    ) {
        let doc = demo_document();
        assert_eq!(step_id(&styled("Inter", size), doc.styles(), direction), expected);
    }

    #[test]
    fn larger_then_smaller_returns_to_the_original_style() {
        let doc = demo_document();
        let catalog = doc.styles();
        for style in catalog.iter().filter(|style| style.font_family() == "Inter") {
            let up = step(&styled("Inter", style.font_size()), catalog, StepDirection::Larger)
                .expect("larger");
            let back = step(&styled("Inter", up.font_size()), catalog, StepDirection::Smaller)
                .expect("smaller");
            assert_eq!(back.id(), style.id(), "round trip from {}", style.name());
        }
    }

    #[test]
    fn duplicate_sizes_break_the_round_trip_at_the_second_entry() {
        let font = FontName::new("Inter", "Regular");
        let catalog = vec![
            RegisteredStyle::new(StyleId::new("S:a").expect("id"), "A").with_font(font.clone(), 16.0),
            RegisteredStyle::new(StyleId::new("S:b").expect("id"), "B").with_font(font.clone(), 16.0),
            RegisteredStyle::new(StyleId::new("S:c").expect("id"), "C").with_font(font, 24.0),
        ];
        assert_eq!(step_id(&styled("Inter", 16.0), &catalog, StepDirection::Larger), "S:c");
        // Stepping back lands on the first 16px entry, not necessarily the one we left.
        assert_eq!(step_id(&styled("Inter", 24.0), &catalog, StepDirection::Smaller), "S:a");
    }

    #[rstest]
    #[case(StepDirection::Larger)]
    #[case(StepDirection::Smaller)]
    fn unstyled_nodes_snap_to_closest_size_in_either_direction(#[case] direction: StepDirection) {
        let doc = demo_document();
        let reference = StepReference { family: SmolStr::new("Inter"), size: 22.0, styled: false };
        assert_eq!(step_id(&reference, doc.styles(), direction), "S:h2");
    }

    #[test]
    fn unknown_family_has_no_target() {
        let doc = demo_document();
        assert!(step(&styled("Roboto Mono", 11.0), doc.styles(), StepDirection::Larger).is_none());
    }

    #[test]
    fn reference_follows_style_or_node_properties() {
        let doc = demo_document();
        let heading = doc.text_node(&NodeId::new("2:2").expect("id")).expect("heading");
        let reference = step_reference(heading, doc.styles()).expect("reference").expect("styled");
        assert_eq!(reference, styled("Inter", 32.0));

        let loose = doc.text_node(&NodeId::new("2:3").expect("id")).expect("loose");
        let reference = step_reference(loose, doc.styles()).expect("reference").expect("unstyled");
        assert!(!reference.styled);
        assert_eq!(reference.size, 16.5);
    }

    #[test]
    fn reference_to_deleted_style_is_skipped() {
        let node = TextNode::new(NodeId::new("9:1").expect("id"), "Gone", FontName::new("Inter", "Bold"), 20.0)
            .with_style_id(StyleId::new("S:deleted").expect("id"));
        assert_eq!(step_reference(&node, &[]), Ok(None));
    }
}
