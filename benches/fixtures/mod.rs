// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use stylesweep::model::{
    ContainerKind, ContainerNode, Document, FontName, LineHeight, NodeId, RegisteredStyle,
    SceneNode, StyleId, TextNode, TextRun,
};
use stylesweep::query::TextProperties;

const FAMILIES: [&str; 3] = ["Inter", "Roboto", "Source Serif"];
const WEIGHTS: [&str; 5] = ["Light", "Regular", "Medium", "Semi Bold", "Bold"];
const SIZES: [f64; 8] = [12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 32.0, 40.0];

fn nid(value: String) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn sid(value: String) -> StyleId {
    StyleId::new(value).expect("style id")
}

/// Every family/weight/size combination, `FAMILIES * WEIGHTS * SIZES` styles in total.
pub fn catalog() -> Vec<RegisteredStyle> {
    let mut styles = Vec::new();
    for family in FAMILIES {
        for weight in WEIGHTS {
            for size in SIZES {
                let line_height = if size >= 24.0 {
                    LineHeight::Percent(120.0)
                } else {
                    LineHeight::Percent(150.0)
                };
                styles.push(
                    RegisteredStyle::new(
                        sid(format!("S:{family}-{weight}-{size}").replace(' ', "_")),
                        format!("{family}/{weight}/{size}"),
                    )
                    .with_font(FontName::new(family, weight), size)
                    .with_line_height(line_height),
                );
            }
        }
    }
    styles
}

/// Text node `idx`: every third is styled, every seventh mixes two runs, the rest drift a little
/// off the catalog grid.
fn text_node(idx: usize, catalog: &[RegisteredStyle]) -> TextNode {
    let family = FAMILIES[idx % FAMILIES.len()];
    let weight = WEIGHTS[(idx / 3) % WEIGHTS.len()];
    let size = SIZES[(idx / 7) % SIZES.len()] + (idx % 4) as f64 * 0.25;
    let id = nid(format!("3:{idx}"));
    let characters = format!("Generated copy {idx:06}");

    if idx % 3 == 0 {
        let style = &catalog[idx % catalog.len()];
        let mut node =
            TextNode::new(id, characters, style.font_name().clone(), style.font_size());
        node.apply_style(style);
        return node;
    }

    if idx % 7 == 0 {
        let style = &catalog[(idx * 5) % catalog.len()];
        let len = characters.chars().count();
        return TextNode::new(id, characters, FontName::new(family, weight), size)
            .with_runs(vec![
                TextRun::new(5, style.font_name().clone(), style.font_size())
                    .with_line_height(style.line_height())
                    .with_style_id(Some(style.id().clone())),
                TextRun::new(len - 5, FontName::new(family, weight), size),
            ])
            .expect("mixed runs");
    }

    TextNode::new(id, characters, FontName::new(family, weight), size)
        .with_line_height(LineHeight::Pixels(size * 1.5))
}

/// A page of `frames` frames holding `texts_per_frame` text nodes each, with every frame selected.
pub fn document(frames: usize, texts_per_frame: usize) -> Document {
    let catalog = catalog();
    let mut idx = 0usize;
    let mut children = Vec::with_capacity(frames);
    let mut selection = Vec::with_capacity(frames);
    for frame in 0..frames {
        let frame_id = nid(format!("2:{frame}"));
        let texts = (0..texts_per_frame)
            .map(|_| {
                let node = text_node(idx, &catalog);
                idx += 1;
                SceneNode::Text(node)
            })
            .collect();
        selection.push(frame_id.clone());
        children.push(SceneNode::Container(
            ContainerNode::new(frame_id, format!("Frame {frame}"), ContainerKind::Frame)
                .with_children(texts),
        ));
    }

    let page = ContainerNode::new(nid("0:1".to_owned()), "Page 1", ContainerKind::Page)
        .with_children(children);
    Document::from_parts("Bench", page, catalog, selection, None).expect("bench document")
}

/// Off-grid property queries cycling through the catalog families and weights.
pub fn queries(count: usize) -> Vec<TextProperties> {
    (0..count)
        .map(|idx| TextProperties {
            font_family: FAMILIES[idx % FAMILIES.len()].into(),
            font_weight: WEIGHTS[(idx / 2) % WEIGHTS.len()].into(),
            font_size: SIZES[idx % SIZES.len()] + 0.5,
            line_height: if idx % 2 == 0 { LineHeight::Auto } else { LineHeight::Pixels(24.0) },
        })
        .collect()
}
