// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::document::Document;
use super::ids::{NodeId, StyleId};
use super::node::{ContainerKind, ContainerNode, LeafKind, LeafNode, SceneNode, TextNode, TextRun};
use super::style::RegisteredStyle;
use super::typography::{FontName, LineHeight};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn sid(value: &str) -> StyleId {
    StyleId::new(value).expect("style id")
}

fn font(family: &str, style: &str) -> FontName {
    FontName::new(family, style)
}

/// Small marketing page: a styled heading, loose body copy, a mixed paragraph and a caption in a
/// family the catalog does not cover. The hero frame is selected.
pub fn demo_document() -> Document {
    let catalog = vec![
        RegisteredStyle::new(sid("S:caption"), "Caption").with_font(font("Inter", "Regular"), 12.0),
        RegisteredStyle::new(sid("S:body"), "Body")
            .with_font(font("Inter", "Regular"), 16.0)
            .with_line_height(LineHeight::Percent(150.0)),
        RegisteredStyle::new(sid("S:h2"), "Heading/H2").with_font(font("Inter", "Semi Bold"), 24.0),
        RegisteredStyle::new(sid("S:h1"), "Heading/H1").with_font(font("Inter", "Bold"), 32.0),
        RegisteredStyle::new(sid("S:legacy"), "Legacy/Display")
            .with_font(font("Georgia", "Regular"), 40.0),
    ];

    let mixed = TextNode::new(nid("2:4"), "Read more now", font("Inter", "Regular"), 16.0)
        .with_name("Mixed paragraph")
        .with_runs(vec![
            TextRun::new(5, font("Inter", "Regular"), 16.0)
                .with_line_height(LineHeight::Percent(150.0))
                .with_style_id(Some(sid("S:body"))),
            TextRun::new(8, font("Inter", "Medium"), 16.5),
        ])
        .expect("mixed runs");

    let hero = ContainerNode::new(nid("2:1"), "Hero", ContainerKind::Frame).with_children(vec![
        SceneNode::Text(
            TextNode::new(nid("2:2"), "Ship faster", font("Inter", "Bold"), 32.0)
                .with_style_id(sid("S:h1")),
        ),
        SceneNode::Text(
            TextNode::new(nid("2:3"), "Design tokens that stay in sync.", font("Inter", "Regular"), 16.5)
                .with_line_height(LineHeight::Pixels(24.0)),
        ),
        SceneNode::Text(mixed),
        SceneNode::Leaf(LeafNode::new(nid("2:5"), "Backdrop", LeafKind::Rectangle)),
        SceneNode::Container(
            ContainerNode::new(nid("2:6"), "Footer", ContainerKind::Group).with_children(vec![
                SceneNode::Text(TextNode::new(nid("2:7"), "(c) 2026", font("Roboto Mono", "Regular"), 11.0)),
                SceneNode::Text(TextNode::new(nid("2:8"), "Pricing", font("Inter", "Medium"), 20.0)),
            ]),
        ),
    ]);

    let page = ContainerNode::new(nid("0:1"), "Page 1", ContainerKind::Page)
        .with_children(vec![SceneNode::Container(hero)]);

    Document::from_parts("Demo", page, catalog, vec![nid("2:1")], None).expect("demo document")
}
