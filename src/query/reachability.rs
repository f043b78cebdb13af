// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use tracing::warn;

use crate::model::{Prop, RegisteredStyle, SceneNode, StyleId, TextNode};

use super::walk::text_nodes;

/// Style ids referenced anywhere under a root, at node and character granularity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleUsage {
    pub used: BTreeSet<StyleId>,
    pub nodes_scanned: usize,
}

impl StyleUsage {
    pub fn is_used(&self, style_id: &StyleId) -> bool {
        self.used.contains(style_id)
    }
}

/// Records every style id applied under `root`.
///
/// Mixed nodes are inspected one character at a time; a character range that cannot be read is
/// logged and skipped.
pub fn record_usage(root: &SceneNode) -> StyleUsage {
    let mut usage = StyleUsage::default();
    for node in text_nodes([root]) {
        usage.nodes_scanned += 1;
        record_node(node, &mut usage.used);
    }
    usage
}

fn record_node(node: &TextNode, used: &mut BTreeSet<StyleId>) {
    match node.style_id() {
        Prop::Uniform(style_id) => {
            used.insert(style_id);
        }
        Prop::Mixed => {
            for start in 0..node.char_len() {
                match node.range_style_id(start, start + 1) {
                    Ok(Prop::Uniform(style_id)) => {
                        used.insert(style_id);
                    }
                    Ok(Prop::Mixed | Prop::Absent) => {}
                    Err(err) => {
                        warn!(node_id = %node.id(), start, error = %err, "skipping unreadable character range");
                    }
                }
            }
        }
        Prop::Absent => {}
    }
}

/// Catalog styles no text node references. Ids found on nodes but missing from the catalog are
/// ignored.
pub fn find_unused<'a>(catalog: &'a [RegisteredStyle], usage: &StyleUsage) -> Vec<&'a RegisteredStyle> {
    catalog.iter().filter(|style| !usage.is_used(style.id())).collect()
}

/// Whether `node` references any of `style_ids`, either as a whole or from a single character.
pub fn node_references_any(node: &TextNode, style_ids: &BTreeSet<StyleId>) -> bool {
    let mut used = BTreeSet::new();
    record_node(node, &mut used);
    used.iter().any(|style_id| style_ids.contains(style_id))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{find_unused, node_references_any, record_usage};
    use crate::host::Host;
    use crate::model::fixtures::demo_document;
    use crate::model::{
        ContainerKind, ContainerNode, FontName, NodeId, RegisteredStyle, SceneNode, StyleId,
        TextNode, TextRun,
    };

    fn sid(value: &str) -> StyleId {
        StyleId::new(value).expect("style id")
    }

    #[test]
    fn demo_usage_counts_mixed_ranges() {
        let doc = demo_document();
        let usage = record_usage(doc.root());
        assert_eq!(usage.nodes_scanned, 5);
        assert_eq!(usage.used, BTreeSet::from([sid("S:body"), sid("S:h1")]));

        let unused = find_unused(doc.styles(), &usage)
            .into_iter()
            .map(|style| style.id().to_string())
            .collect::<Vec<_>>();
        assert_eq!(unused, ["S:caption", "S:h2", "S:legacy"]);
    }

    #[test]
    fn ids_missing_from_catalog_are_not_reported() {
        let font = FontName::new("Inter", "Regular");
        let page = SceneNode::Container(
            ContainerNode::new(NodeId::new("0:1").expect("id"), "Page", ContainerKind::Page)
                .with_children(vec![SceneNode::Text(
                    TextNode::new(NodeId::new("1:1").expect("id"), "ab", font.clone(), 12.0)
                        .with_runs(vec![
                            TextRun::new(1, font.clone(), 12.0).with_style_id(Some(sid("S:gone"))),
                            TextRun::new(1, font, 12.0).with_style_id(Some(sid("S:kept"))),
                        ])
                        .expect("runs"),
                )]),
        );
        let catalog = vec![
            RegisteredStyle::new(sid("S:kept"), "Kept"),
            RegisteredStyle::new(sid("S:idle"), "Idle"),
        ];

        let usage = record_usage(&page);
        let unused = find_unused(&catalog, &usage);
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].id(), &sid("S:idle"));
    }

    #[test]
    fn single_character_reference_counts() {
        let doc = demo_document();
        let mixed = doc.text_node(&NodeId::new("2:4").expect("id")).expect("mixed node");
        assert!(node_references_any(mixed, &BTreeSet::from([sid("S:body")])));
        assert!(!node_references_any(mixed, &BTreeSet::from([sid("S:caption")])));
    }

    #[test]
    fn empty_catalog_has_nothing_unused() {
        let doc = demo_document();
        assert!(find_unused(&[], &record_usage(doc.root())).is_empty());
    }
}
