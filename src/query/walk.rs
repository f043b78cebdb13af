// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::host::Host;
use crate::model::{SceneNode, TextNode};

/// Appends every text leaf under `node` in document order (pre-order, left to right).
pub fn collect_text_nodes<'a>(node: &'a SceneNode, out: &mut Vec<&'a TextNode>) {
    match node {
        SceneNode::Text(text) => out.push(text),
        SceneNode::Container(_) | SceneNode::Leaf(_) => {
            for child in node.children().into_iter().flatten() {
                collect_text_nodes(child, out);
            }
        }
    }
}

/// Text leaves under several roots, concatenated in root order.
pub fn text_nodes<'a, I>(roots: I) -> Vec<&'a TextNode>
where
    I: IntoIterator<Item = &'a SceneNode>,
{
    let mut out = Vec::new();
    for root in roots {
        collect_text_nodes(root, &mut out);
    }
    out
}

/// Text leaves under the host's current selection. Selected ids the host cannot resolve are
/// skipped.
pub fn selection_text_nodes<H: Host + ?Sized>(host: &H) -> Vec<&TextNode> {
    let selection = host.selection();
    text_nodes(selection.iter().filter_map(|node_id| host.find_node(node_id)))
}

#[cfg(test)]
mod tests {
    use super::{selection_text_nodes, text_nodes};
    use crate::host::Host;
    use crate::model::fixtures::demo_document;
    use crate::model::NodeId;

    fn ids(nodes: &[&crate::model::TextNode]) -> Vec<String> {
        nodes.iter().map(|node| node.id().to_string()).collect()
    }

    #[test]
    fn walks_text_leaves_in_document_order() {
        let doc = demo_document();
        let nodes = text_nodes([doc.root()]);
        assert_eq!(ids(&nodes), ["2:2", "2:3", "2:4", "2:7", "2:8"]);
    }

    #[test]
    fn concatenates_multiple_roots_in_root_order() {
        let doc = demo_document();
        let footer = doc.find_node(&NodeId::new("2:6").expect("id")).expect("footer");
        let heading = doc.find_node(&NodeId::new("2:2").expect("id")).expect("heading");
        let nodes = text_nodes([footer, heading]);
        assert_eq!(ids(&nodes), ["2:7", "2:8", "2:2"]);
    }

    #[test]
    fn skips_non_text_leaves() {
        let doc = demo_document();
        let backdrop = doc.find_node(&NodeId::new("2:5").expect("id")).expect("backdrop");
        assert!(text_nodes([backdrop]).is_empty());
    }

    #[test]
    fn selection_walk_resolves_selected_roots() {
        let mut doc = demo_document();
        doc.set_selection(vec![NodeId::new("2:6").expect("id")]).expect("select");
        assert_eq!(ids(&selection_text_nodes(&doc)), ["2:7", "2:8"]);
    }
}
