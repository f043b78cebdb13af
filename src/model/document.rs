// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use crate::host::{Host, HostError, StyleProperty};

use super::ids::{NodeId, StyleId};
use super::node::{ContainerKind, ContainerNode, SceneNode, TextNode};
use super::style::RegisteredStyle;
use super::typography::{FontName, LetterSpacing, LineHeight};

/// In-memory host: one page of nodes plus the document-wide style catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    root: SceneNode,
    styles: Vec<RegisteredStyle>,
    selection: Vec<NodeId>,
    font_library: Option<BTreeSet<FontName>>,
    loaded_fonts: BTreeSet<FontName>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    RootNotPage,
    DuplicateNodeId(NodeId),
    DuplicateStyleId(StyleId),
    UnknownSelection(NodeId),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotPage => f.write_str("document root must be a PAGE container"),
            Self::DuplicateNodeId(node_id) => write!(f, "duplicate node id {node_id}"),
            Self::DuplicateStyleId(style_id) => write!(f, "duplicate style id {style_id}"),
            Self::UnknownSelection(node_id) => write!(f, "selected node {node_id} does not exist"),
        }
    }
}

impl std::error::Error for DocumentError {}

impl Document {
    pub fn new(name: impl Into<String>, page_id: NodeId) -> Self {
        Self {
            name: name.into(),
            root: SceneNode::Container(ContainerNode::new(page_id, "Page 1", ContainerKind::Page)),
            styles: Vec::new(),
            selection: Vec::new(),
            font_library: None,
            loaded_fonts: BTreeSet::new(),
        }
    }

    /// Assembles a document, enforcing unique node/style ids and a resolvable selection.
    pub fn from_parts(
        name: impl Into<String>,
        page: ContainerNode,
        styles: Vec<RegisteredStyle>,
        selection: Vec<NodeId>,
        font_library: Option<BTreeSet<FontName>>,
    ) -> Result<Self, DocumentError> {
        if page.kind() != ContainerKind::Page {
            return Err(DocumentError::RootNotPage);
        }

        let root = SceneNode::Container(page);
        let mut node_ids = BTreeSet::new();
        check_unique_node_ids(&root, &mut node_ids)?;

        let mut style_ids = BTreeSet::new();
        for style in &styles {
            if !style_ids.insert(style.id().clone()) {
                return Err(DocumentError::DuplicateStyleId(style.id().clone()));
            }
        }

        if let Some(missing) = selection.iter().find(|node_id| !node_ids.contains(*node_id)) {
            return Err(DocumentError::UnknownSelection(missing.clone()));
        }

        Ok(Self {
            name: name.into(),
            root,
            styles,
            selection,
            font_library,
            loaded_fonts: BTreeSet::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn page(&self) -> &ContainerNode {
        match &self.root {
            SceneNode::Container(page) => page,
            SceneNode::Text(_) | SceneNode::Leaf(_) => {
                unreachable!("document root is always a page container")
            }
        }
    }

    pub fn styles(&self) -> &[RegisteredStyle] {
        &self.styles
    }

    pub fn insert_style(&mut self, style: RegisteredStyle) -> Result<(), DocumentError> {
        if self.styles.iter().any(|existing| existing.id() == style.id()) {
            return Err(DocumentError::DuplicateStyleId(style.id().clone()));
        }
        self.styles.push(style);
        Ok(())
    }

    pub fn font_library(&self) -> Option<&BTreeSet<FontName>> {
        self.font_library.as_ref()
    }

    /// Restricts loadable fonts; `None` makes every font loadable.
    pub fn set_font_library(&mut self, font_library: Option<BTreeSet<FontName>>) {
        self.font_library = font_library;
    }

    pub fn text_node(&self, node_id: &NodeId) -> Option<&TextNode> {
        self.root.find(node_id)?.as_text()
    }

    fn font_available(&self, font: &FontName) -> bool {
        self.font_library.as_ref().map_or(true, |library| library.contains(font))
    }

    fn style_index(&self, style_id: &StyleId) -> Result<usize, HostError> {
        self.styles
            .iter()
            .position(|style| style.id() == style_id)
            .ok_or_else(|| HostError::StyleNotFound(style_id.clone()))
    }

    fn allocate_style_id(&self) -> StyleId {
        let mut seq = self.styles.len() + 1;
        loop {
            let candidate = format!("S:local-{seq}");
            if !self.styles.iter().any(|style| style.id().as_str() == candidate) {
                return StyleId::new(candidate).expect("generated style id is valid");
            }
            seq += 1;
        }
    }

    /// Propagates a changed style to every character run that references it.
    fn restyle_references(&mut self, style: &RegisteredStyle) {
        for_each_text_mut(&mut self.root, &mut |node| {
            if node.style_id().uniform() == Some(style.id()) {
                node.apply_style(style);
                return;
            }
            let runs = node
                .runs()
                .iter()
                .cloned()
                .map(|mut run| {
                    if run.style_id.as_ref() == Some(style.id()) {
                        run.font_name = style.font_name().clone();
                        run.font_size = style.font_size();
                        run.line_height = style.line_height();
                        run.letter_spacing = style.letter_spacing();
                        run.text_case = style.text_case();
                        run.text_decoration = style.text_decoration();
                    }
                    run
                })
                .collect::<Vec<_>>();
            node.set_runs(runs).expect("run lengths are unchanged");
        });
    }

    fn detach_references(&mut self, style_id: &StyleId) {
        for_each_text_mut(&mut self.root, &mut |node| {
            let runs = node
                .runs()
                .iter()
                .cloned()
                .map(|mut run| {
                    if run.style_id.as_ref() == Some(style_id) {
                        run.style_id = None;
                    }
                    run
                })
                .collect::<Vec<_>>();
            node.set_runs(runs).expect("run lengths are unchanged");
        });
    }
}

impl Host for Document {
    fn root(&self) -> &SceneNode {
        &self.root
    }

    fn selection(&self) -> Vec<NodeId> {
        self.selection.clone()
    }

    fn set_selection(&mut self, nodes: Vec<NodeId>) -> Result<(), HostError> {
        if let Some(missing) = nodes.iter().find(|node_id| self.root.find(node_id).is_none()) {
            return Err(HostError::NodeNotFound(missing.clone()));
        }
        self.selection = nodes;
        Ok(())
    }

    fn text_styles(&self) -> Vec<RegisteredStyle> {
        self.styles.clone()
    }

    fn text_style(&self, id: &StyleId) -> Option<RegisteredStyle> {
        self.styles.iter().find(|style| style.id() == id).cloned()
    }

    fn load_font(&mut self, font: &FontName) -> Result<(), HostError> {
        if !self.font_available(font) {
            return Err(HostError::FontUnavailable(font.clone()));
        }
        self.loaded_fonts.insert(font.clone());
        Ok(())
    }

    fn set_text_style_id(&mut self, node_id: &NodeId, style_id: &StyleId) -> Result<(), HostError> {
        let style = self.styles[self.style_index(style_id)?].clone();
        if !self.font_available(style.font_name()) {
            return Err(HostError::FontUnavailable(style.font_name().clone()));
        }

        let node = self
            .root
            .find_mut(node_id)
            .ok_or_else(|| HostError::NodeNotFound(node_id.clone()))?;
        let SceneNode::Text(text) = node else {
            return Err(HostError::NotText(node_id.clone()));
        };
        text.apply_style(&style);
        Ok(())
    }

    fn create_text_style(&mut self, name: &str) -> Result<StyleId, HostError> {
        let style_id = self.allocate_style_id();
        self.styles.push(RegisteredStyle::new(style_id.clone(), name));
        Ok(style_id)
    }

    fn set_style_property(
        &mut self,
        style_id: &StyleId,
        property: StyleProperty,
    ) -> Result<(), HostError> {
        let index = self.style_index(style_id)?;
        let current_font = self.styles[index].font_name().clone();
        if property.requires_loaded_font() && !self.loaded_fonts.contains(&current_font) {
            return Err(HostError::FontNotLoaded(current_font));
        }
        validate_property(&property)?;
        if let StyleProperty::FontName(font) = &property {
            if !self.loaded_fonts.contains(font) {
                return Err(HostError::FontNotLoaded(font.clone()));
            }
        }

        let style = &mut self.styles[index];
        match property {
            StyleProperty::FontName(font) => style.set_font_name(font),
            StyleProperty::FontSize(size) => style.set_font_size(size),
            StyleProperty::LineHeight(line_height) => style.set_line_height(line_height),
            StyleProperty::LetterSpacing(spacing) => style.set_letter_spacing(spacing),
            StyleProperty::TextAlignHorizontal(align) => style.set_text_align_horizontal(Some(align)),
            StyleProperty::TextAlignVertical(align) => style.set_text_align_vertical(Some(align)),
            StyleProperty::TextCase(text_case) => style.set_text_case(text_case),
            StyleProperty::TextDecoration(decoration) => style.set_text_decoration(decoration),
            StyleProperty::ParagraphSpacing(spacing) => style.set_paragraph_spacing(spacing),
            StyleProperty::ParagraphIndent(indent) => style.set_paragraph_indent(indent),
        }

        let updated = self.styles[index].clone();
        self.restyle_references(&updated);
        Ok(())
    }

    fn remove_text_style(&mut self, style_id: &StyleId) -> Result<(), HostError> {
        let index = self.style_index(style_id)?;
        if self.styles[index].is_remote() {
            return Err(HostError::RemoteStyle { name: self.styles[index].name().to_owned() });
        }
        self.styles.remove(index);
        self.detach_references(style_id);
        Ok(())
    }
}

fn validate_property(property: &StyleProperty) -> Result<(), HostError> {
    let invalid = |value: String| HostError::InvalidValue { property: property.label(), value };

    match property {
        StyleProperty::FontSize(size) if !size.is_finite() || *size < 1.0 => {
            Err(invalid(size.to_string()))
        }
        StyleProperty::LineHeight(LineHeight::Pixels(value) | LineHeight::Percent(value))
            if !value.is_finite() || *value <= 0.0 =>
        {
            Err(invalid(value.to_string()))
        }
        StyleProperty::LetterSpacing(LetterSpacing::Pixels(value) | LetterSpacing::Percent(value))
            if !value.is_finite() =>
        {
            Err(invalid(value.to_string()))
        }
        StyleProperty::ParagraphSpacing(value) | StyleProperty::ParagraphIndent(value)
            if !value.is_finite() || *value < 0.0 =>
        {
            Err(invalid(value.to_string()))
        }
        _ => Ok(()),
    }
}

fn check_unique_node_ids(
    node: &SceneNode,
    seen: &mut BTreeSet<NodeId>,
) -> Result<(), DocumentError> {
    if !seen.insert(node.id().clone()) {
        return Err(DocumentError::DuplicateNodeId(node.id().clone()));
    }
    for child in node.children().into_iter().flatten() {
        check_unique_node_ids(child, seen)?;
    }
    Ok(())
}

fn for_each_text_mut(node: &mut SceneNode, f: &mut impl FnMut(&mut TextNode)) {
    match node {
        SceneNode::Text(text) => f(text),
        SceneNode::Container(container) => {
            for child in container.children_mut() {
                for_each_text_mut(child, f);
            }
        }
        SceneNode::Leaf(_) => {}
    }
}
