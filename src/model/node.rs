// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::host::HostError;

use super::ids::{NodeId, StyleId};
use super::style::RegisteredStyle;
use super::typography::{
    FontName, LetterSpacing, LineHeight, TextAlignHorizontal, TextAlignVertical, TextCase,
    TextDecoration,
};
use super::value::Prop;

/// A node in the host's scene tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Container(ContainerNode),
    Text(TextNode),
    Leaf(LeafNode),
}

impl SceneNode {
    pub fn id(&self) -> &NodeId {
        match self {
            Self::Container(node) => node.id(),
            Self::Text(node) => node.id(),
            Self::Leaf(node) => node.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Container(node) => node.name(),
            Self::Text(node) => node.name(),
            Self::Leaf(node) => node.name(),
        }
    }

    /// Child collection, if this node exposes one.
    pub fn children(&self) -> Option<&[SceneNode]> {
        match self {
            Self::Container(node) => Some(node.children()),
            Self::Text(_) | Self::Leaf(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Text(node) => Some(node),
            Self::Container(_) | Self::Leaf(_) => None,
        }
    }

    pub fn find(&self, id: &NodeId) -> Option<&SceneNode> {
        if self.id() == id {
            return Some(self);
        }
        self.children()?.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut SceneNode> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Self::Container(node) => {
                node.children_mut().iter_mut().find_map(|child| child.find_mut(id))
            }
            Self::Text(_) | Self::Leaf(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerKind {
    Page,
    Frame,
    Group,
    Section,
    Component,
    Instance,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    id: NodeId,
    name: String,
    kind: ContainerKind,
    children: Vec<SceneNode>,
}

impl ContainerNode {
    pub fn new(id: NodeId, name: impl Into<String>, kind: ContainerKind) -> Self {
        Self { id, name: name.into(), kind, children: Vec::new() }
    }

    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.children = children;
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<SceneNode> {
        &mut self.children
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeafKind {
    Rectangle,
    Ellipse,
    Vector,
    Line,
    Image,
}

/// Non-container, non-text node (shapes, images). Skipped by every text scan.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    id: NodeId,
    name: String,
    kind: LeafKind,
}

impl LeafNode {
    pub fn new(id: NodeId, name: impl Into<String>, kind: LeafKind) -> Self {
        Self { id, name: name.into(), kind }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> LeafKind {
        self.kind
    }
}

/// Character-level typography for a contiguous run of characters.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub len: usize,
    pub font_name: FontName,
    pub font_size: f64,
    pub line_height: LineHeight,
    pub letter_spacing: LetterSpacing,
    pub text_case: TextCase,
    pub text_decoration: TextDecoration,
    pub style_id: Option<StyleId>,
}

impl TextRun {
    pub fn new(len: usize, font_name: FontName, font_size: f64) -> Self {
        Self {
            len,
            font_name,
            font_size,
            line_height: LineHeight::Auto,
            letter_spacing: LetterSpacing::default(),
            text_case: TextCase::Original,
            text_decoration: TextDecoration::None,
            style_id: None,
        }
    }

    pub fn with_line_height(mut self, line_height: LineHeight) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_style_id(mut self, style_id: Option<StyleId>) -> Self {
        self.style_id = style_id;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    id: NodeId,
    name: String,
    characters: String,
    char_len: usize,
    runs: SmallVec<[TextRun; 1]>,
    text_align_horizontal: TextAlignHorizontal,
    text_align_vertical: TextAlignVertical,
    paragraph_spacing: f64,
    paragraph_indent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLengthMismatch {
    pub char_len: usize,
    pub runs_len: usize,
}

impl std::fmt::Display for RunLengthMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "text runs cover {} characters, node has {}", self.runs_len, self.char_len)
    }
}

impl std::error::Error for RunLengthMismatch {}

impl TextNode {
    /// Text node whose characters all share one run of the given font.
    ///
    /// Nodes without characters carry no runs; every character property then reads `Absent`.
    pub fn new(
        id: NodeId,
        characters: impl Into<String>,
        font_name: FontName,
        font_size: f64,
    ) -> Self {
        let characters = characters.into();
        let char_len = characters.chars().count();
        let mut runs = SmallVec::new();
        if char_len > 0 {
            runs.push(TextRun::new(char_len, font_name, font_size));
        }
        Self {
            id,
            name: characters.clone(),
            characters,
            char_len,
            runs,
            text_align_horizontal: TextAlignHorizontal::Left,
            text_align_vertical: TextAlignVertical::Top,
            paragraph_spacing: 0.0,
            paragraph_indent: 0.0,
        }
    }

    /// Replaces the character runs; the run lengths must cover every character exactly.
    pub fn with_runs(mut self, runs: Vec<TextRun>) -> Result<Self, RunLengthMismatch> {
        self.set_runs(runs)?;
        Ok(self)
    }

    pub fn set_runs(&mut self, runs: Vec<TextRun>) -> Result<(), RunLengthMismatch> {
        let runs_len = runs.iter().map(|run| run.len).sum::<usize>();
        if runs_len != self.char_len || runs.iter().any(|run| run.len == 0) {
            return Err(RunLengthMismatch { char_len: self.char_len, runs_len });
        }
        self.runs = runs.into_iter().collect();
        Ok(())
    }

    pub fn with_line_height(mut self, line_height: LineHeight) -> Self {
        for run in &mut self.runs {
            run.line_height = line_height;
        }
        self
    }

    pub fn with_style_id(mut self, style_id: StyleId) -> Self {
        for run in &mut self.runs {
            run.style_id = Some(style_id.clone());
        }
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn characters(&self) -> &str {
        &self.characters
    }

    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Style reference of the whole node. A uniformly unset reference reads `Absent`.
    pub fn style_id(&self) -> Prop<StyleId> {
        flatten_style_id(Prop::collapse(self.runs.iter().map(|run| run.style_id.clone())))
    }

    pub fn font_name(&self) -> Prop<FontName> {
        Prop::collapse(self.runs.iter().map(|run| run.font_name.clone()))
    }

    pub fn font_size(&self) -> Prop<f64> {
        Prop::collapse(self.runs.iter().map(|run| run.font_size))
    }

    pub fn line_height(&self) -> Prop<LineHeight> {
        Prop::collapse(self.runs.iter().map(|run| run.line_height))
    }

    pub fn letter_spacing(&self) -> Prop<LetterSpacing> {
        Prop::collapse(self.runs.iter().map(|run| run.letter_spacing))
    }

    pub fn text_case(&self) -> Prop<TextCase> {
        Prop::collapse(self.runs.iter().map(|run| run.text_case))
    }

    pub fn text_decoration(&self) -> Prop<TextDecoration> {
        Prop::collapse(self.runs.iter().map(|run| run.text_decoration))
    }

    pub fn text_align_horizontal(&self) -> Prop<TextAlignHorizontal> {
        Prop::Uniform(self.text_align_horizontal)
    }

    pub fn set_text_align_horizontal(&mut self, align: TextAlignHorizontal) {
        self.text_align_horizontal = align;
    }

    pub fn text_align_vertical(&self) -> Prop<TextAlignVertical> {
        Prop::Uniform(self.text_align_vertical)
    }

    pub fn set_text_align_vertical(&mut self, align: TextAlignVertical) {
        self.text_align_vertical = align;
    }

    pub fn paragraph_spacing(&self) -> Prop<f64> {
        Prop::Uniform(self.paragraph_spacing)
    }

    pub fn set_paragraph_spacing(&mut self, paragraph_spacing: f64) {
        self.paragraph_spacing = paragraph_spacing;
    }

    pub fn paragraph_indent(&self) -> Prop<f64> {
        Prop::Uniform(self.paragraph_indent)
    }

    pub fn set_paragraph_indent(&mut self, paragraph_indent: f64) {
        self.paragraph_indent = paragraph_indent;
    }

    pub fn range_style_id(&self, start: usize, end: usize) -> Result<Prop<StyleId>, HostError> {
        let runs = self.runs_in_range(start, end)?;
        Ok(flatten_style_id(Prop::collapse(runs.map(|run| run.style_id.clone()))))
    }

    pub fn range_font_name(&self, start: usize, end: usize) -> Result<Prop<FontName>, HostError> {
        Ok(Prop::collapse(self.runs_in_range(start, end)?.map(|run| run.font_name.clone())))
    }

    pub fn range_font_size(&self, start: usize, end: usize) -> Result<Prop<f64>, HostError> {
        Ok(Prop::collapse(self.runs_in_range(start, end)?.map(|run| run.font_size)))
    }

    pub fn range_line_height(
        &self,
        start: usize,
        end: usize,
    ) -> Result<Prop<LineHeight>, HostError> {
        Ok(Prop::collapse(self.runs_in_range(start, end)?.map(|run| run.line_height)))
    }

    /// Rewrites every character with the style's typography and reference.
    pub fn apply_style(&mut self, style: &RegisteredStyle) {
        let mut run = TextRun::new(self.char_len, style.font_name().clone(), style.font_size());
        run.line_height = style.line_height();
        run.letter_spacing = style.letter_spacing();
        run.text_case = style.text_case();
        run.text_decoration = style.text_decoration();
        run.style_id = Some(style.id().clone());

        self.runs.clear();
        if self.char_len > 0 {
            self.runs.push(run);
        }
        if let Some(align) = style.text_align_horizontal() {
            self.text_align_horizontal = align;
        }
        if let Some(align) = style.text_align_vertical() {
            self.text_align_vertical = align;
        }
        self.paragraph_spacing = style.paragraph_spacing();
        self.paragraph_indent = style.paragraph_indent();
    }

    fn runs_in_range(
        &self,
        start: usize,
        end: usize,
    ) -> Result<impl Iterator<Item = &TextRun> + '_, HostError> {
        if start >= end || end > self.char_len {
            return Err(HostError::RangeOutOfBounds {
                node_id: self.id.clone(),
                start,
                end,
                len: self.char_len,
            });
        }

        let mut offset = 0usize;
        Ok(self.runs.iter().filter(move |run| {
            let run_start = offset;
            offset += run.len;
            run_start < end && offset > start
        }))
    }
}

fn flatten_style_id(prop: Prop<Option<StyleId>>) -> Prop<StyleId> {
    match prop {
        Prop::Uniform(Some(style_id)) => Prop::Uniform(style_id),
        Prop::Uniform(None) | Prop::Absent => Prop::Absent,
        Prop::Mixed => Prop::Mixed,
    }
}
