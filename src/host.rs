// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The host document contract.
//!
//! Every algorithm in `query` and every batch in `ops` talks to the document through [`Host`]:
//! tree access, the selection, the registered style catalog, font loading and the handful of
//! mutations the audit needs. [`crate::model::Document`] is the bundled in-memory host.

use std::fmt;

use crate::model::{
    FontName, LetterSpacing, LineHeight, NodeId, RegisteredStyle, SceneNode, StyleId,
    TextAlignHorizontal, TextAlignVertical, TextCase, TextDecoration,
};

pub trait Host {
    /// Root of the whole document (the page); unused-style scans start here.
    fn root(&self) -> &SceneNode;

    fn find_node(&self, id: &NodeId) -> Option<&SceneNode> {
        self.root().find(id)
    }

    /// Ids of the currently selected top-level nodes, in selection order.
    fn selection(&self) -> Vec<NodeId>;

    fn set_selection(&mut self, nodes: Vec<NodeId>) -> Result<(), HostError>;

    /// Snapshot of the registered text styles in catalog order.
    fn text_styles(&self) -> Vec<RegisteredStyle>;

    fn text_style(&self, id: &StyleId) -> Option<RegisteredStyle> {
        self.text_styles().into_iter().find(|style| style.id() == id)
    }

    /// Makes a font usable for subsequent style mutations.
    fn load_font(&mut self, font: &FontName) -> Result<(), HostError>;

    /// Points a text node at a registered style, restyling all of its characters.
    fn set_text_style_id(&mut self, node: &NodeId, style: &StyleId) -> Result<(), HostError>;

    /// Registers a new style with host defaults and returns its id.
    fn create_text_style(&mut self, name: &str) -> Result<StyleId, HostError>;

    fn set_style_property(
        &mut self,
        style: &StyleId,
        property: StyleProperty,
    ) -> Result<(), HostError>;

    fn remove_text_style(&mut self, style: &StyleId) -> Result<(), HostError>;
}

/// One assignable attribute of a registered style.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleProperty {
    FontName(FontName),
    FontSize(f64),
    LineHeight(LineHeight),
    LetterSpacing(LetterSpacing),
    TextAlignHorizontal(TextAlignHorizontal),
    TextAlignVertical(TextAlignVertical),
    TextCase(TextCase),
    TextDecoration(TextDecoration),
    ParagraphSpacing(f64),
    ParagraphIndent(f64),
}

impl StyleProperty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FontName(_) => "fontName",
            Self::FontSize(_) => "fontSize",
            Self::LineHeight(_) => "lineHeight",
            Self::LetterSpacing(_) => "letterSpacing",
            Self::TextAlignHorizontal(_) => "textAlignHorizontal",
            Self::TextAlignVertical(_) => "textAlignVertical",
            Self::TextCase(_) => "textCase",
            Self::TextDecoration(_) => "textDecoration",
            Self::ParagraphSpacing(_) => "paragraphSpacing",
            Self::ParagraphIndent(_) => "paragraphIndent",
        }
    }

    /// Properties the host only accepts once the style's current font is loaded. A new font name
    /// instead needs the new font loaded.
    pub fn requires_loaded_font(&self) -> bool {
        matches!(self, Self::FontSize(_) | Self::LineHeight(_) | Self::LetterSpacing(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    NodeNotFound(NodeId),
    NotText(NodeId),
    StyleNotFound(StyleId),
    FontUnavailable(FontName),
    FontNotLoaded(FontName),
    InvalidValue { property: &'static str, value: String },
    RemoteStyle { name: String },
    RangeOutOfBounds { node_id: NodeId, start: usize, end: usize, len: usize },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotFound(node_id) => write!(f, "node not found (id={node_id})"),
            Self::NotText(node_id) => write!(f, "node is not a text node (id={node_id})"),
            Self::StyleNotFound(style_id) => write!(f, "text style not found (id={style_id})"),
            Self::FontUnavailable(font) => write!(f, "font '{font}' is not available"),
            Self::FontNotLoaded(font) => {
                write!(f, "font '{font}' must be loaded before changing this style")
            }
            Self::InvalidValue { property, value } => {
                write!(f, "invalid value for {property}: {value}")
            }
            Self::RemoteStyle { name } => {
                write!(f, "cannot remove remote style '{name}' from this document")
            }
            Self::RangeOutOfBounds { node_id, start, end, len } => {
                write!(f, "range {start}..{end} is out of bounds for node {node_id} (len={len})")
            }
        }
    }
}

impl std::error::Error for HostError {}
