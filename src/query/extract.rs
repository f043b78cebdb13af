// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

use crate::host::HostError;
use crate::model::{FontName, LineHeight, NodeId, Prop, TextNode};

/// Effective typography of a text node, collapsed to one representative value per attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct TextProperties {
    pub font_family: SmolStr,
    pub font_weight: SmolStr,
    pub font_size: f64,
    pub line_height: LineHeight,
}

impl TextProperties {
    pub fn font_name(&self) -> FontName {
        FontName::new(self.font_family.clone(), self.font_weight.clone())
    }

    /// Grouping key for "same kind of unstyled text" (`family|weight|size|line-height`).
    pub fn key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.font_family,
            self.font_weight,
            self.font_size,
            self.line_height.key_label()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    Host(HostError),
    Missing { node_id: NodeId, property: &'static str },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host(err) => write!(f, "failed to read text properties: {err}"),
            Self::Missing { node_id, property } => {
                write!(f, "node {node_id} has no readable {property}")
            }
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<HostError> for ExtractError {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}

/// Reads the representative font, size and line height of `node`.
///
/// Mixed values resolve to the first character's value.
pub fn extract(node: &TextNode) -> Result<TextProperties, ExtractError> {
    let font_name =
        representative(node, "fontName", node.font_name(), || node.range_font_name(0, 1))?;
    let font_size =
        representative(node, "fontSize", node.font_size(), || node.range_font_size(0, 1))?;
    let line_height =
        representative(node, "lineHeight", node.line_height(), || node.range_line_height(0, 1))?;

    Ok(TextProperties {
        font_family: font_name.family,
        font_weight: font_name.style,
        font_size,
        line_height,
    })
}

fn representative<T>(
    node: &TextNode,
    property: &'static str,
    value: Prop<T>,
    first_char: impl FnOnce() -> Result<Prop<T>, HostError>,
) -> Result<T, ExtractError> {
    let missing = || ExtractError::Missing { node_id: node.id().clone(), property };
    match value {
        Prop::Uniform(value) => Ok(value),
        Prop::Mixed => first_char()?.into_uniform().ok_or_else(missing),
        Prop::Absent => Err(missing()),
    }
}
