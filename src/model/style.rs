// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::StyleId;
use super::typography::{
    FontName, LetterSpacing, LineHeight, TextAlignHorizontal, TextAlignVertical, TextCase,
    TextDecoration,
};

/// A named, reusable typography definition stored at document scope.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredStyle {
    id: StyleId,
    name: String,
    font_name: FontName,
    font_size: f64,
    line_height: LineHeight,
    letter_spacing: LetterSpacing,
    text_align_horizontal: Option<TextAlignHorizontal>,
    text_align_vertical: Option<TextAlignVertical>,
    text_case: TextCase,
    text_decoration: TextDecoration,
    paragraph_spacing: f64,
    paragraph_indent: f64,
    remote: bool,
}

impl RegisteredStyle {
    /// New local style with host defaults (Inter Regular 12, auto line height).
    pub fn new(id: StyleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            font_name: FontName::new("Inter", "Regular"),
            font_size: 12.0,
            line_height: LineHeight::Auto,
            letter_spacing: LetterSpacing::default(),
            text_align_horizontal: None,
            text_align_vertical: None,
            text_case: TextCase::Original,
            text_decoration: TextDecoration::None,
            paragraph_spacing: 0.0,
            paragraph_indent: 0.0,
            remote: false,
        }
    }

    pub fn with_font(mut self, font_name: FontName, font_size: f64) -> Self {
        self.font_name = font_name;
        self.font_size = font_size;
        self
    }

    pub fn with_line_height(mut self, line_height: LineHeight) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn id(&self) -> &StyleId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn font_name(&self) -> &FontName {
        &self.font_name
    }

    pub fn font_family(&self) -> &str {
        &self.font_name.family
    }

    pub fn font_weight(&self) -> &str {
        &self.font_name.style
    }

    pub fn set_font_name(&mut self, font_name: FontName) {
        self.font_name = font_name;
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: f64) {
        self.font_size = font_size;
    }

    pub fn line_height(&self) -> LineHeight {
        self.line_height
    }

    pub fn set_line_height(&mut self, line_height: LineHeight) {
        self.line_height = line_height;
    }

    pub fn letter_spacing(&self) -> LetterSpacing {
        self.letter_spacing
    }

    pub fn set_letter_spacing(&mut self, letter_spacing: LetterSpacing) {
        self.letter_spacing = letter_spacing;
    }

    pub fn text_align_horizontal(&self) -> Option<TextAlignHorizontal> {
        self.text_align_horizontal
    }

    pub fn set_text_align_horizontal(&mut self, align: Option<TextAlignHorizontal>) {
        self.text_align_horizontal = align;
    }

    pub fn text_align_vertical(&self) -> Option<TextAlignVertical> {
        self.text_align_vertical
    }

    pub fn set_text_align_vertical(&mut self, align: Option<TextAlignVertical>) {
        self.text_align_vertical = align;
    }

    pub fn text_case(&self) -> TextCase {
        self.text_case
    }

    pub fn set_text_case(&mut self, text_case: TextCase) {
        self.text_case = text_case;
    }

    pub fn text_decoration(&self) -> TextDecoration {
        self.text_decoration
    }

    pub fn set_text_decoration(&mut self, text_decoration: TextDecoration) {
        self.text_decoration = text_decoration;
    }

    pub fn paragraph_spacing(&self) -> f64 {
        self.paragraph_spacing
    }

    pub fn set_paragraph_spacing(&mut self, paragraph_spacing: f64) {
        self.paragraph_spacing = paragraph_spacing;
    }

    pub fn paragraph_indent(&self) -> f64 {
        self.paragraph_indent
    }

    pub fn set_paragraph_indent(&mut self, paragraph_indent: f64) {
        self.paragraph_indent = paragraph_indent;
    }

    /// Styles linked from a shared library cannot be removed from the document.
    pub fn is_remote(&self) -> bool {
        self.remote
    }

    pub fn set_remote(&mut self, remote: bool) {
        self.remote = remote;
    }
}
