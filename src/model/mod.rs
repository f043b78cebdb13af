// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A [`Document`] holds one page of scene nodes plus the document-wide catalog of registered text
//! styles. Text nodes carry per-character runs, so any typography attribute can be uniform, mixed
//! or absent ([`Prop`]).

pub mod document;
pub mod fixtures;
pub mod ids;
pub mod node;
pub mod style;
pub mod typography;
pub mod value;

pub use document::{Document, DocumentError};
pub use ids::{Id, IdError, NodeId, StyleId};
pub use node::{
    ContainerKind, ContainerNode, LeafKind, LeafNode, RunLengthMismatch, SceneNode, TextNode,
    TextRun,
};
pub use style::RegisteredStyle;
pub use typography::{
    FontName, LetterSpacing, LineHeight, TextAlignHorizontal, TextAlignVertical, TextCase,
    TextDecoration,
};
pub use value::Prop;
