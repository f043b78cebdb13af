// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Batch operations over the host document.
//!
//! Every batch walks its targets strictly one at a time and never fails as a whole: a node or
//! style that cannot be read or mutated is recorded in the report and the batch moves on.
//! Selection-scoped batches (`scan`, `apply_*`, `create_styles`, `step_size`) start from the
//! host selection; catalog batches (`list_unused`, `delete_unused`, `select_nodes_with_styles`)
//! always cover the whole document.

use std::fmt;

use crate::model::{NodeId, StyleId};

mod audit;
mod catalog;
pub mod profile;
pub mod synth;

pub use audit::{
    apply_closest, apply_nearest, create_styles, scan, select_matching, step_size,
};
pub use catalog::{
    bulk_edit, delete_unused, list_styles, list_unused, select_nodes_with_styles,
    set_auto_line_heights,
};
pub use profile::{MatchProfile, ParseProfileError};
pub use synth::{synthesize, synthesized_name};

/// Line height given to `Auto` styles by [`set_auto_line_heights`] unless told otherwise.
pub const DEFAULT_AUTO_LINE_HEIGHT_PERCENT: f64 = 150.0;

/// A node the batch could not process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeError {
    pub node_id: NodeId,
    pub reason: String,
}

impl NodeError {
    pub(crate) fn new(node_id: &NodeId, reason: impl fmt::Display) -> Self {
        Self { node_id: node_id.clone(), reason: reason.to_string() }
    }
}

/// A catalog style the batch could not process, reported by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleError {
    pub name: String,
    pub reason: String,
}

impl StyleError {
    pub(crate) fn new(name: &str, reason: impl fmt::Display) -> Self {
        Self { name: name.to_owned(), reason: reason.to_string() }
    }
}

/// Audit of the current selection.
///
/// `has_nearest_count` and `no_nearest_count` count distinct property combinations, not nodes;
/// the node ids behind them are returned alongside so a caller can act on them without a
/// second scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub has_selection: bool,
    pub applied_count: usize,
    pub not_applied_count: usize,
    pub has_nearest_count: usize,
    pub no_nearest_count: usize,
    pub has_nearest_ids: Vec<NodeId>,
    pub no_nearest_ids: Vec<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPredicate {
    HasNearest,
    NoNearest,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectReport {
    pub selected_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyNearestReport {
    pub applied_count: usize,
    pub skipped_count: usize,
    /// Styles synthesized for unmatched nodes when the profile auto-creates.
    pub created_count: usize,
    pub errors: Vec<NodeError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyClosestReport {
    pub applied_count: usize,
    pub skipped_count: usize,
    pub different_family_count: usize,
    pub errors: Vec<NodeError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateStylesReport {
    pub created_count: usize,
    pub skipped_count: usize,
    pub errors: Vec<NodeError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRef {
    pub id: StyleId,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnusedReport {
    pub total_styles: usize,
    pub used_count: usize,
    pub unused_styles: Vec<StyleRef>,
    pub total_nodes_scanned: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteUnusedReport {
    pub deleted_count: usize,
    pub errors: Vec<StyleError>,
}

/// One property change applied to several catalog styles at once.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkEdit {
    FontSize(f64),
    LineHeightPercent(f64),
    LetterSpacingPercent(f64),
    /// New style label within the same family, e.g. `"Bold"`.
    Weight(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkEditReport {
    pub updated_count: usize,
    pub skipped_count: usize,
    pub errors: Vec<StyleError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    pub applied_count: usize,
    pub skipped_count: usize,
    pub errors: Vec<NodeError>,
}

/// Catalog entry with display-ready line height and letter spacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSummary {
    pub id: StyleId,
    pub name: String,
    pub font_family: String,
    pub font_weight: String,
    pub line_height: String,
    pub letter_spacing: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineHeightReport {
    pub updated_count: usize,
    pub errors: Vec<StyleError>,
}
