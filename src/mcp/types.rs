// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ops::{
    ApplyClosestReport, ApplyNearestReport, BulkEditReport, CreateStylesReport,
    DeleteUnusedReport, LineHeightReport, NodeError, ScanReport, StepReport, StyleError,
    StyleSummary, UnusedReport,
};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ProfileParams {
    /// `tolerant` (weight window, default) or `strict` (exact weight).
    #[serde(default)]
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScanResponse {
    pub profile: String,
    pub has_selection: bool,
    pub applied_count: u64,
    pub not_applied_count: u64,
    pub has_nearest_count: u64,
    pub no_nearest_count: u64,
    pub has_nearest_ids: Vec<String>,
    pub no_nearest_ids: Vec<String>,
}

impl ScanResponse {
    pub(crate) fn from_report(profile: &str, report: ScanReport) -> Self {
        Self {
            profile: profile.to_owned(),
            has_selection: report.has_selection,
            applied_count: report.applied_count as u64,
            not_applied_count: report.not_applied_count as u64,
            has_nearest_count: report.has_nearest_count as u64,
            no_nearest_count: report.no_nearest_count as u64,
            has_nearest_ids: report.has_nearest_ids.into_iter().map(|id| id.into_string()).collect(),
            no_nearest_ids: report.no_nearest_ids.into_iter().map(|id| id.into_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum McpMatchPredicate {
    HasNearest,
    NoNearest,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SelectMatchingParams {
    pub predicate: McpMatchPredicate,
    #[serde(default)]
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SelectResponse {
    pub selected_count: u64,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ApplyNearestParams {
    #[serde(default)]
    pub profile: Option<String>,
    /// Synthesize a style for nodes without a nearest match; defaults to the profile's setting.
    #[serde(default)]
    pub auto_create: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct McpNodeError {
    pub node_id: String,
    pub reason: String,
}

impl From<NodeError> for McpNodeError {
    fn from(error: NodeError) -> Self {
        Self { node_id: error.node_id.into_string(), reason: error.reason }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct McpStyleError {
    pub name: String,
    pub reason: String,
}

impl From<StyleError> for McpStyleError {
    fn from(error: StyleError) -> Self {
        Self { name: error.name, reason: error.reason }
    }
}

fn node_errors(errors: Vec<NodeError>) -> Vec<McpNodeError> {
    errors.into_iter().map(McpNodeError::from).collect()
}

fn style_errors(errors: Vec<StyleError>) -> Vec<McpStyleError> {
    errors.into_iter().map(McpStyleError::from).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ApplyNearestResponse {
    pub applied_count: u64,
    pub skipped_count: u64,
    pub created_count: u64,
    pub errors: Vec<McpNodeError>,
}

impl From<ApplyNearestReport> for ApplyNearestResponse {
    fn from(report: ApplyNearestReport) -> Self {
        Self {
            applied_count: report.applied_count as u64,
            skipped_count: report.skipped_count as u64,
            created_count: report.created_count as u64,
            errors: node_errors(report.errors),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ApplyClosestResponse {
    pub applied_count: u64,
    pub skipped_count: u64,
    pub different_family_count: u64,
    pub errors: Vec<McpNodeError>,
}

impl From<ApplyClosestReport> for ApplyClosestResponse {
    fn from(report: ApplyClosestReport) -> Self {
        Self {
            applied_count: report.applied_count as u64,
            skipped_count: report.skipped_count as u64,
            different_family_count: report.different_family_count as u64,
            errors: node_errors(report.errors),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateStylesResponse {
    pub created_count: u64,
    pub skipped_count: u64,
    pub errors: Vec<McpNodeError>,
}

impl From<CreateStylesReport> for CreateStylesResponse {
    fn from(report: CreateStylesReport) -> Self {
        Self {
            created_count: report.created_count as u64,
            skipped_count: report.skipped_count as u64,
            errors: node_errors(report.errors),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum McpStepDirection {
    Larger,
    Smaller,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SizeStepParams {
    pub direction: McpStepDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StepResponse {
    pub applied_count: u64,
    pub skipped_count: u64,
    pub errors: Vec<McpNodeError>,
}

impl From<StepReport> for StepResponse {
    fn from(report: StepReport) -> Self {
        Self {
            applied_count: report.applied_count as u64,
            skipped_count: report.skipped_count as u64,
            errors: node_errors(report.errors),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpStyleSummary {
    pub style_id: String,
    pub name: String,
    pub font_family: String,
    pub font_weight: String,
    pub line_height: String,
    pub letter_spacing: String,
}

impl From<StyleSummary> for McpStyleSummary {
    fn from(summary: StyleSummary) -> Self {
        Self {
            style_id: summary.id.into_string(),
            name: summary.name,
            font_family: summary.font_family,
            font_weight: summary.font_weight,
            line_height: summary.line_height,
            letter_spacing: summary.letter_spacing,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListStylesResponse {
    pub styles: Vec<McpStyleSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct McpStyleRef {
    pub style_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListUnusedResponse {
    pub total_styles: u64,
    pub used_count: u64,
    pub unused_styles: Vec<McpStyleRef>,
    pub total_nodes_scanned: u64,
}

impl From<UnusedReport> for ListUnusedResponse {
    fn from(report: UnusedReport) -> Self {
        Self {
            total_styles: report.total_styles as u64,
            used_count: report.used_count as u64,
            unused_styles: report
                .unused_styles
                .into_iter()
                .map(|style| McpStyleRef { style_id: style.id.into_string(), name: style.name })
                .collect(),
            total_nodes_scanned: report.total_nodes_scanned as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteUnusedResponse {
    pub deleted_count: u64,
    pub errors: Vec<McpStyleError>,
}

impl From<DeleteUnusedReport> for DeleteUnusedResponse {
    fn from(report: DeleteUnusedReport) -> Self {
        Self { deleted_count: report.deleted_count as u64, errors: style_errors(report.errors) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BulkProperty {
    FontSize,
    /// Percentage of the font size.
    LineHeight,
    /// Percentage of the font size.
    LetterSpacing,
    /// Style label within the same family, e.g. `Bold`.
    Weight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum BulkValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BulkEditParams {
    pub property: BulkProperty,
    pub value: BulkValue,
    pub style_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BulkEditResponse {
    pub updated_count: u64,
    pub skipped_count: u64,
    pub errors: Vec<McpStyleError>,
}

impl From<BulkEditReport> for BulkEditResponse {
    fn from(report: BulkEditReport) -> Self {
        Self {
            updated_count: report.updated_count as u64,
            skipped_count: report.skipped_count as u64,
            errors: style_errors(report.errors),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SetAutoLineHeightParams {
    /// Defaults to 150.
    #[serde(default)]
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SetAutoLineHeightResponse {
    pub updated_count: u64,
    pub errors: Vec<McpStyleError>,
}

impl From<LineHeightReport> for SetAutoLineHeightResponse {
    fn from(report: LineHeightReport) -> Self {
        Self { updated_count: report.updated_count as u64, errors: style_errors(report.errors) }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SelectNodesParams {
    pub style_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SelectionReadResponse {
    pub node_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    #[default]
    Replace,
    Add,
    Remove,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SelectionUpdateParams {
    pub node_ids: Vec<String>,
    #[serde(default)]
    pub mode: UpdateMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SelectionUpdateResponse {
    pub applied: Vec<String>,
    pub ignored: Vec<String>,
}
