// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tokio::sync::Mutex;
use tracing::debug;

use crate::host::Host;
use crate::model::{Document, NodeId, StyleId};
use crate::ops::{
    self, BulkEdit, MatchPredicate, MatchProfile, DEFAULT_AUTO_LINE_HEIGHT_PERCENT,
};
use crate::query::StepDirection;
use crate::store::DocumentFile;

use super::types::*;

#[derive(Debug)]
struct McpState {
    document: Document,
}

#[derive(Clone)]
pub struct StylesweepMcp {
    state: Arc<Mutex<McpState>>,
    profile: MatchProfile,
    document_file: Option<Arc<DocumentFile>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StylesweepMcp {
    pub fn new(document: Document, profile: MatchProfile) -> Self {
        Self {
            state: Arc::new(Mutex::new(McpState { document })),
            profile,
            document_file: None,
            tool_router: Self::tool_router(),
        }
    }

    /// Server that writes the document back to `document_file` after every change.
    pub fn new_persistent(
        document: Document,
        profile: MatchProfile,
        document_file: DocumentFile,
    ) -> Self {
        Self { document_file: Some(Arc::new(document_file)), ..Self::new(document, profile) }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    /// Runs `mutation` against a copy of the document and commits it once persisted. A failed
    /// save leaves the in-memory document untouched.
    async fn mutate<R>(&self, mutation: impl FnOnce(&mut Document) -> R) -> Result<R, ErrorData> {
        let mut state = self.state.lock().await;
        let mut candidate = state.document.clone();
        let result = mutation(&mut candidate);
        if candidate == state.document {
            return Ok(result);
        }

        if let Some(document_file) = &self.document_file {
            document_file.save(&candidate).map_err(|err| {
                ErrorData::internal_error(
                    format!("failed to persist document: {err}"),
                    Some(serde_json::json!({
                        "path": document_file.path().display().to_string(),
                    })),
                )
            })?;
            debug!(path = %document_file.path().display(), "document saved");
        }
        state.document = candidate;
        Ok(result)
    }

    /// Audit the selection: how many text nodes already use a style, and how many distinct
    /// property combinations have (or lack) a nearest catalog style. Start here.
    #[tool(name = "audit.scan")]
    async fn audit_scan(
        &self,
        params: Parameters<ProfileParams>,
    ) -> Result<Json<ScanResponse>, ErrorData> {
        let profile = resolve_profile(&self.profile, params.0.profile.as_deref())?;
        let state = self.state.lock().await;
        let report = ops::scan(&state.document, &profile);
        drop(state);

        Ok(Json(ScanResponse::from_report(profile.name(), report)))
    }

    /// Replace the selection with the unstyled nodes that have (`has_nearest`) or lack
    /// (`no_nearest`) a nearest style; follow with `audit.apply_nearest` or `audit.create_styles`.
    #[tool(name = "audit.select_matching")]
    async fn audit_select_matching(
        &self,
        params: Parameters<SelectMatchingParams>,
    ) -> Result<Json<SelectResponse>, ErrorData> {
        let SelectMatchingParams { predicate, profile } = params.0;
        let profile = resolve_profile(&self.profile, profile.as_deref())?;
        let predicate = match_predicate(predicate);

        let report =
            self.mutate(|document| ops::select_matching(document, &profile, predicate)).await?;
        Ok(Json(SelectResponse { selected_count: report.selected_count as u64 }))
    }

    /// Apply the nearest in-tolerance style to every unstyled selected node; with `auto_create`
    /// unmatched nodes get a new style.
    #[tool(name = "audit.apply_nearest")]
    async fn audit_apply_nearest(
        &self,
        params: Parameters<ApplyNearestParams>,
    ) -> Result<Json<ApplyNearestResponse>, ErrorData> {
        let ApplyNearestParams { profile, auto_create } = params.0;
        let mut profile = resolve_profile(&self.profile, profile.as_deref())?;
        if let Some(auto_create) = auto_create {
            profile = profile.with_auto_create(auto_create);
        }

        let report = self.mutate(|document| ops::apply_nearest(document, &profile)).await?;
        Ok(Json(report.into()))
    }

    /// Force the closest catalog style (same family preferred) onto unstyled nodes that have no
    /// nearest match.
    #[tool(name = "audit.apply_closest")]
    async fn audit_apply_closest(
        &self,
        params: Parameters<ProfileParams>,
    ) -> Result<Json<ApplyClosestResponse>, ErrorData> {
        let profile = resolve_profile(&self.profile, params.0.profile.as_deref())?;

        let report = self.mutate(|document| ops::apply_closest(document, &profile)).await?;
        Ok(Json(report.into()))
    }

    /// Create and apply a new catalog style for every unstyled selected node.
    #[tool(name = "audit.create_styles")]
    async fn audit_create_styles(&self) -> Result<Json<CreateStylesResponse>, ErrorData> {
        let report = self.mutate(|document| ops::create_styles(document)).await?;
        Ok(Json(report.into()))
    }

    /// Move each selected node to the next larger or smaller style of its font family.
    #[tool(name = "size.step")]
    async fn size_step(
        &self,
        params: Parameters<SizeStepParams>,
    ) -> Result<Json<StepResponse>, ErrorData> {
        let direction: StepDirection = step_direction(params.0.direction);

        let report = self.mutate(|document| ops::step_size(document, direction)).await?;
        Ok(Json(report.into()))
    }

    /// List the registered text styles in catalog order with display-ready metrics.
    #[tool(name = "styles.list")]
    async fn styles_list(&self) -> Result<Json<ListStylesResponse>, ErrorData> {
        let state = self.state.lock().await;
        let styles = ops::list_styles(&state.document)
            .into_iter()
            .map(McpStyleSummary::from)
            .collect::<Vec<_>>();
        drop(state);

        Ok(Json(ListStylesResponse { styles }))
    }

    /// List catalog styles that no text in the document references; review before
    /// `styles.delete_unused`.
    #[tool(name = "styles.list_unused")]
    async fn styles_list_unused(&self) -> Result<Json<ListUnusedResponse>, ErrorData> {
        let state = self.state.lock().await;
        let report = ops::list_unused(&state.document);
        drop(state);

        Ok(Json(report.into()))
    }

    /// Delete every unreferenced catalog style; library styles are reported, not removed.
    #[tool(name = "styles.delete_unused")]
    async fn styles_delete_unused(&self) -> Result<Json<DeleteUnusedResponse>, ErrorData> {
        let report = self.mutate(|document| ops::delete_unused(document)).await?;
        Ok(Json(report.into()))
    }

    /// Set one property (`font_size`, `line_height` %, `letter_spacing` %, `weight`) on several
    /// styles at once.
    #[tool(name = "styles.bulk_edit")]
    async fn styles_bulk_edit(
        &self,
        params: Parameters<BulkEditParams>,
    ) -> Result<Json<BulkEditResponse>, ErrorData> {
        let BulkEditParams { property, value, style_ids } = params.0;
        let edit: BulkEdit = bulk_edit_from_params(property, value)?;
        let style_ids = parse_style_ids(&style_ids)?;

        let report = self.mutate(|document| ops::bulk_edit(document, &edit, &style_ids)).await?;
        Ok(Json(report.into()))
    }

    /// Give every `Auto` line-height style an explicit percentage (default 150).
    #[tool(name = "styles.set_auto_line_height")]
    async fn styles_set_auto_line_height(
        &self,
        params: Parameters<SetAutoLineHeightParams>,
    ) -> Result<Json<SetAutoLineHeightResponse>, ErrorData> {
        let percent = params.0.percent.unwrap_or(DEFAULT_AUTO_LINE_HEIGHT_PERCENT);
        if !percent.is_finite() || percent <= 0.0 {
            return Err(ErrorData::invalid_params(
                format!("percent must be a positive number, got {percent}"),
                None,
            ));
        }

        let report =
            self.mutate(|document| ops::set_auto_line_heights(document, percent)).await?;
        Ok(Json(report.into()))
    }

    /// Select every text node in the document that uses any of the given styles, including
    /// partially styled text.
    #[tool(name = "styles.select_nodes")]
    async fn styles_select_nodes(
        &self,
        params: Parameters<SelectNodesParams>,
    ) -> Result<Json<SelectResponse>, ErrorData> {
        let style_ids: Vec<StyleId> = parse_style_ids(&params.0.style_ids)?;

        let report =
            self.mutate(|document| ops::select_nodes_with_styles(document, &style_ids)).await?;
        Ok(Json(SelectResponse { selected_count: report.selected_count as u64 }))
    }

    /// Read the current selection as node ids.
    #[tool(name = "selection.read")]
    async fn selection_read(&self) -> Result<Json<SelectionReadResponse>, ErrorData> {
        let state = self.state.lock().await;
        let node_ids = state.document.selection().into_iter().map(NodeId::into_string).collect();
        drop(state);

        Ok(Json(SelectionReadResponse { node_ids }))
    }

    /// Update the selection (`replace`/`add`/`remove`); unknown node ids are ignored.
    #[tool(name = "selection.update")]
    async fn selection_update(
        &self,
        params: Parameters<SelectionUpdateParams>,
    ) -> Result<Json<SelectionUpdateResponse>, ErrorData> {
        let SelectionUpdateParams { node_ids, mode } = params.0;
        let node_ids =
            node_ids.iter().map(|node_id| parse_node_id(node_id)).collect::<Result<Vec<_>, _>>()?;

        self.mutate(|document| {
            let (applied, ignored): (Vec<_>, Vec<_>) =
                node_ids.into_iter().partition(|node_id| document.find_node(node_id).is_some());
            let selection = apply_selection_mode(&document.selection(), mode, &applied);
            document
                .set_selection(selection)
                .map(|()| SelectionUpdateResponse {
                    applied: applied.into_iter().map(NodeId::into_string).collect(),
                    ignored: ignored.into_iter().map(NodeId::into_string).collect(),
                })
                .map_err(|err| ErrorData::internal_error(err.to_string(), None))
        })
        .await?
        .map(Json)
    }
}

#[tool_handler]
impl ServerHandler for StylesweepMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Stylesweep text-style audit server (tools: audit.scan, audit.select_matching, audit.apply_nearest, audit.apply_closest, audit.create_styles, size.step, styles.list, styles.list_unused, styles.delete_unused, styles.bulk_edit, styles.set_auto_line_height, styles.select_nodes, selection.read, selection.update)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// Parameter parsing helpers for MCP tool handlers.
include!("server/helpers.rs");
