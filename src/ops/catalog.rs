// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::host::{Host, StyleProperty};
use crate::model::{FontName, LetterSpacing, LineHeight, RegisteredStyle, StyleId};
use crate::query::{find_unused, node_references_any, record_usage, text_nodes};

use super::{
    BulkEdit, BulkEditReport, DeleteUnusedReport, LineHeightReport, SelectReport, StyleError,
    StyleRef, StyleSummary, UnusedReport,
};

pub fn list_styles<H: Host + ?Sized>(host: &H) -> Vec<StyleSummary> {
    host.text_styles()
        .iter()
        .map(|style| StyleSummary {
            id: style.id().clone(),
            name: style.name().to_owned(),
            font_family: style.font_family().to_owned(),
            font_weight: style.font_weight().to_owned(),
            line_height: style.line_height().display_label(),
            letter_spacing: style.letter_spacing().display_label(),
        })
        .collect()
}

/// Catalog styles referenced by no text node anywhere in the document.
pub fn list_unused<H: Host + ?Sized>(host: &H) -> UnusedReport {
    let catalog = host.text_styles();
    let usage = record_usage(host.root());
    let unused = find_unused(&catalog, &usage)
        .into_iter()
        .map(|style| StyleRef { id: style.id().clone(), name: style.name().to_owned() })
        .collect::<Vec<_>>();

    UnusedReport {
        total_styles: catalog.len(),
        used_count: catalog.len() - unused.len(),
        unused_styles: unused,
        total_nodes_scanned: usage.nodes_scanned,
    }
}

/// Removes every unreferenced catalog style; styles the host refuses to remove are reported.
pub fn delete_unused<H: Host + ?Sized>(host: &mut H) -> DeleteUnusedReport {
    let unused = list_unused(&*host).unused_styles;
    let mut report = DeleteUnusedReport::default();
    for style in unused {
        match host.remove_text_style(&style.id) {
            Ok(()) => report.deleted_count += 1,
            Err(err) => {
                warn!(style = %style.name, error = %err, "failed to delete unused style");
                report.errors.push(StyleError::new(&style.name, err));
            }
        }
    }

    info!(deleted = report.deleted_count, failed = report.errors.len(), "delete unused finished");
    report
}

/// Applies one property change to each listed style. Unknown ids are skipped silently.
pub fn bulk_edit<H: Host + ?Sized>(
    host: &mut H,
    edit: &BulkEdit,
    style_ids: &[StyleId],
) -> BulkEditReport {
    let catalog = host.text_styles();
    let mut report = BulkEditReport::default();

    for style_id in style_ids {
        let Some(style) = catalog.iter().find(|style| style.id() == style_id) else {
            report.skipped_count += 1;
            continue;
        };
        match edit_style(host, style, edit) {
            Ok(()) => report.updated_count += 1,
            Err(err) => {
                warn!(style = %style.name(), error = %err, "bulk edit failed");
                report.skipped_count += 1;
                report.errors.push(StyleError::new(style.name(), err));
            }
        }
    }

    info!(updated = report.updated_count, skipped = report.skipped_count, "bulk edit finished");
    report
}

fn edit_style<H: Host + ?Sized>(
    host: &mut H,
    style: &RegisteredStyle,
    edit: &BulkEdit,
) -> Result<(), String> {
    host.load_font(style.font_name()).map_err(|err| err.to_string())?;

    let property = match edit {
        BulkEdit::FontSize(size) => StyleProperty::FontSize(*size),
        BulkEdit::LineHeightPercent(percent) => StyleProperty::LineHeight(LineHeight::Percent(*percent)),
        BulkEdit::LetterSpacingPercent(percent) => {
            StyleProperty::LetterSpacing(LetterSpacing::Percent(*percent))
        }
        BulkEdit::Weight(weight) => {
            let font = FontName::new(style.font_family(), weight.as_str());
            host.load_font(&font).map_err(|_| format!("{weight} weight is not available"))?;
            StyleProperty::FontName(font)
        }
    };
    host.set_style_property(style.id(), property).map_err(|err| err.to_string())
}

/// Gives every `Auto` line height style an explicit percentage.
pub fn set_auto_line_heights<H: Host + ?Sized>(host: &mut H, percent: f64) -> LineHeightReport {
    let mut report = LineHeightReport::default();
    for style in host.text_styles().iter().filter(|style| style.line_height().is_auto()) {
        let result = host.load_font(style.font_name()).and_then(|()| {
            host.set_style_property(style.id(), StyleProperty::LineHeight(LineHeight::Percent(percent)))
        });
        match result {
            Ok(()) => report.updated_count += 1,
            Err(err) => {
                warn!(style = %style.name(), error = %err, "failed to set line height");
                report.errors.push(StyleError::new(style.name(), err));
            }
        }
    }

    info!(updated = report.updated_count, failed = report.errors.len(), "auto line heights finished");
    report
}

/// Selects every text node in the document referencing one of `style_ids`, including
/// single-character references inside mixed nodes.
pub fn select_nodes_with_styles<H: Host + ?Sized>(host: &mut H, style_ids: &[StyleId]) -> SelectReport {
    let wanted = style_ids.iter().cloned().collect::<BTreeSet<_>>();
    let matching = text_nodes([host.root()])
        .into_iter()
        .filter(|node| node_references_any(node, &wanted))
        .map(|node| node.id().clone())
        .collect::<Vec<_>>();

    if matching.is_empty() {
        return SelectReport::default();
    }
    let selected_count = matching.len();
    if let Err(err) = host.set_selection(matching) {
        warn!(error = %err, "failed to update selection");
        return SelectReport::default();
    }
    SelectReport { selected_count }
}
