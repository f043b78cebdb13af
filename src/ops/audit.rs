// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::host::Host;
use crate::model::{Prop, RegisteredStyle, StyleId, TextNode};
use crate::query::{
    extract, find_closest, find_nearest, selection_text_nodes, step, step_reference,
    ExtractError, StepDirection, TextProperties, Tolerances,
};

use super::synth::synthesize;
use super::{
    ApplyClosestReport, ApplyNearestReport, CreateStylesReport, MatchPredicate, MatchProfile,
    NodeError, ScanReport, SelectReport, StepReport,
};

const UNKNOWN_KEY: &str = "unknown";

/// Where an audited node lands.
enum NodeClass {
    Styled,
    Unreadable(ExtractError),
    Nearest { props: TextProperties, style_id: StyleId },
    NoNearest { props: TextProperties },
}

/// Nodes with a uniform, non-empty style reference. Mixed references still count as unstyled.
fn is_styled(node: &TextNode) -> bool {
    matches!(node.style_id(), Prop::Uniform(_))
}

fn classify(node: &TextNode, catalog: &[RegisteredStyle], tolerances: &Tolerances) -> NodeClass {
    if is_styled(node) {
        return NodeClass::Styled;
    }
    let props = match extract(node) {
        Ok(props) => props,
        Err(err) => return NodeClass::Unreadable(err),
    };
    match find_nearest(&props, catalog, tolerances) {
        Some(style) => NodeClass::Nearest { style_id: style.id().clone(), props },
        None => NodeClass::NoNearest { props },
    }
}

/// Owned copies of the selected text nodes, so the batch can mutate the host while iterating.
fn selected_nodes<H: Host + ?Sized>(host: &H) -> Vec<TextNode> {
    selection_text_nodes(host).into_iter().cloned().collect()
}

pub fn scan<H: Host + ?Sized>(host: &H, profile: &MatchProfile) -> ScanReport {
    if host.selection().is_empty() {
        return ScanReport::default();
    }

    let catalog = host.text_styles();
    let tolerances = profile.tolerances();
    let mut report = ScanReport { has_selection: true, ..ScanReport::default() };
    let mut has_nearest_keys = BTreeSet::new();
    let mut no_nearest_keys = BTreeSet::new();

    for node in selection_text_nodes(host) {
        match classify(node, &catalog, &tolerances) {
            NodeClass::Styled => {
                report.applied_count += 1;
                continue;
            }
            NodeClass::Unreadable(err) => {
                debug!(node_id = %node.id(), error = %err, "unreadable text properties");
                no_nearest_keys.insert(UNKNOWN_KEY.to_owned());
                report.no_nearest_ids.push(node.id().clone());
            }
            NodeClass::Nearest { props, .. } => {
                has_nearest_keys.insert(props.key());
                report.has_nearest_ids.push(node.id().clone());
            }
            NodeClass::NoNearest { props } => {
                no_nearest_keys.insert(props.key());
                report.no_nearest_ids.push(node.id().clone());
            }
        }
        report.not_applied_count += 1;
    }

    report.has_nearest_count = has_nearest_keys.len();
    report.no_nearest_count = no_nearest_keys.len();
    info!(
        applied = report.applied_count,
        not_applied = report.not_applied_count,
        has_nearest = report.has_nearest_count,
        no_nearest = report.no_nearest_count,
        "scan finished"
    );
    report
}

/// Replaces the host selection with the unstyled nodes matching `predicate`. Nodes whose
/// properties cannot be read never match. The selection is left alone when nothing matches.
pub fn select_matching<H: Host + ?Sized>(
    host: &mut H,
    profile: &MatchProfile,
    predicate: MatchPredicate,
) -> SelectReport {
    if host.selection().is_empty() {
        return SelectReport::default();
    }

    let catalog = host.text_styles();
    let tolerances = profile.tolerances();
    let matching = selection_text_nodes(&*host)
        .into_iter()
        .filter(|node| {
            matches!(
                (predicate, classify(node, &catalog, &tolerances)),
                (MatchPredicate::HasNearest, NodeClass::Nearest { .. })
                    | (MatchPredicate::NoNearest, NodeClass::NoNearest { .. })
            )
        })
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

/// Applies the nearest in-tolerance style to every unstyled selected node.
///
/// With `profile.auto_create`, nodes without a nearest match get a synthesized style instead,
/// and that style joins the working catalog for the rest of the batch.
pub fn apply_nearest<H: Host + ?Sized>(host: &mut H, profile: &MatchProfile) -> ApplyNearestReport {
    let mut report = ApplyNearestReport::default();
    let nodes = selected_nodes(&*host);
    if nodes.is_empty() {
        return report;
    }

    let mut catalog = host.text_styles();
    let tolerances = profile.tolerances();
    for node in &nodes {
        match classify(node, &catalog, &tolerances) {
            NodeClass::Styled => {}
            NodeClass::Unreadable(err) => {
                report.skipped_count += 1;
                report.errors.push(NodeError::new(node.id(), err));
            }
            NodeClass::Nearest { style_id, .. } => {
                match host.set_text_style_id(node.id(), &style_id) {
                    Ok(()) => report.applied_count += 1,
                    Err(err) => {
                        warn!(node_id = %node.id(), style_id = %style_id, error = %err, "failed to apply nearest style");
                        report.skipped_count += 1;
                        report.errors.push(NodeError::new(node.id(), err));
                    }
                }
            }
            NodeClass::NoNearest { props } if profile.auto_create => {
                match synthesize(host, node, &props)
                    .and_then(|style| host.set_text_style_id(node.id(), style.id()).map(|()| style))
                {
                    Ok(style) => {
                        report.created_count += 1;
                        catalog.push(style);
                    }
                    Err(err) => {
                        warn!(node_id = %node.id(), error = %err, "failed to create style for node");
                        report.skipped_count += 1;
                        report.errors.push(NodeError::new(node.id(), err));
                    }
                }
            }
            NodeClass::NoNearest { .. } => report.skipped_count += 1,
        }
    }

    info!(
        applied = report.applied_count,
        created = report.created_count,
        skipped = report.skipped_count,
        "apply nearest finished"
    );
    report
}

/// Forces the globally closest style onto unstyled nodes that have no nearest match, crossing
/// families if the node's own family is absent from the catalog.
pub fn apply_closest<H: Host + ?Sized>(host: &mut H, profile: &MatchProfile) -> ApplyClosestReport {
    let mut report = ApplyClosestReport::default();
    let nodes = selected_nodes(&*host);
    if nodes.is_empty() {
        return report;
    }

    let catalog = host.text_styles();
    let tolerances = profile.tolerances();
    for node in &nodes {
        let props = match classify(node, &catalog, &tolerances) {
            NodeClass::Styled => continue,
            NodeClass::Unreadable(err) => {
                report.skipped_count += 1;
                report.errors.push(NodeError::new(node.id(), err));
                continue;
            }
            NodeClass::Nearest { .. } => {
                report.skipped_count += 1;
                continue;
            }
            NodeClass::NoNearest { props } => props,
        };

        let Some(closest) = find_closest(&props, &catalog) else {
            report.skipped_count += 1;
            continue;
        };
        match host.set_text_style_id(node.id(), closest.style.id()) {
            Ok(()) => {
                report.applied_count += 1;
                if closest.is_different_family {
                    report.different_family_count += 1;
                }
            }
            Err(err) => {
                warn!(node_id = %node.id(), style_id = %closest.style.id(), error = %err, "failed to apply closest style");
                report.skipped_count += 1;
                report.errors.push(NodeError::new(node.id(), err));
            }
        }
    }

    info!(
        applied = report.applied_count,
        different_family = report.different_family_count,
        skipped = report.skipped_count,
        "apply closest finished"
    );
    report
}

/// Synthesizes and applies a fresh style for every unstyled selected node, whether or not a
/// nearest match exists.
pub fn create_styles<H: Host + ?Sized>(host: &mut H) -> CreateStylesReport {
    let mut report = CreateStylesReport::default();
    for node in &selected_nodes(&*host) {
        if is_styled(node) {
            continue;
        }
        let result = extract(node).map_err(|err| err.to_string()).and_then(|props| {
            let style = synthesize(host, node, &props).map_err(|err| err.to_string())?;
            host.set_text_style_id(node.id(), style.id()).map_err(|err| err.to_string())
        });
        match result {
            Ok(()) => report.created_count += 1,
            Err(reason) => {
                warn!(node_id = %node.id(), error = %reason, "failed to create style for node");
                report.skipped_count += 1;
                report.errors.push(NodeError::new(node.id(), reason));
            }
        }
    }

    info!(created = report.created_count, skipped = report.skipped_count, "create styles finished");
    report
}

/// Moves every selected node one style up or down within its family.
pub fn step_size<H: Host + ?Sized>(host: &mut H, direction: StepDirection) -> StepReport {
    let mut report = StepReport::default();
    let nodes = selected_nodes(&*host);
    let catalog = host.text_styles();
    if nodes.is_empty() || catalog.is_empty() {
        return report;
    }

    for node in &nodes {
        let reference = match step_reference(node, &catalog) {
            Ok(Some(reference)) => reference,
            Ok(None) => {
                debug!(node_id = %node.id(), "referenced style is no longer in the catalog");
                report.skipped_count += 1;
                continue;
            }
            Err(err) => {
                debug!(node_id = %node.id(), error = %err, "unreadable text properties");
                report.skipped_count += 1;
                continue;
            }
        };
        let Some(target) = step(&reference, &catalog, direction) else {
            report.skipped_count += 1;
            continue;
        };
        match host.set_text_style_id(node.id(), target.id()) {
            Ok(()) => report.applied_count += 1,
            Err(err) => {
                warn!(node_id = %node.id(), style_id = %target.id(), error = %err, "failed to step style");
                report.skipped_count += 1;
                report.errors.push(NodeError::new(node.id(), err));
            }
        }
    }

    info!(direction = %direction, applied = report.applied_count, skipped = report.skipped_count, "step finished");
    report
}
