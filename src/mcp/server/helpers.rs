// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

fn parse_node_id(value: &str) -> Result<NodeId, ErrorData> {
    NodeId::new(value).map_err(|err| {
        ErrorData::invalid_params(
            format!("invalid node_id: {err}"),
            Some(serde_json::json!({ "node_id": value })),
        )
    })
}

fn parse_style_ids(values: &[String]) -> Result<Vec<StyleId>, ErrorData> {
    values
        .iter()
        .map(|value| {
            StyleId::new(value.as_str()).map_err(|err| {
                ErrorData::invalid_params(
                    format!("invalid style_id: {err}"),
                    Some(serde_json::json!({ "style_id": value })),
                )
            })
        })
        .collect()
}

/// Per-call profile override, falling back to the server's configured profile.
fn resolve_profile(base: &MatchProfile, profile: Option<&str>) -> Result<MatchProfile, ErrorData> {
    let Some(profile) = profile else {
        return Ok(*base);
    };
    profile.parse::<MatchProfile>().map_err(|err| {
        ErrorData::invalid_params(err.to_string(), Some(serde_json::json!({ "profile": profile })))
    })
}

fn bulk_edit_from_params(property: BulkProperty, value: BulkValue) -> Result<BulkEdit, ErrorData> {
    let number = |value: BulkValue| match value {
        BulkValue::Number(number) => Ok(number),
        BulkValue::Text(text) => text.trim().parse::<f64>().map_err(|_| {
            ErrorData::invalid_params(
                format!("expected a number for {property:?}, got '{text}'"),
                None,
            )
        }),
    };

    Ok(match property {
        BulkProperty::FontSize => BulkEdit::FontSize(number(value)?),
        BulkProperty::LineHeight => BulkEdit::LineHeightPercent(number(value)?),
        BulkProperty::LetterSpacing => BulkEdit::LetterSpacingPercent(number(value)?),
        BulkProperty::Weight => match value {
            BulkValue::Text(weight) if !weight.trim().is_empty() => {
                BulkEdit::Weight(weight.trim().to_owned())
            }
            other => {
                return Err(ErrorData::invalid_params(
                    format!("expected a non-empty weight label, got {other:?}"),
                    None,
                ));
            }
        },
    })
}

fn step_direction(direction: McpStepDirection) -> StepDirection {
    match direction {
        McpStepDirection::Larger => StepDirection::Larger,
        McpStepDirection::Smaller => StepDirection::Smaller,
    }
}

fn match_predicate(predicate: McpMatchPredicate) -> MatchPredicate {
    match predicate {
        McpMatchPredicate::HasNearest => MatchPredicate::HasNearest,
        McpMatchPredicate::NoNearest => MatchPredicate::NoNearest,
    }
}

fn apply_selection_mode(current: &[NodeId], mode: UpdateMode, node_ids: &[NodeId]) -> Vec<NodeId> {
    match mode {
        UpdateMode::Replace => node_ids.to_vec(),
        UpdateMode::Add => {
            let mut selection = current.to_vec();
            for node_id in node_ids {
                if !selection.contains(node_id) {
                    selection.push(node_id.clone());
                }
            }
            selection
        }
        UpdateMode::Remove => {
            current.iter().filter(|node_id| !node_ids.contains(node_id)).cloned().collect()
        }
    }
}
