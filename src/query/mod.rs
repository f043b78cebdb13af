// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the host document.
//!
//! Queries never mutate the host: they walk the tree, read effective typography, rank catalog
//! styles and record style usage. The batch operations in `ops` are built on top of them.

pub mod extract;
pub mod ranking;
pub mod reachability;
pub mod step;
pub mod walk;

pub use extract::{extract, ExtractError, TextProperties};
pub use ranking::{
    find_closest, find_nearest, weight_scale, MatchCandidate, Tolerances, WeightPolicy,
};
pub use reachability::{find_unused, node_references_any, record_usage, StyleUsage};
pub use step::{step, step_reference, StepDirection, StepReference};
pub use walk::{collect_text_nodes, selection_text_nodes, text_nodes};
