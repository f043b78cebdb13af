// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stylesweep: text-style audit engine (nearest-match ranking, reachability, size stepping)
//! with an MCP server surface.
//!
//! The algorithms in [`query`] and the batches in [`ops`] talk to the document only through the
//! [`host::Host`] trait; [`model::Document`] is the bundled in-memory host.

pub mod host;
pub mod mcp;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;
