// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for documents on disk.
//!
//! A document (page tree, style catalog, selection and optional font library) lives in one
//! versioned JSON file, rewritten atomically on every save.

pub mod document_file;

pub use document_file::{DocumentFile, StoreError, WriteDurability};
