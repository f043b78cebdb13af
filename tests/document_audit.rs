// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use stylesweep::host::Host;
use stylesweep::model::{Document, NodeId, Prop, StyleId};
use stylesweep::ops::{
    apply_closest, apply_nearest, bulk_edit, delete_unused, list_unused, scan, step_size,
    BulkEdit, MatchProfile,
};
use stylesweep::query::StepDirection;
use stylesweep::store::DocumentFile;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("landing_page.json")
}

/// Copies the fixture into a fresh temp dir so saves never touch the checked-in file.
fn working_copy(test_name: &str) -> (PathBuf, DocumentFile) {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let dir = std::env::temp_dir()
        .join(format!("stylesweep-it-{test_name}-{}-{nanos}", std::process::id()));
    fs::create_dir_all(&dir).unwrap_or_else(|err| panic!("failed to create {dir:?}: {err}"));
    let path = dir.join("landing_page.json");
    fs::copy(fixture_path(), &path).unwrap_or_else(|err| panic!("failed to copy fixture: {err}"));
    (dir, DocumentFile::new(path))
}

fn load(file: &DocumentFile) -> Document {
    file.load().unwrap_or_else(|err| panic!("failed to load {:?}: {err}", file.path()))
}

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn style_of(document: &Document, node_id: &str) -> Prop<StyleId> {
    document.text_node(&nid(node_id)).expect("text node").style_id()
}

fn uniform(style_id: &str) -> Prop<StyleId> {
    Prop::Uniform(StyleId::new(style_id).expect("style id"))
}

#[test]
fn fixture_scan_classifies_the_landing_frame() {
    let document = load(&DocumentFile::new(fixture_path()));
    let report = scan(&document, &MatchProfile::tolerant());

    assert!(report.has_selection);
    assert_eq!(report.applied_count, 1);
    assert_eq!(report.not_applied_count, 5);
    assert_eq!(report.has_nearest_count, 3);
    assert_eq!(report.no_nearest_count, 2);
    assert_eq!(report.no_nearest_ids, vec![nid("10:5"), nid("10:8")]);

    let strict = scan(&document, &MatchProfile::strict());
    assert_eq!(strict.has_nearest_ids, vec![nid("10:3"), nid("10:6")]);
}

#[test]
fn tolerant_cleanup_survives_save_and_reload() {
    let (dir, file) = working_copy("tolerant");
    let mut document = load(&file);
    let profile = MatchProfile::tolerant();

    let nearest = apply_nearest(&mut document, &profile);
    assert_eq!((nearest.applied_count, nearest.skipped_count), (3, 2));

    let closest = apply_closest(&mut document, &profile);
    assert_eq!(closest.applied_count, 2);
    assert_eq!(closest.different_family_count, 1);

    let after = scan(&document, &profile);
    assert_eq!((after.applied_count, after.not_applied_count), (6, 0));

    file.save(&document).expect("save document");
    let reloaded = load(&file);
    assert_eq!(style_of(&reloaded, "10:3"), uniform("S:body"));
    assert_eq!(style_of(&reloaded, "10:4"), uniform("S:caption"));
    assert_eq!(style_of(&reloaded, "10:5"), uniform("S:quote"));
    assert_eq!(style_of(&reloaded, "10:6"), uniform("S:body"));
    assert_eq!(style_of(&reloaded, "10:8"), uniform("S:caption"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn strict_profile_synthesizes_missing_styles() {
    let (dir, file) = working_copy("strict");
    let mut document = load(&file);

    let report = apply_nearest(&mut document, &MatchProfile::strict());
    assert_eq!(report.applied_count, 2);
    assert_eq!(report.created_count, 3);
    assert!(report.errors.is_empty());

    let names = document.styles().iter().map(|style| style.name()).collect::<Vec<_>>();
    assert!(names.contains(&"Inter/Medium/12.5"));
    assert!(names.contains(&"Merriweather/Italic/22"));
    assert!(names.contains(&"Courier/Regular/10"));

    file.save(&document).expect("save document");
    assert_eq!(load(&file).styles().len(), 8);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unused_cleanup_keeps_remote_and_partially_used_styles() {
    let (dir, file) = working_copy("unused");
    let mut document = load(&file);

    let unused = list_unused(&document);
    assert_eq!(unused.total_styles, 5);
    assert_eq!(unused.used_count, 2);
    assert_eq!(unused.total_nodes_scanned, 6);
    assert_eq!(
        unused.unused_styles.iter().map(|style| style.name.as_str()).collect::<Vec<_>>(),
        ["Caption", "Quote", "Brand/Display"]
    );

    let deleted = delete_unused(&mut document);
    assert_eq!(deleted.deleted_count, 2);
    assert_eq!(deleted.errors.len(), 1);
    assert_eq!(deleted.errors[0].name, "Brand/Display");

    file.save(&document).expect("save document");
    let reloaded = load(&file);
    let ids = reloaded.styles().iter().map(|style| style.id().as_str()).collect::<Vec<_>>();
    assert_eq!(ids, ["S:body", "S:h1", "S:brand"]);
    assert!(reloaded.styles()[2].is_remote());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn bulk_edit_restyles_referencing_text() {
    let mut document = load(&DocumentFile::new(fixture_path()));
    let h1 = StyleId::new("S:h1").expect("style id");

    let report = bulk_edit(&mut document, &BulkEdit::FontSize(36.0), &[h1]);
    assert_eq!(report.updated_count, 1);

    let welcome = document.text_node(&nid("10:2")).expect("welcome");
    assert_eq!(welcome.font_size(), Prop::Uniform(36.0));
}

#[test]
fn step_size_walks_the_inter_scale() {
    let mut document = load(&DocumentFile::new(fixture_path()));
    document.set_selection(vec![nid("10:2")]).expect("select heading");

    step_size(&mut document, StepDirection::Smaller);
    assert_eq!(style_of(&document, "10:2"), uniform("S:body"));

    step_size(&mut document, StepDirection::Larger);
    assert_eq!(style_of(&document, "10:2"), uniform("S:h1"));

    step_size(&mut document, StepDirection::Larger);
    assert_eq!(style_of(&document, "10:2"), uniform("S:brand"));
}
