//! Scenario: pinned and untagged asset kinds
//!
//! Journey: a site ships a GIF (pinned), a stylesheet (hash-tracked but never
//! tagged) and a source map (skipped). Only code chunks ever change names.

use revtag::ArtifactKey;

use crate::support::Project;

const GIF_A: &[u8] = b"GIF89a\x01\x00\x01\x00\x00\x00\x00";
const GIF_B: &[u8] = b"GIF89a\x02\x00\x02\x00\x00\x00\x00";

#[test]
fn scenario_pinned_gif_keeps_name_and_first_tag() {
    let project = Project::new();

    project.emit_build(&[("assets/spinner.gif", GIF_A), ("assets/app.js", b"run();\n")]);
    project.stamp("1");

    project.emit_build(&[("assets/spinner.gif", GIF_B), ("assets/app.js", b"run();\n")]);
    let outcome = project.stamp("2");

    assert_eq!(outcome.report.pinned, 1);
    assert!(project.exists("assets/spinner.gif"));
    let entry = project
        .ledger()
        .get(&ArtifactKey::asset("spinner.gif"))
        .cloned()
        .unwrap();
    assert_eq!(entry.version(), "1");
    assert_eq!(entry.file_name(), "assets/spinner.gif");
}

#[test]
fn scenario_stylesheets_are_tracked_but_never_renamed() {
    let project = Project::new();

    project.emit_build(&[("assets/index.css", b"body{}")]);
    project.stamp("1");
    project.emit_build(&[("assets/index.css", b"body{color:red}")]);
    let outcome = project.stamp("2");

    assert_eq!(outcome.report.changed, 1);
    assert!(outcome.renames.is_empty());
    assert!(project.exists("assets/index.css"));
    let entry = project
        .ledger()
        .get(&ArtifactKey::asset("index.css"))
        .cloned()
        .unwrap();
    assert_eq!(entry.version(), "2");
}

#[test]
fn scenario_source_maps_are_rewritten_but_not_tracked() {
    let project = Project::new();

    project.emit_build(&[
        ("assets/app.js", b"run();\n"),
        ("assets/app.js.map", b"{\"file\":\"app.js\",\"sources\":[]}"),
    ]);
    let outcome = project.stamp("6");

    assert_eq!(outcome.report.untracked, 1);
    assert!(project.exists("assets/app.js.map"));
    assert!(project.read("assets/app.js.map").contains("\"file\":\"app.v6.js\""));
    assert!(project
        .ledger()
        .get(&ArtifactKey::asset("app.js.map"))
        .is_none());
}
