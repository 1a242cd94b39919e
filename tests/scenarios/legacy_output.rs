//! Scenario: output a deploy pipeline did not expect
//!
//! Journey: a site still serves a latin-1 encoded `index.html`, and a CI job
//! retries the stamp step over a directory it already stamped.

use revtag::{ArtifactKey, RevtagError};

use crate::support::Project;

const LATIN1_HTML: &[u8] =
    b"<title>Caf\xe9 cr\xe8me</title>\n<script type=\"module\" src=\"/assets/main.js\"></script>\n";
const MAIN_JS: &[u8] = b"import \"./vendor.js\";\n";
const VENDOR_JS: &[u8] = b"export const v = 1;\n";
const VENDOR_JS_PATCHED: &[u8] = b"export const v = 2;\n";

#[test]
fn scenario_latin1_html_follows_renames() {
    let project = Project::new();

    project.emit_build(&[
        ("index.html", LATIN1_HTML),
        ("assets/main.js", MAIN_JS),
        ("assets/vendor.js", VENDOR_JS),
    ]);
    let outcome = project.stamp("3");

    assert_eq!(outcome.report.texts_rewritten, 2);
    assert_eq!(
        project.read_bytes("index.html"),
        b"<title>Caf\xe9 cr\xe8me</title>\n<script type=\"module\" src=\"/assets/main.v3.js\"></script>\n"
            .to_vec()
    );
    assert!(project.read("assets/main.v3.js").contains("./vendor.v3.js"));
}

#[test]
fn scenario_retried_stamp_is_refused_and_ledger_survives() {
    let project = Project::new();

    project.emit_build(&[("assets/main.js", MAIN_JS), ("assets/vendor.js", VENDOR_JS)]);
    project.stamp("3");
    let ledger = project.ledger();

    // retry over the stamped directory
    let err = project.try_stamp("4").unwrap_err();
    assert!(matches!(err, RevtagError::AlreadyStamped { .. }), "{err}");
    assert_eq!(project.ledger(), ledger);

    // the next fresh build still reuses every tag
    project.emit_build(&[("assets/main.js", MAIN_JS), ("assets/vendor.js", VENDOR_JS)]);
    let outcome = project.stamp("5");
    assert_eq!(outcome.report.reused, 2);
    assert_eq!(project.ledger(), ledger);

    // a real change bumps only the changed chunk
    project.emit_build(&[("assets/main.js", MAIN_JS), ("assets/vendor.js", VENDOR_JS_PATCHED)]);
    project.stamp("6");
    let next = project.ledger();
    assert_eq!(next.get(&ArtifactKey::chunk("main")).unwrap().version(), "3");
    assert_eq!(next.get(&ArtifactKey::chunk("vendor")).unwrap().version(), "6");
}
