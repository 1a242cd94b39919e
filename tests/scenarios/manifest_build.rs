//! Scenario: Vite build with a manifest
//!
//! Journey: a React app is built three times. Chunk identities come from the
//! build manifest, so a page component moving to another directory keeps its
//! published name as long as its code is unchanged.

use revtag::ArtifactKey;

use crate::support::Project;

const MANIFEST_V1: &str = r#"{
  "index.html": {
    "file": "assets/index.js",
    "name": "index",
    "src": "index.html",
    "isEntry": true,
    "dynamicImports": ["src/pages/Home.jsx"],
    "css": ["assets/index.css"]
  },
  "src/pages/Home.jsx": {
    "file": "assets/Home.js",
    "name": "Home",
    "src": "src/pages/Home.jsx",
    "isDynamicEntry": true
  }
}
"#;

const MANIFEST_MOVED: &str = r#"{
  "index.html": {
    "file": "assets/index.js",
    "name": "index",
    "src": "index.html",
    "isEntry": true,
    "dynamicImports": ["src/views/Home.jsx"]
  },
  "src/views/Home.jsx": {
    "file": "assets/Home.js",
    "name": "Home",
    "src": "src/views/Home.jsx",
    "isDynamicEntry": true
  }
}
"#;

const HTML: &[u8] = b"<script type=\"module\" src=\"/assets/index.js\"></script>\n";
const INDEX_JS: &[u8] = b"const Home = () => import(\"./Home.js\");\n";
const INDEX_JS_V2: &[u8] = b"const Home = () => import(\"./Home.js\");\nconsole.log(2);\n";
const HOME_JS: &[u8] = b"export default () => 'home';\n";

#[test]
fn scenario_three_builds_with_manifest() {
    let project = Project::new();

    // Build 1: everything is new
    project.emit_build(&[
        (".vite/manifest.json", MANIFEST_V1.as_bytes()),
        ("index.html", HTML),
        ("assets/index.js", INDEX_JS),
        ("assets/Home.js", HOME_JS),
    ]);
    let outcome = project.stamp("1");
    assert_eq!(outcome.report.new, 2);
    assert!(project.exists("assets/index.v1.js"));
    assert!(project.exists("assets/Home.v1.js"));
    assert!(project.read("index.html").contains("/assets/index.v1.js"));

    let ledger = project.ledger();
    let home = ledger.get(&ArtifactKey::chunk("src/pages/Home.jsx")).unwrap();
    assert_eq!(home.file_name(), "assets/Home.v1.js");

    // The manifest is passed through but follows the renames
    let manifest = project.read(".vite/manifest.json");
    assert!(manifest.contains("\"file\": \"assets/Home.v1.js\""), "{manifest}");

    // Build 2: Home.jsx moved to src/views, index.js changed
    project.emit_build(&[
        (".vite/manifest.json", MANIFEST_MOVED.as_bytes()),
        ("index.html", HTML),
        ("assets/index.js", INDEX_JS_V2),
        ("assets/Home.js", HOME_JS),
    ]);
    let outcome = project.stamp("2");
    assert_eq!(outcome.report.reused, 1);
    assert_eq!(outcome.report.changed, 1);
    assert!(project.exists("assets/Home.v1.js"));
    assert!(project.exists("assets/index.v2.js"));
    assert!(project
        .read("assets/index.v2.js")
        .contains("import(\"./Home.v1.js\")"));

    // the ledger follows the new identity and forgets the old one
    let ledger = project.ledger();
    assert!(ledger.get(&ArtifactKey::chunk("src/pages/Home.jsx")).is_none());
    assert_eq!(
        ledger
            .get(&ArtifactKey::chunk("src/views/Home.jsx"))
            .unwrap()
            .version(),
        "1"
    );

    // Build 3: nothing changed
    project.emit_build(&[
        (".vite/manifest.json", MANIFEST_MOVED.as_bytes()),
        ("index.html", HTML),
        ("assets/index.js", INDEX_JS_V2),
        ("assets/Home.js", HOME_JS),
    ]);
    let outcome = project.stamp("3");
    assert_eq!(outcome.report.reused, 2);
    assert_eq!(outcome.report.new + outcome.report.changed, 0);
    assert!(project.exists("assets/index.v2.js"));
    assert!(!project.exists("assets/index.v3.js"));
}

#[test]
fn scenario_structured_references_follow_renames() {
    let project = Project::new();
    project.emit_build(&[
        (".vite/manifest.json", MANIFEST_V1.as_bytes()),
        ("assets/index.js", INDEX_JS),
        ("assets/Home.js", HOME_JS),
    ]);

    let outcome = project.stamp("4");

    let index = outcome
        .artifacts
        .iter()
        .find(|a| a.key() == &ArtifactKey::chunk("index.html"))
        .unwrap();
    assert_eq!(
        index.references().unwrap().dynamic_imports,
        vec!["assets/Home.v4.js".to_string()]
    );
    assert_eq!(outcome.final_name_of("assets/Home.js"), "assets/Home.v4.js");
}
