//! Build output fixtures

pub const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <script type="module" src="/assets/main.js"></script>
    <link rel="stylesheet" href="/assets/index.css">
  </head>
</html>
"#;

pub const MAIN_JS: &str = r#"import { render } from "./vendor.js";
const Home = () => import("./Home.js");
render(Home);
"#;

pub const VENDOR_JS: &str = "export function render(page) { page(); }\n";

pub const VENDOR_JS_PATCHED: &str = "export function render(page) { return page(); }\n";

pub const HOME_JS: &str = "export default function Home() { return 'home'; }\n";

pub const INDEX_CSS: &str = "body { background: url(./logo.svg); }\n";

pub const LOGO_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>\n";

/// A plain build without a manifest
pub fn basic_build() -> Vec<(&'static str, &'static str)> {
    vec![
        ("index.html", INDEX_HTML),
        ("assets/main.js", MAIN_JS),
        ("assets/vendor.js", VENDOR_JS),
        ("assets/Home.js", HOME_JS),
        ("assets/index.css", INDEX_CSS),
        ("assets/logo.svg", LOGO_SVG),
    ]
}

/// `basic_build` with `vendor.js` changed
pub fn patched_vendor_build() -> Vec<(&'static str, &'static str)> {
    basic_build()
        .into_iter()
        .map(|(name, content)| {
            if name == "assets/vendor.js" {
                (name, VENDOR_JS_PATCHED)
            } else {
                (name, content)
            }
        })
        .collect()
}
