//! Property tests for version tag handling.

use proptest::prelude::*;

use revtag::domain::value_objects::{add_version_tag, strip_version_tag};

fn file_name() -> impl Strategy<Value = String> {
    let dir = proptest::string::string_regex("[a-z]{1,8}").unwrap();
    let stem = proptest::string::string_regex("[A-Za-z0-9_-]{1,12}(\\.[a-z]{1,6})?").unwrap();
    let ext = proptest::string::string_regex("[a-z]{1,4}").unwrap();
    (proptest::option::of(dir), stem, ext).prop_map(|(dir, stem, ext)| match dir {
        Some(dir) => format!("{}/{}.{}", dir, stem, ext),
        None => format!("{}.{}", stem, ext),
    })
}

fn version() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{1,6}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: stripping a freshly added tag gives back the untagged name.
    #[test]
    fn property_strip_undoes_add(name in file_name(), v in version()) {
        let base = strip_version_tag(&name);
        let tagged = add_version_tag(&name, &v);
        prop_assert_eq!(strip_version_tag(&tagged), base);
    }

    /// PROPERTY: re-tagging replaces the tag instead of stacking a second one.
    #[test]
    fn property_retag_replaces(name in file_name(), a in version(), b in version()) {
        let once = add_version_tag(&name, &b);
        let twice = add_version_tag(&add_version_tag(&name, &a), &b);
        prop_assert_eq!(twice, once);
    }

    /// PROPERTY: the tag sits right before the final extension.
    #[test]
    fn property_extension_is_preserved(name in file_name(), v in version()) {
        let tagged = add_version_tag(&name, &v);
        let ext = name.rsplit('.').next().unwrap();
        let expected_suffix = format!(".v{}.{}", v, ext);
        prop_assert!(tagged.ends_with(&expected_suffix), "{} lacks {}", tagged, expected_suffix);
    }

    /// PROPERTY: `strip_version_tag` never panics on arbitrary input.
    #[test]
    fn property_strip_never_panics(s in ".{0,64}") {
        let _ = strip_version_tag(&s);
    }
}
