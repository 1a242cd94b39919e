//! Property tests for cross-build name stability.

use proptest::prelude::*;

use revtag::application::BuildSession;
use revtag::{Artifact, ArtifactKey, BuildVersion, KindPolicy, Ledger, Stamper};

fn chunk_set() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::btree_map("[a-z]{1,8}", "[ -~]{0,40}", 1..8)
        .prop_map(|m| m.into_iter().collect())
}

fn build(chunks: &[(String, String)]) -> Vec<Artifact> {
    chunks
        .iter()
        .map(|(stem, code)| {
            Artifact::chunk(
                ArtifactKey::chunk(stem),
                format!("assets/{}.js", stem),
                code.as_str(),
            )
        })
        .collect()
}

fn stamp(ledger: Ledger, version: u32, artifacts: Vec<Artifact>) -> revtag::StampOutcome {
    let candidate = BuildVersion::parse(&version.to_string()).unwrap();
    Stamper::new(KindPolicy::default())
        .run(BuildSession::begin(ledger, candidate), artifacts)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rebuilding identical content under any later version keeps
    /// every final file name.
    #[test]
    fn property_unchanged_content_keeps_names(chunks in chunk_set(), next in 2u32..1000) {
        let first = stamp(Ledger::new(), 1, build(&chunks));
        let second = stamp(first.ledger.clone(), next, build(&chunks));

        let names = |o: &revtag::StampOutcome| {
            o.artifacts.iter().map(|a| a.file_name().to_string()).collect::<Vec<_>>()
        };
        prop_assert_eq!(names(&first), names(&second));
        prop_assert_eq!(second.report.reused, chunks.len());
        prop_assert_eq!(first.ledger, second.ledger);
    }

    /// PROPERTY: every tracked artifact ends up in the staged ledger under its
    /// final file name, and nothing else does.
    #[test]
    fn property_ledger_mirrors_final_names(chunks in chunk_set()) {
        let outcome = stamp(Ledger::new(), 3, build(&chunks));

        prop_assert_eq!(outcome.ledger.len(), outcome.artifacts.len());
        for artifact in &outcome.artifacts {
            let entry = outcome.ledger.get(artifact.key()).unwrap();
            prop_assert_eq!(entry.file_name(), artifact.file_name());
            prop_assert_eq!(entry.version(), "3");
        }
    }
}
