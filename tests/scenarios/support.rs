//! Shared driver for scenario builds

use std::path::{Path, PathBuf};

use revtag::domain::ports::LedgerRepository;
use revtag::{
    BuildVersion, DistSink, DistSource, JsonLedgerRepository, KindPolicy, Ledger, RevtagResult,
    StampOptions, StampOutcome, StampUseCase,
};
use tempfile::TempDir;

pub struct Project {
    pub root: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    pub fn dist(&self) -> PathBuf {
        self.root.path().join("dist")
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.root.path().join(".revtag-versions.json")
    }

    /// Replace the output directory with a fresh build
    pub fn emit_build(&self, files: &[(&str, &[u8])]) {
        let dist = self.dist();
        if dist.exists() {
            std::fs::remove_dir_all(&dist).unwrap();
        }
        for (name, content) in files {
            write(&dist.join(name), content);
        }
    }

    pub fn stamp(&self, version: &str) -> StampOutcome {
        self.try_stamp(version).unwrap()
    }

    pub fn try_stamp(&self, version: &str) -> RevtagResult<StampOutcome> {
        let policy = KindPolicy::default();
        let options = StampOptions::new(BuildVersion::parse(version).unwrap())
            .with_ledger_path(self.ledger_path());
        StampUseCase::new(JsonLedgerRepository::new(), policy.clone()).execute(
            &options,
            &DistSource::new(self.dist(), policy),
            &DistSink::new(self.dist()),
        )
    }

    pub fn ledger(&self) -> Ledger {
        JsonLedgerRepository::new().load(&self.ledger_path()).unwrap()
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dist().join(name)).unwrap()
    }

    pub fn read_bytes(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.dist().join(name)).unwrap()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dist().join(name).exists()
    }
}

fn write(path: &Path, content: &[u8]) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}
