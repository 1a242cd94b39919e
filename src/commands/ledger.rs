//! Ledger command handler

use std::path::Path;

use anyhow::{Context, Result};

use revtag::config::Config;
use revtag::domain::ports::LedgerRepository;
use revtag::JsonLedgerRepository;

pub fn cmd_ledger(root: &Path, json: bool) -> Result<()> {
    let (config, _) = Config::load_or_default(root)?;
    let path = config.ledger_path(root);

    let ledger = JsonLedgerRepository::new()
        .load(&path)
        .with_context(|| format!("reading ledger {}", path.display()))?;

    if json {
        let entries: serde_json::Map<String, serde_json::Value> = ledger
            .entries()
            .map(|(key, entry)| {
                (
                    key.to_string(),
                    serde_json::json!({
                        "hash": entry.hash(),
                        "version": entry.version(),
                        "fileName": entry.file_name(),
                    }),
                )
            })
            .collect();
        println!("{}", serde_json::to_string(&entries)?);
        return Ok(());
    }

    if ledger.is_empty() {
        println!("Ledger is empty ({})", path.display());
        return Ok(());
    }

    let width = ledger.keys().map(|k| k.to_string().len()).max().unwrap_or(0);
    for (key, entry) in ledger.entries() {
        println!(
            "{:<width$}  v{:<4} {}",
            key.to_string(),
            entry.version(),
            entry.file_name(),
            width = width
        );
    }
    println!("\n{} entries", ledger.len());
    Ok(())
}
