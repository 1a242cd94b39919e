//! Stamp command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use revtag::config::Config;
use revtag::{
    BuildVersion, DistSink, DistSource, JsonLedgerRepository, StampOptions, StampOutcome,
    StampUseCase,
};

#[derive(Debug, Clone, Default)]
pub struct StampArgs {
    pub root: PathBuf,
    pub out: Option<PathBuf>,
    pub version: Option<String>,
    pub dry_run: bool,
    pub json: bool,
}

pub fn cmd_stamp(args: StampArgs) -> Result<()> {
    let (mut config, warnings) = Config::load_or_default(&args.root)
        .with_context(|| format!("loading configuration from {}", args.root.display()))?;
    for warning in &warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            suggestion = ?warning.suggestion,
            "unknown configuration key"
        );
    }

    // CLI flags win over file and environment
    if let Some(out) = args.out {
        config.build.output_dir = out;
    }
    if let Some(version) = args.version {
        config.build.version = Some(version);
    }

    let version: BuildVersion = config.build_version()?.ok_or_else(|| {
        anyhow::anyhow!(
            "no build version given (use --version, REVTAG_VERSION or [build].version in revtag.toml)"
        )
    })?;

    let policy = config.kind_policy();
    let out_dir = config.output_dir(&args.root);
    let options = StampOptions::new(version)
        .with_ledger_path(config.ledger_path(&args.root))
        .with_dry_run(args.dry_run);

    let source = DistSource::new(&out_dir, policy.clone());
    let sink = DistSink::new(&out_dir);
    let use_case = StampUseCase::new(JsonLedgerRepository::new(), policy);

    let outcome = use_case
        .execute(&options, &source, &sink)
        .with_context(|| format!("stamping {}", out_dir.display()))?;

    if args.json {
        let out = serde_json::json!({
            "event": "stamp",
            "version": options.version.as_str(),
            "dry_run": options.dry_run,
            "report": outcome.report,
            "renames": outcome.renames,
        });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    print_summary(&outcome, &options);
    Ok(())
}

fn print_summary(outcome: &StampOutcome, options: &StampOptions) {
    let report = &outcome.report;
    if options.dry_run {
        println!("Dry run (version {}): nothing written", options.version);
    } else {
        println!("Stamped build (version {})", options.version);
    }
    for rename in &outcome.renames {
        println!("  {} -> {}", rename.from, rename.to);
    }
    println!(
        "Summary: {} renamed, {} reused, {} changed, {} new, {} pinned",
        report.renamed, report.reused, report.changed, report.new, report.pinned
    );
    if report.texts_rewritten > 0 {
        println!("Rewrote references in {} files", report.texts_rewritten);
    }
}
