//! Outline import command - turn an outline file into test case records

use anyhow::{Context, Result};
use mindcase_core::{
    CaseImporter, CaseStore, ExistenceChecker, ImportConfig, JsonOutlineExtractor, NoStore,
};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::cli::ImportArgs;
use crate::output::{OutputFormat, print_diagnostics, print_records_json, print_records_text};

/// Run one import and print its results.
///
/// Returns `true` when the import produced no diagnostics.
pub fn execute(args: &ImportArgs) -> Result<bool> {
    let config = load_config(args)?;

    let bytes = fs::read(&args.outline)
        .with_context(|| format!("Failed to read outline {}", args.outline.display()))?;

    let mut known_names = match &args.known_names {
        Some(path) => read_known_names(path)?,
        None => HashSet::new(),
    };

    let store = args
        .existing
        .as_deref()
        .map(|path| {
            CaseStore::load(args.project_id.as_str(), path)
                .with_context(|| format!("Failed to load stored cases from {}", path.display()))
        })
        .transpose()?;
    if let Some(store) = &store {
        debug!(stored = store.len(), "loaded existing cases");
        known_names.extend(store.names().map(str::to_string));
    }
    let checker: &dyn ExistenceChecker = match &store {
        Some(store) => store,
        None => &NoStore,
    };

    let mut importer = CaseImporter::new(
        args.project_id.as_str(),
        args.maintainer.as_str(),
        &mut known_names,
        checker,
    )
    .with_config(config);
    importer.import_bytes(&JsonOutlineExtractor, &bytes);

    let report = importer.report();
    match args.format {
        OutputFormat::Json => print_records_json(importer.records())?,
        OutputFormat::Text => print_records_text(importer.records(), &report),
    }
    print_diagnostics(&report);

    Ok(report.is_clean())
}

fn load_config(args: &ImportArgs) -> Result<ImportConfig> {
    let mut config = match &args.config {
        Some(path) => ImportConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ImportConfig::load_default().context("Failed to load default config")?,
    };
    if let Some(locale) = args.locale {
        config.messages.locale = locale;
    }
    Ok(config)
}

/// One name per line; blank lines are skipped.
fn read_known_names(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read known names {}", path.display()))?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
