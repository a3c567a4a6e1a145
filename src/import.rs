//! Re-apply a saved record to the live store.

use crate::{
    record::SettingsRecord,
    setting::{KeyFailure, Setting},
    store::SettingsStore,
};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, Default)]
pub struct ImportOptions {
    /// Log the writes instead of issuing them. Targets are still resolved.
    pub dry_run: bool,
    /// Leave settings with an empty stored value untouched.
    pub skip_empty: bool,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    /// Written, or on a dry run, resolved and ready to write.
    pub applied: Vec<Setting>,
    pub skipped: Vec<Setting>,
    pub failures: Vec<KeyFailure>,
}

/// Write each value in canonical order. A failed write does not stop the
/// remaining ones and nothing already written is undone.
pub fn apply(
    store: &dyn SettingsStore,
    record: &SettingsRecord,
    opts: ImportOptions,
) -> ImportReport {
    let mut report = ImportReport::default();

    for (setting, value) in record.entries() {
        if value.is_empty() {
            if opts.skip_empty {
                warn!(%setting, "stored value is empty, skipping");
                report.skipped.push(setting);
                continue;
            }
            warn!(%setting, "stored value is empty, writing it anyway");
        }

        // A dry run still resolves each target, so a missing terminal
        // profile shows up as a failure instead of a planned write.
        let outcome = if opts.dry_run {
            setting.locate(store).map(|(schema, key)| {
                info!(%setting, %schema, key, value, "would set");
            })
        } else {
            setting.write(store, value)
        };

        match outcome {
            Ok(()) => report.applied.push(setting),
            Err(error) => {
                warn!(%setting, %error, "write failed");
                report.failures.push(KeyFailure { setting, error });
            }
        }
    }

    report
}

/// Load the record at `path` and apply it. An unreadable or incomplete
/// record fails before anything is written.
pub fn run(store: &dyn SettingsStore, path: &Path, opts: ImportOptions) -> Result<ImportReport> {
    let record = SettingsRecord::load(path).context("read settings record")?;
    let report = apply(store, &record, opts);

    info!(
        path = %path.display(),
        applied = report.applied.len(),
        skipped = report.skipped.len(),
        failed = report.failures.len(),
        dry_run = opts.dry_run,
        "imported settings"
    );
    Ok(report)
}
