//! Capture the live settings into a record file.

use crate::{
    record::SettingsRecord,
    setting::{KeyFailure, Setting},
    store::SettingsStore,
};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

pub struct ExportReport {
    pub record: SettingsRecord,
    pub failures: Vec<KeyFailure>,
}

/// Read every setting. A failed read degrades to whatever partial output
/// the store produced, so the record is always complete.
pub fn capture(store: &dyn SettingsStore) -> ExportReport {
    let mut failures = Vec::new();

    let record = SettingsRecord::from_fn(|setting: Setting| match setting.read(store) {
        Ok(value) => value,
        Err(error) => {
            let degraded = error.partial_output().trim().to_owned();
            warn!(%setting, %error, value = %degraded, "read failed, keeping degraded value");
            failures.push(KeyFailure { setting, error });
            degraded
        }
    });

    ExportReport { record, failures }
}

/// Capture and write the record to `path`, replacing any existing file.
pub fn run(store: &dyn SettingsStore, path: &Path) -> Result<ExportReport> {
    let report = capture(store);
    report
        .record
        .save(path)
        .with_context(|| format!("write settings record {}", path.display()))?;

    info!(
        path = %path.display(),
        degraded = report.failures.len(),
        "exported settings"
    );
    Ok(report)
}
