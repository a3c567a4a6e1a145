//! The live desktop configuration store and its `gsettings` backend.

pub mod gsettings;

#[cfg(test)]
pub mod fake;

use std::io;
use thiserror::Error;

pub use gsettings::Gsettings;

/// Read/write access to a `(schema, key)` addressed settings store.
pub trait SettingsStore {
    /// Raw, untrimmed output of a read query.
    fn get(&self, schema: &str, key: &str) -> Result<String, StoreError>;

    fn set(&self, schema: &str, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{op} {schema} {key} failed ({}): {}", describe_code(.code), trimmed(.stderr))]
    Failed {
        op: &'static str,
        schema: String,
        key: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("no usable default terminal profile (got {raw:?})")]
    UnresolvedProfile { raw: String },

    /// The lookup that locates a setting failed; its output belongs to the
    /// lookup, not to the setting.
    #[error("look up default terminal profile: {0}")]
    ProfileLookup(#[source] Box<StoreError>),
}

impl StoreError {
    /// Whatever the failed call wrote to stdout before it gave up.
    pub fn partial_output(&self) -> &str {
        match self {
            Self::Failed { stdout, .. } => stdout,
            Self::Spawn { .. } | Self::UnresolvedProfile { .. } | Self::ProfileLookup(_) => "",
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "killed by signal".to_owned(),
    }
}

fn trimmed(s: &str) -> &str {
    s.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_output_only_for_failed_calls() {
        let failed = StoreError::Failed {
            op: "get",
            schema: "s".into(),
            key: "k".into(),
            code: Some(1),
            stdout: "'half".into(),
            stderr: "boom\n".into(),
        };
        assert_eq!(failed.partial_output(), "'half");
        assert_eq!(failed.to_string(), "get s k failed (exit code 1): boom");

        let spawn = StoreError::Spawn {
            program: "gsettings".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(spawn.partial_output(), "");
    }

    #[test]
    fn profile_lookup_hides_lookup_output() {
        let lookup = StoreError::Failed {
            op: "get",
            schema: "org.gnome.Terminal.ProfilesList".into(),
            key: "default".into(),
            code: Some(1),
            stdout: "'b1dcc9dd'".into(),
            stderr: String::new(),
        };
        let err = StoreError::ProfileLookup(Box::new(lookup));
        assert_eq!(err.partial_output(), "");
        assert!(err.to_string().starts_with("look up default terminal profile: get"));
    }
}
