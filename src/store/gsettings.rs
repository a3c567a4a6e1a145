//! `gsettings get` / `gsettings set` as blocking child processes.

use super::{SettingsStore, StoreError};
use std::process::{Command, Output, Stdio};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct Gsettings {
    program: String,
}

impl Gsettings {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, op: &'static str, args: &[&str]) -> Result<Output, StoreError> {
        debug!(program = %self.program, op, ?args, "gsettings call");
        Command::new(&self.program)
            .arg(op)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| StoreError::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}

impl SettingsStore for Gsettings {
    fn get(&self, schema: &str, key: &str) -> Result<String, StoreError> {
        let out = self.run("get", &[schema, key])?;
        check("get", schema, key, out)
    }

    fn set(&self, schema: &str, key: &str, value: &str) -> Result<(), StoreError> {
        let out = self.run("set", &[schema, key, value])?;
        check("set", schema, key, out).map(drop)
    }
}

/// Decode stdout, turning a nonzero exit into [`StoreError::Failed`].
fn check(op: &'static str, schema: &str, key: &str, out: Output) -> Result<String, StoreError> {
    let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
    if out.status.success() {
        return Ok(stdout);
    }

    Err(StoreError::Failed {
        op,
        schema: schema.to_owned(),
        key: key.to_owned(),
        code: out.status.code(),
        stdout,
        stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn passes_positional_arguments() {
        let store = Gsettings::new("echo");
        let out = store.get("org.gnome.desktop.interface", "gtk-theme").unwrap();
        assert_eq!(out, "get org.gnome.desktop.interface gtk-theme\n");
    }

    #[test]
    fn set_passes_value_verbatim() {
        let store = Gsettings::new("echo");
        store
            .set("org.gnome.desktop.background", "picture-uri", "'file:///wall.png'")
            .unwrap();
    }

    #[test]
    fn nonzero_exit_is_failed() {
        let store = Gsettings::new("false");
        let err = store.get("schema", "key").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Failed { op: "get", code: Some(1), .. }
        ));
        assert_eq!(err.partial_output(), "");
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let store = Gsettings::new("oxidize-settings-no-such-program");
        let err = store.set("schema", "key", "v").unwrap_err();
        assert!(matches!(err, StoreError::Spawn { .. }));
    }
}
