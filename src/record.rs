//! The flat settings record persisted between export and import.

use crate::{setting::Setting, util};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// One verbatim store value per [`Setting`]. Every field is required when
/// reading, so a record on disk is always complete.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    pub gtk_theme: String,
    pub icon_theme: String,
    pub cursor_theme: String,
    pub wallpaper: String,
    pub color_scheme: String,
}

impl SettingsRecord {
    pub fn get(&self, setting: Setting) -> &str {
        match setting {
            Setting::GtkTheme => &self.gtk_theme,
            Setting::IconTheme => &self.icon_theme,
            Setting::CursorTheme => &self.cursor_theme,
            Setting::Wallpaper => &self.wallpaper,
            Setting::ColorScheme => &self.color_scheme,
        }
    }

    fn slot(&mut self, setting: Setting) -> &mut String {
        match setting {
            Setting::GtkTheme => &mut self.gtk_theme,
            Setting::IconTheme => &mut self.icon_theme,
            Setting::CursorTheme => &mut self.cursor_theme,
            Setting::Wallpaper => &mut self.wallpaper,
            Setting::ColorScheme => &mut self.color_scheme,
        }
    }

    /// Build a record by asking `value` for each setting in canonical order.
    pub fn from_fn(mut value: impl FnMut(Setting) -> String) -> Self {
        let mut record = Self::default();
        for setting in Setting::ALL {
            *record.slot(setting) = value(setting);
        }
        record
    }

    /// `(setting, value)` pairs in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (Setting, &str)> {
        Setting::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    pub fn parse(src: &str) -> Result<Self> {
        serde_json::from_str(src).context("parse settings record")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::parse(&src).with_context(|| format!("load {}", path.display()))
    }

    /// Replace the file at `path` atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self).context("serialize settings record")?;
        json.push('\n');
        util::write_atomic(path, json.as_bytes())
    }
}
