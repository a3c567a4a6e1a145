//! The five backed-up settings and where each one lives in the store.

use crate::store::{SettingsStore, StoreError};
use std::{borrow::Cow, fmt};

const INTERFACE: &str = "org.gnome.desktop.interface";
const BACKGROUND: &str = "org.gnome.desktop.background";

const PROFILES_LIST: &str = "org.gnome.Terminal.ProfilesList";
const PROFILE_PREFIX: &str =
    "org.gnome.Terminal.Legacy.Profile:/org/gnome/terminal/legacy/profiles:/:";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Setting {
    GtkTheme,
    IconTheme,
    CursorTheme,
    Wallpaper,
    ColorScheme,
}

/// Location of a setting in the store.
enum Target {
    Fixed {
        schema: &'static str,
        key: &'static str,
    },
    /// A key inside the default gnome-terminal profile, resolved per call.
    TerminalProfile { key: &'static str },
}

impl Setting {
    /// Canonical order; also the order settings are applied in.
    pub const ALL: [Setting; 5] = [
        Self::GtkTheme,
        Self::IconTheme,
        Self::CursorTheme,
        Self::Wallpaper,
        Self::ColorScheme,
    ];

    /// Field name in the record file.
    pub fn name(self) -> &'static str {
        match self {
            Self::GtkTheme => "gtk_theme",
            Self::IconTheme => "icon_theme",
            Self::CursorTheme => "cursor_theme",
            Self::Wallpaper => "wallpaper",
            Self::ColorScheme => "color_scheme",
        }
    }

    fn target(self) -> Target {
        match self {
            Self::GtkTheme => Target::Fixed {
                schema: INTERFACE,
                key: "gtk-theme",
            },
            Self::IconTheme => Target::Fixed {
                schema: INTERFACE,
                key: "icon-theme",
            },
            Self::CursorTheme => Target::Fixed {
                schema: INTERFACE,
                key: "cursor-theme",
            },
            Self::Wallpaper => Target::Fixed {
                schema: BACKGROUND,
                key: "picture-uri",
            },
            Self::ColorScheme => Target::TerminalProfile {
                key: "foreground-color",
            },
        }
    }

    /// `(schema, key)` of this setting on the live store.
    pub fn locate(
        self,
        store: &dyn SettingsStore,
    ) -> Result<(Cow<'static, str>, &'static str), StoreError> {
        self.target().resolve(store)
    }

    /// Query the live value, trimmed of surrounding whitespace.
    pub fn read(self, store: &dyn SettingsStore) -> Result<String, StoreError> {
        let (schema, key) = self.locate(store)?;
        store.get(&schema, key).map(|v| v.trim().to_owned())
    }

    pub fn write(self, store: &dyn SettingsStore, value: &str) -> Result<(), StoreError> {
        let (schema, key) = self.locate(store)?;
        store.set(&schema, key, value)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Target {
    fn resolve(
        &self,
        store: &dyn SettingsStore,
    ) -> Result<(Cow<'static, str>, &'static str), StoreError> {
        match *self {
            Self::Fixed { schema, key } => Ok((Cow::Borrowed(schema), key)),
            Self::TerminalProfile { key } => {
                let id = default_profile(store).map_err(|e| match e {
                    StoreError::UnresolvedProfile { .. } => e,
                    other => StoreError::ProfileLookup(Box::new(other)),
                })?;
                Ok((Cow::Owned(profile_schema(&id)), key))
            }
        }
    }
}

/// Identifier of the default gnome-terminal profile.
pub fn default_profile(store: &dyn SettingsStore) -> Result<String, StoreError> {
    let raw = store.get(PROFILES_LIST, "default")?;
    let id = raw.trim().trim_matches('\'');

    // The id becomes part of a schema path.
    if id.is_empty() || id.contains(['/', ':', '\'']) {
        return Err(StoreError::UnresolvedProfile {
            raw: raw.trim().to_owned(),
        });
    }
    Ok(id.to_owned())
}

fn profile_schema(id: &str) -> String {
    format!("{PROFILE_PREFIX}{id}/")
}

/// A setting whose read or write failed.
#[derive(Debug)]
pub struct KeyFailure {
    pub setting: Setting,
    pub error: StoreError,
}

impl fmt::Display for KeyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.setting, self.error)
    }
}
