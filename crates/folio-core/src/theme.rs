//! Light/dark theme preference.
//!
//! The preference is the single source of truth for styling: it is
//! mirrored into storage under [`keys::THEME`] and into the `data-theme`
//! attribute of the document root, which the stylesheet selects on.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::storage::{keys, read_or_none, write_or_warn, KeyValueStore};

/// Attribute on the document root carrying the active theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Visual theme preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// The other preference
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(FolioError::InvalidTheme(other.to_string())),
        }
    }
}

/// The element whose attributes the stylesheet reads.
pub trait DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str);
}

impl<D: DocumentRoot + ?Sized> DocumentRoot for &D {
    fn set_attribute(&self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }
}

/// Current theme, owned by the view synchronizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    preference: ThemePreference,
}

impl ThemeState {
    /// Read the stored preference, defaulting to dark.
    ///
    /// Unknown stored values and unreachable storage both yield the default.
    pub fn initialize(store: &impl KeyValueStore) -> Self {
        let preference = read_or_none(store, keys::THEME)
            .and_then(|raw| match raw.parse::<ThemePreference>() {
                Ok(pref) => Some(pref),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring stored theme");
                    None
                }
            })
            .unwrap_or_default();
        Self { preference }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Persist and publish a preference.
    pub fn apply(
        &mut self,
        preference: ThemePreference,
        store: &impl KeyValueStore,
        root: &impl DocumentRoot,
    ) {
        self.preference = preference;
        write_or_warn(store, keys::THEME, preference.as_str());
        root.set_attribute(THEME_ATTRIBUTE, preference.as_str());
        tracing::debug!(theme = %preference, "Applied theme");
    }

    /// Flip between dark and light, returning the new preference.
    pub fn toggle(
        &mut self,
        store: &impl KeyValueStore,
        root: &impl DocumentRoot,
    ) -> ThemePreference {
        let next = self.preference.toggled();
        self.apply(next, store, root);
        next
    }
}

/// Records the last value written to each attribute.
///
/// Stands in for the document root on native hosts.
#[derive(Clone, Debug, Default)]
pub struct RecordingRoot {
    attributes: Arc<RwLock<BTreeMap<String, String>>>,
}

impl RecordingRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.read().get(name).cloned()
    }
}

impl DocumentRoot for RecordingRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .write()
            .insert(name.to_string(), value.to_string());
    }
}
