use std::fmt::{ Display, Formatter };
use std::str::FromStr;

use serde::{ Deserialize, Serialize };

use crate::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// The toggle offers the mode you are *not* in.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Light => "🌙 Mode sombre",
            Self::Dark => "☀️ Mode clair",
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme mode: {}", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

impl ThemeState {
    pub fn is_light(&self) -> bool {
        self.mode == ThemeMode::Light
    }

    pub fn root_class(&self) -> &'static str {
        if self.is_light() { "light" } else { "" }
    }

    pub fn label(&self) -> &'static str {
        self.mode.toggle_label()
    }
}

/// Owns the visual mode of one page and its persisted copy.
pub struct ThemeController {
    key: &'static str,
    store: Box<dyn PreferenceStore>,
    state: ThemeState,
}

impl ThemeController {
    pub fn new(key: &'static str, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            key,
            store,
            state: ThemeState::default(),
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn apply_theme(&mut self, mode: ThemeMode) {
        self.state.mode = mode;
        if let Err(e) = self.store.save(self.key, mode.as_str()) {
            log::warn!("Failed to persist theme under {}: {}", self.key, e);
        }
        log::debug!("Applied theme {} ({})", mode, self.key);
    }

    /// Missing, unreadable or unrecognised values all mean dark.
    pub fn init_theme(&mut self) {
        let stored = match self.store.load(self.key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read theme under {}: {}", self.key, e);
                None
            }
        };
        let mode = stored
            .and_then(|value| {
                value
                    .parse::<ThemeMode>()
                    .map_err(|e| log::debug!("Ignoring stored theme: {}", e))
                    .ok()
            })
            .unwrap_or_default();
        self.apply_theme(mode);
    }

    pub fn on_toggle_click(&mut self) {
        let next = self.state.mode.toggled();
        self.apply_theme(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_init_defaults_to_dark_and_persists_it() {
        let store = MemoryStore::new();
        let mut theme = ThemeController::new("theme", Box::new(store.clone()));
        theme.init_theme();

        assert_eq!(theme.state().mode, ThemeMode::Dark);
        assert_eq!(theme.state().label(), "☀️ Mode clair");
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_toggle_flips_and_relabels() {
        let store = MemoryStore::new();
        let mut theme = ThemeController::new("tabac_theme", Box::new(store.clone()));
        theme.init_theme();
        theme.on_toggle_click();

        assert!(theme.state().is_light());
        assert_eq!(theme.state().root_class(), "light");
        assert_eq!(theme.state().label(), "🌙 Mode sombre");
        assert_eq!(store.get("tabac_theme"), Some("light".to_string()));

        theme.on_toggle_click();
        assert_eq!(theme.state().mode, ThemeMode::Dark);
    }

    #[test]
    fn test_garbage_value_falls_back_to_dark() {
        let mut store = MemoryStore::new();
        store.save("home_theme", "sepia").unwrap();
        let mut theme = ThemeController::new("home_theme", Box::new(store.clone()));
        theme.init_theme();

        assert_eq!(theme.state().mode, ThemeMode::Dark);
        assert_eq!(store.get("home_theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    }
}
