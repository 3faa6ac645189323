use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "AWARENESS_DATA_DIR";
const DEFAULT_DATA_DIR: &str = ".awareness";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment. On wasm there is
    /// no environment, so the defaults are used as-is.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let data_dir = std::env::var(DATA_DIR_VAR).unwrap_or_else(|_| {
                log::warn!("{} not set, using {}", DATA_DIR_VAR, DEFAULT_DATA_DIR);
                DEFAULT_DATA_DIR.to_string()
            });
            log::info!("Using data directory: {}", data_dir);
            Self {
                data_dir: PathBuf::from(data_dir),
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }
}
