//! Persistent settings between provisioning runs.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::rigup_path;

/// Settings that survive between runs.
///
/// Load never fails: a missing or corrupt file falls back to defaults.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Where large downloads land; defaults to the XDG download dir.
    pub download_dir: Option<PathBuf>,
    /// Last Windows image link the user entered, offered as the next default.
    pub image_url: Option<String>,
}

impl AppConfig {
    fn get_path() -> PathBuf {
        rigup_path!("config.json")
    }

    pub fn load() -> Self {
        let path = Self::get_path();
        if path.exists() {
            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(config) = serde_json::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        let path = Self::get_path();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, json);
        }
    }
}
