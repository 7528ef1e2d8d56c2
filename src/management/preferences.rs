use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{config, types::Theme};

/// Client state that outlives a single command.
///
/// `authenticated` is advisory: it lets the client greet a returning user
/// before the status check answers. The backend session decides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub cookies: Vec<String>,
}

pub struct PreferencesManager {
    path: PathBuf,
    preferences: Preferences,
}

impl PreferencesManager {
    pub fn new(path: Option<PathBuf>, preferences: Option<Preferences>) -> Self {
        Self {
            path: path.unwrap_or_else(Self::default_path),
            preferences: preferences.unwrap_or_default(),
        }
    }

    pub async fn load(path: Option<PathBuf>) -> Result<Self, String> {
        let path = path.unwrap_or_else(Self::default_path);
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let preferences: Preferences =
            serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { path, preferences })
    }

    /// Loads the stored preferences, falling back to defaults when the file
    /// is missing or unreadable.
    pub async fn load_or_default(path: Option<PathBuf>) -> Self {
        match Self::load(path.clone()).await {
            Ok(mgr) => mgr,
            Err(_) => Self::new(path, None),
        }
    }

    pub async fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.preferences).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }

    pub fn get(&self) -> &Preferences {
        &self.preferences
    }

    pub fn theme(&self) -> Theme {
        self.preferences.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.preferences.theme = theme;
        self
    }

    pub fn set_authenticated(&mut self, authenticated: bool) -> &mut Self {
        self.preferences.authenticated = authenticated;
        self
    }

    pub fn set_cookies(&mut self, cookies: Vec<String>) -> &mut Self {
        self.preferences.cookies = cookies;
        self
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn default_path() -> PathBuf {
        config::data_dir().join("preferences.json")
    }
}
