use crate::{error, info, management::PreferencesManager, success, types::Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
    Toggle,
}

/// Prints the stored theme, or stores a new one.
pub async fn theme(choice: Option<ThemeChoice>) {
    let mut prefs = PreferencesManager::load_or_default(None).await;
    let current = prefs.theme();

    let next = match choice {
        None => {
            info!("Current theme: {}", current.as_str());
            return;
        }
        Some(ThemeChoice::Dark) => Theme::Dark,
        Some(ThemeChoice::Light) => Theme::Light,
        Some(ThemeChoice::Toggle) => current.toggled(),
    };

    prefs.set_theme(next);
    if let Err(e) = prefs.persist().await {
        error!("Failed to save theme preference. Err: {}", e);
    }
    success!("Theme set to {}.", next.as_str());
}
