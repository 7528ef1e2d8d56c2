//! Configuration management for the Spotify Library Manager.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default so the client works
//! against a locally running backend without any setup.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_CALLBACK_ADDRESS: &str = "127.0.0.1:4200";
pub const DEFAULT_CALLBACK_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns the application's directory inside the platform data directory.
///
/// - Linux: `~/.local/share/spolib`
/// - macOS: `~/Library/Application Support/spolib`
/// - Windows: `%LOCALAPPDATA%/spolib`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spolib");
    path
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory if it doesn't exist. A missing `.env` file is not an
/// error since every setting has a default; a file that exists but cannot be
/// parsed is.
///
/// # Errors
///
/// This function will return an error if:
/// - The data directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Returns the base URL of the backend API, without a trailing slash.
///
/// Reads `SPOLIB_API_URL`, e.g. `https://library.example.com/api`.
pub fn api_url() -> String {
    env::var("SPOLIB_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Returns the address the local OAuth callback listener binds to.
///
/// Reads `SPOLIB_CALLBACK_ADDRESS`. The backend must be configured to send
/// the browser back to `http://<address>/callback` after login.
pub fn callback_addr() -> String {
    env::var("SPOLIB_CALLBACK_ADDRESS").unwrap_or_else(|_| DEFAULT_CALLBACK_ADDRESS.to_string())
}

/// Returns how long `auth login` waits for the browser redirect.
pub fn callback_timeout() -> Duration {
    let secs = env::var("SPOLIB_CALLBACK_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_CALLBACK_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Returns the default dashboard page size.
///
/// Reads `SPOLIB_PAGE_SIZE`; zero or unparsable values fall back to the default.
pub fn page_size() -> usize {
    env::var("SPOLIB_PAGE_SIZE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
