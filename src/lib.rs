//! Spotify Library Manager CLI Library
//!
//! This library provides a terminal client for the spolib backend, which
//! manages a user's Spotify library. It covers artist and track statistics,
//! deleting tracks by artist or by track-count range, clearing playlists and
//! the session-based login flow that the backend drives.
//!
//! # Modules
//!
//! - `aggregate` - Totals, top-N, filtering, sorting and pagination of artist summaries
//! - `api` - HTTP endpoints for the local OAuth callback listener
//! - `backend` - HTTP client for the backend API and central error interception
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - State holders: signals, the summary store, session and preferences
//! - `server` - Local HTTP server receiving the OAuth redirect
//! - `types` - Data structures and type definitions
//! - `ui` - Toasts, prompts, loading indicator and navigation
//! - `utils` - Range validation and rendering helpers
//! - `workflow` - Deletion, playlist and authentication workflows
//!
//! # Example
//!
//! ```
//! use spolib::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> spolib::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod backend;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod types;
pub mod ui;
pub mod utils;
pub mod workflow;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Example
///
/// ```
/// use spolib::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Found {} artists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Deleted {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Used for unrecoverable errors where the command cannot continue. Code
/// after the macro does not execute.
///
/// # Example
///
/// ```
/// error!("Failed to load preferences: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Preferences file not found, using defaults");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a recoverable error with a red exclamation mark.
///
/// Same bullet as [`error!`] but the program keeps running, so callers can
/// report a failed action and return normally.
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
  })
}
