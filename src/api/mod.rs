//! # API Module
//!
//! HTTP endpoints of the short-lived listener that `spolib auth login` starts
//! while the user signs in through the browser.
//!
//! ## Endpoints
//!
//! - [`callback`] - Target of the backend's post-login redirect. Captures the
//!   one-time `code` query parameter (or its absence) for the login command.
//! - [`health`] - Returns status, version and whether the callback already
//!   arrived, handy for checking that the listener is up.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spolib::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
