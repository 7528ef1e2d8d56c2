//! # Presentation seam
//!
//! Workflows never print, prompt or draw spinners themselves. They talk to a
//! [`Ui`], which the CLI backs with [`ConsoleUi`] (colored bullets, a
//! `dialoguer` confirmation and an `indicatif` spinner) and tests back with a
//! recorder.

use std::{sync::Mutex, time::Duration};

use colored::Colorize;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{failure, info, success, warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient, non-blocking message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn new(level: ToastLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, title, message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Login,
}

pub trait Ui {
    fn notify(&self, toast: Toast);

    /// Asks the user to confirm a destructive action. `false` means cancel.
    fn confirm(&self, prompt: &str) -> bool;

    fn start_loading(&self, message: &str);

    fn stop_loading(&self);

    fn navigate(&self, route: Route);
}

pub struct ConsoleUi {
    assume_yes: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleUi {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            spinner: Mutex::new(None),
        }
    }
}

impl Ui for ConsoleUi {
    fn notify(&self, toast: Toast) {
        let title = toast.title.bold();
        match toast.level {
            ToastLevel::Success => success!("{}: {}", title, toast.message),
            ToastLevel::Error => failure!("{}: {}", title, toast.message),
            ToastLevel::Warning => warning!("{}: {}", title, toast.message),
            ToastLevel::Info => info!("{}: {}", title, toast.message),
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            info!("{} yes", prompt);
            return true;
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn start_loading(&self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }

        let mut slot = self.spinner.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(previous) = slot.replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn stop_loading(&self) {
        let mut slot = self.spinner.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(pb) = slot.take() {
            pb.finish_and_clear();
        }
    }

    fn navigate(&self, route: Route) {
        match route {
            Route::Dashboard => info!("Open your library overview with `spolib dashboard`."),
            Route::Login => info!("Sign in with `spolib auth login`."),
        }
    }
}
