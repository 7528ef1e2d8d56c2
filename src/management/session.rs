use crate::{
    management::{Preferences, Signal, Subscription},
    types::User,
    ui::Route,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unknown,
    Authenticated(Option<User>),
    Unauthenticated,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

/// What a protected command should do given the current auth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(Route),
}

/// Route guard for protected views. Anything short of a confirmed session
/// is sent to the login view.
pub fn guard(state: &AuthState) -> Navigation {
    match state {
        AuthState::Authenticated(_) => Navigation::Proceed,
        AuthState::Unknown | AuthState::Unauthenticated => Navigation::Redirect(Route::Login),
    }
}

#[derive(Clone)]
pub struct Session {
    state: Signal<AuthState>,
    restored_flag: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: Signal::new(AuthState::Unknown),
            restored_flag: false,
        }
    }

    /// Starts in `Unknown` and remembers the persisted flag until the
    /// backend has answered.
    pub fn restore(preferences: &Preferences) -> Self {
        Self {
            state: Signal::new(AuthState::Unknown),
            restored_flag: preferences.authenticated,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    pub fn user(&self) -> Option<User> {
        match self.state.get() {
            AuthState::Authenticated(user) => user,
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    /// The value to persist for the next start: the confirmed state when
    /// known, the restored flag otherwise.
    pub fn advisory_flag(&self) -> bool {
        match self.state.get() {
            AuthState::Unknown => self.restored_flag,
            AuthState::Authenticated(_) => true,
            AuthState::Unauthenticated => false,
        }
    }

    pub fn mark_authenticated(&self, user: Option<User>) {
        self.state.set(AuthState::Authenticated(user));
    }

    pub fn mark_unauthenticated(&self) {
        self.state.set(AuthState::Unauthenticated);
    }

    /// Drops the local session after the backend rejected it.
    pub fn force_logout(&self) {
        self.mark_unauthenticated();
    }

    pub fn guard(&self) -> Navigation {
        self.state.with(guard)
    }

    pub fn subscribe(&self, listener: impl Fn(&AuthState) + Send + Sync + 'static) -> Subscription {
        self.state.subscribe(listener)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
