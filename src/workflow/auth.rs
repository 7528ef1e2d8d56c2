use crate::{
    backend::{ApiError, Endpoint, LibraryApi, intercept},
    management::{AuthState, Navigation, Session},
    types::{AuthResponse, User},
    ui::{Route, Toast, Ui},
};

pub const LOGIN_FAILED_MESSAGE: &str = "Authentication failed. Please try again.";

pub struct AuthWorkflow<'a, A: LibraryApi, U: Ui> {
    api: &'a A,
    ui: &'a U,
    session: &'a Session,
}

impl<'a, A: LibraryApi, U: Ui> AuthWorkflow<'a, A, U> {
    pub fn new(api: &'a A, ui: &'a U, session: &'a Session) -> Self {
        Self { api, ui, session }
    }

    /// Asks the backend whether the session is alive and records the answer.
    /// Any failure counts as unauthenticated.
    pub async fn check_status(&self) -> AuthState {
        let _ = self.fetch_status().await;
        self.session.state()
    }

    /// Resolves an unknown state with a status check, then applies the guard.
    /// A redirect is also shown to the user.
    pub async fn ensure_authenticated(&self) -> Navigation {
        if self.session.state() == AuthState::Unknown {
            self.check_status().await;
        }

        let navigation = self.session.guard();
        if let Navigation::Redirect(route) = navigation {
            self.ui.notify(Toast::warning(
                "Not logged in",
                "You need to log in before using this command.",
            ));
            self.ui.navigate(route);
        }
        navigation
    }

    /// Completes the browser login. With a code the code is exchanged for a
    /// session; without one the existing session is checked instead. Either
    /// way the call ends in exactly one navigation, which is also returned.
    pub async fn handle_callback(&self, code: Option<&str>) -> Route {
        let result = match code {
            Some(code) => {
                let exchanged = intercept(
                    Endpoint::AuthCallback,
                    self.api.exchange_code(code).await,
                    self.session,
                    self.ui,
                );
                match exchanged {
                    Ok(response) if response.success => Ok(response),
                    Ok(response) => Err(ApiError::Business(response.message)),
                    Err(err) => Err(err),
                }
            }
            None => self.fetch_status().await,
        };

        match result {
            Ok(response) => {
                let user = response.user.clone();
                self.session.mark_authenticated(user.clone());
                self.ui.notify(Toast::success("Logged in", welcome(&response, user.as_ref())));
                self.ui.navigate(Route::Dashboard);
                Route::Dashboard
            }
            Err(err) => {
                self.session.mark_unauthenticated();
                if !err.is_reported_centrally() {
                    self.ui.notify(Toast::error(
                        "Login failed",
                        err.server_message().unwrap_or(LOGIN_FAILED_MESSAGE),
                    ));
                }
                // the interceptor already redirected on a 401
                if err != ApiError::Unauthorized {
                    self.ui.navigate(Route::Login);
                }
                Route::Login
            }
        }
    }

    /// Ends the session. Local state is cleared and the user lands on the
    /// login view whatever the backend answers.
    pub async fn logout(&self) {
        let result = intercept(
            Endpoint::Logout,
            self.api.logout().await,
            self.session,
            self.ui,
        );
        self.session.mark_unauthenticated();
        self.ui.notify(Toast::info("Logged out", "You have been logged out."));
        // the interceptor already redirected on a 401
        if !matches!(result, Err(ApiError::Unauthorized)) {
            self.ui.navigate(Route::Login);
        }
    }

    /// Status check with the 401 exemption; a negative answer is an `Err`
    /// so the callback can share the failure branch.
    async fn fetch_status(&self) -> Result<AuthResponse, ApiError> {
        let result = intercept(
            Endpoint::AuthStatus,
            self.api.auth_status().await,
            self.session,
            self.ui,
        );

        match result {
            Ok(response) if response.is_authenticated() => {
                self.session.mark_authenticated(response.user.clone());
                Ok(response)
            }
            Ok(response) => {
                self.session.mark_unauthenticated();
                Err(ApiError::Business(response.message))
            }
            Err(err) => {
                self.session.mark_unauthenticated();
                Err(match err {
                    // not a session expiry here, just "not logged in"
                    ApiError::Unauthorized => ApiError::Business(None),
                    other => other,
                })
            }
        }
    }
}

fn welcome(response: &AuthResponse, user: Option<&User>) -> String {
    if let Some(message) = response.message.as_deref().filter(|m| !m.trim().is_empty()) {
        return message.to_string();
    }
    match user {
        Some(user) => format!("Welcome, {}!", user.label()),
        None => "You are now logged in.".to_string(),
    }
}
