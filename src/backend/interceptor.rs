use crate::{
    backend::{ApiError, Endpoint},
    management::Session,
    ui::{Route, Toast, Ui},
};

pub const CONNECTION_MESSAGE: &str = "Unable to reach the server. Check your connection.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong on the server. Please try again later.";

/// Announces network, auth and server failures of `endpoint` and hands the
/// result back unchanged so the caller can still stop its spinner.
///
/// A 401 from anything but the status check ends the local session and
/// sends the user to the login view, once per failed request.
pub fn intercept<T, U: Ui>(
    endpoint: Endpoint,
    result: Result<T, ApiError>,
    session: &Session,
    ui: &U,
) -> Result<T, ApiError> {
    if let Err(err) = &result {
        match err {
            ApiError::Network(_) => ui.notify(Toast::error("Connection error", CONNECTION_MESSAGE)),
            ApiError::Unauthorized if !endpoint.is_status_check() => {
                session.force_logout();
                ui.notify(Toast::warning("Session expired", SESSION_EXPIRED_MESSAGE));
                ui.navigate(Route::Login);
            }
            ApiError::Server(_) => ui.notify(Toast::error("Server error", SERVER_ERROR_MESSAGE)),
            _ => {}
        }
    }

    result
}
