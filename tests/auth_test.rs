mod common;

use common::{FakeApi, RecordingUi, auth_response};
use spolib::backend::ApiError;
use spolib::management::{AuthState, Navigation, Session};
use spolib::types::AuthResponse;
use spolib::ui::{Route, ToastLevel};
use spolib::workflow::{AuthWorkflow, LOGIN_FAILED_MESSAGE};

#[tokio::test]
async fn test_callback_with_code_logs_in() {
    let api = FakeApi::new().with_exchange(Ok(auth_response(true, Some("Ada"))));
    let ui = RecordingUi::answering(true);
    let session = Session::new();

    let route = AuthWorkflow::new(&api, &ui, &session)
        .handle_callback(Some("abc123"))
        .await;

    assert_eq!(route, Route::Dashboard);
    assert_eq!(api.calls(), vec!["exchange abc123".to_string()]);
    assert_eq!(ui.navigations(), vec![Route::Dashboard]);
    assert!(session.is_authenticated());
    assert!(session.advisory_flag());

    let success = ui.toasts_of(ToastLevel::Success);
    assert_eq!(success.len(), 1);
    assert_eq!(success[0].message, "Welcome, Ada!");
}

#[tokio::test]
async fn test_callback_prefers_server_message() {
    let response = AuthResponse {
        message: Some("Authentication successful".to_string()),
        ..auth_response(true, Some("Ada"))
    };
    let api = FakeApi::new().with_exchange(Ok(response));
    let ui = RecordingUi::answering(true);
    let session = Session::new();

    AuthWorkflow::new(&api, &ui, &session)
        .handle_callback(Some("abc123"))
        .await;

    assert_eq!(
        ui.toasts_of(ToastLevel::Success)[0].message,
        "Authentication successful"
    );
}

#[tokio::test]
async fn test_rejected_code_returns_to_login() {
    let response = AuthResponse {
        message: Some("Invalid authorization code".to_string()),
        ..auth_response(false, None)
    };
    let api = FakeApi::new().with_exchange(Ok(response));
    let ui = RecordingUi::answering(true);
    let session = Session::new();

    let route = AuthWorkflow::new(&api, &ui, &session)
        .handle_callback(Some("bad"))
        .await;

    assert_eq!(route, Route::Login);
    assert_eq!(ui.navigations(), vec![Route::Login]);
    assert_eq!(session.state(), AuthState::Unauthenticated);

    let errors = ui.toasts_of(ToastLevel::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Invalid authorization code");
}

#[tokio::test]
async fn test_failed_exchange_without_message_uses_fallback() {
    let api = FakeApi::new().with_exchange(Err(ApiError::Http {
        status: 400,
        message: None,
    }));
    let ui = RecordingUi::answering(true);
    let session = Session::new();

    AuthWorkflow::new(&api, &ui, &session)
        .handle_callback(Some("abc123"))
        .await;

    assert_eq!(ui.toasts_of(ToastLevel::Error)[0].message, LOGIN_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_unauthorized_exchange_navigates_once() {
    let api = FakeApi::new().with_exchange(Err(ApiError::Unauthorized));
    let ui = RecordingUi::answering(true);
    let session = Session::new();

    let route = AuthWorkflow::new(&api, &ui, &session)
        .handle_callback(Some("abc123"))
        .await;

    assert_eq!(route, Route::Login);
    assert_eq!(ui.navigations(), vec![Route::Login]);
    // only the session-expired warning, no second error toast
    assert_eq!(ui.toasts().len(), 1);
    assert_eq!(ui.toasts()[0].title, "Session expired");
}

#[tokio::test]
async fn test_callback_without_code_checks_status() {
    let api = FakeApi::new().with_status(Ok(auth_response(true, Some("Ada"))));
    let ui = RecordingUi::answering(true);
    let session = Session::new();

    let route = AuthWorkflow::new(&api, &ui, &session)
        .handle_callback(None)
        .await;

    assert_eq!(route, Route::Dashboard);
    assert_eq!(api.calls(), vec!["status".to_string()]);
    assert_eq!(session.user().map(|u| u.id), Some("Ada_id".to_string()));
}

#[tokio::test]
async fn test_status_unauthorized_is_not_a_session_expiry() {
    let api = FakeApi::new().with_status(Err(ApiError::Unauthorized));
    let ui = RecordingUi::answering(true);
    let session = Session::new();

    let state = AuthWorkflow::new(&api, &ui, &session).check_status().await;

    assert_eq!(state, AuthState::Unauthenticated);
    assert!(ui.navigations().is_empty());
    assert!(ui.toasts().is_empty());
}

#[tokio::test]
async fn test_status_flag_overrides_success() {
    let response = AuthResponse {
        authenticated: Some(false),
        ..auth_response(true, None)
    };
    let api = FakeApi::new().with_status(Ok(response));
    let ui = RecordingUi::answering(true);
    let session = Session::new();

    let state = AuthWorkflow::new(&api, &ui, &session).check_status().await;
    assert_eq!(state, AuthState::Unauthenticated);
}

#[tokio::test]
async fn test_ensure_authenticated_redirects() {
    let api = FakeApi::new().with_status(Ok(auth_response(false, None)));
    let ui = RecordingUi::answering(true);
    let session = Session::new();

    let navigation = AuthWorkflow::new(&api, &ui, &session)
        .ensure_authenticated()
        .await;

    assert_eq!(navigation, Navigation::Redirect(Route::Login));
    assert_eq!(ui.navigations(), vec![Route::Login]);
    assert_eq!(ui.toasts_of(ToastLevel::Warning).len(), 1);
}

#[tokio::test]
async fn test_ensure_authenticated_skips_check_when_known() {
    let api = FakeApi::new();
    let ui = RecordingUi::answering(true);
    let session = Session::new();
    session.mark_authenticated(None);

    let navigation = AuthWorkflow::new(&api, &ui, &session)
        .ensure_authenticated()
        .await;

    assert_eq!(navigation, Navigation::Proceed);
    assert!(api.calls().is_empty());
    assert!(ui.navigations().is_empty());
}

#[tokio::test]
async fn test_logout_clears_session_even_on_failure() {
    let api = FakeApi::new().with_logout(Err(ApiError::Server(503)));
    let ui = RecordingUi::answering(true);
    let session = Session::new();
    session.mark_authenticated(None);

    AuthWorkflow::new(&api, &ui, &session).logout().await;

    assert_eq!(api.calls(), vec!["logout".to_string()]);
    assert_eq!(session.state(), AuthState::Unauthenticated);
    assert!(!session.advisory_flag());
    assert_eq!(ui.navigations(), vec![Route::Login]);
    assert_eq!(ui.toasts_of(ToastLevel::Info).len(), 1);
}

#[tokio::test]
async fn test_logout_network_failure_is_announced() {
    let api = FakeApi::new().with_logout(Err(ApiError::Network("connection refused".to_string())));
    let ui = RecordingUi::answering(true);
    let session = Session::new();
    session.mark_authenticated(None);

    AuthWorkflow::new(&api, &ui, &session).logout().await;

    let errors = ui.toasts_of(ToastLevel::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].title, "Connection error");
    assert_eq!(ui.navigations(), vec![Route::Login]);
    assert_eq!(session.state(), AuthState::Unauthenticated);
}

#[tokio::test]
async fn test_logout_with_expired_session_navigates_once() {
    let api = FakeApi::new().with_logout(Err(ApiError::Unauthorized));
    let ui = RecordingUi::answering(true);
    let session = Session::new();
    session.mark_authenticated(None);

    AuthWorkflow::new(&api, &ui, &session).logout().await;

    assert_eq!(ui.navigations(), vec![Route::Login]);
    assert_eq!(session.state(), AuthState::Unauthenticated);
}
