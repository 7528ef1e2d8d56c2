use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    cli::Context,
    config, error, failure, info,
    management::AuthState,
    server, success,
    types::CallbackParams,
    ui::{Route, Ui},
    warning,
};

/// Signs in through the browser.
///
/// Starts the local callback listener, opens the backend's login page and
/// waits for the redirect. The code it carries (if any) is handed to the
/// callback workflow, which exchanges it or falls back to a status check.
pub async fn login() {
    let mut ctx = Context::load(false).await;

    if ctx.prefs.get().authenticated {
        info!("Checking existing session...");
        let state = ctx.auth().check_status().await;
        if let AuthState::Authenticated(user) = state {
            match user {
                Some(user) => success!("Already logged in as {}.", user.label()),
                None => success!("Already logged in."),
            }
            ctx.save().await;
            return;
        }
    }

    let listener = match server::bind(&config::callback_addr()).await {
        Ok(listener) => listener,
        Err(e) => error!(
            "Cannot listen on {} for the login callback. Err: {}",
            config::callback_addr(),
            e
        ),
    };

    let shared_state: Arc<Mutex<Option<CallbackParams>>> = Arc::new(Mutex::new(None));
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = server::start_api_server(listener, server_state).await {
            warning!("Callback listener stopped. Err: {}", e);
        }
    });

    let login_url = ctx.client.login_url();
    if webbrowser::open(&login_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            login_url
        )
    }
    info!("Waiting for the login to finish in your browser...");

    match server::wait_for_callback(shared_state, config::callback_timeout()).await {
        Some(params) => {
            if let Some(reason) = &params.error {
                warning!("The login page reported: {}", reason);
            }
            ctx.auth().handle_callback(params.code.as_deref()).await;
        }
        None => {
            failure!("Login timed out.");
            ctx.session.mark_unauthenticated();
            ctx.ui.navigate(Route::Login);
        }
    }

    ctx.save().await;
}

pub async fn logout() {
    let mut ctx = Context::load(false).await;
    ctx.auth().logout().await;
    ctx.save().await;
}

pub async fn status() {
    let mut ctx = Context::load(false).await;

    if ctx.prefs.get().authenticated {
        info!("Last known state: logged in. Checking with the server...");
    }

    let state = ctx.auth().check_status().await;
    match state {
        AuthState::Authenticated(Some(user)) => success!("Logged in as {}.", user.label()),
        AuthState::Authenticated(None) => success!("Logged in."),
        AuthState::Unauthenticated | AuthState::Unknown => {
            warning!("Not logged in.");
            ctx.ui.navigate(Route::Login);
        }
    }

    ctx.save().await;
}
