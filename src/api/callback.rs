use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::types::CallbackParams;

/// Receives the browser at the end of the backend's OAuth handshake.
///
/// The one-time `code` is only handed over to the waiting command; the
/// exchange itself happens there, against the backend.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<CallbackParams>>>>,
) -> Html<&'static str> {
    let code = params.get("code").filter(|c| !c.is_empty()).cloned();
    let error = params.get("error").cloned();
    let has_code = code.is_some();

    let mut state = shared_state.lock().await;
    if state.is_some() {
        return Html("<h4>Login already received.</h4><p>Close this browser window.</p>");
    }
    *state = Some(CallbackParams { code, error });

    if has_code {
        Html("<h2>Login received.</h2><p>Close this browser window and return to the terminal.</p>")
    } else {
        Html("<h4>No authorization code received.</h4><p>Return to the terminal for details.</p>")
    }
}
