use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::types::CallbackParams;

/// Liveness of the login listener and whether the redirect already came in.
pub async fn health(
    Extension(shared_state): Extension<Arc<Mutex<Option<CallbackParams>>>>,
) -> Json<Value> {
    let received = shared_state.lock().await.is_some();
    Json(json!({
        "status": "ok",
        "service": "spolib-login-listener",
        "callbackReceived": received,
        "version": env!("CARGO_PKG_VERSION")
    }))
}
