use axum::{Extension, Router, routing::get};
use std::{
    net::SocketAddr,
    str::FromStr,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{Res, api, types::CallbackParams};

pub fn router(state: Arc<Mutex<Option<CallbackParams>>>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .layer(Extension(state))
}

pub async fn bind(addr: &str) -> Res<TcpListener> {
    let addr = SocketAddr::from_str(addr)?;
    Ok(TcpListener::bind(&addr).await?)
}

pub async fn start_api_server(
    listener: TcpListener,
    state: Arc<Mutex<Option<CallbackParams>>>,
) -> Res<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Polls the shared state until the callback handler stored the redirect
/// parameters, or `max_wait` has passed.
pub async fn wait_for_callback(
    shared_state: Arc<Mutex<Option<CallbackParams>>>,
    max_wait: Duration,
) -> Option<CallbackParams> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(params) = lock.as_ref() {
            return Some(params.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    None
}
