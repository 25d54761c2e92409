//! HTTP server for the contact book.
//!
//! Builds the axum router over the contact service, wires the session and
//! tracing middleware, and runs the listener until shutdown.

pub mod error;
pub mod handlers;
pub mod views;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, Request};
use axum::http::Method;
use axum::routing::get;
use axum::{middleware, Router, ServiceExt};
use tokio::task::JoinHandle;
use tower::util::{MapRequest, MapRequestLayer};
use tower::Layer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::flash::FlashStore;
use crate::services::ContactService;
use crate::session::session_middleware;

pub use error::AppError;

/// Query parameter HTML forms use to ask for PUT or DELETE.
pub const METHOD_OVERRIDE_PARAM: &str = "_method";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactService>,
    pub flash: FlashStore,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>, flash: FlashStore) -> Self {
        Self { contacts, flash }
    }
}

/// The router wrapped in method-override rewriting.
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Build the full application service.
pub fn build_app(state: AppState) -> App {
    let router = Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route(
            "/contact",
            get(handlers::list_contacts)
                .post(handlers::create_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route("/contact/add", get(handlers::add_form))
        .route("/contact/edit/:name", get(handlers::edit_form))
        .route("/contact/:name", get(handlers::show_contact))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(session_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Runs before routing so the rewritten method picks the handler.
    MapRequestLayer::new(override_method as fn(Request) -> Request).layer(router)
}

/// Turn `POST ...?_method=PUT|DELETE` into the requested method.
pub fn override_method(mut request: Request) -> Request {
    if request.method() != Method::POST {
        return request;
    }

    let requested = Query::<HashMap<String, String>>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(mut params)| params.remove(METHOD_OVERRIDE_PARAM))
        .map(|value| value.to_ascii_uppercase());

    let method = match requested.as_deref() {
        Some("PUT") => Method::PUT,
        Some("DELETE") => Method::DELETE,
        _ => return request,
    };

    debug!(method = %method, path = %request.uri().path(), "Method override");
    *request.method_mut() = method;
    request
}

/// Periodically purge notification queues nobody read.
pub fn spawn_flash_sweeper(flash: FlashStore) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(flash.ttl());
        loop {
            ticker.tick().await;
            flash.cleanup_expired();
        }
    })
}

/// Serve `app` on `addr` until Ctrl-C.
pub async fn run_server(app: App, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Contact book listening at http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
