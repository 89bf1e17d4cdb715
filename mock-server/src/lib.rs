//! Stand-in for the public REST surface of a Mastodon server.
//!
//! Serves fixed JSON payloads on every path the client knows about, so client
//! tests can run over real HTTP without touching the network. `MockOptions`
//! injects latency or a forced status code on every API route.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::{Request, State},
    http::{header, HeaderName},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use axum::http::StatusCode;

/// Canned response bodies, one per endpoint.
pub mod fixtures {
    pub const CUSTOM_EMOJIS: &str = include_str!("../fixtures/custom_emojis.json");
    pub const INSTANCE: &str = include_str!("../fixtures/instance.json");
    pub const INSTANCE_V1: &str = include_str!("../fixtures/instance_v1.json");
    pub const PEERS: &str = include_str!("../fixtures/peers.json");
    pub const ACTIVITY: &str = include_str!("../fixtures/activity.json");
    pub const RULES: &str = include_str!("../fixtures/rules.json");
    pub const DOMAIN_BLOCK: &str = include_str!("../fixtures/domain_block.json");
    pub const TRENDS_LINKS: &str = include_str!("../fixtures/trends_links.json");
    pub const TRENDS_TAGS: &str = include_str!("../fixtures/trends_tags.json");
}

/// Path listing every User-Agent seen on the API routes, oldest first.
pub const USER_AGENTS_PATH: &str = "/__mock/user-agents";

#[derive(Debug, Clone, Default)]
pub struct MockOptions {
    /// Sleep this long before answering.
    pub delay: Option<Duration>,
    /// Answer every API route with this status instead of its fixture.
    pub forced_status: Option<StatusCode>,
}

#[derive(Clone)]
struct AppState {
    options: MockOptions,
    user_agents: Arc<RwLock<Vec<String>>>,
}

pub fn app() -> Router {
    app_with(MockOptions::default())
}

pub fn app_with(options: MockOptions) -> Router {
    let state = AppState {
        options,
        user_agents: Arc::default(),
    };
    Router::new()
        .route("/api/v1/custom_emojis", get(|| async { fixture(fixtures::CUSTOM_EMOJIS) }))
        .route("/api/v2/instance", get(|| async { fixture(fixtures::INSTANCE) }))
        .route("/api/v1/instance", get(|| async { fixture(fixtures::INSTANCE_V1) }))
        .route("/api/v1/instance/peers", get(|| async { fixture(fixtures::PEERS) }))
        .route("/api/v1/instance/activity", get(|| async { fixture(fixtures::ACTIVITY) }))
        .route("/api/v1/instance/rules", get(|| async { fixture(fixtures::RULES) }))
        .route("/api/v1/instance/domain_block", get(|| async { fixture(fixtures::DOMAIN_BLOCK) }))
        .route("/api/v1/trends/links", get(|| async { fixture(fixtures::TRENDS_LINKS) }))
        .route("/api/v1/trends/tags", get(|| async { fixture(fixtures::TRENDS_TAGS) }))
        .route_layer(middleware::from_fn_with_state(state.clone(), gate))
        .route(USER_AGENTS_PATH, get(user_agents))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, options: MockOptions) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(options)).await
}

fn fixture(body: &'static str) -> ([(HeaderName, &'static str); 1], &'static str) {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    if let Some(agent) = agent {
        state.user_agents.write().await.push(agent);
    }

    if let Some(delay) = state.options.delay {
        tokio::time::sleep(delay).await;
    }

    if let Some(status) = state.options.forced_status {
        let reason = status.canonical_reason().unwrap_or("error");
        return (status, Json(serde_json::json!({ "error": reason }))).into_response();
    }

    next.run(request).await
}

async fn user_agents(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.user_agents.read().await.clone())
}
