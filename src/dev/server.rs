//! Development server setup and request dispatch.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all dispatch handler
//! - Wire up middleware (tracing, request timeout)
//! - Forward /api traffic to the backend target (cross-origin transparency)
//! - Answer route-table resolutions for application paths
//!
//! # Design Decisions
//! - Requests are forwarded verbatim apart from origin/request-id headers;
//!   transport failures surface as 502, never retried here
//! - Route misses answer an explicit 404, mirroring the table's no-match

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::uri::Scheme,
    http::{header, HeaderValue, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{DevServerConfig, ProxyRuleConfig};
use crate::routing::RouteTable;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub client: Client<HttpConnector, Body>,
    pub proxy: ProxyRuleConfig,
}

/// Local development server: API proxy plus route resolution.
pub struct DevServer {
    router: Router,
}

impl DevServer {
    /// Create a new dev server with the given configuration and route table.
    pub fn new(config: DevServerConfig, table: RouteTable) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let state = AppState {
            table: Arc::new(table),
            client,
            proxy: config.proxy.clone(),
        };

        let router = Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_millis(
                config.request_timeout_ms,
            )))
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Dev server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Dev server stopped");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_router(self) -> Router {
        self.router
    }
}

/// Catch-all handler: proxy API traffic, resolve everything else.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();

    if path.starts_with(&state.proxy.path_prefix) {
        forward(&state, request).await
    } else {
        resolve_view(&state.table, &path)
    }
}

/// Forward a request to the configured backend target.
async fn forward(state: &AppState, request: Request<Body>) -> Response {
    let target = match Uri::from_str(&state.proxy.target) {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(target = %state.proxy.target, error = %e, "Invalid proxy target");
            return (StatusCode::BAD_GATEWAY, "Invalid proxy target").into_response();
        }
    };
    let authority = match target.authority() {
        Some(authority) => authority.clone(),
        None => {
            tracing::error!(target = %state.proxy.target, "Proxy target has no authority");
            return (StatusCode::BAD_GATEWAY, "Invalid proxy target").into_response();
        }
    };

    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let (parts, body) = request.into_parts();

    tracing::debug!(
        request_id = %request_id,
        method = %parts.method,
        path = %parts.uri.path(),
        target = %authority,
        "Proxying request"
    );

    // URI rewrite: same path and query, backend authority.
    let mut uri_parts = parts.uri.clone().into_parts();
    uri_parts.scheme = Some(target.scheme().cloned().unwrap_or(Scheme::HTTP));
    uri_parts.authority = Some(authority.clone());
    let uri = match Uri::from_parts(uri_parts) {
        Ok(uri) => uri,
        Err(_) => parts.uri.clone(),
    };

    let mut forwarded = Request::builder()
        .method(parts.method.clone())
        .version(parts.version)
        .uri(uri);

    if let Some(headers) = forwarded.headers_mut() {
        for (key, value) in parts.headers.iter() {
            headers.insert(key.clone(), value.clone());
        }
        if state.proxy.change_origin {
            if let Ok(host) = HeaderValue::from_str(authority.as_str()) {
                headers.insert(header::HOST, host);
            }
        }
        if let Ok(id) = HeaderValue::from_str(&request_id) {
            headers.insert("x-request-id", id);
        }
    }

    let forwarded = match forwarded.body(body) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Failed to build upstream request");
            return (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response();
        }
    };

    match state.client.request(forwarded).await {
        Ok(response) => {
            let (parts, body) = response.into_parts();
            Response::from_parts(parts, Body::new(body)).into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Upstream error");
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}

/// Answer an application path with its resolved view descriptor.
fn resolve_view(table: &RouteTable, path: &str) -> Response {
    match table.resolve(path) {
        Some(route) => Json(route).into_response(),
        None => {
            tracing::debug!(path = %path, "No route matched");
            (StatusCode::NOT_FOUND, "No matching route found").into_response()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DevServerConfig;
    use crate::routing::{goals_routes, RouteTable};
    use axum::routing::get;
    use serde_json::{json, Value};

    async fn spawn_dev_server(config: DevServerConfig) -> String {
        let table = RouteTable::new(goals_routes()).unwrap();
        let router = DevServer::new(config, table).into_router();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn spawn_upstream() -> String {
        // Echoes the request's Host and request-id headers back so the
        // forwarding rewrites are observable.
        let app = Router::new().route(
            "/api/echo",
            get(|request: Request<Body>| async move {
                let host = request
                    .headers()
                    .get(header::HOST)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({"host": host, "requestId": request_id}))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr.to_string()
    }

    #[tokio::test]
    async fn api_traffic_is_forwarded_with_origin_rewrite() {
        let upstream = spawn_upstream().await;
        let config = DevServerConfig {
            proxy: ProxyRuleConfig {
                target: format!("http://{}", upstream),
                ..ProxyRuleConfig::default()
            },
            ..DevServerConfig::default()
        };
        let base = spawn_dev_server(config).await;

        let body: Value = reqwest::get(format!("{}/api/echo", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["host"], upstream);
        assert!(!body["requestId"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn change_origin_disabled_keeps_client_host() {
        let upstream = spawn_upstream().await;
        let config = DevServerConfig {
            proxy: ProxyRuleConfig {
                target: format!("http://{}", upstream),
                change_origin: false,
                ..ProxyRuleConfig::default()
            },
            ..DevServerConfig::default()
        };
        let base = spawn_dev_server(config).await;

        let body: Value = reqwest::get(format!("{}/api/echo", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        // The Host header still names the dev server, not the target.
        assert_eq!(format!("http://{}", body["host"].as_str().unwrap()), base);
    }

    #[tokio::test]
    async fn upstream_down_maps_to_bad_gateway() {
        let config = DevServerConfig {
            proxy: ProxyRuleConfig {
                target: "http://127.0.0.1:1".to_string(),
                ..ProxyRuleConfig::default()
            },
            ..DevServerConfig::default()
        };
        let base = spawn_dev_server(config).await;

        let response = reqwest::get(format!("{}/api/echo", base)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn application_paths_answer_resolved_views() {
        let base = spawn_dev_server(DevServerConfig::default()).await;

        let body: Value = reqwest::get(format!("{}/goals/42", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["view"], "GoalDetail");
        assert_eq!(body["props"]["id"], "42");

        // The root redirect resolves to the list view.
        let body: Value = reqwest::get(format!("{}/", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["name"], "GoalList");

        let response = reqwest::get(format!("{}/nowhere", base)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }
}
