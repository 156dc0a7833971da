//! Shared request-issuing handle.
//!
//! # Responsibilities
//! - Resolve the effective base URI from configuration
//! - Apply the fixed request timeout
//! - Normalize failures into `RequestError` (attach server body as `pretty`)
//!
//! # Design Decisions
//! - Constructed once at startup and passed explicitly to call sites
//! - No retries, caching, or deduplication; retry policy belongs to callers
//! - Success bodies are decoded and returned unmodified

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::error::RequestError;
use crate::config::ApiConfig;

/// HTTP client wrapper used by all view-level data access code.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// An absolute `base_uri` is used verbatim; a relative one is joined
    /// onto `origin`. The configured timeout bounds every request issued
    /// through this handle.
    pub fn new(config: &ApiConfig) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            http,
            base: resolve_base(config),
        })
    }

    /// The effective base URI requests are issued against.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        decode(response).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RequestError> {
        let response = self.send(self.http.get(self.url(path)).query(query)).await?;
        decode(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        decode(response).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), RequestError> {
        self.send(self.http.delete(self.url(path))).await.map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Issue the request and run the single failure-normalization step.
    ///
    /// Successful responses pass through untouched. A response with a
    /// non-2xx status is turned into `RequestError::Server`, carrying the
    /// body under `pretty` when one is present.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, RequestError> {
        let response = request
            .send()
            .await
            .map_err(|source| RequestError::Transport { source })?;

        // `.err()` detaches the owned status error so the response itself
        // stays consumable for its body.
        let failure = response.error_for_status_ref().err();
        match failure {
            None => Ok(response),
            Some(source) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                let pretty = if body.is_empty() {
                    None
                } else {
                    Some(match serde_json::from_str(&body) {
                        Ok(value) => value,
                        Err(_) => Value::String(body),
                    })
                };
                Err(RequestError::Server {
                    status,
                    pretty,
                    source,
                })
            }
        }
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RequestError> {
    response
        .json()
        .await
        .map_err(|source| RequestError::Decode { source })
}

fn resolve_base(config: &ApiConfig) -> String {
    let base_uri = config.base_uri.trim_end_matches('/');
    if Url::parse(base_uri).is_ok() {
        base_uri.to_string()
    } else {
        format!("{}{}", config.origin.trim_end_matches('/'), base_uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(origin: String) -> ApiClient {
        ApiClient::new(&ApiConfig {
            origin,
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn base_resolution() {
        let config = ApiConfig::default();
        assert_eq!(resolve_base(&config), "http://localhost:8081/api");

        let absolute = ApiConfig {
            base_uri: "https://goals.example.com/api/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(resolve_base(&absolute), "https://goals.example.com/api");
    }

    #[tokio::test]
    async fn requests_target_the_base_path() {
        let app = Router::new().route("/api/goals", get(|| async { Json(json!([])) }));
        let origin = serve(app).await;

        let client = client_for(origin);
        let body: Value = client.get("/goals").await.unwrap();
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn absolute_base_uri_bypasses_origin() {
        let app = Router::new().route("/custom/goals", get(|| async { Json(json!([])) }));
        let origin = serve(app).await;

        let client = ApiClient::new(&ApiConfig {
            base_uri: format!("{}/custom", origin),
            ..ApiConfig::default()
        })
        .unwrap();
        let body: Value = client.get("/goals").await.unwrap();
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn success_passes_through_unmodified() {
        let payload = json!({"id": 1, "goal": "learn rust", "deletionProtected": false});
        let response = payload.clone();
        let app = Router::new().route(
            "/api/goals/1",
            get(move || {
                let response = response.clone();
                async move { Json(response) }
            }),
        );
        let origin = serve(app).await;

        let client = client_for(origin);
        let body: Value = client.get("/goals/1").await.unwrap();
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn server_failure_attaches_body_as_pretty() {
        let payload = json!({
            "timestamp": "2025-01-01T00:00:00Z",
            "states": 404,
            "error": "Not Found",
            "message": "goal not found",
        });
        let response = payload.clone();
        let app = Router::new().route(
            "/api/goals/9",
            get(move || {
                let response = response.clone();
                async move { (StatusCode::NOT_FOUND, Json(response)) }
            }),
        );
        let origin = serve(app).await;

        let client = client_for(origin);
        let err = client.get::<Value>("/goals/9").await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.pretty(), Some(&payload));
    }

    #[tokio::test]
    async fn non_json_error_body_is_kept_as_string() {
        let app = Router::new().route(
            "/api/goals",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let origin = serve(app).await;

        let client = client_for(origin);
        let err = client.get::<Value>("/goals").await.unwrap_err();
        assert_eq!(err.pretty(), Some(&Value::String("boom".to_string())));
    }

    #[tokio::test]
    async fn empty_error_body_means_no_pretty() {
        let app = Router::new().route("/api/goals", get(|| async { StatusCode::BAD_GATEWAY }));
        let origin = serve(app).await;

        let client = client_for(origin);
        let err = client.get::<Value>("/goals").await.unwrap_err();
        assert!(matches!(
            &err,
            RequestError::Server { pretty: None, .. }
        ));
        assert!(err.pretty().is_none());
    }

    #[tokio::test]
    async fn transport_failure_has_no_pretty() {
        // Nothing listens on port 1; the connection is refused before any
        // HTTP response exists.
        let client = client_for("http://127.0.0.1:1".to_string());
        let err = client.get::<Value>("/goals").await.unwrap_err();
        assert!(matches!(&err, RequestError::Transport { .. }));
        assert!(err.pretty().is_none());
        assert!(err.status().is_none());
    }
}
