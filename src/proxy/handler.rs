//! Request handlers for the proxy service.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use super::config::ProxyConfig;
use super::mock::MockStore;

#[derive(Clone)]
pub struct AppState {
    pub config: ProxyConfig,
    pub http: reqwest::Client,
    pub mock: Arc<dyn MockStore>,
}

impl AppState {
    pub fn new(config: ProxyConfig, mock: Arc<dyn MockStore>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            mock,
        }
    }
}

/// Forwarding handler for all verbs under `/api/proxy/{*path}`.
///
/// A healthy backend is transparent; a failing one falls back to fixture
/// data when the mock flag is set. A missing backend URL is a configuration
/// error and short-circuits to 500 before any forwarding.
pub async fn proxy_handler(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(backend_url) = state.config.backend_url.clone() else {
        error!("rejecting {method} /{path}: backend URL not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Backend URL not configured" })),
        )
            .into_response();
    };

    let query_suffix = query
        .as_deref()
        .map(|q| format!("?{q}"))
        .unwrap_or_default();
    let target = format!("{backend_url}/{path}{query_suffix}");

    let mut request = state.http.request(method.clone(), &target);
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        request = request.header(header::CONTENT_TYPE, content_type.clone());
    }
    if !body.is_empty() {
        request = request.body(body.clone());
    }

    // None = transport failure, Some = backend answered with an error status
    let backend_status = match request.send().await {
        Ok(response) if response.status().is_success() => {
            let status = response.status();
            if status == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
                return StatusCode::NO_CONTENT.into_response();
            }
            match response.json::<Value>().await {
                Ok(value) => return (status, Json(value)).into_response(),
                Err(err) => {
                    warn!("backend sent an unparseable body for /{path}: {err}");
                    None
                }
            }
        }
        Ok(response) => Some(response.status().as_u16()),
        Err(err) => {
            warn!("backend request to {target} failed: {err}");
            None
        }
    };

    fallback(&state, &method, &path, query.as_deref(), &body, backend_status)
}

fn fallback(
    state: &AppState,
    method: &Method,
    path: &str,
    query: Option<&str>,
    body: &Bytes,
    backend_status: Option<u16>,
) -> Response {
    if state.config.use_mock_data {
        let params = parse_query(query);
        if let Some(value) = state.mock.lookup(method, path, &params, body) {
            info!("serving mock data for /{path}");
            return Json(value).into_response();
        }
    }

    if *method == Method::GET {
        if backend_status.is_some() {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Resource not found: {path}") })),
            )
                .into_response()
        } else {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch data from backend" })),
            )
                .into_response()
        }
    } else {
        let status = backend_status
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": "Backend operation failed" }))).into_response()
    }
}

/// Streaming passthrough under `/api/raw/{*path}`.
///
/// No mock fallback here: the request body streams straight through, the
/// response body streams straight back, caching is disabled, and any
/// upstream failure surfaces as a 502.
pub async fn passthrough_handler(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    body: Body,
) -> Response {
    let Some(backend_url) = state.config.backend_url.clone() else {
        error!("rejecting {method} /{path}: backend URL not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Backend URL not configured",
        )
            .into_response();
    };

    let query_suffix = query
        .as_deref()
        .map(|q| format!("?{q}"))
        .unwrap_or_default();
    let target = format!("{backend_url}/{path}{query_suffix}");

    let request = state
        .http
        .request(method, &target)
        .body(reqwest::Body::wrap_stream(body.into_data_stream()));

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            let mut builder = Response::builder()
                .status(status)
                .header(header::CACHE_CONTROL, "no-store");
            if let Some(content_type) = response.headers().get(header::CONTENT_TYPE) {
                builder = builder.header(header::CONTENT_TYPE, content_type.clone());
            }
            builder
                .body(Body::from_stream(response.bytes_stream()))
                .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
        }
        Err(err) => {
            warn!("passthrough request to {target} failed: {err}");
            (
                StatusCode::BAD_GATEWAY,
                "Proxy error: could not connect to the backend service",
            )
                .into_response()
        }
    }
}

/// Health probe: reports whether the backend answers and whether responses
/// may be fixture data. Never fails.
pub async fn connection_status_handler(State(state): State<AppState>) -> Json<Value> {
    let connected = match &state.config.backend_url {
        Some(backend_url) => match state.http.get(format!("{backend_url}/teams")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        },
        None => false,
    };

    let using_mock_data = !connected || state.config.use_mock_data;

    Json(json!({
        "connected": connected,
        "usingMockData": using_mock_data,
        "status": if connected { "connected" } else { "disconnected" },
    }))
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    query
        .unwrap_or_default()
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}
