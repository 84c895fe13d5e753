//! Same-origin forwarder for the TIX REST API.
//!
//! Method, query, body, and end-to-end headers (notably `cookie`) go upstream
//! unchanged; the upstream status, headers (notably `set-cookie`), and body
//! come back unchanged. Connection-level headers are dropped both ways.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method};
use axum::response::Response;

use crate::error::ProxyError;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

const HOP_BY_HOP: &[&str] = &[
    "connection",
    "content-length",
    "host",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Clone)]
pub struct ApiForward {
    client: reqwest::Client,
    upstream: Arc<str>,
}

impl ApiForward {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(upstream: &str) -> Result<Self, reqwest::Error> {
        // Redirects are the browser's business.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;
        Ok(Self { client, upstream: Arc::from(upstream.trim_end_matches('/')) })
    }
}

pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !HOP_BY_HOP.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

pub async fn forward(
    State(api): State<ApiForward>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&api.upstream, &path, query.as_deref());
    tracing::debug!(%method, %url, "forwarding api request");

    let upstream = api
        .client
        .request(method, &url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let upstream_headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    for (name, value) in &upstream_headers {
        response.headers_mut().append(name.clone(), value.clone());
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
