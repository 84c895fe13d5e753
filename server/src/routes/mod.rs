//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos admin app renders under `/admin`; its WASM/CSS bundle is served
//! from `/pkg`. When an upstream is configured, `/api/v1/*` is forwarded to
//! the TIX API so the browser talks to one origin and its session cookie
//! stays first-party.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::ServeError;

/// Path prefix the client sends API calls to.
pub const API_PREFIX: &str = "/api/v1";

/// Routes that need no Leptos site files: health, root redirect, and the
/// optional API forwarder.
///
/// # Errors
///
/// Returns an error if the forwarder's HTTP client cannot be built.
pub fn base_routes(config: &AppConfig) -> Result<Router, ServeError> {
    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(redirect_root_to_admin));

    if let Some(upstream) = &config.api_upstream {
        let forward = proxy::ApiForward::new(upstream).map_err(ServeError::HttpClient)?;
        router = router.route(&format!("{API_PREFIX}/{{*path}}"), any(proxy::forward).with_state(forward));
    }
    Ok(router)
}

/// Full host router: base routes + Leptos SSR under `/admin` + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(config: &AppConfig) -> Result<Router, ServeError> {
    let conf = get_configuration(config.leptos_config.as_deref()).map_err(|e| ServeError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes(config)?
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn redirect_root_to_admin() -> Redirect {
    Redirect::temporary(client::routes::BASE_PATH)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
