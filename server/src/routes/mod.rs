//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the conversion API and stitches it with Leptos SSR
//! rendering under a single Axum router. The converter page is served at `/`
//! and `/svg-to-jsx`; its WASM bundle lives under `/pkg`.

pub mod convert;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes: conversion endpoint and health check.
pub fn api_routes(state: AppState, body_limit_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(wire::CONVERT_ENDPOINT, post(convert::svg_to_jsx))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + Leptos SSR converter page + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (the
/// `LEPTOS_*` environment set by cargo-leptos is missing or malformed).
pub fn leptos_app(state: AppState, body_limit_bytes: usize) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state, body_limit_bytes)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new()))
}

/// Full application router; falls back to the API alone when the Leptos
/// configuration is unavailable.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    match leptos_app(state.clone(), body_limit_bytes) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable; serving API routes only");
            api_routes(state, body_limit_bytes)
        }
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
