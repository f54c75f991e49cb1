//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the Leptos SSR pages, the hashed `/pkg` assets produced for
//! hydration, and the health probe under one Axum router.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full SSR app: Leptos pages plus static assets and `/healthz`.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(options.clone());

    base_routes(&options)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Routes that do not render the app: the health probe and `/pkg` assets.
pub fn base_routes(options: &LeptosOptions) -> Router {
    let site_root = PathBuf::from(options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join(options.site_pkg_dir.as_ref())))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
