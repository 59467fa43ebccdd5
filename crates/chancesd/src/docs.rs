//! The companion documentation page, served at `/`.
//!
//! A single static HTML file embedded at compile time. The page documents the
//! base rates, endpoints, and response shapes; it has no build step and no
//! server-side templating.

use crate::server::AppState;
use axum::{response::Html, routing::get, Router};
use std::sync::Arc;

const DOCS_PAGE: &str = include_str!("../assets/docs.html");

pub fn docs_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(docs_page))
}

async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}
