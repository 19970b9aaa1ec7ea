// ABOUTME: Route module organization for Julia Kitchen API HTTP endpoints
// ABOUTME: Assembles the per-resource routers, health checks, fallback, and middleware stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

//! Route module for the Julia Kitchen API
//!
//! Each resource gets its own module with route definitions and thin handler
//! functions that delegate to the store layer; [`router`] merges them with
//! the health endpoints, a JSON 404 fallback, request tracing, and CORS.

/// Cooking event CRUD routes
pub mod events;
/// Health check and system status routes
pub mod health;
/// Recipe CRUD routes
pub mod recipes;

/// Cooking event route handlers
pub use events::EventRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::RecipeRoutes;

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::errors::AppError;
use crate::models::document::DocumentId;
use axum::http::{HeaderValue, Uri};
use axum::Router;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Assemble the full application router
pub fn router(database: Arc<Database>, config: &ServerConfig) -> Router {
    Router::new()
        .merge(RecipeRoutes::routes(database.clone()))
        .merge(EventRoutes::routes(database))
        .merge(HealthRoutes::routes())
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
}

/// JSON 404 for anything outside the API surface
async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {uri}"))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Parse a path segment into a [`DocumentId`]
///
/// A malformed identifier is a client error naming the resource; a
/// well-formed but unknown one becomes a 404 further down the pipeline.
pub(crate) fn parse_document_id(raw: &str, resource: &str) -> Result<DocumentId, AppError> {
    DocumentId::from_str(raw)
        .map_err(|_| AppError::invalid_input(format!("Invalid {resource} id: {raw}")))
}
