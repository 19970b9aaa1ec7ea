// ABOUTME: Route handlers for the Recipe REST API
// ABOUTME: Provides the five CRUD endpoints under /api/v1/recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

//! Recipe routes
//!
//! Every handler follows the same linear pipeline: validate the request,
//! call the recipe store, serialize the result as JSON.

use crate::database::Database;
use crate::errors::AppError;
use crate::models::recipe::{CreateRecipeRequest, UpdateRecipeRequest};
use crate::routes::parse_document_id;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use std::sync::Arc;

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(database: Arc<Database>) -> Router {
        Router::new()
            .route("/api/v1/recipes", get(Self::handle_list))
            .route("/api/v1/recipes", post(Self::handle_create))
            .route("/api/v1/recipes/:id", get(Self::handle_get))
            .route("/api/v1/recipes/:id", patch(Self::handle_update))
            .route("/api/v1/recipes/:id", delete(Self::handle_delete))
            .with_state(database)
    }

    /// Handle POST /api/v1/recipes - Create a recipe
    async fn handle_create(
        State(database): State<Arc<Database>>,
        Json(body): Json<CreateRecipeRequest>,
    ) -> Result<Response, AppError> {
        let draft = body.validate()?;
        let recipe = database.recipes().create(draft).await?;

        Ok((StatusCode::CREATED, Json(recipe)).into_response())
    }

    /// Handle GET /api/v1/recipes - List recipe summaries
    async fn handle_list(
        State(database): State<Arc<Database>>,
    ) -> Result<Response, AppError> {
        let summaries = database.recipes().list().await?;

        Ok((StatusCode::OK, Json(summaries)).into_response())
    }

    /// Handle GET /api/v1/recipes/:id - Get a full recipe
    async fn handle_get(
        State(database): State<Arc<Database>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_document_id(&id, "recipe")?;
        let recipe = database
            .recipes()
            .get(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;

        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle PATCH /api/v1/recipes/:id - Partially update a recipe
    async fn handle_update(
        State(database): State<Arc<Database>>,
        Path(id): Path<String>,
        Json(body): Json<UpdateRecipeRequest>,
    ) -> Result<Response, AppError> {
        let id = parse_document_id(&id, "recipe")?;
        let patch = body.validate()?;
        let recipe = database
            .recipes()
            .update(&id, patch)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;

        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle DELETE /api/v1/recipes/:id - Delete a recipe
    ///
    /// Responds with the document as it existed before deletion.
    async fn handle_delete(
        State(database): State<Arc<Database>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_document_id(&id, "recipe")?;
        let recipe = database
            .recipes()
            .delete(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;

        Ok((StatusCode::OK, Json(recipe)).into_response())
    }
}
