// ABOUTME: Route handlers for the cooking Event REST API
// ABOUTME: Provides the five CRUD endpoints under /api/v1/events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

//! Cooking event routes

use crate::database::Database;
use crate::errors::AppError;
use crate::models::event::{CreateEventRequest, UpdateEventRequest};
use crate::routes::parse_document_id;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use std::sync::Arc;

/// Cooking event routes handler
pub struct EventRoutes;

impl EventRoutes {
    /// Create all event routes
    pub fn routes(database: Arc<Database>) -> Router {
        Router::new()
            .route("/api/v1/events", get(Self::handle_list))
            .route("/api/v1/events", post(Self::handle_create))
            .route("/api/v1/events/:id", get(Self::handle_get))
            .route("/api/v1/events/:id", patch(Self::handle_update))
            .route("/api/v1/events/:id", delete(Self::handle_delete))
            .with_state(database)
    }

    /// Handle POST /api/v1/events - Create an event
    async fn handle_create(
        State(database): State<Arc<Database>>,
        Json(body): Json<CreateEventRequest>,
    ) -> Result<Response, AppError> {
        let draft = body.validate()?;
        let event = database.events().create(draft).await?;

        Ok((StatusCode::CREATED, Json(event)).into_response())
    }

    /// Handle GET /api/v1/events - List event summaries
    async fn handle_list(
        State(database): State<Arc<Database>>,
    ) -> Result<Response, AppError> {
        let summaries = database.events().list().await?;

        Ok((StatusCode::OK, Json(summaries)).into_response())
    }

    /// Handle GET /api/v1/events/:id - Get a full event
    async fn handle_get(
        State(database): State<Arc<Database>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_document_id(&id, "event")?;
        let event = database
            .events()
            .get(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {id}")))?;

        Ok((StatusCode::OK, Json(event)).into_response())
    }

    /// Handle PATCH /api/v1/events/:id - Partially update an event
    async fn handle_update(
        State(database): State<Arc<Database>>,
        Path(id): Path<String>,
        Json(body): Json<UpdateEventRequest>,
    ) -> Result<Response, AppError> {
        let id = parse_document_id(&id, "event")?;
        let patch = body.validate()?;
        let event = database
            .events()
            .update(&id, patch)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {id}")))?;

        Ok((StatusCode::OK, Json(event)).into_response())
    }

    /// Handle DELETE /api/v1/events/:id - Delete an event
    ///
    /// Responds with the document as it existed before deletion.
    async fn handle_delete(
        State(database): State<Arc<Database>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_document_id(&id, "event")?;
        let event = database
            .events()
            .delete(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {id}")))?;

        Ok((StatusCode::OK, Json(event)).into_response())
    }
}
