// ABOUTME: Document store operations for cooking event documents
// ABOUTME: Handles create/list/get/update/delete over the events table with a JSON notes column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

//! Cooking event store operations
//!
//! Events are stored one row per document; the ordered `notes` sequence is a
//! JSON text column and the timestamp is RFC 3339 text. The store owns
//! identifier assignment and revision bumping.

use crate::errors::{AppError, AppResult};
use crate::models::document::{DocumentId, Revision};
use crate::models::event::{Event, EventDraft, EventPatch, EventSummary};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::str::FromStr;

/// Cooking event document store
pub struct EventsManager {
    pool: SqlitePool,
}

impl EventsManager {
    /// Create a new events manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a validated draft as a new document
    ///
    /// Assigns the document identifier and revision 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(&self, draft: EventDraft) -> AppResult<Event> {
        let event = Event {
            id: DocumentId::new(),
            revision: Revision::default(),
            recipe_id: draft.recipe_id,
            date_of_event: draft.date_of_event,
            notes: draft.notes,
            rating: draft.rating,
        };

        let notes_json = serde_json::to_string(&event.notes)?;

        sqlx::query(
            r"
            INSERT INTO events (id, revision, recipe_id, date_of_event, notes, rating)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(event.id.to_string())
        .bind(i64::from(event.revision.value()))
        .bind(event.recipe_id)
        .bind(event.date_of_event.to_rfc3339())
        .bind(&notes_json)
        .bind(event.rating)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create event: {e}")))?;

        Ok(event)
    }

    /// List every event as a summary projection (id and recipe reference only)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self) -> AppResult<Vec<EventSummary>> {
        let rows = sqlx::query("SELECT id, recipe_id FROM events")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list events: {e}")))?;

        rows.iter()
            .map(|row| {
                Ok(EventSummary {
                    id: document_id_from_row(row)?,
                    recipe_id: row
                        .try_get("recipe_id")
                        .map_err(|e| AppError::database(format!("Failed to read event row: {e}")))?,
                })
            })
            .collect()
    }

    /// Fetch the full document for an identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get(&self, id: &DocumentId) -> AppResult<Option<Event>> {
        let row = sqlx::query(
            r"
            SELECT id, revision, recipe_id, date_of_event, notes, rating
            FROM events
            WHERE id = $1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get event: {e}")))?;

        row.as_ref().map(event_from_row).transpose()
    }

    /// Merge a validated patch into an existing document and persist it
    ///
    /// Bumps the revision counter. Returns `None` when the identifier does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update(&self, id: &DocumentId, patch: EventPatch) -> AppResult<Option<Event>> {
        let Some(mut event) = self.get(id).await? else {
            return Ok(None);
        };

        event.apply_patch(patch);
        event.revision = event.revision.next();

        let notes_json = serde_json::to_string(&event.notes)?;

        sqlx::query(
            r"
            UPDATE events
            SET revision = $2, recipe_id = $3, date_of_event = $4, notes = $5, rating = $6
            WHERE id = $1
            ",
        )
        .bind(event.id.to_string())
        .bind(i64::from(event.revision.value()))
        .bind(event.recipe_id)
        .bind(event.date_of_event.to_rfc3339())
        .bind(&notes_json)
        .bind(event.rating)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update event: {e}")))?;

        Ok(Some(event))
    }

    /// Remove a document, returning it as it existed before deletion
    ///
    /// Returns `None` when the identifier does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete(&self, id: &DocumentId) -> AppResult<Option<Event>> {
        let Some(event) = self.get(id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete event: {e}")))?;

        Ok(Some(event))
    }
}

fn document_id_from_row(row: &SqliteRow) -> AppResult<DocumentId> {
    let raw: String = row
        .try_get("id")
        .map_err(|e| AppError::database(format!("Failed to read event row: {e}")))?;
    DocumentId::from_str(&raw)
        .map_err(|e| AppError::database(format!("Corrupt event id {raw}: {e}")))
}

fn event_from_row(row: &SqliteRow) -> AppResult<Event> {
    let revision: i64 = row
        .try_get("revision")
        .map_err(|e| AppError::database(format!("Failed to read event row: {e}")))?;
    let recipe_id: i64 = row
        .try_get("recipe_id")
        .map_err(|e| AppError::database(format!("Failed to read event row: {e}")))?;
    let date_of_event: String = row
        .try_get("date_of_event")
        .map_err(|e| AppError::database(format!("Failed to read event row: {e}")))?;
    let notes_json: String = row
        .try_get("notes")
        .map_err(|e| AppError::database(format!("Failed to read event row: {e}")))?;
    let rating: Option<f64> = row
        .try_get("rating")
        .map_err(|e| AppError::database(format!("Failed to read event row: {e}")))?;

    let date_of_event = DateTime::parse_from_rfc3339(&date_of_event)
        .map_err(|e| AppError::database(format!("Corrupt event timestamp {date_of_event}: {e}")))?
        .with_timezone(&Utc);
    let notes: Vec<String> = serde_json::from_str(&notes_json)?;

    Ok(Event {
        id: document_id_from_row(row)?,
        revision: Revision::new(u32::try_from(revision).unwrap_or(0)),
        recipe_id,
        date_of_event,
        notes,
        rating,
    })
}
