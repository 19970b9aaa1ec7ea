// ABOUTME: Cooking event domain model (one logged attempt at a recipe)
// ABOUTME: Defines wire request types, the list projection, and storage-independent validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

//! Cooking event documents
//!
//! An event logs one attempt at a recipe: when it happened, free-text notes,
//! and an optional rating. `recipeId` is a plain numeric reference and is
//! deliberately not checked against existing recipes.

use crate::errors::{FieldError, ValidationErrors};
use crate::models::document::{DocumentId, Revision};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored cooking event document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier, assigned by the store on creation
    pub id: DocumentId,
    /// Monotonic update counter, observable but never compared
    pub revision: Revision,
    /// Numeric reference to a recipe; no referential integrity
    pub recipe_id: i64,
    /// When the attempt happened; RFC 3339 text on the wire
    pub date_of_event: DateTime<Utc>,
    /// Ordered free-text notes
    pub notes: Vec<String>,
    /// Numeric score; no range constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Event {
    /// Merge a validated patch into this document
    ///
    /// Only supplied fields change; the revision counter is bumped by the
    /// store, not here.
    pub fn apply_patch(&mut self, patch: EventPatch) {
        if let Some(recipe_id) = patch.recipe_id {
            self.recipe_id = recipe_id;
        }
        if let Some(date_of_event) = patch.date_of_event {
            self.date_of_event = date_of_event;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(rating) = patch.rating {
            self.rating = Some(rating);
        }
    }
}

/// Summary projection returned by the list operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    /// Unique identifier
    pub id: DocumentId,
    /// Numeric reference to a recipe
    pub recipe_id: i64,
}

/// Validated event content, ready for the store to persist
#[derive(Debug, Clone)]
pub struct EventDraft {
    /// Numeric reference to a recipe
    pub recipe_id: i64,
    /// When the attempt happened
    pub date_of_event: DateTime<Utc>,
    /// Ordered free-text notes
    pub notes: Vec<String>,
    /// Numeric score
    pub rating: Option<f64>,
}

/// Validated partial update; `None` fields stay untouched
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    /// Replacement recipe reference
    pub recipe_id: Option<i64>,
    /// Replacement timestamp
    pub date_of_event: Option<DateTime<Utc>>,
    /// Replacement notes
    pub notes: Option<Vec<String>>,
    /// Replacement rating
    pub rating: Option<f64>,
}

/// Request body for creating an event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Numeric reference to a recipe (required)
    pub recipe_id: Option<i64>,
    /// When the attempt happened, RFC 3339 (required)
    pub date_of_event: Option<DateTime<Utc>>,
    /// Free-text notes; defaults to empty
    #[serde(default)]
    pub notes: Vec<String>,
    /// Numeric score
    pub rating: Option<f64>,
}

impl CreateEventRequest {
    /// Validate the request into a persistable draft
    ///
    /// # Errors
    ///
    /// Returns every offending field when `recipeId` or `dateOfEvent` is
    /// missing.
    pub fn validate(&self) -> Result<EventDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.recipe_id.is_none() {
            errors.push(FieldError::missing("recipeId"));
        }
        if self.date_of_event.is_none() {
            errors.push(FieldError::missing("dateOfEvent"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EventDraft {
            recipe_id: self.recipe_id.unwrap_or_default(),
            date_of_event: self.date_of_event.unwrap_or_default(),
            notes: self.notes.clone(),
            rating: self.rating,
        })
    }
}

/// Request body for partially updating an event
///
/// Omitted fields keep their stored values. A rating, once set, cannot be
/// unset through a partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    /// New recipe reference
    pub recipe_id: Option<i64>,
    /// New timestamp, RFC 3339
    pub date_of_event: Option<DateTime<Utc>>,
    /// Replacement notes
    pub notes: Option<Vec<String>>,
    /// New rating
    pub rating: Option<f64>,
}

impl UpdateEventRequest {
    /// Validate the supplied fields into a patch
    ///
    /// Every event field is either a scalar or a replaceable sequence, so a
    /// partial update has no value-level rules to enforce; this still runs
    /// through the same structured-validation path as create.
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible for symmetry with create.
    pub fn validate(&self) -> Result<EventPatch, ValidationErrors> {
        Ok(EventPatch {
            recipe_id: self.recipe_id,
            date_of_event: self.date_of_event,
            notes: self.notes.clone(),
            rating: self.rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldErrorKind;

    fn sample_event() -> Event {
        Event {
            id: DocumentId::new(),
            revision: Revision::default(),
            recipe_id: 1,
            date_of_event: "2025-06-01T18:30:00Z".parse().unwrap(),
            notes: vec![
                "this recipe is good".to_owned(),
                "i substituted sugar for salt".to_owned(),
            ],
            rating: Some(4.5),
        }
    }

    #[test]
    fn test_create_requires_recipe_id_and_date() {
        let errors = CreateEventRequest::default().validate().unwrap_err();

        let fields: Vec<&str> = errors.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["recipeId", "dateOfEvent"]);
        assert!(errors
            .fields()
            .iter()
            .all(|e| e.kind == FieldErrorKind::Missing));
    }

    #[test]
    fn test_create_defaults_notes_to_empty() {
        let request = CreateEventRequest {
            recipe_id: Some(1),
            date_of_event: Some("2025-06-01T18:30:00Z".parse().unwrap()),
            ..CreateEventRequest::default()
        };
        let draft = request.validate().unwrap();

        assert!(draft.notes.is_empty());
        assert!(draft.rating.is_none());
    }

    #[test]
    fn test_rating_is_omitted_from_json_when_absent() {
        let event = Event {
            rating: None,
            ..sample_event()
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("rating").is_none());
        assert!(json.get("recipeId").is_some());
    }

    #[test]
    fn test_date_of_event_serializes_as_text() {
        let json = serde_json::to_value(sample_event()).unwrap();
        assert_eq!(json["dateOfEvent"], "2025-06-01T18:30:00Z");
    }

    #[test]
    fn test_patch_changes_only_supplied_fields() {
        let mut event = sample_event();
        let patch = UpdateEventRequest {
            rating: Some(2.0),
            ..UpdateEventRequest::default()
        }
        .validate()
        .unwrap();
        event.apply_patch(patch);

        assert_eq!(event.rating, Some(2.0));
        assert_eq!(event.recipe_id, 1);
        assert_eq!(event.notes.len(), 2);
    }
}
