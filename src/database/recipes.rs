// ABOUTME: Document store operations for recipe documents
// ABOUTME: Handles create/list/get/update/delete over the recipes table with JSON sequence columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

//! Recipe store operations
//!
//! Recipes are stored one row per document; the ordered `directions` and
//! `ingredients` sequences are JSON text columns. The store owns identifier
//! assignment and revision bumping.

use crate::errors::{AppError, AppResult};
use crate::models::document::{DocumentId, Revision};
use crate::models::recipe::{Ingredient, Recipe, RecipeDraft, RecipePatch, RecipeSummary};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::str::FromStr;

/// Recipe document store
pub struct RecipesManager {
    pool: SqlitePool,
}

impl RecipesManager {
    /// Create a new recipes manager
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
    pub async fn create(&self, draft: RecipeDraft) -> AppResult<Recipe> {
        let recipe = Recipe {
            id: DocumentId::new(),
            revision: Revision::default(),
            name: draft.name,
            directions: draft.directions,
            ingredients: draft.ingredients,
        };

        let directions_json = serde_json::to_string(&recipe.directions)?;
        let ingredients_json = serde_json::to_string(&recipe.ingredients)?;

        sqlx::query(
            r"
            INSERT INTO recipes (id, revision, name, directions, ingredients)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(recipe.id.to_string())
        .bind(i64::from(recipe.revision.value()))
        .bind(&recipe.name)
        .bind(&directions_json)
        .bind(&ingredients_json)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipe: {e}")))?;

        Ok(recipe)
    }

    /// List every recipe as a summary projection (id and name only)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self) -> AppResult<Vec<RecipeSummary>> {
        let rows = sqlx::query("SELECT id, name FROM recipes")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        rows.iter()
            .map(|row| {
                Ok(RecipeSummary {
                    id: document_id_from_row(row)?,
                    name: row
                        .try_get("name")
                        .map_err(|e| AppError::database(format!("Failed to read recipe row: {e}")))?,
                })
            })
            .collect()
    }

    /// Fetch the full document for an identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get(&self, id: &DocumentId) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id, revision, name, directions, ingredients
            FROM recipes
            WHERE id = $1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get recipe: {e}")))?;

        row.as_ref().map(recipe_from_row).transpose()
    }

    /// Merge a validated patch into an existing document and persist it
    ///
    /// Bumps the revision counter. Returns `None` when the identifier does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update(&self, id: &DocumentId, patch: RecipePatch) -> AppResult<Option<Recipe>> {
        let Some(mut recipe) = self.get(id).await? else {
            return Ok(None);
        };

        recipe.apply_patch(patch);
        recipe.revision = recipe.revision.next();

        let directions_json = serde_json::to_string(&recipe.directions)?;
        let ingredients_json = serde_json::to_string(&recipe.ingredients)?;

        sqlx::query(
            r"
            UPDATE recipes
            SET revision = $2, name = $3, directions = $4, ingredients = $5
            WHERE id = $1
            ",
        )
        .bind(recipe.id.to_string())
        .bind(i64::from(recipe.revision.value()))
        .bind(&recipe.name)
        .bind(&directions_json)
        .bind(&ingredients_json)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update recipe: {e}")))?;

        Ok(Some(recipe))
    }

    /// Remove a document, returning it as it existed before deletion
    ///
    /// Returns `None` when the identifier does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete(&self, id: &DocumentId) -> AppResult<Option<Recipe>> {
        let Some(recipe) = self.get(id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete recipe: {e}")))?;

        Ok(Some(recipe))
    }
}

fn document_id_from_row(row: &SqliteRow) -> AppResult<DocumentId> {
    let raw: String = row
        .try_get("id")
        .map_err(|e| AppError::database(format!("Failed to read recipe row: {e}")))?;
    DocumentId::from_str(&raw)
        .map_err(|e| AppError::database(format!("Corrupt recipe id {raw}: {e}")))
}

fn recipe_from_row(row: &SqliteRow) -> AppResult<Recipe> {
    let revision: i64 = row
        .try_get("revision")
        .map_err(|e| AppError::database(format!("Failed to read recipe row: {e}")))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| AppError::database(format!("Failed to read recipe row: {e}")))?;
    let directions_json: String = row
        .try_get("directions")
        .map_err(|e| AppError::database(format!("Failed to read recipe row: {e}")))?;
    let ingredients_json: String = row
        .try_get("ingredients")
        .map_err(|e| AppError::database(format!("Failed to read recipe row: {e}")))?;

    let directions: Vec<String> = serde_json::from_str(&directions_json)?;
    let ingredients: Vec<Ingredient> = serde_json::from_str(&ingredients_json)?;

    Ok(Recipe {
        id: document_id_from_row(row)?,
        revision: Revision::new(u32::try_from(revision).unwrap_or(0)),
        name,
        directions,
        ingredients,
    })
}
