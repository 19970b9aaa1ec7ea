// ABOUTME: Document database management for the Julia Kitchen API
// ABOUTME: Owns the long-lived connection pool and bootstraps table DDL at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

//! # Database Management
//!
//! This module owns the connection to the document store. The pool is opened
//! once at process start and shared by every request; table DDL for both
//! resources is bootstrapped on connect. Per-resource operations live in
//! [`recipes`] and [`events`].

/// Cooking event store operations
pub mod events;
/// Recipe store operations
pub mod recipes;

pub use events::EventsManager;
pub use recipes::RecipesManager;

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database manager for recipe and event document storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and bootstrap the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema bootstrap fails
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options =
            if database_url.starts_with("sqlite:") && !database_url.contains(":memory:") {
                format!("{database_url}?mode=rwc")
            } else {
                database_url.to_string()
            };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// The recipe document store
    #[must_use]
    pub fn recipes(&self) -> RecipesManager {
        RecipesManager::new(self.pool.clone())
    }

    /// The cooking event document store
    #[must_use]
    pub fn events(&self) -> EventsManager {
        EventsManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a DDL statement fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_recipes().await?;
        self.migrate_events().await?;
        Ok(())
    }

    async fn migrate_recipes(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                revision INTEGER NOT NULL DEFAULT 0,
                name TEXT NOT NULL,
                directions TEXT NOT NULL DEFAULT '[]',
                ingredients TEXT NOT NULL DEFAULT '[]'
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn migrate_events(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS events (
                id TEXT PRIMARY KEY,
                revision INTEGER NOT NULL DEFAULT 0,
                recipe_id INTEGER NOT NULL,
                date_of_event TEXT NOT NULL,
                notes TEXT NOT NULL DEFAULT '[]',
                rating REAL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
