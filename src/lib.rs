// ABOUTME: Main library entry point for the Julia Kitchen API
// ABOUTME: REST API for cooking recipes and cooking event logs over a document store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

#![deny(unsafe_code)]

//! # Julia Kitchen API
//!
//! A REST API for managing cooking recipes and cooking events - logs of
//! attempts at a recipe, with ratings and notes - backed by a document
//! store. Each resource exposes the five conventional CRUD endpoints under
//! `/api/v1`, with schema validation decoupled from storage.
//!
//! ## Architecture
//!
//! - **Models**: Domain documents, wire request types, and validation
//! - **Database**: Long-lived connection pool and per-resource stores
//! - **Routes**: Thin HTTP handlers mapping verbs to store calls
//! - **Config**: Environment-only configuration loaded at startup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use julia_api_server::config::environment::ServerConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load configuration
//! let config = ServerConfig::from_env()?;
//!
//! println!("Julia Kitchen API configured with port: HTTP={}", config.http_port);
//! # Ok(())
//! # }
//! ```

/// Configuration management
pub mod config;

/// Document database management
pub mod database;

/// Unified error handling system
pub mod errors;

/// Logging configuration and setup
pub mod logging;

/// Domain models and validation
pub mod models;

/// `HTTP` routes for the REST API
pub mod routes;
