// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment-derived configuration loaded once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

//! Configuration module for the Julia Kitchen API
//!
//! Environment-only configuration: every setting is read once at process
//! start from environment variables (with `.env` support for development).

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseConfig, DatabaseUrl, LogLevel, ServerConfig};
