// ABOUTME: Opaque document identifier and revision counter value types
// ABOUTME: Shared by every stored document and assigned by the store on create/update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

//! Document identity primitives
//!
//! Every stored document carries an opaque [`DocumentId`] assigned on
//! creation and a monotonic [`Revision`] counter bumped once per successful
//! update. The revision is observable in API output but is never consulted
//! for concurrency control.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque unique identifier for a stored document
///
/// Serialized as its canonical string form; clients must treat it as an
/// opaque token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DocumentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Monotonic per-document revision counter
///
/// Starts at 0 on creation and increments once per successful update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(u32);

impl Revision {
    /// Wrap a raw counter value
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw counter value
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The revision after one successful update
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}
