// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types for entity-scaffold generated managers.
//!
//! Every generated `{Entity}Manager` reports its outcome with the types in
//! this crate, so the caller (usually an HTTP boundary) can map results to a
//! transport response without inspecting database errors itself.
//!
//! # Overview
//!
//! - [`Status`]: Transport-neutral status code of an operation
//! - [`Reply`]: Successful outcome: status plus value
//! - [`AccessError`]: Failed outcome: status, message and optional cause
//! - [`TrustedFragment`]: SQL text accepted by the custom query operations
//! - [`storage`]: Classification of `sqlx` errors
//! - [`prelude`]: Convenient re-exports
//!
//! # Usage
//!
//! ```rust,ignore
//! use entity_scaffold_core::prelude::*;
//!
//! let manager = ScoreManager::new(pool);
//! match manager.get(7, user_id).await {
//!     Ok(reply) => respond(reply.status.code(), reply.value),
//!     Err(err) => respond(err.status().code(), err.message())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod fragment;
pub mod prelude;
pub mod storage;

use std::fmt;

pub use error::{AccessError, Cause};
pub use fragment::TrustedFragment;

/// Result of a generated manager operation.
pub type AccessResult<T> = Result<Reply<T>, AccessError>;

/// Status of a manager operation.
///
/// The variants mirror the HTTP status codes a boundary is expected to
/// answer with, so [`Status::code`] can be forwarded directly.
///
/// | Variant | Code | Produced by |
/// |---------|------|-------------|
/// | `Ok` | 200 | get, list, update, custom ops, create on recovered conflict |
/// | `Created` | 201 | create |
/// | `NoContent` | 204 | delete |
/// | `BadRequest` | 400 | custom_sql with a rejected statement |
/// | `NotFound` | 404 | get, update and delete with no matching row |
/// | `InternalServerError` | 500 | any other persistence failure |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Operation succeeded.
    Ok,

    /// A new row was inserted.
    Created,

    /// A row was removed; there is nothing to return.
    NoContent,

    /// The caller supplied a statement the database rejected.
    BadRequest,

    /// No row matched the key (and owner, when scoped).
    NotFound,

    /// Persistence failed for a reason the caller cannot fix.
    InternalServerError
}

impl Status {
    /// Numeric code, identical to the matching HTTP status.
    pub const fn code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::NoContent => 204,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::InternalServerError => 500
        }
    }

    /// Canonical reason phrase.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Created => "Created",
            Self::NoContent => "No Content",
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error"
        }
    }

    /// Check if the status reports success (2xx).
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Ok | Self::Created | Self::NoContent)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// Successful outcome of a manager operation.
///
/// # Example
///
/// ```rust
/// use entity_scaffold_core::{Reply, Status};
///
/// let reply = Reply::created(());
/// assert_eq!(reply.status, Status::Created);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<T> {
    /// Status to report to the caller.
    pub status: Status,

    /// Value produced by the operation.
    pub value: T
}

impl<T> Reply<T> {
    /// Reply with an explicit status.
    pub const fn new(status: Status, value: T) -> Self {
        Self {
            status,
            value
        }
    }

    /// Reply with [`Status::Ok`].
    pub const fn ok(value: T) -> Self {
        Self::new(Status::Ok, value)
    }

    /// Reply with [`Status::Created`].
    pub const fn created(value: T) -> Self {
        Self::new(Status::Created, value)
    }

    /// Transform the value, keeping the status.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        Reply {
            status: self.status,
            value:  f(self.value)
        }
    }

    /// Take the value, dropping the status.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl Reply<()> {
    /// Reply with [`Status::NoContent`].
    pub const fn no_content() -> Self {
        Self::new(Status::NoContent, ())
    }
}
