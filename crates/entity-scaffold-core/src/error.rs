// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Failure type returned by generated managers.

use std::fmt;

use crate::Status;

/// Underlying error kept for diagnostics.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failed outcome of a manager operation.
///
/// Carries the `(status, message, cause)` triple. The message is a fixed,
/// human-readable template per operation (for example
/// `"Couldn't get score from database"`); the cause is the database error
/// that triggered it, when there is one.
///
/// Failures are classified once, where they occur. Server-side and
/// caller-input failures are logged at `error` level when constructed;
/// not-found is logged at `debug` level only.
#[derive(Debug)]
pub struct AccessError {
    status:  Status,
    message: String,
    cause:   Option<Cause>
}

impl AccessError {
    /// Create an error without logging it.
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            cause: None
        }
    }

    /// Attach the underlying cause.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// No row matched.
    pub fn not_found(message: impl Into<String>) -> Self {
        let err = Self::new(Status::NotFound, message);
        tracing::debug!(status = err.status.code(), message = %err.message, "row not found");
        err
    }

    /// Persistence failed on the server side.
    pub fn server(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        let err = Self::new(Status::InternalServerError, message).with_cause(cause);
        err.report();
        err
    }

    /// The caller supplied a statement the database rejected.
    pub fn bad_request(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        let err = Self::new(Status::BadRequest, message).with_cause(cause);
        err.report();
        err
    }

    /// Status to report to the caller.
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Fixed message template for the failed operation.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Underlying cause, if any.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Check if no row matched.
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status, Status::NotFound)
    }

    /// Split into the `(status, message, cause)` triple.
    pub fn into_parts(self) -> (Status, String, Option<Cause>) {
        (self.status, self.message, self.cause)
    }

    fn report(&self) {
        match &self.cause {
            Some(cause) => tracing::error!(
                status = self.status.code(),
                message = %self.message,
                cause = %cause,
                "entity access failed"
            ),
            None => tracing::error!(
                status = self.status.code(),
                message = %self.message,
                "entity access failed"
            )
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {}", self.message, cause),
            None => write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for AccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
