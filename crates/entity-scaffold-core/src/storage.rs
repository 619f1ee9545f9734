// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Classification of `sqlx` errors.
//!
//! Generated managers branch on these predicates instead of matching error
//! text, so the mapping from database failure to [`Status`](crate::Status)
//! lives in one place.
//!
//! | Predicate | Matches | Manager reaction |
//! |-----------|---------|------------------|
//! | [`is_duplicate_entry`] | unique-key violation | create recovers the generated key |
//! | [`is_no_rows`] | `RowNotFound` | get reports not found |
//! | [`is_scan_error`] | column decode / missing column | list reports a scan failure |
//!
//! [`recovered_conflict`] logs the create path that turns a conflict into
//! success.

/// Check if the error is a uniqueness conflict on insert.
///
/// MySQL reports these as error 1062 (`Duplicate entry ... for key ...`).
pub fn is_duplicate_entry(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            db.is_unique_violation() || db.message().contains("Duplicate entry")
        }
        _ => false
    }
}

/// Check if a single-row fetch matched nothing.
pub fn is_no_rows(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::RowNotFound)
}

/// Record that an insert conflict was resolved by looking up the existing
/// row instead of failing.
pub fn recovered_conflict(entity: &str, err: &sqlx::Error) {
    tracing::debug!(entity, error = %err, "insert conflict resolved to existing row");
}

/// Check if a row was fetched but could not be mapped into the record.
pub fn is_scan_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
    )
}
