// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Constraint annotation parsing.
//!
//! Each field carries a raw SQL annotation (`BIGINT UNSIGNED AUTO_INCREMENT
//! PRIMARY KEY`). The annotation is written verbatim into `CREATE TABLE`,
//! and interpreted once, at load time, into [`Constraints`] flags. Nothing
//! downstream inspects the raw text again.
//!
//! # Recognised Tokens
//!
//! Matching is case-insensitive substring containment, not SQL parsing.
//!
//! | Token | Flag |
//! |-------|------|
//! | `PRIMARY KEY` | `primary_key` |
//! | `AUTO_INCREMENT`, `AUTOINCREMENT` | `auto_generated` |
//! | `UNIQUE` | `unique` |
//! | `DEFAULT` | `has_default` |
//! | `DATETIME` / `TIMESTAMP` / `DATE` | `temporal` |

use serde::{Deserialize, Serialize};

/// Kind of temporal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temporal {
    /// `DATE` column.
    Date,

    /// `DATETIME` column.
    DateTime,

    /// `TIMESTAMP` column.
    Timestamp
}

/// Constraint flags of one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Constraints {
    /// Field is the primary key.
    pub primary_key: bool,

    /// Value is assigned by the database on insert.
    pub auto_generated: bool,

    /// Column carries a uniqueness constraint.
    pub unique: bool,

    /// Column has a default value.
    pub has_default: bool,

    /// Column holds a date or time.
    pub temporal: Option<Temporal>
}

impl Constraints {
    /// Interpret a raw annotation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use entity_scaffold::schema::Constraints;
    ///
    /// let c = Constraints::parse("bigint unsigned auto_increment primary key");
    /// assert!(c.primary_key);
    /// assert!(c.auto_generated);
    /// assert!(!c.unique);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let upper = raw.to_ascii_uppercase();
        let has = |token: &str| upper.contains(token);

        let temporal = if has("DATETIME") {
            Some(Temporal::DateTime)
        } else if has("TIMESTAMP") {
            Some(Temporal::Timestamp)
        } else if has("DATE") {
            Some(Temporal::Date)
        } else {
            None
        };

        Self {
            primary_key: has("PRIMARY KEY"),
            auto_generated: has("AUTO_INCREMENT") || has("AUTOINCREMENT"),
            unique: has("UNIQUE"),
            has_default: has("DEFAULT"),
            temporal
        }
    }
}

/// Raw annotation text together with its parsed flags.
///
/// Serialized as the raw string; the flags are recomputed on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Annotation {
    raw:         String,
    constraints: Constraints
}

impl Annotation {
    /// Parse an annotation.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let constraints = Constraints::parse(&raw);
        Self {
            raw,
            constraints
        }
    }

    /// SQL text as written in the document.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed flags.
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }
}

impl From<String> for Annotation {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Annotation {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<Annotation> for String {
    fn from(annotation: Annotation) -> Self {
        annotation.raw
    }
}
