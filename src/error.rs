// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator error type.
//!
//! Every variant is a configuration or I/O problem detected before any text
//! is emitted for the affected entity. Schema problems are fatal to that
//! entity only; the pipeline reports which one failed.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the generator.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a schema document or generating code.
#[derive(Debug, Error)]
pub enum Error {
    /// No field carries a `PRIMARY KEY` marker.
    #[error("entity '{entity}' has no PRIMARY KEY field")]
    MissingPrimaryKey {
        /// Entity name as declared.
        entity: String
    },

    /// More than one field carries a `PRIMARY KEY` marker.
    #[error("entity '{entity}' has more than one PRIMARY KEY field: {}", .fields.join(", "))]
    MultiplePrimaryKeys {
        /// Entity name as declared.
        entity: String,
        /// Every field marked as primary key, in declared order.
        fields: Vec<String>
    },

    /// Two fields share a name.
    #[error("entity '{entity}' declares field '{field}' more than once")]
    DuplicateField {
        /// Entity name as declared.
        entity: String,
        /// Repeated field name.
        field:  String
    },

    /// A name cannot be turned into a Rust identifier.
    #[error("entity '{entity}': '{name}' is not a usable identifier")]
    InvalidIdentifier {
        /// Entity name as declared.
        entity: String,
        /// Offending entity or field name.
        name:   String
    },

    /// An auto-generated key has a type the insert id cannot convert into.
    #[error("entity '{entity}': auto-generated key '{field}' must be an integer type, not '{ty}'")]
    GeneratedKeyNotInteger {
        /// Entity name as declared.
        entity: String,
        /// Key field name as declared.
        field:  String,
        /// Type text from the document.
        ty:     String
    },

    /// A field would generate a method parameter that is already taken.
    #[error("entity '{entity}': field '{field}' would shadow the '{name}' parameter")]
    ReservedName {
        /// Entity name as declared.
        entity: String,
        /// Field name as declared.
        field:  String,
        /// Parameter name it collides with.
        name:   String
    },

    /// Two entities would be written to the same file.
    #[error("entity '{entity}' generates '{file_name}', already generated for '{first}'")]
    DuplicateEntity {
        /// Entity name as declared.
        entity:    String,
        /// Earlier entity with the same file name.
        first:     String,
        /// Shared file name.
        file_name: String
    },

    /// A field's value type is neither a known alias nor a Rust type.
    #[error("entity '{entity}', field '{field}': invalid type '{ty}'")]
    InvalidType {
        /// Entity name as declared.
        entity: String,
        /// Field name as declared.
        field:  String,
        /// Type text from the document.
        ty:     String,
        /// Parser error.
        #[source]
        source: syn::Error
    },

    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File involved.
        path:   PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error
    },

    /// The document is not valid JSON for the schema model.
    #[error("invalid JSON schema document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid TOML for the schema model.
    #[error("invalid TOML schema document: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document extension is neither `.json` nor `.toml`.
    #[error("unsupported schema document format: {}", .0.display())]
    UnsupportedFormat(PathBuf)
}

impl Error {
    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source
        }
    }
}
