// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema document and loading.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entity::EntitySchema;
use crate::error::{Error, Result};

/// Field name that scopes rows to an owner.
pub const DEFAULT_OWNER_FIELD: &str = "UserId";

/// Options appended to every `CREATE TABLE` statement.
pub const DEFAULT_TABLE_OPTIONS: &str = "DEFAULT CHARSET=utf8mb4";

fn default_owner_field() -> String {
    DEFAULT_OWNER_FIELD.to_string()
}

fn default_table_options() -> String {
    DEFAULT_TABLE_OPTIONS.to_string()
}

/// A full schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Compact name of the ownership field.
    #[serde(default = "default_owner_field")]
    pub owner_field: String,

    /// Table options for `CREATE TABLE`.
    #[serde(default = "default_table_options")]
    pub table_options: String,

    /// Entities in declared order.
    #[serde(alias = "models")]
    pub entities: Vec<EntitySchema>
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Document {
    /// Create a document with default options.
    pub fn new(entities: Vec<EntitySchema>) -> Self {
        Self {
            owner_field: default_owner_field(),
            table_options: default_table_options(),
            entities
        }
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the text does not match the schema model.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`] when the text does not match the schema model.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a document, choosing the format by file extension.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the file cannot be read
    /// - [`Error::UnsupportedFormat`] for extensions other than `json`/`toml`
    /// - [`Error::Json`] / [`Error::Toml`] on malformed content
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("toml") => Self::from_toml,
            _ => return Err(Error::UnsupportedFormat(path.to_path_buf()))
        };

        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let document = parse(&text)?;
        debug!(
            path = %path.display(),
            entities = document.entities.len(),
            "loaded schema document"
        );
        Ok(document)
    }
}
