// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity declarations.

use serde::{Deserialize, Serialize};

use super::field::FieldSpec;
use crate::utils::naming::{default_table_name, to_delimited, type_name};

/// One entity of the schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Entity name (`score`, `userHasVideo`).
    pub name: String,

    /// Explicit table name. Defaults to the pluralised delimited name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    /// Fields in declared order. Column, parameter and binding order all
    /// follow this order.
    pub fields: Vec<FieldSpec>
}

impl EntitySchema {
    /// Create an entity with the default table name.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            table: None,
            fields
        }
    }

    /// Override the table name.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Table the entity is stored in.
    pub fn table_name(&self) -> String {
        self.table
            .clone()
            .unwrap_or_else(|| default_table_name(&self.name))
    }

    /// Name of the generated record type (`Score`).
    pub fn type_name(&self) -> String {
        type_name(&self.name)
    }

    /// Lowercase name used in file names (`score`, `user_has_video`).
    pub fn display_name(&self) -> String {
        to_delimited(&self.type_name())
    }

    /// Find a field by compact name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
