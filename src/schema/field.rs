// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field declarations and value-type resolution.
//!
//! The `type` of a field is either a short alias or Rust type syntax.
//!
//! | Alias | Rust type |
//! |-------|-----------|
//! | `integer`, `int` | `i64` |
//! | `unsigned` | `u64` |
//! | `text`, `string` | `String` |
//! | `bool`, `boolean` | `bool` |
//! | `float`, `double` | `f64` |
//! | `time` | `chrono::NaiveDate` for `DATE` columns, `chrono::NaiveDateTime` otherwise |
//!
//! Anything else (`u32`, `Option<String>`, `chrono::NaiveDate`) is parsed
//! with `syn` and used as written.

use serde::{Deserialize, Serialize};
use syn::Type;

use super::constraints::{Annotation, Constraints, Temporal};
use crate::utils::naming::{rust_ident, to_delimited};

/// One declared field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Compact name (`UserId`).
    pub name: String,

    /// Value type alias or Rust type syntax.
    #[serde(rename = "type")]
    pub ty: String,

    /// Raw SQL annotation with its parsed constraints.
    #[serde(rename = "sql", alias = "constraints", default)]
    pub annotation: Annotation
}

impl FieldSpec {
    /// Create a field from its three declared parts.
    pub fn new(name: impl Into<String>, ty: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            ty:         ty.into(),
            annotation: Annotation::new(sql)
        }
    }

    /// Column name (`user_id`).
    pub fn column(&self) -> String {
        to_delimited(&self.name)
    }

    /// Raw SQL annotation.
    pub fn sql(&self) -> &str {
        self.annotation.raw()
    }

    /// Parsed constraint flags.
    pub const fn constraints(&self) -> &Constraints {
        self.annotation.constraints()
    }

    /// Rust identifier of the generated struct field.
    pub fn ident(&self) -> Option<syn::Ident> {
        rust_ident(&self.column())
    }

    /// Resolve the value type to a Rust type.
    ///
    /// # Errors
    ///
    /// Returns the parser error when the text is neither an alias nor valid
    /// Rust type syntax.
    pub fn rust_type(&self) -> syn::Result<Type> {
        let text = match self.ty.trim() {
            "integer" | "int" => "i64",
            "unsigned" => "u64",
            "text" | "string" => "String",
            "bool" | "boolean" => "bool",
            "float" | "double" => "f64",
            "time" => match self.constraints().temporal {
                Some(Temporal::Date) => "::chrono::NaiveDate",
                _ => "::chrono::NaiveDateTime"
            },
            other => other
        };
        syn::parse_str(text)
    }
}
