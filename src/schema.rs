// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema document model.
//!
//! A schema document declares the entities to generate. It is loaded once,
//! read-only afterwards, and every entity in it is processed independently.
//!
//! # Data Structures
//!
//! ```text
//! Document
//! ├── owner_field: String        (ownership field name, default "UserId")
//! ├── table_options: String      (appended to CREATE TABLE)
//! └── entities: Vec<EntitySchema>
//!     └── EntitySchema
//!         ├── name: String       (e.g. "score")
//!         ├── table: Option      (default: "scores")
//!         └── fields: Vec<FieldSpec>
//!             └── FieldSpec
//!                 ├── name: String        ("UserId")
//!                 ├── ty: String          ("u32", "text", "time", ...)
//!                 └── annotation          (raw SQL + parsed Constraints)
//! ```
//!
//! # Example
//!
//! ```json
//! {
//!   "models": [
//!     {
//!       "name": "score",
//!       "fields": [
//!         { "name": "Id", "type": "u32", "sql": "BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY" },
//!         { "name": "UserId", "type": "u32", "sql": "BIGINT UNSIGNED NOT NULL" },
//!         { "name": "Value", "type": "i32", "sql": "INT NOT NULL" }
//!       ]
//!     }
//!   ]
//! }
//! ```

mod constraints;
mod document;
mod entity;
mod field;

pub use constraints::{Annotation, Constraints, Temporal};
pub use document::{DEFAULT_OWNER_FIELD, DEFAULT_TABLE_OPTIONS, Document};
pub use entity::EntitySchema;
pub use field::FieldSpec;
