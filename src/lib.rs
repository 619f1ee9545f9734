// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # entity-scaffold
//!
//! Schema-driven generation of MySQL data-access code.
//!
//! A schema document declares entities, their fields and the SQL annotation
//! of each column. For every entity the generator emits one Rust file with:
//!
//! - the `CREATE TABLE` definition and the CRUD statements,
//! - a record type (`serde` + `sqlx::FromRow`),
//! - a `{Name}Manager` over `sqlx::MySqlPool` whose operations report
//!   status codes through the reply and error types of
//!   [`entity_scaffold_core`], optionally scoped to an owning user.
//!
//! ## Quick Start
//!
//! ```rust
//! use entity_scaffold::{Document, Formatting, generate_document};
//!
//! let document = Document::from_json(r#"{
//!     "models": [{
//!         "name": "score",
//!         "fields": [
//!             { "name": "Id", "type": "u32", "sql": "BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY" },
//!             { "name": "UserId", "type": "u32", "sql": "BIGINT UNSIGNED NOT NULL" },
//!             { "name": "Value", "type": "i32", "sql": "INT NOT NULL" }
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! let generated = generate_document(&document, Formatting::Raw);
//! let score = generated[0].as_ref().unwrap();
//! assert_eq!(score.file_name, "score_model.generated.rs");
//! assert!(score.source.contains("ScoreManager"));
//! ```
//!
//! Generates: `CREATE_SCORE_TABLE_SQL`, the private statement constants,
//! `Score`, and `ScoreManager` with `create`, `get`, `list`, `update`,
//! `delete`, `custom_list`, `custom_id_list` and `custom_sql`.
//!
//! [`entity_scaffold_core`]: https://docs.rs/entity-scaffold-core

pub mod entity;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod utils;

pub use error::{Error, Result};
pub use pipeline::{GeneratedEntity, generate_document, generate_entity, write_document};
pub use render::Formatting;
pub use schema::{Document, EntitySchema, FieldSpec};
