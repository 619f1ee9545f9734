// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement synthesis.
//!
//! Turns a [`Classification`] into the fixed set of SQL statements an entity
//! needs. Every parameterized statement carries its binding plan next to its
//! text, so the emitters bind exactly the values the placeholders expect, in
//! the order they appear.
//!
//! # Statements
//!
//! | Statement | Pattern | Parameters |
//! |-----------|---------|------------|
//! | create-table | `CREATE TABLE t (\n    col sql,\n...\n) opts;` | none |
//! | insert | `INSERT INTO t (c1, c2) VALUES (?, ?);` | creatable fields |
//! | get | `SELECT * FROM t WHERE key=? AND owner=?;` | key, owner |
//! | get-generated-key | `SELECT g FROM t WHERE c1=? AND c2=?;` | creatable fields |
//! | list | `SELECT * FROM t WHERE owner=?;` | owner |
//! | update | `UPDATE t SET c=?, d=? WHERE key=? AND owner=?;` | non-key fields, key, owner |
//! | delete | `DELETE FROM t WHERE key=? AND owner=?;` | key, owner |
//!
//! The owner predicate on get, update and delete appears only when the
//! ownership field exists and is not the key. The list filter appears
//! whenever an ownership field exists.

use super::classify::Classification;
use crate::{
    schema::FieldSpec,
    utils::sql::{and_predicate, join_columns, placeholders, set_clause}
};

/// Source of one bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param<'a> {
    /// Field of the record passed in.
    Field(&'a FieldSpec),

    /// Primary key value.
    Key,

    /// Ownership value passed by the caller.
    Owner
}

/// A parameterized statement and its binding plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    /// SQL text with `?` placeholders.
    pub sql:    String,
    /// One entry per placeholder, in placeholder order.
    pub params: Vec<Param<'a>>
}

impl<'a> Statement<'a> {
    fn new(sql: String, params: Vec<Param<'a>>) -> Self {
        debug_assert_eq!(crate::utils::sql::placeholder_count(&sql), params.len());
        Self {
            sql,
            params
        }
    }
}

/// Every statement of one entity.
#[derive(Debug, Clone)]
pub struct StatementSet<'a> {
    /// `CREATE TABLE` definition.
    pub create_table:          String,
    /// Insert of the creatable fields.
    pub insert:                Statement<'a>,
    /// Fetch by key.
    pub get:                   Statement<'a>,
    /// Lookup of generated columns after an insert conflict.
    pub get_generated_key:     Option<Statement<'a>>,
    /// Fetch all, scoped by owner when there is one.
    pub list:                  Statement<'a>,
    /// Update of every non-key field. Absent without non-key fields.
    pub update:                Option<Statement<'a>>,
    /// Delete by key.
    pub delete:                Statement<'a>,
    /// Prefix completed by a caller predicate.
    pub custom_list_prefix:    String,
    /// Key-only prefix completed by a caller predicate.
    pub custom_id_list_prefix: String
}

/// Build every statement for a classified entity.
pub fn synthesize<'a>(c: &Classification<'a>, table_options: &str) -> StatementSet<'a> {
    let table = c.entity.table_name();
    let key = c.key.column();
    let (keyed_where, keyed_params) = match c.keyed_owner() {
        Some(owner) => (format!("{key}=? AND {}=?", owner.column()), vec![Param::Key, Param::Owner]),
        None => (format!("{key}=?"), vec![Param::Key])
    };

    let creatable = columns(&c.creatable);

    let insert = Statement::new(
        format!(
            "INSERT INTO {table} ({}) VALUES ({});",
            join_columns(&creatable),
            placeholders(creatable.len())
        ),
        field_params(&c.creatable)
    );

    let get = Statement::new(
        format!("SELECT * FROM {table} WHERE {keyed_where};"),
        keyed_params.clone()
    );

    let get_generated_key = (!c.generated.is_empty() && !c.creatable.is_empty()).then(|| {
        Statement::new(
            format!(
                "SELECT {} FROM {table} WHERE {};",
                join_columns(&columns(&c.generated)),
                and_predicate(&creatable)
            ),
            field_params(&c.creatable)
        )
    });

    let list = match c.ownership {
        Some(owner) => Statement::new(
            format!("SELECT * FROM {table} WHERE {}=?;", owner.column()),
            vec![Param::Owner]
        ),
        None => Statement::new(format!("SELECT * FROM {table};"), Vec::new())
    };

    let update = (!c.non_key.is_empty()).then(|| {
        let mut params = field_params(&c.non_key);
        params.extend(keyed_params.iter().copied());
        Statement::new(
            format!(
                "UPDATE {table} SET {} WHERE {keyed_where};",
                set_clause(&columns(&c.non_key))
            ),
            params
        )
    });

    let delete = Statement::new(
        format!("DELETE FROM {table} WHERE {keyed_where};"),
        keyed_params
    );

    StatementSet {
        create_table: create_table(c, &table, table_options),
        insert,
        get,
        get_generated_key,
        list,
        update,
        delete,
        custom_list_prefix: format!("SELECT * FROM {table} WHERE "),
        custom_id_list_prefix: format!("SELECT {key} FROM {table} WHERE ")
    }
}

fn columns(fields: &[&FieldSpec]) -> Vec<String> {
    fields.iter().map(|f| f.column()).collect()
}

fn field_params<'a>(fields: &[&'a FieldSpec]) -> Vec<Param<'a>> {
    fields.iter().copied().map(Param::Field).collect()
}

fn create_table(c: &Classification<'_>, table: &str, table_options: &str) -> String {
    let definitions: Vec<String> = c
        .entity
        .fields
        .iter()
        .map(|f| format!("    {} {}", f.column(), f.sql()))
        .collect();
    let options = table_options.trim();
    let suffix = if options.is_empty() {
        String::new()
    } else {
        format!(" {options}")
    };

    format!(
        "CREATE TABLE {table} (\n{}\n){suffix};",
        definitions.join(",\n")
    )
}
