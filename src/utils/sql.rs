// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL text building utilities.
//!
//! Statements use MySQL positional placeholders (`?`), so the order of
//! columns in these fragments is the binding order.

/// Join column names with comma separator.
pub fn join_columns<S: AsRef<str>>(columns: &[S]) -> String {
    columns
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build placeholders: `?, ?, ?`
pub fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// Build SET clause: `col1=?, col2=?`
pub fn set_clause<S: AsRef<str>>(columns: &[S]) -> String {
    columns
        .iter()
        .map(|c| format!("{}=?", c.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build AND-joined equality predicate: `col1=? AND col2=?`
pub fn and_predicate<S: AsRef<str>>(columns: &[S]) -> String {
    columns
        .iter()
        .map(|c| format!("{}=?", c.as_ref()))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Count positional placeholders in a statement.
pub fn placeholder_count(sql: &str) -> usize {
    sql.matches('?').count()
}
