// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier derivation.
//!
//! Schema documents name entities and fields in a compact, capitalised form
//! (`UserId`, `EventType`). Columns, tables and Rust fields use the
//! delimited lowercase form (`user_id`, `event_type`).
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`to_delimited`] | `UserId` | `user_id` |
//! | [`type_name`] | `userHasVideo` | `UserHasVideo` |
//! | [`constant_name`] | `UserHasVideo` | `USER_HAS_VIDEO` |
//! | [`default_table_name`] | `category` | `categories` |
//!
//! # Acronyms
//!
//! [`to_delimited`] only splits before an uppercase letter that is followed
//! by a lowercase one, so runs of capitals are not recognised as words
//! (`HTMLParser` becomes `html_parser`, `IDs` becomes `i_ds`). Input names
//! are expected to be simple camel case.

use convert_case::{Case, Casing};
use proc_macro2::Span;
use syn::Ident;

/// Convert a compact identifier into its delimited lowercase form.
///
/// A `_` is inserted before every uppercase letter (other than the first
/// character) that is followed by a lowercase letter; the result is then
/// lowercased. Total and idempotent; the empty string maps to itself.
///
/// # Example
///
/// ```rust
/// use entity_scaffold::utils::naming::to_delimited;
///
/// assert_eq!(to_delimited("UserId"), "user_id");
/// assert_eq!(to_delimited("Id"), "id");
/// assert_eq!(to_delimited("user_id"), "user_id");
/// ```
pub fn to_delimited(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, c) in chars.iter().enumerate() {
        let starts_word = c.is_ascii_uppercase()
            && chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase());
        if i > 0 && starts_word {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Name of the generated record type (`score` → `Score`).
pub fn type_name(entity: &str) -> String {
    entity.to_case(Case::Pascal)
}

/// Prefix of the generated statement constants (`UserHasVideo` →
/// `USER_HAS_VIDEO`).
pub fn constant_name(type_name: &str) -> String {
    to_delimited(type_name).to_uppercase()
}

/// Table name used when an entity does not declare one.
pub fn default_table_name(entity: &str) -> String {
    pluralize(&to_delimited(&type_name(entity)))
}

/// Simple English pluralization for table names.
fn pluralize(s: &str) -> String {
    if s.ends_with('s') || s.ends_with("sh") || s.ends_with("ch") || s.ends_with('x') {
        format!("{}es", s)
    } else if s.ends_with('y') && !s.ends_with("ay") && !s.ends_with("ey") && !s.ends_with("oy") {
        format!("{}ies", &s[..s.len() - 1])
    } else {
        format!("{}s", s)
    }
}

/// Check that `name` only contains identifier characters.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false
    }
}

/// Rust identifier for a delimited name.
///
/// Keywords become raw identifiers (`type` → `r#type`). Returns `None` for
/// names that cannot be identifiers at all, including `_` and the path
/// keywords (`self`, `super`, `crate`, `Self`).
pub fn rust_ident(name: &str) -> Option<Ident> {
    if !is_identifier(name) || matches!(name, "_" | "self" | "super" | "crate" | "Self") {
        return None;
    }

    match syn::parse_str::<Ident>(name) {
        Ok(ident) => Some(ident),
        Err(_) => Some(Ident::new_raw(name, Span::call_site()))
    }
}
