// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`naming`]: Identifier derivation (compact ⇄ delimited, type and
//!   constant names, default table names)
//! - [`sql`]: SQL text fragments (column lists, placeholders, predicates)

pub mod naming;
pub mod sql;
