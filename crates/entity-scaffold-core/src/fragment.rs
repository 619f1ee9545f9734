// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL text accepted by the custom query operations.

use std::{borrow::Cow, fmt};

/// SQL text that is concatenated into a statement without escaping.
///
/// `custom_list` and `custom_id_list` append the fragment after a fixed
/// `SELECT ... FROM <table> WHERE ` prefix; `custom_sql` runs it as a
/// complete statement. Nothing validates or escapes it.
///
/// Callers must never build a fragment from untrusted input. Values that
/// come from a request belong in the generated typed operations, which
/// bind them as parameters.
///
/// # Example
///
/// ```rust
/// use entity_scaffold_core::TrustedFragment;
///
/// const SOLVED: TrustedFragment = TrustedFragment::from_static("solved = 1");
/// assert_eq!(SOLVED.as_str(), "solved = 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrustedFragment(Cow<'static, str>);

impl TrustedFragment {
    /// Fragment from a string literal.
    pub const fn from_static(sql: &'static str) -> Self {
        Self(Cow::Borrowed(sql))
    }

    /// Fragment built at runtime.
    ///
    /// The caller vouches that `sql` contains no untrusted input.
    pub fn trusted(sql: impl Into<String>) -> Self {
        Self(Cow::Owned(sql.into()))
    }

    /// SQL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrustedFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
