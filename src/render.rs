// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source text rendering.
//!
//! Turns generated tokens into the text of one file: a `@generated` header
//! followed by the code, optionally formatted with `rustfmt`. When `rustfmt`
//! is unavailable or rejects the input, the unformatted text is used.
//! Formatted output writes doc attributes back as `///` comments.
//!
//! Rendering is deterministic: identical tokens produce identical text in
//! the same environment.

use std::{
    io::Write,
    process::{Command, Stdio}
};

use proc_macro2::TokenStream;
use tracing::debug;

/// How generated code is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Formatting {
    /// Pipe through `rustfmt`, falling back to [`Formatting::Raw`].
    #[default]
    Rustfmt,

    /// Token text as produced, without line breaks.
    Raw
}

/// Render the text of a generated file.
pub fn render(entity: &str, tokens: &TokenStream, requires_chrono: bool, formatting: Formatting) -> String {
    let code = tokens.to_string();
    let body = match formatting {
        Formatting::Rustfmt => rustfmt(&code).map_or(code, |formatted| doc_comments(&formatted)),
        Formatting::Raw => code
    };

    let mut source = header(entity, requires_chrono);
    source.push_str(&body);
    if !source.ends_with('\n') {
        source.push('\n');
    }
    source
}

/// Comment block at the top of every generated file.
pub fn header(entity: &str, requires_chrono: bool) -> String {
    let mut dependencies = vec!["entity-scaffold-core", "serde", "sqlx (mysql)"];
    if requires_chrono {
        dependencies.push("chrono");
    }

    format!(
        "// @generated by entity-scaffold from entity `{entity}`. Do not edit.\n\
         // Requires: {}.\n\n",
        dependencies.join(", ")
    )
}

/// Format code with `rustfmt`, or `None` if it cannot be run.
fn rustfmt(code: &str) -> Option<String> {
    let mut child = match Command::new("rustfmt")
        .args(["--edition", "2024", "--emit", "stdout"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            debug!(error = %err, "rustfmt unavailable, keeping raw output");
            return None;
        }
    };

    if let Some(mut stdin) = child.stdin.take()
        && let Err(err) = stdin.write_all(code.as_bytes())
    {
        debug!(error = %err, "writing to rustfmt failed");
        return None;
    }

    let output = child.wait_with_output().ok()?;
    if !output.status.success() {
        debug!(status = %output.status, "rustfmt rejected generated code");
        return None;
    }

    String::from_utf8(output.stdout).ok()
}

/// Rewrite `#[doc = r" text"]` lines as `/// text`.
fn doc_comments(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    for line in code.lines() {
        let body = line.trim_start();
        let indent = &line[..line.len() - body.len()];
        match body
            .strip_prefix("#[doc = r\"")
            .and_then(|rest| rest.strip_suffix("\"]"))
        {
            Some(text) => {
                out.push_str(indent);
                out.push_str("///");
                out.push_str(text);
            }
            None => out.push_str(line)
        }
        out.push('\n');
    }
    out
}
