// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use entity_scaffold_core::prelude::*;
//! ```

pub use crate::{AccessError, AccessResult, Cause, Reply, Status, TrustedFragment};
