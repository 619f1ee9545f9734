// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record type generation.
//!
//! For an entity `Score`, generates:
//!
//! ```rust,ignore
//! use ::serde::{Deserialize, Serialize};
//! use ::sqlx::FromRow;
//!
//! #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
//! pub struct Score {
//!     #[serde(rename = "id", alias = "Id")]
//!     pub id: u32,
//!     #[serde(rename = "user_id", alias = "UserId")]
//!     pub user_id: u32,
//!     #[serde(rename = "value", alias = "Value")]
//!     pub value: i32,
//! }
//!
//! impl Score {
//!     pub const TABLE: &'static str = "scores";
//!     pub const COLUMNS: &'static [(&'static str, &'static str)] =
//!         &[("Id", "id"), ("UserId", "user_id"), ("Value", "value")];
//! }
//!
//! impl Display for Score { /* "Id: 1, UserId: 7, Value: 42" */ }
//! ```
//!
//! The struct field, column and serialized name are all the delimited form;
//! the compact form is accepted on input. Fields whose column is a Rust
//! keyword get a raw identifier and an explicit `sqlx` rename.

use proc_macro2::TokenStream;
use quote::quote;

use super::Context;

/// Imports of the derive macros, placed at the top of the generated file.
pub fn imports() -> TokenStream {
    quote! {
        use ::serde::{Deserialize, Serialize};
        use ::sqlx::FromRow;
    }
}

/// Generates the record struct, its associated constants and `Display`.
pub fn generate(ctx: &Context<'_>) -> TokenStream {
    let record = &ctx.record;
    let table = &ctx.table;

    let fields = ctx.fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        let column = f.spec.column();
        let compact = &f.spec.name;
        let sqlx_rename = ident
            .to_string()
            .starts_with("r#")
            .then(|| quote! { #[sqlx(rename = #column)] });

        if *compact == column {
            quote! {
                #[serde(rename = #column)]
                #sqlx_rename
                pub #ident: #ty
            }
        } else {
            quote! {
                #[serde(rename = #column, alias = #compact)]
                #sqlx_rename
                pub #ident: #ty
            }
        }
    });

    let columns = ctx.fields.iter().map(|f| {
        let compact = &f.spec.name;
        let column = f.spec.column();
        quote! { (#compact, #column) }
    });

    let format = ctx
        .fields
        .iter()
        .map(|f| format!("{}: {{:?}}", f.spec.name))
        .collect::<Vec<_>>()
        .join(", ");
    let values = ctx.fields.iter().map(|f| {
        let ident = &f.ident;
        quote! { self.#ident }
    });

    quote! {
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
        pub struct #record {
            #(#fields),*
        }

        impl #record {
            /// Table the record is stored in.
            pub const TABLE: &'static str = #table;

            /// `(compact, delimited)` name of every field, in declared order.
            pub const COLUMNS: &'static [(&'static str, &'static str)] = &[#(#columns),*];
        }

        impl ::core::fmt::Display for #record {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, #format, #(#values),*)
            }
        }
    }
}
