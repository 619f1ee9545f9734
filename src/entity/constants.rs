// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement constant generation.
//!
//! For an entity `Score`, generates:
//!
//! ```rust,ignore
//! pub const CREATE_SCORE_TABLE_SQL: &str = "CREATE TABLE scores (...) ...;";
//! const CREATE_SCORE_SQL: &str = "INSERT INTO scores (user_id, value) VALUES (?, ?);";
//! const GET_SCORE_SQL: &str = "SELECT * FROM scores WHERE id=? AND user_id=?;";
//! const GET_SCORE_KEY_SQL: &str = "SELECT id FROM scores WHERE user_id=? AND value=?;";
//! const LIST_SCORE_SQL: &str = "SELECT * FROM scores WHERE user_id=?;";
//! const UPDATE_SCORE_SQL: &str = "UPDATE scores SET user_id=?, value=? WHERE id=? AND user_id=?;";
//! const DELETE_SCORE_SQL: &str = "DELETE FROM scores WHERE id=? AND user_id=?;";
//! const CUSTOM_LIST_SCORE_SQL: &str = "SELECT * FROM scores WHERE ";
//! const CUSTOM_ID_LIST_SCORE_SQL: &str = "SELECT id FROM scores WHERE ";
//! ```
//!
//! Only the table definition is public; it is what migrations or test
//! fixtures need. `GET_..._KEY_SQL` and `UPDATE_..._SQL` are omitted when
//! the entity has nothing to look up or update.

use proc_macro2::TokenStream;
use quote::quote;

use super::Context;

/// Generates the statement constants.
pub fn generate(ctx: &Context<'_>) -> TokenStream {
    let s = &ctx.statements;

    let create_table = ctx.const_ident("CREATE", "_TABLE");
    let create_table_sql = &s.create_table;

    let private = [
        (ctx.const_ident("CREATE", ""), Some(&s.insert.sql)),
        (ctx.const_ident("GET", ""), Some(&s.get.sql)),
        (
            ctx.const_ident("GET", "_KEY"),
            s.get_generated_key.as_ref().map(|st| &st.sql)
        ),
        (ctx.const_ident("LIST", ""), Some(&s.list.sql)),
        (
            ctx.const_ident("UPDATE", ""),
            s.update.as_ref().map(|st| &st.sql)
        ),
        (ctx.const_ident("DELETE", ""), Some(&s.delete.sql)),
        (ctx.const_ident("CUSTOM_LIST", ""), Some(&s.custom_list_prefix)),
        (
            ctx.const_ident("CUSTOM_ID_LIST", ""),
            Some(&s.custom_id_list_prefix)
        )
    ];

    let private = private.iter().filter_map(|(ident, sql)| {
        sql.map(|sql| {
            quote! { const #ident: &str = #sql; }
        })
    });

    quote! {
        pub const #create_table: &str = #create_table_sql;
        #(#private)*
    }
}
