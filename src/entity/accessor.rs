// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Manager generation.
//!
//! Generates `{Name}Manager`, a data-access layer over an externally owned
//! `sqlx::MySqlPool`. Every operation returns
//! `entity_scaffold_core::AccessResult<T>`: a status-tagged value on
//! success, an [`AccessError`] carrying status, message and cause on
//! failure.
//!
//! # Generated Implementation
//!
//! ```rust,ignore
//! pub struct ScoreManager { pool: sqlx::MySqlPool }
//!
//! impl ScoreManager {
//!     pub fn new(pool: sqlx::MySqlPool) -> Self;
//!     pub fn pool(&self) -> &sqlx::MySqlPool;
//!     pub async fn create(&self, model: &mut Score) -> AccessResult<()>;
//!     pub async fn get(&self, id: u32, user_id: u32) -> AccessResult<Score>;
//!     pub async fn list(&self, user_id: u32) -> AccessResult<Vec<Score>>;
//!     pub async fn update(&self, model: &Score, user_id: u32) -> AccessResult<()>;
//!     pub async fn delete(&self, id: u32, user_id: u32) -> AccessResult<()>;
//!     pub async fn custom_list(&self, predicate: &TrustedFragment) -> AccessResult<Vec<Score>>;
//!     pub async fn custom_id_list(&self, predicate: &TrustedFragment) -> AccessResult<Vec<u32>>;
//!     pub async fn custom_sql(&self, statement: &TrustedFragment) -> AccessResult<()>;
//! }
//! ```
//!
//! # Status Conventions
//!
//! | Method | Success | Failure |
//! |--------|---------|---------|
//! | `create` | `Created`; `Ok` when a duplicate entry resolved to the existing row | `InternalServerError` |
//! | `get` | `Ok` | `NotFound` when no row matches, `InternalServerError` otherwise |
//! | `list`, `custom_list`, `custom_id_list` | `Ok`, possibly empty | `InternalServerError` |
//! | `update` | `Ok` | whatever `get` reported, then `InternalServerError` |
//! | `delete` | `NoContent` | `NotFound` when no row was affected, `InternalServerError` otherwise |
//! | `custom_sql` | `Ok` | `BadRequest` |
//!
//! # Ownership
//!
//! `get`, `update` and `delete` take the owner argument only when the
//! ownership field exists and is not the key. `list` takes it whenever the
//! ownership field exists.
//!
//! [`AccessError`]: https://docs.rs/entity-scaffold-core

use proc_macro2::TokenStream;
use quote::quote;

use super::{Context, Resolved};

/// Generates the manager struct and its operations.
pub fn generate(ctx: &Context<'_>) -> TokenStream {
    let Some(key) = ctx.key() else {
        return TokenStream::new();
    };
    let manager = &ctx.manager;
    let ops = Operations {
        ctx,
        key
    };

    let create = ops.create();
    let get = ops.get();
    let list = ops.list();
    let update = ops.update();
    let delete = ops.delete();
    let custom_list = ops.custom_list();
    let custom_id_list = ops.custom_id_list();
    let custom_sql = ops.custom_sql();
    let list_error = ops.list_error();

    quote! {
        /// Data access for the table, over a pool owned by the caller.
        #[derive(Debug, Clone)]
        pub struct #manager {
            pool: ::sqlx::MySqlPool
        }

        impl #manager {
            /// Wrap an existing pool.
            pub fn new(pool: ::sqlx::MySqlPool) -> Self {
                Self { pool }
            }

            /// Underlying pool.
            pub fn pool(&self) -> &::sqlx::MySqlPool {
                &self.pool
            }

            #create
            #get
            #list
            #update
            #delete
            #custom_list
            #custom_id_list
            #custom_sql
            #list_error
        }
    }
}

/// Method generators sharing the context and the resolved key.
struct Operations<'c, 'a> {
    ctx: &'c Context<'a>,
    key: &'c Resolved<'a>
}

impl Operations<'_, '_> {
    fn msg_add(&self) -> String {
        format!("Couldn't add {} to database", self.ctx.display)
    }

    fn msg_not_found(&self) -> String {
        format!(
            "Couldn't find a {} with that {}",
            self.ctx.display,
            self.key.spec.column()
        )
    }

    /// `, user_id: u32` for keyed operations, when scoped.
    fn owner_param(&self) -> TokenStream {
        match self.ctx.keyed_owner() {
            Some(owner) => {
                let ident = &owner.ident;
                let ty = &owner.ty;
                quote! { , #ident: #ty }
            }
            None => TokenStream::new()
        }
    }

    fn create(&self) -> TokenStream {
        let Self {
            ctx,
            key
        } = self;
        let record = &ctx.record;
        let sql = ctx.const_ident("CREATE", "");
        let binds = ctx.binds(&ctx.statements.insert, false);
        let msg = self.msg_add();
        let display = &ctx.display;

        let on_insert = if ctx.classification.key_is_auto_generated {
            let key_ident = &key.ident;
            let key_ty = &key.ty;
            quote! {
                Ok(done) => {
                    model.#key_ident = <#key_ty as ::core::convert::TryFrom<u64>>::try_from(
                        done.last_insert_id()
                    )
                    .map_err(|err| ::entity_scaffold_core::AccessError::server(#msg, err))?;
                    Ok(::entity_scaffold_core::Reply::created(()))
                }
            }
        } else {
            quote! {
                Ok(_) => Ok(::entity_scaffold_core::Reply::created(())),
            }
        };

        let recover = ctx.statements.get_generated_key.as_ref().map(|lookup| {
            let lookup_sql = ctx.const_ident("GET", "_KEY");
            let lookup_binds = ctx.binds(lookup, false);
            let assigns = ctx.classification.generated.iter().filter_map(|spec| {
                let ident = &ctx.resolved(spec)?.ident;
                let column = spec.column();
                Some(quote! {
                    model.#ident = ::sqlx::Row::try_get(&row, #column)
                        .map_err(|err| ::entity_scaffold_core::AccessError::server(#msg, err))?;
                })
            });
            quote! {
                let row = ::sqlx::query(#lookup_sql)
                    #lookup_binds
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|err| ::entity_scaffold_core::AccessError::server(#msg, err))?;
                #(#assigns)*
            }
        });

        quote! {
            /// Insert `model`.
            ///
            /// On a duplicate entry the generated columns of the existing row
            /// are copied into `model` and the status is `Ok` instead of
            /// `Created`.
            pub async fn create(
                &self,
                model: &mut #record
            ) -> ::entity_scaffold_core::AccessResult<()> {
                let result = ::sqlx::query(#sql)
                    #binds
                    .execute(&self.pool)
                    .await;
                match result {
                    #on_insert
                    Err(err) if ::entity_scaffold_core::storage::is_duplicate_entry(&err) => {
                        ::entity_scaffold_core::storage::recovered_conflict(#display, &err);
                        #recover
                        Ok(::entity_scaffold_core::Reply::ok(()))
                    }
                    Err(err) => Err(::entity_scaffold_core::AccessError::server(#msg, err))
                }
            }
        }
    }

    fn get(&self) -> TokenStream {
        let Self {
            ctx,
            key
        } = self;
        let record = &ctx.record;
        let key_ident = &key.ident;
        let key_ty = &key.ty;
        let owner_param = self.owner_param();
        let sql = ctx.const_ident("GET", "");
        let binds = ctx.binds(&ctx.statements.get, false);
        let not_found = self.msg_not_found();
        let msg = format!("Couldn't get {} from database", ctx.display);

        quote! {
            /// Fetch one record by key.
            pub async fn get(
                &self,
                #key_ident: #key_ty
                #owner_param
            ) -> ::entity_scaffold_core::AccessResult<#record> {
                ::sqlx::query_as::<_, #record>(#sql)
                    #binds
                    .fetch_one(&self.pool)
                    .await
                    .map(::entity_scaffold_core::Reply::ok)
                    .map_err(|err| {
                        if ::entity_scaffold_core::storage::is_no_rows(&err) {
                            ::entity_scaffold_core::AccessError::not_found(#not_found)
                                .with_cause(err)
                        } else {
                            ::entity_scaffold_core::AccessError::server(#msg, err)
                        }
                    })
            }
        }
    }

    fn list(&self) -> TokenStream {
        let ctx = self.ctx;
        let record = &ctx.record;
        let sql = ctx.const_ident("LIST", "");
        let binds = ctx.binds(&ctx.statements.list, false);
        let owner_param = ctx.list_owner().map(|owner| {
            let ident = &owner.ident;
            let ty = &owner.ty;
            quote! { , #ident: #ty }
        });

        quote! {
            /// Fetch every record, scoped to the owner when the table has one.
            pub async fn list(
                &self
                #owner_param
            ) -> ::entity_scaffold_core::AccessResult<::std::vec::Vec<#record>> {
                ::sqlx::query_as::<_, #record>(#sql)
                    #binds
                    .fetch_all(&self.pool)
                    .await
                    .map(::entity_scaffold_core::Reply::ok)
                    .map_err(Self::list_error)
            }
        }
    }

    fn update(&self) -> TokenStream {
        let Self {
            ctx,
            key
        } = self;
        let record = &ctx.record;
        let key_ident = &key.ident;
        let owner_param = self.owner_param();
        let owner_arg = ctx.keyed_owner().map(|owner| {
            let ident = &owner.ident;
            quote! { , ::core::clone::Clone::clone(&#ident) }
        });

        let write = ctx.statements.update.as_ref().map(|update| {
            let sql = ctx.const_ident("UPDATE", "");
            let binds = ctx.binds(update, true);
            let msg = format!("Couldn't update {} in database", ctx.display);
            quote! {
                ::sqlx::query(#sql)
                    #binds
                    .execute(&self.pool)
                    .await
                    .map_err(|err| ::entity_scaffold_core::AccessError::server(#msg, err))?;
            }
        });

        quote! {
            /// Write every non-key field of `model`.
            ///
            /// Fails with the status of [`Self::get`] when the row does not
            /// exist or is not visible to the owner.
            pub async fn update(
                &self,
                model: &#record
                #owner_param
            ) -> ::entity_scaffold_core::AccessResult<()> {
                self.get(::core::clone::Clone::clone(&model.#key_ident) #owner_arg).await?;
                #write
                Ok(::entity_scaffold_core::Reply::ok(()))
            }
        }
    }

    fn delete(&self) -> TokenStream {
        let Self {
            ctx,
            key
        } = self;
        let key_ident = &key.ident;
        let key_ty = &key.ty;
        let owner_param = self.owner_param();
        let sql = ctx.const_ident("DELETE", "");
        let binds = ctx.binds(&ctx.statements.delete, false);
        let not_found = self.msg_not_found();
        let msg = format!("Couldn't delete {} in database", ctx.display);

        quote! {
            /// Delete one record by key.
            pub async fn delete(
                &self,
                #key_ident: #key_ty
                #owner_param
            ) -> ::entity_scaffold_core::AccessResult<()> {
                let done = ::sqlx::query(#sql)
                    #binds
                    .execute(&self.pool)
                    .await
                    .map_err(|err| ::entity_scaffold_core::AccessError::server(#msg, err))?;
                if done.rows_affected() == 0 {
                    return Err(::entity_scaffold_core::AccessError::not_found(#not_found));
                }
                Ok(::entity_scaffold_core::Reply::no_content())
            }
        }
    }

    fn custom_list(&self) -> TokenStream {
        let ctx = self.ctx;
        let record = &ctx.record;
        let prefix = ctx.const_ident("CUSTOM_LIST", "");

        quote! {
            /// Fetch the records matching `predicate`.
            ///
            /// `predicate` is appended verbatim after `WHERE`.
            pub async fn custom_list(
                &self,
                predicate: &::entity_scaffold_core::TrustedFragment
            ) -> ::entity_scaffold_core::AccessResult<::std::vec::Vec<#record>> {
                let sql = ::std::format!("{}{}", #prefix, predicate);
                ::sqlx::query_as::<_, #record>(&sql)
                    .fetch_all(&self.pool)
                    .await
                    .map(::entity_scaffold_core::Reply::ok)
                    .map_err(Self::list_error)
            }
        }
    }

    fn custom_id_list(&self) -> TokenStream {
        let prefix = self.ctx.const_ident("CUSTOM_ID_LIST", "");
        let key_ty = &self.key.ty;

        quote! {
            /// Fetch the keys of the records matching `predicate`.
            ///
            /// `predicate` is appended verbatim after `WHERE`.
            pub async fn custom_id_list(
                &self,
                predicate: &::entity_scaffold_core::TrustedFragment
            ) -> ::entity_scaffold_core::AccessResult<::std::vec::Vec<#key_ty>> {
                let sql = ::std::format!("{}{}", #prefix, predicate);
                ::sqlx::query_scalar::<_, #key_ty>(&sql)
                    .fetch_all(&self.pool)
                    .await
                    .map(::entity_scaffold_core::Reply::ok)
                    .map_err(Self::list_error)
            }
        }
    }

    fn custom_sql(&self) -> TokenStream {
        let msg = format!("Couldn't run sql for {} in database", self.ctx.record);

        quote! {
            /// Run an arbitrary statement.
            pub async fn custom_sql(
                &self,
                statement: &::entity_scaffold_core::TrustedFragment
            ) -> ::entity_scaffold_core::AccessResult<()> {
                ::sqlx::query(statement.as_str())
                    .execute(&self.pool)
                    .await
                    .map(|_| ::entity_scaffold_core::Reply::ok(()))
                    .map_err(|err| ::entity_scaffold_core::AccessError::bad_request(#msg, err))
            }
        }
    }

    fn list_error(&self) -> TokenStream {
        let msg = format!("Couldn't get {} from database", self.ctx.table);

        quote! {
            fn list_error(err: ::sqlx::Error) -> ::entity_scaffold_core::AccessError {
                if ::entity_scaffold_core::storage::is_scan_error(&err) {
                    ::entity_scaffold_core::AccessError::server("Couldn't scan row from database", err)
                } else {
                    ::entity_scaffold_core::AccessError::server(#msg, err)
                }
            }
        }
    }
}
