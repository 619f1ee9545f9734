// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-entity code generation.
//!
//! # Architecture
//!
//! ```text
//! EntitySchema ──► classify ──► Classification
//!                                    │
//!                                    ▼
//!                               synthesize ──► StatementSet
//!                                    │
//!                                    ▼
//!                               Context (idents, types, statements)
//!                                    │
//!            ┌───────────────────────┼────────────────────────┐
//!            ▼                       ▼                        ▼
//!       constants.rs             record.rs               accessor.rs
//!   (statement consts)     (struct, Display,         (Manager with eight
//!                           TABLE / COLUMNS)          operations)
//! ```
//!
//! Generation for one entity is a pure function of its declaration and the
//! document options; entities never affect each other.

mod accessor;
pub mod classify;
mod constants;
mod record;
pub mod statements;

use std::ptr;

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Ident, Type};

use self::{
    classify::{Classification, classify},
    statements::{Param, Statement, StatementSet, synthesize}
};
use crate::{
    error::{Error, Result},
    schema::{Document, EntitySchema, FieldSpec},
    utils::naming::constant_name
};

/// Generated code of one entity.
#[derive(Debug, Clone)]
pub struct EntityCode {
    /// Constants, record type and manager.
    pub tokens:          TokenStream,
    /// Whether any field type refers to `chrono`.
    pub requires_chrono: bool
}

/// Generate all code for one entity.
///
/// # Errors
///
/// Any configuration error of the entity: missing or repeated primary key,
/// duplicate fields, unusable names, or unparseable value types.
pub fn generate(entity: &EntitySchema, document: &Document) -> Result<EntityCode> {
    let ctx = Context::new(entity, document)?;

    let imports = record::imports();
    let constants = constants::generate(&ctx);
    let record = record::generate(&ctx);
    let manager = accessor::generate(&ctx);

    Ok(EntityCode {
        tokens:          quote! {
            #imports
            #constants
            #record
            #manager
        },
        requires_chrono: ctx.requires_chrono()
    })
}

/// A field with its Rust identifier and type resolved.
struct Resolved<'a> {
    spec:  &'a FieldSpec,
    ident: Ident,
    ty:    Type
}

/// Context for entity code generation.
///
/// Precomputes identifiers, types and statements shared by the emitters.
struct Context<'a> {
    classification: Classification<'a>,
    statements:     StatementSet<'a>,
    fields:         Vec<Resolved<'a>>,
    record:         Ident,
    manager:        Ident,
    constant:       String,
    /// Entity name as declared, used in messages.
    display:        String,
    table:          String
}

impl<'a> Context<'a> {
    fn new(entity: &'a EntitySchema, document: &Document) -> Result<Self> {
        let classification = classify(entity, &document.owner_field)?;
        let statements = synthesize(&classification, &document.table_options);
        let fields = entity
            .fields
            .iter()
            .map(|spec| resolve(entity, spec))
            .collect::<Result<Vec<_>>>()?;
        let type_name = entity.type_name();

        Ok(Self {
            classification,
            statements,
            fields,
            record: format_ident!("{}", type_name),
            manager: format_ident!("{}Manager", type_name),
            constant: constant_name(&type_name),
            display: entity.name.clone(),
            table: entity.table_name()
        })
    }

    /// Identifier of a statement constant (`GET` → `GET_SCORE_SQL`).
    fn const_ident(&self, verb: &str, suffix: &str) -> Ident {
        format_ident!("{}_{}{}_SQL", verb, self.constant, suffix)
    }

    fn resolved(&self, spec: &FieldSpec) -> Option<&Resolved<'a>> {
        self.fields.iter().find(|f| ptr::eq(f.spec, spec))
    }

    fn key(&self) -> Option<&Resolved<'a>> {
        self.resolved(self.classification.key)
    }

    /// Ownership field scoping keyed operations.
    fn keyed_owner(&self) -> Option<&Resolved<'a>> {
        self.classification
            .keyed_owner()
            .and_then(|owner| self.resolved(owner))
    }

    /// Ownership field filtering `list`.
    fn list_owner(&self) -> Option<&Resolved<'a>> {
        self.classification
            .ownership
            .and_then(|owner| self.resolved(owner))
    }

    /// `.bind(..)` calls for a statement, in placeholder order.
    ///
    /// Fields are read from `model`. The key comes from `model` when
    /// `key_from_model` is set and from the key argument otherwise. The
    /// owner always comes from the owner argument.
    fn binds(&self, statement: &Statement<'_>, key_from_model: bool) -> TokenStream {
        let binds = statement.params.iter().filter_map(|param| {
            let value = match param {
                Param::Field(spec) => {
                    let ident = &self.resolved(spec)?.ident;
                    quote! { &model.#ident }
                }
                Param::Key => {
                    let ident = &self.key()?.ident;
                    if key_from_model {
                        quote! { &model.#ident }
                    } else {
                        quote! { &#ident }
                    }
                }
                Param::Owner => {
                    let ident = &self.list_owner()?.ident;
                    quote! { &#ident }
                }
            };
            Some(quote! { .bind(#value) })
        });
        quote! { #(#binds)* }
    }

    fn requires_chrono(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.ty.to_token_stream().to_string().contains("chrono"))
    }
}

fn resolve<'a>(entity: &EntitySchema, spec: &'a FieldSpec) -> Result<Resolved<'a>> {
    let ident = spec.ident().ok_or_else(|| Error::InvalidIdentifier {
        entity: entity.name.clone(),
        name:   spec.name.clone()
    })?;
    let ty = spec.rust_type().map_err(|source| Error::InvalidType {
        entity: entity.name.clone(),
        field: spec.name.clone(),
        ty: spec.ty.clone(),
        source
    })?;

    Ok(Resolved {
        spec,
        ident,
        ty
    })
}
