// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field classification.
//!
//! Partitions the fields of one entity into the roles the statement
//! synthesizer and emitters consume. Works on parsed [`Constraints`] only;
//! the raw annotation text is never inspected here.
//!
//! # Roles
//!
//! | Set | Membership |
//! |-----|------------|
//! | `key` | the single `primary_key` field |
//! | `unique` | `unique` |
//! | `ownership` | first field named like the document's owner field |
//! | `creatable` | neither `auto_generated` nor `has_default` |
//! | `non_key` | every field except the key |
//! | `generated` | `auto_generated` |
//! | `temporal` | `temporal.is_some()` |
//!
//! An auto-generated field with a default is generated, not defaulted.
//! Every set keeps declared order.
//!
//! [`Constraints`]: crate::schema::Constraints

use std::collections::HashMap;

use syn::Type;

use crate::{
    error::{Error, Result},
    schema::{EntitySchema, FieldSpec},
    utils::naming::{is_identifier, rust_ident}
};

/// Roles of the fields of one entity.
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    /// Entity the classification was built from.
    pub entity: &'a EntitySchema,

    /// Primary key field.
    pub key: &'a FieldSpec,

    /// Whether the key is assigned by the database.
    pub key_is_auto_generated: bool,

    /// Fields with a uniqueness constraint.
    pub unique: Vec<&'a FieldSpec>,

    /// Field scoping rows to an owner.
    pub ownership: Option<&'a FieldSpec>,

    /// Fields supplied on insert.
    pub creatable: Vec<&'a FieldSpec>,

    /// Every field except the key.
    pub non_key: Vec<&'a FieldSpec>,

    /// Fields assigned by the database on insert.
    pub generated: Vec<&'a FieldSpec>,

    /// Date and time fields.
    pub temporal: Vec<&'a FieldSpec>
}

impl Classification<'_> {
    /// Check if keyed operations (get, update, delete) carry an ownership
    /// predicate.
    ///
    /// False when there is no ownership field or when it is the key itself.
    pub fn ownership_applies_to_keyed_ops(&self) -> bool {
        self.ownership
            .is_some_and(|owner| !std::ptr::eq(owner, self.key))
    }

    /// Ownership field for keyed operations, if they are scoped.
    pub fn keyed_owner(&self) -> Option<&FieldSpec> {
        self.ownership
            .filter(|_| self.ownership_applies_to_keyed_ops())
    }
}

/// Classify the fields of `entity`.
///
/// # Errors
///
/// - [`Error::InvalidIdentifier`] when the entity, table or a field name
///   cannot become an identifier
/// - [`Error::DuplicateField`] when two fields share a name or a column
/// - [`Error::MissingPrimaryKey`] / [`Error::MultiplePrimaryKeys`] unless
///   exactly one field is the primary key
/// - [`Error::GeneratedKeyNotInteger`] when an auto-generated key is not an
///   integer
/// - [`Error::ReservedName`] when the owner argument of keyed operations
///   would be called `model`
pub fn classify<'a>(entity: &'a EntitySchema, owner_field: &str) -> Result<Classification<'a>> {
    validate_names(entity)?;
    let key = find_key(entity)?;
    let key_is_auto_generated = key.constraints().auto_generated;
    if key_is_auto_generated {
        check_generated_key(entity, key)?;
    }

    let mut classification = Classification {
        entity,
        key,
        key_is_auto_generated,
        unique: Vec::new(),
        ownership: entity.field(owner_field),
        creatable: Vec::new(),
        non_key: Vec::new(),
        generated: Vec::new(),
        temporal: Vec::new()
    };

    for field in &entity.fields {
        let c = field.constraints();

        if !std::ptr::eq(field, key) {
            classification.non_key.push(field);
        }
        if c.auto_generated {
            classification.generated.push(field);
        } else if !c.has_default {
            classification.creatable.push(field);
        }
        if c.unique {
            classification.unique.push(field);
        }
        if c.temporal.is_some() {
            classification.temporal.push(field);
        }
    }

    if let Some(owner) = classification.keyed_owner()
        && owner.column() == "model"
    {
        return Err(Error::ReservedName {
            entity: entity.name.clone(),
            field:  owner.name.clone(),
            name:   "model".to_string()
        });
    }

    Ok(classification)
}

fn validate_names(entity: &EntitySchema) -> Result<()> {
    let invalid = |name: &str| Error::InvalidIdentifier {
        entity: entity.name.clone(),
        name:   name.to_string()
    };

    if !is_identifier(&entity.name) || rust_ident(&entity.type_name()).is_none() {
        return Err(invalid(&entity.name));
    }
    if let Some(table) = &entity.table
        && !is_identifier(table)
    {
        return Err(invalid(table));
    }

    let mut columns: HashMap<String, &str> = HashMap::with_capacity(entity.fields.len());
    for field in &entity.fields {
        if field.ident().is_none() {
            return Err(invalid(&field.name));
        }
        if columns.insert(field.column(), &field.name).is_some() {
            return Err(Error::DuplicateField {
                entity: entity.name.clone(),
                field:  field.name.clone()
            });
        }
    }

    Ok(())
}

fn find_key(entity: &EntitySchema) -> Result<&FieldSpec> {
    let keys: Vec<&FieldSpec> = entity
        .fields
        .iter()
        .filter(|f| f.constraints().primary_key)
        .collect();

    match keys.as_slice() {
        [key] => Ok(key),
        [] => Err(Error::MissingPrimaryKey {
            entity: entity.name.clone()
        }),
        many => Err(Error::MultiplePrimaryKeys {
            entity: entity.name.clone(),
            fields: many.iter().map(|f| f.name.clone()).collect()
        })
    }
}

/// The key receives `last_insert_id()`, so it must convert from `u64`.
/// Unparseable types are left for type resolution to report.
fn check_generated_key(entity: &EntitySchema, key: &FieldSpec) -> Result<()> {
    let Ok(ty) = key.rust_type() else {
        return Ok(());
    };
    if is_integer(&ty) {
        return Ok(());
    }

    Err(Error::GeneratedKeyNotInteger {
        entity: entity.name.clone(),
        field:  key.name.clone(),
        ty:     key.ty.clone()
    })
}

fn is_integer(ty: &Type) -> bool {
    const INTEGERS: [&str; 12] = [
        "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize"
    ];

    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .get_ident()
            .is_some_and(|ident| INTEGERS.contains(&ident.to_string().as_str())),
        _ => false
    }
}
