// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Document-level generation.
//!
//! Runs classify, synthesize, emit and render for every entity of a
//! document. Entities are independent: one failing entity does not stop the
//! others, and its error names it. Each output file belongs to the first
//! entity that maps to it; later entities with the same file name fail.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf}
};

use tracing::{debug, info};

use crate::{
    entity,
    error::{Error, Result},
    render::{Formatting, render},
    schema::{Document, EntitySchema}
};

/// Source file generated for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEntity {
    /// Entity name as declared.
    pub name:            String,
    /// File name, `<delimited>_model.generated.rs`.
    pub file_name:       String,
    /// Full file contents.
    pub source:          String,
    /// Whether the code uses `chrono` types.
    pub requires_chrono: bool
}

impl GeneratedEntity {
    /// Write the file into `dir`, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.source).map_err(|e| Error::io(&path, e))?;
        info!(entity = %self.name, path = %path.display(), "wrote generated model");
        Ok(path)
    }
}

/// Generate the file of one entity.
///
/// # Errors
///
/// Any configuration error of the entity.
pub fn generate_entity(
    entity: &EntitySchema,
    document: &Document,
    formatting: Formatting
) -> Result<GeneratedEntity> {
    let code = entity::generate(entity, document)?;
    let source = render(&entity.name, &code.tokens, code.requires_chrono, formatting);
    debug!(
        entity = %entity.name,
        table = %entity.table_name(),
        bytes = source.len(),
        "generated entity"
    );

    Ok(GeneratedEntity {
        name: entity.name.clone(),
        file_name: file_name(entity),
        source,
        requires_chrono: code.requires_chrono
    })
}

/// Name of the file generated for `entity`.
fn file_name(entity: &EntitySchema) -> String {
    format!("{}_model.generated.rs", entity.display_name())
}

/// Generate every entity of a document, in declared order.
///
/// An entity whose file name was already taken by an earlier entity fails
/// with [`Error::DuplicateEntity`].
pub fn generate_document(document: &Document, formatting: Formatting) -> Vec<Result<GeneratedEntity>> {
    let mut claimed: HashMap<String, &str> = HashMap::with_capacity(document.entities.len());

    document
        .entities
        .iter()
        .map(|entity| {
            let file_name = file_name(entity);
            if let Some(first) = claimed.get(&file_name) {
                return Err(Error::DuplicateEntity {
                    entity: entity.name.clone(),
                    first: (*first).to_string(),
                    file_name
                });
            }
            claimed.insert(file_name, &entity.name);
            generate_entity(entity, document, formatting)
        })
        .collect()
}

/// Generate every entity and write the files into `dir`.
///
/// The directory is created if missing. Entities that fail are reported in
/// the returned list; the others are still written.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created.
pub fn write_document(
    document: &Document,
    dir: &Path,
    formatting: Formatting
) -> Result<Vec<Result<PathBuf>>> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    Ok(generate_document(document, formatting)
        .into_iter()
        .map(|generated| generated.and_then(|g| g.write_to(dir)))
        .collect())
}
