#![deny(missing_docs)]

//! # Typegen Core
//!
//! Core library for deriving TypeScript definitions from the OpenAPI spec of
//! a headless CMS backend.
//!
//! The entry point is [`generate_typescript`]: it validates the requested
//! aggregate type name, delegates the per-schema declarations to a
//! [`TypeTranslator`], scans the document for collections and renders the
//! aggregate mapping type plus one PascalCase alias per collection.

/// Shared error types.
pub mod error;

/// Collection discovery over the OpenAPI document.
pub mod collections;

/// Rendering of the final TypeScript module.
pub mod generator;

/// Identifier validation and name transformation.
pub mod naming;

/// The document-to-declarations translator port.
pub mod translator;

pub use collections::{discover_collections, value_at, CollectionMap};
pub use error::{AppError, AppResult};
pub use generator::{generate_typescript, GenerateOptions};
pub use naming::{is_valid_identifier, pascal_case};
pub use translator::{ComponentTranslator, TypeTranslator};
