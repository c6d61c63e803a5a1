//! # TypeScript Generation
//!
//! Assembles the final module text: translator output, the aggregate
//! collection type and the per-collection aliases.

use crate::collections::discover_collections;
use crate::error::{AppError, AppResult};
use crate::naming::{is_valid_identifier, pascal_case};
use crate::translator::TypeTranslator;
use serde_json::Value;

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Name of the generated aggregate type.
    pub type_name: String,
    /// Also scan `components.schemas` vendor extensions for system collections.
    pub include_system_collections: bool,
    /// Also scan `/relations/<name>` paths for collections.
    pub include_relations: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            type_name: String::from("Schema"),
            include_system_collections: false,
            include_relations: false,
        }
    }
}

/// Generates the full TypeScript module for `document`.
///
/// The aggregate type name is validated before any other work. A malformed
/// document never fails generation: entries that do not match the expected
/// shape are skipped during discovery.
pub fn generate_typescript(
    document: &Value,
    options: &GenerateOptions,
    translator: &dyn TypeTranslator,
) -> AppResult<String> {
    if !is_valid_identifier(&options.type_name) {
        return Err(AppError::Validation(format!(
            "Invalid type name: {}",
            options.type_name
        )));
    }

    let mut source = translator.translate(document)?;

    source.push_str(&format!("\n\nexport type {} = {{\n", options.type_name));

    let collections = discover_collections(
        document,
        options.include_relations,
        options.include_system_collections,
    );

    for (name, type_ref) in &collections {
        source.push_str(&format!("  {}: {};\n", name, type_ref));
    }
    source.push_str("};\n");

    for (name, type_ref) in &collections {
        source.push_str(&format!(
            "export type {} = {};\n",
            pascal_case(name),
            type_ref
        ));
    }

    Ok(source)
}
