//! # Type Translator
//!
//! Port for turning the full OpenAPI document into per-schema type
//! declarations, plus the built-in implementation covering the schema shapes
//! a headless CMS actually emits.

use crate::error::AppResult;
use crate::naming::is_valid_identifier;
use serde_json::Value;

/// Translates an OpenAPI document into type-declaration text.
///
/// The collection deriver appends the aggregate type to whatever this
/// returns, so derivation tests can substitute a stub returning fixed text.
pub trait TypeTranslator {
    /// Produces declarations covering every component schema.
    fn translate(&self, document: &Value) -> AppResult<String>;
}

/// Built-in translator.
///
/// Renders every entry of `components.schemas` inside a single exported
/// `components` interface, so that the `components["schemas"]["X"]`
/// references produced by the collection mapping resolve against it.
///
/// Handles primitives, string enums, arrays, local `$ref`s, `nullable` and
/// `object` schemas with `properties`/`required`. Anything else (including
/// `allOf`/`oneOf` composition) renders as `unknown`.
#[derive(Debug, Default)]
pub struct ComponentTranslator;

impl TypeTranslator for ComponentTranslator {
    fn translate(&self, document: &Value) -> AppResult<String> {
        let mut out = String::from("export interface components {\n  schemas: {\n");
        let schemas = crate::collections::value_at(document, &["components", "schemas"])
            .and_then(Value::as_object);
        if let Some(schemas) = schemas {
            for (name, schema) in schemas {
                out.push_str(&format!(
                    "    {}: {};\n",
                    property_key(name),
                    render_schema(schema, 2)
                ));
            }
        }
        out.push_str("  };\n}\n");
        Ok(out)
    }
}

/// Quotes a property name when it is not a bare identifier.
fn property_key(name: &str) -> String {
    if is_valid_identifier(name) {
        name.to_string()
    } else {
        format!("\"{}\"", name)
    }
}

/// Renders a single schema node as a TypeScript type expression.
fn render_schema(schema: &Value, depth: usize) -> String {
    if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
        if let Some(name) = reference.strip_prefix("#/components/schemas/") {
            return format!("components[\"schemas\"][\"{}\"]", name);
        }
        // External or non-schema references are out of scope
        return String::from("unknown");
    }

    let rendered = match schema.get("type").and_then(Value::as_str) {
        Some("string") => render_string(schema),
        Some("number") | Some("integer") => String::from("number"),
        Some("boolean") => String::from("boolean"),
        Some("array") => render_array(schema, depth),
        Some("object") => render_object(schema, depth),
        // Directus omits `type` on some object schemas; properties are the tell
        _ if schema.get("properties").is_some() => render_object(schema, depth),
        _ => String::from("unknown"),
    };

    if schema.get("nullable").and_then(Value::as_bool).unwrap_or(false) {
        format!("{} | null", rendered)
    } else {
        rendered
    }
}

fn render_string(schema: &Value) -> String {
    if let Some(variants) = schema.get("enum").and_then(Value::as_array) {
        let literals: Vec<String> = variants
            .iter()
            .filter_map(Value::as_str)
            .map(|variant| format!("\"{}\"", variant))
            .collect();
        if !literals.is_empty() {
            return literals.join(" | ");
        }
    }
    String::from("string")
}

fn render_array(schema: &Value, depth: usize) -> String {
    let items = match schema.get("items") {
        Some(items) => render_schema(items, depth),
        None => String::from("unknown"),
    };
    // Union element types need grouping
    if items.contains('|') {
        format!("({})[]", items)
    } else {
        format!("{}[]", items)
    }
}

fn render_object(schema: &Value, depth: usize) -> String {
    let properties = match schema.get("properties").and_then(Value::as_object) {
        Some(properties) if !properties.is_empty() => properties,
        _ => return String::from("Record<string, unknown>"),
    };
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let pad = "  ".repeat(depth + 1);
    let mut out = String::from("{\n");
    for (name, property) in properties {
        let marker = if required.contains(&name.as_str()) { "" } else { "?" };
        out.push_str(&format!(
            "{}{}{}: {};\n",
            pad,
            property_key(name),
            marker,
            render_schema(property, depth + 1)
        ));
    }
    out.push_str(&format!("{}}}", "  ".repeat(depth)));
    out
}
