//! # Collection Discovery
//!
//! Scans the OpenAPI document for the collections the backend exposes and
//! builds the name-to-type-reference mapping.
//!
//! Three scans run in a fixed order: `/items/<name>` paths, optionally
//! `/relations/<name>` paths, optionally `components.schemas` entries carrying
//! an `x-collection` vendor extension. Each collection name is recorded at
//! most once; the first scan to claim a name wins and later discoveries are
//! dropped silently. Entries that do not match the expected shape at any
//! level are skipped, never errors: partial or heterogeneous specs must not
//! abort generation.

use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Insertion-ordered mapping from collection name to type-reference text.
pub type CollectionMap = IndexMap<String, String>;

/// Key chain from a path item to the `$ref` of its list response payload.
const DATA_ITEMS_REF: [&str; 10] = [
    "get",
    "responses",
    "200",
    "content",
    "application/json",
    "schema",
    "properties",
    "data",
    "items",
    "$ref",
];

/// Walks `root` through a fixed sequence of object keys.
///
/// Returns `None` as soon as a segment is missing or the current node is not
/// an object. Used for the deep response-schema probes where absence means
/// "skip this entry".
pub fn value_at<'a>(root: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments {
        current = current.as_object()?.get(*segment)?;
    }
    Some(current)
}

/// Extracts the collection name from an `/items/<name>` path.
fn items_collection(path: &str) -> Option<&str> {
    static ITEMS_RE: OnceLock<Regex> = OnceLock::new();
    let items_re = ITEMS_RE
        .get_or_init(|| Regex::new(r"^/items/([a-zA-Z0-9_]+)$").expect("Invalid regex"));
    items_re
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts the collection name from a `/relations/<name>` path.
fn relations_collection(path: &str) -> Option<&str> {
    static RELATIONS_RE: OnceLock<Regex> = OnceLock::new();
    let relations_re = RELATIONS_RE
        .get_or_init(|| Regex::new(r"^/relations/([a-zA-Z0-9_]+)$").expect("Invalid regex"));
    relations_re
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts the component-schema name referenced by a list endpoint.
///
/// The full `get.responses.200.content["application/json"].schema.properties
/// .data.items.$ref` chain must be present and the reference must point into
/// `#/components/schemas/`.
fn response_item_ref(path_item: &Value) -> Option<&str> {
    static REF_RE: OnceLock<Regex> = OnceLock::new();
    let ref_re = REF_RE.get_or_init(|| {
        Regex::new(r"^#/components/schemas/([a-zA-Z0-9_]+)$").expect("Invalid regex")
    });
    let reference = value_at(path_item, &DATA_ITEMS_REF)?.as_str()?;
    ref_re
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Runs one scan over `paths`, recording array-typed mappings first-wins.
fn record_paths(
    collections: &mut CollectionMap,
    paths: &Value,
    matcher: fn(&str) -> Option<&str>,
) {
    if let Some(entries) = paths.as_object() {
        for (path, path_item) in entries {
            if let Some(collection) = matcher(path) {
                if let Some(reference) = response_item_ref(path_item) {
                    if !collections.contains_key(collection) {
                        debug!("discovered collection `{}` -> `{}`", collection, reference);
                        collections.insert(
                            collection.to_string(),
                            format!("components[\"schemas\"][\"{}\"][]", reference),
                        );
                    }
                }
            }
        }
    }
}

/// Builds the collection mapping for `document`.
///
/// Iteration order is the document's own key order; no sorting is applied,
/// so output for a given document is stable across runs.
pub fn discover_collections(
    document: &Value,
    include_relations: bool,
    include_system_collections: bool,
) -> CollectionMap {
    let mut collections = CollectionMap::new();

    if let Some(paths) = document.get("paths") {
        record_paths(&mut collections, paths, items_collection);
        if include_relations {
            record_paths(&mut collections, paths, relations_collection);
        }
    }

    if include_system_collections {
        let schemas = value_at(document, &["components", "schemas"]).and_then(Value::as_object);
        if let Some(schemas) = schemas {
            for (schema_key, schema_value) in schemas {
                if let Some(name) = schema_value.get("x-collection").and_then(Value::as_str) {
                    if !name.is_empty() && !collections.contains_key(name) {
                        debug!("discovered system collection `{}` -> `{}`", name, schema_key);
                        collections.insert(
                            name.to_string(),
                            format!("components[\"schemas\"][\"{}\"]", schema_key),
                        );
                    }
                }
            }
        }
    }

    collections
}
