//! # Naming Utilities
//!
//! Identifier validation for the aggregate type name and the PascalCase
//! transformation used for per-collection aliases.

use regex::Regex;
use std::sync::OnceLock;

/// Checks that `name` is a valid bare TypeScript identifier.
///
/// Valid names start with a letter, `_` or `$`, followed by letters, digits,
/// `_` or `$`.
pub fn is_valid_identifier(name: &str) -> bool {
    static IDENT_RE: OnceLock<Regex> = OnceLock::new();
    let ident_re = IDENT_RE
        .get_or_init(|| Regex::new(r"^[a-zA-Z_$][a-zA-Z_$0-9]*$").expect("Invalid regex"));
    ident_re.is_match(name)
}

/// Converts a collection name to PascalCase.
///
/// Splits on runs of `_`, `-` and space, uppercases the first letter of each
/// word, leaves the remainder untouched and concatenates. Interior
/// capitalization survives: `my_URL` becomes `MyURL`.
pub fn pascal_case(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
