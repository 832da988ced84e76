//! Response normalization
//!
//! Backends sometimes wrap structured output in Markdown fences despite
//! instructions; this module cleans and parses their text and maps
//! failures to presentation categories.

mod classify;
mod json;

pub use classify::{classify_error, classify_message, ErrorKind, ErrorReport};
pub use json::{normalize_json, parse_json, parse_recipe, strip_code_fences};
