//! Property-list document handling
//!
//! iTunes exports its library as an XML property list: key/value pairs are
//! encoded as adjacent sibling elements (`<key>Name</key><string>..</string>`)
//! and boolean values as the tag name of an empty element (`<true/>`). The
//! whole document is parsed into an owned element tree once; extraction is a
//! read-only traversal over that tree.

mod accessor;
mod document;

pub use accessor::{find_first, find_key, key_bool, key_value_pairs, key_value_text, KeyHandle};
pub use document::{load_document, parse_document, Element};

/// Tag of a key marker element
pub const KEY_TAG: &str = "key";

/// Tag of a dict group element
pub const DICT_TAG: &str = "dict";

/// Tag of an array element
pub const ARRAY_TAG: &str = "array";

/// Tag encoding boolean true (the value element has no text content)
pub const TRUE_TAG: &str = "true";
