//! Key/value lookup over the element tree
//!
//! The plist format pairs a `<key>` marker with the element that immediately
//! follows it in sibling order. That adjacency rule lives here and nowhere
//! else; every extractor goes through these helpers instead of re-deriving
//! child offsets.

use super::document::Element;
use super::{KEY_TAG, TRUE_TAG};

/// A dict's children alternate key marker and value element
const KEY_VALUE_STRIDE: usize = 2;

/// Handle to a matched key marker within its sibling list
#[derive(Debug, Clone, Copy)]
pub struct KeyHandle<'a> {
    siblings: &'a [Element],
    index: usize,
}

impl<'a> KeyHandle<'a> {
    /// The value element paired with this key (its next sibling)
    pub fn value_element(&self) -> Option<&'a Element> {
        self.siblings.get(self.index + 1)
    }

    /// Text content of the paired value element
    pub fn value_text(&self) -> Option<&'a str> {
        self.value_element().map(|e| e.text.as_str())
    }

    /// Tag name of the paired value element
    ///
    /// Booleans are encoded purely as the tag of an empty element
    /// (`<true/>` / `<false/>`), so the kind is the value.
    pub fn value_kind(&self) -> Option<&'a str> {
        self.value_element().map(|e| e.tag.as_str())
    }
}

/// Find the first `<key>` descendant (document order) whose text is `name`
pub fn find_key<'a>(node: &'a Element, name: &str) -> Option<KeyHandle<'a>> {
    for (index, child) in node.children().iter().enumerate() {
        if child.tag == KEY_TAG && child.text == name {
            return Some(KeyHandle {
                siblings: node.children(),
                index,
            });
        }
        if let Some(found) = find_key(child, name) {
            return Some(found);
        }
    }
    None
}

/// Find the first descendant element (document order) with the given tag
pub fn find_first<'a>(node: &'a Element, tag: &str) -> Option<&'a Element> {
    for child in node.children() {
        if child.tag == tag {
            return Some(child);
        }
        if let Some(found) = find_first(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Text value paired with the named key, if the key exists
pub fn key_value_text<'a>(node: &'a Element, name: &str) -> Option<&'a str> {
    find_key(node, name).and_then(|key| key.value_text())
}

/// Boolean value paired with the named key; an absent key is false
pub fn key_bool(node: &Element, name: &str) -> bool {
    find_key(node, name)
        .and_then(|key| key.value_kind())
        .map_or(false, |kind| kind == TRUE_TAG)
}

/// Iterate the key/value element pairs making up a dict node
///
/// Pairs where the first element is not a key marker are skipped, so a
/// malformed group degrades to fewer pairs instead of misaligned ones.
pub fn key_value_pairs(node: &Element) -> impl Iterator<Item = (&Element, &Element)> {
    node.children()
        .chunks(KEY_VALUE_STRIDE)
        .filter_map(|pair| match pair {
            [key, value] if key.tag == KEY_TAG => Some((key, value)),
            _ => None,
        })
}
