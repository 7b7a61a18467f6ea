//! Plist XML parsing into an owned element tree

use crate::diag::LibraryError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// An element of the parsed document tree
///
/// Only elements are kept: whitespace-only text nodes between siblings are
/// dropped by the reader, so a dict's children are exactly its key and value
/// elements in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name (e.g. "key", "dict", "integer", "true")
    pub tag: String,

    /// Concatenated text content of this element
    pub text: String,

    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    fn new(tag: String) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// Read and parse a plist document from disk
pub fn load_document(path: &Path) -> Result<Element, LibraryError> {
    let xml = fs::read_to_string(path).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&xml)
}

/// Parse a plist document from a string
///
/// Returns a synthetic root element whose children are the document's
/// top-level elements (normally a single `<plist>`).
pub fn parse_document(xml: &str) -> Result<Element, LibraryError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut root = Element::default();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                stack.push(Element::new(tag));
            }

            Event::Empty(e) => {
                // Self-closing tags like <true/> become childless elements
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                attach(&mut stack, &mut root, Element::new(tag));
            }

            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&e.unescape().unwrap_or_default());
                }
            }

            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&e));
                }
            }

            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element);
                }
            }

            Event::Eof => break,

            // DOCTYPE, XML declaration, comments, processing instructions
            _ => {}
        }
    }

    Ok(root)
}

fn attach(stack: &mut [Element], root: &mut Element, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => root.children.push(element),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_dict() {
        let doc = parse_document(
            r#"<plist version="1.0">
                <dict>
                    <key>Name</key><string>Song A</string>
                    <key>Folder</key><true/>
                </dict>
            </plist>"#,
        )
        .unwrap();

        let plist = &doc.children()[0];
        assert_eq!(plist.tag, "plist");

        let dict = &plist.children()[0];
        assert_eq!(dict.tag, "dict");
        assert_eq!(dict.children().len(), 4);

        assert_eq!(dict.children()[0].tag, "key");
        assert_eq!(dict.children()[0].text, "Name");
        assert_eq!(dict.children()[1].text, "Song A");
        assert_eq!(dict.children()[3].tag, "true");
        assert!(dict.children()[3].text.is_empty());
    }

    #[test]
    fn test_whitespace_between_elements_is_dropped() {
        let doc =
            parse_document("<dict>\n\t<key>A</key>\n\t<integer>1</integer>\n</dict>").unwrap();
        let dict = &doc.children()[0];
        assert_eq!(dict.children().len(), 2);
        assert!(dict.text.is_empty());
    }

    #[test]
    fn test_entities_are_unescaped() {
        let doc = parse_document("<string>Simon &amp; Garfunkel</string>").unwrap();
        assert_eq!(doc.children()[0].text, "Simon & Garfunkel");
    }

    #[test]
    fn test_doctype_is_ignored() {
        let doc = parse_document(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
             \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
             <plist version=\"1.0\"><dict/></plist>",
        )
        .unwrap();
        assert_eq!(doc.children().len(), 1);
        assert_eq!(doc.children()[0].children()[0].tag, "dict");
    }
}
