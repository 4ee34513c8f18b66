//! MODS XML parser
//!
//! Parses MODS XML into an owned element tree. Elements and attributes are
//! keyed by their local name, so `mods:titleInfo` and `titleInfo` (or
//! `xlink:href` and `href`) are the same thing to callers.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use roxmltree::Document;

use crate::error::{DisplayError, DisplayResult};

const COLLECTION_ELEMENT: &str = "modsCollection";
const RECORD_ELEMENT: &str = "mods";

/// A child of an [`Element`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its attributes and children in document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Local name (namespace prefix removed)
    pub name: String,
    /// Attributes keyed by local name
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

/// A parsed MODS record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModsRecord {
    /// The `<mods>` element (or whatever element wraps the record's fields)
    pub root: Element,
}

impl ModsRecord {
    /// Parse a record from XML text.
    ///
    /// A `<modsCollection>` root is unwrapped to its first `<mods>` record.
    /// Any other root element is used as the record container as is.
    pub fn parse(xml: &str) -> DisplayResult<Self> {
        let document = Document::parse(xml)?;
        let root = Element::from_node(document.root_element());

        let root = if root.name == COLLECTION_ELEMENT {
            root.first_child(RECORD_ELEMENT)
                .cloned()
                .ok_or(DisplayError::EmptyCollection)?
        } else {
            root
        };

        tracing::trace!(
            "Parsed MODS record <{}> with {} top-level elements",
            root.name,
            root.elements().count()
        );

        Ok(Self { root })
    }

    /// Read and parse a record from a file
    pub fn from_path(path: impl AsRef<Path>) -> DisplayResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading MODS record from {}", path.display());
        let xml = fs::read_to_string(path)?;
        Self::parse(&xml)
    }

    /// Get all top-level elements with a specific name
    pub fn get_elements(&self, name: &str) -> Vec<&Element> {
        self.root.children_named(name)
    }

    pub fn title_info(&self) -> Vec<&Element> {
        self.get_elements("titleInfo")
    }

    pub fn related_item(&self) -> Vec<&Element> {
        self.get_elements("relatedItem")
    }

    pub fn access_condition(&self) -> Vec<&Element> {
        self.get_elements("accessCondition")
    }

    pub fn language(&self) -> Vec<&Element> {
        self.get_elements("language")
    }

    pub fn physical_description(&self) -> Vec<&Element> {
        self.get_elements("physicalDescription")
    }

    pub fn subject(&self) -> Vec<&Element> {
        self.get_elements("subject")
    }
}

impl Element {
    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let attributes = node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect();

        let children = node
            .children()
            .filter_map(|child| {
                if child.is_element() {
                    Some(Node::Element(Self::from_node(child)))
                } else if child.is_text() {
                    child.text().map(|text| Node::Text(text.to_string()))
                } else {
                    // Comments and processing instructions
                    None
                }
            })
            .collect();

        Self {
            name: node.tag_name().name().to_string(),
            attributes,
            children,
        }
    }

    /// Child elements, skipping text runs
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Child elements with a specific name
    pub fn children_named(&self, name: &str) -> Vec<&Element> {
        self.elements()
            .filter(|element| element.name == name)
            .collect()
    }

    /// First child element with a specific name
    pub fn first_child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == name)
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.first_child(name).is_some()
    }

    /// All elements reached by following `path` one child name at a time,
    /// e.g. `["originInfo", "dateOther"]`
    pub fn descendants_at(&self, path: &[&str]) -> Vec<&Element> {
        let mut current = vec![self];
        for name in path {
            current = current
                .into_iter()
                .flat_map(|element| element.elements())
                .filter(|element| element.name == *name)
                .collect();
        }
        current
    }

    /// Get an attribute value by local name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get a trimmed attribute value, treating blank values as absent
    pub fn non_empty_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// All descendant text concatenated in document order
    pub fn text(&self) -> String {
        let mut buffer = String::new();
        self.collect_text(&mut buffer);
        buffer
    }

    fn collect_text(&self, buffer: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => buffer.push_str(text),
                Node::Element(element) => element.collect_text(buffer),
            }
        }
    }

    /// Trimmed text, or `None` when the element holds only whitespace
    pub fn trimmed_text(&self) -> Option<String> {
        non_blank(&self.text())
    }
}

#[cfg(test)]
impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder helper: add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder helper: append a text run
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }
}

/// Concatenated text of a node set, trimmed; `None` when blank
pub fn node_set_text(elements: &[&Element]) -> Option<String> {
    let text: String = elements.iter().map(|element| element.text()).collect();
    non_blank(&text)
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
