//! Display values and label helpers shared by all field formatters

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::mods::Element;

/// One labeled row of display output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayField {
    pub label: String,
    pub values: Vec<String>,
}

impl DisplayField {
    pub fn new(label: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// A field holding a single value
    pub fn single(label: impl Into<String>, value: String) -> Self {
        Self::new(label, vec![value])
    }

    /// True when at least one value has visible content
    pub fn has_values(&self) -> bool {
        self.values.iter().any(|value| !value.trim().is_empty())
    }
}

/// Merge fields that share a label.
///
/// Groups keep the position of the first field carrying their label, and
/// values keep encounter order.
pub fn collapse_fields(fields: Vec<DisplayField>) -> Vec<DisplayField> {
    if fields.len() < 2 {
        return fields;
    }

    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for field in fields {
        groups.entry(field.label).or_default().extend(field.values);
    }

    groups
        .into_iter()
        .map(|(label, values)| DisplayField { label, values })
        .collect()
}

/// The element's `displayLabel` attribute as a label, if set
pub fn display_label(element: &Element) -> Option<String> {
    element.non_empty_attribute("displayLabel").map(with_colon)
}

/// Append the trailing colon labels carry, unless already present
pub fn with_colon(label: &str) -> String {
    if label.ends_with(':') {
        label.to_string()
    } else {
        format!("{}:", label)
    }
}

/// Label without its trailing colon, for `title` attributes
pub fn sans_colon(label: &str) -> &str {
    label.trim_end().trim_end_matches(':')
}
