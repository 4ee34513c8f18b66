//! Related item formatting (`relatedItem`)
//!
//! A related item displays in one of three shapes:
//! - a reference (`type="isReferencedBy"`): title, date, number and note run together
//! - a bare location (no title): the location text
//! - a titled item: the title, linked when a `location/url` is present
//!
//! Items describing the collection the record belongs to are never displayed.

use super::values::{collapse_fields, display_label, DisplayField};
use crate::html::escape;
use crate::mods::parser::node_set_text;
use crate::mods::Element;

const DEFAULT_LABEL: &str = "Related item:";
const LOCATION_LABEL: &str = "Location:";
const REFERENCE_LABEL: &str = "Referenced by:";

/// Parts of a reference item, in display order
const REFERENCE_PATHS: [&[&str]; 4] = [
    &["titleInfo"],
    &["originInfo", "dateOther"],
    &["part", "detail", "number"],
    &["note"],
];

/// Format `relatedItem` elements
pub fn format(items: &[&Element]) -> Vec<DisplayField> {
    let fields = items
        .iter()
        .filter_map(|item| {
            if is_collection(item) {
                tracing::trace!("Skipping related item describing a collection");
                return None;
            }
            let value = item_value(item)?;
            Some(DisplayField::single(label(item), value))
        })
        .collect();

    collapse_fields(fields)
}

/// An item is a collection when its `typeOfResource` says `collection="yes"`
fn is_collection(item: &Element) -> bool {
    item.first_child("typeOfResource")
        .and_then(|resource| resource.attribute("collection"))
        == Some("yes")
}

fn is_reference(item: &Element) -> bool {
    item.attribute("type") == Some("isReferencedBy")
}

fn is_location(item: &Element) -> bool {
    !is_reference(item) && item.has_child("location") && !item.has_child("titleInfo")
}

fn item_value(item: &Element) -> Option<String> {
    if is_reference(item) {
        reference_value(item)
    } else if is_location(item) {
        node_set_text(&item.children_named("location")).map(|text| escape(&text))
    } else {
        titled_value(item)
    }
}

fn reference_value(item: &Element) -> Option<String> {
    let parts: Vec<String> = REFERENCE_PATHS
        .iter()
        .flat_map(|path| item.descendants_at(path))
        .filter_map(Element::trimmed_text)
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(escape(&parts.join(" ")))
    }
}

fn titled_value(item: &Element) -> Option<String> {
    let title = node_set_text(&item.children_named("titleInfo"))?;
    let title = escape(&title);

    match node_set_text(&item.descendants_at(&["location", "url"])) {
        Some(url) => Some(format!("<a href='{}'>{}</a>", escape(&url), title)),
        None => Some(title),
    }
}

fn label(item: &Element) -> String {
    if let Some(label) = display_label(item) {
        return label;
    }

    if is_reference(item) {
        REFERENCE_LABEL.to_string()
    } else if is_location(item) {
        LOCATION_LABEL.to_string()
    } else {
        DEFAULT_LABEL.to_string()
    }
}
