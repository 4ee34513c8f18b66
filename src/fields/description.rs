//! Physical description formatting (`physicalDescription`)

use super::values::{collapse_fields, display_label, DisplayField};
use crate::html::escape;
use crate::mods::Element;

/// Default label for a displayable `physicalDescription` child
fn default_label(name: &str) -> Option<&'static str> {
    match name {
        "digitalOrigin" => Some("Digital origin:"),
        "extent" => Some("Extent:"),
        "note" => Some("Note:"),
        "reformattingQuality" => Some("Reformatting quality:"),
        "internetMediaType" => Some("Media type:"),
        _ => None,
    }
}

/// Format `physicalDescription` elements
pub fn format(descriptions: &[&Element]) -> Vec<DisplayField> {
    let fields = descriptions
        .iter()
        .flat_map(|description| description.elements())
        .filter_map(|child| {
            let default = default_label(&child.name)?;
            let text = child.trimmed_text()?;
            let label = display_label(child).unwrap_or_else(|| default.to_string());
            Some(DisplayField::single(label, escape(&text)))
        })
        .collect();

    collapse_fields(fields)
}
