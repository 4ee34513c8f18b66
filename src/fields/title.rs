//! Title formatting (`titleInfo`)

use super::values::{collapse_fields, display_label, DisplayField};
use crate::html::escape;
use crate::mods::Element;

const DEFAULT_LABEL: &str = "Title:";

/// Format `titleInfo` elements
pub fn format(title_infos: &[&Element]) -> Vec<DisplayField> {
    let fields = title_infos
        .iter()
        .filter_map(|title_info| {
            let title = assemble_title(title_info)?;
            Some(DisplayField::single(label(title_info), escape(&title)))
        })
        .collect();

    collapse_fields(fields)
}

/// Build "nonSort title : subTitle. partName, partNumber"
fn assemble_title(title_info: &Element) -> Option<String> {
    let part = |name: &str| title_info.first_child(name).and_then(Element::trimmed_text);

    let non_sort = part("nonSort");
    let main = part("title");
    let sub_title = part("subTitle");
    let parts: Vec<String> = ["partName", "partNumber"]
        .iter()
        .filter_map(|name| part(*name))
        .collect();

    let structured = non_sort.is_some() || main.is_some() || sub_title.is_some() || !parts.is_empty();
    if !structured {
        return title_info.trimmed_text();
    }

    let mut title = [non_sort, main]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(sub_title) = sub_title {
        if title.is_empty() {
            title = sub_title;
        } else {
            title.push_str(" : ");
            title.push_str(&sub_title);
        }
    }

    if !parts.is_empty() {
        let parts = parts.join(", ");
        if title.is_empty() {
            title = parts;
        } else {
            title.push_str(". ");
            title.push_str(&parts);
        }
    }

    Some(title)
}

fn label(title_info: &Element) -> String {
    if let Some(label) = display_label(title_info) {
        return label;
    }

    let label = match title_info.attribute("type") {
        Some("abbreviated") => "Abbreviated title:",
        Some("translated") => "Translated title:",
        Some("alternative") => "Alternative title:",
        Some("uniform") => "Uniform title:",
        _ => DEFAULT_LABEL,
    };
    label.to_string()
}
