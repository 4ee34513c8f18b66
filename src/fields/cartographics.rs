//! Cartographic data formatting (`subject/cartographics`)

use super::values::{collapse_fields, display_label, DisplayField};
use crate::html::escape;
use crate::mods::parser::node_set_text;
use crate::mods::Element;

const DEFAULT_LABEL: &str = "Map data:";
const MISSING_SCALE: &str = "Scale not given";

/// Format the `cartographics` children of `subject` elements
pub fn format(subjects: &[&Element]) -> Vec<DisplayField> {
    let fields = subjects
        .iter()
        .flat_map(|subject| subject.children_named("cartographics"))
        .filter_map(|cartographics| {
            let value = map_data(cartographics)?;
            let label = display_label(cartographics).unwrap_or_else(|| DEFAULT_LABEL.to_string());
            Some(DisplayField::single(label, escape(&value)))
        })
        .collect();

    collapse_fields(fields)
}

/// "scale ; projection coordinates"
fn map_data(cartographics: &Element) -> Option<String> {
    let text_of = |name: &str| node_set_text(&cartographics.children_named(name));

    let scale = text_of("scale");
    let rest: Vec<String> = [text_of("projection"), text_of("coordinates")]
        .into_iter()
        .flatten()
        .collect();

    if scale.is_none() && rest.is_empty() {
        return None;
    }

    let mut value = scale.unwrap_or_else(|| MISSING_SCALE.to_string());
    if !rest.is_empty() {
        value.push_str(" ; ");
        value.push_str(&rest.join(" "));
    }
    Some(value)
}
