//! Language formatting (`language/languageTerm`)

use super::language_codes::language_name;
use super::values::{collapse_fields, display_label, DisplayField};
use crate::html::escape;
use crate::mods::Element;

const DEFAULT_LABEL: &str = "Language:";

/// Format `language` elements
pub fn format(languages: &[&Element]) -> Vec<DisplayField> {
    let mut fields = Vec::new();

    for language in languages {
        let label = display_label(language).unwrap_or_else(|| DEFAULT_LABEL.to_string());
        let terms = language.children_named("languageTerm");

        let codes: Vec<String> = terms
            .iter()
            .filter(|term| term.attribute("type") == Some("code"))
            .filter_map(|term| term.trimmed_text())
            .collect();

        let values: Vec<String> = if codes.is_empty() {
            // No code given: fall back to the written-out term
            terms
                .iter()
                .filter(|term| term.attribute("type") == Some("text"))
                .filter_map(|term| term.trimmed_text())
                .map(|text| escape(&text))
                .collect()
        } else {
            codes
                .iter()
                .map(|code| match language_name(code) {
                    Some(name) => name.to_string(),
                    None => {
                        tracing::debug!("Unknown language code: {}", code);
                        escape(code)
                    }
                })
                .collect()
        };

        fields.extend(
            values
                .into_iter()
                .map(|value| DisplayField::single(label.clone(), value)),
        );
    }

    collapse_fields(fields)
}
