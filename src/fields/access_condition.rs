//! Access condition formatting (`accessCondition`)

use once_cell::sync::Lazy;
use regex::Regex;

use super::licenses;
use super::values::{collapse_fields, display_label, DisplayField};
use crate::html::escape;
use crate::mods::Element;

const DEFAULT_LABEL: &str = "Access condition:";
const COPYRIGHT_ENTITY: &str = "&copy;";

static COPYRIGHT_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(c\) copyright").expect("valid regex"));
static COPYRIGHT_SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\(c\)").expect("valid regex"));
/// `CODE TYPE: description`, e.g. `CC by-sa: This work is licensed ...`
static LICENSE_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?P<code>\S+) (?P<kind>\S+):(?P<description>.*)$").expect("valid regex")
});

/// Access condition types after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccessType {
    UseAndReproduction,
    RestrictionOnAccess,
    Copyright,
    License,
    Other,
}

impl AccessType {
    /// `restrictionOnAccess` and `restriction on access` are the same type
    fn of(element: &Element) -> Self {
        let normalized: String = element
            .attribute("type")
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "useandreproduction" => AccessType::UseAndReproduction,
            "restrictiononaccess" => AccessType::RestrictionOnAccess,
            "copyright" => AccessType::Copyright,
            "license" => AccessType::License,
            _ => AccessType::Other,
        }
    }

    fn label(self) -> &'static str {
        match self {
            AccessType::UseAndReproduction => "Use and reproduction:",
            AccessType::RestrictionOnAccess => "Restriction on access:",
            AccessType::Copyright => "Copyright:",
            AccessType::License => "License:",
            AccessType::Other => DEFAULT_LABEL,
        }
    }
}

/// Format `accessCondition` elements
pub fn format(conditions: &[&Element]) -> Vec<DisplayField> {
    let fields = conditions
        .iter()
        .filter_map(|condition| {
            let access_type = AccessType::of(condition);
            let value = match access_type {
                AccessType::Copyright => condition.trimmed_text().map(|text| copyright_statement(&text)),
                AccessType::License => license_statement(condition),
                _ => condition.trimmed_text().map(|text| escape(&text)),
            }?;

            let label = display_label(condition).unwrap_or_else(|| access_type.label().to_string());
            Some(DisplayField::single(label, value))
        })
        .collect();

    collapse_fields(fields)
}

/// Replace `(c) copyright` and bare `(c)` with the copyright entity
fn copyright_statement(text: &str) -> String {
    let escaped = escape(text);
    let replaced = COPYRIGHT_PHRASE.replace_all(&escaped, COPYRIGHT_ENTITY);
    COPYRIGHT_SYMBOL
        .replace_all(&replaced, COPYRIGHT_ENTITY)
        .into_owned()
}

fn license_statement(condition: &Element) -> Option<String> {
    if let Some(uri) = condition.non_empty_attribute("href") {
        match licenses::find_by_uri(uri) {
            Some(license) => {
                return Some(format!(
                    "<div class='{}'><a href='{}'>This work is licensed under a {}</a></div>",
                    license.class,
                    license.uri,
                    escape(license.description)
                ));
            }
            None => tracing::debug!("Unknown license URI: {}", uri),
        }
    }

    let text = condition.trimmed_text()?;
    let Some(captures) = LICENSE_STATEMENT.captures(&text) else {
        return Some(escape(&text));
    };

    let code = &captures["code"];
    let kind = &captures["kind"];
    let body = match licenses::find_by_code(code, kind) {
        Some(license) => format!(
            "<a href='{}'>This work is licensed under a {}</a>",
            license.uri,
            escape(license.description)
        ),
        None => {
            tracing::debug!("Unknown license code: {} {}", code, kind);
            escape(captures["description"].trim())
        }
    };

    Some(format!(
        "<div class='{}-{}'>{}</div>",
        escape(&code.to_lowercase()),
        escape(&kind.to_lowercase()),
        body
    ))
}
