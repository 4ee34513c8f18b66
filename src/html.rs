//! HTML rendering of display fields
//!
//! Field values are already HTML fragments (text escaped by the formatters,
//! plus any links they built). Labels are plain text and escaped here.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::{DisplayConfig, FieldConfig};
use crate::fields::values::sans_colon;
use crate::fields::{DisplayField, FieldKind};
use crate::mods::ModsRecord;

const VALUE_TOKEN: &str = "%value%";

/// Markup the formatters generate
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// E-mail addresses and bare URLs inside escaped text. Entity references end a
/// URL, except `&amp;` and `&#39;` which stand for URL characters.
static LINKABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)(?P<email>[A-Z0-9_.%+\-]+@(?:[A-Z0-9\-]+\.)+(?:[A-Z]{2,4}|museum|travel))",
        r"|(?P<url>\b(?:https?://|www\d{0,3}[.]|[a-z0-9.\-]+[.][a-z]{2,4}/)",
        r"(?:[^\s()<>&]|&amp;|&#39;|\((?:[^\s()<>&]+|\([^\s()<>&]+\))*\))+",
        r"(?:\((?:[^\s()<>&]+|\([^\s()<>&]+\))*\)|[^\s`!()\[\]{};:'\x22.,<>?&«»“”‘’]))",
    ))
    .expect("valid regex")
});

/// Escape text for use in HTML content and single- or double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Reverse [`escape`]
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Apply `f` to the text between tags of a value. Tags, and text inside an
/// existing `<a>` element, are copied as is.
fn map_text(value: &str, f: impl Fn(&str) -> String) -> String {
    let mut output = String::with_capacity(value.len());
    let mut in_link = false;
    let mut last = 0;

    for tag in TAG.find_iter(value) {
        let text = &value[last..tag.start()];
        if in_link {
            output.push_str(text);
        } else {
            output.push_str(&f(text));
        }

        let markup = tag.as_str().to_ascii_lowercase();
        if markup == "<a>" || markup.starts_with("<a ") {
            in_link = true;
        } else if markup.starts_with("</a") {
            in_link = false;
        }
        output.push_str(tag.as_str());
        last = tag.end();
    }

    let rest = &value[last..];
    if in_link {
        output.push_str(rest);
    } else {
        output.push_str(&f(rest));
    }
    output
}

fn link_match(caps: &Captures) -> String {
    if let Some(email) = caps.name("email") {
        let email = email.as_str();
        return format!("<a href='mailto:{}'>{}</a>", email, email);
    }

    let url = &caps[0];
    let href = if url.to_lowercase().starts_with("http") {
        url.to_string()
    } else {
        format!("http://{}", url)
    };
    format!("<a href='{}'>{}</a>", href.replace("&#39;", "%27"), url)
}

/// Wrap URLs and e-mail addresses in links, outside of tags and existing links
pub fn link_urls_and_email(value: &str) -> String {
    map_text(value, |text| {
        LINKABLE
            .replace_all(text, |caps: &Captures| link_match(caps))
            .into_owned()
    })
}

/// Link the text of a value through the configured URL template
fn link_to_value(template: &str, value: &str) -> String {
    map_text(value, |text| {
        if text.trim().is_empty() {
            return text.to_string();
        }
        let raw = unescape(text);
        let encoded = urlencoding::encode(&raw);
        format!("<a href='{}'>{}</a>", template.replace(VALUE_TOKEN, &encoded), text)
    })
}

fn class_attribute(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(" class='{}'", escape(class))
    }
}

/// Render one field type's output as `<dt>`/`<dd>` pairs.
///
/// Returns `None` when the field type is ignored or nothing is displayable.
pub fn render_fields(fields: &[DisplayField], config: &FieldConfig) -> Option<String> {
    if config.ignore || fields.is_empty() {
        return None;
    }

    let mut output = String::new();
    for field in fields.iter().filter(|field| field.has_values()) {
        let values: Vec<String> = field
            .values
            .iter()
            .filter(|value| !value.trim().is_empty())
            .map(|value| match &config.link {
                Some(template) => link_to_value(template, value),
                None => link_urls_and_email(value),
            })
            .collect();

        output.push_str(&format!(
            "<dt{} title='{}'>{}</dt>",
            class_attribute(&config.label_class),
            escape(sans_colon(&field.label)),
            escape(&field.label)
        ));
        output.push_str(&format!(
            "<dd{}>{}</dd>",
            class_attribute(&config.value_class),
            values.join(config.delimiter.as_str())
        ));
    }

    if output.is_empty() {
        None
    } else {
        Some(output)
    }
}

/// Display of a whole MODS record
pub struct ModsDisplayHtml<'a> {
    record: &'a ModsRecord,
    config: &'a DisplayConfig,
}

impl<'a> ModsDisplayHtml<'a> {
    pub fn new(record: &'a ModsRecord, config: &'a DisplayConfig) -> Self {
        Self { record, config }
    }

    /// Display fields for one field type, regardless of `ignore`
    pub fn fields(&self, kind: FieldKind) -> Vec<DisplayField> {
        kind.format(self.record, self.config.field(kind))
    }

    /// All displayed fields in display order, tagged with their type
    pub fn all_fields(&self) -> Vec<(FieldKind, DisplayField)> {
        FieldKind::DISPLAY_ORDER
            .into_iter()
            .filter(|kind| !self.config.field(*kind).ignore)
            .flat_map(|kind| {
                self.fields(kind)
                    .into_iter()
                    .map(move |field| (kind, field))
            })
            .collect()
    }

    /// HTML for one field type
    pub fn field_html(&self, kind: FieldKind) -> Option<String> {
        render_fields(&self.fields(kind), self.config.field(kind))
    }

    /// Values of the record's main (first) title
    pub fn title(&self) -> Vec<String> {
        self.fields(FieldKind::Title)
            .into_iter()
            .next()
            .map(|field| field.values)
            .unwrap_or_default()
    }

    /// The whole record as a `<dl>` fragment
    pub fn to_html(&self) -> String {
        self.render(false)
    }

    /// Like [`Self::to_html`], without the main title (for pages that show it
    /// as a heading)
    pub fn body(&self) -> String {
        self.render(true)
    }

    fn render(&self, skip_main_title: bool) -> String {
        let mut output = String::from("<dl>");

        for kind in FieldKind::DISPLAY_ORDER {
            let config = self.config.field(kind);
            let mut fields = self.fields(kind);

            if skip_main_title && kind == FieldKind::Title {
                // Other titles sharing the main label stay in the body
                if let Some(main) = fields.first_mut().filter(|main| !main.values.is_empty()) {
                    main.values.remove(0);
                }
                fields.retain(|field| !field.values.is_empty());
            }

            if let Some(html) = render_fields(&fields, config) {
                output.push_str(&html);
            }
        }

        output.push_str("</dl>");
        tracing::trace!("Rendered MODS display ({} bytes)", output.len());
        output
    }
}
