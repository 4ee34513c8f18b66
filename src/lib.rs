//! MODS display
//!
//! Formats bibliographic metadata encoded in MODS XML into labeled display
//! fields and HTML fragments for a library catalog page.

pub mod config;
pub mod error;
pub mod fields;
pub mod html;
pub mod mods;

pub use config::{DisplayConfig, FieldConfig};
pub use error::{DisplayError, DisplayResult};
pub use fields::{DisplayField, FieldKind};
pub use html::ModsDisplayHtml;
pub use mods::ModsRecord;

/// Parse a MODS document and render it as a `<dl>` fragment
pub fn render_xml(xml: &str, config: &DisplayConfig) -> DisplayResult<String> {
    let record = ModsRecord::parse(xml)?;
    Ok(ModsDisplayHtml::new(&record, config).to_html())
}
