//! MODS field formatters
//!
//! Each field type reads its own elements from a [`ModsRecord`] and reduces
//! them to labeled [`DisplayField`] rows. The set of field types is closed;
//! [`FieldKind::format`] dispatches to one formatting function per type.

pub mod access_condition;
pub mod cartographics;
pub mod description;
pub mod language;
pub mod language_codes;
pub mod licenses;
pub mod related_item;
pub mod title;
pub mod values;

use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::mods::ModsRecord;

pub use values::{collapse_fields, DisplayField};

/// The field types this crate knows how to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Title,
    RelatedItem,
    AccessCondition,
    Language,
    Description,
    Cartographics,
}

impl FieldKind {
    /// Field types in the order a full record displays them
    pub const DISPLAY_ORDER: [FieldKind; 6] = [
        FieldKind::Title,
        FieldKind::Language,
        FieldKind::Description,
        FieldKind::Cartographics,
        FieldKind::RelatedItem,
        FieldKind::AccessCondition,
    ];

    /// Format this field type from a record.
    ///
    /// A configured label replaces every label the formatter produced; fields
    /// are collapsed again afterwards so they end up in a single row.
    pub fn format(self, record: &ModsRecord, config: &FieldConfig) -> Vec<DisplayField> {
        let fields = match self {
            FieldKind::Title => title::format(&record.title_info()),
            FieldKind::RelatedItem => related_item::format(&record.related_item()),
            FieldKind::AccessCondition => access_condition::format(&record.access_condition()),
            FieldKind::Language => language::format(&record.language()),
            FieldKind::Description => description::format(&record.physical_description()),
            FieldKind::Cartographics => cartographics::format(&record.subject()),
        };

        match &config.label {
            Some(label) if !fields.is_empty() => {
                let label = values::with_colon(label);
                collapse_fields(
                    fields
                        .into_iter()
                        .map(|field| DisplayField::new(label.clone(), field.values))
                        .collect(),
                )
            }
            _ => fields,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldKind::Title => "title",
            FieldKind::RelatedItem => "related_item",
            FieldKind::AccessCondition => "access_condition",
            FieldKind::Language => "language",
            FieldKind::Description => "description",
            FieldKind::Cartographics => "cartographics",
        };
        write!(f, "{}", name)
    }
}
