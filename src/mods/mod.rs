//! MODS record access
//!
//! This module turns MODS XML into an owned element tree that the field
//! formatters read from. It performs no schema validation.

pub mod parser;

pub use parser::{Element, ModsRecord, Node};
