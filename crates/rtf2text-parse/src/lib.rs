//! rtf2text-parse: RTF scanning and charset resolution.
//!
//! This crate implements the single-pass RTF scanner (group scope tracking,
//! control-word dispatch, escaped-byte decoding) and the character-encoding
//! resolution subsystem (code-page catalog, font charset tags, document
//! encoding detection) of rtf2text-rs. It depends on rtf2text-core for the
//! shared error and warning types.

pub mod charset_detect;
pub mod codepage;
pub mod converter;
pub mod error;
pub mod font_table;
pub mod scope;

pub use converter::convert_rtf;
pub use error::ConvertError;
pub use rtf2text_core;
