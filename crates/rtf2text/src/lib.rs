//! rtf2text: Extract plain text from legacy RTF documents.
//!
//! This is the public API facade crate for rtf2text-rs. It re-exports
//! types from rtf2text-core and uses rtf2text-parse for scanning and
//! charset resolution.
//!
//! # Architecture
//!
//! - **rtf2text-core**: Converter-independent error and warning types
//! - **rtf2text-parse**: Single-pass RTF scanner and encoding resolution
//! - **rtf2text** (this crate): Public API that ties everything together
//!
//! # Examples
//!
//! ```
//! let text = rtf2text::convert(r"{\rtf1\ansicpg1252 Hello\par}").unwrap();
//! assert_eq!(text, "Hello\n");
//! ```
//!
//! Conversions are pure and deterministic: all state lives inside one
//! call, so concurrent conversions need no synchronization.

pub use rtf2text_core;
pub use rtf2text_core::{ConvertResult, ConvertWarning, ConvertWarningCode, RtfError};
pub use rtf2text_parse;

/// Convert RTF source into plain text.
///
/// Paragraph breaks become `\n`, tabs become `\t`, and everything else is
/// either decoded content or dropped formatting. Encoding fallbacks are
/// silent here; use [`convert_with_warnings`] to observe them.
///
/// # Errors
///
/// Returns [`RtfError::MalformedControlSequence`] when an escape
/// introducer matches no control symbol, control word, or escaped-byte
/// run. No partial output is returned on failure.
///
/// # Examples
///
/// ```
/// let text = rtf2text::convert(r"{\rtf1 caf\'e9\par}").unwrap();
/// assert_eq!(text, "café\n");
/// ```
pub fn convert(rtf: &str) -> Result<String, RtfError> {
    rtf2text_parse::convert_rtf(rtf)
        .map(|result| result.value)
        .map_err(RtfError::from)
}

/// Convert RTF source into plain text, reporting non-fatal fallbacks.
///
/// The returned [`ConvertResult`] pairs the extracted text with the
/// warnings collected along the way (unresolvable code pages or charset
/// tags, lossy decodes).
///
/// # Errors
///
/// Same failure contract as [`convert`].
pub fn convert_with_warnings(rtf: &str) -> Result<ConvertResult<String>, RtfError> {
    rtf2text_parse::convert_rtf(rtf).map_err(RtfError::from)
}
