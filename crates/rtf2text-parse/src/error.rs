//! Error types for the scanning layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides
//! [`ConvertError`] for scan-level failures and converts them to
//! [`RtfError`] for unified error handling across the library.

use rtf2text_core::RtfError;
use thiserror::Error;

/// Error type for RTF scanning operations.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An escape introducer was not followed by a control symbol, control
    /// word, or escaped-byte run.
    #[error(
        "malformed control sequence: cannot match {found:?} at byte offset {offset} to a control symbol, control word, or escaped-byte run"
    )]
    MalformedControlSequence {
        /// Byte offset of the escape introducer in the input.
        offset: usize,
        /// The character that could not be matched.
        found: char,
    },

    /// A core library error.
    #[error(transparent)]
    Core(#[from] RtfError),
}

impl From<ConvertError> for RtfError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::MalformedControlSequence { offset, found } => {
                RtfError::MalformedControlSequence { offset, found }
            }
            ConvertError::Core(e) => e,
        }
    }
}
