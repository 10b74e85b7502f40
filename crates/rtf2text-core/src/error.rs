//! Error and warning types for rtf2text-rs.
//!
//! Provides [`RtfError`] for fatal errors that abort a conversion,
//! [`ConvertWarning`] for non-fatal issues that allow the conversion to
//! continue with a fallback, and [`ConvertResult`] for pairing a value
//! with collected warnings.

use std::fmt;

/// Fatal error types for RTF conversion.
///
/// A conversion either returns the extracted text or exactly one of these;
/// partial output is never returned on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RtfError {
    /// An escape introducer was not followed by a control symbol, control
    /// word, or escaped-byte run.
    MalformedControlSequence {
        /// Byte offset of the escape introducer in the input.
        offset: usize,
        /// The character that could not be matched.
        found: char,
    },
    /// Any other error not covered by specific variants.
    Other(String),
}

impl fmt::Display for RtfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RtfError::MalformedControlSequence { offset, found } => write!(
                f,
                "malformed control sequence: cannot match {found:?} at byte offset {offset} to a control symbol, control word, or escaped-byte run"
            ),
            RtfError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RtfError {}

/// Machine-readable warning code for categorizing conversion issues.
///
/// Each variant represents a category of non-fatal issue. Use
/// [`Other`](ConvertWarningCode::Other) for uncategorized warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum ConvertWarningCode {
    /// A numeric code-page declaration has no known encoding; the current
    /// document encoding was kept.
    UnresolvableCodePage,
    /// A numeric font charset tag has no known encoding; the font entry
    /// was left untagged.
    UnresolvableCharsetTag,
    /// The decoder produced replacement characters for an escaped-byte run.
    DecodeReplacement,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl ConvertWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            ConvertWarningCode::UnresolvableCodePage => "UNRESOLVABLE_CODE_PAGE",
            ConvertWarningCode::UnresolvableCharsetTag => "UNRESOLVABLE_CHARSET_TAG",
            ConvertWarningCode::DecodeReplacement => "DECODE_REPLACEMENT",
            ConvertWarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for ConvertWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal warning encountered during conversion.
///
/// Warnings let the conversion continue with a documented fallback (e.g.
/// an unresolvable charset tag falls back to the document encoding). They
/// include a structured [`code`](ConvertWarning::code), a human-readable
/// description, and optional source context.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvertWarning {
    /// Machine-readable warning code.
    pub code: ConvertWarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// Byte offset in the input where the warning occurred, if applicable.
    pub offset: Option<usize>,
    /// Font table index associated with the warning, if applicable.
    pub font_index: Option<i32>,
}

impl ConvertWarning {
    /// Create a warning with just a description.
    ///
    /// Uses [`ConvertWarningCode::Other`] as the default code.
    pub fn new(description: impl Into<String>) -> Self {
        let desc = description.into();
        Self {
            code: ConvertWarningCode::Other(desc.clone()),
            description: desc,
            offset: None,
            font_index: None,
        }
    }

    /// Create a warning with a specific code and description.
    pub fn with_code(code: ConvertWarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            offset: None,
            font_index: None,
        }
    }

    /// Set the input byte offset, returning the modified warning (builder pattern).
    pub fn at_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the font table index, returning the modified warning (builder pattern).
    pub fn for_font(mut self, font_index: i32) -> Self {
        self.font_index = Some(font_index);
        self
    }

    /// Convert this warning into an [`RtfError`].
    ///
    /// Useful for callers that want to escalate fallbacks to failures.
    pub fn to_error(&self) -> RtfError {
        RtfError::Other(self.to_string())
    }
}

impl fmt::Display for ConvertWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(offset) = self.offset {
            write!(f, " (offset {offset})")?;
        }
        if let Some(font_index) = self.font_index {
            write!(f, " [font #{font_index}]")?;
        }
        Ok(())
    }
}

/// Result wrapper that pairs a value with collected warnings.
///
/// Used when a conversion succeeds but fell back somewhere along the way.
#[derive(Debug, Clone)]
pub struct ConvertResult<T> {
    /// The converted value.
    pub value: T,
    /// Warnings collected during conversion.
    pub warnings: Vec<ConvertWarning>,
}

impl<T> ConvertResult<T> {
    /// Create a result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<ConvertWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Transform the value while preserving warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ConvertResult<U> {
        ConvertResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- RtfError tests ---

    #[test]
    fn malformed_control_sequence_display() {
        let err = RtfError::MalformedControlSequence {
            offset: 17,
            found: '5',
        };
        assert_eq!(
            err.to_string(),
            "malformed control sequence: cannot match '5' at byte offset 17 to a control symbol, control word, or escaped-byte run"
        );
    }

    #[test]
    fn malformed_control_sequence_fields() {
        let err = RtfError::MalformedControlSequence {
            offset: 3,
            found: '\\',
        };
        if let RtfError::MalformedControlSequence { offset, found } = &err {
            assert_eq!(*offset, 3);
            assert_eq!(*found, '\\');
        } else {
            panic!("expected MalformedControlSequence");
        }
    }

    #[test]
    fn error_other() {
        let err = RtfError::Other("something went wrong".to_string());
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn error_implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(RtfError::MalformedControlSequence {
            offset: 0,
            found: 'x',
        });
        assert!(err.to_string().contains("byte offset 0"));
    }

    #[test]
    fn error_clone_and_eq() {
        let err1 = RtfError::MalformedControlSequence {
            offset: 9,
            found: '9',
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    // --- ConvertWarningCode tests ---

    #[test]
    fn warning_code_unresolvable_code_page() {
        assert_eq!(
            ConvertWarningCode::UnresolvableCodePage.as_str(),
            "UNRESOLVABLE_CODE_PAGE"
        );
    }

    #[test]
    fn warning_code_unresolvable_charset_tag() {
        assert_eq!(
            ConvertWarningCode::UnresolvableCharsetTag.as_str(),
            "UNRESOLVABLE_CHARSET_TAG"
        );
    }

    #[test]
    fn warning_code_decode_replacement() {
        assert_eq!(
            ConvertWarningCode::DecodeReplacement.as_str(),
            "DECODE_REPLACEMENT"
        );
    }

    #[test]
    fn warning_code_other_preserves_custom_message() {
        let code = ConvertWarningCode::Other("custom issue".to_string());
        assert_eq!(code.as_str(), "OTHER");
        if let ConvertWarningCode::Other(msg) = &code {
            assert_eq!(msg, "custom issue");
        } else {
            panic!("expected Other variant");
        }
    }

    #[test]
    fn warning_code_display() {
        assert_eq!(
            format!("{}", ConvertWarningCode::UnresolvableCodePage),
            "UNRESOLVABLE_CODE_PAGE"
        );
        assert_eq!(format!("{}", ConvertWarningCode::Other("x".into())), "OTHER");
    }

    // --- ConvertWarning tests ---

    #[test]
    fn warning_new_with_description_only() {
        let w = ConvertWarning::new("no encoding for code page 9999");
        assert_eq!(w.description, "no encoding for code page 9999");
        assert!(matches!(w.code, ConvertWarningCode::Other(_)));
        assert_eq!(w.offset, None);
        assert_eq!(w.font_index, None);
        assert_eq!(w.to_string(), "[OTHER] no encoding for code page 9999");
    }

    #[test]
    fn warning_with_code_and_offset() {
        let w = ConvertWarning::with_code(
            ConvertWarningCode::UnresolvableCodePage,
            "no encoding for code page 9999",
        )
        .at_offset(42);
        assert_eq!(w.code, ConvertWarningCode::UnresolvableCodePage);
        assert_eq!(w.offset, Some(42));
        assert_eq!(
            w.to_string(),
            "[UNRESOLVABLE_CODE_PAGE] no encoding for code page 9999 (offset 42)"
        );
    }

    #[test]
    fn warning_with_font_context() {
        let w = ConvertWarning::with_code(
            ConvertWarningCode::UnresolvableCharsetTag,
            "no encoding for charset tag 130",
        )
        .at_offset(120)
        .for_font(2);
        assert_eq!(w.font_index, Some(2));
        assert_eq!(
            w.to_string(),
            "[UNRESOLVABLE_CHARSET_TAG] no encoding for charset tag 130 (offset 120) [font #2]"
        );
    }

    #[test]
    fn warning_to_error() {
        let w = ConvertWarning::with_code(ConvertWarningCode::DecodeReplacement, "lossy decode");
        let err = w.to_error();
        assert!(matches!(err, RtfError::Other(_)));
        assert!(err.to_string().contains("lossy decode"));
    }

    #[test]
    fn warning_clone_and_eq() {
        let w1 = ConvertWarning::new("test warning").at_offset(5);
        let w2 = w1.clone();
        assert_eq!(w1, w2);
    }

    // --- ConvertResult tests ---

    #[test]
    fn convert_result_ok_no_warnings() {
        let result = ConvertResult::ok(42);
        assert_eq!(result.value, 42);
        assert!(result.warnings.is_empty());
        assert!(result.is_clean());
    }

    #[test]
    fn convert_result_with_warnings() {
        let warnings = vec![
            ConvertWarning::new("warn 1"),
            ConvertWarning::new("warn 2").at_offset(7),
        ];
        let result = ConvertResult::with_warnings("hello", warnings);
        assert_eq!(result.value, "hello");
        assert_eq!(result.warnings.len(), 2);
        assert!(!result.is_clean());
    }

    #[test]
    fn convert_result_map_preserves_warnings() {
        let warnings = vec![ConvertWarning::new("test")];
        let result = ConvertResult::with_warnings(10, warnings);
        let mapped = result.map(|v| v * 2);
        assert_eq!(mapped.value, 20);
        assert_eq!(mapped.warnings.len(), 1);
        assert_eq!(mapped.warnings[0].description, "test");
    }
}
