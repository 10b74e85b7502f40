//! Document-encoding detection.
//!
//! Derives the document-wide default encoding before the main scan starts.
//! The chain is: an explicit `\ansicpg` declaration (first occurrence wins);
//! if that is absent or resolves to the generic Western default, a scan for
//! font names that imply a non-Latin script; otherwise windows-1252.
//!
//! [`detect_encoding_by_escaped_bytes`] is an additional, opt-in heuristic
//! that classifies `\'hh` escape bytes by script range. It is not part of
//! the default chain: a byte like `0xE9` is a perfectly ordinary accented
//! Latin letter, so range classification is only sound when the caller
//! already knows the document is non-Latin.

use std::sync::LazyLock;

use encoding_rs::Encoding;
use regex::Regex;

use crate::codepage::{self, DEFAULT_ENCODING};

static CODE_PAGE_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\ansicpg(\d+)").expect("valid code-page pattern"));

static NON_LATIN_FONT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "Microsoft YaHei UI|SimSun|NSimSun|FangSong|KaiTi|SimHei|Symbol|Wingdings|Webdings|Arial Cyr|MS Mincho|MS Gothic",
    )
    .expect("valid font-name pattern")
});

static ESCAPED_BYTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\'([0-9a-fA-F]{2})").expect("valid escaped-byte pattern"));

/// Derive the document-wide default encoding for one conversion.
///
/// Never fails; the fallback chain bottoms out at windows-1252.
pub fn detect_document_encoding(rtf: &str) -> &'static Encoding {
    if let Some(encoding) = detect_encoding_by_code_page(rtf) {
        if encoding != DEFAULT_ENCODING {
            return encoding;
        }
    }
    if let Some(encoding) = detect_encoding_by_font_name(rtf) {
        return encoding;
    }
    DEFAULT_ENCODING
}

/// Resolve the first `\ansicpg` declaration in the input, if any.
pub fn detect_encoding_by_code_page(rtf: &str) -> Option<&'static Encoding> {
    let captures = CODE_PAGE_DECLARATION.captures(rtf)?;
    let code_page: u32 = captures[1].parse().ok()?;
    codepage::encoding_for_code_page(code_page)
}

/// Guess the encoding from the first known non-Latin font name in the input.
pub fn detect_encoding_by_font_name(rtf: &str) -> Option<&'static Encoding> {
    let found = NON_LATIN_FONT.find(rtf)?;
    codepage::encoding_for_font_name(found.as_str())
}

/// Guess the encoding from the byte ranges used by `\'hh` escapes.
///
/// Walks the escapes in order and returns on the first byte that falls in
/// a known script range: windows-1251 for `0xC0..=0xFF` (Cyrillic),
/// GB18030 for `0xB0..=0xF7`, Shift-JIS for `0xA1..=0xDF` (half-width
/// katakana), EUC-KR for `0xA1..=0xFE` — checked in that order. Returns
/// `None` when no escape byte is classifiable.
///
/// Opt-in only; see the module docs for why this is not part of
/// [`detect_document_encoding`].
pub fn detect_encoding_by_escaped_bytes(rtf: &str) -> Option<&'static Encoding> {
    for captures in ESCAPED_BYTE.captures_iter(rtf) {
        let Ok(byte) = u8::from_str_radix(&captures[1], 16) else {
            continue;
        };
        if byte < 0x80 {
            continue;
        }
        if (0xC0..=0xFF).contains(&byte) {
            return Some(encoding_rs::WINDOWS_1251);
        }
        if (0xB0..=0xF7).contains(&byte) {
            return Some(encoding_rs::GB18030);
        }
        if (0xA1..=0xDF).contains(&byte) {
            return Some(encoding_rs::SHIFT_JIS);
        }
        if (0xA1..=0xFE).contains(&byte) {
            return Some(encoding_rs::EUC_KR);
        }
    }
    None
}
