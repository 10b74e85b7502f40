//! Code-page and charset-tag resolution.
//!
//! Static, read-only mappings from the numeric identifiers RTF uses —
//! `\ansicpg<N>` code pages and `\fcharset<N>` font charset tags — to
//! concrete [`encoding_rs`] encodings, plus a font-name heuristic table for
//! documents that carry no usable declaration. Identifiers with no
//! equivalent in the WHATWG Encoding Standard (the IBM OEM pages, Johab,
//! UTF-7, HZ, UTF-32) resolve to `None`; callers substitute the current
//! document encoding in that case.

use encoding_rs::Encoding;

/// The fixed default single-byte Western encoding.
///
/// Used when a document declares nothing usable, and as the floor of every
/// fallback chain.
pub static DEFAULT_ENCODING: &Encoding = encoding_rs::WINDOWS_1252;

/// Resolve an `\ansicpg` code-page number to an encoding.
///
/// Covers the Windows code-page identifier space. `65001` resolves to
/// UTF-8. Returns `None` for identifiers with no encoding in the target
/// runtime; the conversion then keeps its current document encoding.
pub fn encoding_for_code_page(code_page: u32) -> Option<&'static Encoding> {
    match code_page {
        866 => Some(encoding_rs::IBM866),
        874 => Some(encoding_rs::WINDOWS_874),
        932 => Some(encoding_rs::SHIFT_JIS),
        936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),
        1200 => Some(encoding_rs::UTF_16LE),
        1201 => Some(encoding_rs::UTF_16BE),
        1250 => Some(encoding_rs::WINDOWS_1250),
        1251 => Some(encoding_rs::WINDOWS_1251),
        1252 => Some(encoding_rs::WINDOWS_1252),
        1253 => Some(encoding_rs::WINDOWS_1253),
        1254 => Some(encoding_rs::WINDOWS_1254),
        1255 => Some(encoding_rs::WINDOWS_1255),
        1256 => Some(encoding_rs::WINDOWS_1256),
        1257 => Some(encoding_rs::WINDOWS_1257),
        1258 => Some(encoding_rs::WINDOWS_1258),
        10000 => Some(encoding_rs::MACINTOSH),
        // The Encoding Standard folds x-mac-ukrainian into x-mac-cyrillic.
        10007 | 10017 => Some(encoding_rs::X_MAC_CYRILLIC),
        20127 => Some(encoding_rs::WINDOWS_1252), // US-ASCII
        28591 => Some(encoding_rs::WINDOWS_1252), // ISO 8859-1
        28592 => Some(encoding_rs::ISO_8859_2),
        28593 => Some(encoding_rs::ISO_8859_3),
        28594 => Some(encoding_rs::ISO_8859_4),
        28595 => Some(encoding_rs::ISO_8859_5),
        28596 => Some(encoding_rs::ISO_8859_6),
        28597 => Some(encoding_rs::ISO_8859_7),
        28598 => Some(encoding_rs::ISO_8859_8),
        28599 => Some(encoding_rs::WINDOWS_1254), // ISO 8859-9
        28603 => Some(encoding_rs::ISO_8859_13),
        28605 => Some(encoding_rs::ISO_8859_15),
        50220 => Some(encoding_rs::ISO_2022_JP),
        51932 => Some(encoding_rs::EUC_JP),
        51949 => Some(encoding_rs::EUC_KR),
        54936 => Some(encoding_rs::GB18030),
        65001 => Some(encoding_rs::UTF_8),
        // Windows charset tags and code pages share a numeric namespace in
        // legacy producers; accept the tag range here too.
        n if n < 256 => encoding_for_charset_tag(n),
        // IBM OEM pages (437, 775, 850-869), Johab (1361), most Mac script
        // pages, UTF-32 (12000/12001), ISO-2022-KR, HZ, UTF-7: no mapping.
        _ => None,
    }
}

/// Resolve a `\fcharset` font charset tag to an encoding.
///
/// Tags are the small Windows `CHARSET` constants attached to fonts, not
/// code pages. Returns `None` for tags with no encoding in the target
/// runtime (e.g. `130` Johab, `254` OEM); the font entry is then left
/// untagged and decoding falls back to the document encoding.
pub fn encoding_for_charset_tag(charset: u32) -> Option<&'static Encoding> {
    match charset {
        0 => Some(encoding_rs::WINDOWS_1252),    // ANSI
        128 => Some(encoding_rs::SHIFT_JIS),     // Japanese
        129 => Some(encoding_rs::EUC_KR),        // Korean (Unified Hangul)
        134 => Some(encoding_rs::GBK),           // Simplified Chinese
        136 => Some(encoding_rs::BIG5),          // Traditional Chinese
        161 => Some(encoding_rs::WINDOWS_1253),  // Greek
        162 | 163 => Some(encoding_rs::WINDOWS_1254), // Turkish
        177 => Some(encoding_rs::WINDOWS_1255),  // Hebrew
        178 => Some(encoding_rs::WINDOWS_1256),  // Arabic
        204 => Some(encoding_rs::WINDOWS_1251),  // Cyrillic
        238 => Some(encoding_rs::WINDOWS_1257),  // Baltic
        255 => Some(encoding_rs::WINDOWS_1252),  // platform default
        // 130 (Johab) and 254 (OEM United States) have no mapping.
        _ => None,
    }
}

/// Guess an encoding from a font name known to imply a non-Latin script.
///
/// Used by the document-encoding pre-scan when the declared code page is
/// absent or resolves to the generic Western default. Returns `None` for
/// font names that carry no script hint.
pub fn encoding_for_font_name(font_name: &str) -> Option<&'static Encoding> {
    match font_name {
        "Microsoft YaHei UI" | "SimSun" | "NSimSun" | "FangSong" | "KaiTi" | "SimHei" => {
            Some(encoding_rs::GB18030)
        }
        "Arial Cyr" => Some(encoding_rs::WINDOWS_1251),
        "MS Mincho" | "MS Gothic" => Some(encoding_rs::SHIFT_JIS),
        // Symbol fonts carry no script of their own.
        "Symbol" | "Wingdings" | "Webdings" => Some(encoding_rs::WINDOWS_1252),
        _ => None,
    }
}
