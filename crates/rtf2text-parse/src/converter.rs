//! RTF scanner and driver loop.
//!
//! A single forward pass over the raw input. Each position is classified
//! as a literal character, group delimiter, escaped-byte run, or control
//! word/symbol, and dispatched to the matching state transition. Output is
//! accumulated incrementally and gated by the current scope's suppression
//! flags. Parsing terminates at the close of the root group; anything after
//! it is not part of the document.

use encoding_rs::Encoding;
use rtf2text_core::{ConvertResult, ConvertWarning, ConvertWarningCode};

use crate::charset_detect::detect_document_encoding;
use crate::codepage;
use crate::error::ConvertError;
use crate::font_table::FontTable;
use crate::scope::ScopeStack;

/// Convert RTF source into plain text with minimal structural markup.
///
/// Paragraph breaks become `\n` and tabs become `\t`; all other formatting
/// is dropped. Escaped bytes are decoded under the effective encoding
/// resolved from the font table and the document encoding.
///
/// # Errors
///
/// Returns [`ConvertError::MalformedControlSequence`] when an escape
/// introducer is not followed by a control symbol, control word, or
/// escaped-byte run. Encoding problems are never fatal; they surface as
/// warnings on the returned [`ConvertResult`].
pub fn convert_rtf(rtf: &str) -> Result<ConvertResult<String>, ConvertError> {
    Converter::new(rtf).run()
}

/// Scanner state for one conversion call.
///
/// All of this is created at the start of the call and discarded at its
/// end; nothing is shared across conversions.
struct Converter<'a> {
    input: &'a str,
    bytes: &'a [u8],
    /// Cursor into `bytes`; always on a UTF-8 boundary of `input`.
    pos: usize,
    scopes: ScopeStack,
    fonts: FontTable,
    document_encoding: &'static Encoding,
    output: String,
    warnings: Vec<ConvertWarning>,
}

impl<'a> Converter<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            scopes: ScopeStack::new(),
            fonts: FontTable::new(),
            document_encoding: detect_document_encoding(input),
            output: String::new(),
            warnings: Vec::new(),
        }
    }

    fn run(mut self) -> Result<ConvertResult<String>, ConvertError> {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                // format-internal line breaks, not content
                b'\r' | b'\n' => self.pos += 1,
                b'{' => {
                    self.scopes.push();
                    self.pos += 1;
                }
                b'}' => {
                    // Closing at floor depth terminates rather than
                    // underflowing; closing into the floor terminates the
                    // scan. Remaining input is not part of the document.
                    if self.scopes.at_floor() || self.scopes.pop() {
                        break;
                    }
                    self.pos += 1;
                }
                b'\\' => self.dispatch_escape()?,
                _ => self.emit_next_literal(),
            }
        }
        Ok(ConvertResult::with_warnings(self.output, self.warnings))
    }

    // --- escape dispatch ---

    /// Classify the construct at an escape introducer and apply it.
    ///
    /// Priority order: escaped-byte run, then control word, then control
    /// symbol. An introducer matching none of these is a structural error.
    fn dispatch_escape(&mut self) -> Result<(), ConvertError> {
        let escape_pos = self.pos;

        if let Some(raw) = self.match_escaped_byte_run() {
            self.decode_and_emit(&raw, escape_pos);
            return Ok(());
        }

        let Some(&next) = self.bytes.get(self.pos + 1) else {
            return Err(ConvertError::MalformedControlSequence {
                offset: escape_pos,
                found: '\\',
            });
        };

        if next.is_ascii_alphabetic() {
            let (word, number) = self.take_control_word();
            self.apply_control_word(word, number, escape_pos);
            Ok(())
        } else if next.is_ascii_digit() {
            // A bare digit after the escape matches neither a control word
            // nor an escaped-byte run.
            Err(ConvertError::MalformedControlSequence {
                offset: escape_pos,
                found: next as char,
            })
        } else {
            // Control symbol: exactly one non-letter character.
            let symbol = self.input[self.pos + 1..]
                .chars()
                .next()
                .unwrap_or('\\');
            self.pos += 1 + symbol.len_utf8();
            self.apply_control_symbol(symbol);
            Ok(())
        }
    }

    /// Match a run of one-or-more consecutive `\'hh` escapes.
    ///
    /// Returns the concatenated raw bytes and advances the cursor past the
    /// whole run, or leaves the cursor untouched when nothing matches.
    /// Grouping the run matters for multi-byte encodings, where individual
    /// pairs are not independently decodable.
    fn match_escaped_byte_run(&mut self) -> Option<Vec<u8>> {
        let mut raw = Vec::new();
        let mut pos = self.pos;
        while pos + 3 < self.bytes.len()
            && self.bytes[pos] == b'\\'
            && self.bytes[pos + 1] == b'\''
        {
            let (Some(hi), Some(lo)) = (
                hex_value(self.bytes[pos + 2]),
                hex_value(self.bytes[pos + 3]),
            ) else {
                break;
            };
            raw.push(hi << 4 | lo);
            pos += 4;
        }
        if raw.is_empty() {
            None
        } else {
            self.pos = pos;
            Some(raw)
        }
    }

    /// Decode an escaped-byte run once, under the effective encoding.
    fn decode_and_emit(&mut self, raw: &[u8], at: usize) {
        let encoding = self
            .fonts
            .effective_encoding(self.scopes.current(), self.document_encoding);
        let (decoded, _, had_errors) = encoding.decode(raw);
        if had_errors {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                encoding = encoding.name(),
                offset = at,
                "escaped-byte run decoded with replacement characters"
            );
            self.warnings.push(
                ConvertWarning::with_code(
                    ConvertWarningCode::DecodeReplacement,
                    format!(
                        "{} of {} escaped bytes decoded with replacement characters",
                        encoding.name(),
                        raw.len()
                    ),
                )
                .at_offset(at),
            );
        }
        self.emit_str(&decoded);
    }

    /// Consume a control word: letters, an optional signed integer, and an
    /// optional single trailing space.
    fn take_control_word(&mut self) -> (&'a str, Option<i32>) {
        let input = self.input;
        let start = self.pos + 1;
        let mut end = start;
        while end < self.bytes.len() && self.bytes[end].is_ascii_alphabetic() {
            end += 1;
        }
        let word = &input[start..end];

        let mut num_end = end;
        if num_end < self.bytes.len() && self.bytes[num_end] == b'-' {
            num_end += 1;
        }
        while num_end < self.bytes.len() && self.bytes[num_end].is_ascii_digit() {
            num_end += 1;
        }
        let number = if num_end > end && self.bytes[num_end - 1].is_ascii_digit() {
            // out-of-range arguments are treated as absent
            input[end..num_end].parse::<i32>().ok()
        } else {
            // a lone '-' with no digits belongs to the following content
            num_end = end;
            None
        };

        self.pos = num_end;
        if self.pos < self.bytes.len() && self.bytes[self.pos] == b' ' {
            self.pos += 1;
        }
        (word, number)
    }

    /// Apply a recognized control word; anything else is a silent no-op,
    /// preserving forward compatibility with format extensions.
    fn apply_control_word(&mut self, word: &str, number: Option<i32>, at: usize) {
        match word {
            "par" => self.emit_char('\n'),
            "tab" => self.emit_char('\t'),
            // \htmlrtf opens a suppressed region, \htmlrtf0 closes it.
            // Encoded as a toggle on the current scope, not a group marker:
            // it persists until cleared or until the scope ends.
            "htmlrtf" => self.scopes.current_mut().suppress_output = number.is_none(),
            "ansicpg" => {
                if let Some(code_page) = number {
                    self.set_document_encoding(code_page, at);
                }
            }
            // Declaration groups: nothing inside them is content, however
            // deeply nested, since children inherit the flag.
            "fonttbl" | "colortbl" => self.scopes.current_mut().ignore_output = true,
            "f" => {
                if let Some(index) = number {
                    self.fonts.declare_entry(index);
                    self.scopes.current_mut().font_index = Some(index);
                }
            }
            "fcharset" => {
                if let (Some(tag), Some(font_index)) =
                    (number, self.scopes.current().font_index)
                {
                    self.attach_font_encoding(font_index, tag, at);
                }
            }
            "uc" => {
                self.scopes.current_mut().unicode_skip_count = number.unwrap_or(1).max(0);
            }
            "u" => {
                if let Some(value) = number {
                    self.emit_unicode_codepoint(value);
                }
            }
            _ => {}
        }
    }

    /// Apply a control symbol. `\{`, `\}` and `\\` emit the literal
    /// character; everything else (including `\'` with malformed hex
    /// digits) is a no-op.
    fn apply_control_symbol(&mut self, symbol: char) {
        match symbol {
            '{' | '}' | '\\' => self.emit_char(symbol),
            _ => {}
        }
    }

    // --- control-word effects ---

    /// `\ansicpg` mid-stream: overwrite the document encoding from this
    /// point forward. Already-emitted output is never re-decoded.
    fn set_document_encoding(&mut self, code_page: i32, at: usize) {
        let resolved = u32::try_from(code_page)
            .ok()
            .and_then(codepage::encoding_for_code_page);
        match resolved {
            Some(encoding) => self.document_encoding = encoding,
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    code_page,
                    offset = at,
                    "no encoding for code page; keeping current document encoding"
                );
                self.warnings.push(
                    ConvertWarning::with_code(
                        ConvertWarningCode::UnresolvableCodePage,
                        format!(
                            "no encoding for code page {code_page}; keeping {}",
                            self.document_encoding.name()
                        ),
                    )
                    .at_offset(at),
                );
            }
        }
    }

    /// `\fcharset`: tag the active font if the charset number resolves.
    fn attach_font_encoding(&mut self, font_index: i32, tag: i32, at: usize) {
        let resolved = u32::try_from(tag)
            .ok()
            .and_then(codepage::encoding_for_charset_tag);
        match resolved {
            Some(encoding) => self.fonts.attach_encoding(font_index, encoding),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    charset = tag,
                    font_index,
                    offset = at,
                    "no encoding for charset tag; leaving font untagged"
                );
                self.warnings.push(
                    ConvertWarning::with_code(
                        ConvertWarningCode::UnresolvableCharsetTag,
                        format!("no encoding for charset tag {tag}"),
                    )
                    .at_offset(at)
                    .for_font(font_index),
                );
            }
        }
    }

    /// `\u<n>`: emit the codepoint, then skip the fallback representation.
    fn emit_unicode_codepoint(&mut self, value: i32) {
        // The format carries signed 16-bit values; negative ones wrap.
        let code = (value as i64 & 0xFFFF) as u32;
        // Unpaired surrogate halves cannot exist in a Rust string.
        let ch = char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER);
        self.emit_char(ch);
        // The skip is raw-positional, not unit-aware: it counts input
        // positions, not decoded units. Kept bug-compatible with the
        // reference behavior; see the pinned edge-case tests.
        let skip = self.scopes.current().unicode_skip_count.max(0) as usize;
        self.skip_raw(skip);
    }

    // --- cursor and output helpers ---

    /// Advance the cursor by `count` raw positions, then forward to the
    /// next UTF-8 boundary so the scan can continue safely.
    fn skip_raw(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.bytes.len());
        while self.pos < self.bytes.len() && !self.input.is_char_boundary(self.pos) {
            self.pos += 1;
        }
    }

    /// Emit the literal character under the cursor and advance past it.
    fn emit_next_literal(&mut self) {
        match self.input[self.pos..].chars().next() {
            Some(ch) => {
                self.emit_char(ch);
                self.pos += ch.len_utf8();
            }
            None => self.pos = self.bytes.len(),
        }
    }

    fn emit_char(&mut self, ch: char) {
        if self.scopes.current().emits_output() {
            self.output.push(ch);
        }
    }

    fn emit_str(&mut self, s: &str) {
        if self.scopes.current().emits_output() {
            self.output.push_str(s);
        }
    }
}

/// Convert a hex digit to its value, or `None` for non-hex bytes.
fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
