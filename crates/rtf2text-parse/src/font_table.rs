//! Font table with per-font charset tags.
//!
//! RTF declares a font's identity (`\f<n>`) and its character set
//! (`\fcharset<n>`) as separate, order-dependent control words inside the
//! same declaration group, so entries support "declare now, refine later":
//! an entry can exist without an encoding until its charset tag arrives.

use std::collections::HashMap;

use encoding_rs::Encoding;

use crate::scope::GroupScope;

/// One font table entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontTableEntry {
    /// Encoding attached by a resolvable `\fcharset` tag, if any.
    pub encoding: Option<&'static Encoding>,
}

/// Mapping from font index to [`FontTableEntry`].
///
/// Populated incrementally during the scan and discarded with it.
#[derive(Debug, Default)]
pub struct FontTable {
    entries: HashMap<i32, FontTableEntry>,
}

impl FontTable {
    /// Create an empty font table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure an entry exists for `index`, creating an untagged one if
    /// absent, and return it for mutation.
    pub fn declare_entry(&mut self, index: i32) -> &mut FontTableEntry {
        self.entries.entry(index).or_default()
    }

    /// Set or overwrite the encoding for `index`, declaring it if needed.
    pub fn attach_encoding(&mut self, index: i32, encoding: &'static Encoding) {
        self.declare_entry(index).encoding = Some(encoding);
    }

    /// Look up the entry for `index`.
    pub fn get(&self, index: i32) -> Option<&FontTableEntry> {
        self.entries.get(&index)
    }

    /// Number of declared fonts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no fonts have been declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The effective encoding for the next escaped-byte decode.
    ///
    /// Precedence, highest first: the explicit encoding of the scope's
    /// active font, then the current document encoding.
    pub fn effective_encoding(
        &self,
        scope: &GroupScope,
        document_encoding: &'static Encoding,
    ) -> &'static Encoding {
        if let Some(index) = scope.font_index {
            if let Some(entry) = self.entries.get(&index) {
                if let Some(encoding) = entry.encoding {
                    return encoding;
                }
            }
        }
        document_encoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_creates_untagged_entry() {
        let mut table = FontTable::new();
        assert!(table.is_empty());
        table.declare_entry(0);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0), Some(&FontTableEntry { encoding: None }));
    }

    #[test]
    fn declare_is_get_or_create() {
        let mut table = FontTable::new();
        table.attach_encoding(2, encoding_rs::WINDOWS_1251);
        // re-declaring must not reset the tagged encoding
        table.declare_entry(2);
        assert_eq!(
            table.get(2).and_then(|e| e.encoding),
            Some(encoding_rs::WINDOWS_1251)
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn attach_overwrites_existing_encoding() {
        let mut table = FontTable::new();
        table.attach_encoding(1, encoding_rs::WINDOWS_1251);
        table.attach_encoding(1, encoding_rs::BIG5);
        assert_eq!(table.get(1).and_then(|e| e.encoding), Some(encoding_rs::BIG5));
    }

    #[test]
    fn effective_encoding_prefers_font_encoding() {
        let mut table = FontTable::new();
        table.attach_encoding(0, encoding_rs::WINDOWS_1251);
        let scope = GroupScope {
            font_index: Some(0),
            ..GroupScope::default()
        };
        assert_eq!(
            table.effective_encoding(&scope, encoding_rs::WINDOWS_1252),
            encoding_rs::WINDOWS_1251
        );
    }

    #[test]
    fn effective_encoding_without_font_uses_document_encoding() {
        let table = FontTable::new();
        let scope = GroupScope::default();
        assert_eq!(
            table.effective_encoding(&scope, encoding_rs::GBK),
            encoding_rs::GBK
        );
    }

    #[test]
    fn effective_encoding_untagged_font_uses_document_encoding() {
        let mut table = FontTable::new();
        table.declare_entry(4);
        let scope = GroupScope {
            font_index: Some(4),
            ..GroupScope::default()
        };
        assert_eq!(
            table.effective_encoding(&scope, encoding_rs::WINDOWS_1252),
            encoding_rs::WINDOWS_1252
        );
    }

    #[test]
    fn effective_encoding_undeclared_font_uses_document_encoding() {
        let table = FontTable::new();
        let scope = GroupScope {
            font_index: Some(9),
            ..GroupScope::default()
        };
        assert_eq!(
            table.effective_encoding(&scope, encoding_rs::WINDOWS_1252),
            encoding_rs::WINDOWS_1252
        );
    }
}
