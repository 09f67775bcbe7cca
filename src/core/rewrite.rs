//! Literal substitution in source content

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::extract::find_literals;

/// Mapping from original literal text to its translation.
///
/// Keys are unique and kept in insertion order, which reflects first
/// occurrence in the scanned content; the JSON representation is an object
/// with the same ordering. Built fresh per request, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationMapping {
    pairs: Vec<(String, String)>,
}

impl TranslationMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from (original, translated) pairs, keeping the first
    /// entry for any repeated key
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut mapping = Self::new();
        for (original, translated) in pairs {
            mapping.insert(original, translated);
        }
        mapping
    }

    /// Insert a pair unless the key is already present
    pub fn insert(&mut self, original: String, translated: String) {
        if self.get(&original).is_none() {
            self.pairs.push((original, translated));
        }
    }

    /// Look up the translation for an original text
    pub fn get(&self, original: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == original)
            .map(|(_, value)| value.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the mapping holds no entries
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Serialize for TranslationMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (original, translated) in &self.pairs {
            map.serialize_entry(original, translated)?;
        }
        map.end()
    }
}

/// Rewrite `content`, replacing the inner text of every matched literal that
/// is keyed in `mapping` with its translation.
///
/// The original quote characters are preserved and any occurrence of that
/// quote character inside the translated text is escaped with a backslash.
/// Literals absent from the mapping, and all surrounding content, are copied
/// byte for byte. Matching runs once against the original content, so a
/// replacement never affects the matching of later literals.
pub fn apply_mapping(content: &str, mapping: &TranslationMapping) -> String {
    let mut output = String::with_capacity(content.len());
    let mut copied = 0;

    for literal in find_literals(content) {
        let Some(translated) = mapping.get(&literal.text) else {
            continue;
        };
        output.push_str(&content[copied..literal.start]);
        output.push(literal.quote);
        output.push_str(&escape_quote(translated, literal.quote));
        output.push(literal.quote);
        copied = literal.end;
    }

    output.push_str(&content[copied..]);
    output
}

/// Prefix every occurrence of `quote` in `text` with a backslash
fn escape_quote(text: &str, quote: char) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == quote {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
