//! String literal extraction and UI text filtering
//!
//! Scans arbitrary source content for quoted string literals and filters the
//! results down to human-readable UI text worth translating. The scanner is a
//! conservative heuristic, not a parser: nested structures, multi-line strings
//! and interpolation are either missed entirely or matched incorrectly, which
//! is an accepted limitation.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Matches any ASCII letter
static LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new("[a-zA-Z]").expect("valid regex"));

/// Matches an email-like prefix
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\-_.]+@[\w\-_.]+").expect("valid regex"));

/// A quoted string literal found in source content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// Quote character delimiting the literal, `'` or `"`
    pub quote: char,
    /// Raw inner text between the quotes, escapes left as-is
    pub text: String,
    /// Byte offset of the opening quote in the original content
    pub start: usize,
    /// Byte offset one past the closing quote
    pub end: usize,
}

/// Scan `content` for single- or double-quoted string literals.
///
/// A small state machine (outside literal, inside literal, escape pending)
/// finds non-overlapping matches left to right, each closing at the first
/// unescaped occurrence of its opening quote. A backslash escapes the
/// character after it, so an escaped quote does not terminate the literal.
/// Literals never span a newline; an open quote with no close on its line is
/// abandoned and scanning resumes at the character after it.
pub fn find_literals(content: &str) -> Vec<Literal> {
    let chars: Vec<(usize, char)> = content.char_indices().collect();
    let mut literals = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (start, quote) = chars[i];
        if quote != '"' && quote != '\'' {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        let mut escape_pending = false;
        let mut closing: Option<(usize, usize)> = None;

        while j < chars.len() {
            let (pos, c) = chars[j];
            if c == '\n' {
                // Aborts the literal even when a backslash precedes it
                break;
            } else if escape_pending {
                escape_pending = false;
            } else if c == '\\' {
                escape_pending = true;
            } else if c == quote {
                closing = Some((pos, j));
                break;
            }
            j += 1;
        }

        match closing {
            Some((close_pos, close_idx)) => {
                literals.push(Literal {
                    quote,
                    text: content[start + 1..close_pos].to_string(),
                    start,
                    end: close_pos + 1,
                });
                i = close_idx + 1;
            }
            // Unterminated on this line; the skipped characters may still
            // open a literal of their own.
            None => i += 1,
        }
    }

    literals
}

/// Heuristic check for whether a literal's inner text is human-readable UI
/// text rather than a path, URL, email address or code-like token.
pub fn is_ui_text(s: &str) -> bool {
    let stripped = s.trim();
    if stripped.chars().count() < 2 {
        return false;
    }
    if !LETTER_RE.is_match(s) {
        return false;
    }
    if s.contains('/') || s.contains('\\') {
        return false;
    }
    if stripped.starts_with("http") {
        return false;
    }
    if EMAIL_RE.is_match(s) {
        return false;
    }
    // Unreachable: the length check above already rejects these.
    if stripped.chars().count() <= 1 {
        return false;
    }
    true
}

/// Extract the inner texts of likely UI literals from `content`,
/// deduplicated while preserving first-occurrence order.
pub fn extract_ui_candidates(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for literal in find_literals(content) {
        if !is_ui_text(&literal.text) {
            continue;
        }
        if seen.insert(literal.text.clone()) {
            candidates.push(literal.text);
        }
    }

    candidates
}
