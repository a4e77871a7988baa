//! Line matching.

use std::borrow::Cow;

/// Tests lines for containment of a fixed term.
#[derive(Debug, Clone)]
pub struct Matcher {
    needle: Vec<u8>,
    case_insensitive: bool,
}

impl Matcher {
    /// Creates a matcher. In case-insensitive mode the term is folded once here.
    pub fn new(term: &str, case_insensitive: bool) -> Self {
        let needle = if case_insensitive {
            fold_case(term.as_bytes()).into_owned()
        } else {
            term.as_bytes().to_vec()
        };

        Self {
            needle,
            case_insensitive,
        }
    }

    /// Returns `true` if `line` contains the term.
    pub fn is_match(&self, line: &[u8]) -> bool {
        if self.case_insensitive {
            contains(&fold_case(line), &self.needle)
        } else {
            contains(line, &self.needle)
        }
    }
}

/// Lower-cases `bytes`. Each valid UTF-8 run gets full Unicode folding;
/// invalid bytes are copied through unchanged.
pub fn fold_case(bytes: &[u8]) -> Cow<'_, [u8]> {
    if bytes.is_ascii() {
        if bytes.iter().any(u8::is_ascii_uppercase) {
            return Cow::Owned(bytes.to_ascii_lowercase());
        }
        return Cow::Borrowed(bytes);
    }

    let mut folded = Vec::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        folded.extend_from_slice(chunk.valid().to_lowercase().as_bytes());
        folded.extend_from_slice(chunk.invalid());
    }
    Cow::Owned(folded)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}
