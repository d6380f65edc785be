use super::config::AllowList;

impl AllowList {
    /// Whether a single declared license satisfies the allow-list.
    ///
    /// Matching is case-insensitive. A license is allowed when it equals an
    /// entry outright, or when an entry appears inside it as a standalone
    /// phrase: preceded by start-of-string, whitespace or `(`, and followed by
    /// end-of-string, whitespace or `)`. So `mit` allows `MIT`, `(MIT)` and
    /// `MIT OR GPL-3.0`, but not `submit` or `mitigate`.
    pub fn is_allowed(&self, license: &str) -> bool {
        let license = license.to_lowercase();

        if self.contains(&license) {
            return true;
        }

        self.entries().any(|entry| contains_whole_phrase(&license, entry))
    }
}

/// Finds `phrase` in `haystack` at any position whose neighbours are phrase
/// delimiters. Every char boundary is tried, so overlapping candidates are
/// not skipped.
fn contains_whole_phrase(haystack: &str, phrase: &str) -> bool {
    haystack
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(haystack.len()))
        .filter(|&start| haystack[start..].starts_with(phrase))
        .any(|start| {
            let before = haystack[..start].chars().next_back();
            let after = haystack[start + phrase.len()..].chars().next();
            is_left_delimiter(before) && is_right_delimiter(after)
        })
}

fn is_left_delimiter(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => is_separator_space(c) || c == '(',
    }
}

fn is_right_delimiter(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => is_separator_space(c) || c == ')',
    }
}

/// The ECMAScript `\s` class: Unicode `White_Space` minus NEL (U+0085),
/// plus the byte-order mark (U+FEFF).
fn is_separator_space(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        c => c.is_whitespace(),
    }
}
