//! Extension filtering.
//!
//! Members are plain case-insensitive suffixes: "jpg" matches "a.jpg" and also
//! "ajpg". Callers who want a strict extension include the dot themselves (".jpg").
//! A blank entry ("jpg, ") is the empty suffix, which every filename ends with.

/// Normalized, immutable set of lowercase suffixes. Empty means "match everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl ExtensionSet {
    /// Build from raw filter entries: trims, lowercases, drops duplicates.
    /// Order of first appearance is kept. Blank entries stay as the empty suffix.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut suffixes: Vec<String> = Vec::with_capacity(raw.len());
        for entry in raw {
            let s = entry.as_ref().trim().to_lowercase();
            if !suffixes.contains(&s) {
                suffixes.push(s);
            }
        }
        Self { suffixes }
    }

    /// Split a comma-separated filter string ("jpg, MP3") and normalize it.
    pub fn from_filter_text(text: &str) -> Self {
        let parts: Vec<&str> = text.split(',').collect();
        Self::parse(&parts)
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

/// Decide whether `filename` passes the filter.
pub fn matches(filename: &str, set: &ExtensionSet) -> bool {
    if set.is_empty() {
        return true;
    }
    let lower = filename.to_lowercase();
    set.suffixes.iter().any(|s| lower.ends_with(s.as_str()))
}
