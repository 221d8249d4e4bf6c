// src/checker/link.rs
// =============================================================================
// The one data type that flows through the whole pipeline: a Link Record.
//
// A record is the triple (source file, link text, URL). Two records are the
// same record only if all three parts match, so:
// - the same URL in two different files is checked twice
// - the same URL with two different texts in one file is checked twice
// - the same link repeated in one file is checked once
//
// Equality, hashing and ordering are all derived, which makes them
// structural over the three fields.
// =============================================================================

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkRecord {
    /// Markdown file the link was found in
    pub source: PathBuf,
    /// Display text between the square brackets
    pub text: String,
    /// Target URL between the parentheses
    pub url: String,
}

impl LinkRecord {
    pub fn new(source: impl Into<PathBuf>, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({}) in {}", self.text, self.url, self.source.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identical_triples_collapse() {
        let mut set = HashSet::new();
        set.insert(LinkRecord::new("README.md", "Rust", "https://www.rust-lang.org"));
        set.insert(LinkRecord::new("README.md", "Rust", "https://www.rust-lang.org"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_any_differing_field_is_a_new_record() {
        let mut set = HashSet::new();
        set.insert(LinkRecord::new("README.md", "Rust", "https://www.rust-lang.org"));
        set.insert(LinkRecord::new("docs/intro.md", "Rust", "https://www.rust-lang.org"));
        set.insert(LinkRecord::new("README.md", "Rust home", "https://www.rust-lang.org"));
        set.insert(LinkRecord::new("README.md", "Rust", "https://doc.rust-lang.org"));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_display() {
        let record = LinkRecord::new("README.md", "Rust", "https://www.rust-lang.org");
        assert_eq!(record.to_string(), "[Rust](https://www.rust-lang.org) in README.md");
    }
}
