// src/checker/markdown.rs
// =============================================================================
// This module extracts inline links from Markdown text.
//
// Links are found with a regular expression applied one line at a time,
// not with a full CommonMark parser. That keeps the matching rules small
// and predictable:
// - only inline links of the form [text](http://...) or [text](https://...)
// - image embeds ![alt](url) are skipped
// - link text may not start with '!' (so [![badge](img)](url) is skipped too)
// - a link whose text or URL wraps onto the next line is NOT found
// - any URL containing "localhost" is dropped
//
// Rust concepts:
// - Regex captures: pulling the text and URL groups out of each match
// - HashSet: deduplicating records across all files
// =============================================================================

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::link::LinkRecord;

// Group 1 is the link text, group 2 is the URL.
// The text is at least two characters long.
const INLINE_LINK_PATTERN: &str = r"\[([^!\]][^\]]+)\]\((https?://[^)(]+)\)";

// URLs containing this substring are never checked
const LOCAL_HOST_MARKER: &str = "localhost";

// Compiled inline-link pattern, built once per extraction pass and handed
// to every file explicitly
pub struct LinkMatcher {
    pattern: Regex,
}

impl LinkMatcher {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(INLINE_LINK_PATTERN)
            .context("failed to compile the inline link pattern")?;
        Ok(Self { pattern })
    }

    // Finds every (text, url) pair on a single line
    //
    // Example:
    //   "See [Rust](https://www.rust-lang.org) and ![logo](https://x.org/a.png)"
    //   -> [("Rust", "https://www.rust-lang.org")]
    pub fn extract_line_links<'a>(&self, line: &'a str) -> Vec<(&'a str, &'a str)> {
        let mut links = Vec::new();

        for caps in self.pattern.captures_iter(line) {
            let (Some(whole), Some(text), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            // ![alt](url) is an image embed, not a hyperlink
            if line[..whole.start()].ends_with('!') {
                continue;
            }

            links.push((text.as_str(), url.as_str()));
        }

        links
    }

    // Extracts every link record from one file's content
    //
    // Parameters:
    //   source: path of the file, stored on each record
    //   content: the full text of the file
    pub fn extract_markdown_links(&self, source: &Path, content: &str) -> Vec<LinkRecord> {
        content
            .lines()
            .flat_map(|line| self.extract_line_links(line))
            .filter(|(_, url)| !url.contains(LOCAL_HOST_MARKER))
            .map(|(text, url)| LinkRecord::new(source, text, url))
            .collect()
    }
}

// Reads every file and collects the unique link records found in them
//
// Any file that cannot be read (missing, permissions, not UTF-8) aborts
// the whole run.
pub fn collect_links(files: &[PathBuf]) -> Result<HashSet<LinkRecord>> {
    let matcher = LinkMatcher::new()?;
    let mut records = HashSet::new();

    for file in files {
        let content = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;

        let links = matcher.extract_markdown_links(file, &content);
        debug!(file = %file.display(), links = links.len(), "extracted links");
        records.extend(links);
    }

    Ok(records)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why one regex per pass instead of a global?
//    - Regex::new is not free, so we compile once and reuse it for every line
//    - Passing the matcher explicitly means there is no hidden global state
//
// 2. What is let-else?
//    - `let (Some(a), Some(b)) = ... else { continue; };`
//    - Binds the values if the pattern matches, otherwise runs the else block
//    - The else block must leave the current scope (continue, return, ...)
//
// 3. Why slice the line with line[..whole.start()]?
//    - The regex crate has no look-behind, so we check the character right
//      before the '[' ourselves
//    - whole.start() is a byte offset that always falls on a char boundary
//
// 4. Why return &str instead of String from extract_line_links?
//    - The text and URL are slices of the line we were given
//    - The lifetime 'a ties them to that line, so no copying is needed
//      until we build the owned LinkRecord
// -----------------------------------------------------------------------------
