// src/discover.rs
// =============================================================================
// This module finds the markdown files to scan.
//
// Every regular file under the root whose extension is in the allowed list
// is returned, at any depth. Hidden directories are included and ignore
// files are not consulted. Symlinks are not followed.
//
// A directory that cannot be read stops the whole run: a partial scan
// would silently report fewer broken links than there are.
// =============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// Default markdown extension, without the leading dot
pub const DEFAULT_EXTENSION: &str = "md";

// Recursively finds markdown files under `root`
//
// Parameters:
//   root: directory to walk
//   extensions: accepted extensions without the dot (e.g. ["md"]),
//               compared case-sensitively
//
// Returns: sorted list of file paths, each starting with `root`
pub fn find_markdown_files(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        if has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}
