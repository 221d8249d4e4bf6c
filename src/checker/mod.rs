// src/checker/mod.rs
// =============================================================================
// This module contains the link extraction and link checking logic.
//
// Submodules:
// - link: The LinkRecord type (source file, text, URL)
// - markdown: Extracts link records from markdown files
// - http: Makes HTTP requests to check if links are reachable
//
// This file (mod.rs) is the module root - it exports the public API that
// main.rs and report.rs use.
// =============================================================================

mod http;
mod link;
mod markdown;

pub use http::{build_client, check_links, CheckOutcome, Unreachable, DEFAULT_JOBS};
pub use link::LinkRecord;
pub use markdown::collect_links;
