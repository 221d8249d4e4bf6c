// src/checker/http.rs
// =============================================================================
// This module checks if URLs are reachable by making HTTP GET requests.
//
// Key functionality:
// - One GET per link record, using the client's default redirect policy
// - A 2xx final status means reachable, anything else means unreachable
// - Network failures (DNS, refused connection, TLS, timeout) are folded into
//   the result instead of aborting the run
// - Checks run concurrently with a fixed number in flight (the worker pool)
// - Writes one progress line per link as each check finishes
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Result<T, E> as a value: An unreachable link is data, not a crash
// - Streams: For processing many items concurrently
// =============================================================================

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt}; // StreamExt gives us .buffer_unordered()
use reqwest::{Client, StatusCode};
use std::io::Write;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::link::LinkRecord;

// Width of the worker pool when none is configured
pub const DEFAULT_JOBS: usize = 10;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Why a link could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unreachable {
    /// A response arrived, but with a non-success status
    #[error("HTTP {0}")]
    Status(StatusCode),
    /// DNS failure, refused connection or TLS handshake failure
    #[error("connection error: {0}")]
    Connect(String),
    /// Only possible when a request timeout is configured
    #[error("request timed out")]
    Timeout,
    /// The URL text is not a valid URL
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// Any other transport failure, such as a redirect loop
    #[error("request error: {0}")]
    Request(String),
}

impl Unreachable {
    // Short marker printed on the progress line in place of a status code
    fn marker(&self) -> String {
        match self {
            Unreachable::Status(status) => status.as_u16().to_string(),
            Unreachable::Connect(_) => "connection error".to_string(),
            Unreachable::Timeout => "timeout".to_string(),
            Unreachable::InvalidUrl(_) => "invalid url".to_string(),
            Unreachable::Request(_) => "request error".to_string(),
        }
    }
}

// Result of checking a single link record
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// The record that was checked
    pub record: LinkRecord,
    /// The success status, or why the link is unreachable
    pub result: Result<StatusCode, Unreachable>,
}

impl CheckOutcome {
    pub fn is_reachable(&self) -> bool {
        self.result.is_ok()
    }

    // One line of progress output, e.g. "  200: docs/guide.md"
    pub fn progress_line(&self) -> String {
        let marker = match &self.result {
            Ok(status) => status.as_u16().to_string(),
            Err(reason) => reason.marker(),
        };
        format!("  {}: {}", marker, self.record.source.display())
    }
}

// Builds the HTTP client shared by every check
//
// Everything is left at reqwest's defaults (redirects are followed up to
// 10 hops) except the User-Agent, and a timeout when one is given.
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().context("failed to create HTTP client")
}

// Checks many link records concurrently
//
// At most `jobs` requests are in flight at any time. Each outcome's
// progress line is written to `out` as soon as that check finishes, so
// results come back in completion order, not input order.
pub async fn check_links(
    client: &Client,
    records: Vec<LinkRecord>,
    jobs: usize,
    out: &mut impl Write,
) -> Result<Vec<CheckOutcome>> {
    let mut checks = stream::iter(records.into_iter().map(|record| check_link(client, record)))
        .buffer_unordered(jobs.max(1));

    let mut outcomes = Vec::new();
    while let Some(outcome) = checks.next().await {
        writeln!(out, "{}", outcome.progress_line())?;
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

// Checks a single link record
pub async fn check_link(client: &Client, record: LinkRecord) -> CheckOutcome {
    let result = fetch_status(client, &record.url).await;

    if let Err(reason) = &result {
        debug!(link = %record, %reason, "link unreachable");
    }

    CheckOutcome { record, result }
}

async fn fetch_status(client: &Client, url: &str) -> Result<StatusCode, Unreachable> {
    let url = Url::parse(url).map_err(|e| Unreachable::InvalidUrl(e.to_string()))?;

    debug!(%url, "GET");
    let response = client.get(url).send().await.map_err(categorize_error)?;

    let status = response.status();
    if status.is_success() {
        Ok(status)
    } else {
        Err(Unreachable::Status(status))
    }
}

// Maps a reqwest error onto the reason reported for the link
fn categorize_error(error: reqwest::Error) -> Unreachable {
    if error.is_timeout() {
        Unreachable::Timeout
    } else if error.is_connect() {
        Unreachable::Connect(error.to_string())
    } else {
        Unreachable::Request(error.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why GET and not HEAD?
//    - Plenty of servers answer HEAD with 405 or 404 while GET works fine
//    - We only look at the status; the body is dropped without being read
//
// 2. What is buffer_unordered?
//    - It polls up to N futures at once and yields each result as soon as
//      it is ready
//    - This is our worker pool: N is the pool width, and every record is
//      checked exactly once
//
// 3. Why borrow the client instead of cloning it?
//    - buffer_unordered drives all futures inside the current task, so the
//      futures can hold a plain &Client for as long as the stream runs
//
// 4. What does thiserror do?
//    - #[derive(Error)] implements std::error::Error for the enum
//    - #[error("...")] writes the Display implementation for each variant
// -----------------------------------------------------------------------------
