// src/report.rs
// =============================================================================
// This module prints the final report and decides the exit code.
//
// Exit codes:
//   0 = every link is reachable
//   1 = at least one unreachable link
//   2 = the run itself failed (set in main.rs)
//
// The report is written to any io::Write so tests can capture it in a
// Vec<u8> instead of reading stdout.
// =============================================================================

use anyhow::Result;
use std::io::Write;
use tracing::info;

use crate::checker::{CheckOutcome, LinkRecord, Unreachable};

pub const EXIT_OK: i32 = 0;
pub const EXIT_BROKEN: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

// Prints unreachable links (or the all-clear message) and returns the
// exit code for the run
pub fn report(outcomes: &[CheckOutcome], out: &mut impl Write) -> Result<i32> {
    let unreachable = unreachable_links(outcomes);

    if unreachable.is_empty() {
        writeln!(out, "No Unreachable link found.")?;
        return Ok(EXIT_OK);
    }

    writeln!(out, "Unreachable Links ({}):", unreachable.len())?;
    for (index, (record, reason)) in unreachable.iter().enumerate() {
        info!(url = %record.url, %reason, "unreachable");
        writeln!(out, "  {}", index)?;
        writeln!(out, "  Source: {}", record.source.display())?;
        writeln!(out, "  Name: {}", record.text)?;
        writeln!(out, "  Link: {}", record.url)?;
    }

    Ok(EXIT_BROKEN)
}

// Unreachable records with their reasons, sorted so the report is stable
// between runs even though checks finish in any order
fn unreachable_links(outcomes: &[CheckOutcome]) -> Vec<(&LinkRecord, &Unreachable)> {
    let mut unreachable: Vec<_> = outcomes
        .iter()
        .filter_map(|outcome| match &outcome.result {
            Ok(_) => None,
            Err(reason) => Some((&outcome.record, reason)),
        })
        .collect();

    unreachable.sort_by(|a, b| a.0.cmp(b.0));
    unreachable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{build_client, check_links, DEFAULT_JOBS};
    use reqwest::StatusCode;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn outcome(text: &str, url: &str, result: Result<StatusCode, Unreachable>) -> CheckOutcome {
        CheckOutcome {
            record: LinkRecord::new("docs/guide.md", text, url),
            result,
        }
    }

    fn render(outcomes: &[CheckOutcome]) -> (i32, String) {
        let mut out = Vec::new();
        let code = report(outcomes, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_all_reachable() {
        let (code, output) = render(&[outcome("ok", "https://example.com", Ok(StatusCode::OK))]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(output, "No Unreachable link found.\n");
    }

    #[test]
    fn test_no_outcomes_is_success() {
        let (code, output) = render(&[]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(output, "No Unreachable link found.\n");
    }

    #[test]
    fn test_unreachable_links_are_listed() {
        let outcomes = vec![
            outcome("ok", "https://example.com/ok", Ok(StatusCode::OK)),
            outcome(
                "missing",
                "https://example.com/missing",
                Err(Unreachable::Status(StatusCode::NOT_FOUND)),
            ),
            outcome(
                "down",
                "https://down.example.com",
                Err(Unreachable::Connect("refused".to_string())),
            ),
        ];

        let (code, output) = render(&outcomes);

        assert_eq!(code, EXIT_BROKEN);
        assert_eq!(
            output,
            "\
Unreachable Links (2):
  0
  Source: docs/guide.md
  Name: down
  Link: https://down.example.com
  1
  Source: docs/guide.md
  Name: missing
  Link: https://example.com/missing
"
        );
    }

    #[tokio::test]
    async fn test_reachable_and_refused_links() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url_a = format!("{}/a", mock_server.uri());
        let url_b = format!("http://127.0.0.1:{}/b", port);
        let records = vec![
            LinkRecord::new("README.md", "A", url_a.as_str()),
            LinkRecord::new("README.md", "B", url_b.as_str()),
        ];

        let client = build_client(None).unwrap();
        let mut progress = Vec::new();
        let outcomes = check_links(&client, records, DEFAULT_JOBS, &mut progress).await.unwrap();
        let (code, output) = render(&outcomes);

        assert_eq!(code, EXIT_BROKEN);
        assert!(output.starts_with("Unreachable Links (1):"));
        assert!(output.contains(&format!("  Link: {}", url_b)));
        assert!(!output.contains(&url_a));
    }

    #[tokio::test]
    async fn test_all_links_ok() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let records = (0..5)
            .map(|i| LinkRecord::new("README.md", "page", format!("{}/{}", mock_server.uri(), i)))
            .collect();

        let client = build_client(None).unwrap();
        let mut progress = Vec::new();
        let outcomes = check_links(&client, records, DEFAULT_JOBS, &mut progress).await.unwrap();
        let (code, output) = render(&outcomes);

        assert_eq!(code, EXIT_OK);
        assert_eq!(output, "No Unreachable link found.\n");
    }
}
