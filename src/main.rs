// src/main.rs
// =============================================================================
// This is the entry point of check-links.
//
// What happens here:
// 1. Parse command-line arguments and set up logging
// 2. Find every markdown file under the root directory
// 3. Extract the unique inline web links from those files
// 4. Check every link concurrently
// 5. Print the report and exit (0 = all good, 1 = broken links, 2 = error)
//
// The human-readable progress and report go to stdout. Diagnostics from
// `tracing` go to stderr and are quiet unless -v or RUST_LOG is given.
// =============================================================================

mod checker; // src/checker/ - link extraction and checking
mod cli; // src/cli.rs - command-line parsing
mod discover; // src/discover.rs - markdown file discovery
mod report; // src/report.rs - final report and exit code

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Settings};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:?} on anyhow::Error prints the whole context chain
            eprintln!("Error: {:?}", e);
            report::EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    let settings = cli.into_settings()?;
    check_tree(&settings, &mut io::stdout()).await
}

// Runs the whole pipeline against one directory tree, writing progress and
// the report to `out`
//
// Returns the exit code; filesystem and client setup errors come back as
// Err and abort the run.
async fn check_tree(settings: &Settings, out: &mut impl Write) -> Result<i32> {
    writeln!(out, "Finding all markdown files in the current directory...")?;
    info!(root = %settings.root.display(), "scanning");

    let files = discover::find_markdown_files(&settings.root, &settings.extensions)?;
    writeln!(out, "  {} markdown files found", files.len())?;

    let records = checker::collect_links(&files)?;
    info!(links = records.len(), "unique links collected");

    writeln!(out, "Checking to make sure we can retrieve each web URL...")?;
    let client = checker::build_client(settings.timeout)?;
    let outcomes =
        checker::check_links(&client, records.into_iter().collect(), settings.jobs, &mut *out).await?;

    let broken = outcomes.iter().filter(|o| !o.is_reachable()).count();
    info!(checked = outcomes.len(), broken, "checks finished");

    report::report(&outcomes, out)
}
