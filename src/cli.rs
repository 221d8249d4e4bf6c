// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every argument is optional. Run with no arguments, the tool scans the
// current directory for *.md files with 10 concurrent checks and no
// request timeout.
//
// The parsed Cli is turned into a plain Settings struct so the rest of the
// program does not depend on clap.
// =============================================================================

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

use crate::checker::DEFAULT_JOBS;
use crate::discover::DEFAULT_EXTENSION;

#[derive(Parser, Debug)]
#[command(
    name = "check-links",
    version,
    about = "Check that every web link in your markdown files is still reachable",
    long_about = "check-links walks a documentation tree, extracts the inline [text](http...) links \
                  from every markdown file and makes a GET request to each one. \
                  It exits with status 1 if any link is unreachable, which makes it easy to run in CI."
)]
pub struct Cli {
    /// Directory to scan for markdown files (default: the current directory)
    pub root: Option<PathBuf>,

    /// Number of links checked at the same time
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_JOBS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub jobs: usize,

    /// Per-request timeout in seconds (default: no timeout)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// File extension treated as markdown, without the dot (repeatable)
    #[arg(long = "extension", value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extensions: Vec<String>,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

// Everything the pipeline needs to run, with defaults already resolved
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub jobs: usize,
    pub timeout: Option<Duration>,
    pub extensions: Vec<String>,
}

impl Cli {
    pub fn into_settings(self) -> Result<Settings> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().context("failed to read the current directory")?,
        };

        Ok(Settings {
            root,
            jobs: self.jobs,
            timeout: self.timeout.map(Duration::from_secs),
            extensions: self.extensions,
        })
    }
}
