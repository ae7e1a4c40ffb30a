use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Download the samples of every problem of a contest
    Contest {
        #[arg(value_name = "CONTEST_ID")]
        contest_id: String,
    },
    /// Compile a solution and check it against the samples of the current directory
    Test {
        #[arg(value_name = "SOURCE_FILE")]
        source: PathBuf,
        /// Run every sample COUNT times and report average durations
        #[arg(short = 'b', value_name = "COUNT", num_args = 0..=1, default_missing_value = "1")]
        bench: Option<String>,
    },
    /// Copy a file to the clipboard
    Copy {
        #[arg(value_name = "SOURCE_FILE")]
        source: PathBuf,
    },
}

/// Repeat count of benchmark mode. Anything but a positive number counts as 1.
pub fn bench_count(raw: Option<&str>) -> Option<u32> {
    raw.map(|raw| raw.parse().ok().filter(|&n| n > 0).unwrap_or(1))
}
