use std::panic;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command, bench_count};
use crate::config::Config;
use crate::core::errors::{Error, Result};
use crate::core::pipeline::{copying::copy_file, loading::load_contest, testing::TestRunner};
use crate::native::{clipboard::SystemClipboard, executor::NativeExecutor, http::HttpJudgeClient};

mod cli;
mod config;
mod constants;
mod core;
mod native;
mod report;


#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    set_panic_hook();

    let cli = match CliArgs::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = Config::load();
    match run(cli.command, config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            report::failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Executes one subcommand. `Ok(false)` means a wrong answer.
async fn run(command: Command, config: Config) -> Result<bool> {
    match command {
        Command::Contest { contest_id } => {
            let client = HttpJudgeClient::new();
            load_contest(&client, &contest_id, Path::new(".")).await?;
            report::success(&format!("Contest {} was loaded.\nGood luck!", contest_id));
        }
        Command::Test { source, bench } => {
            let runner = TestRunner::new(".", config, Arc::new(NativeExecutor::new()));
            let verdict = runner.run(&source, bench_count(bench.as_deref())).await?;

            report::write_verdict(&mut std::io::stdout().lock(), &verdict)
                .map_err(|e| Error::io("failed to print verdict", e))?;
            return Ok(verdict.is_ok());
        }
        Command::Copy { source } => {
            copy_file(&source, SystemClipboard::new).await?;
            report::success(&format!("File {} was copied to clipboard", source.display()));
        }
    }
    Ok(true)
}

fn set_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        tracing::error!(
            message = "panic occurred",
            panic = %panic_info
        );
    }));
}
