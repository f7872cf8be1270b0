mod cli;
mod commands;
mod reporter;

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use primescan_core::Neighbourhood;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

const DEFAULT_LOG_DIRECTIVES: &str = "primescan=info,primescan_core=info";

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            e.print()?;
            return Ok(code);
        }
    };

    // Logs go to stderr; stdout carries the line protocol
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Command::Verify { starts, json }) => {
            let all_verified = commands::verify::run(&starts, json)?;
            Ok(if all_verified {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Some(Command::Analyze {
            file,
            center,
            radius,
            export,
            json,
        }) => {
            let neighbourhood = center.zip(radius).map(|(c, r)| Neighbourhood::new(c, r));
            commands::analyze::run(&file, neighbourhood, export.as_deref(), json)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Sample {
            center,
            radius,
            samples,
            seed,
            output,
        }) => {
            commands::sample::run(Neighbourhood::new(center, radius), samples, seed, &output)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let (Some(start), Some(end)) = (cli.search.start, cli.search.end) else {
                eprintln!("{}", Cli::command().render_usage());
                return Ok(ExitCode::FAILURE);
            };
            commands::search::run(start, end, cli.search.checkpoint, cli.search.save_interval)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
