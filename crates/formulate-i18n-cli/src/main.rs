#![forbid(unsafe_code)]

mod cli;
mod command_coverage;
mod command_locales;
mod command_render;
mod config;
mod error;
mod value_arg;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::cli::CliAppError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliAppError::Usage(usage)) => {
            eprintln!("{usage}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
