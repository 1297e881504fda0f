//! CLI entrypoint for `crosstool-to-starlark`.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use crosstool_to_starlark::cli::Args;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.is_verbose);
    match crosstool_to_starlark::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "conversion failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(is_verbose: bool) {
    let filter = if is_verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
