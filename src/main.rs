use std::process::ExitCode;

use chimp::cli::*;
use palc::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `CHIMP_LOG=chimp=trace`.
const LOG_ENV: &str = "CHIMP_LOG";

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let chimp = chimp::Chimp;

	let result = match Cli::parse().mode {
		Mode::Run { path } => chimp.run_file(&path),
		Mode::Tokens { path } => chimp.tokens_file(&path),
		Mode::Play => {
			chimp.run_prompt();
			Ok(())
		}
	};
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Failed run file: {e}");
			ExitCode::FAILURE
		}
	}
}
