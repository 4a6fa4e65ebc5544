use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chimp", after_long_help = "Scanner and parser for the chimp programming language.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Parse a source file and print its statements
	Run { path: PathBuf },
	/// Print the tokens of a source file
	Tokens { path: PathBuf },
	/// Parse lines typed at a prompt
	Play,
}
