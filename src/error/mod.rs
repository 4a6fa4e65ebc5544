pub mod parser;
pub mod scanner;

/// ChimpError is the top-level error type for the chimp shell.
///
/// The scanner and parser never return it: their diagnostics are plain data. The shell
/// turns non-empty diagnostic lists into the counting variants once an input is done.
#[derive(thiserror::Error, Debug)]
pub enum ChimpError {
	/// I/O or other failure outside the front end
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Scanner diagnostics were recorded
	#[error("Generated {0} scanner errors")]
	ScannerErrors(usize),
	/// Parser errors were recorded
	#[error("Generated {0} parser errors")]
	ParserErrors(usize),
}
