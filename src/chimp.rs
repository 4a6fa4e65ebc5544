use std::{
	fs::read_to_string,
	io::{BufRead, Write},
	path::Path,
};

use anyhow::Context;
use tracing::info;

use crate::{ChimpError, ParseError, Parser, ScanError, Scanner};

/// Name diagnostics are reported under for prompt input.
const PROMPT_SOURCE: &str = "stdin";
const PROMPT: &str = ">> ";

/// Chimp drives the front end for the command line.
pub struct Chimp;

impl Chimp {
	/// Parse a source file and print the render of every statement.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ChimpError> {
		let path = path.as_ref();
		info!(path = %path.display(), "parsing file");
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		let (lines, status) = self.render(&source, &path.display().to_string());
		lines.iter().for_each(|line| println!("{line}"));
		status
	}

	/// Print every token of a source file.
	pub fn tokens_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ChimpError> {
		let path = path.as_ref();
		info!(path = %path.display(), "scanning file");
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		for line in self.tokens(&source, &path.display().to_string())? {
			println!("{line}");
		}
		Ok(())
	}

	/// Run the interactive prompt until stdin is closed.
	///
	/// Diagnostics never end the session: they are printed and the next line is
	/// read as usual.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let mut stdin = std::io::stdin().lock();
		loop {
			input.clear();
			print!("{PROMPT}");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited chimp prompt");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			let (lines, status) = self.render(input.trim(), PROMPT_SOURCE);
			lines.iter().for_each(|line| println!("{line}"));
			if let Err(e) = status {
				eprintln!("{e}");
			}
		}
	}

	/// Parse `source`, returning one render per top-level statement.
	///
	/// Diagnostics from both the scanner and the parser are written to stderr,
	/// prefixed with `name`, and then turned into an error.
	pub fn parse(&self, source: &str, name: &str) -> Result<Vec<String>, ChimpError> {
		let (lines, status) = self.render(source, name);
		status.map(|()| lines)
	}

	/// Like [`Self::parse`], but the renders of whatever did parse are kept
	/// alongside the outcome, so they can be shown next to the diagnostics.
	fn render(&self, source: &str, name: &str) -> (Vec<String>, Result<(), ChimpError>) {
		let mut scanner = Scanner::new(source, name);
		let mut parser = Parser::new(&mut scanner);
		let program = parser.parse_program();
		let status = report(name, parser.scan_errors(), parser.errors());
		(program.statements.iter().map(ToString::to_string).collect(), status)
	}

	/// Scan `source`, returning one line per token, `Eof` included.
	pub fn tokens(&self, source: &str, name: &str) -> Result<Vec<String>, ChimpError> {
		let mut scanner = Scanner::new(source, name);
		let tokens = scanner.scan_tokens();
		report(name, scanner.diagnostics(), &[])?;
		Ok(tokens.iter().map(|token| format!("{}:{} {} {:?}", name, token.line, token.r#type, token.literal)).collect())
	}
}

/// Print both diagnostic lists, then fail if either was non-empty. Scanner
/// problems take precedence in the returned error.
fn report(name: &str, scan_errors: &[ScanError], parse_errors: &[ParseError]) -> Result<(), ChimpError> {
	for error in scan_errors {
		eprintln!("{name}: {error}");
	}
	for error in parse_errors {
		eprintln!("{name}: {error}");
	}

	if !scan_errors.is_empty() {
		return Err(ChimpError::ScannerErrors(scan_errors.len()));
	}
	if !parse_errors.is_empty() {
		return Err(ChimpError::ParserErrors(parse_errors.len()));
	}
	Ok(())
}
