/// A diagnostic recorded by the scanner, with the line it refers to.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {type}")]
pub struct ScanError {
	/// The line number the diagnostic refers to.
	line:   usize,
	/// The kind of scanning problem.
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, r#type: ScanErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn kind(&self) -> &ScanErrorType { &self.r#type }
}

/// Types of scanning errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorType {
	/// A block comment still open at end of input. The line is where it started.
	UnterminatedBlockComment,
	/// A string literal still open at end of input. The line is where it started.
	UnterminatedString,
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnterminatedBlockComment => {
				write!(f, "Unterminated block comment before end of file")
			}
			UnterminatedString => {
				write!(f, "Unterminated string before end of file")
			}
		}
	}
}
