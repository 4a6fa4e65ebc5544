use crate::scanner::TokenType;

/// A syntax error recorded by the parser.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {type}")]
pub struct ParseError {
	line:   usize,
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, r#type: ParseErrorType) -> Self { Self { line, r#type } }

	/// Line of the token that triggered the error.
	pub fn line(&self) -> usize { self.line }

	pub fn kind(&self) -> &ParseErrorType { &self.r#type }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorType {
	UnexpectedToken { expected: TokenType, got: TokenType },
	NoPrefixParse(TokenType),
	IllegalCharacter(String),
	InvalidInteger(String),
	ExpectedParameterType(TokenType),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken { expected, got } => {
				write!(f, "expected {expected}, got {got}")
			}
			NoPrefixParse(got) => {
				write!(f, "no prefix parse function for {got} found")
			}
			IllegalCharacter(c) => {
				write!(f, "illegal character '{c}'")
			}
			InvalidInteger(literal) => {
				write!(f, "could not parse {literal} as integer")
			}
			ExpectedParameterType(got) => {
				write!(f, "expected parameter type, got {got}")
			}
		}
	}
}
