//! The scanner turns chimp source text into tokens, one token per call.
//!
//! Keywords are part of the shape of the grammar, so the parser wants to know
//! not just that it has an identifier-shaped word, but which reserved word it
//! is. At the point a word is recognised we classify it once, through
//! [`TokenType::classify`], instead of making the parser compare strings.
//!
//! We can't tell `<` from `<=` until we have looked one character past the
//! `<`, and we can't tell `let` from `letter` until the word has ended. In both
//! cases the longest match wins: this is `maximal munch`.
//!
//! The scanner never fails. Characters it does not understand come back as
//! [`TokenType::Illegal`] tokens so the parser can report them in context, and
//! malformed comments or strings are recorded as diagnostics while scanning
//! carries on.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;
use tracing::{debug, trace};

use crate::{ScanError, ScanErrorType};

/// Literal carried by the end of input token.
pub const EOF_LITERAL: &str = "<eof>";

/// A scanner for chimp source code
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// Name used when reporting diagnostics, usually a file name
	name:        String,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the character most recently consumed
	cursor:      usize,
	/// Tracks what source line `cursor` is on so tokens know where they start.
	line:        usize,
	/// Diagnostics recorded so far, in the order they were found
	diagnostics: Vec<ScanError>,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str, name: impl Into<String>) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, name: name.into(), source_iter, start: 0, cursor: 0, line: 1, diagnostics: Vec::new() }
	}

	/// The line the scanner is currently on.
	pub fn line(&self) -> usize { self.line }

	/// The name this source was registered under.
	pub fn name(&self) -> &str { &self.name }

	/// Diagnostics recorded so far.
	pub fn diagnostics(&self) -> &[ScanError] { &self.diagnostics }

	/// Scan the next token.
	///
	/// Once the input is exhausted every call returns an [`Eof`] token.
	pub fn next_token(&mut self) -> Token<'a> {
		loop {
			self.skip_whitespace();
			// We are at the beginning of the next lexeme.
			self.start = self.source_iter.peek().map_or(self.source.len(), |&(index, _)| index);
			self.cursor = self.start;
			let line = self.line;

			let Some(next_char) = self.advance() else {
				return self.token(Eof, EOF_LITERAL, line);
			};
			#[rustfmt::skip]
			let r#type = match next_char {
				'/' => if self.match_next('/') {
					self.skip_line_comment();
					continue;
				} else if self.match_next('*') {
					self.skip_block_comment();
					continue;
				} else { Slash },
				'"' => return self.string(line),
				c if c.is_ascii_digit() => self.number(),
				c if c.is_ascii_alphabetic() => self.identifier(),
				'<' => if self.match_next('=') { LessEqual } else if self.match_next('<') { LessLess } else { Less },
				'>' => if self.match_next('=') { GreaterEqual } else if self.match_next('>') { GreaterGreater } else { Greater },
				'=' => if self.match_next('=') { EqualEqual } else { Assign },
				'!' => if self.match_next('=') { BangEqual } else { Bang },
				'&' => if self.match_next('&') { AndAnd } else { Amp },
				'|' => if self.match_next('|') { OrOr } else { Pipe },
				'^' => if self.match_next('^') { CaretCaret } else { Caret },
				'?' => if self.match_next('?') { QuestionQuestion } else { Question },
				'*' => if self.match_next('*') { DoubleStar } else { Star },
				'+' => Plus,
				'-' => Minus,
				'~' => Tilde,
				'#' => Hash,
				',' => Comma,
				';' => Semicolon,
				'(' => LeftParen,
				')' => RightParen,
				'{' => LeftBrace,
				'}' => RightBrace,
				_ => Illegal,
			};

			let literal = &self.source[self.start..self.cursor];
			return self.token(r#type, literal, line);
		}
	}

	/// Drain the scanner, returning every token up to and including [`Eof`].
	pub fn scan_tokens(&mut self) -> Vec<Token<'a>> {
		let mut tokens = Vec::new();
		loop {
			let token = self.next_token();
			let done = token.is(Eof);
			tokens.push(token);
			if done {
				return tokens;
			}
		}
	}

	fn token(&self, r#type: TokenType, literal: &'a str, line: usize) -> Token<'a> {
		trace!(source = %self.name, line, kind = %r#type, literal, "token");
		Token::new(r#type, literal, line)
	}

	fn report(&mut self, error: ScanError) {
		debug!(source = %self.name, "scan error: {error}");
		self.diagnostics.push(error);
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	fn skip_whitespace(&mut self) {
		while let Some(c) = self.peek() {
			match c {
				' ' | '\t' | '\r' => {}
				'\n' => self.line += 1,
				_ => break,
			}
			self.advance();
		}
	}

	/// Skip to the end of the line. The newline itself is left for
	/// [`Self::skip_whitespace`] so it is counted once.
	fn skip_line_comment(&mut self) {
		while self.peek().is_some_and(|c| c != '\n') {
			self.advance();
		}
	}

	/// Skip a block comment whose `/*` has already been consumed.
	///
	/// Block comments nest. `open` holds the start line of every comment level
	/// still open; if input runs out, each of them gets a diagnostic, innermost
	/// first.
	fn skip_block_comment(&mut self) {
		let mut open = vec![self.line];
		while let Some(c) = self.advance() {
			match c {
				'*' if self.match_next('/') => {
					open.pop();
					if open.is_empty() {
						return;
					}
				}
				'/' if self.match_next('*') => open.push(self.line),
				'\n' => self.line += 1,
				_ => {}
			}
		}
		for line in open.into_iter().rev() {
			self.report(ScanError::new(line, ScanErrorType::UnterminatedBlockComment));
		}
	}

	/// Scan a string literal whose opening `"` has already been consumed. The
	/// token literal excludes the quotes.
	fn string(&mut self, line: usize) -> Token<'a> {
		while let Some(c) = self.peek() {
			if c == '"' {
				break;
			}
			if c == '\n' {
				self.line += 1;
			}
			self.advance();
		}

		let end = self.cursor;
		if self.advance().is_none() {
			self.report(ScanError::new(line, ScanErrorType::UnterminatedString));
		}
		let value = &self.source[self.start + 1..end];
		self.token(Str, value, line)
	}

	/// Scan an integer literal
	fn number(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}
		Int
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		TokenType::classify(&self.source[self.start..self.cursor])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scan(input: &str) -> Vec<(TokenType, &str)> {
		let mut scanner = Scanner::new(input, "test");
		scanner.scan_tokens().into_iter().map(|token| (token.r#type, token.literal)).collect()
	}

	fn types(input: &str) -> Vec<TokenType> { scan(input).into_iter().map(|(r#type, _)| r#type).collect() }

	fn diagnostics(input: &str) -> Vec<ScanError> {
		let mut scanner = Scanner::new(input, "test");
		scanner.scan_tokens();
		scanner.diagnostics().to_vec()
	}

	#[test]
	fn scan_program() {
		let input = "let five = 5;
let ten = 10;

let add = fn(int x, int y) {
    x + y;
};
/*

*/
let result = add(five, ten);
";
		let expected = vec![
			(Let, "let"),
			(Ident, "five"),
			(Assign, "="),
			(Int, "5"),
			(Semicolon, ";"),
			(Let, "let"),
			(Ident, "ten"),
			(Assign, "="),
			(Int, "10"),
			(Semicolon, ";"),
			(Let, "let"),
			(Ident, "add"),
			(Assign, "="),
			(Function, "fn"),
			(LeftParen, "("),
			(IntKw, "int"),
			(Ident, "x"),
			(Comma, ","),
			(IntKw, "int"),
			(Ident, "y"),
			(RightParen, ")"),
			(LeftBrace, "{"),
			(Ident, "x"),
			(Plus, "+"),
			(Ident, "y"),
			(Semicolon, ";"),
			(RightBrace, "}"),
			(Semicolon, ";"),
			(Let, "let"),
			(Ident, "result"),
			(Assign, "="),
			(Ident, "add"),
			(LeftParen, "("),
			(Ident, "five"),
			(Comma, ","),
			(Ident, "ten"),
			(RightParen, ")"),
			(Semicolon, ";"),
			(Eof, EOF_LITERAL),
		];
		assert_eq!(scan(input), expected);
		assert!(diagnostics(input).is_empty());
	}

	#[test]
	fn scan_empty() {
		assert_eq!(scan(""), vec![(Eof, EOF_LITERAL)]);
		assert_eq!(scan(" \t\r\n "), vec![(Eof, EOF_LITERAL)]);
	}

	#[test]
	fn scan_two_char_operators() {
		assert_eq!(types("<="), vec![LessEqual, Eof]);
		assert_eq!(types("=="), vec![EqualEqual, Eof]);
		assert_eq!(types(">="), vec![GreaterEqual, Eof]);
		assert_eq!(types("!="), vec![BangEqual, Eof]);
		assert_eq!(types("&&"), vec![AndAnd, Eof]);
		assert_eq!(types("||"), vec![OrOr, Eof]);
		assert_eq!(types("^^"), vec![CaretCaret, Eof]);
		assert_eq!(types("<<"), vec![LessLess, Eof]);
		assert_eq!(types(">>"), vec![GreaterGreater, Eof]);
		assert_eq!(types("??"), vec![QuestionQuestion, Eof]);
		assert_eq!(types("**"), vec![DoubleStar, Eof]);
	}

	#[test]
	fn scan_maximal_munch() {
		assert_eq!(scan("<="), vec![(LessEqual, "<="), (Eof, EOF_LITERAL)]);
		assert_eq!(scan("<x"), vec![(Less, "<"), (Ident, "x"), (Eof, EOF_LITERAL)]);
		assert_eq!(types("==="), vec![EqualEqual, Assign, Eof]);
		assert_eq!(types("<<="), vec![LessLess, Assign, Eof]);
		assert_eq!(types("< ="), vec![Less, Assign, Eof]);
		assert_eq!(types("letx let"), vec![Ident, Let, Eof]);
	}

	#[test]
	fn scan_single_char_operators() {
		assert_eq!(types("= + - * / , ( ) { } ; < > & | ^ ~ ! # ?"), vec![
			Assign, Plus, Minus, Star, Slash, Comma, LeftParen, RightParen, LeftBrace, RightBrace, Semicolon, Less,
			Greater, Amp, Pipe, Caret, Tilde, Bang, Hash, Question, Eof
		]);
	}

	#[test]
	fn scan_numbers_and_identifiers() {
		assert_eq!(scan("838383"), vec![(Int, "838383"), (Eof, EOF_LITERAL)]);
		assert_eq!(scan("12ab"), vec![(Int, "12"), (Ident, "ab"), (Eof, EOF_LITERAL)]);
		assert_eq!(scan("snake_case2"), vec![(Ident, "snake_case2"), (Eof, EOF_LITERAL)]);
		// Identifiers must start with a letter.
		assert_eq!(scan("_x"), vec![(Illegal, "_"), (Ident, "x"), (Eof, EOF_LITERAL)]);
	}

	#[test]
	fn scan_illegal() {
		assert_eq!(scan("@"), vec![(Illegal, "@"), (Eof, EOF_LITERAL)]);
		assert_eq!(scan("a $ b"), vec![(Ident, "a"), (Illegal, "$"), (Ident, "b"), (Eof, EOF_LITERAL)]);
		assert_eq!(scan("你好"), vec![(Illegal, "你"), (Illegal, "好"), (Eof, EOF_LITERAL)]);
	}

	#[test]
	fn scan_strings() {
		assert_eq!(scan(r#""meow""#), vec![(Str, "meow"), (Eof, EOF_LITERAL)]);
		assert_eq!(scan(r#""""#), vec![(Str, ""), (Eof, EOF_LITERAL)]);
		assert_eq!(scan(r#""世界";"#), vec![(Str, "世界"), (Semicolon, ";"), (Eof, EOF_LITERAL)]);
		assert!(diagnostics(r#""meow""#).is_empty());
	}

	#[test]
	fn scan_unterminated_string() {
		assert_eq!(scan("\"meow"), vec![(Str, "meow"), (Eof, EOF_LITERAL)]);
		assert_eq!(diagnostics("x\n\"a\nb"), vec![ScanError::new(2, ScanErrorType::UnterminatedString)]);
	}

	#[test]
	fn scan_line_comments() {
		assert_eq!(types("// comment"), vec![Eof]);
		assert_eq!(scan("x // comment ()[]{}\ny"), vec![(Ident, "x"), (Ident, "y"), (Eof, EOF_LITERAL)]);
		assert_eq!(types("a / b"), vec![Ident, Slash, Ident, Eof]);
	}

	#[test]
	fn scan_block_comments() {
		assert_eq!(types("/* block comment */"), vec![Eof]);
		assert_eq!(types("/* multi\nline\ncomment */ x"), vec![Ident, Eof]);
		assert_eq!(types("/** stars ** everywhere ***********/"), vec![Eof]);
		assert!(diagnostics("/** stars ** everywhere ***********/").is_empty());
	}

	#[test]
	fn scan_nested_block_comments() {
		assert_eq!(scan("/* /* */ */ x"), vec![(Ident, "x"), (Eof, EOF_LITERAL)]);
		assert!(diagnostics("/* /* */ */ x").is_empty());
		assert_eq!(types("/* outer /* inner */ still outer */ y"), vec![Ident, Eof]);
	}

	#[test]
	fn scan_unterminated_block_comment() {
		assert_eq!(types("/* unterminated"), vec![Eof]);
		assert_eq!(diagnostics("/* unterminated"), vec![ScanError::new(1, ScanErrorType::UnterminatedBlockComment)]);
		assert_eq!(diagnostics("/*/"), vec![ScanError::new(1, ScanErrorType::UnterminatedBlockComment)]);
	}

	#[test]
	fn scan_unterminated_nested_block_comment() {
		let input = "x\n/* outer\n/* inner\n";
		assert_eq!(types(input), vec![Ident, Eof]);
		assert_eq!(diagnostics(input), vec![
			ScanError::new(3, ScanErrorType::UnterminatedBlockComment),
			ScanError::new(2, ScanErrorType::UnterminatedBlockComment),
		]);
	}

	#[test]
	fn scan_eof_is_idempotent() {
		let mut scanner = Scanner::new("x", "test");
		assert_eq!(scanner.next_token().r#type, Ident);
		for _ in 0..3 {
			let token = scanner.next_token();
			assert_eq!(token.r#type, Eof);
			assert_eq!(token.literal, EOF_LITERAL);
		}
	}

	#[test]
	fn scan_tracks_lines() {
		let mut scanner = Scanner::new("let a = 1;\n\nlet b\n/* one\ntwo */ c // end\nd", "lines.chp");
		let tokens = scanner.scan_tokens();
		let lines: Vec<(&str, usize)> = tokens.iter().map(|token| (token.literal, token.line)).collect();
		assert_eq!(lines, vec![
			("let", 1),
			("a", 1),
			("=", 1),
			("1", 1),
			(";", 1),
			("let", 3),
			("b", 3),
			("c", 5),
			("d", 6),
			(EOF_LITERAL, 6),
		]);
		assert_eq!(scanner.line(), 6);
		assert_eq!(scanner.name(), "lines.chp");
	}

	#[test]
	fn scan_error_display() {
		let error = ScanError::new(4, ScanErrorType::UnterminatedBlockComment);
		assert_eq!(error.to_string(), "line 4: Unterminated block comment before end of file");
	}
}
