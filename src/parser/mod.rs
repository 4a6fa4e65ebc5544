//! The `Scanner` uses a `lexical grammar`: its alphabet is characters and its
//! strings are tokens. The `Parser` uses a `syntactic grammar`: its alphabet is
//! tokens and its strings are statements.
//!
//! Statements are picked by their leading token, with one token of lookahead
//! and no backtracking:
//!
//! ``` BNF
//! program     → statement* EOF ;
//! statement   → declaration | return | exprStmt ;
//! declaration → ( "let" | "int" | "bool" | "string" ) IDENT "=" expression ";" ;
//! return      → "return" expression? ";" ;
//! exprStmt    → expression ";"? ;
//! block       → "{" statement* "}" ;
//! ```
//!
//! Expressions are parsed by precedence climbing, see [`expression`].
//!
//! The parser never stops at the first error. Each mismatch is recorded, the
//! offending statement is skipped up to a plausible boundary, and parsing
//! carries on, so one pass reports as many problems as it can.

mod expression;

use tracing::{debug, trace};
use TokenType::*;

use crate::{
	ScanError,
	ast::{Block, Declaration, DeclaredType, ExpressionStatement, Identifier, Program, ReturnStatement, Statement},
	error::parser::{ParseError, ParseErrorType},
	parser::expression::Precedence,
	scanner::{Scanner, Token, TokenType},
};

/// Pulls tokens from a [`Scanner`] and builds a [`Program`].
pub struct Parser<'s, 'a> {
	scanner: &'s mut Scanner<'a>,
	/// The token under examination.
	current: Token<'a>,
	/// One token of lookahead.
	peek:    Token<'a>,
	errors:  Vec<ParseError>,
	/// How many blocks enclose the current token.
	depth:   usize,
	/// The current token is a `}` that already closed a block.
	closed:  bool,
}

impl<'s, 'a> Parser<'s, 'a> {
	pub fn new(scanner: &'s mut Scanner<'a>) -> Self {
		let current = scanner.next_token();
		let peek = scanner.next_token();

		Self { scanner, current, peek, errors: Vec::new(), depth: 0, closed: false }
	}

	/// Syntax errors recorded so far.
	pub fn errors(&self) -> &[ParseError] { &self.errors }

	/// Diagnostics recorded by the underlying scanner so far.
	pub fn scan_errors(&self) -> &[ScanError] { self.scanner.diagnostics() }

	/// Parse statements until end of input.
	///
	/// This always returns a program, possibly partial. Check [`Self::errors`]
	/// and [`Self::scan_errors`] before trusting it.
	pub fn parse_program(&mut self) -> Program<'a> {
		let mut statements = Vec::new();
		while !self.current.is(Eof) {
			if let Some(statement) = self.statement() {
				statements.push(statement);
			}
			self.advance();
		}
		Program::new(statements)
	}

	/// Parse one statement starting at the current token.
	///
	/// On failure the parser has already been synchronized, and the caller's
	/// next [`Self::advance`] moves past the boundary.
	fn statement(&mut self) -> Option<Statement<'a>> {
		let statement = match self.current.r#type {
			r#type if r#type.is_declaration() => self.declaration(),
			Return => self.return_statement(),
			_ => self.expression_statement(),
		};
		match &statement {
			Some(statement) => trace!(source = %self.scanner.name(), "parsed `{statement}`"),
			None => self.synchronize(),
		}
		statement
	}

	fn declaration(&mut self) -> Option<Statement<'a>> {
		let token = self.current;
		self.expect_peek(Ident)?;
		let name = Identifier::new(self.current);
		self.expect_peek(Assign)?;
		self.advance();

		let value = self.expression(Precedence::LOWEST);
		self.finish_statement(value.is_some());

		let declaration = Declaration { token, name, value };
		Some(match DeclaredType::from_keyword(token.r#type) {
			Some(r#type) => Statement::Typed(r#type, declaration),
			None => Statement::Let(declaration),
		})
	}

	fn return_statement(&mut self) -> Option<Statement<'a>> {
		let token = self.current;
		if self.peek.is(Semicolon) {
			self.advance();
			return Some(Statement::Return(ReturnStatement { token, value: None }));
		}
		self.advance();

		let value = self.expression(Precedence::LOWEST);
		self.finish_statement(value.is_some());
		Some(Statement::Return(ReturnStatement { token, value }))
	}

	/// The trailing `;` is optional here, so its absence is not an error.
	fn expression_statement(&mut self) -> Option<Statement<'a>> {
		let token = self.current;
		let expression = self.expression(Precedence::LOWEST)?;
		if self.peek.is(Semicolon) {
			self.advance();
		}
		Some(Statement::Expression(ExpressionStatement { token, expression }))
	}

	/// Require the `;` that ends a declaration or return. When the value failed
	/// to parse its error is already recorded, so skip to the boundary instead of
	/// reporting the missing `;` too.
	fn finish_statement(&mut self, value_parsed: bool) {
		if value_parsed {
			self.expect_peek(Semicolon);
		} else {
			self.synchronize();
		}
	}

	/// Parse a `{ ... }` block. The current token is the `{`.
	fn block(&mut self) -> Option<Block<'a>> {
		let token = self.current;
		let mut statements = Vec::new();
		self.depth += 1;
		self.advance();
		while !self.current.is(RightBrace) && !self.current.is(Eof) {
			if let Some(statement) = self.statement() {
				statements.push(statement);
			}
			// A failed statement may have stopped on this block's `}`.
			if !self.at_block_end() {
				self.advance();
			}
		}
		self.depth -= 1;

		if self.current.is(Eof) {
			self.error(self.current.line, ParseErrorType::UnexpectedToken { expected: RightBrace, got: Eof });
			return None;
		}
		self.closed = true;
		Some(Block { token, statements })
	}

	/// The current token is a `}` that closes an open block.
	fn at_block_end(&self) -> bool { self.depth > 0 && self.current.is(RightBrace) && !self.closed }

	/// Skip tokens until the current one is a `;` or closes an open block, the
	/// next one closes an open block, or input ends.
	fn synchronize(&mut self) {
		while !self.current.is(Semicolon) && !self.current.is(Eof) {
			if self.at_block_end() || (self.depth > 0 && self.peek.is(RightBrace)) {
				return;
			}
			self.advance();
		}
	}

	/// Advance to the next token.
	fn advance(&mut self) {
		self.current = self.peek;
		self.peek = self.scanner.next_token();
		self.closed = false;
	}

	/// Advance only if the next token has the expected type, otherwise record
	/// an error against it.
	fn expect_peek(&mut self, expected: TokenType) -> Option<()> {
		if self.peek.is(expected) {
			self.advance();
			return Some(());
		}
		self.error(self.peek.line, ParseErrorType::UnexpectedToken { expected, got: self.peek.r#type });
		None
	}

	fn error(&mut self, line: usize, r#type: ParseErrorType) {
		let error = ParseError::new(line, r#type);
		debug!(source = %self.scanner.name(), "parse error: {error}");
		self.errors.push(error);
	}
}
