//! Expression parsing by precedence climbing (Pratt parsing).
//!
//! Every token that can start an expression has a prefix rule, and every token
//! that can continue one has an infix rule with a binding power. Adding an
//! operator means adding a row to [`Binding::of`], not a new grammar level.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Coalesce|??|Right
//! Or|\|\||Left
//! Xor|^^|Left
//! And|&&|Left
//! Bit or|\||Left
//! Bit xor|^|Left
//! Bit and|&|Left
//! Equality|== !=|Left
//! Comparison|< > <= >=|Left
//! Shift|<< >>|Left
//! Term|+ -|Left
//! Factor|* /|Left
//! Power|**|Right
//! Unary|! - ~|Right
//! Call|( )|Left

use TokenType::*;

use super::Parser;
use crate::{
	ast::{DeclaredType, Expression, Identifier, Parameter},
	error::parser::ParseErrorType,
	scanner::TokenType,
};

/// How tightly an operator holds on to its operands. Levels are spaced so that
/// a right-associative operator can bind one step below itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Precedence(u8);

impl Precedence {
	pub const LOWEST: Self = Self(0);
	pub const COALESCE: Self = Self(10);
	pub const OR: Self = Self(20);
	pub const XOR: Self = Self(30);
	pub const AND: Self = Self(40);
	pub const BIT_OR: Self = Self(50);
	pub const BIT_XOR: Self = Self(60);
	pub const BIT_AND: Self = Self(70);
	pub const EQUALS: Self = Self(80);
	pub const COMPARE: Self = Self(90);
	pub const SHIFT: Self = Self(100);
	pub const SUM: Self = Self(110);
	pub const PRODUCT: Self = Self(120);
	pub const POWER: Self = Self(130);
	pub const PREFIX: Self = Self(140);
	pub const CALL: Self = Self(150);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Associativity {
	Left,
	Right,
}

/// The infix rule for a token.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Binding {
	pub precedence:    Precedence,
	pub associativity: Associativity,
}

impl Binding {
	const fn left(precedence: Precedence) -> Self { Self { precedence, associativity: Associativity::Left } }

	const fn right(precedence: Precedence) -> Self { Self { precedence, associativity: Associativity::Right } }

	/// The infix rule for `r#type`, or `None` when the token cannot continue an
	/// expression.
	pub fn of(r#type: TokenType) -> Option<Self> {
		Some(match r#type {
			QuestionQuestion => Self::right(Precedence::COALESCE),
			OrOr => Self::left(Precedence::OR),
			CaretCaret => Self::left(Precedence::XOR),
			AndAnd => Self::left(Precedence::AND),
			Pipe => Self::left(Precedence::BIT_OR),
			Caret => Self::left(Precedence::BIT_XOR),
			Amp => Self::left(Precedence::BIT_AND),
			EqualEqual | BangEqual => Self::left(Precedence::EQUALS),
			Less | LessEqual | Greater | GreaterEqual => Self::left(Precedence::COMPARE),
			LessLess | GreaterGreater => Self::left(Precedence::SHIFT),
			Plus | Minus => Self::left(Precedence::SUM),
			Star | Slash => Self::left(Precedence::PRODUCT),
			DoubleStar => Self::right(Precedence::POWER),
			LeftParen => Self::left(Precedence::CALL),
			_ => return None,
		})
	}

	/// The threshold the right operand is parsed at. Operators of the same
	/// level only nest to the right when right-associative.
	fn right_operand(&self) -> Precedence {
		match self.associativity {
			Associativity::Left => self.precedence,
			Associativity::Right => Precedence(self.precedence.0 - 1),
		}
	}
}

impl<'a> Parser<'_, 'a> {
	/// Parse an expression starting at the current token, consuming operators
	/// that bind tighter than `precedence`. The current token is left on the
	/// last token of the expression.
	///
	/// `None` means an error has already been recorded.
	pub(super) fn expression(&mut self, precedence: Precedence) -> Option<Expression<'a>> {
		let mut left = self.prefix()?;
		while !self.peek.is(Semicolon) {
			let Some(binding) = Binding::of(self.peek.r#type) else { break };
			if binding.precedence <= precedence {
				break;
			}
			self.advance();
			left = self.infix(left, binding)?;
		}
		Some(left)
	}

	fn prefix(&mut self) -> Option<Expression<'a>> {
		let token = self.current;
		match token.r#type {
			Ident => Some(Expression::Identifier(Identifier::new(token))),
			Int => self.integer(),
			Str => Some(Expression::Str { token, value: token.literal }),
			True | False => Some(Expression::Boolean { token, value: token.is(True) }),
			Null => Some(Expression::Null(token)),
			Minus | Bang | Tilde => {
				self.advance();
				let right = self.expression(Precedence::PREFIX)?;
				Some(Expression::prefix(token, right))
			}
			LeftParen => {
				self.advance();
				let inner = self.expression(Precedence::LOWEST)?;
				self.expect_peek(RightParen)?;
				Some(inner)
			}
			Function => self.function(),
			If => self.if_expression(),
			Illegal => {
				self.error(token.line, ParseErrorType::IllegalCharacter(token.literal.to_string()));
				None
			}
			r#type => {
				self.error(token.line, ParseErrorType::NoPrefixParse(r#type));
				None
			}
		}
	}

	/// The current token is the operator, `left` its already parsed operand.
	fn infix(&mut self, left: Expression<'a>, binding: Binding) -> Option<Expression<'a>> {
		let operator = self.current;
		if operator.is(LeftParen) {
			let arguments = self.arguments()?;
			return Some(Expression::call(operator, left, arguments));
		}

		self.advance();
		let right = self.expression(binding.right_operand())?;
		Some(Expression::infix(left, operator, right))
	}

	fn integer(&mut self) -> Option<Expression<'a>> {
		let token = self.current;
		match token.literal.parse() {
			Ok(value) => Some(Expression::Integer { token, value }),
			Err(_) => {
				self.error(token.line, ParseErrorType::InvalidInteger(token.literal.to_string()));
				None
			}
		}
	}

	/// `fn(<type> <name>, ...) { ... }`
	fn function(&mut self) -> Option<Expression<'a>> {
		let token = self.current;
		self.expect_peek(LeftParen)?;
		let parameters = self.parameters()?;
		self.expect_peek(LeftBrace)?;
		let body = self.block()?;
		Some(Expression::Function { token, parameters, body })
	}

	fn parameters(&mut self) -> Option<Vec<Parameter<'a>>> {
		let mut parameters = Vec::new();
		if self.peek.is(RightParen) {
			self.advance();
			return Some(parameters);
		}

		self.advance();
		parameters.push(self.parameter()?);
		while self.peek.is(Comma) {
			self.advance();
			self.advance();
			parameters.push(self.parameter()?);
		}
		self.expect_peek(RightParen)?;
		Some(parameters)
	}

	fn parameter(&mut self) -> Option<Parameter<'a>> {
		let Some(r#type) = DeclaredType::from_keyword(self.current.r#type) else {
			self.error(self.current.line, ParseErrorType::ExpectedParameterType(self.current.r#type));
			return None;
		};
		self.expect_peek(Ident)?;
		Some(Parameter { r#type, name: Identifier::new(self.current) })
	}

	/// Comma separated call arguments. The current token is the `(`.
	fn arguments(&mut self) -> Option<Vec<Expression<'a>>> {
		let mut arguments = Vec::new();
		if self.peek.is(RightParen) {
			self.advance();
			return Some(arguments);
		}

		self.advance();
		arguments.push(self.expression(Precedence::LOWEST)?);
		while self.peek.is(Comma) {
			self.advance();
			self.advance();
			arguments.push(self.expression(Precedence::LOWEST)?);
		}
		self.expect_peek(RightParen)?;
		Some(arguments)
	}

	/// `if <condition> { ... } else { ... }`
	fn if_expression(&mut self) -> Option<Expression<'a>> {
		let token = self.current;
		self.advance();
		let condition = self.expression(Precedence::LOWEST)?;
		self.expect_peek(LeftBrace)?;
		let consequence = self.block()?;

		let alternative = if self.peek.is(Else) {
			self.advance();
			self.expect_peek(LeftBrace)?;
			Some(self.block()?)
		} else {
			None
		};
		Some(Expression::If { token, condition: Box::new(condition), consequence, alternative })
	}
}
