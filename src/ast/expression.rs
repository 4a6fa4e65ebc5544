//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-a * (b + 1)` as
//! nested nodes. Grouping parentheses leave no node behind: the infix renders
//! already spell out how operands were grouped.

use std::fmt::{self, Display};

use super::{Block, DeclaredType, Node};
use crate::scanner::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
	Identifier(Identifier<'a>),
	Integer { token: Token<'a>, value: i64 },
	Boolean { token: Token<'a>, value: bool },
	Str { token: Token<'a>, value: &'a str },
	Null(Token<'a>),
	Prefix { operator: Token<'a>, right: Box<Expression<'a>> },
	Infix { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	/// `fn(<type> <name>, ...) { ... }`
	Function { token: Token<'a>, parameters: Vec<Parameter<'a>>, body: Block<'a> },
	/// `token` is the opening `(` of the argument list.
	Call { token: Token<'a>, function: Box<Expression<'a>>, arguments: Vec<Expression<'a>> },
	If { token: Token<'a>, condition: Box<Expression<'a>>, consequence: Block<'a>, alternative: Option<Block<'a>> },
}

impl<'a> Expression<'a> {
	pub fn prefix(operator: Token<'a>, right: Self) -> Self { Expression::Prefix { operator, right: Box::new(right) } }

	pub fn infix(left: Self, operator: Token<'a>, right: Self) -> Self {
		Expression::Infix { left: Box::new(left), operator, right: Box::new(right) }
	}

	pub fn call(token: Token<'a>, function: Self, arguments: Vec<Self>) -> Self {
		Expression::Call { token, function: Box::new(function), arguments }
	}
}

/// A bound name. `value` is always the token's literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identifier<'a> {
	pub token: Token<'a>,
	pub value: &'a str,
}

impl<'a> Identifier<'a> {
	pub fn new(token: Token<'a>) -> Self { Self { token, value: token.literal } }
}

/// A typed function parameter such as `int x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter<'a> {
	pub r#type: DeclaredType,
	pub name:   Identifier<'a>,
}

impl Node for Identifier<'_> {
	fn literal(&self) -> &str { self.token.literal }
}

impl Display for Identifier<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.value) }
}

impl Display for Parameter<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{} {}", self.r#type, self.name) }
}

impl Node for Expression<'_> {
	fn literal(&self) -> &str {
		use Expression::*;
		match self {
			Identifier(identifier) => identifier.token.literal,
			Integer { token, .. }
			| Boolean { token, .. }
			| Str { token, .. }
			| Null(token)
			| Function { token, .. }
			| Call { token, .. }
			| If { token, .. } => token.literal,
			Prefix { operator, .. } | Infix { operator, .. } => operator.literal,
		}
	}
}

impl Display for Expression<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use Expression::*;
		match self {
			Identifier(identifier) => write!(f, "{identifier}"),
			Integer { token, .. } | Boolean { token, .. } | Null(token) => f.write_str(token.literal),
			Str { value, .. } => write!(f, "\"{value}\""),
			Prefix { operator, right } => write!(f, "({}{right})", operator.literal),
			Infix { left, operator, right } => write!(f, "({left} {} {right})", operator.literal),
			Function { token, parameters, body } => {
				write!(f, "{}({}) {body}", token.literal, join(parameters))
			}
			Call { function, arguments, .. } => write!(f, "{function}({})", join(arguments)),
			If { token, condition, consequence, alternative } => {
				write!(f, "{} {condition} {consequence}", token.literal)?;
				if let Some(alternative) = alternative {
					write!(f, " else {alternative}")?;
				}
				Ok(())
			}
		}
	}
}

fn join<T: Display>(items: &[T]) -> String {
	items.iter().map(|item| item.to_string()).collect::<Vec<String>>().join(", ")
}
