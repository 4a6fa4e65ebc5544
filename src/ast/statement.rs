//! There is no place in the grammar where both an expression and a statement
//! are allowed. A statement can wrap an expression, as
//! [`Statement::Expression`] does, but never the other way round outside of a
//! [`Block`](super::Block).

use std::fmt::{self, Display};

use super::{Expression, Identifier, Node};
use crate::scanner::{Token, TokenType};

/// A statement in chimp.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
	/// `let <name> = <value>;`
	Let(Declaration<'a>),
	/// `int|bool|string <name> = <value>;`
	Typed(DeclaredType, Declaration<'a>),
	/// `return <value>;`
	Return(ReturnStatement<'a>),
	/// An expression used as a statement.
	Expression(ExpressionStatement<'a>),
}

/// The binding shared by every declaration form.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration<'a> {
	/// The declaring keyword.
	pub token: Token<'a>,
	pub name:  Identifier<'a>,
	/// The initializer. Only absent when the parser recovered from an error.
	pub value: Option<Expression<'a>>,
}

/// The type named by a typed declaration or a function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
	Int,
	Bool,
	String,
}

impl DeclaredType {
	pub fn from_keyword(r#type: TokenType) -> Option<Self> {
		match r#type {
			TokenType::IntKw => Some(DeclaredType::Int),
			TokenType::BoolKw => Some(DeclaredType::Bool),
			TokenType::StringKw => Some(DeclaredType::String),
			_ => None,
		}
	}
}

impl Display for DeclaredType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DeclaredType::Int => write!(f, "int"),
			DeclaredType::Bool => write!(f, "bool"),
			DeclaredType::String => write!(f, "string"),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement<'a> {
	pub token: Token<'a>,
	pub value: Option<Expression<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement<'a> {
	/// First token of the expression.
	pub token:      Token<'a>,
	pub expression: Expression<'a>,
}

impl Node for Statement<'_> {
	fn literal(&self) -> &str {
		match self {
			Statement::Let(declaration) | Statement::Typed(_, declaration) => declaration.token.literal,
			Statement::Return(statement) => statement.token.literal,
			Statement::Expression(statement) => statement.token.literal,
		}
	}
}

impl Display for Statement<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Statement::Let(declaration) | Statement::Typed(_, declaration) => write!(f, "{declaration}"),
			Statement::Return(ReturnStatement { token, value }) => {
				write!(f, "{} ", token.literal)?;
				if let Some(value) = value {
					write!(f, "{value}")?;
				}
				write!(f, ";")
			}
			Statement::Expression(statement) => write!(f, "{}", statement.expression),
		}
	}
}

impl Display for Declaration<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} = ", self.token.literal, self.name)?;
		if let Some(value) = &self.value {
			write!(f, "{value}")?;
		}
		write!(f, ";")
	}
}
