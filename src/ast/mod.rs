//! The syntax tree the parser builds.
//!
//! Statements and expressions are closed enums, so every consumer has to handle
//! every variant. Each node keeps the token that introduced it, and renders back
//! to canonical source text through [`Display`](std::fmt::Display):
//!
//! ``` markdown
//! let add = fn(int x, int y) { x + y; };
//! └── Statement::Let
//!     ├── add (Identifier)
//!     └── Expression::Function
//!         ├── int x, int y (Parameter)
//!         └── { (x + y); } (Block)
//! ```
mod expression;
mod statement;

use std::fmt::{self, Display};

pub use expression::*;
pub use statement::*;

use crate::scanner::Token;

/// Behaviour shared by every node in the tree.
pub trait Node: Display {
	/// The exact text of the token that introduced this node.
	fn literal(&self) -> &str;

	/// Canonical source text for this node.
	fn render(&self) -> String { self.to_string() }
}

/// The root of a parse: the top-level statements in source order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Program<'a> {
	pub statements: Vec<Statement<'a>>,
}

impl<'a> Program<'a> {
	pub fn new(statements: Vec<Statement<'a>>) -> Self { Self { statements } }

	pub fn is_empty(&self) -> bool { self.statements.is_empty() }

	pub fn len(&self) -> usize { self.statements.len() }
}

impl Node for Program<'_> {
	fn literal(&self) -> &str { self.statements.first().map_or("", |statement| statement.literal()) }
}

impl Display for Program<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.statements.iter().try_for_each(|statement| write!(f, "{statement}"))
	}
}

/// A braced sequence of statements, the body of a function or an `if` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<'a> {
	/// The opening `{`.
	pub token:      Token<'a>,
	pub statements: Vec<Statement<'a>>,
}

impl Node for Block<'_> {
	fn literal(&self) -> &str { self.token.literal }
}

impl Display for Block<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.statements.is_empty() {
			return write!(f, "{{ }}");
		}
		let statements: Vec<String> = self
			.statements
			.iter()
			.map(|statement| match statement {
				// Terminated so that neighbouring expressions can't run together.
				Statement::Expression(_) => format!("{statement};"),
				_ => statement.to_string(),
			})
			.collect();
		write!(f, "{{ {} }}", statements.join(" "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scanner::TokenType;

	fn token(r#type: TokenType, literal: &str) -> Token<'_> { Token::new(r#type, literal, 1) }

	fn identifier(name: &str) -> Identifier<'_> { Identifier::new(token(TokenType::Ident, name)) }

	#[test]
	fn render_let() {
		let program = Program::new(vec![Statement::Let(Declaration {
			token: token(TokenType::Let, "let"),
			name:  identifier("myVar"),
			value: Some(Expression::Identifier(identifier("anotherVar"))),
		})]);

		assert_eq!(program.to_string(), "let myVar = anotherVar;");
		assert_eq!(program.literal(), "let");
	}

	#[test]
	fn render_typed_declarations() {
		fn declaration(keyword: TokenType, literal: &'static str, name: &'static str, value: &'static str) -> Statement<'static> {
			Statement::Typed(DeclaredType::from_keyword(keyword).unwrap(), Declaration {
				token: token(keyword, literal),
				name:  identifier(name),
				value: Some(Expression::Identifier(identifier(value))),
			})
		}
		assert_eq!(declaration(TokenType::IntKw, "int", "x", "y").to_string(), "int x = y;");
		assert_eq!(declaration(TokenType::BoolKw, "bool", "b", "c").to_string(), "bool b = c;");
		assert_eq!(declaration(TokenType::StringKw, "string", "s", "t").to_string(), "string s = t;");
	}

	#[test]
	fn render_missing_values() {
		let declaration =
			Statement::Let(Declaration { token: token(TokenType::Let, "let"), name: identifier("x"), value: None });
		assert_eq!(declaration.to_string(), "let x = ;");

		let bare_return = Statement::Return(ReturnStatement { token: token(TokenType::Return, "return"), value: None });
		assert_eq!(bare_return.to_string(), "return ;");
	}

	#[test]
	fn render_program_concatenates() {
		let program = Program::new(vec![
			Statement::Return(ReturnStatement {
				token: token(TokenType::Return, "return"),
				value: Some(Expression::Identifier(identifier("x"))),
			}),
			Statement::Expression(ExpressionStatement {
				token:      token(TokenType::Ident, "y"),
				expression: Expression::Identifier(identifier("y")),
			}),
		]);
		assert_eq!(program.render(), "return x;y");
		assert_eq!(Program::default().render(), "");
		assert_eq!(Program::default().literal(), "");
	}

	#[test]
	fn render_block() {
		let empty = Block { token: token(TokenType::LeftBrace, "{"), statements: vec![] };
		assert_eq!(empty.to_string(), "{ }");

		let block = Block {
			token:      token(TokenType::LeftBrace, "{"),
			statements: vec![Statement::Expression(ExpressionStatement {
				token:      token(TokenType::Ident, "x"),
				expression: Expression::Identifier(identifier("x")),
			})],
		};
		assert_eq!(block.to_string(), "{ x; }");
		assert_eq!(block.literal(), "{");
	}

	#[test]
	fn render_block_separates_statements() {
		fn expression(name: &'static str) -> Statement<'static> {
			Statement::Expression(ExpressionStatement {
				token:      token(TokenType::Ident, name),
				expression: Expression::Identifier(identifier(name)),
			})
		}
		let block = Block {
			token:      token(TokenType::LeftBrace, "{"),
			statements: vec![
				expression("a"),
				expression("b"),
				Statement::Return(ReturnStatement { token: token(TokenType::Return, "return"), value: None }),
			],
		};
		assert_eq!(block.to_string(), "{ a; b; return ; }");
	}

	#[test]
	fn identifier_matches_token() {
		let name = identifier("foobar");
		assert_eq!(name.value, name.token.literal);
		assert_eq!(name.literal(), "foobar");
		assert_eq!(name.to_string(), "foobar");
	}
}
