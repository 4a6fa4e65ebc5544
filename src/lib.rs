//! # chimp front end
//!
//! Source text goes in, a syntax tree and two lists of diagnostics come out.
//!
//! User's source code: `let add = fn(int x, int y) { x + y; };`

//! ## Scanning
//!
//! The [`Scanner`] walks the characters and groups them into tokens:
//! `["let", "add", "=", "fn", "(", "int", "x", ",", ...]`. Whitespace and
//! comments are dropped. Block comments nest, and one left open at end of input
//! is reported as a diagnostic naming the line it started on. Characters outside
//! the language come back as `Illegal` tokens rather than vanishing.

//! ## Parsing
//!
//! The [`Parser`] pulls tokens one at a time, with a single token of lookahead,
//! and builds a [`Program`](ast::Program): statements dispatched on their first
//! token, expressions by precedence climbing.
//!
//! ``` markdown
//! add (Statement::Let)
//! └── fn (Expression::Function)
//!     ├── int x, int y
//!     └── + (Expression::Infix)
//!         ├── x (Identifier)
//!         └── y (Identifier)
//! ```
//!
//! Nothing here is fatal. The scanner records [`ScanError`]s and the parser
//! records [`ParseError`]s, skipping past a broken statement and carrying on,
//! so a caller always gets a tree back and decides from the two lists whether
//! to trust it.

//! ## Rendering
//!
//! Every node renders back to canonical source through `Display`, which is how
//! tree shape is checked without poking at internals:
//! `let myVar = anotherVar;` parses and renders to itself.

pub mod ast;
mod chimp;
pub mod cli;
mod error;
pub mod parser;
pub mod scanner;

pub use chimp::Chimp;
pub use error::{
	ChimpError,
	parser::{ParseError, ParseErrorType},
	scanner::{ScanError, ScanErrorType},
};
pub use parser::Parser;
pub use scanner::{Scanner, Token, TokenType};
