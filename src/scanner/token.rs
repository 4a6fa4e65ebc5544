/// A token produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
	pub r#type:  TokenType,
	/// The exact source text the token was scanned from.
	pub literal: &'a str,
	/// Line the token starts on.
	pub line:    usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType, literal: &'a str, line: usize) -> Self { Self { r#type, literal, line } }

	pub fn is(&self, r#type: TokenType) -> bool { self.r#type == r#type }
}

/// The closed set of lexical categories in chimp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
	/// A character the scanner does not recognise.
	Illegal,
	/// End of input.
	Eof,

	/// Identifier, e.g. variable or function name.
	Ident,
	/// Integer literal, a run of decimal digits.
	Int,
	/// String literal, e.g. `"meow"`.
	Str,

	/// Assign `=`.
	Assign,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Star,
	/// Slash `/`.
	Slash,
	/// Double asterisk `**`.
	DoubleStar,

	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Equal equal `==`.
	EqualEqual,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Greater than `>`.
	Greater,
	/// Bang equal `!=`.
	BangEqual,
	/// Logical and `&&`.
	AndAnd,
	/// Logical or `||`.
	OrOr,
	/// Logical xor `^^`.
	CaretCaret,
	/// Bang `!`.
	Bang,

	/// Bitwise and `&`.
	Amp,
	/// Bitwise or `|`.
	Pipe,
	/// Bitwise xor `^`.
	Caret,
	/// Bitwise not `~`.
	Tilde,
	/// Left shift `<<`.
	LessLess,
	/// Right shift `>>`.
	GreaterGreater,

	/// Hash `#`.
	Hash,
	/// Question mark `?`.
	Question,
	/// Null coalescing `??`.
	QuestionQuestion,

	/// Comma `,`.
	Comma,
	/// Semicolon `;`.
	Semicolon,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,

	Package,
	Import,
	/// Untyped declaration keyword `let`.
	Let,
	/// Integer declaration keyword `int`.
	IntKw,
	/// Boolean declaration keyword `bool`.
	BoolKw,
	/// String declaration keyword `string`.
	StringKw,
	/// Function keyword `fn`.
	Function,
	Class,
	This,
	Type,
	Enum,
	Union,
	/// Coroutine keyword `co`.
	Coroutine,
	True,
	False,
	Null,
	If,
	Else,
	Return,
}

impl TokenType {
	/// Classify an identifier-shaped word as a keyword or a plain identifier.
	///
	/// Only exact, case-sensitive matches are keywords; `letx` is an identifier.
	pub fn classify(word: &str) -> Self {
		match word {
			"package" => TokenType::Package,
			"import" => TokenType::Import,
			"let" => TokenType::Let,
			"int" => TokenType::IntKw,
			"bool" => TokenType::BoolKw,
			"string" => TokenType::StringKw,
			"fn" => TokenType::Function,
			"class" => TokenType::Class,
			"this" => TokenType::This,
			"type" => TokenType::Type,
			"enum" => TokenType::Enum,
			"union" => TokenType::Union,
			"co" => TokenType::Coroutine,
			"true" => TokenType::True,
			"false" => TokenType::False,
			"null" => TokenType::Null,
			"if" => TokenType::If,
			"else" => TokenType::Else,
			"return" => TokenType::Return,
			_ => TokenType::Ident,
		}
	}

	/// Keywords that introduce a declaration statement.
	pub fn is_declaration(&self) -> bool {
		matches!(self, TokenType::Let | TokenType::IntKw | TokenType::BoolKw | TokenType::StringKw)
	}

	/// Keywords that can annotate a typed declaration or parameter.
	pub fn is_type_keyword(&self) -> bool {
		matches!(self, TokenType::IntKw | TokenType::BoolKw | TokenType::StringKw)
	}
}

impl std::fmt::Display for TokenType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TokenType::*;
		#[rustfmt::skip]
		let name = match self {
			Illegal => "ILLEGAL", Eof => "EOF",
			Ident => "IDENT", Int => "INT", Str => "STRING",
			Assign => "=", Plus => "+", Minus => "-", Star => "*", Slash => "/", DoubleStar => "**",
			Less => "<", LessEqual => "<=", EqualEqual => "==", GreaterEqual => ">=", Greater => ">",
			BangEqual => "!=", AndAnd => "&&", OrOr => "||", CaretCaret => "^^", Bang => "!",
			Amp => "&", Pipe => "|", Caret => "^", Tilde => "~", LessLess => "<<", GreaterGreater => ">>",
			Hash => "#", Question => "?", QuestionQuestion => "??",
			Comma => ",", Semicolon => ";",
			LeftParen => "(", RightParen => ")", LeftBrace => "{", RightBrace => "}",
			Package => "PACKAGE", Import => "IMPORT", Let => "LET",
			IntKw => "INT_KW", BoolKw => "BOOL_KW", StringKw => "STRING_KW",
			Function => "FUNCTION", Class => "CLASS", This => "THIS", Type => "TYPE",
			Enum => "ENUM", Union => "UNION", Coroutine => "COROUTINE",
			True => "TRUE", False => "FALSE", Null => "NULL",
			If => "IF", Else => "ELSE", Return => "RETURN",
		};
		f.write_str(name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classify_keywords() {
		assert_eq!(TokenType::classify("let"), TokenType::Let);
		assert_eq!(TokenType::classify("int"), TokenType::IntKw);
		assert_eq!(TokenType::classify("bool"), TokenType::BoolKw);
		assert_eq!(TokenType::classify("string"), TokenType::StringKw);
		assert_eq!(TokenType::classify("fn"), TokenType::Function);
		assert_eq!(TokenType::classify("co"), TokenType::Coroutine);
		assert_eq!(TokenType::classify("null"), TokenType::Null);
		assert_eq!(TokenType::classify("return"), TokenType::Return);
	}

	#[test]
	fn classify_exact_match_only() {
		assert_eq!(TokenType::classify("letx"), TokenType::Ident);
		assert_eq!(TokenType::classify("le"), TokenType::Ident);
		assert_eq!(TokenType::classify("Let"), TokenType::Ident);
		assert_eq!(TokenType::classify("returns"), TokenType::Ident);
		assert_eq!(TokenType::classify("five"), TokenType::Ident);
	}

	#[test]
	fn display_names() {
		assert_eq!(TokenType::Assign.to_string(), "=");
		assert_eq!(TokenType::Let.to_string(), "LET");
		assert_eq!(TokenType::IntKw.to_string(), "INT_KW");
		assert_eq!(TokenType::Int.to_string(), "INT");
		assert_eq!(TokenType::Eof.to_string(), "EOF");
	}
}
