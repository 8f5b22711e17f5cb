use error::CompilerError;
use lexer::Lexer;
use parser::Parser;

pub use expr::{BinaryExpr, Expr, Identifier, Keyword, NodeKind, NumericLiteral};
pub use pos::{BytePos, Span};
pub use stmt::{Program, Statement};
pub use token::{Operator, Token, TokenKind};

pub mod error;
mod expr;
mod lexer;
mod parser;
mod pos;
mod scanner;
mod stmt;
mod token;

/// Scans `buf` into tokens terminated by an `EndOfInput` token. Never fails.
pub fn tokenize(buf: &str) -> Vec<Token> {
    Lexer::new(buf).tokenize()
}

/// Scans `buf`, rejecting the first character no token class recognizes.
pub fn try_tokenize(buf: &str) -> Result<Vec<Token>, CompilerError> {
    Ok(Lexer::new(buf).try_tokenize()?)
}

pub fn parse_tokens(tokens: Vec<Token>) -> Result<Program, CompilerError> {
    Ok(Parser::new(tokens).parse()?)
}

pub fn parse(buf: &str) -> Result<Program, CompilerError> {
    parse_tokens(tokenize(buf))
}

pub fn parse_strict(buf: &str) -> Result<Program, CompilerError> {
    parse_tokens(try_tokenize(buf)?)
}
