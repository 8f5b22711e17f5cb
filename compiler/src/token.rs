use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::pos::Span;

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut m = HashMap::new();
        m.insert("const", TokenKind::Const);
        m
    };
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum TokenKind {
    Const,
    Identifier,
    Equals,
    Semicolon,
    BinaryOperator,
    Number,
    OpenParen,
    CloseParen,
    EndOfInput,
}

impl TokenKind {
    /// Looks `ident` up in the keyword table.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        KEYWORDS.get(ident).copied()
    }

    /// Classifies a single punctuation or operator character.
    pub fn from_char(c: char) -> Option<TokenKind> {
        match c {
            '=' => Some(TokenKind::Equals),
            ';' => Some(TokenKind::Semicolon),
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            '+' | '-' | '*' | '/' => Some(TokenKind::BinaryOperator),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TokenKind::Const => "const",
            TokenKind::Identifier => "identifier",
            TokenKind::Equals => "'='",
            TokenKind::Semicolon => "';'",
            TokenKind::BinaryOperator => "binary operator",
            TokenKind::Number => "number",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::EndOfInput => "end of input",
        })
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text the token was scanned from.
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Token {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    pub const fn end_of_input() -> Token {
        Token {
            kind: TokenKind::EndOfInput,
            text: String::new(),
            span: Span::empty(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput if self.text.is_empty() => write!(f, "{}", self.kind),
            _ => write!(f, "{} `{}`", self.kind, self.text),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn is_additive(self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }

    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            v => Err(format!("Not a valid operator: {}", v)),
        }
    }
}

impl TryFrom<&Token> for Operator {
    type Error = String;

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        match token.kind {
            TokenKind::BinaryOperator => token.text.parse(),
            _ => Err(format!("Expected a binary operator but got {}", token)),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        })
    }
}
