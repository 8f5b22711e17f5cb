use std::fmt::Display;

use crate::{
    pos::Span,
    token::{Token, TokenKind},
};

#[derive(Debug, PartialEq)]
pub struct LexError {
    pub ch: char,
    pub span: Span,
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown char '{}' at {}", self.ch, self.span)
    }
}

impl std::error::Error for LexError {}

#[derive(Debug, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// `None` when the token stream ran out.
    pub found: Option<Token>,
    pub expected: Option<TokenKind>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, found: Option<Token>) -> ParseError {
        ParseError {
            message: message.into(),
            found,
            expected: None,
        }
    }

    pub fn expecting(
        message: impl Into<String>,
        found: Option<Token>,
        expected: TokenKind,
    ) -> ParseError {
        ParseError {
            message: message.into(),
            found,
            expected: Some(expected),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parser Error: {}", self.message)?;

        match &self.found {
            Some(token) if token.span.line > 0 => {
                write!(f, "; found {} at Ln {}", token, token.span.line)?
            }
            Some(token) => write!(f, "; found {}", token)?,
            None => f.write_str("; found nothing")?,
        }

        if let Some(expected) = self.expected {
            write!(f, " - Expecting: {}", expected)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, PartialEq)]
pub enum CompilerError {
    Lex(LexError),
    Parse(ParseError),
}

impl Display for CompilerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompilerError::Lex(e) => write!(f, "Lexer Error: {}", e),
            CompilerError::Parse(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CompilerError {}

impl From<LexError> for CompilerError {
    fn from(value: LexError) -> Self {
        CompilerError::Lex(value)
    }
}

impl From<ParseError> for CompilerError {
    fn from(value: ParseError) -> Self {
        CompilerError::Parse(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        pos::{BytePos, Span},
        token::{Token, TokenKind},
    };

    use super::{CompilerError, LexError, ParseError};

    #[test]
    fn test_parse_error_display() {
        let found = Token::new(TokenKind::Equals, "=", Span::new(BytePos(6), BytePos(7), 1));
        let err = ParseError::expecting("Expect identifier", Some(found), TokenKind::Identifier);

        assert_eq!(
            err.to_string(),
            "Parser Error: Expect identifier; found '=' `=` at Ln 1 - Expecting: identifier"
        );
    }

    #[test]
    fn test_parse_error_display_exhausted() {
        let err = ParseError::new("Unexpected end", None);
        assert_eq!(err.to_string(), "Parser Error: Unexpected end; found nothing");
    }

    #[test]
    fn test_lex_error_into_compiler_error() {
        let err: CompilerError = LexError {
            ch: '$',
            span: Span::new(BytePos(2), BytePos(3), 1),
        }
        .into();

        assert_eq!(err.to_string(), "Lexer Error: unknown char '$' at Ln 1, byte 2");
    }
}
