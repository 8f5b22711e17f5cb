use std::convert::Infallible;

use log::debug;

use crate::{
    error::LexError,
    pos::Span,
    scanner::Scanner,
    token::{Token, TokenKind},
};

pub struct Lexer<'a> {
    scanner: Scanner<'a>,
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{8}' | '\n')
}

fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

impl<'a> Lexer<'a> {
    pub fn new(buf: &'a str) -> Lexer<'a> {
        Lexer {
            scanner: Scanner::new(buf),
        }
    }

    /// Scans the whole input. An unrecognized character still yields a token:
    /// its text is the character and its kind is `EndOfInput`.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let scanned = self.scan_all(|ch, span| {
            Ok::<_, Infallible>(Token::new(TokenKind::EndOfInput, ch, span))
        });

        match scanned {
            Ok(tokens) => tokens,
            Err(never) => match never {},
        }
    }

    /// Like [`Lexer::tokenize`], but stops at the first unrecognized character.
    pub fn try_tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        self.scan_all(|ch, span| Err(LexError { ch, span }))
    }

    fn scan_all<E, F>(&mut self, mut on_unknown: F) -> Result<Vec<Token>, E>
    where
        F: FnMut(char, Span) -> Result<Token, E>,
    {
        let mut tokens: Vec<Token> = Vec::new();

        loop {
            self.scanner.consume_while(is_whitespace);

            let start = self.scanner.pos;
            let line = self.scanner.line;

            let c = match self.scanner.next() {
                Some(c) => c,
                None => {
                    tokens.push(Token::new(
                        TokenKind::EndOfInput,
                        "",
                        Span::new(start, start, line),
                    ));
                    break;
                }
            };

            let token = match self.match_token(c) {
                Some((kind, text)) => {
                    Token::new(kind, text, Span::new(start, self.scanner.pos, line))
                }
                None => on_unknown(c, Span::new(start, self.scanner.pos, line))?,
            };

            tokens.push(token);
        }

        debug!("tokenized input into {} tokens", tokens.len());

        Ok(tokens)
    }

    fn match_token(&mut self, c: char) -> Option<(TokenKind, String)> {
        match c {
            c if c.is_ascii_digit() => Some(self.tokenize_number(c)),
            c if is_ident_char(c) => Some(self.tokenize_ident(c)),
            c => TokenKind::from_char(c).map(|kind| (kind, c.to_string())),
        }
    }

    fn tokenize_number(&mut self, start: char) -> (TokenKind, String) {
        let mut number = String::new();
        number.push(start);
        number.push_str(&self.scanner.consume_while(|c| c.is_ascii_digit()));

        (TokenKind::Number, number)
    }

    fn tokenize_ident(&mut self, start: char) -> (TokenKind, String) {
        let mut ident = String::new();
        ident.push(start);
        ident.push_str(&self.scanner.consume_while(is_ident_char));

        let kind = TokenKind::keyword(&ident).unwrap_or(TokenKind::Identifier);

        (kind, ident)
    }
}
