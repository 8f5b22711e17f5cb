use log::{debug, trace};

use crate::{
    error::ParseError,
    expr::{BinaryExpr, Expr, Identifier, Keyword, NumericLiteral},
    stmt::{Program, Statement},
    token::{Operator, Token, TokenKind},
};

static EOF_TOKEN: Token = Token::end_of_input();

/// Deepest parenthesis nesting accepted before parsing fails.
pub const MAX_DEPTH: usize = 256;

/// Predictive parser over an owned token sequence. One token of lookahead,
/// no backtracking.
pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Parser {
        Parser {
            tokens,
            cursor: 0,
            depth: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::default();

        while !self.check(TokenKind::EndOfInput) {
            let stmt = self.parse_stmt()?;
            trace!("parsed top-level {:?}", stmt.kind());
            program.body.push(stmt);
        }

        debug!(
            "parsed {} statement(s) from {} token(s)",
            program.body.len(),
            self.tokens.len()
        );

        Ok(program)
    }

    /// The token under the cursor, or `None` once the sequence is exhausted.
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn peek(&self) -> &Token {
        self.current().unwrap_or(&EOF_TOKEN)
    }

    fn next(&mut self) -> &Token {
        match self.tokens.get(self.cursor) {
            Some(t) => {
                self.cursor += 1;

                t
            }
            None => &EOF_TOKEN,
        }
    }

    fn check(&self, t: TokenKind) -> bool {
        self.peek().kind == t
    }

    /// Consumes the next token and fails unless it is of kind `t`.
    fn expect(&mut self, t: TokenKind, msg: &str) -> Result<Token, ParseError> {
        let found = self.current().cloned();
        self.next();

        match found {
            Some(token) if token.kind == t => Ok(token),
            found => Err(ParseError::expecting(msg, found, t)),
        }
    }

    fn peek_operator(&self) -> Option<Operator> {
        Operator::try_from(self.peek()).ok()
    }

    fn parse_stmt(&mut self) -> Result<Statement, ParseError> {
        self.parse_expr()
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        match self.peek().kind {
            TokenKind::Const => self.parse_keyword_expr(),
            TokenKind::Identifier => Ok(Expr::Identifier(self.parse_identifier_expr()?)),
            _ => self.parse_additive_expr(),
        }
    }

    fn parse_keyword_expr(&mut self) -> Result<Expr, ParseError> {
        let symbol = self.parse_keyword()?;
        let identifier = self.parse_identifier_expr()?;

        Ok(Expr::Keyword(Keyword { symbol, identifier }))
    }

    fn parse_keyword(&mut self) -> Result<String, ParseError> {
        Ok(self.expect(TokenKind::Const, "Expect keyword const")?.text)
    }

    fn parse_identifier_expr(&mut self) -> Result<Identifier, ParseError> {
        let identifier = self.expect(
            TokenKind::Identifier,
            "Unexpected token found after the keyword const. Expect identifier",
        )?;
        self.expect(
            TokenKind::Equals,
            "Unexpected token found after the identifier. Expect equals =",
        )?;

        let init = self.parse_additive_expr()?;

        Ok(Identifier::declaration(identifier.text, init))
    }

    fn parse_additive_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative_expr()?;

        while let Some(operator) = self.peek_operator().filter(|op| op.is_additive()) {
            self.next();
            let right = self.parse_multiplicative_expr()?;

            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_multiplicative_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary_expr()?;

        while let Some(operator) = self.peek_operator().filter(|op| op.is_multiplicative()) {
            self.next();
            let right = self.parse_primary_expr()?;

            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        match self.peek().kind {
            TokenKind::Number => {
                let token = self.next().clone();
                let value = token.text.parse::<f64>().map_err(|_| {
                    ParseError::new("Expected a valid numeric literal", Some(token.clone()))
                })?;

                Ok(Expr::NumericLiteral(NumericLiteral { value }))
            }
            TokenKind::Identifier => {
                let symbol = self.next().text.clone();

                Ok(Expr::Identifier(Identifier::reference(symbol)))
            }
            // A keyword node always owns the identifier it declares, so `const`
            // is only valid at the start of a declaration.
            TokenKind::Const => Err(ParseError::new(
                "Keyword const can only begin a declaration",
                self.current().cloned(),
            )),
            TokenKind::OpenParen => {
                if self.depth >= MAX_DEPTH {
                    return Err(ParseError::new(
                        "Expression nested too deeply",
                        self.current().cloned(),
                    ));
                }

                self.next();
                self.depth += 1;
                let expr = self.parse_expr();
                self.depth -= 1;

                let expr = expr?;
                self.expect(
                    TokenKind::CloseParen,
                    "Unexpected token found inside parenthesised expression. Expected closing parenthesis.",
                )?;

                Ok(expr)
            }
            _ => Err(ParseError::new(
                "Unexpected token found during parsing!",
                self.current().cloned(),
            )),
        }
    }
}
