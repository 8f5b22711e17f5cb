use compiler::{
    error::CompilerError, BinaryExpr, Expr, Identifier, Keyword, NodeKind, NumericLiteral,
    Operator, TokenKind,
};

fn num(value: f64) -> Expr {
    Expr::NumericLiteral(NumericLiteral { value })
}

#[test]
fn test_digits_tokenize_to_single_number() {
    for source in ["0", "7", "42", "0012", "98765432109876543210"] {
        let tokens = compiler::tokenize(source);

        assert_eq!(tokens.len(), 2, "{}", source);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, source);
        assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
    }
}

#[test]
fn test_parse_declaration() {
    let program = compiler::parse("const x = 5 + (7 - 4)").expect("expected a program");

    assert_eq!(program.kind(), NodeKind::Program);
    assert_eq!(
        program.body,
        vec![Expr::Keyword(Keyword {
            symbol: "const".to_owned(),
            identifier: Identifier::declaration(
                "x",
                Expr::Binary(BinaryExpr {
                    left: Box::new(num(5.)),
                    operator: Operator::Add,
                    right: Box::new(Expr::Binary(BinaryExpr {
                        left: Box::new(num(7.)),
                        operator: Operator::Sub,
                        right: Box::new(num(4.)),
                    })),
                }),
            ),
        })]
    );
}

#[test]
fn test_retokenize_reconstructed_text() {
    let sources = [
        "const x = 5 + (7 - 4)",
        "a=b*c/d;e",
        "(1)(2)\n\tconst_ = __",
    ];

    for source in sources {
        let tokens = compiler::tokenize(source);
        let rebuilt = tokens
            .iter()
            .map(|t| t.text.clone())
            .collect::<Vec<_>>()
            .join(" ");

        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        let again: Vec<TokenKind> = compiler::tokenize(&rebuilt).iter().map(|t| t.kind).collect();

        assert_eq!(kinds, again, "{}", source);
    }
}

#[test]
fn test_parse_unterminated_paren_is_fatal() {
    match compiler::parse("(1 + 2") {
        Err(CompilerError::Parse(e)) => assert_eq!(e.expected, Some(TokenKind::CloseParen)),
        v => panic!("expected a parse error, got {:?}", v),
    }
}

#[test]
fn test_parse_missing_identifier_is_fatal() {
    let err = compiler::parse("const = 5").unwrap_err();

    assert_eq!(
        err.to_string(),
        "Parser Error: Unexpected token found after the keyword const. Expect identifier; \
         found '=' `=` at Ln 1 - Expecting: identifier"
    );
}

#[test]
fn test_parse_strict_rejects_unknown_char() {
    assert_eq!(
        compiler::parse("1 + 2 # 3").expect("expected a program").body.len(),
        1
    );

    match compiler::parse_strict("1 + 2 # 3") {
        Err(CompilerError::Lex(e)) => assert_eq!(e.ch, '#'),
        v => panic!("expected a lex error, got {:?}", v),
    }
}

#[test]
fn test_parse_tokens_from_tokenize() {
    let tokens = compiler::try_tokenize("y = 1\nz = y").expect("expected tokens");
    let program = compiler::parse_tokens(tokens).expect("expected a program");

    assert_eq!(
        program.body,
        vec![
            Expr::Identifier(Identifier::declaration("y", num(1.))),
            Expr::Identifier(Identifier::declaration(
                "z",
                Expr::Identifier(Identifier::reference("y"))
            )),
        ]
    );
}
