use crate::token::Operator;

/// Discriminator shared by every AST node.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NodeKind {
    Program,
    NumericLiteral,
    Identifier,
    Keyword,
    BinaryExpr,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    NumericLiteral(NumericLiteral),
    Identifier(Identifier),
    Keyword(Keyword),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::NumericLiteral(_) => NodeKind::NumericLiteral,
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::Keyword(_) => NodeKind::Keyword,
            Expr::Binary(_) => NodeKind::BinaryExpr,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct NumericLiteral {
    pub value: f64,
}

/// A symbol reference, or the target of a declaration when `init` is set.
#[derive(Debug, PartialEq, Clone)]
pub struct Identifier {
    pub symbol: String,
    pub init: Option<Box<Expr>>,
}

impl Identifier {
    pub fn reference(symbol: impl Into<String>) -> Identifier {
        Identifier {
            symbol: symbol.into(),
            init: None,
        }
    }

    pub fn declaration(symbol: impl Into<String>, init: Expr) -> Identifier {
        Identifier {
            symbol: symbol.into(),
            init: Some(Box::new(init)),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Keyword {
    pub symbol: String,
    pub identifier: Identifier,
}

#[derive(Debug, PartialEq, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Operator,
    pub right: Box<Expr>,
}

impl From<NumericLiteral> for Expr {
    fn from(value: NumericLiteral) -> Self {
        Expr::NumericLiteral(value)
    }
}

impl From<Identifier> for Expr {
    fn from(value: Identifier) -> Self {
        Expr::Identifier(value)
    }
}

impl From<Keyword> for Expr {
    fn from(value: Keyword) -> Self {
        Expr::Keyword(value)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(value: BinaryExpr) -> Self {
        Expr::Binary(value)
    }
}
