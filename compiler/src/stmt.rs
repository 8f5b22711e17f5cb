use crate::expr::{Expr, NodeKind};

/// Every top-level statement is an expression.
pub type Statement = Expr;

/// Root of the tree; exactly one per parsed source text.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Program {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
}
