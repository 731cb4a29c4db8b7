//! Minimal node types for the built-in kinds.

use crate::registry::ASTNodeVariant;

/// A node with no more specific kind.
#[derive(Debug, Default)]
pub struct ASTNode {
    pub id: String,
}

#[derive(Debug, Default)]
pub struct ProgramDecl {
    pub id: String,
    pub body: Vec<ASTNode>,
}

#[derive(Debug, Default)]
pub struct IdentifierExpr {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct StringExpr {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Default)]
pub struct FunctionCallExpr {
    pub id: String,
    pub callee: String,
    pub argument_count: usize,
}

#[derive(Debug, Default)]
pub struct IdentifierSeq {
    pub id: String,
    pub names: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ExpressionSequence {
    pub id: String,
    pub len: usize,
}

#[derive(Debug, Default)]
pub struct NamespaceAccessExpr {
    pub id: String,
    pub path: Vec<String>,
}

macro_rules! impl_as_variant {
    ($($kind:ident),* $(,)?) => {
        $(
            impl $kind {
                pub fn as_variant(&self) -> ASTNodeVariant<'_> {
                    ASTNodeVariant::$kind(self)
                }
            }
        )*
    };
}

impl_as_variant!(
    ASTNode,
    ProgramDecl,
    IdentifierExpr,
    StringExpr,
    FunctionCallExpr,
    IdentifierSeq,
    ExpressionSequence,
    NamespaceAccessExpr,
);
