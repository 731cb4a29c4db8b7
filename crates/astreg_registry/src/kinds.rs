//! The built-in node kind list.
//!
//! This is the single source of truth for which AST node kinds exist.
//! Adding a kind here and regenerating is all it takes to extend the
//! variant type and the visitor base.

/// Node kinds in declaration order. The first entry is the root kind.
pub const BUILTIN_KINDS: &[&str] = &[
    "ASTNode",
    // declarations
    "ProgramDecl",
    // expressions
    "IdentifierExpr",
    "StringExpr",
    "FunctionCallExpr",
    "IdentifierSeq",
    "ExpressionSequence",
    "NamespaceAccessExpr",
];
