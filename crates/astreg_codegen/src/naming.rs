//! Name derivation for generated symbols.

/// Convert an UpperCamelCase kind name to snake_case.
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or digit, and before the last capital of an acronym
/// that starts a new word: `ASTNode` becomes `ast_node`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.extend(ch.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple() {
        assert_eq!(to_snake_case("ProgramDecl"), "program_decl");
        assert_eq!(to_snake_case("NamespaceAccessExpr"), "namespace_access_expr");
    }

    #[test]
    fn test_acronym() {
        assert_eq!(to_snake_case("ASTNode"), "ast_node");
        assert_eq!(to_snake_case("IRExpr"), "ir_expr");
        assert_eq!(to_snake_case("AST"), "ast");
    }

    #[test]
    fn test_digits_and_underscores() {
        assert_eq!(to_snake_case("Expr2D"), "expr2_d");
        assert_eq!(to_snake_case("Foo_Bar"), "foo_bar");
        assert_eq!(to_snake_case("_Hidden"), "_hidden");
    }
}
