//! C++ header backend.
//!
//! Emits forward declarations, a `std::variant` alias over `const`
//! pointers to every kind, and an `ASTVisitor<R>` class template deriving
//! from `Visitor<R, Kinds...>`. The base's call operators are re-exposed
//! and only the root kind's is overridden; it returns a value-initialized
//! `R`. The `Visitor` base is expected to be in scope unless
//! `emit_visitor_base` is set.

use crate::backend::{
    check_generator_name, invalid_option, write_banner, Backend, RESULT_PARAM, VARIANT_ALIAS,
    VISITOR_NAME,
};
use crate::writer::CodeWriter;
use crate::{GeneratorOptions, Target};
use astreg_registry::{is_identifier, InvalidRegistry, NodeKindName, NodeKindRegistry};

/// The variadic visitor template the generated base derives from.
pub const VISITOR_BASE: &str = "Visitor";

/// Namespaces the header names by qualified lookup from inside its own namespace.
const REFERENCED_NAMESPACES: &[&str] = &["std"];

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

pub struct CppBackend;

impl Backend for CppBackend {
    fn target(&self) -> Target {
        Target::Cpp
    }

    fn indent_str(&self) -> &'static str {
        "  "
    }

    fn keywords(&self) -> &'static [&'static str] {
        CPP_KEYWORDS
    }

    fn is_reserved(&self, name: &str) -> bool {
        crate::backend::GENERATED_SYMBOLS.contains(&name)
            || name == VISITOR_BASE
            || REFERENCED_NAMESPACES.contains(&name)
            || CPP_KEYWORDS.contains(&name)
            || is_reserved_identifier(name)
    }

    fn check_options(&self, options: &GeneratorOptions) -> Result<(), InvalidRegistry> {
        check_generator_name(&options.generator_name, Target::Cpp)?;

        // Empty selects the global namespace.
        let namespace = options.namespace.as_str();
        if !namespace.is_empty() && !namespace.split("::").all(is_namespace_segment) {
            return Err(invalid_option("namespace", namespace, Target::Cpp));
        }
        Ok(())
    }

    fn emit(&self, registry: &NodeKindRegistry, options: &GeneratorOptions, out: &mut CodeWriter) {
        write_banner(out, &options.generator_name);
        out.write_line("#pragma once");
        out.write_line("#include <variant>");
        out.newline();

        let namespace = options.namespace.as_str();
        if !namespace.is_empty() {
            out.write("namespace ");
            out.write(namespace);
            out.write_line(" {");
            out.newline();
        }

        for kind in registry {
            out.write("class ");
            out.write(kind.as_str());
            out.write_line(";");
        }
        out.newline();

        out.write("using ");
        out.write(VARIANT_ALIAS);
        out.write(" = std::variant<");
        out.write_separated(registry.iter().map(const_pointer), ", ");
        out.write_line(">;");
        out.newline();

        if options.emit_visitor_base {
            self.emit_visitor_base(out);
            out.newline();
        }
        self.emit_visitor(registry, out);

        if !namespace.is_empty() {
            out.newline();
            out.write("} // namespace ");
            out.write_line(namespace);
        }
    }
}

impl CppBackend {
    /// The variadic base: one pure virtual call operator per kind, each
    /// level re-exposing the operators of the levels below it.
    fn emit_visitor_base(&self, out: &mut CodeWriter) {
        out.write_line("template <typename R, typename... T>");
        out.write_line("class Visitor;");
        out.newline();
        out.write_line("template <typename R, typename T>");
        out.write_line("class Visitor<R, T> {");
        out.write_line("public:");
        out.indent();
        out.write_line("virtual ~Visitor() = default;");
        out.write_line("virtual R operator()(T const *visitable) = 0;");
        out.dedent();
        out.write_line("};");
        out.newline();
        out.write_line("template <typename R, typename T, typename... Rest>");
        out.write_line("class Visitor<R, T, Rest...> : public Visitor<R, Rest...> {");
        out.write_line("public:");
        out.indent();
        out.write_line("using Visitor<R, Rest...>::operator();");
        out.write_line("virtual R operator()(T const *visitable) = 0;");
        out.dedent();
        out.write_line("};");
    }

    fn emit_visitor(&self, registry: &NodeKindRegistry, out: &mut CodeWriter) {
        out.write("template <typename ");
        out.write(RESULT_PARAM);
        out.write_line(">");
        out.write("class ");
        out.write(VISITOR_NAME);
        out.write(" : public ");
        self.write_base(registry, out);
        out.write_line(" {");
        out.write_line("public:");
        out.indent();
        out.write("using ");
        self.write_base(registry, out);
        out.write_line("::operator();");
        out.write(RESULT_PARAM);
        out.write(" operator()(");
        out.write(&const_pointer(registry.root()));
        out.write_line(") override {");
        out.indent();
        out.write("return ");
        out.write(RESULT_PARAM);
        out.write_line("{};");
        out.dedent();
        out.write_line("}");
        out.dedent();
        out.write_line("};");
    }

    /// `Visitor<R, K1, ..., Kn>`
    fn write_base(&self, registry: &NodeKindRegistry, out: &mut CodeWriter) {
        out.write(VISITOR_BASE);
        out.write("<");
        out.write(RESULT_PARAM);
        out.write(", ");
        out.write_separated(registry.names(), ", ");
        out.write(">");
    }
}

fn const_pointer(kind: &NodeKindName) -> String {
    format!("{} const *", kind)
}

fn is_namespace_segment(segment: &str) -> bool {
    is_identifier(segment)
        && !CPP_KEYWORDS.contains(&segment)
        && !REFERENCED_NAMESPACES.contains(&segment)
        && !is_reserved_identifier(segment)
}

/// Identifiers the C++ standard reserves for the implementation:
/// anything containing `__` or starting with `_` and an uppercase letter.
fn is_reserved_identifier(name: &str) -> bool {
    if name.contains("__") {
        return true;
    }
    let mut chars = name.chars();
    matches!((chars.next(), chars.next()), (Some('_'), Some(c)) if c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_identifiers() {
        assert!(is_reserved_identifier("_Node"));
        assert!(is_reserved_identifier("My__Node"));
        assert!(!is_reserved_identifier("_node"));
        assert!(!is_reserved_identifier("My_Node"));
    }

    #[test]
    fn test_base_template_name_reserved() {
        assert!(CppBackend.is_reserved("Visitor"));
        assert!(CppBackend.is_reserved("ASTNodeVariant"));
        assert!(CppBackend.is_reserved("class"));
        assert!(CppBackend.is_reserved("std"));
        assert!(!CppBackend.is_reserved("ClassDecl"));
    }

    #[test]
    fn test_namespace_segments() {
        assert!(is_namespace_segment("parser"));
        assert!(!is_namespace_segment("class"));
        assert!(!is_namespace_segment("std"));
        assert!(!is_namespace_segment("__detail"));
        assert!(!is_namespace_segment(""));
    }

    #[test]
    fn test_const_pointer() {
        let kind = NodeKindName::new("StringExpr").unwrap();
        assert_eq!(const_pointer(&kind), "StringExpr const *");
    }
}
