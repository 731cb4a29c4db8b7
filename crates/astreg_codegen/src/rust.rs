//! Rust module backend.
//!
//! The output is meant to be `include!`d into a module whose
//! `import_path` holds the hand-written kind types. Each kind is imported
//! rather than declared, `ASTNodeVariant<'a>` is an enum with one
//! borrowed alternative per kind, and `ASTVisitor<R>` is a trait with one
//! method per kind. The root kind's method is provided and returns
//! `R::default()`; every other method is required, so an implementor that
//! forgets a kind fails to compile.

use crate::backend::{
    check_generator_name, invalid_option, write_banner, Backend, GENERATED_SYMBOLS, RESULT_PARAM,
    VARIANT_ALIAS, VISITOR_NAME,
};
use crate::naming::to_snake_case;
use crate::writer::CodeWriter;
use crate::{GeneratorOptions, Target};
use astreg_registry::{is_identifier, InvalidRegistry, NodeKindName, NodeKindRegistry};
use rustc_hash::FxHashMap;

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
    "yield",
];

/// Names the generated items use unqualified: the `str` in `KINDS`, the
/// associated items of `ASTNodeVariant`, and the visitor's parameter names.
const REFERENCED_NAMES: &[&str] = &["str", "KINDS", "kind_name", "node", "_node"];

pub struct RustBackend;

/// Method the generated trait uses for a kind: `visit_<snake_case>`.
pub fn visit_method_name(kind: &str) -> String {
    format!("visit_{}", to_snake_case(kind))
}

impl Backend for RustBackend {
    fn target(&self) -> Target {
        Target::Rust
    }

    fn indent_str(&self) -> &'static str {
        "    "
    }

    fn keywords(&self) -> &'static [&'static str] {
        RUST_KEYWORDS
    }

    fn is_reserved(&self, name: &str) -> bool {
        GENERATED_SYMBOLS.contains(&name)
            || RUST_KEYWORDS.contains(&name)
            || REFERENCED_NAMES.contains(&name)
    }

    fn check_options(&self, options: &GeneratorOptions) -> Result<(), InvalidRegistry> {
        check_generator_name(&options.generator_name, Target::Rust)?;
        if !is_module_path(&options.import_path) {
            return Err(invalid_option("import path", &options.import_path, Target::Rust));
        }
        Ok(())
    }

    fn check(&self, registry: &NodeKindRegistry) -> Result<(), InvalidRegistry> {
        self.check_reserved(registry)?;

        let mut methods: FxHashMap<String, &str> = FxHashMap::default();
        for kind in registry.names() {
            let method = visit_method_name(kind);
            if let Some(first) = methods.get(&method) {
                return Err(InvalidRegistry::NameCollision {
                    first: first.to_string(),
                    second: kind.to_string(),
                    derived: method,
                });
            }
            methods.insert(method, kind);
        }
        Ok(())
    }

    fn emit(&self, registry: &NodeKindRegistry, options: &GeneratorOptions, out: &mut CodeWriter) {
        write_banner(out, &options.generator_name);
        out.newline();

        for kind in registry {
            out.write("use ");
            out.write(&options.import_path);
            out.write("::");
            out.write(kind.as_str());
            out.write_line(";");
        }
        out.newline();

        self.emit_variant(registry, out);
        out.newline();
        self.emit_visitor(registry, out);
    }
}

impl RustBackend {
    fn emit_variant(&self, registry: &NodeKindRegistry, out: &mut CodeWriter) {
        out.write_line("/// A borrowed node of exactly one registered kind.");
        out.write_line("#[derive(Clone, Copy)]");
        out.write("pub enum ");
        out.write(VARIANT_ALIAS);
        out.write_line("<'a> {");
        out.indent();
        for kind in registry {
            out.write(kind.as_str());
            out.write("(&'a ");
            out.write(kind.as_str());
            out.write_line("),");
        }
        out.dedent();
        out.write_line("}");
        out.newline();

        out.write("impl ");
        out.write(VARIANT_ALIAS);
        out.write_line("<'_> {");
        out.indent();
        out.write_line("/// Registered kind names, root first.");
        out.write(&format!("pub const KINDS: [&'static str; {}] = [", registry.len()));
        out.write_separated(registry.names().map(|name| format!("{:?}", name)), ", ");
        out.write_line("];");
        out.newline();
        out.write_line("pub fn kind_name(&self) -> &'static str {");
        out.indent();
        out.write_line("match self {");
        out.indent();
        for kind in registry {
            out.write(&variant_pattern(kind, "_"));
            out.write(&format!(" => {:?},", kind.as_str()));
            out.newline();
        }
        out.dedent();
        out.write_line("}");
        out.dedent();
        out.write_line("}");
        out.dedent();
        out.write_line("}");
    }

    fn emit_visitor(&self, registry: &NodeKindRegistry, out: &mut CodeWriter) {
        out.write_line("/// Visitor over every registered kind. Only the root kind has a");
        out.write_line("/// default handler, which returns the default result.");
        out.write(&format!(
            "pub trait {}<{}: ::core::default::Default> {{",
            VISITOR_NAME, RESULT_PARAM
        ));
        out.newline();
        out.indent();

        let root = registry.root();
        out.write_line(&format!(
            "fn {}(&mut self, _node: &{}) -> {} {{",
            visit_method_name(root.as_str()),
            root,
            RESULT_PARAM
        ));
        out.indent();
        out.write_line(&format!("{}::default()", RESULT_PARAM));
        out.dedent();
        out.write_line("}");

        for kind in registry.specialized() {
            out.newline();
            out.write_line(&format!(
                "fn {}(&mut self, node: &{}) -> {};",
                visit_method_name(kind.as_str()),
                kind,
                RESULT_PARAM
            ));
        }

        out.newline();
        out.write_line(&format!(
            "fn visit(&mut self, node: {}<'_>) -> {} {{",
            VARIANT_ALIAS, RESULT_PARAM
        ));
        out.indent();
        out.write_line("match node {");
        out.indent();
        for kind in registry {
            out.write(&variant_pattern(kind, "node"));
            out.write(" => self.");
            out.write(&visit_method_name(kind.as_str()));
            out.write_line("(node),");
        }
        out.dedent();
        out.write_line("}");
        out.dedent();
        out.write_line("}");

        out.dedent();
        out.write_line("}");
    }
}

/// A `use` prefix: identifiers, with `crate`, `self` and `super` only in
/// leading position.
fn is_module_path(path: &str) -> bool {
    let segments: Vec<&str> = path.split("::").collect();
    segments.iter().enumerate().all(|(i, segment)| match *segment {
        "crate" | "self" => i == 0,
        "super" => i == 0 || matches!(segments[i - 1], "self" | "super"),
        _ => is_identifier(segment) && !RUST_KEYWORDS.contains(segment),
    })
}

fn variant_pattern(kind: &NodeKindName, binding: &str) -> String {
    format!("{}::{}({})", VARIANT_ALIAS, kind, binding)
}
