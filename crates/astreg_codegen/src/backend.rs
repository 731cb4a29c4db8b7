//! Per-language backends.
//!
//! A backend checks that every kind name is usable in its language and
//! renders the artifact for a validated registry.

use crate::writer::CodeWriter;
use crate::{GeneratorOptions, Target};
use astreg_registry::{InvalidRegistry, NodeKindRegistry};

/// Name of the generated closed variant type.
pub const VARIANT_ALIAS: &str = "ASTNodeVariant";
/// Name of the generated visitor base.
pub const VISITOR_NAME: &str = "ASTVisitor";
/// Name of the visitor's result type parameter.
pub const RESULT_PARAM: &str = "R";

/// Names the generator itself introduces next to the kinds.
pub const GENERATED_SYMBOLS: &[&str] = &[VARIANT_ALIAS, VISITOR_NAME, RESULT_PARAM];

pub trait Backend {
    fn target(&self) -> Target;

    /// One level of indentation in the generated text.
    fn indent_str(&self) -> &'static str;

    /// Keywords of the output language.
    fn keywords(&self) -> &'static [&'static str];

    fn is_reserved(&self, name: &str) -> bool {
        GENERATED_SYMBOLS.contains(&name) || self.keywords().contains(&name)
    }

    fn check_reserved(&self, registry: &NodeKindRegistry) -> Result<(), InvalidRegistry> {
        for (index, kind) in registry.iter().enumerate() {
            if self.is_reserved(kind.as_str()) {
                return Err(InvalidRegistry::ReservedName {
                    name: kind.to_string(),
                    index,
                    target: self.target().name(),
                });
            }
        }
        Ok(())
    }

    /// Reject kinds that would not compile once emitted.
    fn check(&self, registry: &NodeKindRegistry) -> Result<(), InvalidRegistry> {
        self.check_reserved(registry)
    }

    /// Reject option strings that would corrupt the emitted text.
    fn check_options(&self, options: &GeneratorOptions) -> Result<(), InvalidRegistry> {
        check_generator_name(&options.generator_name, self.target())
    }

    /// Render the full artifact. Registry and options have already been checked.
    fn emit(&self, registry: &NodeKindRegistry, options: &GeneratorOptions, out: &mut CodeWriter);
}

/// The banner is a single line comment.
pub(crate) fn check_generator_name(name: &str, target: Target) -> Result<(), InvalidRegistry> {
    if name.is_empty() || name.contains(['\n', '\r']) {
        return Err(invalid_option("generator name", name, target));
    }
    Ok(())
}

pub(crate) fn invalid_option(option: &'static str, value: &str, target: Target) -> InvalidRegistry {
    InvalidRegistry::InvalidOption {
        option,
        value: value.to_string(),
        target: target.name(),
    }
}

pub(crate) fn write_banner(out: &mut CodeWriter, generator_name: &str) {
    out.write("// This code is auto-generated by ");
    out.write(generator_name);
    out.write_line(", do not manually modify!!!");
}
