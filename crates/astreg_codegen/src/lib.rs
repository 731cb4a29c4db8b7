//! astreg_codegen: Registry code generator.
//!
//! Turns a [`NodeKindRegistry`] into generated source text:
//! 1. Forward declarations for every kind, in registry order
//! 2. The closed variant type `ASTNodeVariant` over pointers to each kind
//! 3. The `ASTVisitor` base, generic over a result type and parameterized
//!    by every kind, with a default handler for the root kind only
//!
//! Output is a pure function of the registry and options: the same input
//! always yields byte-identical text, and nothing is produced for an
//! invalid registry.

pub mod backend;
pub mod cpp;
pub mod naming;
pub mod rust;
pub mod writer;

use astreg_registry::{InvalidRegistry, NodeKindRegistry};
use backend::Backend;
use cpp::CppBackend;
use rust::RustBackend;
use std::fmt;
use writer::CodeWriter;

pub use backend::{VARIANT_ALIAS, VISITOR_NAME};

/// Output language of the generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// A C++ header built around `std::variant`.
    #[default]
    Cpp,
    /// A Rust module built around an enum and a visitor trait.
    Rust,
}

impl Target {
    pub fn name(self) -> &'static str {
        match self {
            Target::Cpp => "C++",
            Target::Rust => "Rust",
        }
    }

    pub fn backend(self) -> &'static dyn Backend {
        match self {
            Target::Cpp => &CppBackend,
            Target::Rust => &RustBackend,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Output language.
    pub target: Target,
    /// C++ namespace wrapping the declarations. Empty means the global namespace.
    /// The header names `Visitor` unqualified, so it must be visible from here
    /// unless `emit_visitor_base` is set.
    pub namespace: String,
    /// Rust module path the kind types are imported from.
    pub import_path: String,
    /// Tool name written into the banner.
    pub generator_name: String,
    /// Also emit the variadic C++ `Visitor` template the visitor base derives from.
    pub emit_visitor_base: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            target: Target::Cpp,
            namespace: "claire::parser".to_string(),
            import_path: "super".to_string(),
            generator_name: "astreg".to_string(),
            emit_visitor_base: false,
        }
    }
}

impl GeneratorOptions {
    pub fn for_target(target: Target) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }
}

/// The complete generated source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    text: String,
    target: Target,
    kind_count: usize,
}

impl GeneratedArtifact {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Number of kinds the variant and visitor range over.
    pub fn kind_count(&self) -> usize {
        self.kind_count
    }
}

impl fmt::Display for GeneratedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Generate the artifact for `registry`.
///
/// Fails with [`InvalidRegistry`] when a kind name or an option string
/// cannot be used in the selected target language.
pub fn generate(
    registry: &NodeKindRegistry,
    options: &GeneratorOptions,
) -> Result<GeneratedArtifact, InvalidRegistry> {
    let backend = options.target.backend();
    backend.check_options(options)?;
    backend.check(registry)?;

    tracing::debug!(
        "generating {} output for {} node kinds",
        options.target,
        registry.len()
    );

    let mut out = CodeWriter::new(backend.indent_str());
    backend.emit(registry, options, &mut out);
    let text = out.finish();

    tracing::trace!("generated {} bytes", text.len());
    Ok(GeneratedArtifact {
        text,
        target: options.target,
        kind_count: registry.len(),
    })
}

/// Validate `names` as a registry, then generate.
pub fn generate_from_names<I, S>(
    names: I,
    options: &GeneratorOptions,
) -> Result<GeneratedArtifact, InvalidRegistry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let registry = NodeKindRegistry::new(names)?;
    generate(&registry, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = GeneratorOptions::default();
        assert_eq!(options.target, Target::Cpp);
        assert_eq!(options.namespace, "claire::parser");
        assert_eq!(options.import_path, "super");
    }

    #[test]
    fn test_target_backend() {
        assert_eq!(Target::Cpp.backend().target(), Target::Cpp);
        assert_eq!(Target::Rust.backend().target(), Target::Rust);
        assert_eq!(Target::Rust.to_string(), "Rust");
    }

    #[test]
    fn test_artifact_metadata() {
        let artifact = generate(
            &NodeKindRegistry::builtin(),
            &GeneratorOptions::for_target(Target::Rust),
        )
        .unwrap();
        assert_eq!(artifact.target(), Target::Rust);
        assert_eq!(artifact.kind_count(), 8);
        assert_eq!(artifact.to_string(), artifact.text());
    }

    #[test]
    fn test_reserved_name_rejected_per_target() {
        let names = ["ASTNode", "Self"];
        let err = generate_from_names(names, &GeneratorOptions::for_target(Target::Rust));
        assert!(matches!(
            err,
            Err(InvalidRegistry::ReservedName { index: 1, target: "Rust", .. })
        ));
        // `Self` is an ordinary identifier in C++.
        assert!(generate_from_names(names, &GeneratorOptions::default()).is_ok());
    }

    #[test]
    fn test_options_checked_per_target() {
        let registry = NodeKindRegistry::builtin();
        let cpp = GeneratorOptions {
            import_path: "not a path".to_string(),
            ..GeneratorOptions::default()
        };
        // The import path only matters for Rust output.
        assert!(generate(&registry, &cpp).is_ok());

        let rust = GeneratorOptions {
            target: Target::Rust,
            ..cpp
        };
        assert!(matches!(
            generate(&registry, &rust),
            Err(InvalidRegistry::InvalidOption { option: "import path", .. })
        ));
    }
}
