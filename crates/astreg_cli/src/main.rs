//! astreg: AST node registry generator CLI.
//!
//! Usage:
//!   astreg [options] > ast_registry.hpp
//!
//! With no arguments, prints the C++ header for the built-in node kinds.
//! The artifact is written to stdout in one piece; diagnostics and logs go
//! to stderr, and nothing reaches stdout when the registry is invalid.

use astreg_codegen::{generate, GeneratorOptions, Target};
use astreg_registry::NodeKindRegistry;
use clap::{Parser as ClapParser, ValueEnum};
use miette::IntoDiagnostic;
use std::io::Write;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(ClapParser, Debug)]
#[command(
    name = "astreg",
    version,
    about = "astreg - Generate the AST node variant and visitor base from the node kind registry"
)]
struct Cli {
    /// Output language.
    #[arg(long, value_enum, default_value_t = TargetArg::Cpp)]
    target: TargetArg,

    /// C++ namespace for the declarations. Pass an empty string for the global namespace.
    #[arg(long, default_value = "claire::parser")]
    namespace: String,

    /// Rust module path the node kind types are imported from.
    #[arg(long = "import-path", default_value = "super")]
    import_path: String,

    /// Replace the built-in registry. Repeat in order, root kind first.
    #[arg(long = "kind", value_name = "NAME")]
    kinds: Vec<String>,

    /// Also emit the variadic `Visitor` base template (C++ only).
    #[arg(long = "emit-visitor-base")]
    emit_visitor_base: bool,

    /// Tool name written into the generated banner.
    #[arg(long = "generator-name", default_value = "astreg")]
    generator_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TargetArg {
    Cpp,
    Rust,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Cpp => Target::Cpp,
            TargetArg::Rust => Target::Rust,
        }
    }
}

impl Cli {
    fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            target: self.target.into(),
            namespace: self.namespace.clone(),
            import_path: self.import_path.clone(),
            generator_name: self.generator_name.clone(),
            emit_visitor_base: self.emit_visitor_base,
        }
    }

    fn registry(&self) -> miette::Result<NodeKindRegistry> {
        if self.kinds.is_empty() {
            return Ok(NodeKindRegistry::builtin());
        }
        Ok(NodeKindRegistry::new(self.kinds.iter().cloned())?)
    }
}

fn main() {
    // Use RUST_LOG=debug for verbose output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let cli = Cli::parse();
    if let Err(report) = run(&cli) {
        eprintln!("{:?}", report);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> miette::Result<()> {
    let registry = cli.registry()?;
    let options = cli.options();
    let artifact = generate(&registry, &options)?;

    tracing::debug!(
        "writing {} bytes of {} output",
        artifact.text().len(),
        artifact.target()
    );
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(artifact.as_bytes()).into_diagnostic()?;
    handle.flush().into_diagnostic()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["astreg"]);
        assert_eq!(cli.options(), GeneratorOptions::default());
        assert_eq!(cli.registry().unwrap(), NodeKindRegistry::builtin());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "astreg",
            "--target",
            "rust",
            "--import-path",
            "crate::ast",
            "--kind",
            "Node",
            "--kind",
            "Leaf",
        ]);
        let options = cli.options();
        assert_eq!(options.target, Target::Rust);
        assert_eq!(options.import_path, "crate::ast");
        let names: Vec<_> = cli.registry().unwrap().names().map(str::to_string).collect();
        assert_eq!(names, vec!["Node", "Leaf"]);
    }

    #[test]
    fn test_cli_rejects_keyword_namespace() {
        let cli = Cli::parse_from(["astreg", "--namespace", "class"]);
        let registry = cli.registry().unwrap();
        assert!(generate(&registry, &cli.options()).is_err());
    }

    #[test]
    fn test_cli_rejects_duplicate_kind() {
        let cli = Cli::parse_from(["astreg", "--kind", "A", "--kind", "A"]);
        assert!(cli.registry().is_err());
    }
}
