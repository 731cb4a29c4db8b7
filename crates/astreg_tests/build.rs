use astreg_codegen::{generate, GeneratorOptions, Target};
use astreg_registry::NodeKindRegistry;
use std::path::PathBuf;
use std::{env, fs};

fn main() {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let options = GeneratorOptions {
        import_path: "crate::nodes".to_string(),
        ..GeneratorOptions::for_target(Target::Rust)
    };
    let artifact = generate(&NodeKindRegistry::builtin(), &options)
        .expect("built-in registry generates");

    fs::write(out_dir.join("ast_registry.rs"), artifact.as_bytes())
        .expect("failed to write ast_registry.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
