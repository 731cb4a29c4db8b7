//! astreg_tests: Compile-time check of the Rust-target artifact.
//!
//! `build.rs` generates the registry module for the built-in kinds and it
//! is included below, next to minimal hand-written node types. If the
//! generated enum or visitor trait is malformed, this crate fails to build.

pub mod nodes;

pub mod registry {
    include!(concat!(env!("OUT_DIR"), "/ast_registry.rs"));
}

pub use registry::{ASTNodeVariant, ASTVisitor};
