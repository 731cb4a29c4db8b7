//! astreg_registry: The node kind registry.
//!
//! Holds the ordered list of AST node kinds that the code generator turns
//! into forward declarations, a closed variant type, and a visitor base.
//! The first kind is the root kind that every other kind specializes.

pub mod error;
pub mod kinds;
pub mod name;
pub mod registry;

// Re-export key types
pub use error::InvalidRegistry;
pub use kinds::BUILTIN_KINDS;
pub use name::{is_identifier, NodeKindName};
pub use registry::NodeKindRegistry;
