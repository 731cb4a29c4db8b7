//! The registry error type.
//!
//! Every way a kind list can be unusable is reported as an
//! [`InvalidRegistry`]. It is raised before any output is produced.

use miette::Diagnostic;
use thiserror::Error;

/// A node kind list that cannot be turned into a variant and visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum InvalidRegistry {
    #[error("node kind registry is empty")]
    #[diagnostic(
        code(astreg::registry::empty),
        help("register at least the root kind")
    )]
    Empty,

    #[error("node kind `{name}` is registered twice (positions {first} and {second})")]
    #[diagnostic(
        code(astreg::registry::duplicate),
        help("every kind may appear only once; remove the later entry")
    )]
    DuplicateKind {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("node kind {name:?} at position {index} is not a valid identifier")]
    #[diagnostic(
        code(astreg::registry::identifier),
        help("kind names must start with a letter or `_` and contain only letters, digits and `_`")
    )]
    InvalidIdentifier { name: String, index: usize },

    #[error("node kind `{name}` at position {index} is reserved in {target} output")]
    #[diagnostic(code(astreg::registry::reserved), help("rename the kind"))]
    ReservedName {
        name: String,
        index: usize,
        target: &'static str,
    },

    #[error("node kinds `{first}` and `{second}` both generate `{derived}`")]
    #[diagnostic(
        code(astreg::registry::collision),
        help("rename one of the kinds so the generated names differ")
    )]
    NameCollision {
        first: String,
        second: String,
        derived: String,
    },

    #[error("{option} {value:?} cannot be used in {target} output")]
    #[diagnostic(
        code(astreg::options::invalid),
        help("paths must be `::`-separated identifiers that are not keywords; the generator name must be a single line")
    )]
    InvalidOption {
        option: &'static str,
        value: String,
        target: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message() {
        let err = InvalidRegistry::DuplicateKind {
            name: "A".to_string(),
            first: 0,
            second: 1,
        };
        assert_eq!(
            err.to_string(),
            "node kind `A` is registered twice (positions 0 and 1)"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let code = InvalidRegistry::Empty.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("astreg::registry::empty"));
    }

    #[test]
    fn test_invalid_option_message() {
        let err = InvalidRegistry::InvalidOption {
            option: "namespace",
            value: "class".to_string(),
            target: "C++",
        };
        assert_eq!(err.to_string(), "namespace \"class\" cannot be used in C++ output");
    }
}
