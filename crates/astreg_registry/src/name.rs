//! Node kind names.

use std::fmt;
use unicode_xid::UnicodeXID;

/// The identifier of one AST node kind, e.g. `ProgramDecl`.
///
/// A `NodeKindName` is always a valid identifier in both C++ and Rust
/// (modulo keywords, which are checked per target by the code generator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKindName(pub(crate) String);

impl NodeKindName {
    /// Validate `name` as an identifier. Returns `None` if it is not one.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if is_identifier(&name) {
            Some(Self(name))
        } else {
            None
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKindName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeKindName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeKindName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeKindName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[inline]
fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic() || (!ch.is_ascii() && ch.is_xid_start())
}

#[inline]
fn is_identifier_part(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric() || (!ch.is_ascii() && ch.is_xid_continue())
}

/// Whether `s` is usable as a type name: an identifier start followed by
/// identifier parts. A lone `_` is rejected since Rust reserves it.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => {}
        _ => return false,
    }
    s != "_" && chars.all(is_identifier_part)
}
