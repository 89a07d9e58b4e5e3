//! Canonical signature assembly and method/event classification.

use crate::hash::{keccak256, SelectorHash};
use serde::Serialize;
use std::fmt;

/// Whether a declaration is a method or an event.
///
/// Derived purely from the case of the first character of the name:
/// Solidity convention writes events in `PascalCase` and functions in
/// `camelCase`. This is a guess, not a semantic guarantee: a function named
/// `Swap` is classified as an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    Method,
    Event,
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Method => "method",
            Self::Event => "event",
        })
    }
}

/// Classify a declaration name by the case of its first character.
pub fn classify(name: &str) -> InterfaceKind {
    match name.chars().next() {
        Some(first) if first.is_uppercase() => InterfaceKind::Event,
        _ => InterfaceKind::Method,
    }
}

/// `name(type,type,...)` with no whitespace anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalSignature(String);

impl CanonicalSignature {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn name(&self) -> &str {
        match self.0.find('(') {
            Some(open) => &self.0[..open],
            None => &self.0,
        }
    }

    /// The comma-joined type list between the outer parentheses.
    pub fn args(&self) -> &str {
        match self.0.find('(') {
            Some(open) => &self.0[open + 1..self.0.len() - 1],
            None => "",
        }
    }

    pub fn kind(&self) -> InterfaceKind {
        classify(self.name())
    }

    pub fn hash(&self) -> SelectorHash {
        keccak256(self.0.as_bytes())
    }
}

impl fmt::Display for CanonicalSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalSignature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Assemble `name(type_list)`, removing any whitespace left in either part.
pub fn assemble(name: &str, type_list: &str) -> CanonicalSignature {
    let sig = format!("{name}({type_list})")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    CanonicalSignature(sig)
}
