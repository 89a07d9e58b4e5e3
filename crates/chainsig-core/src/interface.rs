//! The end-to-end pipeline: raw declaration in, canonical signature and
//! hashes out.

use crate::args::canonicalize_args;
use crate::error::SignatureError;
use crate::hash::{Selector, SelectorHash};
use crate::signature::{assemble, CanonicalSignature, InterfaceKind};
use crate::strip::{strip, NormalizedInterface};
use serde::Serialize;
use std::str::FromStr;

/// A fully canonicalized interface declaration, the primary output of ChainSig.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceSignature {
    /// The declaration after boilerplate stripping
    pub normalized: NormalizedInterface,
    /// The string that was hashed, e.g. `transfer(address,uint256)`
    #[serde(rename = "canonical_signature")]
    pub signature: CanonicalSignature,
    /// Method or event, by naming convention
    pub kind: InterfaceKind,
    /// Keccak-256 of the canonical signature
    #[serde(rename = "hash_hex")]
    pub hash: SelectorHash,
    /// First 4 bytes of `hash`
    #[serde(rename = "selector_hex")]
    pub selector: Selector,
}

impl InterfaceSignature {
    pub fn name(&self) -> &str {
        self.signature.name()
    }

    pub fn is_event(&self) -> bool {
        self.kind == InterfaceKind::Event
    }

    /// The log topic (`topics[0]`) an event with this signature is emitted under.
    /// Returns `None` for methods.
    pub fn topic(&self) -> Option<&SelectorHash> {
        self.is_event().then_some(&self.hash)
    }
}

impl FromStr for InterfaceSignature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonicalize(s)
    }
}

/// Canonicalize a raw method or event declaration and hash it.
///
/// ```
/// let sig = chainsig_core::canonicalize("function transfer(address to, uint256 amount) external returns (bool)").unwrap();
/// assert_eq!(sig.signature.as_str(), "transfer(address,uint256)");
/// assert_eq!(sig.selector.to_hex(), "0xa9059cbb");
/// ```
pub fn canonicalize(raw: &str) -> Result<InterfaceSignature, SignatureError> {
    let normalized = strip(raw)?;
    let (name, type_list) = canonicalize_args(&normalized)?;
    let signature = assemble(&name, &type_list);
    let kind = signature.kind();
    let hash = signature.hash();
    let selector = hash.selector();

    tracing::trace!(%signature, %selector, %kind, "canonicalized interface");

    Ok(InterfaceSignature {
        normalized,
        signature,
        kind,
        hash,
        selector,
    })
}
