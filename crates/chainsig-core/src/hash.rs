//! Keccak-256 hashing of canonical signatures.
//!
//! The hash of a canonical signature is:
//!   keccak256("transfer(address,uint256)")
//!   → 0xa9059cbb2ab09eb219583f4a59a5d0623ade346d962bcd4e46b11da047c9049b
//!
//! For methods the first 4 bytes (`0xa9059cbb`) are the call-dispatch
//! selector. For events the full 32 bytes are the log topic.

use crate::error::SignatureError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tiny_keccak::{Hasher, Keccak};

/// Keccak-256 (the pre-NIST variant Ethereum uses, not SHA3-256) of `bytes`.
pub fn keccak256(bytes: &[u8]) -> SelectorHash {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(bytes);
    hasher.finalize(&mut output);
    SelectorHash(output)
}

/// The 32-byte Keccak-256 digest of a canonical signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectorHash(pub [u8; 32]);

impl SelectorHash {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// `0x` followed by 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// The first 4 bytes of the digest.
    pub fn selector(&self) -> Selector {
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.0[..4]);
        Selector(out)
    }
}

impl fmt::Display for SelectorHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for SelectorHash {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed::<32>(s).map(Self)
    }
}

impl Serialize for SelectorHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A 4-byte function selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(pub [u8; 4]);

impl Selector {
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// `0x` followed by 8 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Selector {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed::<4>(s).map(Self)
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Decode exactly `N` bytes from hex, with or without a `0x` prefix.
fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], SignatureError> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let invalid = |reason: String| SignatureError::InvalidHex {
        input: s.to_string(),
        reason,
    };
    if digits.len() != N * 2 {
        return Err(invalid(format!(
            "expected {} hex digits, got {}",
            N * 2,
            digits.len()
        )));
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out).map_err(|e| invalid(e.to_string()))?;
    Ok(out)
}
