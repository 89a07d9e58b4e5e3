//! # chainsig-core
//!
//! Canonicalizes EVM method and event declarations and computes their
//! Keccak-256 hash and 4-byte selector.
//!
//! ## Pipeline
//! - [`strip`]: drop `function`/`event`, modifiers, return clauses, trailing
//!   `;`/`{` and surplus whitespace
//! - [`args`]: reduce each top-level argument to its type token, keeping
//!   nested tuples and arrays intact
//! - [`signature`]: assemble `name(type,...)` and classify method vs. event
//! - [`hash`]: keccak256 of the canonical signature, selector = first 4 bytes
//!
//! ```
//! use chainsig_core::{canonicalize, InterfaceKind};
//!
//! let sig = canonicalize("event Transfer(address indexed from, address indexed to, uint256 value);").unwrap();
//! assert_eq!(sig.signature.as_str(), "Transfer(address,address,uint256)");
//! assert_eq!(sig.kind, InterfaceKind::Event);
//! ```

pub mod args;
pub mod batch;
pub mod error;
pub mod hash;
pub mod interface;
pub mod registry;
pub mod signature;
pub mod strip;

pub use batch::{canonicalize_chunked, canonicalize_parallel, parse_declarations};
pub use error::SignatureError;
pub use hash::{keccak256, Selector, SelectorHash};
pub use interface::{canonicalize, InterfaceSignature};
pub use registry::{MemorySelectorRegistry, SelectorRegistry};
pub use signature::{CanonicalSignature, InterfaceKind};
pub use strip::NormalizedInterface;
