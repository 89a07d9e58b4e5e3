//! Selector registry: reverse lookup from 4-byte selectors and 32-byte
//! topics to known canonical signatures.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::batch::{canonicalize_parallel, parse_declarations};
use crate::error::SignatureError;
use crate::hash::{Selector, SelectorHash};
use crate::interface::InterfaceSignature;

/// Trait for looking up canonical signatures by selector, topic or name.
pub trait SelectorRegistry: Send + Sync {
    /// All known signatures sharing a 4-byte selector.
    /// Returns more than one entry on selector collisions.
    fn get_by_selector(&self, selector: Selector) -> Vec<InterfaceSignature>;

    /// The signature hashing to a full 32-byte topic, if known.
    fn get_by_topic(&self, topic: &SelectorHash) -> Option<InterfaceSignature>;

    /// Every registered overload of a name (e.g. `"safeTransferFrom"`).
    fn get_by_name(&self, name: &str) -> Vec<InterfaceSignature>;

    /// Total number of registered signatures.
    fn len(&self) -> usize;

    /// Returns `true` if the registry is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ─── In-memory registry ───────────────────────────────────────────────────────

/// A simple in-memory registry backed by `HashMap`.
pub struct MemorySelectorRegistry {
    /// full hash → signature (one per canonical signature)
    by_hash: RwLock<HashMap<SelectorHash, InterfaceSignature>>,
    /// selector → hashes sharing it
    by_selector: RwLock<HashMap<Selector, Vec<SelectorHash>>>,
    /// name → hashes of every overload
    by_name: RwLock<HashMap<String, Vec<SelectorHash>>>,
}

impl MemorySelectorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            by_hash: RwLock::new(HashMap::new()),
            by_selector: RwLock::new(HashMap::new()),
            by_name: RwLock::new(HashMap::new()),
        }
    }

    /// Register a signature. Returns `false` if it was already known.
    pub fn register(&self, sig: InterfaceSignature) -> bool {
        let hash = sig.hash;
        let mut by_hash = self.by_hash.write().unwrap_or_else(PoisonError::into_inner);
        if by_hash.contains_key(&hash) {
            return false;
        }
        self.by_selector
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(sig.selector)
            .or_default()
            .push(hash);
        self.by_name
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(sig.name().to_string())
            .or_default()
            .push(hash);
        by_hash.insert(hash, sig);
        true
    }

    /// Canonicalize and register every declaration line of `text`
    /// (see [`parse_declarations`]).
    ///
    /// Returns the number of newly registered signatures and the failing
    /// lines, each as `(index among declarations, error)`.
    pub fn load_declarations(&self, text: &str) -> (usize, Vec<(usize, SignatureError)>) {
        let declarations = parse_declarations(text);
        let (sigs, errors) = canonicalize_parallel(&declarations);
        for (idx, err) in &errors {
            tracing::warn!(line = declarations[*idx], error = %err, "skipping declaration");
        }
        let registered = sigs
            .into_iter()
            .map(|(_, sig)| self.register(sig))
            .filter(|&added| added)
            .count();
        (registered, errors)
    }

    fn resolve(&self, hashes: Option<&Vec<SelectorHash>>) -> Vec<InterfaceSignature> {
        let by_hash = self.by_hash.read().unwrap_or_else(PoisonError::into_inner);
        hashes
            .into_iter()
            .flatten()
            .filter_map(|h| by_hash.get(h).cloned())
            .collect()
    }
}

impl Default for MemorySelectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorRegistry for MemorySelectorRegistry {
    fn get_by_selector(&self, selector: Selector) -> Vec<InterfaceSignature> {
        let hashes = self
            .by_selector
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&selector)
            .cloned();
        self.resolve(hashes.as_ref())
    }

    fn get_by_topic(&self, topic: &SelectorHash) -> Option<InterfaceSignature> {
        self.by_hash
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(topic)
            .cloned()
    }

    fn get_by_name(&self, name: &str) -> Vec<InterfaceSignature> {
        let hashes = self
            .by_name
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned();
        self.resolve(hashes.as_ref())
    }

    fn len(&self) -> usize {
        self.by_hash.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
