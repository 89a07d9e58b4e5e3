//! `chainsig lookup`: reverse-resolve a selector or topic against a
//! declarations file.

use anyhow::{anyhow, Result};
use chainsig_core::{
    InterfaceSignature, MemorySelectorRegistry, Selector, SelectorHash, SelectorRegistry,
};

pub fn run(selector: &str, file: &str, json: bool) -> Result<()> {
    let registry = MemorySelectorRegistry::new();
    let (registered, errors) = registry.load_declarations(&crate::read_input(file)?);
    tracing::debug!(registered, failed = errors.len(), "registry loaded");

    let matches = find(&registry, selector)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else if matches.is_empty() {
        println!("No signature in {file} matches {selector}");
    } else {
        for sig in &matches {
            println!("{}  {:<6}  {}", sig.selector, sig.kind, sig.signature);
        }
    }
    // Both output modes exit 1 on a miss.
    if matches.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

/// A 32-byte hex string is looked up as a topic, anything else as a selector.
fn find(registry: &dyn SelectorRegistry, needle: &str) -> Result<Vec<InterfaceSignature>> {
    if let Ok(topic) = needle.parse::<SelectorHash>() {
        return Ok(registry.get_by_topic(&topic).into_iter().collect());
    }
    let selector: Selector = needle
        .parse()
        .map_err(|e| anyhow!("expected a 4-byte selector or 32-byte topic: {e}"))?;
    Ok(registry.get_by_selector(selector))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> MemorySelectorRegistry {
        let reg = MemorySelectorRegistry::new();
        reg.load_declarations(
            "function transfer(address to, uint256 amount) external returns (bool);\n\
             event Transfer(address indexed from, address indexed to, uint256 value);\n",
        );
        reg
    }

    #[test]
    fn finds_by_selector() {
        let found = find(&registry(), "0xa9059cbb").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].signature.as_str(), "transfer(address,uint256)");
    }

    #[test]
    fn finds_by_topic() {
        let found = find(
            &registry(),
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef",
        )
        .unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].is_event());
    }

    #[test]
    fn unknown_selector_finds_nothing() {
        assert!(find(&registry(), "0xdeadbeef").unwrap().is_empty());
    }

    #[test]
    fn rejects_garbage() {
        assert!(find(&registry(), "0x1234").is_err());
    }
}
