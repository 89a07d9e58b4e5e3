//! `chainsig sig`: canonicalize a single declaration.

use anyhow::{Context, Result};
use chainsig_core::{canonicalize, InterfaceSignature};

pub fn run(interface: &str, json: bool) -> Result<()> {
    let sig = canonicalize(interface).context("could not canonicalize interface")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&sig)?);
    } else {
        for line in render(&sig) {
            println!("{line}");
        }
    }
    Ok(())
}

fn render(sig: &InterfaceSignature) -> Vec<String> {
    let mut lines = vec![
        format!("Normalized interface: {}", sig.normalized),
        format!("Used for hashing: {}", sig.signature),
    ];
    if sig.is_event() {
        lines.push(format!("Event signature: {}", sig.hash));
    } else {
        lines.push(format!("Hash: {}", sig.hash));
        lines.push(format!("Method signature: {}", sig.selector));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_output() {
        let sig = canonicalize("function transfer(address to, uint256 amount) external").unwrap();
        let lines = render(&sig);
        assert_eq!(lines[0], "Normalized interface: transfer(address to, uint256 amount)");
        assert_eq!(lines[1], "Used for hashing: transfer(address,uint256)");
        assert!(lines[2].starts_with("Hash: 0xa9059cbb"));
        assert_eq!(lines[3], "Method signature: 0xa9059cbb");
    }

    #[test]
    fn event_output() {
        let sig = canonicalize("event Transfer(address indexed from, address indexed to, uint256 value)").unwrap();
        let lines = render(&sig);
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[2],
            "Event signature: 0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }
}
