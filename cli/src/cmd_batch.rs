//! `chainsig batch`: canonicalize a declarations file in parallel.

use anyhow::Result;
use chainsig_core::{canonicalize_parallel, parse_declarations, InterfaceSignature, SignatureError};

pub fn run(file: &str, json: bool) -> Result<()> {
    let content = crate::read_input(file)?;
    let declarations = parse_declarations(&content);
    let (sigs, errors) = canonicalize_parallel(&declarations);

    if json {
        let records: Vec<_> = sigs.iter().map(|(_, s)| s).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for line in render(&sigs) {
            println!("{line}");
        }
    }

    for line in render_failures(&declarations, &errors) {
        eprintln!("{line}");
    }

    if !errors.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

/// One `selector  kind  signature` row per record, in input order.
fn render(sigs: &[(usize, InterfaceSignature)]) -> Vec<String> {
    sigs.iter()
        .map(|(_, sig)| format!("{}  {:<6}  {}", sig.selector, sig.kind, sig.signature))
        .collect()
}

/// Empty when nothing failed, otherwise one line per failure plus a summary.
fn render_failures(declarations: &[&str], errors: &[(usize, SignatureError)]) -> Vec<String> {
    if errors.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<String> = errors
        .iter()
        .map(|(idx, err)| format!("✗ {}: {err}", declarations[*idx]))
        .collect();
    lines.push(format!(
        "{} of {} declarations failed",
        errors.len(),
        declarations.len()
    ));
    lines
}
