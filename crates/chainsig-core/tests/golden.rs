//! Golden fixture integration tests.
//!
//! Each entry in `fixtures/signatures.json` is a raw declaration together
//! with its expected normalized form, canonical signature, kind and hashes.

use chainsig_core::{canonicalize, InterfaceKind, SignatureError};

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// The fixtures live two levels above the crate root.
fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures");
    p.push(name);
    p
}

fn load_fixtures() -> Vec<serde_json::Value> {
    let json = std::fs::read_to_string(fixture_path("signatures.json")).expect("fixture not found");
    serde_json::from_str(&json).expect("invalid fixture JSON")
}

// ─── Fixture-driven ───────────────────────────────────────────────────────────

#[test]
fn signatures_golden() {
    let fixtures = load_fixtures();
    assert!(!fixtures.is_empty());

    for f in &fixtures {
        let name = f["name"].as_str().unwrap();
        let input = f["input"].as_str().unwrap();
        let sig = canonicalize(input).unwrap_or_else(|e| panic!("{name}: {e}"));

        if let Some(normalized) = f["normalized"].as_str() {
            assert_eq!(sig.normalized.as_str(), normalized, "{name}: normalized");
        }
        assert_eq!(
            sig.signature.as_str(),
            f["canonical"].as_str().unwrap(),
            "{name}: canonical"
        );

        let kind = match f["kind"].as_str().unwrap() {
            "event" => InterfaceKind::Event,
            _ => InterfaceKind::Method,
        };
        assert_eq!(sig.kind, kind, "{name}: kind");

        if let Some(selector) = f["selector"].as_str() {
            assert_eq!(sig.selector.to_hex(), selector, "{name}: selector");
        }
        if let Some(hash) = f["hash"].as_str() {
            assert_eq!(sig.hash.to_hex(), hash, "{name}: hash");
        }
        assert_eq!(sig.selector.to_hex(), sig.hash.to_hex()[..10], "{name}: selector prefix");
    }
}

#[test]
fn normalized_form_reproduces_result() {
    for f in load_fixtures() {
        let first = canonicalize(f["input"].as_str().unwrap()).unwrap();
        let again = canonicalize(first.normalized.as_str()).unwrap();
        assert_eq!(again.normalized, first.normalized);
        assert_eq!(again.hash, first.hash);
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

#[test]
fn modifier_and_whitespace_variants_agree() {
    let variants = [
        "transfer(address,uint256)",
        "transfer(address recipient, uint256 amount)",
        "function transfer(address recipient, uint256 amount) external returns (bool);",
        "  function transfer (\n\taddress   recipient ,\n\tuint256 amount\n) public virtual override returns (bool) {",
        "transfer(address indexed recipient, uint256 amount)",
    ];
    for v in variants {
        assert_eq!(canonicalize(v).unwrap().selector.to_hex(), "0xa9059cbb", "{v:?}");
    }
}

#[test]
fn argument_order_changes_hash() {
    let a = canonicalize("f(address x, uint256 y)").unwrap();
    let b = canonicalize("f(uint256 y, address x)").unwrap();
    assert_ne!(a.signature, b.signature);
    assert_ne!(a.hash, b.hash);
}

#[test]
fn invalid_inputs_fail_without_result() {
    for bad in ["", "   ", "transfer", "(address)", "f(uint256", "f(uint256])", "f(a,,b)"] {
        let err = canonicalize(bad).unwrap_err();
        assert!(err.is_format_error(), "{bad:?}: {err}");
    }
    assert!(matches!(
        canonicalize("f(a,,b)"),
        Err(SignatureError::EmptyArgument { index: 1 })
    ));
}

#[test]
fn unbalanced_text_after_arguments_fails() {
    for bad in ["f(a)b)", "f(uint256 x))", "function g(address a) external returns (bool"] {
        assert!(
            matches!(canonicalize(bad), Err(SignatureError::UnbalancedNesting { .. })),
            "{bad:?} should fail"
        );
    }
    let ok = canonicalize("function g(address a) external returns (bool ok) {").unwrap();
    assert_eq!(ok.signature.as_str(), "g(address)");
}
