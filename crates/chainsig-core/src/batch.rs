//! Rayon-powered batch canonicalization.
//!
//! Used for signature lists pulled from source trees or explorer dumps, where
//! thousands of declarations are canonicalized at once. Results keep the
//! input index so callers can point at the failing line.

use rayon::prelude::*;

use crate::error::SignatureError;
use crate::interface::{canonicalize, InterfaceSignature};

/// Successful records and failures, each tagged with the input index.
pub type BatchOutcome = (
    Vec<(usize, InterfaceSignature)>,
    Vec<(usize, SignatureError)>,
);

/// Canonicalize every declaration in parallel.
/// Both lists come back sorted by input index.
pub fn canonicalize_parallel<S>(inputs: &[S]) -> BatchOutcome
where
    S: AsRef<str> + Sync,
{
    let results: Vec<(usize, Result<InterfaceSignature, SignatureError>)> = inputs
        .par_iter()
        .enumerate()
        .map(|(idx, raw)| (idx, canonicalize(raw.as_ref())))
        .collect();

    let mut sigs = Vec::new();
    let mut errors = Vec::new();
    for (idx, r) in results {
        match r {
            Ok(s) => sigs.push((idx, s)),
            Err(e) => errors.push((idx, e)),
        }
    }
    tracing::debug!(
        total = inputs.len(),
        ok = sigs.len(),
        failed = errors.len(),
        "batch canonicalized"
    );
    (sigs, errors)
}

/// Chunk `inputs` into slices of at most `chunk_size` and canonicalize each
/// chunk in parallel. Indices in the result refer to the whole input.
pub fn canonicalize_chunked<S>(inputs: &[S], chunk_size: usize) -> BatchOutcome
where
    S: AsRef<str> + Sync,
{
    let chunk_size = chunk_size.max(1);
    let mut all_sigs = Vec::with_capacity(inputs.len());
    let mut all_errors = Vec::new();

    for (chunk_idx, chunk) in inputs.chunks(chunk_size).enumerate() {
        let base = chunk_idx * chunk_size;
        let (sigs, errors) = canonicalize_parallel(chunk);
        all_sigs.extend(sigs.into_iter().map(|(i, s)| (base + i, s)));
        all_errors.extend(errors.into_iter().map(|(i, e)| (base + i, e)));
    }

    (all_sigs, all_errors)
}

/// Split a declarations listing into one entry per line.
///
/// Blank lines and comment lines (`#` or `//`) are skipped. Returned entries
/// are trimmed.
pub fn parse_declarations(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("//"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
# ERC-20
function transfer(address to, uint256 amount) external returns (bool);
function balanceOf(address owner) external view returns (uint256);

// events
event Transfer(address indexed from, address indexed to, uint256 value);
broken(
";

    #[test]
    fn parse_declarations_skips_comments_and_blanks() {
        let decls = parse_declarations(LISTING);
        assert_eq!(decls.len(), 4);
        assert!(decls[0].starts_with("function transfer"));
        assert_eq!(decls[3], "broken(");
    }

    #[test]
    fn parallel_keeps_input_order() {
        let decls = parse_declarations(LISTING);
        let (sigs, errors) = canonicalize_parallel(&decls);
        assert_eq!(sigs.len(), 3);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, 3);
        let names: Vec<&str> = sigs.iter().map(|(_, s)| s.name()).collect();
        assert_eq!(names, ["transfer", "balanceOf", "Transfer"]);
    }

    #[test]
    fn chunked_indices_are_global() {
        let inputs: Vec<String> = (0..10)
            .map(|i| if i == 7 { "bad".to_string() } else { format!("f{i}(uint256 x)") })
            .collect();
        let (sigs, errors) = canonicalize_chunked(&inputs, 3);
        assert_eq!(sigs.len(), 9);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, 7);
        assert_eq!(sigs[8].0, 9);
        assert_eq!(sigs[8].1.signature.as_str(), "f9(uint256)");
    }

    #[test]
    fn zero_chunk_size_is_treated_as_one() {
        let (sigs, errors) = canonicalize_chunked(&["a()", "b()"], 0);
        assert_eq!(sigs.len(), 2);
        assert!(errors.is_empty());
    }
}
