//! Argument canonicalization.
//!
//! Reduces every top-level argument of a normalized declaration to its bare
//! type token. The scan is a single pass over the argument list tracking
//! parenthesis depth, bracket depth and whether the current argument has
//! already met its first top-level space:
//!
//! - a comma at depth zero ends the current argument;
//! - a space at depth zero ends the type token, everything after it up to the
//!   next top-level comma (argument name, `memory`, `calldata`, ...) is dropped;
//! - anything at nonzero depth is kept verbatim, so nested tuple and array
//!   types survive intact.
//!
//! Names of members inside a nested tuple are at nonzero depth and are kept:
//! `((uint256 a,address b) p)` canonicalizes to `(uint256a,addressb)`.

use crate::error::SignatureError;
use crate::strip::NormalizedInterface;

/// Split a normalized declaration into its name and comma-joined type list.
///
/// `"balanceOf(address indexed account)"` → `("balanceOf", "address")`.
pub fn canonicalize_args(
    normalized: &NormalizedInterface,
) -> Result<(String, String), SignatureError> {
    let text = remove_indexed(normalized.as_str());
    let Some(body) = text.strip_suffix(')') else {
        return Err(SignatureError::invalid_format(
            normalized.as_str(),
            "does not end with ')'",
        ));
    };
    let Some(open) = body.find('(') else {
        return Err(SignatureError::invalid_format(
            normalized.as_str(),
            "missing '('",
        ));
    };

    let name = body[..open].trim().to_string();
    let args = body[open + 1..].trim();
    if args.is_empty() {
        return Ok((name, String::new()));
    }

    let type_list = type_tokens(args)?
        .join(",")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    Ok((name, type_list))
}

/// Replace every `<space>indexed<space>` with a single space.
fn remove_indexed(s: &str) -> String {
    let mut out = s.to_string();
    while out.contains(" indexed ") {
        out = out.replace(" indexed ", " ");
    }
    out
}

/// One type token per top-level argument, in declaration order.
fn type_tokens(args: &str) -> Result<Vec<String>, SignatureError> {
    let mut depth = Depth::default();
    let mut types = Vec::new();
    let mut kept = String::with_capacity(args.len());
    let mut met_space = false;

    for (offset, c) in args.char_indices() {
        depth.step(c, offset)?;
        let top_level = depth.is_top_level();
        match c {
            ',' if top_level => {
                end_argument(&mut types, &mut kept)?;
                met_space = false;
            }
            // Leading spaces of an argument are trimming, not the name boundary.
            ' ' if top_level => met_space |= !kept.is_empty(),
            _ if met_space => {}
            _ => kept.push(c),
        }
    }
    depth.finish(args.len())?;
    end_argument(&mut types, &mut kept)?;
    Ok(types)
}

fn end_argument(types: &mut Vec<String>, kept: &mut String) -> Result<(), SignatureError> {
    if kept.is_empty() {
        return Err(SignatureError::EmptyArgument { index: types.len() });
    }
    types.push(std::mem::take(kept));
    Ok(())
}

/// Parenthesis and bracket nesting counters.
#[derive(Debug, Default)]
pub(crate) struct Depth {
    parens: usize,
    brackets: usize,
}

impl Depth {
    pub(crate) fn step(&mut self, c: char, offset: usize) -> Result<(), SignatureError> {
        let unbalanced = |delimiter| SignatureError::UnbalancedNesting { delimiter, offset };
        match c {
            '(' => self.parens += 1,
            '[' => self.brackets += 1,
            ')' => {
                self.parens = self.parens.checked_sub(1).ok_or_else(|| unbalanced(')'))?;
            }
            ']' => {
                self.brackets = self.brackets.checked_sub(1).ok_or_else(|| unbalanced(']'))?;
            }
            _ => {}
        }
        Ok(())
    }

    fn is_top_level(&self) -> bool {
        self.parens == 0 && self.brackets == 0
    }

    /// Fails when a `(` or `[` is still open at the end of the scanned text.
    pub(crate) fn finish(&self, offset: usize) -> Result<(), SignatureError> {
        if self.parens > 0 {
            return Err(SignatureError::UnbalancedNesting { delimiter: '(', offset });
        }
        if self.brackets > 0 {
            return Err(SignatureError::UnbalancedNesting { delimiter: '[', offset });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip::strip;

    fn args_of(raw: &str) -> Result<(String, String), SignatureError> {
        canonicalize_args(&strip(raw)?)
    }

    fn types_of(raw: &str) -> String {
        args_of(raw).unwrap().1
    }

    #[test]
    fn empty_argument_list() {
        assert_eq!(args_of("totalSupply()").unwrap(), ("totalSupply".into(), String::new()));
    }

    #[test]
    fn strips_argument_names() {
        let (name, types) =
            args_of("function burnFrom(address account, uint256 amount) public virtual").unwrap();
        assert_eq!(name, "burnFrom");
        assert_eq!(types, "address,uint256");
    }

    #[test]
    fn strips_indexed_keyword() {
        assert_eq!(types_of("balanceOf(address indexed account)"), "address");
        assert_eq!(
            types_of("event Transfer(address indexed from, address indexed to, uint256 value)"),
            "address,address,uint256"
        );
    }

    #[test]
    fn trailing_modifier_without_name_is_dropped() {
        assert_eq!(types_of("Deposit(address indexed, uint256)"), "address,uint256");
    }

    #[test]
    fn strips_data_location_keywords() {
        assert_eq!(
            types_of("multicall(bytes[] calldata data, string memory note)"),
            "bytes[],string"
        );
    }

    #[test]
    fn bare_types_pass_through() {
        assert_eq!(
            types_of("_updateList(address[],address,address[])"),
            "address[],address,address[]"
        );
    }

    #[test]
    fn preserves_nested_tuple_arrays() {
        let raw = "approve(address a , address b,uint64 indexed c,(int64,(string, uint256 )[])[],(int64,(string,uint256)[])[]  d)";
        assert_eq!(
            types_of(raw),
            "address,address,uint64,(int64,(string,uint256)[])[],(int64,(string,uint256)[])[]"
        );
    }

    #[test]
    fn fixed_size_arrays_are_kept() {
        assert_eq!(types_of("f(uint256[2][] grid, bytes32[3] roots)"), "uint256[2][],bytes32[3]");
    }

    #[test]
    fn nested_member_names_are_not_stripped() {
        assert_eq!(types_of("f((uint256 a,address b) p)"), "(uint256a,addressb)");
    }

    #[test]
    fn argument_order_is_significant() {
        assert_ne!(types_of("f(address a, uint256 b)"), types_of("f(uint256 b, address a)"));
    }

    #[test]
    fn unclosed_bracket_fails() {
        let err = args_of("f(uint256[)").unwrap_err();
        assert_eq!(err, SignatureError::UnbalancedNesting { delimiter: '[', offset: 8 });
    }

    #[test]
    fn stray_closing_bracket_fails() {
        let err = args_of("f(uint256])").unwrap_err();
        assert_eq!(err, SignatureError::UnbalancedNesting { delimiter: ']', offset: 7 });
    }

    #[test]
    fn unclosed_tuple_fails() {
        let err = args_of("f((uint256,address)").unwrap_err();
        assert!(matches!(err, SignatureError::UnbalancedNesting { delimiter: '(', .. }));
    }

    #[test]
    fn empty_fragment_fails() {
        let err = args_of("f(uint256,)").unwrap_err();
        assert_eq!(err, SignatureError::EmptyArgument { index: 1 });
    }
}
