//! Boilerplate stripping.
//!
//! Turns a raw declaration as it appears in Solidity source, on a block
//! explorer, or typed by hand into the compact `name(args)` shape consumed by
//! the argument canonicalizer:
//!
//! ```text
//! "  function burnFrom(address account, uint256 amount) public virtual {"
//!   → "burnFrom(address account, uint256 amount)"
//! ```

use crate::args::Depth;
use crate::error::SignatureError;
use serde::Serialize;
use std::fmt;

/// Spacing rules applied around structural characters until none matches.
const TIGHTEN: [(&str, &str); 8] = [
    ("( ", "("),
    (" )", ")"),
    (" ,", ","),
    (") ,", "),"),
    (") )", "))"),
    ("[ ", "["),
    (" ]", "]"),
    (" [", "["),
];

/// A declaration after boilerplate stripping.
///
/// Always ends with `)`, carries no leading/trailing whitespace, no newline or
/// tab, no doubled spaces and no leading `function `/`event ` keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedInterface(String);

impl NormalizedInterface {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The declaration name: everything before the first `(`.
    pub fn name(&self) -> &str {
        match self.0.find('(') {
            Some(open) => &self.0[..open],
            None => &self.0,
        }
    }

}

impl fmt::Display for NormalizedInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedInterface {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strip source boilerplate from a raw declaration.
///
/// Fails with [`SignatureError::InvalidFormat`] when the remaining text is not
/// of the shape `identifier(...)`.
pub fn strip(raw: &str) -> Result<NormalizedInterface, SignatureError> {
    let mut s = cut_after_argument_list(raw)?.trim();
    if let Some(rest) = s.strip_suffix(';') {
        s = rest.trim();
    }
    if let Some(rest) = s.strip_suffix('{') {
        s = rest.trim();
    }

    let collapsed = tighten_delimiters(collapse_whitespace(s));
    let s = collapsed.strip_prefix("function ").unwrap_or(collapsed.as_str());
    let s = s.strip_prefix("event ").unwrap_or(s).trim();

    let normalized = attach_name(s);
    validate(raw, &normalized)?;
    Ok(NormalizedInterface(normalized))
}

/// Keep the text up to and including the `)` that closes the argument list.
///
/// The dropped suffix (modifiers, `returns (...)`, a body opener) must itself
/// be balanced: `f(a)b)` fails instead of hashing `f(a)`. Falls back to the
/// last `)` when the first `(` is never closed, and to the whole input when
/// there is no `)` at all.
fn cut_after_argument_list(raw: &str) -> Result<&str, SignatureError> {
    if let Some(end) = matching_close(raw) {
        check_balanced(raw, end + 1)?;
        return Ok(&raw[..=end]);
    }
    Ok(match raw.rfind(')') {
        Some(end) => &raw[..=end],
        None => raw,
    })
}

/// Run the nesting counters over `raw[start..]`; offsets refer to `raw`.
fn check_balanced(raw: &str, start: usize) -> Result<(), SignatureError> {
    let mut depth = Depth::default();
    for (i, c) in raw[start..].char_indices() {
        depth.step(c, start + i)?;
    }
    depth.finish(raw.len())
}

fn matching_close(s: &str) -> Option<usize> {
    let open = s.find('(')?;
    let mut depth = 0usize;
    for (i, c) in s[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = s.replace(|c: char| matches!(c, '\n' | '\r' | '\t'), " ");
    loop {
        let next = out.replace("  ", " ");
        if next == out {
            return next;
        }
        out = next;
    }
}

fn tighten_delimiters(mut s: String) -> String {
    loop {
        let next = TIGHTEN
            .iter()
            .fold(s.clone(), |acc, &(from, to)| acc.replace(from, to));
        if next == s {
            return next;
        }
        s = next;
    }
}

/// `"balanceOf (address)"` → `"balanceOf(address)"`.
fn attach_name(s: &str) -> String {
    match s.find('(') {
        Some(open) => format!("{}{}", s[..open].trim_end(), &s[open..]),
        None => s.to_string(),
    }
}

fn validate(raw: &str, s: &str) -> Result<(), SignatureError> {
    if !s.ends_with(')') {
        return Err(SignatureError::invalid_format(raw, "does not end with ')'"));
    }
    let Some(open) = s.find('(') else {
        return Err(SignatureError::invalid_format(raw, "missing '('"));
    };
    let name = &s[..open];
    if name.is_empty() {
        return Err(SignatureError::invalid_format(raw, "missing identifier"));
    }
    if !is_identifier(name) {
        return Err(SignatureError::invalid_format(
            raw,
            format!("'{name}' is not an identifier"),
        ));
    }
    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let ident_char = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$';
    (first.is_ascii_alphabetic() || first == '_' || first == '$') && chars.all(ident_char)
}
