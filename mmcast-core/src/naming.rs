//! Filename and matrix-name conventions
//!
//! Matrix names are derived from file names: the stem is split on
//! underscores, the first token is the base name and any remaining
//! tokens become a comma-joined parenthesized suffix. A second parser
//! rewrites an already-derived name by dropping its trailing degree
//! component.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::FormatError;

/// Derive the logical matrix name from a file name
///
/// `beta_3_4.mtx` becomes `beta(3,4)`; `beta.mtx` becomes `beta`.
pub fn name_from_filename(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    let mut tokens = stem.split('_');
    let base = tokens.next().unwrap_or(stem);
    let suffix: Vec<&str> = tokens.collect();
    if suffix.is_empty() {
        String::from(base)
    } else {
        format!("{}({})", base, suffix.join(","))
    }
}

/// Drop the trailing degree component from a derived name
///
/// `foo(2,5)` becomes `foo(2)`; `foo(7)` becomes `foo`. Fails when the
/// name carries no parenthesized numeric suffix.
pub fn strip_degree(name: &str) -> Result<String, FormatError> {
    let (base, first, second) = split_suffix(name).ok_or(FormatError::MalformedName)?;
    match second {
        Some(degree) if !degree.is_empty() => Ok(format!("{base}({first})")),
        _ => Ok(String::from(base)),
    }
}

/// Check whether a derived name carries `degree` as its last numeric group
///
/// `beta(1,6)` and `beta(6)` match degree 6; `beta(16)` does not.
pub fn matches_degree(name: &str, degree: u32) -> bool {
    match split_suffix(name) {
        Some((_, first, second)) => second.unwrap_or(first).parse() == Ok(degree),
        None => false,
    }
}

/// Split `base(a)` / `base(a,b)` into its base and numeric groups
///
/// The groups may be empty but must be all digits, and the suffix must
/// close the name.
fn split_suffix(name: &str) -> Option<(&str, &str, Option<&str>)> {
    let open = name.rfind('(')?;
    let inner = name[open + 1..].strip_suffix(')')?;
    let (first, second) = match inner.split_once(',') {
        Some((a, b)) => (a, Some(b)),
        None => (inner, None),
    };
    if !is_digits(first) || !second.map_or(true, is_digits) {
        return None;
    }
    Some((&name[..open], first, second))
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
