use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

/// Normalized spelling of the vendor's reserved-column label.
pub const PLACEHOLDER: &str = "future_use";

/// Documentation prefix that precedes the field list on the vendor pages.
const FORMAT_MARKER: &str = "format: ";

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(PLACEHOLDER).unwrap();
}

/// Convierte una lista de campos documentada por el fabricante en un header CSV.
///
/// Steps run in a fixed order: lowercase, drop `format: `, collapse `", "`,
/// then map spaces, hyphens and slashes to `_`, then number every
/// `future_use` occurrence (`future_use1`, `future_use2`, ...).
///
/// The result is NOT stable under a second pass when the input already
/// contains `future_use`: `future_use1` would become `future_use11`.
pub fn normalize(raw: &str) -> String {
    normalize_counted(raw).0
}

/// Same as [`normalize`], also returning how many placeholders were numbered.
pub fn normalize_counted(raw: &str) -> (String, usize) {
    let s = raw.to_lowercase();
    let s = s.replace(FORMAT_MARKER, "");
    let s = s.replace(", ", ",");
    let s = s.replace(' ', "_");
    let s = s.replace('-', "_");
    let s = s.replace('/', "_");

    let (s, placeholders) = disambiguate_placeholders(&s);
    debug!(placeholders, len = s.len(), "header normalized");
    (s, placeholders)
}

/// Appends a 1-based occurrence index to every `future_use` in `s`.
///
/// Matches the bare substring, so a field such as `future_user` is numbered
/// as well.
pub fn disambiguate_placeholders(s: &str) -> (String, usize) {
    // El contador vive solo durante esta llamada
    let mut count = 0usize;
    let out = PLACEHOLDER_RE
        .replace_all(s, |_: &Captures| {
            count += 1;
            format!("{}{}", PLACEHOLDER, count)
        })
        .into_owned();
    (out, count)
}
