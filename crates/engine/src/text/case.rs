//! Case folding and restoration.

use stemma_core::CaseMode;

/// Give `stemmed` the casing pattern of `original`.
///
/// - all-uppercase original: uppercase stem (`RUNNING`, `run` -> `RUN`)
/// - all-lowercase original: lowercase stem
/// - mixed: copy case position by position; positions past the end of
///   `original` stay lowercase (`HaPpY`, `happi` -> `HaPpI`)
///
/// An empty `original` yields the lowercase stem.
pub fn apply_case_pattern(original: &str, stemmed: &str) -> String {
    if stemmed.is_empty() {
        return String::new();
    }
    if original.is_empty() {
        return stemmed.to_lowercase();
    }

    let has_upper = original.chars().any(char::is_uppercase);
    let has_lower = original.chars().any(char::is_lowercase);
    match (has_upper, has_lower) {
        (true, false) => return stemmed.to_uppercase(),
        (false, _) => return stemmed.to_lowercase(),
        (true, true) => {}
    }

    let mut pattern = original.chars();
    let mut out = String::with_capacity(stemmed.len());
    for c in stemmed.chars() {
        match pattern.next() {
            Some(p) if p.is_uppercase() => out.extend(c.to_uppercase()),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Apply `mode` to a stem computed from the lowercase form of `original`.
pub fn apply_case_mode(mode: CaseMode, original: &str, stemmed: String) -> String {
    match mode {
        CaseMode::Lower => stemmed,
        CaseMode::Preserve => apply_case_pattern(original, &stemmed),
    }
}
