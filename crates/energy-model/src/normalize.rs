//! Vendor string normalization.
//!
//! Upstream feeds spell the same dimension value many ways ("resi.",
//! "Small_Comm.", "k.w.h"). Every parser reduces its input to a *token*
//! before looking it up:
//!
//! 1. trim surrounding whitespace;
//! 2. if anything other than an ASCII letter remains, drop every character
//!    that is not an ASCII letter or a hyphen;
//! 3. upper-case the result (ASCII only, no locale rules).
//!
//! Steps 1-2 are [`scrub`]; step 3 is applied by [`token`].

/// Trims `input` and strips punctuation, digits and whitespace from it.
///
/// Hyphens survive stripping, case is left untouched. A string made only of
/// ASCII letters is returned trimmed but otherwise as-is.
///
/// ```
/// use energy_model::normalize::scrub;
///
/// assert_eq!(scrub("  resi. "), "resi");
/// assert_eq!(scrub("Small_Comm."), "SmallComm");
/// assert_eq!(scrub("Kilowatt-hour"), "Kilowatt-hour");
/// assert_eq!(scrub("12345"), "");
/// ```
pub fn scrub(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return trimmed.to_string();
    }
    trimmed
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic() || *ch == '-')
        .collect()
}

/// [`scrub`] for possibly absent input; `None` yields an empty string.
pub fn scrub_optional(input: Option<&str>) -> String {
    input.map(scrub).unwrap_or_default()
}

/// Lookup key for `input`: the scrubbed string in upper case.
pub fn token(input: &str) -> String {
    scrub(input).to_ascii_uppercase()
}

/// Returns true when `value` is already a valid lookup key.
///
/// Alias tables are checked against this when they are built.
pub(crate) fn is_token(value: &str) -> bool {
    !value.is_empty() && token(value) == value
}
