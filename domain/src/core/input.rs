//! Normalisation of free-text user input.
//!
//! Keeps the validation rules out of the prompt loop so they can be tested
//! without a terminal.

/// Placeholder used when no organisation name is supplied.
pub const DEFAULT_ORGANISATION: &str = "Your Organisation";

/// Parse a yes/no answer.
///
/// Accepts `y`/`yes` and `n`/`no` case-insensitively, surrounding whitespace
/// ignored. Anything else is `None` and callers are expected to re-prompt.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Normalise an organisation name, falling back to [`DEFAULT_ORGANISATION`]
/// when the input is empty after trimming.
pub fn organisation_or_default(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_ORGANISATION.to_string()
    } else {
        trimmed.to_string()
    }
}
