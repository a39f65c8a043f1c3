use crate::domain::model::NameComponents;
use crate::utils::error::{ForgeError, Result};

/// Keeps ASCII letters only, lowercased. Digits, punctuation and any
/// non-ASCII characters are removed.
fn clean_name_part(part: &str) -> String {
    part.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Splits a full name into first, middle and last components.
///
/// Tokens that clean down to nothing (`"42"`, `"-"`) are dropped before the
/// first/last assignment, so `"John 42 Smith"` parses as `john` / `smith`.
/// Tokens with some letters keep them: `"3rd"` becomes the middle name `rd`.
pub fn parse_full_name(full_name: &str) -> Result<NameComponents> {
    let raw_parts: Vec<&str> = full_name.split_whitespace().collect();
    if raw_parts.is_empty() {
        return Err(ForgeError::empty_input("input is blank"));
    }

    let mut cleaned: Vec<String> = raw_parts
        .into_iter()
        .map(clean_name_part)
        .filter(|part| !part.is_empty())
        .collect();

    if cleaned.is_empty() {
        return Err(ForgeError::empty_input("no alphabetic characters after cleaning"));
    }

    let first = cleaned.remove(0);
    let last = cleaned.pop().unwrap_or_default();

    tracing::debug!(
        "Parsed '{}' into first={}, middles={:?}, last={}",
        full_name,
        first,
        cleaned,
        last
    );

    Ok(NameComponents {
        first,
        middles: cleaned,
        last,
    })
}
