//! Caller-side input checks. The summarizer itself accepts any string.

use precis_core::{Error, Result};

/// Reject documents whose trimmed length is below `min_chars` characters.
pub fn validate_document(text: &str, min_chars: usize) -> Result<()> {
    let actual = text.trim().chars().count();
    if actual < min_chars {
        return Err(Error::InputTooShort { min: min_chars, actual });
    }
    Ok(())
}
