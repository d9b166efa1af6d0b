//! Form-entry validation for host configuration UIs

use crate::error::{Error, Result};

/// Check that a form-entry string is a positive integer, returning the
/// parsed value.
///
/// Hosts call this while the user edits the multiple field; runtime
/// evaluation receives already-typed values and never goes through here.
pub fn check_positive_integer(value: &str) -> Result<u64> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::Validation("a value is required".to_string()));
    }
    let number: i64 = value
        .parse()
        .map_err(|_| Error::Validation(format!("'{value}' is not an integer")))?;
    if number <= 0 {
        return Err(Error::Validation(format!(
            "'{value}' is not a positive integer"
        )));
    }
    Ok(number as u64)
}
