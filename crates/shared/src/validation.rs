//! Common validation utilities.

use validator::ValidationError;

/// Maximum length of a stored text column (captions, titles, bulletpoints).
pub const MAX_TEXT_LENGTH: usize = 80;

/// Validates that a text value can be stored; PostgreSQL text columns
/// reject NUL characters.
pub fn validate_text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut err = ValidationError::new("text_nul");
        err.message = Some("Text must not contain NUL characters".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that every bulletpoint fits in a text column.
///
/// Empty entries are allowed here; they are dropped before persisting.
pub fn validate_bulletpoints(points: &[String]) -> Result<(), ValidationError> {
    for point in points {
        validate_text(point)?;
    }

    if points.iter().all(|p| p.chars().count() <= MAX_TEXT_LENGTH) {
        Ok(())
    } else {
        let mut err = ValidationError::new("bulletpoint_length");
        err.message = Some(format!("Bulletpoints must be at most {} characters", MAX_TEXT_LENGTH).into());
        Err(err)
    }
}

/// Validates that a record id is positive.
pub fn validate_record_id(id: i64) -> Result<(), ValidationError> {
    if id > 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("record_id_range");
        err.message = Some("Record id must be a positive integer".into());
        Err(err)
    }
}
