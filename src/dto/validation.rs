//! Custom field validators shared across inbound DTOs.

use validator::ValidationError;

/// Score adjustments move one goal at a time.
pub fn validate_score_delta(delta: i32) -> Result<(), ValidationError> {
    if matches!(delta, 1 | -1) {
        Ok(())
    } else {
        let mut error = ValidationError::new("score_delta");
        error.message = Some("delta must be 1 or -1".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unit_steps_are_accepted() {
        assert!(validate_score_delta(1).is_ok());
        assert!(validate_score_delta(-1).is_ok());
        assert!(validate_score_delta(0).is_err());
        assert!(validate_score_delta(3).is_err());
    }
}
