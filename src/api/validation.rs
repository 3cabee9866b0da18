use chrono::NaiveDate;

use super::ApiError;

pub fn validate_id(id: i32, what: &str) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {what} ID: {id}. ID must be a positive integer"
        )));
    }
    Ok(id)
}

/// Dates arrive from form fields as YYYY-MM-DD.
pub fn validate_date<'a>(value: &'a str, what: &str) -> Result<&'a str, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::validation(format!("Invalid {what}: expected YYYY-MM-DD")))?;
    Ok(value)
}

pub fn validate_fine_amount(amount: f64) -> Result<f64, ApiError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ApiError::validation(
            "Fine amount must be a non-negative number",
        ));
    }
    Ok(amount)
}

pub fn validate_required<'a>(value: &'a str, what: &str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{what} is required")));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id(1, "report").is_ok());
        assert!(validate_id(0, "report").is_err());
        assert!(validate_id(-5, "report").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2026-08-06", "deadline").is_ok());
        assert!(validate_date("08/06/2026", "deadline").is_err());
        assert!(validate_date("2026-13-40", "deadline").is_err());
        assert!(validate_date("", "deadline").is_err());
    }

    #[test]
    fn test_validate_fine_amount() {
        assert!(validate_fine_amount(0.0).is_ok());
        assert!(validate_fine_amount(2500.50).is_ok());
        assert!(validate_fine_amount(-1.0).is_err());
        assert!(validate_fine_amount(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("  reason  ", "Reason").unwrap(), "reason");
        assert!(validate_required("   ", "Reason").is_err());
    }
}
