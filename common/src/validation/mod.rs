//! Input checks shared by the server (before storage) and the client (before sending).

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Deadlines are kept as `YYYY-MM-DD` text; only four-digit, non-negative years
/// keep that text in date order.
pub const DEADLINE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("text is required")]
    MissingText,
    #[error("text must not be blank")]
    BlankText,
    #[error("deadline year {0} is outside 0000-9999")]
    DeadlineOutOfRange(i32),
}

/// Accepts any text that is non-blank once trimmed.
///
/// The text is returned as given: trimming only decides acceptance, so a stored
/// record keeps exactly what the user typed.
pub fn validate_text(text: Option<&str>) -> Result<&str, ValidationError> {
    let text = text.ok_or(ValidationError::MissingText)?;
    if text.trim().is_empty() {
        return Err(ValidationError::BlankText);
    }
    Ok(text)
}

/// Accepts no deadline, or a deadline whose year has four digits.
pub fn validate_deadline(deadline: Option<NaiveDate>) -> Result<Option<NaiveDate>, ValidationError> {
    match deadline {
        Some(date) if !DEADLINE_YEARS.contains(&date.year()) => {
            Err(ValidationError::DeadlineOutOfRange(date.year()))
        }
        _ => Ok(deadline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadlines_need_a_four_digit_year() {
        assert_eq!(validate_deadline(None), Ok(None));

        let in_range = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert_eq!(validate_deadline(in_range), Ok(in_range));
        assert!(validate_deadline(NaiveDate::from_ymd_opt(9999, 12, 31)).is_ok());
        assert!(validate_deadline(NaiveDate::from_ymd_opt(0, 1, 1)).is_ok());

        assert_eq!(
            validate_deadline(NaiveDate::from_ymd_opt(10000, 1, 1)),
            Err(ValidationError::DeadlineOutOfRange(10000))
        );
        assert_eq!(
            validate_deadline(NaiveDate::from_ymd_opt(-5, 1, 1)),
            Err(ValidationError::DeadlineOutOfRange(-5))
        );
    }

    #[test]
    fn rejects_missing_and_blank_text() {
        assert_eq!(validate_text(None), Err(ValidationError::MissingText));
        assert_eq!(validate_text(Some("")), Err(ValidationError::BlankText));
        assert_eq!(validate_text(Some("  \t\n")), Err(ValidationError::BlankText));
    }

    #[test]
    fn accepted_text_is_not_trimmed() {
        assert_eq!(validate_text(Some(" Buy milk ")), Ok(" Buy milk "));
    }
}
