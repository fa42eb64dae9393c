//! Task text validation for the add form

use crate::error::ValidationError;

/// Trim `raw` and check it has at least `min_chars` characters.
pub fn validate_task_text(raw: &str, min_chars: usize) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if trimmed.chars().count() < min_chars {
        return Err(ValidationError::TooShort { min: min_chars });
    }
    Ok(trimmed.to_string())
}

/// Message for the inline error under the input. Pristine (empty) input shows none.
pub fn inline_error(value: &str, min_chars: usize) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    validate_task_text(value, min_chars).err().map(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", ValidationError::Empty)]
    #[case("   \t ", ValidationError::Empty)]
    #[case("a", ValidationError::TooShort { min: 2 })]
    #[case("  a  ", ValidationError::TooShort { min: 2 })]
    #[case("é", ValidationError::TooShort { min: 2 })]
    fn test_rejects(#[case] raw: &str, #[case] expected: ValidationError) {
        assert_eq!(validate_task_text(raw, 2), Err(expected));
    }

    #[rstest]
    #[case("ab", "ab")]
    #[case("  Buy milk \n", "Buy milk")]
    #[case("日本", "日本")]
    fn test_accepts_trimmed(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(validate_task_text(raw, 2).as_deref(), Ok(expected));
    }

    #[rstest]
    #[case("", None)]
    #[case("   ", Some("Please enter a task."))]
    #[case("a", Some("Please enter at least 2 characters."))]
    #[case(" a ", Some("Please enter at least 2 characters."))]
    #[case("ok", None)]
    fn test_inline_error(#[case] value: &str, #[case] expected: Option<&str>) {
        assert_eq!(inline_error(value, 2).as_deref(), expected);
    }

    #[test]
    fn test_message_mentions_minimum() {
        let err = validate_task_text("x", 2).unwrap_err();
        assert_eq!(err.to_string(), "Please enter at least 2 characters.");
    }
}
