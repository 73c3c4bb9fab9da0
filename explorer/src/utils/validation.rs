/// Validation utilities for user input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate that an amount string is a plain decimal: digits with at most one
/// dot, equivalent to `^[0-9]*\.?[0-9]*$`. Empty input is valid and means
/// "no amount". Signs, exponents and grouping separators are rejected.
pub fn validate_decimal_input(value: &str) -> ValidationResult {
    let mut seen_dot = false;
    for c in value.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            '.' => return ValidationResult::err("Amount may contain only one decimal point"),
            _ => return ValidationResult::err("Amount may contain only digits and a decimal point"),
        }
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_input_accepts_plain_decimals() {
        assert!(validate_decimal_input("").is_valid);
        assert!(validate_decimal_input("0").is_valid);
        assert!(validate_decimal_input("10").is_valid);
        assert!(validate_decimal_input("10.5").is_valid);
        assert!(validate_decimal_input(".5").is_valid);
        assert!(validate_decimal_input("5.").is_valid);
    }

    #[test]
    fn test_decimal_input_rejects_everything_else() {
        assert!(!validate_decimal_input("1.2.3").is_valid);
        assert!(!validate_decimal_input("-1").is_valid);
        assert!(!validate_decimal_input("+1").is_valid);
        assert!(!validate_decimal_input("1e5").is_valid);
        assert!(!validate_decimal_input("1,000").is_valid);
        assert!(!validate_decimal_input("ten").is_valid);
        assert!(!validate_decimal_input(" 1").is_valid);
    }
}
