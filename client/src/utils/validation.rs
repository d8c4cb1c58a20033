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

/// Compute `current + delta`, rejecting results that would take the
/// balance negative. Advisory only: the backend stays authoritative, and
/// a non-negative result here does not guarantee the write lands.
pub fn apply_delta(current: f64, delta: f64) -> Option<f64> {
    let next = current + delta;
    if next.is_finite() && next >= 0.0 {
        Some(next)
    } else {
        None
    }
}

/// Validate a ticker symbol before querying or trading it.
pub fn validate_ticker(ticker: &str) -> ValidationResult {
    if ticker.is_empty() {
        return ValidationResult::err("Ticker is required");
    }

    if ticker.len() > 6 {
        return ValidationResult::err("Ticker must be at most 6 characters");
    }

    if !ticker
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return ValidationResult::err("Ticker can only contain letters, numbers, . and -");
    }

    ValidationResult::ok()
}

/// Validate a share count for a buy or sell order.
pub fn validate_quantity(quantity: i64) -> ValidationResult {
    if quantity <= 0 {
        return ValidationResult::err("Quantity must be a positive number");
    }

    ValidationResult::ok()
}

/// Validate a deposit or withdrawal amount.
pub fn validate_amount(amount: f64) -> ValidationResult {
    if !amount.is_finite() || amount <= 0.0 {
        return ValidationResult::err("Amount must be greater than zero");
    }

    ValidationResult::ok()
}

/// Validate a username for registration.
pub fn validate_username(username: &str) -> ValidationResult {
    if username.is_empty() {
        return ValidationResult::err("Username is required");
    }

    if username.len() < 3 || username.len() > 30 {
        return ValidationResult::err("Username must be between 3 and 30 characters");
    }

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return ValidationResult::err("Username can only contain letters, numbers, _ and -");
    }

    ValidationResult::ok()
}

/// Validate an email address for registration.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return ValidationResult::err("Invalid email format");
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return ValidationResult::err("Invalid email format");
    }

    ValidationResult::ok()
}

/// Validate a password for registration.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.len() < 8 {
        return ValidationResult::err("Password must be at least 8 characters");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_delta_boundaries() {
        assert_eq!(apply_delta(100.0, -100.0), Some(0.0));
        assert_eq!(apply_delta(100.0, -100.01), None);
        assert_eq!(apply_delta(100.0, 50.0), Some(150.0));
        assert_eq!(apply_delta(0.0, 0.0), Some(0.0));
        assert_eq!(apply_delta(100.0, f64::NAN), None);
    }

    #[test]
    fn test_ticker_validation() {
        assert!(validate_ticker("AAPL").is_valid);
        assert!(validate_ticker("BRK.B").is_valid);
        assert!(!validate_ticker("").is_valid);
        assert!(!validate_ticker("TOOLONGG").is_valid);
        assert!(!validate_ticker("AA PL").is_valid);
    }

    #[test]
    fn test_quantity_validation() {
        assert!(validate_quantity(1).is_valid);
        assert!(!validate_quantity(0).is_valid);
        assert!(!validate_quantity(-3).is_valid);
    }

    #[test]
    fn test_amount_validation() {
        assert!(validate_amount(0.01).is_valid);
        assert!(!validate_amount(0.0).is_valid);
        assert!(!validate_amount(-5.0).is_valid);
        assert!(!validate_amount(f64::INFINITY).is_valid);
    }

    #[test]
    fn test_username_validation() {
        assert!(validate_username("alice").is_valid);
        assert!(validate_username("user_123").is_valid);
        assert!(!validate_username("ab").is_valid);
        assert!(!validate_username("").is_valid);
        assert!(!validate_username("user@invalid").is_valid);
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@nodot").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("longenough").is_valid);
        assert!(!validate_password("short").is_valid);
        assert!(!validate_password("").is_valid);
    }
}
