use thiserror::Error;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Symbols accepted in place of a digit
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

/// Reasons a password fails the format rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password must be at least 6 characters long")]
    TooShort,
    #[error("Password must contain at least one uppercase letter")]
    NoUppercase,
    #[error("Password must contain at least one number or symbol (!@#$%^&*)")]
    NoDigitOrSymbol,
}

/// Function to validate password format
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::NoUppercase);
    }
    if !password
        .chars()
        .any(|c| c.is_ascii_digit() || PASSWORD_SYMBOLS.contains(c))
    {
        return Err(PasswordError::NoDigitOrSymbol);
    }
    Ok(())
}

pub fn is_valid_password(password: &str) -> bool {
    validate_password(password).is_ok()
}
