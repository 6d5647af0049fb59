//! Input validation for finentry
//!
//! This module provides centralized validation for all user inputs. Validators
//! return `Result<T, String>` with a user-facing message on failure; advisory
//! checks return `Option<String>` and never block saving.

use crate::config::AppConfig;

/// Validates an entry description.
///
/// Validity is judged on the trimmed value; callers that display a character
/// counter should count the untrimmed input.
///
/// # Errors
///
/// Returns `Err` if:
/// - The trimmed value is empty
/// - The trimmed value is shorter than 3 characters
/// - The trimmed value is longer than 255 characters
///
/// # Examples
///
/// ```
/// use finentry::validators::validate_description;
///
/// assert_eq!(validate_description("  Groceries  ").unwrap(), "Groceries");
/// assert!(validate_description("ab").is_err());
/// ```
pub fn validate_description(input: &str) -> Result<String, String> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err("Description is required".to_string());
    }

    let len = trimmed.chars().count();
    if len < 3 {
        return Err("Minimum 3 characters".to_string());
    }
    if len > 255 {
        return Err("Maximum 255 characters".to_string());
    }

    Ok(trimmed.to_string())
}

/// Parses an amount string as a decimal number.
///
/// Accepts a comma as decimal separator (pt-BR keyboards). Returns `None` for
/// anything that does not parse to a finite number.
pub fn parse_amount(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// Validates an entry amount against the configured bounds.
///
/// # Errors
///
/// Returns `Err` if:
/// - The value is empty
/// - The value does not parse to a finite number, or is `<= 0`
/// - The value exceeds `config.max_amount`
pub fn validate_amount(input: &str, config: &AppConfig) -> Result<f64, String> {
    if input.trim().is_empty() {
        return Err("Amount is required".to_string());
    }

    let Some(amount) = parse_amount(input) else {
        return Err("Amount must be positive".to_string());
    };

    if amount <= 0.0 {
        return Err("Amount must be positive".to_string());
    }

    if amount > config.max_amount {
        return Err(format!("Amount is too high (max {})", config.max_amount));
    }

    Ok(amount)
}

/// Checks whether a valid amount crosses the advisory threshold.
///
/// This is informational only and does not block saving.
pub fn check_high_amount(amount: f64, config: &AppConfig) -> Option<String> {
    if amount > config.high_amount_threshold {
        Some("Attention: this is a very high amount".to_string())
    } else {
        None
    }
}

/// Rewrites a parseable amount to exactly two decimal places.
///
/// Returns `None` for unparsable input, which callers leave untouched;
/// error display belongs to [`validate_amount`], not to masking.
pub fn mask_amount(input: &str) -> Option<String> {
    parse_amount(input).map(|amount| format!("{amount:.2}"))
}

/// Fixed-pattern email check: one `@`, a non-empty local part, and a domain
/// with a dot between non-empty labels. Not full RFC compliance.
pub fn validate_email(input: &str) -> bool {
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Fixed-pattern Brazilian phone check: 10 or 11 digits once formatting
/// characters are stripped (area code + 4-5 digit prefix + 4 digit line).
pub fn validate_phone(input: &str) -> bool {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    matches!(digits.len(), 10 | 11)
}
