use thiserror::Error;

/// Amounts are plain decimal values with no currency attached.
/// Stored as `f64` so the data file keeps the JSON number it was given (e.g. `12.5`).
pub type Amount = f64;

/// Format an amount as a two-decimal string.
/// Example: 12.5 -> "12.50", 40.0 -> "40.00"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Parse user input into an amount.
/// Surrounding whitespace is ignored. The value must be finite and greater than zero.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Amount = input
        .parse()
        .map_err(|_| ParseAmountError::NotANumber(input.to_string()))?;

    check_amount(amount)
}

/// Check that an amount is finite and greater than zero.
pub fn check_amount(amount: Amount) -> Result<Amount, ParseAmountError> {
    if !amount.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }
    if amount <= 0.0 {
        return Err(ParseAmountError::NotPositive(amount));
    }

    Ok(amount)
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("amount must be a finite number")]
    NotFinite,

    #[error("amount must be greater than zero, got {0}")]
    NotPositive(Amount),
}
