use serde::{Deserialize, Serialize};

use super::{Amount, ParseAmountError, check_amount, parse_amount};

/// A single logged expense.
/// Records are immutable once created; the ledger only ever appends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Money spent (always positive, no currency)
    pub amount: Amount,
    /// Free-text note, may be empty
    pub description: String,
    /// Grouping label, stored lower-cased
    pub category: String,
}

impl ExpenseRecord {
    /// Create a record from an already-validated amount.
    /// The category is lower-cased; nothing else is normalized.
    pub fn new(amount: Amount, description: impl Into<String>, category: &str) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.to_lowercase(),
        }
    }

    /// Build a record from raw user input.
    pub fn parse(
        amount: &str,
        description: impl Into<String>,
        category: &str,
    ) -> Result<Self, ParseAmountError> {
        let amount = parse_amount(amount)?;
        Ok(Self::new(amount, description, category))
    }

    /// Re-apply the creation rules to a record read from elsewhere:
    /// the amount must be valid and the category is lower-cased.
    pub fn normalized(self) -> Result<Self, ParseAmountError> {
        let amount = check_amount(self.amount)?;
        Ok(Self::new(amount, self.description, &self.category))
    }
}
