use std::collections::BTreeSet;

use super::{ExpenseRecord, ParseAmountError};

/// The in-memory, append-only list of expenses for the current session.
/// Insertion order is entry order and is kept for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records loaded from storage, keeping their order.
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    /// Parse and append a new expense.
    /// On error the ledger is left untouched.
    pub fn append(
        &mut self,
        amount: &str,
        description: impl Into<String>,
        category: &str,
    ) -> Result<&ExpenseRecord, ParseAmountError> {
        let record = ExpenseRecord::parse(amount, description, category)?;
        Ok(self.push(record))
    }

    /// Append an already-built record.
    pub fn push(&mut self, record: ExpenseRecord) -> &ExpenseRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Distinct categories currently present, sorted.
    pub fn categories(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.category.clone()).collect()
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
