use super::{Amount, ExpenseRecord};

/// Sum of amounts for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Amount,
    pub count: usize,
}

/// Sum of all amounts. Zero for an empty slice.
pub fn total(records: &[ExpenseRecord]) -> Amount {
    records.iter().map(|r| r.amount).sum()
}

/// Sum amounts grouped by category.
/// Categories appear in the order they were first seen; keys are compared as stored.
pub fn by_category(records: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for record in records {
        match totals.iter_mut().find(|t| t.category == record.category) {
            Some(entry) => {
                entry.total += record.amount;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: record.category.clone(),
                total: record.amount,
                count: 1,
            }),
        }
    }

    totals
}

/// Total for a single category (zero if absent).
pub fn category_total(records: &[ExpenseRecord], category: &str) -> Amount {
    records
        .iter()
        .filter(|r| r.category == category)
        .map(|r| r.amount)
        .sum()
}
