use serde::{Deserialize, Serialize};

use crate::domain::{Amount, ExpenseRecord, by_category, total};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub total: Amount,
    pub count: usize,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total: Amount,
    pub count: usize,
    pub average: Amount,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

impl ExpenseSummary {
    /// Build a summary from a ledger snapshot.
    /// Category order follows first appearance in `records`.
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        let grand_total = total(records);

        let categories = by_category(records)
            .into_iter()
            .map(|t| CategorySummary {
                average: t.total / t.count as f64,
                percentage: if grand_total > 0.0 {
                    t.total / grand_total * 100.0
                } else {
                    0.0
                },
                category: t.category,
                total: t.total,
                count: t.count,
            })
            .collect();

        Self {
            total: grand_total,
            count: records.len(),
            categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
