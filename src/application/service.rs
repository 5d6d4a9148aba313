use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{ExpenseRecord, Ledger};
use crate::storage::Repository;

use super::{AppError, ExpenseSummary};

/// Application service owning the session ledger and its backing file.
/// This is the only interface the CLI (menu or subcommands) talks to.
pub struct ExpenseService {
    repo: Repository,
    ledger: Ledger,
    unsaved: bool,
}

impl ExpenseService {
    /// Create a service from a repository and an already-loaded ledger.
    pub fn new(repo: Repository, ledger: Ledger) -> Self {
        Self {
            repo,
            ledger,
            unsaved: false,
        }
    }

    /// Open the data file at `path`, loading any existing expenses.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let repo = Repository::new(path);
        let records = repo.load()?;
        debug!(count = records.len(), "opened ledger");
        Ok(Self::new(repo, Ledger::from_records(records)))
    }

    pub fn data_path(&self) -> &Path {
        self.repo.path()
    }

    // ========================
    // Ledger operations
    // ========================

    /// Record a new expense from raw input.
    /// On an invalid amount nothing is recorded.
    pub fn add_expense(
        &mut self,
        amount: &str,
        description: &str,
        category: &str,
    ) -> Result<&ExpenseRecord, AppError> {
        let record = self.ledger.append(amount, description, category)?;
        self.unsaved = true;
        debug!(
            amount = record.amount,
            category = %record.category,
            "added expense"
        );
        Ok(record)
    }

    /// All expenses in entry order.
    pub fn list_expenses(&self) -> &[ExpenseRecord] {
        self.ledger.records()
    }

    pub fn categories(&self) -> BTreeSet<String> {
        self.ledger.categories()
    }

    pub fn summary(&self) -> ExpenseSummary {
        ExpenseSummary::from_records(self.ledger.records())
    }

    // ========================
    // Persistence
    // ========================

    /// Write the whole ledger to disk. Returns the number of records written.
    pub fn save(&mut self) -> Result<usize, AppError> {
        self.repo.save(self.ledger.records())?;
        self.unsaved = false;
        info!(count = self.ledger.len(), "ledger saved");
        Ok(self.ledger.len())
    }

    /// True if expenses were added since the last load or save.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }
}
