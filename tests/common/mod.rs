// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use outlay::application::ExpenseService;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a test service backed by a data file in a temporary directory
pub fn test_service() -> Result<(ExpenseService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let service = ExpenseService::open(data_path(&temp_dir))?;
    Ok((service, temp_dir))
}

/// Path of the data file inside a test directory
pub fn data_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("expenses.json")
}

/// Test fixture: a small month of spending
pub struct SampleExpenses;

impl SampleExpenses {
    /// Add lunch, bus pass, coffee and cinema
    pub fn add_basic(service: &mut ExpenseService) -> Result<()> {
        service.add_expense("12.5", "lunch", "Food")?;
        service.add_expense("40", "bus pass", "transport")?;
        service.add_expense("3.25", "coffee", "food")?;
        service.add_expense("9", "cinema", "Entertainment")?;
        Ok(())
    }
}
