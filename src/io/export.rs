use anyhow::Result;
use std::io::Write;

use crate::application::ExpenseService;
use crate::storage::write_pretty_json;

/// Exporter for writing the ledger out in other formats
pub struct Exporter<'a> {
    service: &'a ExpenseService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a ExpenseService) -> Self {
        Self { service }
    }

    /// Export expenses to CSV, one row per record in entry order
    pub fn export_expenses_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["amount", "description", "category"])?;

        let mut count = 0;
        for record in self.service.list_expenses() {
            csv_writer.write_record([
                record.amount.to_string(),
                record.description.clone(),
                record.category.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the per-category summary to CSV
    pub fn export_summary_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let summary = self.service.summary();
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["category", "total", "count", "average", "percentage"])?;

        for cat in &summary.categories {
            csv_writer.write_record([
                cat.category.clone(),
                format!("{:.2}", cat.total),
                cat.count.to_string(),
                format!("{:.2}", cat.average),
                format!("{:.2}", cat.percentage),
            ])?;
        }

        csv_writer.flush()?;
        Ok(summary.categories.len())
    }

    /// Export expenses as a JSON array, byte-for-byte the data file layout
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let records = self.service.list_expenses();
        write_pretty_json(&mut writer, records)?;
        writer.flush()?;
        Ok(records.len())
    }
}
