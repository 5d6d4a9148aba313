use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::application::ExpenseSummary;
use crate::domain::{Amount, ExpenseRecord, format_amount};

/// Capitalize each word for display: a letter following a non-letter is
/// upper-cased, every other letter is lower-cased.
/// Example: "eating out" -> "Eating Out", "bus/TRAIN" -> "Bus/Train"
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;

    for c in input.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }

    out
}

/// Amount with a dollar sign, e.g. "$12.50".
pub fn currency(amount: Amount) -> String {
    format!("${}", format_amount(amount))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Summary block shown by the interactive menu.
pub fn write_summary<W: Write>(out: &mut W, summary: &ExpenseSummary) -> io::Result<()> {
    if summary.is_empty() {
        writeln!(out, "No expenses recorded yet.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "--- Expense Summary ---")?;
    writeln!(out, "Total Expenses: {}", currency(summary.total))?;
    writeln!(out, "Category-wise Breakdown:")?;
    for cat in &summary.categories {
        writeln!(out, "{}: {}", title_case(&cat.category), currency(cat.total))?;
    }
    Ok(())
}

/// Column layout used by the `summary` subcommand.
pub fn write_summary_table<W: Write>(out: &mut W, summary: &ExpenseSummary) -> io::Result<()> {
    if summary.is_empty() {
        writeln!(out, "No expenses recorded yet.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<20} {:>12} {:>8} {:>12} {:>8}",
        "CATEGORY", "TOTAL", "COUNT", "AVERAGE", "PERCENT"
    )?;
    writeln!(out, "{}", "-".repeat(64))?;

    for cat in &summary.categories {
        writeln!(
            out,
            "{:<20} {:>12} {:>8} {:>12} {:>7.1}%",
            truncate(&title_case(&cat.category), 20),
            currency(cat.total),
            cat.count,
            currency(cat.average),
            cat.percentage
        )?;
    }

    writeln!(out, "{}", "-".repeat(64))?;
    writeln!(
        out,
        "{:<20} {:>12} {:>8}",
        "TOTAL",
        currency(summary.total),
        summary.count
    )?;
    Ok(())
}

pub fn write_categories<W: Write>(out: &mut W, categories: &BTreeSet<String>) -> io::Result<()> {
    if categories.is_empty() {
        writeln!(out, "No categories found. Add some expenses first.")?;
    } else {
        let names: Vec<&str> = categories.iter().map(String::as_str).collect();
        writeln!(out, "Available categories: {}", names.join(", "))?;
    }
    Ok(())
}

pub fn write_expense_list<W: Write>(out: &mut W, records: &[ExpenseRecord]) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "No expenses recorded yet.")?;
        return Ok(());
    }

    writeln!(out, "{:>4} {:>12} {:<16} {}", "#", "AMOUNT", "CATEGORY", "DESCRIPTION")?;
    writeln!(out, "{}", "-".repeat(60))?;
    for (i, record) in records.iter().enumerate() {
        writeln!(
            out,
            "{:>4} {:>12} {:<16} {}",
            i + 1,
            currency(record.amount),
            truncate(&record.category, 16),
            record.description
        )?;
    }
    Ok(())
}
