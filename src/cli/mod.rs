pub mod format;
mod menu;

pub use menu::Menu;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::application::ExpenseService;
use crate::domain::category_total;
use crate::storage::DEFAULT_DATA_FILE;

use format::{currency, title_case, write_categories, write_expense_list, write_summary_table};

/// outlay - Personal Expense Log
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Log expenses by category and summarize where the money went")]
#[command(version)]
pub struct Cli {
    /// Expense data file (JSON)
    #[arg(
        short,
        long,
        global = true,
        env = "OUTLAY_FILE",
        default_value = DEFAULT_DATA_FILE
    )]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run a single command instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record an expense and save
    Add {
        /// Amount spent (e.g., "12.50")
        amount: String,

        /// Brief description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Category (e.g., food, transport, entertainment)
        #[arg(short, long)]
        category: String,
    },

    /// List expenses in the order they were entered
    List,

    /// Show the total and per-category breakdown
    Summary {
        /// Only show the total for this category (any format)
        #[arg(short, long)]
        category: Option<String>,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List the categories in use
    Categories,

    /// Export data to CSV or JSON
    Export {
        /// What to export: expenses, summary, json
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Install the stderr log subscriber. `--verbose` lowers the level to debug.
    pub fn init_logging(&self) {
        let level = if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }

    pub fn run(self) -> Result<()> {
        let mut service = ExpenseService::open(&self.file).with_context(|| {
            format!(
                "Could not load expenses from {}; the file was left untouched",
                self.file.display()
            )
        })?;

        let Some(command) = self.command else {
            let stdin = io::stdin();
            let mut menu = Menu::new(&mut service, stdin.lock(), io::stdout());
            return menu.run();
        };

        let mut out = io::stdout().lock();
        match command {
            Commands::Add {
                amount,
                description,
                category,
            } => {
                run_add_command(&mut service, &amount, &description, &category, &mut out)?;
            }

            Commands::List => {
                write_expense_list(&mut out, service.list_expenses())?;
            }

            Commands::Summary { category, format } => {
                run_summary_command(&service, category.as_deref(), &format, &mut out)?;
            }

            Commands::Categories => {
                write_categories(&mut out, &service.categories())?;
            }

            Commands::Export {
                export_type,
                output,
            } => {
                run_export_command(&service, &export_type, output.as_deref())?;
            }
        }

        Ok(())
    }
}

fn run_add_command<W: Write>(
    service: &mut ExpenseService,
    amount: &str,
    description: &str,
    category: &str,
    out: &mut W,
) -> Result<()> {
    let record = service
        .add_expense(amount, description, category)
        .context("Invalid amount format. Use a positive number like '12.50'")?
        .clone();
    service.save()?;
    writeln!(
        out,
        "Added {} to {} ({} expenses in {})",
        currency(record.amount),
        title_case(&record.category),
        service.list_expenses().len(),
        service.data_path().display()
    )?;
    Ok(())
}

fn run_summary_command<W: Write>(
    service: &ExpenseService,
    category: Option<&str>,
    format: &str,
    out: &mut W,
) -> Result<()> {
    if !matches!(format, "table" | "json" | "csv") {
        anyhow::bail!(
            "Invalid summary format '{}'. Valid formats: table, json, csv",
            format
        );
    }

    if let Some(category) = category {
        let category = category.to_lowercase();
        let total = category_total(service.list_expenses(), &category);

        match format {
            "json" => {
                let value = serde_json::json!({ "category": category, "total": total });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            }
            "csv" => {
                let mut csv_writer = csv::Writer::from_writer(&mut *out);
                csv_writer.write_record(["category", "total"])?;
                csv_writer.write_record([category.clone(), format!("{:.2}", total)])?;
                csv_writer.flush()?;
            }
            _ => {
                writeln!(out, "{}: {}", title_case(&category), currency(total))?;
            }
        }
        return Ok(());
    }

    let summary = service.summary();
    match format {
        "json" => {
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
        "csv" => {
            crate::io::Exporter::new(service).export_summary_csv(out)?;
        }
        _ => {
            write_summary_table(out, &summary)?;
        }
    }

    Ok(())
}

fn run_export_command(
    service: &ExpenseService,
    export_type: &str,
    output: Option<&Path>,
) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;

    let exporter = Exporter::new(service);

    // Determine output writer
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };

    let count = match export_type {
        "expenses" => exporter.export_expenses_csv(writer)?,
        "summary" => exporter.export_summary_csv(writer)?,
        "json" => exporter.export_json(writer)?,
        _ => {
            anyhow::bail!(
                "Invalid export type '{}'. Valid types: expenses, summary, json",
                export_type
            );
        }
    };

    if output.is_some() {
        eprintln!("Exported {} rows ({})", count, export_type);
    }

    Ok(())
}
