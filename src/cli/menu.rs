use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

use crate::application::ExpenseService;
use crate::domain::parse_amount;

use super::format::{write_categories, write_summary};

enum Flow {
    Continue,
    Exit,
}

/// Interactive numbered menu over an expense service.
/// Reads choices line by line from `input` and writes everything to `output`.
pub struct Menu<'a, R, W> {
    service: &'a mut ExpenseService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(service: &'a mut ExpenseService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Run until the user picks "5" or input runs out.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Expense Tracker!")?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                self.on_end_of_input()?;
                break;
            };

            let flow = match choice.trim() {
                "1" => self.add_expense()?,
                "2" => {
                    write_summary(&mut self.output, &self.service.summary())?;
                    Flow::Continue
                }
                "3" => {
                    write_categories(&mut self.output, &self.service.categories())?;
                    Flow::Continue
                }
                "4" => {
                    self.save()?;
                    Flow::Continue
                }
                "5" => {
                    if self.save()? {
                        writeln!(self.output, "Goodbye!")?;
                        Flow::Exit
                    } else {
                        Flow::Continue
                    }
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Expense Tracker")?;
        writeln!(self.output, "1. Add Expense")?;
        writeln!(self.output, "2. View Summary")?;
        writeln!(self.output, "3. List Categories")?;
        writeln!(self.output, "4. Save Data")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    /// Print `label` and read one line without its line ending.
    /// Bytes that are not valid UTF-8 become U+FFFD. Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn add_expense(&mut self) -> Result<Flow> {
        let Some(amount) = self.prompt("Enter amount spent: ")? else {
            self.on_end_of_input()?;
            return Ok(Flow::Exit);
        };

        // Reject a bad amount before asking for the rest.
        if let Err(err) = parse_amount(&amount) {
            writeln!(
                self.output,
                "Invalid input ({}). Please enter a positive numeric value for the amount.",
                err
            )?;
            return Ok(Flow::Continue);
        }

        let Some(description) = self.prompt("Enter a brief description: ")? else {
            self.on_end_of_input()?;
            return Ok(Flow::Exit);
        };
        let Some(category) =
            self.prompt("Enter category (e.g., food, transport, entertainment): ")?
        else {
            self.on_end_of_input()?;
            return Ok(Flow::Exit);
        };

        match self.service.add_expense(&amount, &description, &category) {
            Ok(_) => writeln!(self.output, "Expense added successfully!")?,
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }
        Ok(Flow::Continue)
    }

    /// Save and report the outcome. A failed save is shown, not propagated.
    fn save(&mut self) -> Result<bool> {
        match self.service.save() {
            Ok(_) => {
                writeln!(self.output, "Data saved successfully!")?;
                Ok(true)
            }
            Err(err) => {
                writeln!(self.output, "Error: {}", err)?;
                Ok(false)
            }
        }
    }

    fn on_end_of_input(&mut self) -> Result<()> {
        writeln!(self.output)?;
        if self.service.has_unsaved_changes() {
            warn!("input closed with unsaved expenses");
            writeln!(
                self.output,
                "Input closed; unsaved expenses were not written to {}.",
                self.service.data_path().display()
            )?;
        }
        Ok(())
    }
}
