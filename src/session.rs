use std::io;
use std::path::Path;

use anyhow::{Result, anyhow};
use eframe::egui::Color32;

use crate::color;
use crate::data::loader::{self, LoadError};
use crate::data::model::Table;
use crate::prompt;
use crate::registry::{ColumnDescriptor, DatasetDescriptor};
use crate::stats::{self, BinStrategy, ColumnSummary};
use crate::ui;

// ---------------------------------------------------------------------------
// Interactive session
// ---------------------------------------------------------------------------

/// Outcome of one dataset-menu pass.
enum DatasetChoice {
    /// Index into the session's dataset list.
    Selected(usize),
    Exit,
}

/// The interactive menu session.
///
/// Owns the run-scoped dataset list. Datasets whose files turn out to hold
/// no usable rows are removed and stay excluded for the rest of the run.
pub struct Session {
    datasets: Vec<DatasetDescriptor>,
}

impl Session {
    pub fn new(datasets: Vec<DatasetDescriptor>) -> Self {
        Self { datasets }
    }

    /// Run the menu loop until the user exits or a fatal load error occurs.
    ///
    /// `Err` means a dataset file was missing or unreadable; the caller maps
    /// that to exit code 1. The message has already been shown to the user.
    pub fn run(&mut self) -> Result<()> {
        loop {
            prompt::clear_screen();
            if self.datasets.is_empty() {
                println!("No readable datasets remain.");
                break;
            }

            let index = match self.select_dataset()? {
                DatasetChoice::Exit => break,
                DatasetChoice::Selected(index) => index,
            };
            let descriptor = self.datasets[index].clone();

            let table = match loader::load_table(Path::new(&descriptor.file_path)) {
                Ok(table) => table,
                Err(err @ LoadError::Empty { .. }) => {
                    println!("{err}, removing it from the menu");
                    prompt::pause()?;
                    self.retire_dataset(index);
                    continue;
                }
                Err(err) => {
                    println!("{err}, please try again");
                    prompt::pause()?;
                    return Err(err.into());
                }
            };

            // The table stays loaded while the user analyzes its columns.
            analyze_dataset(&descriptor, &table)?;
        }

        println!("Thanks for using the Data Analysis App");
        Ok(())
    }

    /// Dataset menu: one entry per remaining dataset plus "Exit Program".
    fn select_dataset(&self) -> io::Result<DatasetChoice> {
        println!("Welcome to the Data Analysis App");
        println!("Select the file you want to analyze:");
        let entries = self.dataset_menu();
        for entry in &entries {
            println!("{entry}");
        }

        let choice = prompt::prompt_selection("Please make a selection: ", entries.len())?;
        Ok(if choice == entries.len() {
            DatasetChoice::Exit
        } else {
            DatasetChoice::Selected(choice - 1)
        })
    }

    fn dataset_menu(&self) -> Vec<String> {
        let mut entries: Vec<String> = self
            .datasets
            .iter()
            .enumerate()
            .map(|(i, ds)| format!("{} {}", i + 1, ds.label))
            .collect();
        entries.push(format!("{} Exit Program", entries.len() + 1));
        entries
    }

    /// Permanently exclude a dataset for this run.
    fn retire_dataset(&mut self, index: usize) {
        let retired = self.datasets.remove(index);
        log::warn!("retiring dataset {} ({})", retired.label, retired.file_path);
    }
}

/// Column menu and statistics display for one loaded dataset.
/// Returns when the user picks "Exit Column".
fn analyze_dataset(descriptor: &DatasetDescriptor, table: &Table) -> Result<()> {
    loop {
        println!("You have entered {}", descriptor.label);
        let entries = column_menu(descriptor);
        for entry in &entries {
            println!("{entry}");
        }

        let choice =
            prompt::prompt_selection("Select the column you want to analyze: ", entries.len())?;
        if choice == entries.len() {
            return Ok(());
        }

        let column = &descriptor.columns[choice - 1];
        let bar_color = color::column_color(choice - 1, descriptor.columns.len());
        show_stats(column, bar_color, table)?;
    }
}

/// Print the summary line and open the histogram window.
fn show_stats(column: &ColumnDescriptor, bar_color: Color32, table: &Table) -> Result<()> {
    let Some(cells) = table.column(&column.column_key) else {
        println!("The {} column is missing from the file", column.column_key);
        return prompt::pause().map_err(Into::into);
    };

    let summary = stats::summarize(cells);
    if !summary.numeric {
        println!(
            "Warning: {} is not numeric, mean and standard deviation default to 0",
            column.column_key
        );
    }
    print_summary(&column.column_key, &summary);

    let values = stats::numeric_values(cells);
    match stats::histogram(&values, BinStrategy::Auto) {
        Some(hist) => {
            ui::histogram::show_blocking(column, &hist, bar_color)
                .map_err(|err| anyhow!("showing chart window: {err}"))?;
        }
        None => println!("No numeric values to plot for {}", column.column_key),
    }

    prompt::pause()?;
    Ok(())
}

fn column_menu(descriptor: &DatasetDescriptor) -> Vec<String> {
    let mut entries: Vec<String> = descriptor
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} {}", i + 1, col.display_title))
        .collect();
    entries.push(format!("{} Exit Column", entries.len() + 1));
    entries
}

fn print_summary(column_key: &str, summary: &ColumnSummary) {
    println!("You selected {column_key}");
    println!("The statistics for this column are:");
    println!(
        "{:<23} {:<23} {:<23} {:<23} {:<23}",
        "Count", "Mean", "Std Dev", "Min", "Max"
    );
    println!(
        "{:<23} {:<23} {:<23} {:<23} {:<23}",
        summary.count,
        summary.mean,
        summary.stddev,
        summary.min.to_string(),
        summary.max.to_string()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::builtin_registry;

    #[test]
    fn dataset_menu_ends_with_exit_entry() {
        let session = Session::new(builtin_registry());
        let entries = session.dataset_menu();
        assert_eq!(
            entries,
            vec![
                "1 Housing Data".to_string(),
                "2 Population Data".to_string(),
                "3 Exit Program".to_string(),
            ]
        );
    }

    #[test]
    fn retired_dataset_leaves_the_menu_for_good() {
        let mut session = Session::new(builtin_registry());
        session.retire_dataset(0);
        let entries = session.dataset_menu();
        assert_eq!(
            entries,
            vec!["1 Population Data".to_string(), "2 Exit Program".to_string()]
        );
    }

    #[test]
    fn column_menu_lists_titles_then_exit() {
        let registry = builtin_registry();
        let entries = column_menu(&registry[1]);
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], "1 Population in April");
        assert_eq!(entries[3], "4 Exit Column");
    }

    #[test]
    fn summary_row_is_fixed_width() {
        // five 23-char columns separated by single spaces
        let header = format!(
            "{:<23} {:<23} {:<23} {:<23} {:<23}",
            "Count", "Mean", "Std Dev", "Min", "Max"
        );
        assert_eq!(header.len(), 23 * 5 + 4);
    }
}
