//! inkfilter CLI - filter a sheet snapshot by font color

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use inkfilter::prelude::*;
use inkfilter::block_range;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "inkfilter")]
#[command(author, version, about = "Select spreadsheet cells by font color")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the values in a range whose font color matches
    Filter {
        /// Sheet snapshot (JSON)
        input: PathBuf,

        /// Target font color as #RRGGBB
        #[arg(short, long)]
        color: String,

        /// Range to scan in A1 notation (default: the sheet's used range)
        #[arg(short, long)]
        range: Option<String>,

        /// Reject ranges reaching past column Z
        #[arg(long)]
        single_letter_columns: bool,
    },

    /// Resolve a CSS color name to its hex value
    Resolve {
        /// Color name, any case
        name: String,
    },

    /// Print the range address a block occupies
    Address {
        /// 1-based column of the top-left cell
        #[arg(long)]
        col: u32,

        /// 1-based row of the top-left cell
        #[arg(long)]
        row: u32,

        /// Number of rows in the block
        #[arg(long, default_value = "1")]
        rows: usize,

        /// Number of columns in the block
        #[arg(long, default_value = "1")]
        cols: usize,

        /// Reject ranges reaching past column Z
        #[arg(long)]
        single_letter_columns: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Filter {
            input,
            color,
            range,
            single_letter_columns,
        } => filter(
            &input,
            &color,
            range.as_deref(),
            column_letters(single_letter_columns),
            &mut io::stdout().lock(),
        ),
        Commands::Resolve { name } => {
            println!("{}", resolve_name(&name));
            Ok(())
        }
        Commands::Address {
            col,
            row,
            rows,
            cols,
            single_letter_columns,
        } => {
            let range = block_range(col, row, rows, cols, column_letters(single_letter_columns))
                .with_context(|| {
                    format!("No valid address for a {rows}x{cols} block at ({col}, {row})")
                })?;
            println!("{range}");
            Ok(())
        }
    }
}

fn column_letters(single: bool) -> ColumnLetters {
    if single {
        ColumnLetters::Single
    } else {
        ColumnLetters::Extended
    }
}

fn filter<W: Write>(
    input: &Path,
    color: &str,
    range: Option<&str>,
    letters: ColumnLetters,
    out: &mut W,
) -> Result<()> {
    let sheet = SheetSnapshot::read_file(input)
        .and_then(|snapshot| snapshot.to_sheet())
        .with_context(|| format!("Failed to load '{}'", input.display()))?;

    let range = match range {
        Some(a1) => CellRange::parse(a1).with_context(|| format!("Invalid range '{a1}'"))?,
        None => match sheet.used_range() {
            Some(range) => range,
            None => {
                eprintln!("Warning: Sheet appears to be empty");
                return Ok(());
            }
        },
    };
    log::info!("scanning {range} of '{}'", sheet.name());

    // The caller-side materialization of the block, as a formula would pass it
    let block = sheet.read_values(&range);
    let options = FilterOptions::new().with_column_letters(letters);
    let found = ColorFilter::with_options(&sheet, options).invoke(
        &CellValue::from(color),
        &block,
        &CellValue::from(range.start.column_number() as i64),
        &CellValue::from(range.start.row_number() as i64),
    );

    let found = match found {
        Ok(found) => found,
        Err(err) => bail!(err),
    };

    for value in &found {
        writeln!(out, "{value}").context("Failed to write output")?;
    }
    eprintln!("{} of {} cells matched {color}", found.len(), range.cell_count());

    Ok(())
}
