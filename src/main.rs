use std::path::PathBuf;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use lut_2048::table::{self, TABLE_SIZE};

#[derive(Parser, Debug)]
#[command(
    name = "lut-2048",
    version,
    about = "Generate the 2048 row slide/merge lookup table"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute all 65536 entries and write the table file
    Build {
        /// Output file path
        #[arg(short = 'o', long = "out", value_name = "FILE", default_value = "lut.txt")]
        out: PathBuf,
        /// Show a progress bar while computing entries
        #[arg(long)]
        progress: bool,
    },
    /// Check an existing table file against a fresh recomputation
    Validate {
        /// Table file path
        #[arg(long, value_name = "FILE")]
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Build { out, progress } => {
            let entries = if progress {
                let bar = ProgressBar::new(TABLE_SIZE as u64);
                bar.set_style(ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos}/{len} rows",
                )?);
                let entries = table::build_table_with(|| bar.inc(1));
                bar.finish();
                entries
            } else {
                table::build_table()
            };
            table::write_table(&out, &entries)?;
            eprintln!("Wrote {} entries: {}", entries.len(), out.display());
        }
        Command::Validate { path } => match table::validate_table(&path) {
            Ok(()) => {
                eprintln!("OK: {} ({} entries)", path.display(), TABLE_SIZE);
            }
            Err(e) => {
                eprintln!("INVALID: {} ({})", path.display(), e);
                std::process::exit(2);
            }
        },
    }
    Ok(())
}
