use clap::{Parser, Subcommand};
use colored::Colorize;
use priplatek::cli;
use priplatek::error::PriplatekResult;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "priplatek")]
#[command(about = "Personal-allowance (osobní příplatek) calculator over the Czech pay tables")]
#[command(long_about = "priplatek - personal-allowance calculator for the Czech public-sector pay tables

Finds the class/degree rate table inside the official spreadsheet - any sheet
layout, .ods/.xlsx/.xls/.xlsb - and computes the personal allowance from the
class ceiling, i.e. the tariff at pay degree 12.

COMMANDS:
  show         - Locate the rate table and print the per-class ceilings
  calculate    - Compute one allowance non-interactively
  interactive  - Prompt for the inputs on stdin

EXAMPLES:
  priplatek show tabulky.ods
  priplatek calculate --class 12 --percent 20 --fte 100
  priplatek calculate tabulky.ods -c 10 -p 12,5 -f 80 --json
  priplatek interactive

The document defaults to platove-tabulky-2025.ods in the working directory,
then next to the binary; PRIPLATEK_TABLES overrides the default.

EXIT CODES:
  0 success | 2 document not found | 3 document unusable | 4 class not in table | 1 other failure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate the rate table and print the per-class ceilings
    Show {
        /// Tariff document; defaults to platove-tabulky-2025.ods
        #[arg(env = "PRIPLATEK_TABLES")]
        file: Option<PathBuf>,

        /// Print the located table as JSON
        #[arg(long)]
        json: bool,
    },

    #[command(long_about = "Compute one personal allowance non-interactively.

Locates the rate table, reads the ceiling for the given pay class and scales
it by the allowance percentage and the workload:

  amount = ceiling * (percent / 100) * (fte / 100)

Percent and workload accept a decimal comma (\"12,5\") as well as a dot.
Exit code 4 means the class is missing from the located table.")]
    /// Compute one allowance non-interactively
    Calculate {
        /// Tariff document; defaults to platove-tabulky-2025.ods
        #[arg(env = "PRIPLATEK_TABLES")]
        file: Option<PathBuf>,

        /// Pay class (platová třída), 1-16
        #[arg(short, long)]
        class: u8,

        /// Allowance as a percentage of the class ceiling, 0-100
        #[arg(short, long, value_parser = cli::parse_decimal)]
        percent: f64,

        /// Workload as a percentage of full time, 1-200
        #[arg(short, long, value_parser = cli::parse_decimal)]
        fte: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prompt for the inputs on stdin
    Interactive {
        /// Tariff document; defaults to platove-tabulky-2025.ods
        #[arg(env = "PRIPLATEK_TABLES")]
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "priplatek=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> PriplatekResult<()> {
    match cli.command {
        Commands::Show { file, json } => cli::show(file, json),

        Commands::Calculate {
            file,
            class,
            percent,
            fte,
            json,
        } => cli::calculate(file, class, percent, fte, json),

        Commands::Interactive { file } => cli::interactive(file),
    }
}
