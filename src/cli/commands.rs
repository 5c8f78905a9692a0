use crate::core::{personal_allowance, FTE_MAX, FTE_MIN, PERCENT_MAX, PERCENT_MIN};
use crate::error::{PriplatekError, PriplatekResult};
use crate::tables::{load_rate_table, resolve_document};
use crate::types::{Allowance, ClassMaxima, CLASS_MAX, CLASS_MIN};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Format an amount as whole crowns with space-separated thousands and the
/// Kč suffix. Rounding happens here and only here; computation keeps the
/// fractions.
fn format_czk(amount: f64) -> String {
    let crowns = amount.round() as i64;
    let sign = if crowns < 0 { "-" } else { "" };
    let digits = crowns.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped} Kč")
}

/// Percent values echo user input; show them without float noise or
/// trailing zeros.
fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded:.2}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Parse a user-supplied number, tolerating the Czech decimal comma
/// ("80,5"). Used both as a clap value parser and by the prompt loop.
pub fn parse_decimal(raw: &str) -> Result<f64, String> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err("expected a number".to_string());
    }
    normalized
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", raw.trim()))
}

/// Execute the show command: locate the rate table and print the per-class
/// ceilings.
pub fn show(file: Option<PathBuf>, json: bool) -> PriplatekResult<()> {
    let path = resolve_document(file.as_deref())?;
    let maxima = load_rate_table(&path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&maxima)?);
        return Ok(());
    }

    println!("{}", "📋 Allowance ceilings by pay class".bold().green());
    println!("   Document: {}", path.display());
    println!(
        "   Sheet: {} ({} classes)",
        maxima.sheet().bright_blue().bold(),
        maxima.len()
    );
    println!();
    println!("{}", "   Class  Ceiling (100 %)".bold());
    for (class, base) in maxima.iter() {
        println!("   {class:>5}  {:>12}", format_czk(base as f64));
    }

    Ok(())
}

/// Execute the calculate command: locate the table, compute one allowance,
/// print the result block.
pub fn calculate(
    file: Option<PathBuf>,
    class: u8,
    percent: f64,
    fte: f64,
    json: bool,
) -> PriplatekResult<()> {
    let path = resolve_document(file.as_deref())?;
    let maxima = load_rate_table(&path)?;
    let allowance = personal_allowance(&maxima, class, percent, fte)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&allowance)?);
        return Ok(());
    }

    println!("{}", "🧮 Personal allowance".bold().green());
    println!("   Document: {}", path.display());
    println!(
        "   Sheet: {} ({} classes)",
        maxima.sheet().bright_blue().bold(),
        maxima.len()
    );
    print_allowance(&allowance);
    Ok(())
}

/// Execute the interactive command: prompt for inputs on stdin, print the
/// result block.
///
/// The document is scanned once up front. Each prompt repeats until it gets
/// a usable value, with the reason printed in between; EOF on stdin aborts
/// the session.
pub fn interactive(file: Option<PathBuf>) -> PriplatekResult<()> {
    let path = resolve_document(file.as_deref())?;
    let maxima = load_rate_table(&path)?;

    println!("{}", "💰 Personal-allowance calculator".bold().green());
    println!("   Document: {}", path.display());
    println!(
        "   Sheet: {} ({} classes)",
        maxima.sheet().bright_blue().bold(),
        maxima.len()
    );
    println!();

    let class = prompt_class(&maxima)?;
    if let Some(base) = maxima.amount(class) {
        println!("   Class ceiling: {}", format_czk(base as f64).bold());
    }
    let fte = prompt_number("Workload as % of full time", FTE_MIN, FTE_MAX)?;
    let percent = prompt_number("Allowance as % of the ceiling", PERCENT_MIN, PERCENT_MAX)?;

    let allowance = personal_allowance(&maxima, class, percent, fte)?;
    print_allowance(&allowance);
    Ok(())
}

fn print_allowance(allowance: &Allowance) {
    println!();
    println!("{}", "✅ Result".bold().green());
    println!("   Pay class:       {}", allowance.class);
    println!("   Class ceiling:   {}", format_czk(allowance.base as f64));
    println!("   Allowance rate:  {} %", format_percent(allowance.percent));
    println!("   Workload:        {} %", format_percent(allowance.fte));
    println!();
    println!(
        "   Monthly allowance: {}",
        format_czk(allowance.amount).bold().green()
    );
}

/// One prompt round-trip. EOF is an error, not an empty answer, so a piped
/// stdin that runs dry aborts instead of spinning on the re-prompt loop.
fn read_answer(prompt: &str) -> PriplatekResult<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(PriplatekError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed while waiting for input",
        )));
    }
    Ok(line.trim().to_string())
}

fn prompt_class(maxima: &ClassMaxima) -> PriplatekResult<u8> {
    loop {
        let raw = read_answer(&format!("Pay class ({CLASS_MIN}-{CLASS_MAX}): "))?;
        let Ok(class) = raw.parse::<u8>() else {
            println!("{}", format!("   '{raw}' is not a whole number").red());
            continue;
        };
        if !(CLASS_MIN..=CLASS_MAX).contains(&class) {
            println!(
                "{}",
                format!("   class {class} is outside {CLASS_MIN}-{CLASS_MAX}").red()
            );
            continue;
        }
        if !maxima.contains(class) {
            println!(
                "{}",
                format!("   class {class} is not in the located table").red()
            );
            continue;
        }
        return Ok(class);
    }
}

fn prompt_number(label: &str, min: f64, max: f64) -> PriplatekResult<f64> {
    loop {
        let raw = read_answer(&format!("{label} ({min}-{max}): "))?;
        match parse_decimal(&raw) {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            Ok(value) => println!(
                "{}",
                format!("   {value} is out of range, expected {min} to {max}").red()
            ),
            Err(reason) => println!("{}", format!("   {reason}").red()),
        }
    }
}
