//! Validate command: human-readable validation breakdown for one report

use colored::Colorize;

use super::shared::{load_config, read_input};
use crate::Result;
use crate::app::services::report_parser::ReportParser;
use crate::cli::args::ValidateArgs;

/// Execute the validate command
pub fn run_validate(args: ValidateArgs) -> Result<()> {
    let config = load_config(args.config_path.as_ref())?;
    let parser = ReportParser::new(config)?;

    let input = read_input(args.input_path.as_deref())?;
    let report = parser.parse(&input)?;

    println!("{}", "Report Validation".bold());
    println!("{}", "=================".bold());
    println!("Station:        {} ({:.0}% confidence, {:?})",
        report.station.name.cyan(),
        report.station.confidence * 100.0,
        report.station.strategy
    );
    if let Some(manager) = &report.manager_name {
        println!("Manager:        {}", manager);
    }
    println!("Date:           {}", report.report_date);
    println!("Method:         {}", report.parsing_method);
    println!("Fuel entries:   {}", report.fuel_data.len());
    for entry in &report.fuel_data {
        println!(
            "  {:<12} {:>10.2} L {:>12.2}",
            entry.fuel_type.label(),
            entry.volume,
            entry.amount
        );
    }
    println!("Total volume:   {:.2} L", report.total_volume);
    println!("Total amount:   {:.2}", report.total_amount);

    let score_line = format!("{:.0}/100", report.validation.score);
    if report.validation.is_valid {
        println!("Score:          {} {}", score_line.green(), "VALID".green().bold());
    } else {
        println!("Score:          {} {}", score_line.red(), "INVALID".red().bold());
    }

    for error in &report.validation.errors {
        println!("  {} {}", "error:".red().bold(), error);
    }
    for warning in &report.validation.warnings {
        println!("  {} {}", "warning:".yellow().bold(), warning);
    }

    Ok(())
}
