//! Parse command: report text in, canonical JSON wire record out

use tracing::info;

use super::shared::{load_config, read_input};
use crate::Result;
use crate::app::services::report_parser::ReportParser;
use crate::cli::args::ParseArgs;

/// Execute the parse command
pub fn run_parse(args: ParseArgs) -> Result<()> {
    let config = load_config(args.config_path.as_ref())?;
    let parser = ReportParser::new(config)?;

    let input = read_input(args.input_path.as_deref())?;
    let record = parser.parse_to_record(&input)?;

    info!(
        "parsed report for '{}' ({}), score {:.0}",
        record.station_name, record.report_date, record.validation_score
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{json}");

    Ok(())
}
