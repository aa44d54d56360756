//! Command implementations for the report processor CLI
//!
//! Each command is implemented in its own module; shared input/config
//! loading lives in [`shared`].

pub mod parse;
pub mod shared;
pub mod validate;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner, dispatching to the subcommand handlers
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Parse(parse_args)) => parse::run_parse(parse_args),
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args),
        None => parse::run_parse(Default::default()),
    }
}
