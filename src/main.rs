//! doxycheck CLI - report Doxygen warnings for specific files
//!
//! Usage: doxycheck [OPTIONS] <FILES>...
//!
//! Exit status:
//!   0  no warnings left after filtering
//!   1  warnings remain, or Doxygen could not be run
//!   2  invalid usage or settings

mod commands;

use clap::Parser;

use doxycheck::domain::policies::{EXIT_USAGE, EXIT_WARNINGS};
use doxycheck::presentation::{logging, render_error, Cli, OutputFormat};
use doxycheck::DoxycheckError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let format = OutputFormat::from_json_flag(cli.json);
    let code = match commands::check::cmd_check(cli) {
        Ok(code) => code,
        Err(err) => {
            let message = format!("{:#}", err);
            let rendered = match format {
                OutputFormat::Json => render_error(format, &message, &mut std::io::stdout()),
                OutputFormat::Text => render_error(format, &message, &mut std::io::stderr()),
            };
            if let Err(io_err) = rendered {
                tracing::error!(error = %io_err, %message, "failed to report error");
            }
            exit_code_for(&err)
        }
    };

    std::process::exit(code);
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DoxycheckError>() {
        Some(e) if e.is_usage() => EXIT_USAGE,
        _ => EXIT_WARNINGS,
    }
}
