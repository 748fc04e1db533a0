//! # furusato-limit
//!
//! Reads one limit request as JSON (from `--input` or stdin) and writes the
//! result as JSON to stdout. Logs and error bodies go to stderr.
//!
//! ```text
//! $ echo '{"annualIncome":5000000,"married":false,"dependents":0}' | furusato-limit
//! {"limit":54362,"roundedLimit":54000,"selfBurden":2000,"deductionAmount":52000,"recommendedAmount":18000}
//! ```

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use furusato_limit_cli::cli::Args;
use furusato_limit_cli::config::CliConfig;
use furusato_limit_cli::error::CliError;
use furusato_limit_cli::run;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => return fail(CliError::from(e)),
    };

    init_tracing(&config);
    info!(
        tax_year = furusato_core::TAX_YEAR,
        max_income = config.max_income,
        "Configuration loaded"
    );

    match read_input(&args).and_then(|body| run(&args, &config, &body)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - then `FURUSATO_LOG`
/// - Default: `info,furusato_core=debug,furusato_limit_cli=debug`
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn read_input(args: &Args) -> Result<String, CliError> {
    match &args.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

fn fail(err: CliError) -> ExitCode {
    error!(code = ?err.code(), "{}", err);
    match serde_json::to_string(&err.body()) {
        Ok(body) => eprintln!("{}", body),
        Err(_) => eprintln!("{}", err),
    }
    ExitCode::from(err.exit_code())
}
