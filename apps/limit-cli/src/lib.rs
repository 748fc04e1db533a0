//! # Furusato Limit CLI
//!
//! The request boundary around `furusato-core`: everything here is parsing,
//! validation, logging and serialization. The arithmetic lives in the core.
//!
//! ## Request Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw JSON                                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  serde_json ──► LimitRequest          (BadRequest on type errors)       │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  max_income check + validate_request  (ValidationError)                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  furusato_core::breakdown ──► LimitResult::from_limit                   │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  JSON on stdout                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;

use furusato_core::{breakdown, validate_request, LimitBreakdown, LimitRequest, LimitResult};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::Args;
use crate::config::CliConfig;
use crate::error::CliError;

/// Output shape when `--breakdown` is given.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedResponse {
    pub result: LimitResult,
    pub breakdown: LimitBreakdown,
}

/// Parses a request body and enforces the boundary's own limits.
pub fn parse_request(body: &str, config: &CliConfig) -> Result<LimitRequest, CliError> {
    let request: LimitRequest =
        serde_json::from_str(body).map_err(|e| CliError::BadRequest(e.to_string()))?;

    if request.annual_income > config.max_income {
        return Err(furusato_core::ValidationError::OutOfRange {
            field: "annualIncome".to_string(),
            min: 0,
            max: config.max_income,
        }
        .into());
    }

    Ok(request)
}

/// Handles one request body end to end and returns the response JSON.
pub fn run(args: &Args, config: &CliConfig, body: &str) -> Result<String, CliError> {
    let request = parse_request(body, config)?;
    let profile = validate_request(&request)?;
    debug!(?profile, "request validated");

    let details = breakdown(&profile)?;
    let result = LimitResult::from_limit(details.limit);
    info!(
        rounded_limit = %result.rounded_limit,
        marginal_rate = %details.marginal_rate,
        "limit computed"
    );

    let pretty = args.pretty || config.pretty_json;
    if args.breakdown {
        to_json(
            &DetailedResponse {
                result,
                breakdown: details,
            },
            pretty,
        )
    } else {
        to_json(&result, pretty)
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(CliError::Serialize)
}
