//! convtool - conversion form over stdio
//!
//! Reads one JSON request per line on stdin and answers with one JSON
//! response per line on stdout. Logs go to stderr.
//!
//! Methods:
//! - list_categories: categories for the selector
//! - list_units {category}: units for the from/to pickers
//! - default_pair {category}: initial from/to selection
//! - select_category {category}: switch category, resetting both pickers
//! - set_amount {amount}: amount text as typed
//! - set_from {unit} / set_to {unit}: pick units
//! - state: current form and result
//! - convert {amount, category, from, to}: one-shot conversion

mod config;
mod form;
mod session;

use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use convtool_core::ErrorReport;
use config::Config;
use session::{Request, Response, Session};

const SERVER_NAME: &str = "convtool";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    info!(
        version = SERVER_VERSION,
        category = %config.initial_category,
        digits = config.format.significant_digits,
        separator = %config.format.decimal_separator,
        "{} started", SERVER_NAME
    );

    let mut session = Session::new(&config);
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(bytes = line.len(), "received request");

        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => session.handle(request),
            Err(e) => {
                warn!(error = %e, "could not parse request");
                Response::err(None, ErrorReport::bad_request(format!("parse error: {}", e)))
            }
        };

        if let Err(e) = write_response(&response) {
            error!(error = %e, "error writing response");
            break;
        }
    }

    info!(category = %session.form().category, "input closed, shutting down");
}

fn write_response(response: &Response) -> io::Result<()> {
    let json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}
