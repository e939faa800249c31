//! Interactive prompts: manual date entry and name-match confirmation.
//!
//! Prompts go to stderr so stdout stays clean for the report; answers are
//! read one line at a time from stdin.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use rankscore_recon::{Decision, MatchOracle, ReconError};
use rankscore_timeparse::PendingDate;

use crate::exit_codes::EXIT_DATE;
use crate::CliError;

/// Yes/no confirmation over stdin. Unparseable answers are re-asked here;
/// the reconciliation engine itself asks each pair only once.
pub struct StdinOracle;

impl MatchOracle for StdinOracle {
    fn confirm(&mut self, canonical: &str, variant: &str) -> Result<Decision, ReconError> {
        loop {
            eprint!("Is '{variant}' the same entity as '{canonical}'? (yes/no) ");
            io::stderr().flush().ok();

            let mut buf = String::new();
            match io::stdin().read_line(&mut buf) {
                Ok(0) => {
                    return Err(ReconError::Oracle(
                        "stdin closed while awaiting confirmation".into(),
                    ))
                }
                Ok(_) => {}
                Err(e) => return Err(ReconError::Oracle(e.to_string())),
            }

            let answer = buf.to_lowercase();
            if answer.contains('y') {
                return Ok(Decision::Same);
            }
            if answer.contains('n') {
                return Ok(Decision::Different);
            }
            // anything else: ask again
        }
    }
}

/// Ask the operator for the date the automatic rules gave up on. A
/// malformed entry is fatal for the batch, with no guessing.
pub fn manual_date(pending: &PendingDate) -> Result<NaiveDateTime, CliError> {
    eprintln!("Could not determine date from the following line:");
    eprintln!("  {}", pending.original());
    eprint!("Enter the date as YYYY-MM-DD: ");
    io::stderr().flush().ok();

    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => {
            return Err(CliError {
                code: EXIT_DATE,
                message: "stdin closed while awaiting a date".into(),
                hint: None,
            })
        }
        Ok(_) => {}
        Err(e) => return Err(CliError { code: EXIT_DATE, message: e.to_string(), hint: None }),
    }

    pending.accept_manual(buf.trim()).map_err(|e| CliError {
        code: EXIT_DATE,
        message: format!("manual date rejected: {e}"),
        hint: Some("expected e.g. 2017-06-22".into()),
    })
}
