use colored::*;
use models::ValidationResult;
use serde::Serialize;
use std::io::Write;

use crate::EvaluatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Running totals for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub all: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn record(&mut self, result: &ValidationResult) {
        self.all += 1;
        if result.succeeded() {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
    }
}

/// Writes validation results as they arrive.
///
/// In text mode valid postcodes go to `out` and invalid ones (with their
/// errors) go to `err`. In JSON mode everything goes to `out`, one object
/// per line.
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
    format: OutputFormat,
    summary: Summary,
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E, format: OutputFormat) -> Self {
        Reporter {
            out,
            err,
            format,
            summary: Summary::default(),
        }
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn report(&mut self, result: &ValidationResult) -> Result<(), EvaluatorError> {
        self.summary.record(result);

        match self.format {
            OutputFormat::Text => {
                if result.succeeded() {
                    writeln!(
                        self.out,
                        "Postcode: `{}` is {}",
                        result.normalized_postcode,
                        "correct".green()
                    )?;
                } else {
                    writeln!(
                        self.err,
                        "Postcode: `{}` is {}",
                        result.normalized_postcode,
                        "not correct".red()
                    )?;
                    writeln!(self.err, "errors:")?;
                    for error in &result.errors {
                        writeln!(self.err, "  {}", error)?;
                    }
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, result)?;
                writeln!(self.out)?;
            }
        }

        Ok(())
    }

    /// Print the totals and hand them back.
    pub fn finish(mut self) -> Result<Summary, EvaluatorError> {
        match self.format {
            OutputFormat::Text => {
                writeln!(
                    self.out,
                    "\nall: {}, valid: {}, invalid: {}",
                    self.summary.all, self.summary.valid, self.summary.invalid
                )?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &self.summary)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        self.err.flush()?;

        Ok(self.summary)
    }
}
