use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::{EvaluatorError, Reporter};

#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateOptions {
    /// Drop lines that are empty after trimming instead of reporting them.
    pub skip_blank: bool,
    /// Read all input first and validate on the rayon pool.
    pub parallel: bool,
}

/// Validate one postcode per line from `reader`, feeding each result to the
/// reporter in input order.
pub fn evaluate_reader<R, O, E>(
    reader: R,
    options: EvaluateOptions,
    reporter: &mut Reporter<O, E>,
) -> Result<(), EvaluatorError>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    if options.parallel {
        let mut candidates = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(candidate) = candidate_from_line(&line, idx + 1, options) {
                candidates.push(candidate.to_string());
            }
        }

        logging::debug(&format!(
            "Validating {} postcode(s) in parallel",
            candidates.len()
        ));
        let results: Vec<_> = candidates
            .par_iter()
            .map(|c| validators::validate(c))
            .collect();

        for result in &results {
            reporter.report(result)?;
        }
    } else {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(candidate) = candidate_from_line(&line, idx + 1, options) {
                let result = validators::validate(candidate);
                if logging::enabled(logging::LogLevel::Debug) {
                    logging::debug(&format!(
                        "Line {}: `{}` has {} error(s)",
                        idx + 1,
                        candidate,
                        result.errors.len()
                    ));
                }
                reporter.report(&result)?;
            }
        }
    }

    Ok(())
}

/// Open `path` and evaluate it line by line.
pub fn evaluate_path<O, E>(
    path: &Path,
    options: EvaluateOptions,
    reporter: &mut Reporter<O, E>,
) -> Result<(), EvaluatorError>
where
    O: Write,
    E: Write,
{
    logging::info(&format!("Reading postcodes from {}", path.display()));

    let file = File::open(path).map_err(|source| EvaluatorError::ReadError {
        path: path.display().to_string(),
        source,
    })?;

    evaluate_reader(BufReader::new(file), options, reporter)
}

fn candidate_from_line(line: &str, line_no: usize, options: EvaluateOptions) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() && options.skip_blank {
        logging::debug(&format!("Skipping blank line {}", line_no));
        return None;
    }
    Some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OutputFormat, Summary};
    use std::io::{self, Cursor};

    fn run(input: &str, options: EvaluateOptions) -> Summary {
        let mut reporter = Reporter::new(io::sink(), io::sink(), OutputFormat::Text);
        evaluate_reader(Cursor::new(input), options, &mut reporter).unwrap();
        reporter.summary()
    }

    #[test]
    fn test_blank_lines_are_reported_by_default() {
        let summary = run("EC1A 1BB\n\nM1 1AE\n", EvaluateOptions::default());
        assert_eq!(summary.all, 3);
        assert_eq!(summary.valid, 2);
        assert_eq!(summary.invalid, 1);
    }

    #[test]
    fn test_skip_blank() {
        let options = EvaluateOptions {
            skip_blank: true,
            ..Default::default()
        };
        let summary = run("EC1A 1BB\n   \nM1 1AE\n", options);
        assert_eq!(summary.all, 2);
        assert_eq!(summary.invalid, 0);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let summary = run("  B33 8TH\t\r\n", EvaluateOptions::default());
        assert_eq!(summary.valid, 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let input = "EC1A 1BB\nw1a 0ax\n121A 1BB\nGIR 0AA\nEC1A\ncr2 6xh\n";
        let parallel = EvaluateOptions {
            parallel: true,
            ..Default::default()
        };
        assert_eq!(run(input, parallel), run(input, EvaluateOptions::default()));
    }

    #[test]
    fn test_long_stream_at_default_level() {
        logging::set_log_level(logging::LogLevel::Warning);
        let input = "EC1A 1BB\n".repeat(10_000);
        let summary = run(&input, EvaluateOptions::default());
        assert_eq!(summary.all, 10_000);
        assert_eq!(summary.valid, 10_000);
    }
}
