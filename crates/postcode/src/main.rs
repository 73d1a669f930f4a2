use clap::{Parser, ValueEnum};
use evaluator::{EvaluateOptions, EvaluatorError, OutputFormat, Reporter, Summary};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "validate_uk_postcode",
    about = "UK postcode validator",
    version,
    long_about = "Reads one candidate postcode per line and reports whether it is a valid UK postcode.\n\nExamples:\n  echo 'ec1a 1bb' | validate_uk_postcode          # Validate postcodes from stdin\n  validate_uk_postcode postcodes.txt              # Validate every line of a file\n  validate_uk_postcode --format json postcodes.txt  # Emit JSON lines\n  validate_uk_postcode --strict postcodes.txt     # Exit with 1 if anything is invalid"
)]
struct Cli {
    /// Files to read postcodes from (defaults to stdin, `-` also means stdin)
    input: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Ignore blank lines instead of reporting them as invalid
    #[arg(long)]
    skip_blank: bool,

    /// Read all input up front and validate in parallel
    #[arg(long)]
    parallel: bool,

    /// Exit with status 1 if any postcode is invalid
    #[arg(long)]
    strict: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Run in verbose mode with detailed output
    #[arg(short, long)]
    verbose: bool,

    /// Run in debug mode with per-line details
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Validate every input source in order and print the totals.
///
/// `stdin` is read for `-` and when no input files are given.
fn run<R, O, E>(cli: &Cli, mut stdin: R, out: O, err: E) -> Result<Summary, EvaluatorError>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let options = EvaluateOptions {
        skip_blank: cli.skip_blank,
        parallel: cli.parallel,
    };
    let mut reporter = Reporter::new(out, err, cli.format.into());

    if cli.input.is_empty() {
        logging::info("Reading postcodes from stdin");
        evaluator::evaluate_reader(&mut stdin, options, &mut reporter)?;
    }

    for path in &cli.input {
        if path.as_os_str() == "-" {
            logging::info("Reading postcodes from stdin");
            evaluator::evaluate_reader(&mut stdin, options, &mut reporter)?;
        } else {
            evaluator::evaluate_path(path, options, &mut reporter)?;
        }
    }

    reporter.finish()
}

fn apply_color(cli: &Cli) {
    if cli.no_color {
        colored::control::set_override(false);
    }
}

fn exit_code(cli: &Cli, outcome: &Result<Summary, EvaluatorError>) -> i32 {
    match outcome {
        Ok(summary) if cli.strict && summary.invalid > 0 => 1,
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn write_failure<W: Write>(err: &mut W, e: &EvaluatorError) -> io::Result<()> {
    writeln!(err, "Error: {}", e)
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        logging::set_log_level(logging::LogLevel::Debug);
        logging::debug("Debug mode enabled - showing detailed logs");
    } else if cli.verbose {
        logging::set_log_level(logging::LogLevel::Info);
        logging::info("Verbose mode enabled");
    } else {
        logging::set_log_level(logging::LogLevel::Warning);
    }

    apply_color(&cli);

    let outcome = run(&cli, io::stdin().lock(), io::stdout().lock(), io::stderr().lock());
    match &outcome {
        Ok(summary) => {
            logging::info(&format!(
                "Checked {} postcode(s): {} valid, {} invalid",
                summary.all, summary.valid, summary.invalid
            ));
            if cli.strict && summary.invalid > 0 {
                logging::warning(&format!(
                    "{} invalid postcode(s) in strict mode",
                    summary.invalid
                ));
            }
        }
        Err(e) => {
            logging::error(&format!("Validation aborted: {}", e));
            let _ = write_failure(&mut io::stderr(), e);
        }
    }

    std::process::exit(exit_code(&cli, &outcome));
}
