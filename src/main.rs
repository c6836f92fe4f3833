use chrono::NaiveDateTime;
use clap::Parser;
use longreq::error::Result;
use longreq::utils::constants::{DEFAULT_LIMIT, DEFAULT_PRECISION, READ_BUFFER_SIZE};
use longreq::utils::{open_log_reader, parse_date, Logger};
use longreq::{log, log_error, write_report, AnalyzerOptions, LongRequestLog, ParseWindow, Subject};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "longreq", version, about = "Parse long request log")]
struct Cli {
    /// What the subject of the statistics records should be
    #[arg(long, value_enum, default_value_t = Subject::Requests)]
    subject: Subject,

    /// How many records should be displayed at most
    #[arg(long, default_value_t = DEFAULT_LIMIT as u64, value_parser = clap::value_parser!(u64).range(1..))]
    limit: u64,

    /// Number of lines to use for fingerprinting tracebacks
    #[arg(long, default_value_t = DEFAULT_PRECISION as u64, value_parser = clap::value_parser!(u64).range(1..))]
    precision: u64,

    /// Earliest record to include (YYYY-MM-DD HH:MM:SS)
    #[arg(long, value_parser = parse_date)]
    start: Option<NaiveDateTime>,

    /// Latest record to include, exclusive (YYYY-MM-DD HH:MM:SS)
    #[arg(long, value_parser = parse_date)]
    end: Option<NaiveDateTime>,

    /// Also append diagnostics to this file
    #[arg(long)]
    log_file: Option<String>,

    /// Print parse statistics to stderr
    #[arg(short, long)]
    verbose: bool,

    /// The log file that will be parsed, `-` for stdin
    inputfile: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    Logger::init(cli.log_file.as_deref(), cli.verbose);

    let status = match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("Error: {e}");
            ExitCode::FAILURE
        }
    };

    if let Err(e) = Logger::flush() {
        eprintln!("failed to flush log file: {e}");
    }
    status
}

fn run(cli: &Cli) -> Result<()> {
    let options = AnalyzerOptions {
        limit: usize::try_from(cli.limit).unwrap_or(usize::MAX),
        precision: usize::try_from(cli.precision).unwrap_or(usize::MAX),
        window: ParseWindow::from_bounds(cli.start, cli.end)?,
    };

    let mut reader = open_log_reader(&cli.inputfile, READ_BUFFER_SIZE)?;
    log!("Parsing {}", cli.inputfile);

    let parse_start = Instant::now();
    let mut log = LongRequestLog::new(options.window);
    log.parse_reader(&mut reader)?;

    let stats = log.stats();
    log!(
        "Parsed {} lines in {:.3}s: {} progress headers, {} requests, {} snapshots, {} filtered, {} malformed",
        stats.lines,
        parse_start.elapsed().as_secs_f64(),
        stats.headers,
        log.requests().len(),
        log.snapshot_count(),
        stats.filtered,
        stats.malformed
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &log, cli.subject, &options)?;
    out.flush()?;
    Ok(())
}
