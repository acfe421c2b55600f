//! keydiff - key-based reconciliation of delimited data files

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use termcolor::ColorChoice;

use keydiff::config::{parse_delimiter, Config, OutputFormat};
use keydiff::diff::compare;
use keydiff::output::OutputFactory;
use keydiff::ReconError;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliColor {
    Never,
    Auto,
    Always,
}

impl From<CliColor> for ColorChoice {
    fn from(c: CliColor) -> Self {
        match c {
            CliColor::Never => ColorChoice::Never,
            CliColor::Auto => ColorChoice::Auto,
            CliColor::Always => ColorChoice::Always,
        }
    }
}

/// Compare two delimited files row-by-row using a composite key
#[derive(Parser, Debug)]
#[command(name = "keydiff")]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Comma-separated list of the two files to compare: reference,subject
    #[arg(short, long, value_name = "FILE_LIST", allow_hyphen_values = true)]
    files: String,

    /// Comma-separated list of key columns
    #[arg(short, long, value_name = "KEY_LIST", allow_hyphen_values = true)]
    keys: Option<String>,

    /// Tolerance for numeric comparisons [default: 0.01]
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    precision: Option<String>,

    /// Comma-separated list of columns excluded from comparison
    #[arg(short = 'x', long, value_name = "EXCLUDE_LIST", allow_hyphen_values = true)]
    exclude: Option<String>,

    /// Field delimiter (single character)
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: CliOutputFormat,

    /// Colorize text output
    #[arg(long, value_enum, default_value = "never")]
    color: CliColor,

    /// Append reconciliation totals to the report
    #[arg(long)]
    summary: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(ReconError::InvalidArgumentShape(String::new()).exit_code()),
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<ReconError>()
                .map(ReconError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_lists(
        &cli.files,
        cli.keys.as_deref(),
        cli.precision.as_deref(),
        cli.exclude.as_deref(),
    )?
    .with_delimiter(parse_delimiter(&cli.delimiter)?)
    .with_output_format(cli.format.into())
    .with_color(cli.color.into())
    .with_summary(cli.summary);

    log::debug!("{:?}", config);

    let mut out = OutputFactory::stdout(&config);
    compare(&config, out.as_mut())?;
    Ok(())
}
