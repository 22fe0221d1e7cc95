use crate::prompt::{ask, INPUT_FILE_PROMPT, SURNAME_PROMPT};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tla_abbrev::abbreviations::{
    generate_and_write_abbreviations, AbbreviationJob, JobOutcome, OutputFormat, ScoringStrategy,
};
use tla_abbrev::config::AppConfig;
use tla_abbrev::error::AppError;
use tla_abbrev::telemetry;
use tracing::debug;

#[derive(Parser, Debug, Default)]
#[command(
    name = "tla-abbrev",
    about = "Generate three-letter abbreviations for a list of names",
    version
)]
pub(crate) struct Cli {
    /// Names file, one name per line (prompted for when omitted)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Surname used to name the output file (prompted for when omitted)
    #[arg(long)]
    pub(crate) surname: Option<String>,
    /// Override the configured letter values file
    #[arg(long)]
    pub(crate) values: Option<PathBuf>,
    /// Override the configured output directory
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Output format: text, csv or json
    #[arg(long, value_parser = parse_format)]
    pub(crate) format: Option<OutputFormat>,
    /// Scoring strategy: word-match or positional
    #[arg(long, value_parser = parse_strategy)]
    pub(crate) strategy: Option<ScoringStrategy>,
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    raw.parse()
}

fn parse_strategy(raw: &str) -> Result<ScoringStrategy, String> {
    raw.parse()
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = apply_overrides(AppConfig::load()?, &cli);
    telemetry::init(&config.telemetry)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    execute(cli, &config, &mut input, &mut output)
}

fn apply_overrides(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(values) = &cli.values {
        config.letter_values.path = values.clone();
    }
    if let Some(strategy) = cli.strategy {
        config.letter_values.strategy = strategy;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.dir = dir.clone();
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    config
}

pub(crate) fn execute<R: BufRead, W: Write>(
    cli: Cli,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let input_path = match cli.input {
        Some(path) => path,
        None => PathBuf::from(ask(input, output, INPUT_FILE_PROMPT)?),
    };

    let job = AbbreviationJob {
        input_path,
        values_path: config.letter_values.path.clone(),
        output_dir: config.output.dir.clone(),
        format: config.output.format,
        strategy: config.letter_values.strategy,
    };
    debug!(?job, "starting abbreviation job");

    let surname = cli.surname;
    let outcome = generate_and_write_abbreviations(&job, || match surname {
        Some(surname) => Ok(surname),
        None => ask(input, output, SURNAME_PROMPT),
    })?;

    if let JobOutcome::Written(path) = outcome {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        writeln!(output, "Abbreviations written to {file_name}")?;
    }

    Ok(())
}
