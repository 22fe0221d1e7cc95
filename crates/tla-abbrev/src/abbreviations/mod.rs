mod collision;
mod generator;
mod letter_values;
mod normalizer;
mod report;
mod scorer;
mod selector;

pub use collision::{count_occurrences, unique_candidates};
pub use generator::{generate_candidates, CandidateSet};
pub use letter_values::{LetterValueTable, LetterValuesError};
pub use normalizer::NormalizedName;
pub use report::{output_file_name, AbbreviationReport, OutputFormat, ReportEntry, ReportError};
pub use scorer::{AbbreviationScorer, PositionalScorer, ScoringStrategy, WordMatchScorer};
pub use selector::{select_best, ScoredCandidate, Selection, PLACEHOLDER};

use crate::error::AppError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Failures raised while reading the list of names.
#[derive(Debug, thiserror::Error)]
pub enum NamesError {
    #[error("Error: {} not found.", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read names: {0}")]
    Io(#[from] io::Error),
}

/// Reads one name per line. Each name keeps its `\n` terminator, so a final
/// line without one stays distinct from an otherwise identical earlier line.
pub fn read_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>, NamesError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => NamesError::NotFound {
            path: path.to_path_buf(),
        },
        _ => NamesError::Io(err),
    })?;

    let mut reader = BufReader::new(file);
    let mut names = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.ends_with("\r\n") {
            line.truncate(line.len() - 2);
            line.push('\n');
        }
        names.push(line);
    }
    debug!(count = names.len(), path = %path.display(), "names loaded");
    Ok(names)
}

/// Reads the names, logging the failure and continuing with an empty batch.
pub fn read_names_or_empty<P: AsRef<Path>>(path: P) -> Vec<String> {
    match read_names(path) {
        Ok(names) => names,
        Err(err) => {
            warn!("{err}");
            Vec::new()
        }
    }
}

/// Runs generation, collision filtering, scoring and selection over a batch of names.
pub struct AbbreviationPipeline {
    scorer: Box<dyn AbbreviationScorer>,
    strategy: ScoringStrategy,
}

impl AbbreviationPipeline {
    pub fn new(table: LetterValueTable, strategy: ScoringStrategy) -> Self {
        Self {
            scorer: strategy.scorer(table),
            strategy,
        }
    }

    pub fn strategy(&self) -> ScoringStrategy {
        self.strategy
    }

    /// Scores every name in input order. Identical raw lines, terminator
    /// included, are treated as one name.
    pub fn run<S: AsRef<str>>(&self, names: &[S]) -> AbbreviationReport {
        let mut seen = HashSet::new();
        let names: Vec<NormalizedName> = names
            .iter()
            .map(|raw| raw.as_ref())
            .filter(|raw| seen.insert(*raw))
            .map(NormalizedName::new)
            .collect();

        let candidate_sets: Vec<CandidateSet> = names.iter().map(generate_candidates).collect();
        let valid = unique_candidates(&candidate_sets);

        let entries: Vec<ReportEntry> = names
            .iter()
            .zip(&candidate_sets)
            .map(|(name, candidates)| {
                let scored: Vec<ScoredCandidate> = candidates
                    .iter()
                    .filter(|candidate| valid.contains(candidate))
                    .map(|candidate| {
                        ScoredCandidate::new(candidate, self.scorer.score(candidate, name))
                    })
                    .collect();
                let selection = select_best(&scored);

                debug!(
                    name = %name.cleaned(),
                    generated = candidates.len(),
                    unique = scored.len(),
                    best = ?selection.score(),
                    "abbreviations selected"
                );

                ReportEntry::new(name.display_name(), &selection)
            })
            .collect();

        let report = AbbreviationReport { entries };
        info!(
            names = report.entries.len(),
            placeholders = report.placeholder_count(),
            strategy = %self.strategy,
            "abbreviation batch scored"
        );
        report
    }
}

/// Everything needed to turn a names file into a written report.
#[derive(Debug, Clone)]
pub struct AbbreviationJob {
    pub input_path: PathBuf,
    pub values_path: PathBuf,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub strategy: ScoringStrategy,
}

impl AbbreviationJob {
    /// Input file name as embedded in the output file name.
    pub fn input_file_name(&self) -> String {
        self.input_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input_path.to_string_lossy().into_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Written(PathBuf),
    MissingLetterValues,
}

/// Reads names and letter values, scores the batch and writes the report.
///
/// Without letter values nothing is processed: the surname is never requested
/// and no file is written.
pub fn generate_and_write_abbreviations<F>(
    job: &AbbreviationJob,
    surname: F,
) -> Result<JobOutcome, AppError>
where
    F: FnOnce() -> io::Result<String>,
{
    let names = read_names_or_empty(&job.input_path);
    let table = LetterValueTable::load_or_empty(&job.values_path);

    if table.is_empty() {
        warn!("Abbreviations cannot be generated without letter scores.");
        return Ok(JobOutcome::MissingLetterValues);
    }

    let report = AbbreviationPipeline::new(table, job.strategy).run(&names);
    let surname = surname()?;
    let path = report.write_to(
        &job.output_dir,
        &surname,
        &job.input_file_name(),
        job.format,
    )?;

    info!(path = %path.display(), format = %job.format, "abbreviations written");
    Ok(JobOutcome::Written(path))
}
