use super::selector::Selection;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const OUTPUT_SUFFIX: &str = "3letterabbreviations";
const CSV_HEADER: [&str; 3] = ["name", "abbreviations", "score"];

/// Output error raised while rendering or persisting a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write abbreviations: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(label)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format '{other}' (expected text, csv or json)"
            )),
        }
    }
}

/// Winning abbreviations for one input name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub abbreviations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
}

impl ReportEntry {
    pub fn new(name: impl Into<String>, selection: &Selection) -> Self {
        Self {
            name: name.into(),
            abbreviations: selection
                .abbreviations()
                .into_iter()
                .map(str::to_string)
                .collect(),
            score: selection.score(),
        }
    }

    /// The abbreviation line of the text report. The placeholder is written
    /// with a space between each of its characters.
    fn text_line(&self) -> String {
        if self.score.is_none() {
            let letters: Vec<String> = self
                .abbreviations
                .concat()
                .chars()
                .map(String::from)
                .collect();
            return letters.join(" ");
        }
        self.abbreviations.join(" ")
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    abbreviations: String,
    score: Option<i64>,
}

/// Per-name results of one pipeline run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AbbreviationReport {
    pub entries: Vec<ReportEntry>,
}

impl AbbreviationReport {
    pub fn entry(&self, name: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn placeholder_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.score.is_none())
            .count()
    }

    pub fn render<W: Write>(&self, format: OutputFormat, writer: W) -> Result<(), ReportError> {
        match format {
            OutputFormat::Text => self.render_text(writer),
            OutputFormat::Csv => self.render_csv(writer),
            OutputFormat::Json => self.render_json(writer),
        }
    }

    /// Writes the report to `{dir}/{surname}_{input}_3letterabbreviations.{ext}`.
    pub fn write_to(
        &self,
        dir: &Path,
        surname: &str,
        input_file_name: &str,
        format: OutputFormat,
    ) -> Result<PathBuf, ReportError> {
        let path = dir.join(output_file_name(surname, input_file_name, format));
        let mut writer = BufWriter::new(File::create(&path)?);
        self.render(format, &mut writer)?;
        writer.flush()?;
        Ok(path)
    }

    fn render_text<W: Write>(&self, mut writer: W) -> Result<(), ReportError> {
        for entry in &self.entries {
            writeln!(writer, "{}", entry.name)?;
            writeln!(writer, "{}", entry.text_line())?;
            writeln!(writer)?;
        }
        Ok(())
    }

    fn render_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(CSV_HEADER)?;
        for entry in &self.entries {
            csv_writer.serialize(CsvRow {
                name: &entry.name,
                abbreviations: entry.abbreviations.join(" "),
                score: entry.score,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    fn render_json<W: Write>(&self, mut writer: W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut writer, &self.entries)?;
        writeln!(writer)?;
        Ok(())
    }
}

pub fn output_file_name(surname: &str, input_file_name: &str, format: OutputFormat) -> String {
    format!(
        "{surname}_{input_file_name}_{OUTPUT_SUFFIX}.{}",
        format.extension()
    )
}
