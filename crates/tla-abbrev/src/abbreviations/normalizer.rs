const STRIPPED: [char; 7] = ['\n', '+', '(', ')', ',', ':', '\''];

/// A name cleaned once and shared by generation, collision counting and scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    raw: String,
    cleaned: String,
    words: Vec<String>,
}

impl NormalizedName {
    pub fn new(raw: &str) -> Self {
        let cleaned = clean(raw);
        let words = cleaned.split_whitespace().map(str::to_string).collect();

        Self {
            raw: raw.to_string(),
            cleaned,
            words,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Upper-cased name with punctuation removed and hyphens turned into spaces.
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The raw line as it appears in the output file.
    pub fn display_name(&self) -> String {
        self.raw.replace(['\n', '\r'], "")
    }
}

fn clean(value: &str) -> String {
    value
        .replace(STRIPPED, "")
        .replace('-', " ")
        .to_uppercase()
}
