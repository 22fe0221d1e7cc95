/// Written in place of abbreviations when a name has no valid candidate.
pub const PLACEHOLDER: &str = "_____";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub candidate: String,
    pub score: i64,
}

impl ScoredCandidate {
    pub fn new(candidate: impl Into<String>, score: i64) -> Self {
        Self {
            candidate: candidate.into(),
            score,
        }
    }
}

/// Outcome of picking the best abbreviations for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Winners { abbreviations: Vec<String>, score: i64 },
    Placeholder,
}

impl Selection {
    pub fn abbreviations(&self) -> Vec<&str> {
        match self {
            Selection::Winners { abbreviations, .. } => {
                abbreviations.iter().map(String::as_str).collect()
            }
            Selection::Placeholder => vec![PLACEHOLDER],
        }
    }

    pub fn score(&self) -> Option<i64> {
        match self {
            Selection::Winners { score, .. } => Some(*score),
            Selection::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Selection::Placeholder)
    }
}

/// Keeps every candidate tied at the minimum score, in the order given.
pub fn select_best(scored: &[ScoredCandidate]) -> Selection {
    let Some(best) = scored.iter().map(|entry| entry.score).min() else {
        return Selection::Placeholder;
    };

    let abbreviations = scored
        .iter()
        .filter(|entry| entry.score == best)
        .map(|entry| entry.candidate.clone())
        .collect();

    Selection::Winners {
        abbreviations,
        score: best,
    }
}
