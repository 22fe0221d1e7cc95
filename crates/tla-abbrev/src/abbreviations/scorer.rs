use super::letter_values::LetterValueTable;
use super::normalizer::NormalizedName;
use std::fmt;
use std::str::FromStr;

const WORD_INITIAL_COST: i64 = 0;
const WORD_FINAL_COST: i64 = 5;
const WORD_FINAL_E_COST: i64 = 20;

/// Scores a candidate against the name that produced it. Lower is better;
/// negative letter values can push a score below zero.
pub trait AbbreviationScorer {
    fn score(&self, candidate: &str, name: &NormalizedName) -> i64;
}

/// Selects which scorer a pipeline runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringStrategy {
    #[default]
    WordMatch,
    Positional,
}

impl ScoringStrategy {
    pub fn label(self) -> &'static str {
        match self {
            ScoringStrategy::WordMatch => "word-match",
            ScoringStrategy::Positional => "positional",
        }
    }

    pub fn scorer(self, table: LetterValueTable) -> Box<dyn AbbreviationScorer> {
        match self {
            ScoringStrategy::WordMatch => Box::new(WordMatchScorer::new(table)),
            ScoringStrategy::Positional => Box::new(PositionalScorer::new(table)),
        }
    }
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScoringStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "word-match" | "word_match" | "words" => Ok(Self::WordMatch),
            "positional" | "position" => Ok(Self::Positional),
            other => Err(format!(
                "unknown scoring strategy '{other}' (expected word-match or positional)"
            )),
        }
    }
}

/// Rewards letters that start a later word and penalises trailing letters,
/// falling back to a position cost inside the first multi-letter word.
#[derive(Debug, Clone)]
pub struct WordMatchScorer {
    table: LetterValueTable,
}

impl WordMatchScorer {
    pub fn new(table: LetterValueTable) -> Self {
        Self { table }
    }

    fn letter_cost(&self, letter: char, words: &[String]) -> i64 {
        let initial_from = if words.len() >= 2 { 1 } else { 0 };
        if words
            .iter()
            .skip(initial_from)
            .any(|word| word.chars().next() == Some(letter))
        {
            return WORD_INITIAL_COST;
        }

        if words.iter().any(|word| word.chars().last() == Some(letter)) {
            return if letter == 'E' {
                WORD_FINAL_E_COST
            } else {
                WORD_FINAL_COST
            };
        }

        let Some(word) = words.iter().find(|word| word.chars().count() > 1) else {
            return 0;
        };

        let mut rest = word.chars().skip(1);
        let position_cost = if rest.next() == Some(letter) {
            1
        } else if rest.next() == Some(letter) {
            2
        } else {
            3
        };

        position_cost + self.table.lookup(letter)
    }
}

impl AbbreviationScorer for WordMatchScorer {
    fn score(&self, candidate: &str, name: &NormalizedName) -> i64 {
        candidate
            .chars()
            .skip(1)
            .map(|letter| self.letter_cost(letter, name.words()))
            .sum()
    }
}

/// Scores purely by position: the second letter is cheap unless it is `E`,
/// the third costs 2 and anything later pays its letter value on top of 3.
#[derive(Debug, Clone)]
pub struct PositionalScorer {
    table: LetterValueTable,
}

impl PositionalScorer {
    pub fn new(table: LetterValueTable) -> Self {
        Self { table }
    }

    pub fn letter_cost(&self, letter: char, position: usize) -> i64 {
        match position {
            0 => 0,
            1 if letter == 'E' => 20,
            1 => 1,
            2 => 2,
            _ => 3 + self.table.lookup(letter),
        }
    }
}

impl AbbreviationScorer for PositionalScorer {
    fn score(&self, candidate: &str, _name: &NormalizedName) -> i64 {
        candidate
            .chars()
            .enumerate()
            .map(|(position, letter)| self.letter_cost(letter, position))
            .sum()
    }
}
