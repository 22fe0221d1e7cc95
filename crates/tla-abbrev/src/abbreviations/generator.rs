use super::normalizer::NormalizedName;
use std::collections::HashSet;

/// De-duplicated candidates kept in the order they were first generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn insert(&mut self, candidate: String) -> bool {
        if self.seen.contains(&candidate) {
            return false;
        }
        self.seen.insert(candidate.clone());
        self.ordered.push(candidate);
        true
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Enumerates every candidate for a name.
///
/// Names longer than three characters are always anchored at the first
/// character of the cleaned string and combine any two later non-space
/// characters, including pairs that cross word boundaries. Shorter names are
/// their own single candidate.
pub fn generate_candidates(name: &NormalizedName) -> CandidateSet {
    let chars: Vec<char> = name.cleaned().chars().collect();
    let mut candidates = CandidateSet::default();

    match chars.len() {
        0 => {}
        1..=3 => {
            candidates.insert(name.cleaned().to_string());
        }
        len => {
            let seed = chars[0];
            for j in 1..len {
                if chars[j] == ' ' {
                    continue;
                }
                for k in (j + 1)..len {
                    if chars[k] == ' ' {
                        continue;
                    }
                    candidates.insert([seed, chars[j], chars[k]].iter().collect());
                }
            }
        }
    }

    candidates
}
