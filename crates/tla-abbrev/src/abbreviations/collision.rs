use super::generator::CandidateSet;
use std::collections::{HashMap, HashSet};

/// Counts, across all names, how many candidate sets contain each candidate.
pub fn count_occurrences<'a, I>(sets: I) -> HashMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a CandidateSet>,
{
    let mut counts = HashMap::new();
    for set in sets {
        for candidate in set.iter() {
            *counts.entry(candidate).or_insert(0) += 1;
        }
    }
    counts
}

/// Candidates produced by exactly one name. Shared candidates are dropped for every name.
pub fn unique_candidates<'a, I>(sets: I) -> HashSet<&'a str>
where
    I: IntoIterator<Item = &'a CandidateSet>,
{
    count_occurrences(sets)
        .into_iter()
        .filter_map(|(candidate, count)| (count == 1).then_some(candidate))
        .collect()
}
