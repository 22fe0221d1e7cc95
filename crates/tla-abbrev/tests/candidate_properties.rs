use tla_abbrev::abbreviations::{
    count_occurrences, generate_candidates, select_best, unique_candidates, AbbreviationScorer,
    LetterValueTable, NormalizedName, PositionalScorer, ScoredCandidate, Selection,
    WordMatchScorer,
};

const NAMES: &[&str] = &[
    "Heathrow",
    "Gatwick",
    "Los Angeles",
    "St. John's (Newfoundland)",
    "Mary-Anne",
    "Jo",
    "Oslo",
    "Osaka",
];

fn letter_values() -> LetterValueTable {
    ('A'..='Z').zip((0..26i64).map(|n| n % 7)).collect()
}

#[test]
fn short_names_generate_exactly_themselves() {
    for raw in ["Jo", "rio", "a-b", "(x)"] {
        let name = NormalizedName::new(raw);
        let generated = generate_candidates(&name);
        let candidates: Vec<&str> = generated.iter().collect();
        assert_eq!(candidates, [name.cleaned()], "raw input {raw:?}");
    }
}

#[test]
fn spaceless_names_with_distinct_letters_hit_the_pair_bound() {
    let name = NormalizedName::new("Frankly");
    let len = name.cleaned().chars().count();
    assert_eq!(generate_candidates(&name).len(), (len - 1) * (len - 2) / 2);
}

#[test]
fn shared_candidates_are_excluded_for_both_names() {
    let oslo = generate_candidates(&NormalizedName::new("Oslo"));
    let oslob = generate_candidates(&NormalizedName::new("Oslob"));

    let counts = count_occurrences([&oslo, &oslob]);
    let valid = unique_candidates([&oslo, &oslob]);
    for (candidate, count) in counts {
        assert_eq!(valid.contains(candidate), count == 1, "candidate {candidate}");
    }

    for shared in ["OSL", "OSO", "OLO"] {
        assert!(oslo.contains(shared) && oslob.contains(shared));
        assert!(!valid.contains(shared));
    }
    assert!(valid.contains("OSB"));
    assert_eq!(unique_candidates([&oslob, &oslo]), valid);
}

#[test]
fn scores_are_stable_and_ignore_the_seed_letter() {
    let word_match = WordMatchScorer::new(letter_values());
    let positional = PositionalScorer::new(letter_values());
    let scorers: [&dyn AbbreviationScorer; 2] = [&word_match, &positional];

    for raw in NAMES {
        let name = NormalizedName::new(raw);
        for candidate in generate_candidates(&name).iter() {
            for scorer in scorers {
                let score = scorer.score(candidate, &name);
                assert_eq!(score, scorer.score(candidate, &name));

                let mut reseeded = "Z".to_string();
                reseeded.extend(candidate.chars().skip(1));
                assert_eq!(scorer.score(&reseeded, &name), score, "{raw}: {candidate}");
            }
        }
    }
}

#[test]
fn selection_returns_all_and_only_minimum_candidates() {
    let scorer = WordMatchScorer::new(letter_values());
    for raw in NAMES {
        let name = NormalizedName::new(raw);
        let scored: Vec<ScoredCandidate> = generate_candidates(&name)
            .iter()
            .map(|candidate| ScoredCandidate::new(candidate, scorer.score(candidate, &name)))
            .collect();

        match select_best(&scored) {
            Selection::Placeholder => assert!(scored.is_empty()),
            Selection::Winners {
                abbreviations,
                score,
            } => {
                let minimum = scored.iter().map(|entry| entry.score).min();
                assert_eq!(Some(score), minimum);
                let expected: Vec<String> = scored
                    .iter()
                    .filter(|entry| entry.score == score)
                    .map(|entry| entry.candidate.clone())
                    .collect();
                assert_eq!(abbreviations, expected);
            }
        }
    }
}
