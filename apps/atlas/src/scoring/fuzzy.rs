//! Token-set fuzzy ratio: order-insensitive, tolerant of extra tokens on either side.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;

/// Indel similarity in [0, 100]: `2 * LCS / (|a| + |b|)`, over chars.
/// Equal strings score 100; an empty string against a non-empty one scores 0.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    indel::normalized_similarity(a.chars(), b.chars()) * 100.0
}

/// Compares the sorted token intersection against each side's intersection + remainder,
/// and returns the best pairwise `ratio`, rounded half to even. 0 when either side has no tokens.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let sect = join(tokens_a.intersection(&tokens_b));
    let only_a = join(tokens_a.difference(&tokens_b));
    let only_b = join(tokens_b.difference(&tokens_a));

    let combined_a = format!("{sect} {only_a}").trim().to_string();
    let combined_b = format!("{sect} {only_b}").trim().to_string();

    let best = [
        ratio(&sect, &combined_a),
        ratio(&sect, &combined_b),
        ratio(&combined_a, &combined_b),
    ]
    .into_iter()
    .fold(0.0_f64, f64::max);

    best.round_ties_even() as u32
}

fn join<'a, 'b: 'a>(tokens: impl Iterator<Item = &'a &'b str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}
