use std::cmp::Ordering;

use ordered_float::NotNan;

/// Standard competition ranking ("1224") by descending score. Equal scores share the lowest rank
/// of their group and the next distinct score skips the shared positions. NaN scores are ordered
/// after every defined score and receive no rank.
pub fn competition_ranks(scores: &[f64]) -> Vec<Option<usize>> {
    let keys: Vec<Option<NotNan<f64>>> = scores.iter().map(|s| NotNan::new(*s).ok()).collect();
    let sort = permutation::sort_by(&keys, |a, b| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    let sorted = sort.apply_slice(&keys);

    let mut ranks: Vec<Option<usize>> = Vec::with_capacity(sorted.len());
    for (position, key) in sorted.iter().enumerate() {
        let rank = match key {
            None => None,
            Some(_) if position > 0 && sorted[position - 1] == *key => ranks[position - 1],
            Some(_) => Some(position + 1),
        };
        ranks.push(rank);
    }
    sort.inverse().apply_slice_in_place(&mut ranks);
    ranks
}
