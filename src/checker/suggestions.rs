use rayon::prelude::*;

use super::wordset::WordSet;

/// Generate spelling suggestions for a misspelled word.
///
/// Every word in the given sets is a candidate. Candidates whose length
/// differs from the target by more than `max_distance` are pruned before
/// the full distance computation; the rest are ranked by ascending edit
/// distance, with ties broken lexicographically, and capped at `limit`.
/// Candidates beyond `max_distance` are excluded entirely, so the result
/// may be empty — callers render that as "no suggestions".
///
/// Output is deterministic for fixed set contents.
pub fn generate(
    word: &str,
    sets: &[&WordSet],
    max_distance: usize,
    limit: usize,
) -> Vec<String> {
    if word.is_empty() || limit == 0 {
        return Vec::new();
    }

    let target: Vec<char> = word.to_lowercase().chars().collect();
    let candidates: Vec<&str> = sets.iter().flat_map(|set| set.iter()).collect();

    let mut ranked: Vec<(usize, &str)> = candidates
        .par_iter()
        .filter_map(|candidate| {
            bounded_edit_distance(&target, candidate, max_distance)
                .map(|distance| (distance, *candidate))
        })
        .collect();

    ranked.sort_unstable_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    // The same word may appear in several sets; distance is a function of
    // the string, so duplicates are adjacent after the sort.
    ranked.dedup_by(|a, b| a.1 == b.1);
    ranked.truncate(limit);

    ranked.into_iter().map(|(_, w)| w.to_string()).collect()
}

/// Levenshtein distance (insert/delete/substitute, unit cost), bounded by
/// `max`. Returns `None` as soon as the distance provably exceeds the
/// bound, which makes scanning a large dictionary cheap: most candidates
/// are rejected by the length check or an early row minimum.
pub fn bounded_edit_distance(target: &[char], candidate: &str, max: usize) -> Option<usize> {
    let cand: Vec<char> = candidate.chars().collect();
    let (n, m) = (target.len(), cand.len());

    if n.abs_diff(m) > max {
        return None;
    }
    if n == 0 {
        return Some(m);
    }
    if m == 0 {
        return Some(n);
    }

    // Two-row DP over the (n+1) x (m+1) distance matrix.
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0; m + 1];

    for i in 1..=n {
        curr[0] = i;
        let mut row_min = i;

        for j in 1..=m {
            let cost = usize::from(target[i - 1] != cand[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
            row_min = row_min.min(curr[j]);
        }

        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[m];
    (distance <= max).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: &str, b: &str) -> Option<usize> {
        let chars: Vec<char> = a.chars().collect();
        bounded_edit_distance(&chars, b, usize::MAX / 2)
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(distance("", ""), Some(0));
        assert_eq!(distance("", "a"), Some(1));
        assert_eq!(distance("a", ""), Some(1));
        assert_eq!(distance("hello", "hello"), Some(0));
        assert_eq!(distance("hello", "hallo"), Some(1));
        assert_eq!(distance("helo", "hello"), Some(1));
        assert_eq!(distance("kitten", "sitting"), Some(3));
        assert_eq!(distance("hello", "world"), Some(4));
    }

    #[test]
    fn test_bounded_distance_rejects_over_threshold() {
        let target: Vec<char> = "kitten".chars().collect();
        assert_eq!(bounded_edit_distance(&target, "sitting", 3), Some(3));
        assert_eq!(bounded_edit_distance(&target, "sitting", 2), None);
        // length difference alone is enough to reject
        assert_eq!(bounded_edit_distance(&target, "kit", 2), None);
    }

    #[test]
    fn test_ranked_by_distance_then_lexicographic() {
        let main = WordSet::from_iter(["hello", "help", "held"]);
        let suggestions = generate("helo", &[&main], 2, 5);
        // hello is distance 1; help and held are distance 2 and tie
        // lexicographically: held < help.
        assert_eq!(suggestions, vec!["hello", "help", "held"]);
    }

    #[test]
    fn test_limit_respected() {
        let main = WordSet::from_iter(["hello", "help", "held", "hell", "helm"]);
        let suggestions = generate("helo", &[&main], 2, 2);
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_no_candidates_within_threshold() {
        let main = WordSet::from_iter(["xylophone", "quarterback"]);
        assert!(generate("helo", &[&main], 2, 5).is_empty());
    }

    #[test]
    fn test_union_of_sets_deduplicated() {
        let main = WordSet::from_iter(["hello", "help"]);
        let user = WordSet::from_iter(["hello", "helot"]);
        let suggestions = generate("helo", &[&main, &user], 2, 10);
        assert_eq!(suggestions, vec!["hello", "helot", "help"]);
    }

    #[test]
    fn test_deterministic() {
        let main = WordSet::from_iter(["hello", "help", "held", "helm", "hell"]);
        let first = generate("helo", &[&main], 2, 5);
        let second = generate("helo", &[&main], 2, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_case_insensitive_target() {
        let main = WordSet::from_iter(["hello"]);
        assert_eq!(generate("HELO", &[&main], 2, 5), vec!["hello"]);
    }

    #[test]
    fn test_empty_word_or_zero_limit() {
        let main = WordSet::from_iter(["hello"]);
        assert!(generate("", &[&main], 2, 5).is_empty());
        assert!(generate("helo", &[&main], 2, 0).is_empty());
    }
}
