//! Gestalt (Ratcliff/Obershelp) sequence similarity.
//!
//! The ratio of two strings is `2 * M / T`, where `T` is the total number
//! of characters in both strings and `M` the number of characters covered by
//! matching blocks. Blocks are found by taking the longest common contiguous
//! run and recursing on the pieces to its left and to its right.

use std::collections::HashMap;

/// Minimum query length before popular characters stop seeding matches.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A matcher that indexes one string (the query) so it can be compared
/// against many candidates cheaply.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    b: Vec<char>,
    /// Positions of every non-popular character of `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

/// A run of `size` equal characters at `a[a_start..]` and `b[b_start..]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a_start: usize,
    b_start: usize,
    size: usize,
}

impl SequenceMatcher {
    /// Indexes `query` for repeated comparisons.
    #[must_use]
    pub fn new(query: &str) -> Self {
        let b: Vec<char> = query.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { b, b2j }
    }

    /// Length of the indexed query in characters.
    #[must_use]
    pub fn query_len(&self) -> usize {
        self.b.len()
    }

    /// Cheap upper bound on [`ratio`](Self::ratio) for a candidate of
    /// `candidate_len` characters.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio_upper_bound(&self, candidate_len: usize) -> f64 {
        let total = candidate_len + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * candidate_len.min(self.b.len()) as f64 / total as f64
    }

    /// Similarity of `candidate` to the indexed query, in `[0.0, 1.0]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self, candidate: &str) -> f64 {
        let a: Vec<char> = candidate.chars().collect();
        let total = a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matching_chars(&a) as f64 / total as f64
    }

    fn matching_chars(&self, a: &[char]) -> usize {
        let mut matched = 0;
        let mut pending = vec![(0, a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.find_longest_match(a, alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            matched += block.size;

            if alo < block.a_start && blo < block.b_start {
                pending.push((alo, block.a_start, blo, block.b_start));
            }
            let a_end = block.a_start + block.size;
            let b_end = block.b_start + block.size;
            if a_end < ahi && b_end < bhi {
                pending.push((a_end, ahi, b_end, bhi));
            }
        }

        matched
    }

    /// Longest block of `a[alo..ahi]` equal to some block of `b[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, then
    /// the one starting earliest in `b`.
    fn find_longest_match(
        &self,
        a: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> Block {
        let mut best = Block {
            a_start: alo,
            b_start: blo,
            size: 0,
        };

        // j2len[j] = length of the longest block ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(c) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best.size {
                        best = Block {
                            a_start: i + 1 - k,
                            b_start: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            j2len = next;
        }

        // Popular characters never seed a block but may still extend one.
        while best.a_start > alo
            && best.b_start > blo
            && a[best.a_start - 1] == self.b[best.b_start - 1]
        {
            best.a_start -= 1;
            best.b_start -= 1;
            best.size += 1;
        }
        while best.a_start + best.size < ahi
            && best.b_start + best.size < bhi
            && a[best.a_start + best.size] == self.b[best.b_start + best.size]
        {
            best.size += 1;
        }

        best
    }
}

/// Similarity of `candidate` to `query`, in `[0.0, 1.0]`.
///
/// Two empty strings are identical (`1.0`).
#[must_use]
pub fn similarity_ratio(candidate: &str, query: &str) -> f64 {
    SequenceMatcher::new(query).ratio(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_identical_and_disjoint() {
        assert_close(similarity_ratio("Helsinki", "Helsinki"), 1.0);
        assert_close(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_close(similarity_ratio("", ""), 1.0);
        assert_close(similarity_ratio("Paris", ""), 0.0);
        assert_close(similarity_ratio("", "Paris"), 0.0);
    }

    #[test]
    fn test_known_ratios() {
        assert_close(similarity_ratio("abcd", "bcde"), 0.75);
        // "Hels" + "nki" out of 8 + 7 characters
        assert_close(similarity_ratio("Helsinki", "Helsnki"), 14.0 / 15.0);
        // "pple" out of 5 + 5
        assert_close(similarity_ratio("apple", "ppley"), 0.8);
    }

    #[test]
    fn test_ratio_is_case_sensitive() {
        assert!(similarity_ratio("UTC", "UTC") > similarity_ratio("UTC", "utc"));
        assert_close(similarity_ratio("UTC", "utc"), 0.0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // Å and ö are one character each
        assert_close(similarity_ratio("Åland", "Åland"), 1.0);
        assert_close(similarity_ratio("Köln", "Koln"), 0.75);
    }

    #[test]
    fn test_matcher_is_reusable() {
        let matcher = SequenceMatcher::new("Lon");
        let first = matcher.ratio("London");
        let second = matcher.ratio("London");
        assert_close(first, second);
        assert_eq!(matcher.query_len(), 3);
    }

    #[test]
    fn test_upper_bound_never_below_ratio() {
        let matcher = SequenceMatcher::new("Helsnki");
        for candidate in ["Helsinki", "H", "Port of Spain", ""] {
            let bound = matcher.ratio_upper_bound(candidate.chars().count());
            assert!(bound >= matcher.ratio(candidate));
        }
    }

    #[test]
    fn test_long_queries_still_match() {
        let query = "a".repeat(250);
        let candidate = "a".repeat(10);
        // Every 'a' is popular, yet the extension pass still finds a block.
        let ratio = SequenceMatcher::new(&query).ratio(&candidate);
        assert!(ratio > 0.0);
    }
}
