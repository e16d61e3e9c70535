//! Candidate generation engine
//!
//! Combines facts about a target (tokens) into password candidates. Every
//! ordered selection of 2..=`max_arity + 1` distinct token positions is
//! concatenated and rendered in up to three case styles:
//!
//! - verbatim: `johnsmith`
//! - first character upper-cased: `Johnsmith`
//! - every token title-cased: `JohnSmith`
//!
//! Candidates are produced lazily. Memory stays bounded by the size of one
//! selection no matter how many candidates the token collection yields.

use crate::error::{Error, Result};
use log::debug;
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// Smallest number of tokens joined into one candidate
const MIN_ARITY: usize = 2;

/// Length and arity limits for generated candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min_length: usize,
    max_length: usize,
    max_arity: usize,
}

impl Bounds {
    /// Create bounds, rejecting limits that cannot produce defined output.
    ///
    /// `max_arity` counts the tokens combined on top of the mandatory first
    /// one, so candidates join 2..=`max_arity + 1` tokens.
    pub fn new(min_length: usize, max_length: usize, max_arity: usize) -> Result<Self> {
        if min_length == 0 {
            return Err(Error::InvalidBounds(
                "minimum length must be greater than zero".to_string(),
            ));
        }
        if max_length < min_length {
            return Err(Error::InvalidBounds(format!(
                "maximum length ({}) is below minimum length ({})",
                max_length, min_length
            )));
        }
        if max_arity == 0 {
            return Err(Error::InvalidBounds(
                "at least one additional token must be combined".to_string(),
            ));
        }

        Ok(Self {
            min_length,
            max_length,
            max_arity,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn max_arity(&self) -> usize {
        self.max_arity
    }

    /// Largest number of tokens joined into one candidate
    pub fn max_tokens(&self) -> usize {
        self.max_arity.saturating_add(1)
    }

    /// Check whether a candidate of `length` characters is kept
    #[inline]
    pub fn admits(&self, length: usize) -> bool {
        length >= self.min_length && length <= self.max_length
    }
}

/// Ordered selections of `r` distinct positions out of `n`.
///
/// Selections come out in lexicographic order of their positions:
/// for `n = 3, r = 2` that is `01 02 10 12 20 21`.
#[derive(Debug)]
pub struct Permutations {
    n: usize,
    r: usize,
    indices: Vec<usize>,
    used: Vec<bool>,
    started: bool,
    done: bool,
}

impl Permutations {
    pub fn new(n: usize, r: usize) -> Self {
        Self {
            n,
            r,
            indices: Vec::with_capacity(r),
            used: vec![false; n],
            started: false,
            done: r > n,
        }
    }

    /// Advance to the next selection and return its positions
    pub fn next_selection(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            self.indices.extend(0..self.r);
            self.used[..self.r].iter_mut().for_each(|u| *u = true);
            return Some(&self.indices);
        }

        // Bump the rightmost slot that has a larger free position, then
        // refill the slots after it with the smallest free positions.
        while let Some(last) = self.indices.pop() {
            self.used[last] = false;

            let used = &self.used;
            if let Some(next) = (last + 1..self.n).find(|&i| !used[i]) {
                self.used[next] = true;
                self.indices.push(next);

                let mut free = 0;
                while self.indices.len() < self.r {
                    while self.used[free] {
                        free += 1;
                    }
                    self.used[free] = true;
                    self.indices.push(free);
                }

                return Some(&self.indices);
            }
        }

        self.done = true;
        None
    }
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first character and lower-case the rest
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Render a selection of tokens in every case style.
///
/// The result holds between one and three strings, all pairwise distinct,
/// in verbatim, capitalized, title-cased order.
pub fn render_cases<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    let base: String = parts.iter().map(AsRef::as_ref).collect();
    case_variants(base, parts.iter().map(AsRef::as_ref))
}

fn case_variants<'a>(base: String, parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    let capitalized = capitalize(&base);
    let titled: String = parts.map(title_case).collect();

    let mut variants = Vec::with_capacity(3);
    variants.push(base);
    for rendering in [capitalized, titled] {
        if !variants.contains(&rendering) {
            variants.push(rendering);
        }
    }
    variants
}

/// Number of ordered selections of `n` out of `k` positions, `k!/(k-n)!`.
///
/// Returns `None` when the count does not fit in a `u64`.
pub fn selection_count(k: usize, n: usize) -> Option<u64> {
    if n > k {
        return Some(0);
    }
    (k - n + 1..=k).try_fold(1u64, |acc, factor| acc.checked_mul(factor as u64))
}

/// Total selections examined for `k` tokens across every arity in `bounds`
pub fn total_selections(k: usize, bounds: &Bounds) -> Option<u64> {
    (MIN_ARITY..=bounds.max_tokens().min(k))
        .try_fold(0u64, |acc, n| acc.checked_add(selection_count(k, n)?))
}

/// Lazy sequence of password candidates
#[derive(Debug)]
pub struct Candidates {
    tokens: Vec<String>,
    bounds: Bounds,
    arity: usize,
    last_arity: usize,
    selections: Permutations,
    pending: VecDeque<String>,
    examined: u64,
    accepted: u64,
}

impl Candidates {
    /// Tokens in generation order (sorted by length)
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Selections visited so far
    pub fn selections_examined(&self) -> u64 {
        self.examined
    }

    /// Selections whose joined length fell within the bounds
    pub fn selections_accepted(&self) -> u64 {
        self.accepted
    }

    fn advance_arity(&mut self) -> bool {
        self.arity += 1;
        if self.arity > self.last_arity {
            return false;
        }
        debug!("Combining {} tokens per candidate", self.arity);
        self.selections = Permutations::new(self.tokens.len(), self.arity);
        true
    }
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(candidate) = self.pending.pop_front() {
                return Some(candidate);
            }
            if self.arity > self.last_arity {
                return None;
            }

            let tokens = &self.tokens;
            match self.selections.next_selection() {
                Some(selection) => {
                    self.examined += 1;

                    let base: String = selection.iter().map(|&i| tokens[i].as_str()).collect();
                    if !self.bounds.admits(base.chars().count()) {
                        continue;
                    }

                    self.accepted += 1;
                    let parts = selection.iter().map(|&i| tokens[i].as_str());
                    self.pending.extend(case_variants(base, parts));
                }
                None => {
                    if !self.advance_arity() {
                        return None;
                    }
                }
            }
        }
    }
}

impl FusedIterator for Candidates {}

/// Generate candidates from `tokens` within `bounds`.
///
/// Tokens are stable-sorted by length first; this decides the order of the
/// output, not its content. Identical tokens at different positions are
/// still distinct selections.
pub fn generate<S: AsRef<str>>(tokens: &[S], bounds: Bounds) -> Candidates {
    let mut tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
    tokens.sort_by_key(|t| t.chars().count());

    let last_arity = bounds.max_tokens().min(tokens.len());
    debug!(
        "Generating from {} tokens, {} to {} per candidate, length {}-{}",
        tokens.len(),
        MIN_ARITY,
        last_arity,
        bounds.min_length,
        bounds.max_length
    );

    Candidates {
        selections: Permutations::new(tokens.len(), MIN_ARITY),
        tokens,
        bounds,
        arity: MIN_ARITY,
        last_arity,
        pending: VecDeque::with_capacity(3),
        examined: 0,
        accepted: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_selections(n: usize, r: usize) -> Vec<Vec<usize>> {
        let mut perms = Permutations::new(n, r);
        let mut out = Vec::new();
        while let Some(selection) = perms.next_selection() {
            out.push(selection.to_vec());
        }
        out
    }

    #[test]
    fn test_bounds_validation() {
        assert!(Bounds::new(0, 8, 1).is_err());
        assert!(Bounds::new(8, 6, 1).is_err());
        assert!(Bounds::new(6, 8, 0).is_err());
        assert!(Bounds::new(4, 4, 1).is_ok());

        let bounds = Bounds::new(6, 12, 2).unwrap();
        assert_eq!(bounds.max_tokens(), 3);
        assert!(bounds.admits(6));
        assert!(bounds.admits(12));
        assert!(!bounds.admits(5));
        assert!(!bounds.admits(13));
    }

    #[test]
    fn test_invalid_bounds_error_kind() {
        let err = Bounds::new(10, 5, 1).unwrap_err();
        assert!(matches!(err, Error::InvalidBounds(_)));
    }

    #[test]
    fn test_permutation_order() {
        let selections = collect_selections(3, 2);
        assert_eq!(
            selections,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 2],
                vec![2, 0],
                vec![2, 1],
            ]
        );
    }

    #[test]
    fn test_permutation_counts() {
        for k in 0..6 {
            for n in 1..=k + 1 {
                let expected = selection_count(k, n).unwrap() as usize;
                assert_eq!(collect_selections(k, n).len(), expected, "k={} n={}", k, n);
            }
        }
    }

    #[test]
    fn test_permutations_too_few_positions() {
        assert!(collect_selections(1, 2).is_empty());
        assert!(collect_selections(0, 2).is_empty());
    }

    #[test]
    fn test_selection_count() {
        assert_eq!(selection_count(4, 2), Some(12));
        assert_eq!(selection_count(4, 3), Some(24));
        assert_eq!(selection_count(4, 4), Some(24));
        assert_eq!(selection_count(3, 4), Some(0));
        assert_eq!(selection_count(100, 30), None);
    }

    #[test]
    fn test_total_selections() {
        let bounds = Bounds::new(1, 100, 2).unwrap();
        assert_eq!(total_selections(4, &bounds), Some(12 + 24));
        assert_eq!(total_selections(1, &bounds), Some(0));
    }

    #[test]
    fn test_case_helpers() {
        assert_eq!(capitalize("johnSMITH"), "JohnSMITH");
        assert_eq!(capitalize(""), "");
        assert_eq!(title_case("sMITH"), "Smith");
        assert_eq!(title_case("1990"), "1990");
        assert_eq!(title_case("élan"), "Élan");
    }

    #[test]
    fn test_render_cases_distinct() {
        assert_eq!(render_cases(&["ab", "AB"]), vec!["abAB", "AbAB", "AbAb"]);
        // Capitalizing changes nothing, title-casing does
        assert_eq!(render_cases(&["AB", "ab"]), vec!["ABab", "AbAb"]);
        // Digits and symbols render the same in every style
        assert_eq!(render_cases(&["12", "@"]), vec!["12@"]);
        // Title-casing matches capitalizing
        assert_eq!(render_cases(&["john", "1990"]), vec!["john1990", "John1990"]);
    }

    #[test]
    fn test_two_tokens_single_arity() {
        let bounds = Bounds::new(4, 4, 1).unwrap();
        let output: Vec<String> = generate(&["ab", "cd"], bounds).collect();
        assert_eq!(output, vec!["abcd", "Abcd", "AbCd", "cdab", "Cdab", "CdAb"]);
    }

    #[test]
    fn test_single_token_yields_nothing() {
        let bounds = Bounds::new(1, 100, 1).unwrap();
        assert_eq!(generate(&["x"], bounds).count(), 0);
    }

    #[test]
    fn test_mixed_case_tokens() {
        let bounds = Bounds::new(4, 8, 1).unwrap();
        let output: Vec<String> = generate(&["ab", "AB"], bounds).collect();
        assert_eq!(output, vec!["abAB", "AbAB", "AbAb", "ABab", "AbAb"]);
    }

    #[test]
    fn test_empty_tokens() {
        let bounds = Bounds::new(1, 10, 3).unwrap();
        let tokens: Vec<String> = Vec::new();
        let mut candidates = generate(&tokens, bounds);
        assert!(candidates.next().is_none());
        assert_eq!(candidates.selections_examined(), 0);
    }

    #[test]
    fn test_min_length_unreachable() {
        let bounds = Bounds::new(50, 60, 2).unwrap();
        let mut candidates = generate(&["john", "smith", "1990"], bounds);
        assert!(candidates.next().is_none());
        assert_eq!(candidates.selections_examined(), 6 + 6);
        assert_eq!(candidates.selections_accepted(), 0);
    }

    #[test]
    fn test_arity_beyond_token_count() {
        let bounds = Bounds::new(1, 100, 10).unwrap();
        let mut candidates = generate(&["a1", "b2", "c3"], bounds);
        let count = candidates.by_ref().count();
        assert_eq!(candidates.selections_examined(), 6 + 6);
        assert!(count > 0);
    }

    #[test]
    fn test_examined_matches_formula() {
        let tokens = ["anna", "bob", "1985", "rex"];
        let bounds = Bounds::new(1, 100, 2).unwrap();
        let mut candidates = generate(&tokens, bounds);
        candidates.by_ref().for_each(drop);
        assert_eq!(
            Some(candidates.selections_examined()),
            total_selections(tokens.len(), &bounds)
        );
    }

    #[test]
    fn test_lengths_within_bounds() {
        let tokens = ["jo", "smith", "1990", "#", "rex", "07"];
        let bounds = Bounds::new(6, 9, 3).unwrap();
        for candidate in generate(&tokens, bounds) {
            let len = candidate.chars().count();
            assert!((6..=9).contains(&len), "{} has length {}", candidate, len);
        }
    }

    #[test]
    fn test_sorted_by_length_first() {
        let bounds = Bounds::new(1, 100, 1).unwrap();
        let candidates = generate(&["abc", "d", "ef"], bounds);
        assert_eq!(candidates.tokens(), &["d", "ef", "abc"]);

        let first: Vec<String> = candidates.take(2).collect();
        assert_eq!(first, vec!["def", "Def"]);
    }

    #[test]
    fn test_equal_length_keeps_order() {
        let bounds = Bounds::new(1, 100, 1).unwrap();
        let candidates = generate(&["zz", "aa", "mm"], bounds);
        assert_eq!(candidates.tokens(), &["zz", "aa", "mm"]);
    }

    #[test]
    fn test_duplicate_token_values_are_distinct_selections() {
        let bounds = Bounds::new(1, 100, 1).unwrap();
        let output: Vec<String> = generate(&["7", "7"], bounds).collect();
        assert_eq!(output, vec!["77", "77"]);
    }

    #[test]
    fn test_deterministic() {
        let tokens = ["maria", "07", "1990", "!", "luna"];
        let bounds = Bounds::new(4, 12, 2).unwrap();
        let first: Vec<String> = generate(&tokens, bounds).collect();
        let second: Vec<String> = generate(&tokens, bounds).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lazy_over_large_collection() {
        let tokens: Vec<String> = (0..40).map(|i| format!("t{}", i)).collect();
        let bounds = Bounds::new(1, 1000, 5).unwrap();
        let mut candidates = generate(&tokens, bounds);
        let head: Vec<String> = candidates.by_ref().take(3).collect();
        assert_eq!(head, vec!["t0t1", "T0t1", "T0T1"]);
        assert_eq!(candidates.selections_examined(), 1);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let bounds = Bounds::new(1, 10, 1).unwrap();
        let mut candidates = generate(&["a", "b"], bounds);
        candidates.by_ref().for_each(drop);
        assert!(candidates.next().is_none());
        assert!(candidates.next().is_none());
    }
}
