//! Exact pattern matching on `&[u8]` slices.
//!
//! - [`kmp`] — Knuth-Morris-Pratt with failure function, O(n+m)
//! - [`kmp_non_overlapping`] — KMP that restarts after each hit, for split/replace
//!
//! All matchers return starting positions and treat an empty pattern as
//! matching nowhere.

/// Knuth-Morris-Pratt exact pattern matching.
///
/// Builds a failure (partial match) table in O(m), then scans in O(n).
/// Total time O(n+m), space O(m).
///
/// Returns starting positions of all exact occurrences, overlapping ones included.
pub fn kmp(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    kmp_scan(text, pattern, true)
}

/// Leftmost, non-overlapping occurrences scanning left to right.
///
/// After each hit the automaton restarts past the matched span, so
/// `kmp_non_overlapping(b"AAAA", b"AA")` yields `[0, 2]`.
pub fn kmp_non_overlapping(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    kmp_scan(text, pattern, false)
}

fn kmp_scan(text: &[u8], pattern: &[u8], overlapping: bool) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || m > n {
        return vec![];
    }

    let fail = failure_table(pattern);

    let mut results = Vec::new();
    let mut q = 0usize;
    for (i, &c) in text.iter().enumerate() {
        while q > 0 && pattern[q] != c {
            q = fail[q - 1];
        }
        if pattern[q] == c {
            q += 1;
        }
        if q == m {
            results.push(i + 1 - m);
            q = if overlapping { fail[q - 1] } else { 0 };
        }
    }
    results
}

/// Build the KMP failure function.
fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut fail = vec![0usize; m];
    let mut k = 0usize;
    for i in 1..m {
        while k > 0 && pattern[k] != pattern[i] {
            k = fail[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
        }
        fail[i] = k;
    }
    fail
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact(text: &[u8], pattern: &[u8], expected: &[usize]) {
        assert_eq!(kmp(text, pattern), expected);
    }

    #[test]
    fn exact_match_at_start() {
        assert_exact(b"ACGTACGT", b"ACGT", &[0, 4]);
    }

    #[test]
    fn exact_match_at_end() {
        assert_exact(b"TTTTACGT", b"ACGT", &[4]);
    }

    #[test]
    fn exact_match_in_middle() {
        assert_exact(b"TTACGTTT", b"ACGT", &[2]);
    }

    #[test]
    fn overlapping_occurrences() {
        assert_exact(b"AAAAAA", b"AA", &[0, 1, 2, 3, 4]);
        assert_exact(b"ACACAC", b"ACA", &[0, 2]);
    }

    #[test]
    fn no_match() {
        assert_exact(b"ACGTACGT", b"TTTT", &[]);
    }

    #[test]
    fn empty_pattern() {
        assert_exact(b"ACGT", b"", &[]);
        assert!(kmp_non_overlapping(b"ACGT", b"").is_empty());
    }

    #[test]
    fn pattern_longer_than_text() {
        assert_exact(b"AC", b"ACGT", &[]);
    }

    #[test]
    fn single_char_pattern() {
        assert_exact(b"AACAA", b"C", &[2]);
    }

    #[test]
    fn full_text_match() {
        assert_exact(b"ACGT", b"ACGT", &[0]);
    }

    #[test]
    fn non_overlapping_skips_matched_span() {
        assert_eq!(kmp_non_overlapping(b"AAAAAA", b"AA"), vec![0, 2, 4]);
        assert_eq!(kmp_non_overlapping(b"AAAAA", b"AA"), vec![0, 2]);
        assert_eq!(kmp_non_overlapping(b"ACACAC", b"ACA"), vec![0]);
    }

    #[test]
    fn non_overlapping_matches_kmp_when_hits_are_disjoint() {
        let text = b"GATCTTGATCAAGATC";
        assert_eq!(kmp_non_overlapping(text, b"GATC"), kmp(text, b"GATC"));
    }
}
