//! Edit-distance string ratios used for approximate name matching
//!
//! Scores are integers on a 0–100 scale where 100 means identical. Both
//! functions compare Unicode scalar values, not bytes.

/// Length of the longest common subsequence of `a` and `b`
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn ratio_chars(a: &[char], b: &[char]) -> u8 {
    let total = a.len() + b.len();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    // 100 * 2M / total, halves rounded to even
    let scaled = 200 * lcs_len(a, b);
    let (quotient, remainder) = (scaled / total, scaled % total);
    let rounded = if 2 * remainder > total || (2 * remainder == total && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    rounded as u8
}

/// Indel similarity ratio of two strings.
///
/// `round(100 * 2M / (|a| + |b|))` where `M` is the longest common
/// subsequence, i.e. one minus the normalized insert/delete distance.
/// Halves round to even. Returns 0 when either string is empty.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best [`ratio`] of the shorter string against every same-length window of
/// the longer one. Returns 0 when either string is empty.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return 0;
    }

    let mut best = 0;
    for window in longer.windows(shorter.len()) {
        best = best.max(ratio_chars(&shorter, window));
        if best == 100 {
            break;
        }
    }
    best
}
