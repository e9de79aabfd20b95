//! Similarity scorers and their weighted composition.
//!
//! Four independent scorers each map a pair of normalized strings to
//! `[0, 1]`; [`composite`] combines them with fixed weights into a single
//! confidence value. All scorers treat Unicode scalar values as character
//! positions.

/// Weight of [`exact_substring`] in the composite score.
pub const EXACT_WEIGHT: f64 = 0.4;
/// Weight of [`edit_distance`] in the composite score.
pub const EDIT_WEIGHT: f64 = 0.3;
/// Weight of [`jaro_winkler`] in the composite score.
pub const SIMILARITY_WEIGHT: f64 = 0.2;
/// Weight of [`token_match`] in the composite score.
pub const TOKEN_WEIGHT: f64 = 0.1;

/// Minimum Jaro score before the Winkler prefix boost applies.
const WINKLER_BOOST_FLOOR: f64 = 0.7;
/// Scaling factor per common-prefix character.
const WINKLER_PREFIX_SCALE: f64 = 0.1;
/// Prefix length considered by the Winkler boost.
const WINKLER_MAX_PREFIX: usize = 4;
/// Edit-distance score above which two tokens count as a typo'd match.
const TOKEN_EDIT_THRESHOLD: f64 = 0.8;

/// One value per scorer for a (query, candidate) pair.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoreComponents {
    pub exact: f64,
    pub edit: f64,
    pub similarity: f64,
    pub token: f64,
}

impl ScoreComponents {
    /// Runs all four scorers on a pair of normalized strings.
    pub fn measure(a: &str, b: &str) -> Self {
        Self {
            exact: exact_substring(a, b),
            edit: edit_distance(a, b),
            similarity: jaro_winkler(a, b),
            token: token_match(a, b),
        }
    }

    /// Fixed-weight sum of the components.
    pub fn weighted_total(&self) -> f64 {
        EXACT_WEIGHT * self.exact
            + EDIT_WEIGHT * self.edit
            + SIMILARITY_WEIGHT * self.similarity
            + TOKEN_WEIGHT * self.token
    }
}

/// Fixed-weight combination of all four scorers.
///
/// Equal strings short-circuit to 1.0 before any scorer runs; a pair with
/// an empty side scores 0.0.
pub fn composite(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    ScoreComponents::measure(a, b).weighted_total()
}

/// Containment / longest-common-substring ratio.
///
/// When the longer string contains the shorter as a contiguous substring,
/// the score is the length ratio. Otherwise it is the length of the longest
/// common substring divided by the longer length. The common-substring
/// search enumerates substrings of the shorter string longest-first, which
/// is worst-case cubic; acceptable for short name strings.
pub fn exact_substring(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    // Ties treat `a` as the longer string.
    let (longer, shorter) = if a_chars.len() >= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };
    if longer.is_empty() {
        return 0.0;
    }
    if contains_slice(longer, shorter) {
        return shorter.len() as f64 / longer.len() as f64;
    }
    longest_common_substring(shorter, longer) as f64 / longer.len() as f64
}

fn contains_slice(haystack: &[char], needle: &[char]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

fn longest_common_substring(shorter: &[char], longer: &[char]) -> usize {
    for length in (1..=shorter.len()).rev() {
        if shorter
            .windows(length)
            .any(|window| contains_slice(longer, window))
        {
            return length;
        }
    }
    0
}

/// Levenshtein ratio: `(max_len - distance) / max_len`.
///
/// Insertions, deletions, and substitutions cost 1 each; there is no
/// transposition operation. Two empty strings score 1.0.
pub fn edit_distance(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let max_len = a_chars.len().max(b_chars.len());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein(&a_chars, &b_chars);
    (max_len - distance) as f64 / max_len as f64
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Jaro similarity with the Winkler common-prefix boost.
///
/// The boost only applies when the Jaro score reaches 0.7, considers at
/// most four prefix characters, and never lowers the score.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let base = jaro(a, b);
    if base < WINKLER_BOOST_FLOOR {
        return base;
    }
    let prefix = a
        .chars()
        .zip(b.chars())
        .take(WINKLER_MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();
    base + WINKLER_PREFIX_SCALE * prefix as f64 * (1.0 - base)
}

/// Plain Jaro similarity: bounded-window greedy character alignment with a
/// transposition penalty.
pub fn jaro(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0.0;
    }
    let max_len = a_chars.len().max(b_chars.len());
    let Some(window) = (max_len / 2).checked_sub(1) else {
        return 0.0;
    };

    let mut a_matched = vec![false; a_chars.len()];
    let mut b_matched = vec![false; b_chars.len()];
    let mut matches = 0usize;
    for (i, &ca) in a_chars.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window).min(b_chars.len() - 1);
        if start > end {
            continue;
        }
        for j in start..=end {
            if !b_matched[j] && b_chars[j] == ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }
    if matches == 0 {
        return 0.0;
    }

    let a_sequence = matched_sequence(&a_chars, &a_matched);
    let b_sequence = matched_sequence(&b_chars, &b_matched);
    let transpositions = a_sequence
        .iter()
        .zip(&b_sequence)
        .filter(|(x, y)| x != y)
        .count();

    let m = matches as f64;
    (m / a_chars.len() as f64
        + m / b_chars.len() as f64
        + (m - transpositions as f64 / 2.0) / m)
        / 3.0
}

fn matched_sequence(chars: &[char], matched: &[bool]) -> Vec<char> {
    chars
        .iter()
        .zip(matched)
        .filter(|&(_, &used)| used)
        .map(|(&ch, _)| ch)
        .collect()
}

/// Word-level greedy matching tolerant of partial and typo'd tokens.
///
/// For each token of `a` (in order), the first still-unused token of `b`
/// (in scan order) that contains it, is contained by it, or sits within
/// edit-distance ratio 0.8 is consumed. The result is first-fit and
/// order-dependent on both sides — this is the contract, not an
/// approximation of optimal assignment.
pub fn token_match(a: &str, b: &str) -> f64 {
    let a_tokens: Vec<&str> = a.split_whitespace().collect();
    let b_tokens: Vec<&str> = b.split_whitespace().collect();
    if a_tokens.is_empty() || b_tokens.is_empty() {
        return 0.0;
    }

    let mut used = vec![false; b_tokens.len()];
    let mut matched = 0usize;
    for &token in &a_tokens {
        for (j, &candidate) in b_tokens.iter().enumerate() {
            if used[j] {
                continue;
            }
            if token.contains(candidate)
                || candidate.contains(token)
                || edit_distance(token, candidate) > TOKEN_EDIT_THRESHOLD
            {
                used[j] = true;
                matched += 1;
                break;
            }
        }
    }
    matched as f64 / a_tokens.len().max(b_tokens.len()) as f64
}
