//! Hand-rolled approximate substring matching
//!
//! Computes the edit distance between the query and the best-matching
//! substring of a field (Sellers' variant of Levenshtein: free start and end
//! in the text), then walks the alignment back to recover the matched span.

/// A fuzzy hit inside one field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    /// Normalized edit cost in `[0, 1]`, 0 is an exact hit
    pub score: f64,
    /// Char offset where the aligned region starts
    pub start: usize,
    /// Char offset one past the aligned region
    pub end: usize,
    /// Query chars aligned to an identical text char
    pub exact_chars: usize,
}

#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Vec<char>,
    threshold: f64,
    min_match_char_len: usize,
}

impl Matcher {
    pub fn new(query: &str, threshold: f64, min_match_char_len: usize) -> Self {
        Self {
            pattern: fold(query),
            threshold: threshold.clamp(0.0, 1.0),
            min_match_char_len,
        }
    }

    pub fn find(&self, text: &str) -> Option<FuzzyMatch> {
        let m = self.pattern.len();
        if m == 0 || text.is_empty() {
            return None;
        }

        let text = fold(text);
        let hit = exact_match(&self.pattern, &text).or_else(|| self.approximate_match(&text))?;

        if hit.score > self.threshold || hit.exact_chars < self.min_match_char_len.min(m) {
            return None;
        }
        Some(hit)
    }

    fn approximate_match(&self, text: &[char]) -> Option<FuzzyMatch> {
        let m = self.pattern.len();
        let n = text.len();
        let max_errors = (self.threshold * m as f64).floor() as usize;
        if max_errors == 0 {
            return None;
        }

        let cols = n + 1;
        let mut dist = vec![0usize; (m + 1) * cols];
        for i in 1..=m {
            dist[i * cols] = i;
        }

        for (i, &p) in self.pattern.iter().enumerate() {
            let row = (i + 1) * cols;
            let prev = i * cols;
            for (j, &t) in text.iter().enumerate() {
                let cost = usize::from(p != t);
                dist[row + j + 1] = (dist[prev + j] + cost)
                    .min(dist[prev + j + 1] + 1)
                    .min(dist[row + j] + 1);
            }
        }

        let last = m * cols;
        let (end, errors) = (1..=n)
            .map(|j| (j, dist[last + j]))
            .min_by_key(|&(_, d)| d)?;
        if errors > max_errors {
            return None;
        }

        // Walk back to the start of the alignment
        let (mut i, mut j, mut exact_chars) = (m, end, 0);
        while i > 0 {
            let here = dist[i * cols + j];
            if j > 0 {
                let cost = usize::from(self.pattern[i - 1] != text[j - 1]);
                if here == dist[(i - 1) * cols + j - 1] + cost {
                    exact_chars += 1 - cost;
                    i -= 1;
                    j -= 1;
                    continue;
                }
                if here == dist[i * cols + j - 1] + 1 {
                    j -= 1;
                    continue;
                }
            }
            i -= 1;
        }

        Some(FuzzyMatch {
            score: errors as f64 / m as f64,
            start: j,
            end,
            exact_chars,
        })
    }
}

fn exact_match(pattern: &[char], text: &[char]) -> Option<FuzzyMatch> {
    if pattern.len() > text.len() {
        return None;
    }
    let start = text.windows(pattern.len()).position(|w| w == pattern)?;
    Some(FuzzyMatch {
        score: 0.0,
        start,
        end: start + pattern.len(),
        exact_chars: pattern.len(),
    })
}

/// Lowercase one char at a time so offsets stay aligned with the input
fn fold(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}
