use std::hash::Hash;

use crate::common::{SimilarityCutoff, WithScoreCutoff};
use crate::details::common::{max_distance, norm_ratio};
use crate::details::pattern_match::BlockPatternMatchVector;
use crate::distance::levenshtein::hyrroe2003_block;
use crate::Score;

/// Position of the best partial match
///
/// `src` refers to the first argument of the comparison and `dest` to the
/// second one, no matter which of them was the shorter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreAlignment {
    pub score: Score,
    pub src_start: usize,
    pub src_end: usize,
    pub dest_start: usize,
    pub dest_end: usize,
}

/// ratio of the pattern against one encoded window of the text
fn window_ratio<CutoffType>(
    pm: &BlockPatternMatchVector,
    window: &[Option<usize>],
    score_cutoff: &CutoffType,
) -> CutoffType::Output
where
    CutoffType: SimilarityCutoff<Score>,
{
    let lensum = pm.len() + window.len();
    let max = score_cutoff
        .cutoff()
        .map_or(lensum, |cutoff| max_distance(cutoff, lensum));

    // a distance above `max` maps to a score below the cutoff
    score_cutoff.score(norm_ratio(hyrroe2003_block(pm, window, max), lensum))
}

/// Slides `shorter` over `longer` and returns the best ratio together with the
/// offset of the first window reaching it.
///
/// The pattern masks of `shorter` are built once and shared by all windows.
/// Each window only has to beat the best score so far, which bounds the edit
/// distance computed for it. `shorter` must not be longer than `longer`.
fn best_window<T>(shorter: &[T], longer: &[T]) -> (Score, usize)
where
    T: Eq + Hash,
{
    debug_assert!(shorter.len() <= longer.len());

    if shorter.is_empty() {
        return (if longer.is_empty() { 100 } else { 0 }, 0);
    }

    let (pm, text) = BlockPatternMatchVector::encode(shorter, longer);
    let mut best: (Score, usize) = (0, 0);
    for (offset, window) in text.windows(shorter.len()).enumerate() {
        let cutoff = WithScoreCutoff(best.0 + 1);
        if let Some(score) = window_ratio(&pm, window, &cutoff) {
            best = (score, offset);
            if score == 100 {
                break;
            }
        }
    }
    best
}

/// Alignment of the shorter sequence inside the longer one. On equal lengths
/// `s1` is treated as the shorter sequence.
pub(super) fn alignment<T>(s1: &[T], s2: &[T]) -> ScoreAlignment
where
    T: Eq + Hash,
{
    if s1.len() > s2.len() {
        let res = alignment(s2, s1);
        return ScoreAlignment {
            score: res.score,
            src_start: res.dest_start,
            src_end: res.dest_end,
            dest_start: res.src_start,
            dest_end: res.src_end,
        };
    }

    let (score, offset) = best_window(s1, s2);
    ScoreAlignment {
        score,
        src_start: 0,
        src_end: s1.len(),
        dest_start: offset,
        dest_end: offset + s1.len(),
    }
}

/// partial ratio over chars or whole tokens
pub(super) fn partial_ratio_slices<T>(s1: &[T], s2: &[T]) -> Score
where
    T: Eq + Hash,
{
    if s1.len() <= s2.len() {
        best_window(s1, s2).0
    } else {
        best_window(s2, s1).0
    }
}

pub(super) fn partial_ratio_impl(s1: &str, s2: &str) -> Score {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    partial_ratio_slices(&s1, &s2)
}
