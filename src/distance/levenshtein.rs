//! Uniform Levenshtein distance
//!
//! The Levenshtein distance counts the minimum number of insertions, deletions
//! and substitutions needed to transform one sequence into the other. Every
//! operation costs `1`.
//!
//! The functions are generic over the element type, so they work on `chars()`,
//! `bytes()` or whole words alike:
//!
//! ```
//! use fuzzratio::distance::levenshtein;
//!
//! assert_eq!(3, levenshtein::distance("kitten".chars(), "sitting".chars()));
//! assert_eq!(
//!     1,
//!     levenshtein::distance(["new", "york", "mets"], ["new", "york", "jets"])
//! );
//! ```

use crate::common::{DistanceCutoff, NoScoreCutoff, WithScoreCutoff};
use crate::details::common::remove_common_affix;
use crate::details::pattern_match::BlockPatternMatchVector;

#[must_use]
#[derive(Clone, Copy, Debug)]
pub struct Args<CutoffType> {
    score_cutoff: CutoffType,
}

impl Default for Args<NoScoreCutoff> {
    fn default() -> Args<NoScoreCutoff> {
        Args {
            score_cutoff: NoScoreCutoff,
        }
    }
}

impl<CutoffType> Args<CutoffType> {
    /// Distances above `score_cutoff` are reported as `None`
    pub fn score_cutoff(self, score_cutoff: usize) -> Args<WithScoreCutoff<usize>> {
        Args {
            score_cutoff: WithScoreCutoff(score_cutoff),
        }
    }
}

/// Wagner-Fischer with a single row cached over `s1`, restricted to the band
/// of cells within `max` of the diagonal.
///
/// Returns `max + 1` as soon as the distance is known to exceed `max`.
/// `s1` must not be longer than `s2` and their length difference must not
/// exceed `max`.
fn wagner_fischer<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2], max: usize) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    debug_assert!(s1.len() <= s2.len() && s2.len() - s1.len() <= max);
    let cap = max.saturating_add(1);
    let mut cache: Vec<usize> = (0..=s1.len()).map(|row| row.min(cap)).collect();

    for (col, ch2) in s2.iter().enumerate() {
        let col = col + 1;
        let first = col.saturating_sub(max);
        let last = s1.len().min(col.saturating_add(max));

        // the cell left of the band is out of reach
        let mut diag = cache[first.saturating_sub(1)];
        let mut col_min = cap;
        let start = if first == 0 {
            cache[0] = col.min(cap);
            col_min = cache[0];
            1
        } else {
            cache[first - 1] = cap;
            first
        };

        for row in start..=last {
            let above = cache[row];
            let value = if s1[row - 1] == *ch2 {
                diag
            } else {
                1 + diag.min(above).min(cache[row - 1])
            };
            diag = above;
            cache[row] = value.min(cap);
            col_min = col_min.min(cache[row]);
        }

        // the minimum of a column never decreases
        if col_min > max {
            return cap;
        }
    }

    cache[s1.len()].min(cap)
}

/// distance between two slices or `max + 1` when it exceeds `max`
fn bounded_slice_distance<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2], max: usize) -> usize
where
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
{
    // common affix does not effect Levenshtein distance
    let (s1, s2) = remove_common_affix(s1, s2);

    // the length difference is a lower bound for the distance
    if s1.len().abs_diff(s2.len()) > max {
        return max.saturating_add(1);
    }
    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }

    if s1.len() <= s2.len() {
        wagner_fischer(s1, s2, max)
    } else {
        wagner_fischer(s2, s1, max)
    }
}

/// distance between two slices, used by the fuzz module for chars and tokens
pub(crate) fn slice_distance<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
{
    bounded_slice_distance(s1, s2, s1.len().max(s2.len()))
}

/// Bit-parallel distance between the pattern stored in `pm` and `text`,
/// processing 64 pattern elements per step (Hyyrö 2003, block based).
///
/// `text` holds the keys produced by [`BlockPatternMatchVector::encode`].
/// Returns `max + 1` as soon as the distance is known to exceed `max`.
pub(crate) fn hyrroe2003_block(
    pm: &BlockPatternMatchVector,
    text: &[Option<usize>],
    max: usize,
) -> usize {
    if pm.len() == 0 {
        return text.len().min(max.saturating_add(1));
    }

    let words = pm.words();
    // VP is set to 1^m
    let mut vp = vec![!0_u64; words];
    let mut vn = vec![0_u64; words];
    // mask of the last pattern element inside the last word
    let last = 1_u64 << ((pm.len() - 1) % 64);
    let mut dist = pm.len();

    for (col, &key) in text.iter().enumerate() {
        let mut hp_carry: u64 = 1;
        let mut hn_carry: u64 = 0;

        for word in 0..words {
            // Step 1: Computing D0
            let x = pm.get(word, key) | hn_carry;
            let d0 = ((x & vp[word]).wrapping_add(vp[word]) ^ vp[word]) | x | vn[word];

            // Step 2: Computing HP and HN
            let mut hp = vn[word] | !(d0 | vp[word]);
            let mut hn = d0 & vp[word];

            let (hp_out, hn_out) = if word + 1 < words {
                (hp >> 63, hn >> 63)
            } else {
                (u64::from(hp & last != 0), u64::from(hn & last != 0))
            };

            // Step 3: Computing VP and VN
            hp = (hp << 1) | hp_carry;
            hn = (hn << 1) | hn_carry;
            vp[word] = hn | !(d0 | hp);
            vn[word] = hp & d0;

            hp_carry = hp_out;
            hn_carry = hn_out;
        }

        dist = dist + hp_carry as usize - hn_carry as usize;

        // the last row changes by at most one per remaining column
        if dist > max.saturating_add(text.len() - col - 1) {
            return max.saturating_add(1);
        }
    }

    dist.min(max.saturating_add(1))
}

/// Calculates the Levenshtein distance between two sequences
pub fn distance<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter2: IntoIterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
{
    distance_with_args(s1, s2, &Args::default())
}

/// Calculates the Levenshtein distance, returning `None` when it exceeds the
/// `score_cutoff` passed in `args`
///
/// # Example
/// ```
/// use fuzzratio::distance::levenshtein;
///
/// let args = levenshtein::Args::default().score_cutoff(2);
/// assert_eq!(
///     None,
///     levenshtein::distance_with_args("kitten".chars(), "sitting".chars(), &args)
/// );
/// assert_eq!(
///     Some(1),
///     levenshtein::distance_with_args("kitten".chars(), "sitten".chars(), &args)
/// );
/// ```
pub fn distance_with_args<Iter1, Iter2, Elem1, Elem2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<CutoffType>,
) -> CutoffType::Output
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter2: IntoIterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
    CutoffType: DistanceCutoff<usize>,
{
    let s1: Vec<Elem1> = s1.into_iter().collect();
    let s2: Vec<Elem2> = s2.into_iter().collect();

    let longer = s1.len().max(s2.len());
    let max = args
        .score_cutoff
        .cutoff()
        .map_or(longer, |cutoff| cutoff.min(longer));

    args.score_cutoff.score(bounded_slice_distance(&s1, &s2, max))
}

/// Calculates `len1 + len2 - distance`, the similarity the fuzz ratios are
/// normalized from
pub fn similarity<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter2: IntoIterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
{
    let s1: Vec<Elem1> = s1.into_iter().collect();
    let s2: Vec<Elem2> = s2.into_iter().collect();
    s1.len() + s2.len() - slice_distance(&s1, &s2)
}

/// Normalized similarity in the range `0.0..=1.0`
///
/// Two empty sequences are considered identical.
pub fn normalized_similarity<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter2: IntoIterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
{
    let s1: Vec<Elem1> = s1.into_iter().collect();
    let s2: Vec<Elem2> = s2.into_iter().collect();
    let lensum = s1.len() + s2.len();
    if lensum == 0 {
        return 1.0;
    }
    (lensum - slice_distance(&s1, &s2)) as f64 / lensum as f64
}
