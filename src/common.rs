//! Score cutoff handling shared by the distance and fuzz modules.
//!
//! Passing a cutoff through `Args::score_cutoff` changes the return type of
//! the `*_with_args` functions from `T` to `Option<T>`, so callers that never
//! filter do not have to unwrap anything. The cutoff value is also handed to
//! the algorithms, which use it to stop early once a result can no longer
//! reach it.

use std::fmt::Debug;

/// No cutoff requested, results are returned as is
#[derive(Default, Copy, Clone, Debug)]
pub struct NoScoreCutoff;

/// Results worse than the wrapped value are reported as `None`
#[derive(Default, Copy, Clone, Debug)]
pub struct WithScoreCutoff<T>(pub T);

/// Shape of a result with or without a cutoff
///
/// This only decides how a result is returned. Whether a result is good
/// enough depends on the metric and is answered by [`DistanceCutoff`] and
/// [`SimilarityCutoff`].
pub trait ScoreCutoff<T>
where
    T: Copy,
{
    type Output: Copy + Into<Option<T>> + PartialEq + Debug;

    /// The bound results are compared against, if any
    fn cutoff(&self) -> Option<T>;

    /// Wraps `raw` into the output type, dropping it unless `keep` is set
    fn keep_if(&self, raw: T, keep: bool) -> Self::Output;
}

impl<T> ScoreCutoff<T> for NoScoreCutoff
where
    T: Copy + PartialEq + Debug,
{
    type Output = T;

    fn cutoff(&self) -> Option<T> {
        None
    }

    fn keep_if(&self, raw: T, _keep: bool) -> T {
        raw
    }
}

impl<T> ScoreCutoff<T> for WithScoreCutoff<T>
where
    T: Copy + PartialEq + Debug,
{
    type Output = Option<T>;

    fn cutoff(&self) -> Option<T> {
        Some(self.0)
    }

    fn keep_if(&self, raw: T, keep: bool) -> Option<T> {
        keep.then_some(raw)
    }
}

/// Cutoff for metrics where lower is better (distances)
pub trait DistanceCutoff<T>: ScoreCutoff<T>
where
    T: Copy + PartialOrd,
{
    /// Keeps distances up to and including the cutoff
    fn score(&self, raw: T) -> Self::Output {
        let keep = self.cutoff().map_or(true, |max| raw <= max);
        self.keep_if(raw, keep)
    }
}

impl<T, C> DistanceCutoff<T> for C
where
    T: Copy + PartialOrd,
    C: ScoreCutoff<T>,
{
}

/// Cutoff for metrics where higher is better (similarities and scores)
pub trait SimilarityCutoff<T>: ScoreCutoff<T>
where
    T: Copy + PartialOrd,
{
    /// Keeps scores from the cutoff upwards
    fn score(&self, raw: T) -> Self::Output {
        let keep = self.cutoff().map_or(true, |min| raw >= min);
        self.keep_if(raw, keep)
    }
}

impl<T, C> SimilarityCutoff<T> for C
where
    T: Copy + PartialOrd,
    C: ScoreCutoff<T>,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_cutoff_is_inclusive() {
        assert_eq!(Some(80_u8), SimilarityCutoff::score(&WithScoreCutoff(80_u8), 80));
        assert_eq!(None, SimilarityCutoff::score(&WithScoreCutoff(80_u8), 79));
        assert_eq!(42_u8, SimilarityCutoff::score(&NoScoreCutoff, 42_u8));
    }

    #[test]
    fn distance_cutoff_is_inclusive() {
        assert_eq!(Some(3), DistanceCutoff::score(&WithScoreCutoff(3_usize), 3));
        assert_eq!(None, DistanceCutoff::score(&WithScoreCutoff(3_usize), 4));
        assert_eq!(7_usize, DistanceCutoff::score(&NoScoreCutoff, 7_usize));
    }

    #[test]
    fn cutoff_is_exposed_to_algorithms() {
        assert_eq!(None, ScoreCutoff::<u8>::cutoff(&NoScoreCutoff));
        assert_eq!(Some(90_u8), WithScoreCutoff(90_u8).cutoff());
    }
}
