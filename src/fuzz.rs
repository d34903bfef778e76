//! Fuzzy string scorers returning a [`Score`] in the range `0..=100`.
//!
//! Every scorer comes in two flavours: `name(s1, s2)` and
//! `name_with_args(s1, s2, &args)`. The [`Args`] builder carries an optional
//! score cutoff, a [`Preprocessor`] applied to both raw inputs and the weights
//! used by [`weighted_ratio`].
//!
//! Lengths are always measured in chars, never in bytes.
//!
//! [`Score`]: ../type.Score.html
//! [`Preprocessor`]: ../utils/trait.Preprocessor.html

mod acronym;
mod partial;
mod token;
mod wratio;

use crate::common::{NoScoreCutoff, SimilarityCutoff, WithScoreCutoff};
use crate::details::common::norm_ratio;
use crate::distance::levenshtein::slice_distance;
use crate::utils::{NoProcessor, Preprocessor};
use crate::Score;

pub use partial::ScoreAlignment;
pub use wratio::WRatioWeights;

#[must_use]
#[derive(Clone, Copy, Debug)]
pub struct Args<CutoffType, ProcessorType> {
    score_cutoff: CutoffType,
    processor: ProcessorType,
    weights: WRatioWeights,
}

impl Default for Args<NoScoreCutoff, NoProcessor> {
    fn default() -> Args<NoScoreCutoff, NoProcessor> {
        Args {
            score_cutoff: NoScoreCutoff,
            processor: NoProcessor,
            weights: WRatioWeights::default(),
        }
    }
}

impl<CutoffType, ProcessorType> Args<CutoffType, ProcessorType> {
    /// Scores below `score_cutoff` are reported as `None`
    pub fn score_cutoff(self, score_cutoff: Score) -> Args<WithScoreCutoff<Score>, ProcessorType> {
        Args {
            score_cutoff: WithScoreCutoff(score_cutoff),
            processor: self.processor,
            weights: self.weights,
        }
    }

    /// Transform applied to both inputs before scoring
    pub fn processor<NewProcessor>(self, processor: NewProcessor) -> Args<CutoffType, NewProcessor>
    where
        NewProcessor: Preprocessor,
    {
        Args {
            score_cutoff: self.score_cutoff,
            processor,
            weights: self.weights,
        }
    }

    /// Weights used by [`weighted_ratio_with_args`]
    pub fn weights(mut self, weights: WRatioWeights) -> Self {
        self.weights = weights;
        self
    }
}

impl<CutoffType, ProcessorType> Args<CutoffType, ProcessorType>
where
    CutoffType: SimilarityCutoff<Score>,
    ProcessorType: Preprocessor,
{
    fn run<F>(&self, s1: &str, s2: &str, scorer: F) -> CutoffType::Output
    where
        F: FnOnce(&str, &str) -> Score,
    {
        let s1 = self.processor.preprocess(s1);
        let s2 = self.processor.preprocess(s2);
        self.score_cutoff.score(scorer(&s1, &s2))
    }
}

/// ratio between two already split sequences of chars or tokens
fn ratio_slices<T>(s1: &[T], s2: &[T]) -> Score
where
    T: PartialEq,
{
    norm_ratio(slice_distance(s1, s2), s1.len() + s2.len())
}

fn ratio_impl(s1: &str, s2: &str) -> Score {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    ratio_slices(&s1, &s2)
}

macro_rules! build_scorer_funcs {
    ($(#[$attr:meta])* $name:ident, $name_with_args:ident, $scorer:path) => {
        $(#[$attr])*
        pub fn $name(s1: &str, s2: &str) -> Score {
            $name_with_args(s1, s2, &Args::default())
        }

        #[doc = concat!("[`", stringify!($name), "`] using the cutoff and preprocessor from `args`")]
        pub fn $name_with_args<CutoffType, ProcessorType>(
            s1: &str,
            s2: &str,
            args: &Args<CutoffType, ProcessorType>,
        ) -> CutoffType::Output
        where
            CutoffType: SimilarityCutoff<Score>,
            ProcessorType: Preprocessor,
        {
            args.run(s1, s2, $scorer)
        }
    };
}

build_scorer_funcs!(
    /// Levenshtein based ratio between two strings
    ///
    /// `round(100 * (len1 + len2 - distance) / (len1 + len2))`, where two
    /// empty strings are considered identical.
    ///
    /// # Example
    /// ```
    /// use fuzzratio::fuzz;
    ///
    /// assert_eq!(97, fuzz::ratio("this is a test", "this is a test!"));
    /// assert_eq!(100, fuzz::ratio("", ""));
    /// ```
    ratio,
    ratio_with_args,
    ratio_impl
);

build_scorer_funcs!(
    /// Best [`ratio`] of the shorter string against every equally long
    /// window of the longer string
    ///
    /// Strings of the same length are compared with a single window, which
    /// makes this the plain [`ratio`].
    ///
    /// # Example
    /// ```
    /// use fuzzratio::fuzz;
    ///
    /// assert_eq!(100, fuzz::partial_ratio("test", "this is a test!!"));
    /// ```
    partial_ratio,
    partial_ratio_with_args,
    partial::partial_ratio_impl
);

build_scorer_funcs!(
    /// [`ratio`] of the whitespace tokens sorted and joined with single spaces
    ///
    /// # Example
    /// ```
    /// use fuzzratio::fuzz;
    ///
    /// assert_eq!(
    ///     100,
    ///     fuzz::token_sort_ratio("order words wrong", "wrong order words")
    /// );
    /// ```
    token_sort_ratio,
    token_sort_ratio_with_args,
    token::token_sort_impl
);

build_scorer_funcs!(
    /// [`partial_ratio`] of the sorted and joined tokens
    partial_token_sort_ratio,
    partial_token_sort_ratio_with_args,
    token::partial_token_sort_impl
);

build_scorer_funcs!(
    /// Compares the shared tokens with each side's full token set
    ///
    /// Duplicate words and extra words on only one side do not lower the score
    /// as much as they do for [`token_sort_ratio`].
    ///
    /// # Example
    /// ```
    /// use fuzzratio::fuzz;
    ///
    /// assert_eq!(
    ///     100,
    ///     fuzz::token_set_ratio(
    ///         "New York Mets vs Atlanta Braves",
    ///         "Atlanta Braves vs New York Mets"
    ///     )
    /// );
    /// assert_eq!(100, fuzz::token_set_ratio("mets mets mets", "mets"));
    /// ```
    token_set_ratio,
    token_set_ratio_with_args,
    token::token_set_impl
);

build_scorer_funcs!(
    /// [`token_set_ratio`] with every comparison done by [`partial_ratio`]
    partial_token_set_ratio,
    partial_token_set_ratio_with_args,
    token::partial_token_set_impl
);

build_scorer_funcs!(
    /// Ratio of the sorted token lists, editing whole words instead of chars
    ///
    /// # Example
    /// ```
    /// use fuzzratio::fuzz;
    ///
    /// // one of three words replaced
    /// assert_eq!(83, fuzz::token_difference_ratio("new york mets", "new york jets"));
    /// ```
    token_difference_ratio,
    token_difference_ratio_with_args,
    token::token_difference_impl
);

build_scorer_funcs!(
    /// Best word level ratio of the shorter token list against every equally
    /// long window of the longer one
    partial_token_difference_ratio,
    partial_token_difference_ratio_with_args,
    token::partial_token_difference_impl
);

build_scorer_funcs!(
    /// [`ratio`] of the shorter string against the initialism of the longer
    /// one, built from the first char of each of its tokens
    ///
    /// # Example
    /// ```
    /// use fuzzratio::fuzz;
    ///
    /// assert_eq!(100, fuzz::token_initialism_ratio("NYC", "New York City"));
    /// ```
    token_initialism_ratio,
    token_initialism_ratio_with_args,
    acronym::token_initialism_impl
);

build_scorer_funcs!(
    /// [`partial_ratio`] of the shorter string against the initialism of the
    /// longer one
    partial_token_initialism_ratio,
    partial_token_initialism_ratio_with_args,
    acronym::partial_token_initialism_impl
);

build_scorer_funcs!(
    /// Scores how well the shorter string abbreviates the longer one
    ///
    /// All chars of the shorter string's tokens have to appear in order
    /// (ignoring case) in the tokens of the longer string, otherwise the score
    /// is `0`. The shorter string is then compared with the part of the longer
    /// string it explains: every token it matched in, cut after its last
    /// matched char, plus every token it skipped.
    ///
    /// # Example
    /// ```
    /// use fuzzratio::fuzz;
    ///
    /// assert_eq!(100, fuzz::token_abbreviation_ratio("nyc", "New York City"));
    /// assert_eq!(57, fuzz::token_abbreviation_ratio("mgmt", "management"));
    /// assert_eq!(0, fuzz::token_abbreviation_ratio("xyz", "New York City"));
    /// ```
    token_abbreviation_ratio,
    token_abbreviation_ratio_with_args,
    acronym::token_abbreviation_impl
);

build_scorer_funcs!(
    /// [`token_abbreviation_ratio`] comparing via [`partial_ratio`]
    partial_token_abbreviation_ratio,
    partial_token_abbreviation_ratio_with_args,
    acronym::partial_token_abbreviation_impl
);

/// Blends several scorers depending on how different the input lengths are
///
/// Strings of comparable length are scored with the best of [`ratio`],
/// [`token_sort_ratio`] and [`token_set_ratio`]. Otherwise the partial family
/// is preferred and the full string ratio is down weighted. See
/// [`WRatioWeights`] for the constants.
///
/// # Example
/// ```
/// use fuzzratio::fuzz;
///
/// assert_eq!(
///     100,
///     fuzz::weighted_ratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear")
/// );
/// assert_eq!(
///     95,
///     fuzz::weighted_ratio("this is a test sentence that is fairly long", "fairly long")
/// );
/// ```
pub fn weighted_ratio(s1: &str, s2: &str) -> Score {
    weighted_ratio_with_args(s1, s2, &Args::default())
}

/// [`weighted_ratio`] using the cutoff, preprocessor and weights from `args`
pub fn weighted_ratio_with_args<CutoffType, ProcessorType>(
    s1: &str,
    s2: &str,
    args: &Args<CutoffType, ProcessorType>,
) -> CutoffType::Output
where
    CutoffType: SimilarityCutoff<Score>,
    ProcessorType: Preprocessor,
{
    args.run(s1, s2, |s1, s2| wratio::weighted_ratio_impl(s1, s2, &args.weights))
}

/// Optimal alignment of the shorter string inside the longer one, as found by
/// [`partial_ratio`]
///
/// Positions are char indices, `src` refers to `s1` and `dest` to `s2`.
///
/// # Example
/// ```
/// use fuzzratio::fuzz;
///
/// let alignment = fuzz::partial_ratio_alignment("abcd", "xxabcdyy");
/// assert_eq!(100, alignment.score);
/// assert_eq!((0, 4), (alignment.src_start, alignment.src_end));
/// assert_eq!((2, 6), (alignment.dest_start, alignment.dest_end));
/// ```
pub fn partial_ratio_alignment(s1: &str, s2: &str) -> ScoreAlignment {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    partial::alignment(&s1, &s2)
}
