use crate::common::SimilarityCutoff;
use crate::fuzz::{self, Args};
use crate::utils::Preprocessor;
use crate::Score;

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Every scoring strategy of the [`fuzz`] module
///
/// Scorers hold no state, so a single value can be copied freely and shared
/// between threads. This allows selecting the strategy at runtime, e.g. from a
/// configuration file:
///
/// ```
/// use fuzzratio::Scorer;
///
/// let scorer: Scorer = "partial_ratio".parse().unwrap();
/// assert_eq!(Scorer::Partial, scorer);
/// assert_eq!(100, scorer.score("test", "this is a test!!"));
/// assert!("soundex".parse::<Scorer>().is_err());
/// ```
///
/// [`fuzz`]: fuzz/index.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scorer {
    Simple,
    Partial,
    TokenSort,
    PartialTokenSort,
    TokenSet,
    PartialTokenSet,
    TokenDifference,
    PartialTokenDifference,
    TokenInitialism,
    PartialTokenInitialism,
    TokenAbbreviation,
    PartialTokenAbbreviation,
    Weighted,
}

impl Scorer {
    pub const ALL: [Scorer; 13] = [
        Scorer::Simple,
        Scorer::Partial,
        Scorer::TokenSort,
        Scorer::PartialTokenSort,
        Scorer::TokenSet,
        Scorer::PartialTokenSet,
        Scorer::TokenDifference,
        Scorer::PartialTokenDifference,
        Scorer::TokenInitialism,
        Scorer::PartialTokenInitialism,
        Scorer::TokenAbbreviation,
        Scorer::PartialTokenAbbreviation,
        Scorer::Weighted,
    ];

    /// Name of the matching function in the `fuzz` module
    pub const fn name(self) -> &'static str {
        match self {
            Scorer::Simple => "ratio",
            Scorer::Partial => "partial_ratio",
            Scorer::TokenSort => "token_sort_ratio",
            Scorer::PartialTokenSort => "partial_token_sort_ratio",
            Scorer::TokenSet => "token_set_ratio",
            Scorer::PartialTokenSet => "partial_token_set_ratio",
            Scorer::TokenDifference => "token_difference_ratio",
            Scorer::PartialTokenDifference => "partial_token_difference_ratio",
            Scorer::TokenInitialism => "token_initialism_ratio",
            Scorer::PartialTokenInitialism => "partial_token_initialism_ratio",
            Scorer::TokenAbbreviation => "token_abbreviation_ratio",
            Scorer::PartialTokenAbbreviation => "partial_token_abbreviation_ratio",
            Scorer::Weighted => "weighted_ratio",
        }
    }

    /// `true` if swapping the arguments can never change the score
    ///
    /// Initialism scorers compare the first argument with the initialism of
    /// the second when both inputs have the same length.
    pub const fn is_symmetric(self) -> bool {
        !matches!(
            self,
            Scorer::TokenInitialism | Scorer::PartialTokenInitialism
        )
    }

    pub fn score(self, s1: &str, s2: &str) -> Score {
        self.score_with_args(s1, s2, &Args::default())
    }

    pub fn score_with_args<CutoffType, ProcessorType>(
        self,
        s1: &str,
        s2: &str,
        args: &Args<CutoffType, ProcessorType>,
    ) -> CutoffType::Output
    where
        CutoffType: SimilarityCutoff<Score>,
        ProcessorType: Preprocessor,
    {
        match self {
            Scorer::Simple => fuzz::ratio_with_args(s1, s2, args),
            Scorer::Partial => fuzz::partial_ratio_with_args(s1, s2, args),
            Scorer::TokenSort => fuzz::token_sort_ratio_with_args(s1, s2, args),
            Scorer::PartialTokenSort => fuzz::partial_token_sort_ratio_with_args(s1, s2, args),
            Scorer::TokenSet => fuzz::token_set_ratio_with_args(s1, s2, args),
            Scorer::PartialTokenSet => fuzz::partial_token_set_ratio_with_args(s1, s2, args),
            Scorer::TokenDifference => fuzz::token_difference_ratio_with_args(s1, s2, args),
            Scorer::PartialTokenDifference => {
                fuzz::partial_token_difference_ratio_with_args(s1, s2, args)
            }
            Scorer::TokenInitialism => fuzz::token_initialism_ratio_with_args(s1, s2, args),
            Scorer::PartialTokenInitialism => {
                fuzz::partial_token_initialism_ratio_with_args(s1, s2, args)
            }
            Scorer::TokenAbbreviation => fuzz::token_abbreviation_ratio_with_args(s1, s2, args),
            Scorer::PartialTokenAbbreviation => {
                fuzz::partial_token_abbreviation_ratio_with_args(s1, s2, args)
            }
            Scorer::Weighted => fuzz::weighted_ratio_with_args(s1, s2, args),
        }
    }
}

impl Display for Scorer {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScorerError {
    name: String,
}

impl Display for ParseScorerError {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "unknown scorer `{}`", self.name)
    }
}

impl Error for ParseScorerError {}

impl FromStr for Scorer {
    type Err = ParseScorerError;

    /// Parses the scorer from its function name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Scorer::ALL
            .into_iter()
            .find(|scorer| scorer.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseScorerError {
                name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for scorer in Scorer::ALL {
            assert_eq!(Ok(scorer), scorer.name().parse());
            assert_eq!(scorer.name(), scorer.to_string());
        }
        assert_eq!(Ok(Scorer::Weighted), " Weighted_Ratio ".parse());
    }

    #[test]
    fn unknown_name() {
        let err = "jaro".parse::<Scorer>().unwrap_err();
        assert_eq!("unknown scorer `jaro`", err.to_string());
    }

    #[test]
    fn dispatches_to_fuzz_functions() {
        let s1 = "new york mets vs atlanta braves";
        let s2 = "the wonderful new york mets";
        assert_eq!(fuzz::ratio(s1, s2), Scorer::Simple.score(s1, s2));
        assert_eq!(fuzz::partial_ratio(s1, s2), Scorer::Partial.score(s1, s2));
        assert_eq!(
            fuzz::token_set_ratio(s1, s2),
            Scorer::TokenSet.score(s1, s2)
        );
        assert_eq!(
            fuzz::partial_token_abbreviation_ratio(s1, s2),
            Scorer::PartialTokenAbbreviation.score(s1, s2)
        );
        assert_eq!(
            fuzz::weighted_ratio(s1, s2),
            Scorer::Weighted.score(s1, s2)
        );
    }

    #[test]
    fn scores_stay_in_range() {
        let pairs = [
            ("", ""),
            ("", "abc"),
            ("NYC", "New York City"),
            ("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear"),
            ("  ", "a"),
        ];
        for scorer in Scorer::ALL {
            for (s1, s2) in pairs {
                assert!(scorer.score(s1, s2) <= 100, "{} {:?} {:?}", scorer, s1, s2);
            }
        }
    }

    #[test]
    fn initialism_scorers_are_not_symmetric() {
        assert!(!Scorer::TokenInitialism.is_symmetric());
        assert_ne!(
            Scorer::TokenInitialism.score("a b", "abc"),
            Scorer::TokenInitialism.score("abc", "a b")
        );
    }

    #[test]
    fn symmetric_scorers() {
        let s1 = "new york mets vs atlanta braves";
        let s2 = "new york city mets - atlanta braves";
        for scorer in Scorer::ALL.into_iter().filter(|s| s.is_symmetric()) {
            assert_eq!(scorer.score(s1, s2), scorer.score(s2, s1), "{}", scorer);
        }
    }

    #[test]
    fn scorers_are_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy + 'static>() {}
        assert_send_sync::<Scorer>();

        let handles: Vec<_> = Scorer::ALL
            .into_iter()
            .map(|scorer| std::thread::spawn(move || scorer.score("test", "this is a test")))
            .collect();
        for (scorer, handle) in Scorer::ALL.into_iter().zip(handles) {
            assert_eq!(scorer.score("test", "this is a test"), handle.join().unwrap());
        }
    }

    #[test]
    fn cutoff_through_scorer() {
        let args = Args::default().score_cutoff(90);
        assert_eq!(
            Some(100),
            Scorer::Partial.score_with_args("test", "this is a test", &args)
        );
        assert_eq!(
            None,
            Scorer::Simple.score_with_args("test", "this is a test", &args)
        );
    }
}
