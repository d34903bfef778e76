//! `fuzzratio` scores how similar two strings are on a scale from 0 to 100.
//!
//! ## Key Features
//!
//! - **Many strategies**: plain edit-distance ratio, best partial alignment,
//!   token sort, token set, token difference, initialisms and abbreviations.
//!   Each strategy has a "partial" sibling for inputs of very different length.
//! - **Weighted ratio**: [`fuzz::weighted_ratio`] picks the strategies worth
//!   trusting based on the length ratio of the inputs and returns the best
//!   weighted evidence.
//! - **Pluggable preprocessing**: any `Fn(&str) -> String` can be applied to
//!   both inputs before scoring.
//!
//! ## Usage
//!
//! ```rust
//! use fuzzratio::fuzz;
//!
//! assert_eq!(100, fuzz::partial_ratio("test", "this is a test!!"));
//! assert_eq!(
//!     100,
//!     fuzz::token_sort_ratio("order words wrong", "wrong order words")
//! );
//!
//! // Inputs can be preprocessed and results below a cutoff filtered out
//! let args = fuzz::Args::default()
//!     .processor(fuzzratio::utils::default_process)
//!     .score_cutoff(90);
//! assert_eq!(
//!     Some(100),
//!     fuzz::ratio_with_args("New York Mets!", "new york mets", &args)
//! );
//! assert_eq!(None, fuzz::ratio_with_args("New York Mets", "Atlanta", &args));
//! ```
//!
//! The strategy can also be selected at runtime through [`Scorer`]:
//!
//! ```rust
//! use fuzzratio::Scorer;
//!
//! let scorer: Scorer = "token_set_ratio".parse().unwrap();
//! assert_eq!(
//!     100,
//!     scorer.score(
//!         "New York Mets vs Atlanta Braves",
//!         "Atlanta Braves vs New York Mets"
//!     )
//! );
//! ```
//!
//! [`fuzz::weighted_ratio`]: fuzz/fn.weighted_ratio.html
//! [`Scorer`]: enum.Scorer.html

#![forbid(unsafe_code)]
#![allow(
    // scores are bounded by 100 and lengths by the input size
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::similar_names,
    // noisy
    clippy::missing_errors_doc,
)]

pub mod common;
pub(crate) mod details;
pub mod distance;
pub mod fuzz;
mod scorer;
pub mod tokens;
pub mod utils;

pub use scorer::{ParseScorerError, Scorer};

/// Similarity score in the range `0..=100`
///
/// `100` means the inputs are identical under the notion of similarity of the
/// strategy that produced it, `0` means they have nothing in common.
pub type Score = u8;
