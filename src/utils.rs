//! Preprocessing applied to both inputs before they are scored.

use std::borrow::Cow;

/// Transform applied once to each raw input before scoring
///
/// It is never applied to derived strings like joined tokens or initialisms.
/// Every `Fn(&str) -> String` is a preprocessor, so plain functions such as
/// [`default_process`] or closures can be passed to `Args::processor`.
pub trait Preprocessor {
    fn preprocess<'a>(&self, s: &'a str) -> Cow<'a, str>;
}

/// Leaves the input untouched
#[derive(Default, Copy, Clone, Debug)]
pub struct NoProcessor;

impl Preprocessor for NoProcessor {
    fn preprocess<'a>(&self, s: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(s)
    }
}

impl<F> Preprocessor for F
where
    F: Fn(&str) -> String,
{
    fn preprocess<'a>(&self, s: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(s))
    }
}

/// Replaces every non alphanumeric character with a space, lowercases the
/// string and trims surrounding whitespace
///
/// # Example
/// ```
/// use fuzzratio::utils::default_process;
///
/// assert_eq!("new york mets", default_process("  New York Mets!"));
/// assert_eq!("o neil   co", default_process("O'Neil & Co."));
/// ```
pub fn default_process(sentence: &str) -> String {
    let s: String = sentence
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { ' ' })
        .collect();

    s.trim().to_lowercase()
}
