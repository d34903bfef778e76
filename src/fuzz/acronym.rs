//! Initialism and abbreviation scorers.
//!
//! Both split the inputs by length: the shorter string is the candidate
//! acronym, the longer one the words it might stand for. Initialisms compare
//! whole strings, so their lengths include whitespace. Abbreviations only
//! look at the chars of the tokens.

use log::trace;

use super::partial::partial_ratio_impl;
use super::ratio_impl;
use crate::tokens::TokenSequence;
use crate::Score;

/// Orders the inputs by char count. On equal length `s1` is the shorter.
fn split_by_length<'a>(s1: &'a str, s2: &'a str) -> (&'a str, &'a str) {
    if s1.chars().count() <= s2.chars().count() {
        (s1, s2)
    } else {
        (s2, s1)
    }
}

fn initialism(sentence: &str) -> String {
    TokenSequence::new(sentence)
        .iter()
        .filter_map(|token| token.chars().next())
        .collect()
}

fn token_initialism_with(s1: &str, s2: &str, scorer: fn(&str, &str) -> Score) -> Score {
    let (shorter, longer) = split_by_length(s1, s2);
    scorer(&initialism(longer), shorter)
}

pub(super) fn token_initialism_impl(s1: &str, s2: &str) -> Score {
    token_initialism_with(s1, s2, ratio_impl)
}

pub(super) fn partial_token_initialism_impl(s1: &str, s2: &str) -> Score {
    token_initialism_with(s1, s2, partial_ratio_impl)
}

fn lowercase_chars(token: &str) -> Vec<char> {
    token.chars().flat_map(char::to_lowercase).collect()
}

/// Matches `abbreviation` greedily as a subsequence of `tokens` and returns
/// the text it explains, or `None` if some char is never matched.
///
/// A token containing matches contributes everything up to its last matched
/// char, a token without matches contributes itself.
fn expansion(abbreviation: &[char], tokens: &[Vec<char>]) -> Option<String> {
    let mut pending = abbreviation.iter().peekable();
    let mut expanded = String::new();

    for token in tokens {
        let mut last_match = None;
        for (pos, ch) in token.iter().enumerate() {
            if pending.peek() == Some(&ch) {
                pending.next();
                last_match = Some(pos);
            }
        }

        match last_match {
            Some(pos) => expanded.extend(&token[..=pos]),
            None => expanded.extend(token),
        }
    }

    pending.peek().is_none().then_some(expanded)
}

/// lowercased chars of all tokens, whitespace removed
fn abbreviation_letters(sentence: &str) -> Vec<char> {
    TokenSequence::new(sentence)
        .iter()
        .flat_map(lowercase_chars)
        .collect()
}

fn token_abbreviation_with(s1: &str, s2: &str, scorer: fn(&str, &str) -> Score) -> Score {
    // lengths are compared without whitespace, as the candidate is built
    // from the concatenated tokens
    let letters1 = abbreviation_letters(s1);
    let letters2 = abbreviation_letters(s2);
    let (abbreviation, longer) = if letters1.len() <= letters2.len() {
        (letters1, s2)
    } else {
        (letters2, s1)
    };

    let tokens: Vec<Vec<char>> = TokenSequence::new(longer)
        .iter()
        .map(lowercase_chars)
        .collect();

    match expansion(&abbreviation, &tokens) {
        Some(expanded) => {
            let abbreviation: String = abbreviation.into_iter().collect();
            trace!("abbreviation {:?} expands to {:?}", abbreviation, expanded);
            scorer(&abbreviation, &expanded)
        }
        None => {
            trace!("{:?} is not an abbreviation of {:?}", abbreviation, longer);
            0
        }
    }
}

pub(super) fn token_abbreviation_impl(s1: &str, s2: &str) -> Score {
    token_abbreviation_with(s1, s2, ratio_impl)
}

pub(super) fn partial_token_abbreviation_impl(s1: &str, s2: &str) -> Score {
    token_abbreviation_with(s1, s2, partial_ratio_impl)
}
