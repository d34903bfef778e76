//! Whitespace tokenization feeding the token based scorers.
//!
//! A token is a maximal run of non-whitespace characters, so splitting never
//! yields empty tokens no matter how much whitespace separates the words.
//!
//! ```
//! use fuzzratio::tokens::{TokenSequence, TokenSet};
//!
//! let tokens = TokenSequence::sorted("  new york   mets ");
//! assert_eq!(tokens.as_slice(), &["mets", "new", "york"]);
//!
//! let a = TokenSet::new("new york mets vs atlanta braves");
//! let b = TokenSet::new("new york yankees");
//! let decomposition = a.decompose(&b);
//! assert_eq!(decomposition.intersection, vec!["new", "york"]);
//! assert_eq!(decomposition.difference_ba, vec!["yankees"]);
//! ```

/// Ordered whitespace delimited tokens of a string
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TokenSequence<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> TokenSequence<'a> {
    /// Tokens in their original left to right order
    pub fn new(sentence: &'a str) -> Self {
        Self {
            tokens: sentence.split_whitespace().collect(),
        }
    }

    /// Tokens sorted in ascending lexicographic order
    pub fn sorted(sentence: &'a str) -> Self {
        let mut tokens: Vec<_> = sentence.split_whitespace().collect();
        tokens.sort_unstable();
        Self { tokens }
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().copied()
    }

    /// Joins the tokens with a single space
    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }

    /// Distinct tokens of the sequence
    pub fn to_set(&self) -> TokenSet<'a> {
        let mut tokens = self.tokens.clone();
        tokens.sort_unstable();
        tokens.dedup();
        TokenSet { tokens }
    }
}

/// Distinct tokens of a string, kept sorted
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TokenSet<'a> {
    tokens: Vec<&'a str>,
}

/// Result of splitting two token sets into shared and per side tokens
///
/// `difference_ab` and `difference_ba` never share a token. All three lists
/// are sorted.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SetDecomposition<'a> {
    pub intersection: Vec<&'a str>,
    pub difference_ab: Vec<&'a str>,
    pub difference_ba: Vec<&'a str>,
}

impl<'a> TokenSet<'a> {
    pub fn new(sentence: &'a str) -> Self {
        TokenSequence::new(sentence).to_set()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.binary_search(&token).is_ok()
    }

    /// Splits both sets into their intersection and the tokens only found on
    /// one side
    pub fn decompose(&self, other: &TokenSet<'a>) -> SetDecomposition<'a> {
        let mut decomposition = SetDecomposition::default();
        let mut remaining = other.tokens.clone();

        for &token in &self.tokens {
            match remaining.binary_search(&token) {
                Ok(index) => {
                    remaining.remove(index);
                    decomposition.intersection.push(token);
                }
                Err(_) => decomposition.difference_ab.push(token),
            }
        }

        decomposition.difference_ba = remaining;
        decomposition
    }
}

/// Joins sorted token lists with single spaces
pub(crate) fn join(tokens: &[&str]) -> String {
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_skips_empty_tokens() {
        let tokens = TokenSequence::new("\t fuzzy  wuzzy\nwas a bear  ");
        assert_eq!(tokens.as_slice(), &["fuzzy", "wuzzy", "was", "a", "bear"]);
        assert_eq!(5, tokens.len());
        assert!(TokenSequence::new("   ").is_empty());
        assert!(TokenSequence::new("").is_empty());
    }

    #[test]
    fn sorted_split() {
        let tokens = TokenSequence::sorted("wrong order words");
        assert_eq!(tokens.as_slice(), &["order", "words", "wrong"]);
        assert_eq!("order words wrong", tokens.join());
    }

    #[test]
    fn set_removes_duplicates() {
        let set = TokenSet::new("mets mets new york mets");
        assert_eq!(set.as_slice(), &["mets", "new", "york"]);
        assert!(set.contains("york"));
        assert!(!set.contains("braves"));
    }

    #[test]
    fn decomposition_covers_both_sets() {
        let a = TokenSet::new("new york mets vs atlanta braves");
        let b = TokenSet::new("atlanta braves vs new york yankees");
        let decomposition = a.decompose(&b);

        assert_eq!(
            decomposition.intersection,
            vec!["atlanta", "braves", "new", "vs", "york"]
        );
        assert_eq!(decomposition.difference_ab, vec!["mets"]);
        assert_eq!(decomposition.difference_ba, vec!["yankees"]);
    }

    #[test]
    fn decomposition_without_common_tokens() {
        let a = TokenSet::new("abc def");
        let b = TokenSet::new("ghi");
        let decomposition = a.decompose(&b);

        assert!(decomposition.intersection.is_empty());
        assert_eq!(decomposition.difference_ab, vec!["abc", "def"]);
        assert_eq!(decomposition.difference_ba, vec!["ghi"]);
    }
}
