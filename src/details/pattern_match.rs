use std::collections::HashMap;
use std::hash::Hash;

/// Positions of every distinct element of a pattern as bit masks, split into
/// 64 bit words
///
/// Elements only need `Eq + Hash`, so chars and whole tokens are handled the
/// same way.
#[derive(Clone, Debug)]
pub(crate) struct BlockPatternMatchVector {
    len: usize,
    words: usize,
    // `words` masks per distinct element
    masks: Vec<u64>,
}

impl BlockPatternMatchVector {
    /// Builds the masks for `pattern` and encodes `text` as keys into them.
    ///
    /// Elements of `text` that never occur in `pattern` are encoded as `None`.
    pub(crate) fn encode<T>(pattern: &[T], text: &[T]) -> (Self, Vec<Option<usize>>)
    where
        T: Eq + Hash,
    {
        let words = (pattern.len() + 63) / 64;
        let mut keys: HashMap<&T, usize> = HashMap::new();
        let mut masks = Vec::new();

        for (pos, elem) in pattern.iter().enumerate() {
            let next = keys.len();
            let key = *keys.entry(elem).or_insert(next);
            if key == next {
                masks.resize(masks.len() + words, 0_u64);
            }
            masks[key * words + pos / 64] |= 1 << (pos % 64);
        }

        let text = text.iter().map(|elem| keys.get(elem).copied()).collect();
        (
            Self {
                len: pattern.len(),
                words,
                masks,
            },
            text,
        )
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn words(&self) -> usize {
        self.words
    }

    pub(crate) fn get(&self, word: usize, key: Option<usize>) -> u64 {
        key.map_or(0, |key| self.masks[key * self.words + word])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_per_element() {
        let pattern: Vec<char> = "abca".chars().collect();
        let text: Vec<char> = "axc".chars().collect();
        let (pm, keys) = BlockPatternMatchVector::encode(&pattern, &text);

        assert_eq!(keys, vec![Some(0), None, Some(2)]);
        assert_eq!(1, pm.words());
        assert_eq!(0b1001, pm.get(0, Some(0)));
        assert_eq!(0b0100, pm.get(0, Some(2)));
        assert_eq!(0, pm.get(0, None));
    }

    #[test]
    fn masks_span_words() {
        let pattern = vec!["word"; 70];
        let (pm, keys) = BlockPatternMatchVector::encode(&pattern, &["word", "other"]);

        assert_eq!(keys, vec![Some(0), None]);
        assert_eq!(2, pm.words());
        assert_eq!(!0_u64, pm.get(0, Some(0)));
        assert_eq!(0b11_1111, pm.get(1, Some(0)));
    }
}
