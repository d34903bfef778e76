use crate::Score;

pub(crate) fn find_common_prefix<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    s1.iter()
        .zip(s2.iter())
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

pub(crate) fn find_common_suffix<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    s1.iter()
        .rev()
        .zip(s2.iter().rev())
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

/// strips the common prefix and suffix, which never affect the edit distance
pub(crate) fn remove_common_affix<'a, 'b, Elem1, Elem2>(
    s1: &'a [Elem1],
    s2: &'b [Elem2],
) -> (&'a [Elem1], &'b [Elem2])
where
    Elem1: PartialEq<Elem2>,
{
    let prefix_len = find_common_prefix(s1, s2);
    let s1 = &s1[prefix_len..];
    let s2 = &s2[prefix_len..];

    let suffix_len = find_common_suffix(s1, s2);
    (&s1[..s1.len() - suffix_len], &s2[..s2.len() - suffix_len])
}

/// `round(100 * (lensum - dist) / lensum)` rounding halves up.
///
/// Done in integers so scores like `62.5` land on the right side.
pub(crate) fn norm_ratio(dist: usize, lensum: usize) -> Score {
    if lensum == 0 {
        return 100;
    }
    debug_assert!(dist <= lensum);
    let sim = lensum - dist;
    ((200 * sim + lensum) / (2 * lensum)) as Score
}

/// Largest distance for which `norm_ratio` still reaches `score_cutoff`
pub(crate) fn max_distance(score_cutoff: Score, lensum: usize) -> usize {
    let cutoff = usize::from(score_cutoff.min(100));
    (lensum * (201 - 2 * cutoff) / 200).min(lensum)
}

/// rounds a weighted score halves up and clamps it into `0..=100`
pub(crate) fn round_score(score: f64) -> Score {
    (score + 0.5).floor().clamp(0.0, 100.0) as Score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affix_is_removed_on_both_sides() {
        let s1: Vec<char> = "kitten".chars().collect();
        let s2: Vec<char> = "sitten".chars().collect();
        let (a, b) = remove_common_affix(&s1, &s2);
        assert_eq!(a, &['k']);
        assert_eq!(b, &['s']);
    }

    #[test]
    fn affix_of_identical_sequences_is_everything() {
        let s1: Vec<char> = "aaaa".chars().collect();
        let (a, b) = remove_common_affix(&s1, &s1[..2]);
        assert!(b.is_empty());
        assert_eq!(a, &['a', 'a']);
    }

    #[test]
    fn norm_ratio_rounds_half_up() {
        // 100 * 5 / 8 = 62.5
        assert_eq!(63, norm_ratio(3, 8));
        // 100 * 2 / 3 = 66.67
        assert_eq!(67, norm_ratio(1, 3));
        assert_eq!(100, norm_ratio(0, 0));
        assert_eq!(0, norm_ratio(4, 4));
    }

    #[test]
    fn max_distance_matches_norm_ratio() {
        for lensum in 0..60 {
            for cutoff in 0..=100 {
                let max = max_distance(cutoff, lensum);
                for dist in 0..=lensum {
                    assert_eq!(
                        norm_ratio(dist, lensum) >= cutoff,
                        dist <= max,
                        "lensum {} cutoff {} dist {}",
                        lensum,
                        cutoff,
                        dist
                    );
                }
            }
        }
        // long inputs keep a score of 100 with a single edit
        assert_eq!(1, max_distance(100, 200));
        assert_eq!(0, max_distance(100, 199));
    }

    #[test]
    fn round_score_rounds_half_up() {
        assert_eq!(91, round_score(90.5));
        assert_eq!(90, round_score(90.25));
        assert_eq!(100, round_score(100.0));
        assert_eq!(0, round_score(0.0));
    }
}
