use super::partial::{partial_ratio_impl, partial_ratio_slices};
use super::{ratio_impl, ratio_slices};
use crate::tokens::{join, TokenSequence, TokenSet};
use crate::Score;

pub(super) fn token_sort_impl(s1: &str, s2: &str) -> Score {
    ratio_impl(
        &TokenSequence::sorted(s1).join(),
        &TokenSequence::sorted(s2).join(),
    )
}

pub(super) fn partial_token_sort_impl(s1: &str, s2: &str) -> Score {
    partial_ratio_impl(
        &TokenSequence::sorted(s1).join(),
        &TokenSequence::sorted(s2).join(),
    )
}

/// `sect + " " + diff`, leaving out whichever part is empty
fn join_with_intersection(sect: &str, diff: &[&str]) -> String {
    match (sect.is_empty(), diff.is_empty()) {
        (_, true) => sect.to_owned(),
        (true, false) => join(diff),
        (false, false) => format!("{} {}", sect, join(diff)),
    }
}

fn token_set_with(s1: &str, s2: &str, scorer: fn(&str, &str) -> Score) -> Score {
    let tokens_a = TokenSet::new(s1);
    let tokens_b = TokenSet::new(s2);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return if tokens_a.is_empty() && tokens_b.is_empty() {
            100
        } else {
            0
        };
    }

    let decomposition = tokens_a.decompose(&tokens_b);
    let sect = join(&decomposition.intersection);
    let sect_ab = join_with_intersection(&sect, &decomposition.difference_ab);
    let sect_ba = join_with_intersection(&sect, &decomposition.difference_ba);

    scorer(&sect_ab, &sect_ba)
        .max(scorer(&sect, &sect_ab))
        .max(scorer(&sect, &sect_ba))
}

pub(super) fn token_set_impl(s1: &str, s2: &str) -> Score {
    token_set_with(s1, s2, ratio_impl)
}

pub(super) fn partial_token_set_impl(s1: &str, s2: &str) -> Score {
    token_set_with(s1, s2, partial_ratio_impl)
}

pub(super) fn token_difference_impl(s1: &str, s2: &str) -> Score {
    ratio_slices(
        TokenSequence::sorted(s1).as_slice(),
        TokenSequence::sorted(s2).as_slice(),
    )
}

pub(super) fn partial_token_difference_impl(s1: &str, s2: &str) -> Score {
    partial_ratio_slices(
        TokenSequence::sorted(s1).as_slice(),
        TokenSequence::sorted(s2).as_slice(),
    )
}
