use log::debug;

use super::partial::partial_ratio_impl;
use super::ratio_impl;
use super::token::{
    partial_token_set_impl, partial_token_sort_impl, token_set_impl, token_sort_impl,
};
use crate::details::common::round_score;
use crate::Score;

/// Tunable constants of `weighted_ratio`
///
/// Inputs whose length ratio (`shorter / longer`, in chars) reaches
/// `comparable_len_ratio` are scored by the full string and token scorers
/// without any down weighting. Below it the partial scorers are weighted with
/// `partial_scale`, everything else additionally with `unbase_scale`. A
/// fragment contained in a much longer string therefore scores
/// `100 * partial_scale` no matter how short it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WRatioWeights {
    pub comparable_len_ratio: f64,
    pub partial_scale: f64,
    pub unbase_scale: f64,
}

impl Default for WRatioWeights {
    fn default() -> Self {
        WRatioWeights {
            comparable_len_ratio: 0.8,
            partial_scale: 0.95,
            unbase_scale: 0.95,
        }
    }
}

fn len_ratio(len1: usize, len2: usize) -> f64 {
    let (shorter, longer) = if len1 <= len2 {
        (len1, len2)
    } else {
        (len2, len1)
    };

    if longer == 0 {
        1.0
    } else {
        shorter as f64 / longer as f64
    }
}

pub(super) fn weighted_ratio_impl(s1: &str, s2: &str, weights: &WRatioWeights) -> Score {
    let len_ratio = len_ratio(s1.chars().count(), s2.chars().count());
    let simple = f64::from(ratio_impl(s1, s2));

    if len_ratio >= weights.comparable_len_ratio {
        let token_sort = f64::from(token_sort_impl(s1, s2));
        let token_set = f64::from(token_set_impl(s1, s2));
        debug!(
            "comparable lengths ({:.3}): ratio {}, token_sort {}, token_set {}",
            len_ratio, simple, token_sort, token_set
        );
        return round_score(simple.max(token_sort).max(token_set));
    }

    let partial_scale = weights.partial_scale;
    let full_scale = weights.unbase_scale * partial_scale;

    let partial = f64::from(partial_ratio_impl(s1, s2)) * partial_scale;
    let partial_token_sort = f64::from(partial_token_sort_impl(s1, s2)) * full_scale;
    let partial_token_set = f64::from(partial_token_set_impl(s1, s2)) * full_scale;
    let simple = simple * full_scale;
    debug!(
        "different lengths ({:.3}): ratio {}, partial {}, partial_token_sort {}, partial_token_set {}",
        len_ratio, simple, partial, partial_token_sort, partial_token_set
    );

    round_score(
        partial
            .max(partial_token_sort)
            .max(partial_token_set)
            .max(simple),
    )
}
