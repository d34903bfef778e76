#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use fuzzratio::distance::levenshtein;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
    pub cutoff: u8,
}

fn fuzz(texts: Texts) {
    let dist = levenshtein::distance(texts.s1.chars(), texts.s2.chars());
    assert_eq!(dist, levenshtein::distance(texts.s2.chars(), texts.s1.chars()));
    assert!(dist <= texts.s1.chars().count().max(texts.s2.chars().count()));

    let cutoff = usize::from(texts.cutoff);
    let args = levenshtein::Args::default().score_cutoff(cutoff);
    let filtered = levenshtein::distance_with_args(texts.s1.chars(), texts.s2.chars(), &args);
    assert_eq!((dist <= cutoff).then_some(dist), filtered);
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
