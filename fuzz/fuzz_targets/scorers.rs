#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use fuzzratio::fuzz::Args;
use fuzzratio::utils::default_process;
use fuzzratio::Scorer;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let args = Args::default().processor(default_process);
    for scorer in Scorer::ALL {
        let score = scorer.score(&texts.s1, &texts.s2);
        assert!(score <= 100, "{} returned {}", scorer, score);
        assert!(scorer.score_with_args(&texts.s1, &texts.s2, &args) <= 100);

        if scorer.is_symmetric() {
            assert_eq!(score, scorer.score(&texts.s2, &texts.s1), "{}", scorer);
        }
    }
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
