pub(crate) mod common;
pub(crate) mod pattern_match;
