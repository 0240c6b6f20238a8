//! Shared test fixtures

#![allow(dead_code)]

use impress_phonology::{FeatureTable, SegmentSet};

/// Nasals and voiceless stops at three places of articulation.
pub const SMALL_TABLE: &str = "\
segment syllabic sonorant consonantal continuant nasal anterior coronal lateral voice
m   - + + - + + - - +
n   - + + - + + + - +
ŋ   - + + - + - - - +
p   - - + - - + - - -
t   - - + - - + + - -
k   - - + - - - - - -
";

/// Load the small fixture table
pub fn small_table() -> FeatureTable {
    FeatureTable::parse(SMALL_TABLE)
        .unwrap_or_else(|e| panic!("Failed to load fixture table: {}", e))
}

/// Build a segment set from symbols without validation
pub fn segments(symbols: &[&str]) -> SegmentSet {
    symbols.iter().copied().collect()
}
