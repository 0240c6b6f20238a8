//! Comparison of two segment sets.
//!
//! Both sets are reduced to their common feature profiles. A feature that
//! both profiles specify with different values is a *difference*. When no
//! difference exists, the features in A's profile that B's profile lacks are
//! reported as *uniques*, each scored by how many members of B it rules out.

use serde::{Deserialize, Serialize};

use crate::common::common_features;
use crate::feature::{Feature, FeatureValue};
use crate::segment::SegmentSet;
use crate::table::FeatureTable;

/// A feature common to set A but not to set B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueFeature {
    pub feature: Feature,
    pub value: FeatureValue,
    /// Members of B whose value for `feature` differs from `value`.
    pub excluded: SegmentSet,
    pub exclusion_count: usize,
}

/// Outcome of comparing set A with set B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "features", rename_all = "snake_case")]
pub enum ComparisonResult {
    /// Both sets are empty.
    Empty,
    /// Features both profiles specify with conflicting values.
    Differences(Vec<Feature>),
    /// Features of A's profile absent from B's profile.
    Uniques(Vec<UniqueFeature>),
    /// Nothing distinguishes the sets.
    NoDistinction,
}

/// Compare segment set `a` against segment set `b`.
///
/// Differences take precedence: uniques are only reported when no feature
/// conflicts. Entries follow feature declaration order.
///
/// # Panics
/// Panics if a segment is not in `table`; validate input first.
pub fn compare(table: &FeatureTable, a: &SegmentSet, b: &SegmentSet) -> ComparisonResult {
    if a.is_empty() && b.is_empty() {
        return ComparisonResult::Empty;
    }
    if a.is_empty() || b.is_empty() {
        return ComparisonResult::NoDistinction;
    }

    let profile_a = common_features(table, a);
    let profile_b = common_features(table, b);
    if profile_a.is_empty() {
        return ComparisonResult::NoDistinction;
    }

    let differences: Vec<Feature> = profile_a
        .iter()
        .filter(|&(feature, value)| profile_b.get(feature).is_some_and(|v| v != value))
        .map(|(feature, _)| feature)
        .collect();
    if !differences.is_empty() {
        tracing::debug!("Sets differ on {} features", differences.len());
        return ComparisonResult::Differences(differences);
    }

    let uniques: Vec<UniqueFeature> = profile_a
        .iter()
        .filter(|&(feature, _)| !profile_b.contains(feature))
        .map(|(feature, value)| {
            let excluded: SegmentSet = b
                .iter()
                .filter(|s| table.lookup(s).get(feature) != value)
                .collect();
            UniqueFeature {
                feature,
                value,
                exclusion_count: excluded.len(),
                excluded,
            }
        })
        .collect();
    if !uniques.is_empty() {
        tracing::debug!("Set A has {} features not common to B", uniques.len());
        return ComparisonResult::Uniques(uniques);
    }

    ComparisonResult::NoDistinction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(segments: &[&str]) -> SegmentSet {
        FeatureTable::standard().validate(segments)
    }

    fn cmp(a: &[&str], b: &[&str]) -> ComparisonResult {
        compare(FeatureTable::standard(), &set(a), &set(b))
    }

    #[test]
    fn both_empty() {
        assert_eq!(cmp(&[], &[]), ComparisonResult::Empty);
    }

    #[test]
    fn one_side_empty() {
        assert_eq!(cmp(&["m"], &[]), ComparisonResult::NoDistinction);
        assert_eq!(cmp(&[], &["m"]), ComparisonResult::NoDistinction);
    }

    #[test]
    fn identical_sets() {
        assert_eq!(cmp(&["p", "t", "k"], &["p", "t", "k"]), ComparisonResult::NoDistinction);
    }

    #[test]
    fn m_and_n_differ_in_coronal() {
        assert_eq!(
            cmp(&["m"], &["n"]),
            ComparisonResult::Differences(vec![Feature::Coronal])
        );
    }

    #[test]
    fn voiced_against_voiceless() {
        assert_eq!(
            cmp(&["b", "d"], &["p", "t"]),
            ComparisonResult::Differences(vec![Feature::Voice])
        );
    }

    #[test]
    fn uniques_count_exclusions_in_b() {
        // A: voiced labial stop; B: labial stops of both voicings plus m
        let result = cmp(&["b"], &["p", "b", "m"]);
        let ComparisonResult::Uniques(uniques) = &result else {
            panic!("Expected Uniques, got {:?}", result);
        };
        let features: Vec<Feature> = uniques.iter().map(|u| u.feature).collect();
        assert_eq!(
            features,
            vec![Feature::Sonorant, Feature::Nasal, Feature::Voice]
        );

        let voice = &uniques[2];
        assert_eq!(voice.value, FeatureValue::Plus);
        assert_eq!(voice.exclusion_count, 1);
        assert_eq!(voice.excluded, set(&["p"]));

        let nasal = &uniques[1];
        assert_eq!(nasal.value, FeatureValue::Minus);
        assert_eq!(nasal.excluded, set(&["m"]));
    }

    #[test]
    fn differences_suppress_uniques() {
        // Voice conflicts; A also has a unique place feature
        let result = cmp(&["b"], &["p", "k"]);
        assert_eq!(result, ComparisonResult::Differences(vec![Feature::Voice]));
    }

    #[test]
    fn subset_profile_gives_no_distinction() {
        // A's profile is a subset of B's profile
        assert_eq!(cmp(&["p", "a"], &["p"]), ComparisonResult::NoDistinction);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(cmp(&["m"], &["n"])).unwrap();
        assert_eq!(json["kind"], "differences");
        assert_eq!(json["features"][0], "coronal");
    }
}
