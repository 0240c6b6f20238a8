//! Features shared by every member of a segment set.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::feature::{Feature, FeatureValue};
use crate::segment::SegmentSet;
use crate::table::FeatureTable;

/// The features on which every segment of a set agrees, with the agreed
/// value. Iterates in feature declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommonFeatureProfile(BTreeMap<Feature, FeatureValue>);

impl CommonFeatureProfile {
    pub fn get(&self, feature: Feature) -> Option<FeatureValue> {
        self.0.get(&feature).copied()
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains_key(&feature)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, FeatureValue)> + '_ {
        self.0.iter().map(|(&f, &v)| (f, v))
    }
}

impl FromIterator<(Feature, FeatureValue)> for CommonFeatureProfile {
    fn from_iter<I: IntoIterator<Item = (Feature, FeatureValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Signed feature list, e.g. `-syllabic +nasal`.
impl fmt::Display for CommonFeatureProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(feature, value)| format!("{}{}", value, feature))
            .collect();
        f.write_str(&parts.join(" "))
    }
}

/// Compute the features shared by every segment in `segments`.
///
/// A feature is kept only when exactly one distinct value occurs across the
/// set, so an empty set yields an empty profile.
///
/// # Panics
/// Panics if a segment is not in `table`; validate input first.
pub fn common_features(table: &FeatureTable, segments: &SegmentSet) -> CommonFeatureProfile {
    let vectors: Vec<_> = segments.iter().map(|s| table.lookup(s)).collect();

    Feature::ALL
        .into_iter()
        .filter_map(|feature| {
            let mut values = vectors.iter().map(|v| v.get(feature));
            let first = values.next()?;
            values.all(|v| v == first).then_some((feature, first))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeatureValue::{Minus, Plus};

    fn profile(segments: &[&str]) -> CommonFeatureProfile {
        let table = FeatureTable::standard();
        common_features(table, &table.validate(segments))
    }

    #[test]
    fn empty_set_has_empty_profile() {
        assert!(profile(&[]).is_empty());
    }

    #[test]
    fn single_segment_profile_is_full_vector() {
        let p = profile(&["m"]);
        assert_eq!(p.len(), Feature::COUNT);
        for (feature, value) in FeatureTable::standard().lookup("m").iter() {
            assert_eq!(p.get(feature), Some(value));
        }
    }

    #[test]
    fn nasals_share_manner_not_place() {
        let p = profile(&["m", "n", "ŋ"]);
        assert_eq!(p.get(Feature::Nasal), Some(Plus));
        assert_eq!(p.get(Feature::Sonorant), Some(Plus));
        assert_eq!(p.get(Feature::Continuant), Some(Minus));
        assert!(!p.contains(Feature::Coronal));
        assert!(!p.contains(Feature::Anterior));
    }

    #[test]
    fn order_and_duplicates_do_not_matter() {
        assert_eq!(profile(&["p", "d", "k"]), profile(&["k", "p", "d", "p"]));
    }

    #[test]
    fn display_lists_signed_features() {
        assert_eq!(
            profile(&["p", "t"]).to_string(),
            "-syllabic -sonorant +consonantal -continuant -nasal +anterior -lateral -voice"
        );
    }
}
