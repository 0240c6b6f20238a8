//! Natural class queries.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::feature::{Feature, FeatureValue};
use crate::segment::SegmentSet;
use crate::table::{FeatureTable, FeatureVector};

/// One feature toggle from the class builder: the feature, whether it is
/// switched on, and the value chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSelection {
    pub feature: Feature,
    pub included: bool,
    pub value: FeatureValue,
}

/// Conjunction of `feature = value` constraints, at most one per feature.
///
/// Iterates in feature declaration order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintSet(BTreeMap<Feature, FeatureValue>);

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from class-builder toggles; only included features contribute.
    pub fn from_selections(selections: &[FeatureSelection]) -> Self {
        selections
            .iter()
            .filter(|s| s.included)
            .map(|s| (s.feature, s.value))
            .collect()
    }

    /// Constrain a feature, replacing any previous value for it.
    pub fn insert(&mut self, feature: Feature, value: FeatureValue) -> Option<FeatureValue> {
        self.0.insert(feature, value)
    }

    /// Drop the constraint on a feature.
    pub fn remove(&mut self, feature: Feature) -> Option<FeatureValue> {
        self.0.remove(&feature)
    }

    pub fn get(&self, feature: Feature) -> Option<FeatureValue> {
        self.0.get(&feature).copied()
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

    /// Test whether a feature vector satisfies every constraint.
    pub fn matches(&self, vector: &FeatureVector) -> bool {
        self.iter().all(|(feature, value)| vector.get(feature) == value)
    }
}

impl FromIterator<(Feature, FeatureValue)> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = (Feature, FeatureValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Compact notation, e.g. `+nasal -voice`.
impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(feature, value)| format!("{}{}", value, feature))
            .collect();
        f.write_str(&parts.join(" "))
    }
}

/// Every segment in `table` satisfying all `constraints`, in table order.
///
/// An empty constraint set selects nothing: a natural class needs at least
/// one feature to define it.
pub fn natural_class(table: &FeatureTable, constraints: &ConstraintSet) -> SegmentSet {
    if constraints.is_empty() {
        return SegmentSet::new();
    }

    let class: SegmentSet = table
        .iter()
        .filter(|(_, vector)| constraints.matches(vector))
        .map(|(segment, _)| segment)
        .collect();

    tracing::debug!("Natural class [{}] has {} segments", constraints, class.len());
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of(constraints: &ConstraintSet) -> Vec<String> {
        natural_class(FeatureTable::standard(), constraints).into_vec()
    }

    #[test]
    fn nasals() {
        let set: ConstraintSet = [(Feature::Nasal, FeatureValue::Plus)].into_iter().collect();
        assert_eq!(class_of(&set), vec!["m", "n", "ɲ", "ŋ"]);
    }

    #[test]
    fn voiceless_coronal_fricatives() {
        let set: ConstraintSet = [
            (Feature::Voice, FeatureValue::Minus),
            (Feature::Coronal, FeatureValue::Plus),
            (Feature::Continuant, FeatureValue::Plus),
        ]
        .into_iter()
        .collect();
        assert_eq!(class_of(&set), vec!["θ", "s", "ʃ"]);
    }

    #[test]
    fn empty_constraints_select_nothing() {
        assert!(class_of(&ConstraintSet::new()).is_empty());
    }

    #[test]
    fn impossible_class_is_empty() {
        let set: ConstraintSet = [
            (Feature::Syllabic, FeatureValue::Plus),
            (Feature::Nasal, FeatureValue::Plus),
        ]
        .into_iter()
        .collect();
        assert!(class_of(&set).is_empty());
    }

    #[test]
    fn from_selections_skips_excluded() {
        let selections = [
            FeatureSelection {
                feature: Feature::Nasal,
                included: true,
                value: FeatureValue::Plus,
            },
            FeatureSelection {
                feature: Feature::Voice,
                included: false,
                value: FeatureValue::Minus,
            },
        ];
        let set = ConstraintSet::from_selections(&selections);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(Feature::Nasal), Some(FeatureValue::Plus));
        assert_eq!(set.get(Feature::Voice), None);
    }

    #[test]
    fn insert_replaces_and_remove_drops() {
        let mut set = ConstraintSet::new();
        assert_eq!(set.insert(Feature::Voice, FeatureValue::Plus), None);
        assert_eq!(
            set.insert(Feature::Voice, FeatureValue::Minus),
            Some(FeatureValue::Plus)
        );
        assert_eq!(set.remove(Feature::Voice), Some(FeatureValue::Minus));
        assert!(set.is_empty());
    }

    #[test]
    fn display_in_feature_order() {
        let mut set = ConstraintSet::new();
        set.insert(Feature::Voice, FeatureValue::Minus);
        set.insert(Feature::Nasal, FeatureValue::Plus);
        assert_eq!(set.to_string(), "+nasal -voice");
    }
}
