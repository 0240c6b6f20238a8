//! Plain-text rendering of query results.

use crate::common::CommonFeatureProfile;
use crate::compare::ComparisonResult;
use crate::query::ConstraintSet;
use crate::segment::SegmentSet;

/// `"1 segment"`, `"3 segments"`.
pub fn pluralize_segments(count: usize) -> String {
    if count > 1 {
        format!("{} segments", count)
    } else {
        format!("{} segment", count)
    }
}

/// Message for a natural class lookup.
pub fn render_natural_class(constraints: &ConstraintSet, class: &SegmentSet) -> String {
    if constraints.is_empty() {
        return "segments will appear once features have been selected".to_string();
    }
    if class.is_empty() {
        return "No segments share all the features selected".to_string();
    }
    class.to_string()
}

/// Message for the common features of one set. `None` for an empty set.
pub fn render_common_features(
    segments: &SegmentSet,
    profile: &CommonFeatureProfile,
) -> Option<String> {
    if segments.is_empty() {
        return None;
    }
    if profile.is_empty() {
        return Some("These segments have no features in common!".to_string());
    }

    let mut out = String::from("Common features include:");
    for (feature, value) in profile.iter() {
        out.push_str(&format!("\n  {}{}", value, feature));
    }
    Some(out)
}

/// Message for a set comparison. `None` when both sets are empty.
pub fn render_comparison(result: &ComparisonResult) -> Option<String> {
    match result {
        ComparisonResult::Empty => None,
        ComparisonResult::Differences(features) => {
            let mut out = String::from("Features distinguishing set A from set B:");
            for feature in features {
                out.push_str(&format!("\n  {}", feature));
            }
            Some(out)
        }
        ComparisonResult::Uniques(uniques) => {
            let mut out = String::from("Common features of A that are not common to B:");
            for unique in uniques {
                out.push_str(&format!(
                    "\n  {}{} (distinguishes A from {} in B)",
                    unique.value,
                    unique.feature,
                    pluralize_segments(unique.exclusion_count)
                ));
            }
            Some(out)
        }
        ComparisonResult::NoDistinction => {
            Some("No features distinguish these two sets of segments.".to_string())
        }
    }
}

/// Warning for tokens missing from the table. `None` when all were found.
pub fn render_unrecognised(tokens: &[String]) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    Some(format!(
        "The following segment(s) are not recognised: {}",
        tokens.join(", ")
    ))
}
