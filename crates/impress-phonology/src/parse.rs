//! Text input parsing.
//!
//! Splits free-text segment lists and parses compact constraint notation
//! into structured values.

use crate::config::InputConfig;
use crate::error::{PhonologyError, Result};
use crate::feature::{Feature, FeatureValue};
use crate::query::ConstraintSet;

/// Split a free-text segment list into trimmed tokens.
///
/// Empty tokens are kept so callers see exactly what was typed; validation
/// against a table drops them.
///
/// # Examples
/// ```
/// use impress_phonology::{split_segment_input, InputConfig};
/// let tokens = split_segment_input("m, n/ ŋ", &InputConfig::default());
/// assert_eq!(tokens, vec!["m", "n", "ŋ"]);
/// ```
pub fn split_segment_input(input: &str, config: &InputConfig) -> Vec<String> {
    input
        .split(|c: char| config.delimiters.contains(&c))
        .map(|s| s.trim().to_string())
        .collect()
}

/// Parse one constraint in `<value><feature>` form, e.g. `+nasal`.
pub fn parse_constraint(input: &str) -> Result<(Feature, FeatureValue)> {
    let input = input.trim();
    let mut chars = input.chars();
    let value = chars
        .next()
        .and_then(FeatureValue::from_char)
        .ok_or_else(|| PhonologyError::InvalidConstraint(input.to_string()))?;
    let feature = chars.as_str().parse::<Feature>()?;
    Ok((feature, value))
}

/// Parse whitespace- or comma-separated constraints, e.g. `+nasal -voice`.
///
/// A later constraint on the same feature replaces an earlier one.
///
/// # Examples
/// ```
/// use impress_phonology::{parse_constraints, Feature, FeatureValue};
/// let set = parse_constraints("+nasal, -voice").unwrap();
/// assert_eq!(set.get(Feature::Nasal), Some(FeatureValue::Plus));
/// assert!(parse_constraints("?nasal").is_err());
/// ```
pub fn parse_constraints(input: &str) -> Result<ConstraintSet> {
    let mut set = ConstraintSet::new();
    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
    {
        let (feature, value) = parse_constraint(token)?;
        set.insert(feature, value);
    }
    Ok(set)
}
