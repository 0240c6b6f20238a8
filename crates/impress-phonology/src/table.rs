//! The distinctive feature table.
//!
//! A table maps each segment symbol to a [`FeatureVector`] giving a value for
//! every [`Feature`]. Tables are built once and never mutated; the built-in
//! table is loaded lazily on first use and shared for the life of the process.

use std::collections::HashMap;
use std::ops::Index;

use lazy_static::lazy_static;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{PhonologyError, Result};
use crate::feature::{Feature, FeatureValue};
use crate::segment::{Segment, SegmentSet};

/// Built-in IPA feature table.
///
/// Place features are unspecified (`0`) for vowels and laryngeals.
const STANDARD_TABLE: &str = "\
segment syllabic sonorant consonantal continuant nasal anterior coronal lateral voice
# stops and affricates
p   - - + - - + - - -
b   - - + - - + - - +
t   - - + - - + + - -
d   - - + - - + + - +
k   - - + - - - - - -
g   - - + - - - - - +
ʔ   - - - - - 0 0 - -
tʃ  - - + - - - + - -
dʒ  - - + - - - + - +
# fricatives
f   - - + + - + - - -
v   - - + + - + - - +
θ   - - + + - + + - -
ð   - - + + - + + - +
s   - - + + - + + - -
z   - - + + - + + - +
ʃ   - - + + - - + - -
ʒ   - - + + - - + - +
x   - - + + - - - - -
ɣ   - - + + - - - - +
h   - - - + - 0 0 - -
# nasals
m   - + + - + + - - +
n   - + + - + + + - +
ɲ   - + + - + - + - +
ŋ   - + + - + - - - +
# liquids and glides
l   - + + + - + + + +
r   - + + + - + + - +
ɹ   - + - + - + + - +
j   - + - + - - + - +
w   - + - + - - - - +
# vowels
i   + + - + - 0 0 - +
ɪ   + + - + - 0 0 - +
e   + + - + - 0 0 - +
ɛ   + + - + - 0 0 - +
a   + + - + - 0 0 - +
ɑ   + + - + - 0 0 - +
ɔ   + + - + - 0 0 - +
o   + + - + - 0 0 - +
ʊ   + + - + - 0 0 - +
u   + + - + - 0 0 - +
ə   + + - + - 0 0 - +
";

lazy_static! {
    static ref STANDARD: FeatureTable = FeatureTable::parse(STANDARD_TABLE)
        .unwrap_or_else(|e| panic!("built-in feature table is malformed: {}", e));
}

/// Values of every feature for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureVector([FeatureValue; Feature::COUNT]);

impl FeatureVector {
    /// Build a vector from values listed in [`Feature::ALL`] order.
    pub fn new(values: [FeatureValue; Feature::COUNT]) -> Self {
        Self(values)
    }

    /// Value of a feature.
    pub fn get(&self, feature: Feature) -> FeatureValue {
        self.0[feature.index()]
    }

    /// Iterate `(feature, value)` pairs in feature order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, FeatureValue)> + '_ {
        Feature::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

impl Index<Feature> for FeatureVector {
    type Output = FeatureValue;

    fn index(&self, feature: Feature) -> &FeatureValue {
        &self.0[feature.index()]
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Feature::COUNT))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(&feature, &value)?;
        }
        map.end()
    }
}

/// Segment → feature vector mapping, in load order.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    rows: Vec<(Segment, FeatureVector)>,
    index: HashMap<Segment, usize>,
}

impl FeatureTable {
    /// The built-in table.
    pub fn standard() -> &'static FeatureTable {
        &STANDARD
    }

    /// Parse a table from its text form.
    ///
    /// The first non-comment line is a header: a label column followed by
    /// every feature name exactly once, in any order. Each following line is
    /// a segment symbol and one value (`+`, `-`, `0`) per header feature.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (_, header) = lines
            .next()
            .ok_or_else(|| PhonologyError::MalformedHeader("table is empty".to_string()))?;
        let columns = parse_header(header)?;

        let mut rows = Vec::new();
        let mut index = HashMap::new();
        for (line_no, line) in lines {
            let mut cells = line.split_whitespace();
            let Some(segment) = cells.next() else { continue };
            let cells: Vec<&str> = cells.collect();
            if cells.len() != columns.len() {
                return Err(PhonologyError::ColumnCount {
                    line: line_no,
                    segment: segment.to_string(),
                    expected: columns.len(),
                    actual: cells.len(),
                });
            }

            let mut values = [FeatureValue::Unspecified; Feature::COUNT];
            for (feature, cell) in columns.iter().zip(cells) {
                values[feature.index()] =
                    cell.parse().map_err(|_| PhonologyError::InvalidCell {
                        line: line_no,
                        segment: segment.to_string(),
                        value: cell.to_string(),
                    })?;
            }

            if index.insert(segment.to_string(), rows.len()).is_some() {
                return Err(PhonologyError::DuplicateSegment(segment.to_string()));
            }
            rows.push((segment.to_string(), FeatureVector::new(values)));
        }

        tracing::debug!("Loaded feature table with {} segments", rows.len());
        Ok(Self { rows, index })
    }

    /// Feature vector of a segment, if present.
    pub fn get(&self, segment: &str) -> Option<&FeatureVector> {
        self.index.get(segment).map(|&i| &self.rows[i].1)
    }

    /// Feature vector of a segment known to be in the table.
    ///
    /// # Panics
    /// Panics if `segment` is absent. Callers pass segments that went
    /// through [`FeatureTable::validate`] or came from the table itself.
    pub fn lookup(&self, segment: &str) -> &FeatureVector {
        self.get(segment)
            .unwrap_or_else(|| panic!("segment {:?} is not in the feature table", segment))
    }

    /// Whether the table has a row for `segment`.
    pub fn contains(&self, segment: &str) -> bool {
        self.index.contains_key(segment)
    }

    /// Every segment, in table order.
    pub fn all_segments(&self) -> SegmentSet {
        self.rows.iter().map(|(s, _)| s.clone()).collect()
    }

    /// Iterate rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureVector)> {
        self.rows.iter().map(|(s, v)| (s.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep the raw tokens that name a segment in this table.
    ///
    /// Tokens are trimmed; empty tokens and unknown symbols are dropped.
    /// Matching is exact and case sensitive. Input order is preserved.
    pub fn validate<S: AsRef<str>>(&self, raw: &[S]) -> SegmentSet {
        let mut valid = SegmentSet::new();
        for token in raw.iter().map(|s| s.as_ref().trim()) {
            if token.is_empty() {
                continue;
            }
            if self.contains(token) {
                valid.push(token);
            } else {
                tracing::warn!("Dropping unrecognised segment {:?}", token);
            }
        }
        valid
    }

    /// Trimmed, non-empty tokens that are not in this table.
    pub fn unrecognised<S: AsRef<str>>(&self, raw: &[S]) -> Vec<String> {
        raw.iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty() && !self.contains(s))
            .map(str::to_string)
            .collect()
    }
}

fn parse_header(header: &str) -> Result<Vec<Feature>> {
    let mut columns = Vec::with_capacity(Feature::COUNT);
    for name in header.split_whitespace().skip(1) {
        let feature = Feature::from_name(name)
            .ok_or_else(|| PhonologyError::MalformedHeader(format!("unknown feature {:?}", name)))?;
        if columns.contains(&feature) {
            return Err(PhonologyError::MalformedHeader(format!("duplicate feature {:?}", name)));
        }
        columns.push(feature);
    }

    if let Some(missing) = Feature::ALL.iter().find(|f| !columns.contains(f)) {
        return Err(PhonologyError::MalformedHeader(format!(
            "missing feature {:?}",
            missing.name()
        )));
    }
    Ok(columns)
}
