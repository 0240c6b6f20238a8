//! impress-phonology: Distinctive feature models, natural classes, and set comparison.
//!
//! Segments (speech sounds) are vectors of `+`/`-`/`0` values over a fixed
//! set of distinctive features. On top of a read-only [`FeatureTable`] the
//! crate answers three questions:
//!
//! - which segments satisfy a conjunction of feature constraints
//!   ([`natural_class`]),
//! - which features every member of a segment set agrees on
//!   ([`common_features`]),
//! - which features distinguish one segment set from another ([`compare`]).
//!
//! All queries are pure functions over a shared immutable table.
//!
//! # Example
//! ```
//! use impress_phonology::{
//!     compare, natural_class, parse_constraints, ComparisonResult, Feature, FeatureTable,
//! };
//!
//! let table = FeatureTable::standard();
//! let nasals = natural_class(table, &parse_constraints("+nasal").unwrap());
//! assert_eq!(nasals.to_string(), "m, n, ɲ, ŋ");
//!
//! let result = compare(table, &table.validate(&["m"]), &table.validate(&["n"]));
//! assert_eq!(result, ComparisonResult::Differences(vec![Feature::Coronal]));
//! ```

pub mod common;
pub mod compare;
pub mod config;
pub mod error;
pub mod feature;
pub mod parse;
pub mod query;
pub mod render;
pub mod segment;
pub mod table;

pub use common::*;
pub use compare::*;
pub use config::*;
pub use error::{PhonologyError, Result};
pub use feature::*;
pub use parse::*;
pub use query::*;
pub use render::*;
pub use segment::*;
pub use table::*;
