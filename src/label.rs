//! Raw label → integer target resolution.
//!
//! Event descriptions and recording-level targets arrive either as integer
//! codes or as names (`"left_hand"`, `"rest"`).  Codes are used as targets
//! directly; names are looked up in a caller-supplied [`LabelMapping`].
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WindowError};

/// Mapping from label name to integer target.
pub type LabelMapping = HashMap<String, i64>;

/// A label as delivered by the event or trial-metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawLabel {
    /// Already an integer target.
    Code(i64),
    /// Categorical name that needs a [`LabelMapping`].
    Name(String),
}

impl From<i64> for RawLabel {
    fn from(code: i64) -> Self {
        RawLabel::Code(code)
    }
}

impl From<&str> for RawLabel {
    fn from(name: &str) -> Self {
        RawLabel::Name(name.to_string())
    }
}

impl From<String> for RawLabel {
    fn from(name: String) -> Self {
        RawLabel::Name(name)
    }
}

impl fmt::Display for RawLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawLabel::Code(code) => write!(f, "{code}"),
            RawLabel::Name(name) => f.write_str(name),
        }
    }
}

/// Resolve a single label.
///
/// Codes are returned unchanged and the mapping is ignored.  Names require a
/// mapping that contains them.
///
/// ```
/// use supercrop::label::{resolve, LabelMapping, RawLabel};
///
/// let mapping = LabelMapping::from([("rest".to_string(), 0), ("task".to_string(), 1)]);
/// assert_eq!(resolve(&RawLabel::from("rest"), Some(&mapping)).unwrap(), 0);
/// assert_eq!(resolve(&RawLabel::Code(7), None).unwrap(), 7);
/// assert!(resolve(&RawLabel::from("unknown"), Some(&mapping)).is_err());
/// ```
pub fn resolve(raw: &RawLabel, mapping: Option<&LabelMapping>) -> Result<i64> {
    match raw {
        RawLabel::Code(code) => Ok(*code),
        RawLabel::Name(name) => {
            let mapping = mapping.ok_or_else(|| WindowError::MissingLabelMapping {
                label: name.clone(),
            })?;
            mapping
                .get(name)
                .copied()
                .ok_or_else(|| WindowError::UnmappedLabel { label: name.clone() })
        }
    }
}

/// Memoizing resolver for one windowing call.
///
/// Each distinct name is looked up once; later windows carrying the same
/// label reuse the cached target.
#[derive(Debug)]
pub struct LabelResolver<'a> {
    mapping: Option<&'a LabelMapping>,
    cache: HashMap<&'a str, i64>,
}

impl<'a> LabelResolver<'a> {
    pub fn new(mapping: Option<&'a LabelMapping>) -> Self {
        Self { mapping, cache: HashMap::new() }
    }

    pub fn resolve(&mut self, raw: &'a RawLabel) -> Result<i64> {
        match raw {
            RawLabel::Code(code) => Ok(*code),
            RawLabel::Name(name) => {
                if let Some(&target) = self.cache.get(name.as_str()) {
                    return Ok(target);
                }
                let target = resolve(raw, self.mapping)?;
                self.cache.insert(name.as_str(), target);
                Ok(target)
            }
        }
    }

    /// Number of distinct names resolved so far.
    pub fn n_cached(&self) -> usize {
        self.cache.len()
    }
}
