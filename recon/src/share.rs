use num_bigint::BigInt;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Smallest radix a share value may be written in.
pub const MIN_BASE: u32 = 2;
/// Largest radix a share value may be written in (digits 0-9 plus a-z).
pub const MAX_BASE: u32 = 36;

/// A problem local to one record. The record is dropped from selection;
/// the batch keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("index key {0:?} is not a positive integer")]
    InvalidIndex(String),
    #[error("share {index}: base {base} is not an integer in [2,36]")]
    InvalidBase { index: u64, base: RawBase },
}

/// The base field as it appears on the wire: the share format allows both a
/// JSON number and a decimal numeral string for the same radix.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawBase {
    Numeric(i64),
    Numeral(String),
}

impl RawBase {
    /// Collapses the union to a plain integer radix, parsing numeral strings
    /// as base 10. `None` if the numeral is not an integer at all.
    pub fn resolve(&self) -> Option<i64> {
        match self {
            RawBase::Numeric(b) => Some(*b),
            RawBase::Numeral(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for RawBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawBase::Numeric(b) => write!(f, "{}", b),
            RawBase::Numeral(s) => write!(f, "{:?}", s),
        }
    }
}

/// One share entry exactly as the loader found it, before any validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub index: String,
    pub base: RawBase,
    pub value: String,
}

impl RawRecord {
    pub fn new(index: impl Into<String>, base: RawBase, value: impl Into<String>) -> Self {
        Self { index: index.into(), base, value: value.into() }
    }
}

/// A validated share record: positive index, radix within bounds. The value
/// string itself is only checked later, when the record is decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareRecord {
    pub index: u64,
    pub base: u32,
    pub value: String,
}

impl ShareRecord {
    /// Checks the parts of a raw record that do not require decoding the
    /// value: the index must parse as a positive integer and the base must
    /// resolve to a radix between [MIN_BASE] and [MAX_BASE].
    pub fn validate(raw: &RawRecord) -> Result<ShareRecord, RecordError> {
        let index: u64 = raw
            .index
            .trim()
            .parse()
            .ok()
            .filter(|idx| *idx >= 1)
            .ok_or_else(|| RecordError::InvalidIndex(raw.index.clone()))?;

        let base = raw
            .base
            .resolve()
            .filter(|b| (MIN_BASE as i64..=MAX_BASE as i64).contains(b))
            .ok_or_else(|| RecordError::InvalidBase { index, base: raw.base.clone() })?
            as u32;

        Ok(ShareRecord { index, base, value: raw.value.clone() })
    }
}

/// A decoded share: one point on the hidden polynomial. `x` is the share
/// index, `y` the decoded value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }
}
