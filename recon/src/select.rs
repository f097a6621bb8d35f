use log::{debug, warn};
use num_bigint::BigInt;
use thiserror::Error;

use crate::decode::decode;
use crate::share::{Point, RawRecord, ShareRecord};

/// Set-level selection failures. Unlike per-record problems these abort the
/// whole reconstruction for the current input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("threshold must be at least 1")]
    InvalidThreshold,
    #[error("share index {0} appears more than once")]
    DuplicateIndex(u64),
    #[error("needed {needed} decodable shares, got {got}")]
    InsufficientShares { needed: usize, got: usize },
}

/// Validates, orders and decodes `records`, returning `k` points with
/// ascending, pairwise distinct x-coordinates.
///
/// Records whose index or base does not validate are skipped with a warning.
/// The remaining records are sorted by index; a duplicate index makes the set
/// ambiguous and is fatal. Decoding then walks the sorted list in order: a
/// record whose value fails to decode is skipped (again with a warning) and
/// its slot is filled from the next index, until `k` points exist or the
/// list runs out.
pub fn select(records: &[RawRecord], k: usize) -> Result<Vec<Point>, SelectionError> {
    if k == 0 {
        return Err(SelectionError::InvalidThreshold);
    }

    let mut valid: Vec<ShareRecord> = Vec::with_capacity(records.len());
    for raw in records {
        match ShareRecord::validate(raw) {
            Ok(rec) => valid.push(rec),
            Err(err) => warn!("skipping share record: {}", err),
        }
    }

    valid.sort_by_key(|rec| rec.index);
    for pair in valid.windows(2) {
        if pair[0].index == pair[1].index {
            return Err(SelectionError::DuplicateIndex(pair[0].index));
        }
    }

    let mut points = Vec::with_capacity(k);
    let mut consumed = 0;
    for rec in &valid {
        if points.len() == k {
            break;
        }
        consumed += 1;
        match decode(&rec.value, rec.base) {
            Ok(y) => points.push(Point::new(BigInt::from(rec.index), BigInt::from(y))),
            Err(err) => warn!("skipping share {}: {}", rec.index, err),
        }
    }

    if points.len() < k {
        return Err(SelectionError::InsufficientShares { needed: k, got: points.len() });
    }
    if consumed < valid.len() {
        debug!("{} share(s) beyond the threshold left unused", valid.len() - consumed);
    }
    Ok(points)
}
