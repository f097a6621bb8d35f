//! Loader for the JSON share document.
//!
//! One document describes one reconstruction run:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": 10, "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every top-level key other than `"keys"` is a share index. `n` is
//! informational only; `k` is the threshold the selector must honor.

use std::collections::BTreeMap;

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::share::{RawBase, RawRecord};

/// The document cannot be used at all. Fatal for this input, but one bad
/// file never stops other runs.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("share document is not well formed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The `"keys"` object: declared share count and threshold.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Thresholds {
    pub n: usize,
    pub k: usize,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
struct ShareEntry {
    base: RawBase,
    value: String,
}

/// A parsed share document. Share entries stay raw; all validation beyond
/// JSON shape happens during selection.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ShareDocument {
    keys: Thresholds,
    #[serde(flatten)]
    shares: BTreeMap<String, ShareEntry>,
}

impl ShareDocument {
    /// The reconstruction threshold `k`.
    pub fn threshold(&self) -> usize {
        self.keys.k
    }

    /// The declared total share count `n`. Never enforced.
    pub fn declared_shares(&self) -> usize {
        self.keys.n
    }

    /// Flattens the dynamic top-level keys into raw records for the
    /// selector. Document order is irrelevant since selection re-sorts by
    /// numeric index.
    pub fn records(&self) -> Vec<RawRecord> {
        self.shares
            .iter()
            .map(|(index, entry)| {
                RawRecord::new(index.clone(), entry.base.clone(), entry.value.clone())
            })
            .collect()
    }
}

/// Parses one share document from JSON text. A mismatch between `keys.n`
/// and the number of share entries is reported but tolerated.
pub fn parse_document(json: &str) -> Result<ShareDocument, LoadError> {
    let doc: ShareDocument = serde_json::from_str(json)?;
    if doc.shares.len() != doc.keys.n {
        warn!(
            "document declares n={} but carries {} share entries",
            doc.keys.n,
            doc.shares.len()
        );
    }
    Ok(doc)
}
