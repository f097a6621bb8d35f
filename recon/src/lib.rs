//! Reconstruction of a hidden integer secret from a threshold set of
//! Shamir secret shares.
//!
//! Shares arrive as `(index, base, digit-string)` records; any `k` of them
//! determine a degree-(k-1) polynomial whose constant term is the secret.
//! The pipeline is [select::select] (validate, order, decode) feeding
//! [interpolate::interpolate_at_zero] (exact rational Lagrange evaluation).
//! All arithmetic is arbitrary precision; nothing here ever rounds.

pub mod decode;
mod fraction;
pub mod input;
pub mod interpolate;
pub mod select;
pub mod share;

use num_bigint::BigInt;
use thiserror::Error;

/// Any fatal failure of one reconstruction run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconstructError {
    #[error(transparent)]
    Selection(#[from] select::SelectionError),
    #[error(transparent)]
    Interpolation(#[from] interpolate::InterpolationError),
}

/// Runs the whole pipeline for one parsed share document and returns the
/// reconstructed secret.
pub fn reconstruct_secret(doc: &input::ShareDocument) -> Result<BigInt, ReconstructError> {
    let points = select::select(&doc.records(), doc.threshold())?;
    Ok(interpolate::interpolate_at_zero(&points)?)
}
