// Match scoring: person skills vs one job's weighted requirements.
// Everything in here is pure; storage access lives in `advisor`.

pub mod handlers;
pub mod scorer;
pub mod summary;
pub mod types;

use thiserror::Error;

use crate::store::StoreError;

/// Failures of a collaborator the engine depends on. Carried through opaquely so
/// callers can tell "could not compute" apart from "no match".
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("skill store failed: {0}")]
    Store(#[from] StoreError),

    #[error("skill extraction failed: {0}")]
    Extraction(String),
}

/// Error taxonomy shared by every scoring and planning operation.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The job has zero modeled skill requirements (or does not exist).
    #[error("job '{0}' has no skill requirement data")]
    NoRequirements(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl From<StoreError> for MatchError {
    fn from(err: StoreError) -> Self {
        MatchError::Collaborator(CollaboratorError::Store(err))
    }
}

/// `round(owned / total * 100)`, 0 when the total weight is not positive.
///
/// Halves round to even, matching the catalog's historical figures.
pub fn weighted_rate(owned_weight: f64, total_weight: f64) -> u32 {
    if total_weight > 0.0 {
        ((owned_weight / total_weight) * 100.0)
            .round_ties_even()
            .clamp(0.0, 100.0) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_zero_total_is_zero() {
        assert_eq!(weighted_rate(0.0, 0.0), 0);
    }

    #[test]
    fn test_rate_three_quarters() {
        assert_eq!(weighted_rate(3.0, 4.0), 75);
    }

    #[test]
    fn test_rate_half_rounds_to_even() {
        // 1/8 = 12.5%
        assert_eq!(weighted_rate(1.0, 8.0), 12);
        // 3/8 = 37.5%
        assert_eq!(weighted_rate(3.0, 8.0), 38);
    }
}
