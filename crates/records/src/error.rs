use hhs_core::MAX_SEATS;
use hhs_core::MIN_SEATS;

/// Why a single hand could not be normalized.
///
/// Every variant is local to one hand: the batch skips the hand, logs the
/// error, and carries on with the rest of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandError {
    #[error("no seat lines")]
    Seatless,
    #[error("no big blind post")]
    Blindless,
    #[error("{0} seats is outside the supported {min}..={max}", min = MIN_SEATS, max = MAX_SEATS)]
    TableSize(usize),
    #[error("blind poster {0:?} is not seated")]
    Unseated(String),
    #[error("malformed seat line {0:?}")]
    Seat(String),
}
