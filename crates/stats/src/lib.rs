//! Per-player statistics over a corpus of normalized hands.
//!
//! ## Counting
//!
//! - [`Stat`] — VPIP, PFR, 3-bet, fold-to-3-bet, c-bet, WTSD and W$SD samplers
//! - [`Counter`] — Named opportunity and qualifying counters
//! - [`Accumulator`] — One player's counters and net chips; merged with `+`
//! - [`Rates`] — Rounded percentages derived from an accumulator
//!
//! ## Batches
//!
//! - [`Corpus`] — Parallel normalization and tabulation of one session
//! - [`Summary`] — Hands processed versus skipped
//! - [`Standings`] — Per-player rollup across sessions and seasons
mod accumulator;
mod corpus;
mod counter;
mod rates;
mod standings;
mod stat;

pub use accumulator::*;
pub use corpus::*;
pub use counter::*;
pub use rates::*;
pub use standings::*;
pub use stat::*;
