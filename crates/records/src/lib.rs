//! Hand-history normalization for canonical hold'em hand text.
//!
//! Raw per-hand text is parsed once into an immutable [`HandRecord`]; all
//! statistics are derived from that structure rather than from the text.
//!
//! ## Vocabulary
//!
//! - [`Street`] — Preflop, flop, turn, river
//! - [`Verb`] — Forced posts, betting decisions, shows and wins
//! - [`ActionEvent`] — One actor performing one verb on one street
//! - [`Seat`] — Seat number, player and starting stack
//! - [`Position`] — Canonical preflop table position
//!
//! ## Pipeline
//!
//! - [`Segmenter`] — Splits a hand into header and street [`Segment`]s
//! - [`Positions`] — Labels players from seat order and blind posters
//! - [`Classification`] — Aggressors and survivors of one street
//! - [`Normalizer`] — Combines the above into a [`HandRecord`]
//! - [`Aliases`] — Explicit player-name mapping handed to the normalizer
//!
//! ## Failure
//!
//! - [`HandError`] — Why one hand was rejected; never fatal to a batch
mod alias;
mod classify;
mod error;
mod event;
mod normalize;
mod position;
mod record;
mod seat;
mod segment;
mod street;
mod verb;

pub use alias::*;
pub use classify::*;
pub use error::*;
pub use event::*;
pub use normalize::*;
pub use position::*;
pub use record::*;
pub use seat::*;
pub use segment::*;
pub use street::*;
pub use verb::*;
