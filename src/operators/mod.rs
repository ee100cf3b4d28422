//! Transition and objective operators for tour search.
//!
//! Both are closed enumerations: [`Transition`] proposes neighbors,
//! [`Objective`] scores tours. New variants are added by extending the
//! enums.

mod objective;
mod transition;

pub use objective::{closed_tour_length, Objective};
pub use transition::{segment_reverse, swap, Transition, DEFAULT_MAX_FRACTION};
