//! Rough, human-friendly phrases for signed durations.
//!
//! Converts a [`time::Duration`] into a coarse description such as
//! `"about 2 hours"` or `"almost 3 years"`, in the manner of the
//! Rails `distance_of_time_in_words` helper. Intended for UI and log
//! messages where an approximation reads better than an exact value.
//!
//! Everything here is a pure function of its input: no state, no I/O,
//! safe to call from any number of threads.

mod phrase;
mod round;

pub use phrase::{rough_duration, rough_duration_direction};
pub use round::{Error, Result, round_div};
