//! # Numix
//!
//! Small, stateless numeric helpers: clamping, linear interpolation and its inverse,
//! range remapping, random ranges, inclusive integer ranges and interpolated
//! lookups at a fractional position within a sequence.
//!
//! All helpers are pure functions on `f64`. Degenerate inputs produce non-finite
//! or saturated results instead of errors; the [`checked`] module wraps them with
//! precondition checks for callers that want a `Result`.

pub use bincode;

pub use js_sys;
pub use wasm_bindgen;
pub use web_sys;

pub use math::percentile::value_at_percentile;
pub use math::rand::{RandomSource, Rng, rand_range};
pub use math::range::{range, range_iter};
pub use math::{clamp, clamp01, invlerp, lerp, scale};

pub use util::log::*;
pub use util::time::DateTime;

pub mod checked;
pub mod math;
pub mod util;
pub mod web;
