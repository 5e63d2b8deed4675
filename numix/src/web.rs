//! JavaScript bindings.
//!
//! Exposes the helpers under their camelCase names when built for the web. The
//! optional `clamp` limits default to the unit interval. `randRange` draws from a
//! thread-local generator which `seedRandom` can reseed for reproducible runs.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::math::rand::{Rng, rand_range};
use crate::{clamp, invlerp, lerp, scale, value_at_percentile};

thread_local! {
    static JS_RNG: RefCell<Rng> = RefCell::new(Rng::new(None));
}

#[wasm_bindgen(js_name = clamp)]
pub fn js_clamp(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    clamp(value, min.unwrap_or(0.0), max.unwrap_or(1.0))
}

#[wasm_bindgen(js_name = lerp)]
pub fn js_lerp(x: f64, y: f64, a: f64) -> f64 {
    lerp(x, y, a)
}

#[wasm_bindgen(js_name = invlerp)]
pub fn js_invlerp(x: f64, y: f64, a: f64) -> f64 {
    invlerp(x, y, a)
}

#[wasm_bindgen(js_name = scale)]
pub fn js_scale(x1: f64, y1: f64, x2: f64, y2: f64, a: f64) -> f64 {
    scale(x1, y1, x2, y2, a)
}

#[wasm_bindgen(js_name = randRange)]
pub fn js_rand_range(min: f64, max: f64) -> f64 {
    JS_RNG.with_borrow_mut(|rng| rand_range(rng, min, max))
}

#[wasm_bindgen(js_name = seedRandom)]
pub fn js_seed_random(seed: u32) {
    JS_RNG.set(Rng::new(Some(seed as u128)));
}

#[wasm_bindgen(js_name = range)]
pub fn js_range(start: i32, end: i32) -> Vec<i32> {
    (start..=end).collect()
}

#[wasm_bindgen(js_name = valueAtPercentile)]
pub fn js_value_at_percentile(values: &[f64], percentage: f64) -> f64 {
    value_at_percentile(values, percentage)
}

// ---------------------------------------------------------- //
// ------------------------- Tests -------------------------- //
// ---------------------------------------------------------- //
