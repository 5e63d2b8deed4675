use std::sync::atomic::{AtomicU64, Ordering};

use bincode::error::{DecodeError, EncodeError};
use bincode::{Decode, Encode};

use crate::log_dbg;

const PCG_MULTIPLIER: u128 = 0x2360_ED05_1FC6_5DA4_4385_DF64_9FCC_F645;

// Separates generators seeded from the clock within the same tick
static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A source of uniformly distributed floats in `[0, 1)`.
///
/// Helpers that need randomness take one of these instead of reaching for a global
/// generator, so callers decide between a seeded [`Rng`], their own generator, or a
/// fixed sequence in tests. Any `FnMut() -> f64` closure is a source as well.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Returns a uniformly distributed value in `[min, max)`.
///
/// When `min == max` the result is `min`. If rounding would land exactly on `max`,
/// the largest float below `max` is returned instead so the upper bound stays open.
pub fn rand_range<R: RandomSource + ?Sized>(source: &mut R, min: f64, max: f64) -> f64 {
    let value = source.next_f64() * (max - min) + min;
    if min < max && value >= max { next_below(max) } else { value }
}

#[inline]
fn next_below(value: f64) -> f64 {
    if value > 0.0 {
        f64::from_bits(value.to_bits() - 1)
    } else if value < 0.0 {
        f64::from_bits(value.to_bits() + 1)
    } else {
        -f64::from_bits(1)
    }
}

/// A Pcg64Mcg-based PRNG (Pseudo-Random Number Generator) implementation.
///
/// Fast and statistically sound, but NOT cryptographically secure.
/// Seeding with the same value always reproduces the same sequence, and the
/// generator state can be captured with [`Rng::snapshot`] and resumed with [`Rng::restore`].
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Rng {
    state: u128,
}

impl Rng {
    /// Creates a new generator. Without a seed, one is derived from the current time
    /// natively and from `Math.random()` on the web.
    pub fn new(seed: Option<u128>) -> Self {
        let seed = seed.unwrap_or_else(Self::entropy_seed);
        log_dbg!("Seeding generator with {}", seed);

        // The multiplicative generator needs an odd state
        Self { state: seed | 1 }
    }

    pub fn gen_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(PCG_MULTIPLIER);

        const XSHIFT: u32 = 64;
        const ROTATE: u32 = 122;

        let rot = (self.state >> ROTATE) as u32;
        let xsl = ((self.state >> XSHIFT) as u64) ^ (self.state as u64);
        xsl.rotate_right(rot)
    }

    /// Uniform in `[0, 1)`, using the top 53 bits of a 64-bit draw.
    pub fn gen_f64(&mut self) -> f64 {
        (self.gen_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    pub fn gen_range_f64(&mut self, min: f64, max: f64) -> f64 {
        rand_range(self, min, max)
    }

    /// Encodes the full generator state.
    pub fn snapshot(&self) -> Result<Vec<u8>, EncodeError> {
        bincode::encode_to_vec(self, bincode::config::standard())
    }

    /// Rebuilds a generator from [`Rng::snapshot`] output. The restored generator
    /// continues the exact sequence of the original.
    pub fn restore(bytes: &[u8]) -> Result<Self, DecodeError> {
        let (rng, _): (Self, usize) = bincode::decode_from_slice(bytes, bincode::config::standard())?;
        Ok(rng)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn entropy_seed() -> u128 {
        use std::time::{SystemTime, UNIX_EPOCH};

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed) as u128;
        nanos ^ (counter << 64) ^ counter.wrapping_mul(PCG_MULTIPLIER)
    }

    #[cfg(target_arch = "wasm32")]
    fn entropy_seed() -> u128 {
        let draw = || (js_sys::Math::random() * (1u64 << 53) as f64) as u128;
        let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed) as u128;
        (draw() << 75) ^ (draw() << 22) ^ (js_sys::Date::now() as u128) ^ counter
    }
}

impl RandomSource for Rng {
    fn next_f64(&mut self) -> f64 {
        self.gen_f64()
    }
}

// ---------------------------------------------------------- //
// ------------------------- Tests -------------------------- //
// ---------------------------------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_float_generation_works() {
        let mut rng = Rng::new(None);
        let mut avg = 0.0;
        for _ in 0..1000000 {
            let value = rng.gen_f64();
            assert!((0.0..1.0).contains(&value));
            avg += value;
        }

        avg /= 1000000.0;

        assert!(avg < 0.501 && avg > 0.499);
    }

    #[test]
    fn rng_in_range_works() {
        let mut rng = Rng::new(None);
        for _ in 0..10000 {
            let r = rng.gen_range_f64(-34.0, 786.0);
            assert!((-34.0..786.0).contains(&r));
        }
    }

    #[test]
    fn rng_seed_generates_deterministic_sequence() {
        let mut rng_1 = Rng::new(Some(66733));
        let mut rng_2 = Rng::new(Some(66733));

        for _ in 0..100 {
            assert_eq!(rng_1.gen_u64(), rng_2.gen_u64());
        }
    }

    #[test]
    fn unseeded_generators_differ() {
        let mut rng_1 = Rng::new(None);
        let mut rng_2 = Rng::new(None);

        let seq_1: Vec<u64> = (0..4).map(|_| rng_1.gen_u64()).collect();
        let seq_2: Vec<u64> = (0..4).map(|_| rng_2.gen_u64()).collect();
        assert_ne!(seq_1, seq_2);
    }

    #[test]
    fn even_seed_does_not_collapse() {
        let mut rng = Rng::new(Some(0));
        let draws: Vec<u64> = (0..64).map(|_| rng.gen_u64()).collect();
        assert!(draws.iter().any(|v| *v != 0));
    }

    #[test]
    fn snapshot_resumes_sequence() {
        let mut rng = Rng::new(Some(912));
        for _ in 0..17 {
            rng.gen_u64();
        }

        let bytes = rng.snapshot().unwrap();
        let mut restored = Rng::restore(&bytes).unwrap();

        assert_eq!(restored, rng);
        for _ in 0..100 {
            assert_eq!(restored.gen_u64(), rng.gen_u64());
        }
    }

    #[test]
    fn restore_rejects_truncated_bytes() {
        assert!(Rng::restore(&[]).is_err());
    }

    #[test]
    fn rand_range_uses_injected_source() {
        let mut fixed = || 0.25;
        assert_eq!(rand_range(&mut fixed, 10.0, 30.0), 15.0);
        assert_eq!(rand_range(&mut fixed, 4.0, 4.0), 4.0);
    }

    #[test]
    fn rand_range_never_returns_max() {
        let mut almost_one = || 1.0 - f64::EPSILON / 2.0;
        for (min, max) in [(0.1, 0.3), (-5.0, 0.0), (1e6, 1e6 + 1.0), (-1.0, -0.5)] {
            let value = rand_range(&mut almost_one, min, max);
            assert!(value >= min && value < max);
        }

        let mut one = || 1.0;
        assert!(rand_range(&mut one, 0.0, 1.0) < 1.0);
    }

    #[test]
    fn rand_range_boundaries_hold_for_seeded_rng() {
        let mut rng = Rng::new(Some(5));
        for _ in 0..100000 {
            let value = rand_range(&mut rng, 0.1, 0.2);
            assert!((0.1..0.2).contains(&value));
        }
    }
}
