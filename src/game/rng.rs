//! Seeded random source.
//!
//! A lagged multiply-with-carry generator (Alea) seeded through the "Mash"
//! string hash. All arithmetic is carried out on `f64` with explicit 32-bit
//! truncations, so a given seed string produces the same draws on every
//! platform, and the same draws as the browser generator the game was first
//! written against.

use crate::game::error::GameError;

const TWO_POW_21: f64 = 2_097_152.0;
const TWO_POW_31: f64 = 2_147_483_648.0;
const TWO_POW_32: f64 = 4_294_967_296.0;
const INV_TWO_POW_32: f64 = 2.3283064365386963e-10;
const INV_TWO_POW_53: f64 = 1.1102230246251565e-16;

/// Initial Mash accumulator (0xefc8249d).
const MASH_INIT: f64 = 4_022_871_197.0;
const MASH_FACTOR: f64 = 0.02519603282416938;
const MULTIPLIER: f64 = 2_091_639.0;

/// Truncate toward zero and wrap into `[0, 2^32)`.
fn to_uint32(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    x.trunc().rem_euclid(TWO_POW_32)
}

/// Truncate toward zero and wrap into `[-2^31, 2^31)`.
fn to_int32(x: f64) -> f64 {
    let u = to_uint32(x);
    if u >= TWO_POW_31 { u - TWO_POW_32 } else { u }
}

/// Deterministic generator built from a seed string.
///
/// Every draw advances the internal state; two generators built from the
/// same seed produce identical sequences.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    s0: f64,
    s1: f64,
    s2: f64,
    carry: f64,
    mash: f64,
}

impl SeededRandom {
    pub fn new(seed: &str) -> Self {
        let mut rng = SeededRandom {
            s0: 0.0,
            s1: 0.0,
            s2: 0.0,
            carry: 1.0,
            mash: MASH_INIT,
        };
        rng.s0 = rng.hash(" ");
        rng.s1 = rng.hash(" ");
        rng.s2 = rng.hash(" ");

        // Each lag consumes its own hash of the seed, in order.
        rng.s0 -= rng.hash(seed);
        if rng.s0 < 0.0 {
            rng.s0 += 1.0;
        }
        rng.s1 -= rng.hash(seed);
        if rng.s1 < 0.0 {
            rng.s1 += 1.0;
        }
        rng.s2 -= rng.hash(seed);
        if rng.s2 < 0.0 {
            rng.s2 += 1.0;
        }
        rng
    }

    /// Mash hash over the UTF-16 code units of `data`, accumulating into `self.mash`.
    fn hash(&mut self, data: &str) -> f64 {
        let mut n = self.mash;
        for unit in data.encode_utf16() {
            n += f64::from(unit);
            let mut h = MASH_FACTOR * n;
            n = to_uint32(h);
            h -= n;
            h *= n;
            n = to_uint32(h);
            h -= n;
            n += h * TWO_POW_32;
        }
        self.mash = n;
        to_uint32(n) * INV_TWO_POW_32
    }

    fn step(&mut self) -> f64 {
        let t = MULTIPLIER * self.s0 + self.carry * INV_TWO_POW_32;
        self.carry = to_int32(t);
        self.s0 = self.s1;
        self.s1 = self.s2;
        self.s2 = t - self.carry;
        self.s2
    }

    /// Uniform draw in `[0, 1)` with 53 bits of precision. Consumes two steps.
    pub fn frac(&mut self) -> f64 {
        let high = self.step();
        let low = to_int32(self.step() * TWO_POW_21);
        high + low * INV_TWO_POW_53
    }

    /// Integer in `[low, high]`, both inclusive. Bounds given in the wrong
    /// order are swapped.
    pub fn between(&mut self, low: i32, high: i32) -> i32 {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let span = f64::from(high) - f64::from(low) + 1.0;
        let draw = (self.frac() * span + f64::from(low)).floor() as i32;
        draw.min(high)
    }

    /// Pick one element of `candidates` with a uniform draw over its indices.
    pub fn pick<'a, T>(&mut self, candidates: &'a [T]) -> Result<&'a T, GameError> {
        if candidates.is_empty() {
            return Err(GameError::PreconditionViolation {
                reason: "pick called with no candidates".to_string(),
            });
        }
        let index = (self.frac() * candidates.len() as f64).floor() as usize;
        Ok(&candidates[index.min(candidates.len() - 1)])
    }
}
