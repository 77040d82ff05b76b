//! Seedable RNG wrapper shared by every generator.
//!
//! # Determinism strategy
//!
//! Nothing in the workspace touches a global random source.  Callers build a
//! `GenRng` once and pass `&mut GenRng` down.  Independent streams (one per
//! prefecture in batch generation) are derived as
//!
//!   seed = root_seed XOR (stream * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stream numbers uniformly across the seed space,
//! so adding a prefecture never disturbs the output of the existing ones.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::distributions::{Distribution, Standard, WeightedIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic (when seeded) RNG for all synthetic-data generation.
pub struct GenRng(SmallRng);

impl GenRng {
    pub fn new(seed: u64) -> Self {
        GenRng(SmallRng::seed_from_u64(seed))
    }

    /// Unseeded RNG — output differs from run to run.
    pub fn from_entropy() -> Self {
        GenRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Independent stream `stream` of the run seeded with `root_seed`.
    pub fn for_stream(root_seed: u64, stream: u64) -> Self {
        GenRng::new(root_seed ^ stream.wrapping_mul(MIXING_CONSTANT))
    }

    /// Derive a child RNG with a different seed offset.
    pub fn child(&mut self, offset: u64) -> GenRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        GenRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice; `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Weighted choice over `(item, weight)` pairs.
    ///
    /// Returns `None` when the table is empty or every weight is zero.
    pub fn weighted<T: Copy>(&mut self, table: &[(T, f64)]) -> Option<T> {
        let dist = WeightedIndex::new(table.iter().map(|&(_, w)| w)).ok()?;
        Some(table[dist.sample(&mut self.0)].0)
    }

    /// One pair of independent standard-normal draws (Box–Muller).
    pub fn normal_pair(&mut self) -> (f64, f64) {
        // `u1` in (0, 1] keeps ln() finite.
        let u1 = 1.0 - self.0.r#gen::<f64>();
        let u2 = self.0.r#gen::<f64>();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = std::f64::consts::TAU * u2;
        (r * theta.cos(), r * theta.sin())
    }
}
