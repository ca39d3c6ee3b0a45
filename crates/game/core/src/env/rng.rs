//! RNG oracle for deterministic random number generation.
//!
//! Every random decision in the simulation (room placement, spawn tables,
//! combat rolls, monster wandering) draws from a single injected
//! [`RngOracle`]. Given the same seed the whole game replays identically.

use rand::{Rng, RngCore, SeedableRng};

/// Source of randomness consumed by the simulation.
///
/// All ranges are inclusive on both ends, matching how the game's tables
/// are written.
pub trait RngOracle {
    /// Uniform integer in `[min, max]`. Returns `min` when the range is empty.
    fn range(&mut self, min: i32, max: i32) -> i32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&mut self) -> i32 {
        self.range(1, 100)
    }

    /// Unbiased coin flip.
    fn coin_flip(&mut self) -> bool {
        self.range(0, 1) == 1
    }

    /// Integer in `[min, max]` divided by 100, e.g. `percent(50, 150)` yields
    /// a multiplier between 0.5 and 1.5 in steps of 0.01.
    fn percent(&mut self, min: i32, max: i32) -> f64 {
        f64::from(self.range(min, max)) / 100.0
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        (**self).range(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. It implements [`RngCore`] and [`SeedableRng`], so it can be
/// handed to anything in the `rand` ecosystem as well as to the game.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngCore for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for PcgRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl RngOracle for PcgRng {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.gen_range(min..=max)
    }
}
