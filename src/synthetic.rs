//! Synthetic vehicle plate generator.
//!
//! Generates plate sets with a known number of forced palindromes, providing
//! ground truth for the palindrome benchmark.
//!
//! # Example
//!
//! ```rust
//! use platebench::synthetic::PlateScenario;
//!
//! let scenario = PlateScenario {
//!     total: 100,
//!     target_palindromes: 10,
//!     seed: Some(42),
//! };
//!
//! let dataset = scenario.generate();
//! assert_eq!(dataset.plates.len(), 100);
//! assert_eq!(dataset.intended_palindromes, 10);
//! ```

use crate::Plate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

// ============================================================================
// Types
// ============================================================================

/// Scenario configuration for generating a plate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateScenario {
    /// Number of plates to generate.
    pub total: usize,
    /// Number of plates forced to be palindromic (clamped to `total`).
    pub target_palindromes: usize,
    /// RNG seed for deterministic reproduction. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

/// A generated plate set with ground truth.
#[derive(Debug, Clone)]
pub struct GeneratedPlates {
    /// Shuffled plates.
    pub plates: Vec<Plate>,
    /// How many plates were built as palindromes (before coincidental ones).
    pub intended_palindromes: usize,
}

// ============================================================================
// Plate Construction
// ============================================================================

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    LETTERS[rng.gen_range(0..LETTERS.len())] as char
}

/// Build a plate that reads the same both ways, e.g. `"K 373 K"`.
fn palindromic_plate<R: Rng + ?Sized>(rng: &mut R) -> Plate {
    let letter = random_letter(rng);
    let outer: u8 = rng.gen_range(1..=9);
    let middle: u8 = rng.gen_range(0..=9);
    format!("{letter} {outer}{middle}{outer} {letter}")
}

/// Build an uncorrelated plate, e.g. `"Q 581 D"`. Palindromic only by chance.
fn random_plate<R: Rng + ?Sized>(rng: &mut R) -> Plate {
    let first = random_letter(rng);
    let last = random_letter(rng);
    let number: u16 = rng.gen_range(100..=999);
    format!("{first} {number} {last}")
}

/// Generate `total` plates where the first `target_palindromes` are built as
/// palindromes, then shuffle the whole set.
///
/// `target_palindromes > total` makes every plate palindromic.
pub fn generate_plates<R: Rng + ?Sized>(
    total: usize,
    target_palindromes: usize,
    rng: &mut R,
) -> Vec<Plate> {
    let mut plates: Vec<Plate> = (0..total)
        .map(|i| {
            if i < target_palindromes {
                palindromic_plate(rng)
            } else {
                random_plate(rng)
            }
        })
        .collect();

    plates.shuffle(rng);
    plates
}

// ============================================================================
// Scenario Implementation
// ============================================================================

impl PlateScenario {
    /// Build the RNG this scenario generates from.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generate a complete plate set from this scenario.
    pub fn generate(&self) -> GeneratedPlates {
        let mut rng = self.rng();
        self.generate_with(&mut rng)
    }

    /// Generate using a caller-owned RNG.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> GeneratedPlates {
        GeneratedPlates {
            plates: generate_plates(self.total, self.target_palindromes, rng),
            intended_palindromes: self.target_palindromes.min(self.total),
        }
    }
}

// ============================================================================
// Predefined Scenarios
// ============================================================================

impl PlateScenario {
    /// 10 plates, 3 palindromes. Matches the UI's default form values.
    pub fn demo() -> Self {
        Self {
            total: 10,
            target_palindromes: 3,
            seed: None,
        }
    }

    /// 100,000 plates, 1% palindromes, fixed seed. Used by the criterion bench.
    pub fn large() -> Self {
        Self {
            total: 100_000,
            target_palindromes: 1_000,
            seed: Some(42),
        }
    }

    /// Unseeded scenario with the given counts.
    pub fn with_counts(total: usize, target_palindromes: usize) -> Self {
        Self {
            total,
            target_palindromes,
            seed: None,
        }
    }

    /// Pin the RNG seed.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
