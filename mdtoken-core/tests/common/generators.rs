//! Stochastic content generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

#[allow(dead_code)]
impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("MDTOKEN_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    /// Returns 0, 1, 2, ... with decreasing probability
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Poisson-like count (simplified)
    pub fn poisson(&mut self, lambda: f64) -> usize {
        let l = (-lambda).exp();
        let mut k = 0;
        let mut p = 1.0;
        loop {
            k += 1;
            p *= self.rng.gen::<f64>();
            if p <= l {
                break;
            }
        }
        k - 1
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Random lowercase word
    pub fn word(&mut self) -> String {
        let len = 1 + self.geometric(0.7);
        (0..len)
            .map(|_| self.rng.gen_range(b'a'..=b'z') as char)
            .collect()
    }

    /// Random line of words
    pub fn line(&mut self) -> String {
        let count = 1 + self.geometric(0.6);
        let words: Vec<String> = (0..count).map(|_| self.word()).collect();
        words.join(" ")
    }

    /// Random self-contained block: a paragraph, a thematic break, or
    /// closed fenced code. No trailing line ending.
    pub fn block(&mut self) -> String {
        match self.rng.gen_range(0..3) {
            0 => {
                let lines = 1 + self.geometric(0.4);
                let lines: Vec<String> = (0..lines).map(|_| self.line()).collect();
                lines.join("\n")
            }
            1 => ["***", "___", "* * *"][self.rng.gen_range(0..3)].to_string(),
            _ => format!("~~~\n{}\n~~~", self.line()),
        }
    }

    /// One or more line endings: the first ends the previous line, the
    /// rest are blank lines.
    pub fn blank_lines(&mut self) -> String {
        "\n".repeat(1 + self.geometric(0.2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.block(), g2.block());
            assert_eq!(g1.geometric(0.9), g2.geometric(0.9));
        }
    }

    #[test]
    fn test_geometric_distribution() {
        let mut gen = Gen::new(12345);
        let samples: Vec<usize> = (0..1000).map(|_| gen.geometric(0.9)).collect();

        // With α=0.9, we expect mean ≈ 9 (geometric mean = α/(1-α))
        let mean: f64 = samples.iter().sum::<usize>() as f64 / samples.len() as f64;
        assert!(mean > 5.0 && mean < 15.0, "Mean {} out of expected range", mean);
    }
}
