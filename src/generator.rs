//! Synthetic workload generation.
//!
//! Bernoulli arrivals over a fixed tick horizon: on each tick a process
//! arrives with probability `arrival_probability`, and is short with
//! probability `short_probability` (otherwise long). Seeded, so the same
//! parameters always yield the same workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{ProcessSpec, Ticks, Workload};

/// Reproducible random workload builder.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    /// Ticks over which arrivals are drawn.
    pub ticks: Ticks,
    /// Per-tick arrival probability (0.0..=1.0).
    pub arrival_probability: f64,
    /// Probability that an arriving process is short.
    pub short_probability: f64,
    /// Burst of a short process.
    pub short_burst: Ticks,
    /// Burst of a long process.
    pub long_burst: Ticks,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator over `ticks` ticks with default mix parameters.
    pub fn new(ticks: Ticks) -> Self {
        Self {
            ticks,
            arrival_probability: 0.3,
            short_probability: 0.3,
            short_burst: 2,
            long_burst: 6,
            seed: 0,
        }
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.arrival_probability = p;
        self
    }

    /// Sets the short-process probability.
    pub fn with_short_probability(mut self, p: f64) -> Self {
        self.short_probability = p;
        self
    }

    /// Sets short and long burst lengths.
    pub fn with_bursts(mut self, short_burst: Ticks, long_burst: Ticks) -> Self {
        self.short_burst = short_burst;
        self.long_burst = long_burst;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Draws a workload. Ids are `P1..Pn` in arrival order.
    ///
    /// May return an empty workload for low probabilities or short horizons.
    pub fn generate(&self) -> Workload {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut processes = Vec::new();

        for t in 0..self.ticks.max(0) {
            if rng.random::<f64>() < self.arrival_probability {
                let burst = if rng.random::<f64>() < self.short_probability {
                    self.short_burst
                } else {
                    self.long_burst
                };
                processes.push(ProcessSpec::new(
                    format!("P{}", processes.len() + 1),
                    t,
                    burst,
                ));
            }
        }

        Workload::from_processes(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_workload() {
        let g = WorkloadGenerator::new(200).with_seed(42);
        assert_eq!(g.generate(), g.generate());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = WorkloadGenerator::new(200).with_seed(1).generate();
        let b = WorkloadGenerator::new(200).with_seed(2).generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_bursts_and_ordering() {
        let w = WorkloadGenerator::new(100)
            .with_arrival_probability(0.5)
            .with_bursts(1, 9)
            .with_seed(7)
            .generate();
        assert!(!w.is_empty());
        let mut last = 0;
        for (i, p) in w.iter().enumerate() {
            assert_eq!(p.id, format!("P{}", i + 1));
            assert!(p.burst_time == 1 || p.burst_time == 9);
            assert!(p.arrival_time >= last && p.arrival_time < 100);
            last = p.arrival_time;
        }
    }

    #[test]
    fn test_certain_arrival_every_tick() {
        let w = WorkloadGenerator::new(10)
            .with_arrival_probability(1.0)
            .with_short_probability(1.0)
            .generate();
        assert_eq!(w.len(), 10);
        assert_eq!(w.total_burst_time(), 20);
    }

    #[test]
    fn test_zero_probability_is_empty() {
        let w = WorkloadGenerator::new(50)
            .with_arrival_probability(0.0)
            .generate();
        assert!(w.is_empty());
    }
}
