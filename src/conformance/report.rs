use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Lane counters for one operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpStats {
    pub checks: u64,
    pub mismatches: u64,
}

/// Outcome of a conformance run: for every operation, how many lanes were compared and how
/// many differed from the one-lane reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub width: usize,
    pub rounds: usize,
    pub seed: u64,
    pub operations: HashMap<String, OpStats>,
}

impl ConformanceReport {
    pub fn new(width: usize, rounds: usize, seed: u64) -> Self {
        ConformanceReport {
            width,
            rounds,
            seed,
            operations: HashMap::new(),
        }
    }

    /// Adds `checks` compared lanes, `mismatches` of which differed, to `op`.
    pub fn record(&mut self, op: &str, checks: u64, mismatches: u64) {
        debug_assert!(mismatches <= checks);
        let stats = self.operations.entry_ref(op).or_default();
        stats.checks += checks;
        stats.mismatches += mismatches;
    }

    pub fn total_checks(&self) -> u64 {
        self.operations.values().map(|s| s.checks).sum()
    }

    pub fn total_mismatches(&self) -> u64 {
        self.operations.values().map(|s| s.mismatches).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total_mismatches() == 0
    }

    /// Names of the operations with at least one mismatch, sorted.
    pub fn failing_operations(&self) -> Vec<&str> {
        let mut failing: Vec<&str> = self
            .operations
            .iter()
            .filter(|(_, s)| s.mismatches > 0)
            .map(|(op, _)| op.as_str())
            .collect();
        failing.sort_unstable();
        failing
    }

    /// Folds the counters of `other` into `self`.
    pub fn merge(mut self, other: &ConformanceReport) -> Self {
        for (op, stats) in other.operations.iter() {
            self.record(op, stats.checks, stats.mismatches);
        }
        self.rounds += other.rounds;
        self
    }
}
