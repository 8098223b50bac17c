use rand::Rng;

/// Source of uniform random fractions in `[0, 1)`.
///
/// Every random decision in the resolver (attribute rolls, class
/// assignment, evasion checks, skill chances) draws through this trait,
/// so a battle can be made fully deterministic by injecting a scripted
/// source. The `reason` string labels each draw for test output.
pub trait RandomSource {
    fn next_fraction(&mut self, reason: &str) -> f64;
}

/// Process-entropy source used outside of tests.
#[derive(Debug, Default)]
pub struct EntropySource;

impl EntropySource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for EntropySource {
    fn next_fraction(&mut self, _reason: &str) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Pre-scripted source for deterministic tests.
///
/// Panics when the script runs dry, naming the draw that exhausted it.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    outcomes: Vec<f64>,
    index: usize,
}

impl ScriptedSource {
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self { outcomes, index: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_fraction(&mut self, reason: &str) -> f64 {
        if self.index >= self.outcomes.len() {
            panic!(
                "ScriptedSource exhausted! Tried to get a value for: '{}'. Need more scripted values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }
}
