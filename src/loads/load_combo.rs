//! Load combinations

use serde::{Deserialize, Serialize};

/// A factored sum of load cases, evaluated by superposition of case results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Name of the load combination
    pub name: String,
    /// Factors for each load case, in declaration order
    pub factors: Vec<(String, f64)>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            factors: Vec::new(),
        }
    }

    /// Add a load case with a factor; repeating a case adds to its factor
    pub fn with_case(mut self, case: &str, factor: f64) -> Self {
        match self.factors.iter_mut().find(|(name, _)| name == case) {
            Some((_, f)) => *f += factor,
            None => self.factors.push((case.to_string(), factor)),
        }
        self
    }

    /// Get the factor for a load case
    pub fn factor(&self, case: &str) -> f64 {
        self.factors
            .iter()
            .find(|(name, _)| name == case)
            .map_or(0.0, |(_, f)| *f)
    }

    /// Check if this combination includes a specific load case
    pub fn includes(&self, case: &str) -> bool {
        self.factor(case).abs() > 1e-10
    }
}
