//! Distributed loads on bars

use serde::{Deserialize, Serialize};

use super::point_load::{CoordinateSystem, LoadComponent};

/// A linearly varying line load on one component of a bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDistributedLoad {
    /// Label of the load within its case
    pub name: String,
    /// Loaded component
    pub component: LoadComponent,
    /// Axes of the component
    pub system: CoordinateSystem,
    /// Intensity at `x1`
    pub p1: f64,
    /// Intensity at `x2`
    pub p2: f64,
    /// Start of the loaded span, measured from the start node
    pub x1: f64,
    /// End of the loaded span; `None` runs to the end node
    pub x2: Option<f64>,
}

impl BarDistributedLoad {
    /// Create a new distributed load over `[x1, x2]`
    pub fn new(name: &str, component: LoadComponent, p1: f64, p2: f64, x1: f64, x2: f64) -> Self {
        Self {
            name: name.to_string(),
            component,
            system: CoordinateSystem::Local,
            p1,
            p2,
            x1,
            x2: Some(x2),
        }
    }

    /// Uniform load over the full bar length
    pub fn uniform(name: &str, component: LoadComponent, p: f64) -> Self {
        Self::linear(name, component, p, p)
    }

    /// Linearly varying load over the full bar length
    pub fn linear(name: &str, component: LoadComponent, p1: f64, p2: f64) -> Self {
        Self {
            name: name.to_string(),
            component,
            system: CoordinateSystem::Local,
            p1,
            p2,
            x1: 0.0,
            x2: None,
        }
    }

    /// Express the component in global axes instead
    pub fn in_global(mut self) -> Self {
        self.system = CoordinateSystem::Global;
        self
    }

    /// Loaded span on a bar of the given length
    pub fn span(&self, length: f64) -> (f64, f64) {
        (self.x1, self.x2.unwrap_or(length))
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            p1: self.p1 * factor,
            p2: self.p2 * factor,
            ..self.clone()
        }
    }

    /// Resultant of the load on a bar of the given length
    pub fn total(&self, length: f64) -> f64 {
        let (x1, x2) = self.span(length);
        (self.p1 + self.p2) / 2.0 * (x2 - x1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_length_span() {
        let load = BarDistributedLoad::uniform("w", LoadComponent::Fy, -2.0);
        assert_eq!(load.span(6.0), (0.0, 6.0));
        assert_eq!(load.total(6.0), -12.0);
    }

    #[test]
    fn test_partial_span() {
        let load = BarDistributedLoad::new("tri", LoadComponent::Fz, 0.0, 3.0, 1.0, 3.0);
        assert_eq!(load.span(10.0), (1.0, 3.0));
        assert_eq!(load.total(10.0), 3.0);
        assert_eq!(load.scaled(2.0).p2, 6.0);
    }
}
