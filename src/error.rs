//! Error types for the frame solver

use thiserror::Error;

/// Broad family an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad values passed by the caller (positions, spans, springs)
    Input,
    /// Inconsistent structure definition (dangling references, duplicates, bad geometry)
    Configuration,
    /// The assembled system could not be solved
    Numerical,
}

/// Main error type for frame analysis operations
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Node '{0}' not found in model")]
    NodeNotFound(String),

    #[error("Bar '{0}' not found in model")]
    BarNotFound(String),

    #[error("Material '{0}' not found in model")]
    MaterialNotFound(String),

    #[error("Section '{0}' not found in model")]
    SectionNotFound(String),

    #[error("Load case '{0}' not found in model")]
    LoadCaseNotFound(String),

    #[error("Duplicate name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid property '{property}' on '{owner}': {value}")]
    InvalidProperty {
        owner: String,
        property: &'static str,
        value: f64,
    },

    /// Spring supports need a strictly positive, finite stiffness
    #[error("Invalid spring stiffness {stiffness} for {dof} (use a free restraint instead of a zero spring)")]
    InvalidSpring { dof: String, stiffness: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Structure is unstable in load case '{case}': no stiffness against {dof} at node '{node}'")]
    Unstable {
        case: String,
        node: String,
        dof: String,
    },

    #[error("Model not analyzed - run analyze() first")]
    NotAnalyzed,
}

impl FrameError {
    /// Which family of failure this is
    pub fn category(&self) -> ErrorCategory {
        match self {
            FrameError::InvalidProperty { .. }
            | FrameError::InvalidSpring { .. }
            | FrameError::InvalidInput(_) => ErrorCategory::Input,
            FrameError::Unstable { .. } => ErrorCategory::Numerical,
            _ => ErrorCategory::Configuration,
        }
    }

    /// True when the structure was found to be a mechanism or otherwise singular
    pub fn is_instability(&self) -> bool {
        matches!(self, FrameError::Unstable { .. })
    }
}

/// Result type for frame analysis operations
pub type FrameResult<T> = Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            FrameError::InvalidInput("x".into()).category(),
            ErrorCategory::Input
        );
        assert_eq!(
            FrameError::NodeNotFound("N9".into()).category(),
            ErrorCategory::Configuration
        );
        let unstable = FrameError::Unstable {
            case: "Dead".into(),
            node: "N2".into(),
            dof: "RX".into(),
        };
        assert_eq!(unstable.category(), ErrorCategory::Numerical);
        assert!(unstable.is_instability());
        assert!(unstable.to_string().contains("N2"));
    }
}
