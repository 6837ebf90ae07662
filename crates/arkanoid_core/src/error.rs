//! Registry error types

use std::fmt;

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// No object is registered under the name
    NotFound(String),
    /// Object names must not be empty
    InvalidName,
    /// Location with a NaN or infinite component
    InvalidLocation(String),
    /// Time step that is negative or not finite
    InvalidTimeStep(f32),
    /// Layout geometry with a non-finite position or a non-positive size
    InvalidLayout(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound(name) => write!(f, "Object not found: {}", name),
            RegistryError::InvalidName => write!(f, "Object name must not be empty"),
            RegistryError::InvalidLocation(name) => write!(f, "Non-finite location for object: {}", name),
            RegistryError::InvalidTimeStep(dt) => write!(f, "Invalid time step: {}", dt),
            RegistryError::InvalidLayout(msg) => write!(f, "Invalid layout: {}", msg),
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let msg = RegistryError::NotFound("ball".to_string()).to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("ball"));
    }

    #[test]
    fn test_invalid_time_step_display() {
        let msg = format!("{}", RegistryError::InvalidTimeStep(-0.5));
        assert!(msg.contains("-0.5"));
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(RegistryError::InvalidName);
        assert!(err.source().is_none());
    }
}
