//! Error type shared by every pattern in the catalog.

use thiserror::Error;

/// Failures a pattern operation can report to its caller.
///
/// Required operations are trait methods without defaults, so a missing
/// implementation is a compile error. `NotImplemented` is left for optional
/// capabilities a type chooses not to provide.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PatternError {
    #[error("{type_name} has not implemented method '{method}'")]
    NotImplemented {
        type_name: &'static str,
        method: &'static str,
    },

    #[error("the speeds have different units: {left} vs {right}")]
    IncompatibleUnits { left: String, right: String },

    #[error("no child at index {index} (composite has {len})")]
    NoSuchChild { index: usize, len: usize },

    #[error("invalid memento: {0}")]
    InvalidMemento(String),

    #[error("failed to render state: {0}")]
    StateRendering(String),
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        PatternError::StateRendering(err.to_string())
    }
}

impl PatternError {
    pub fn not_implemented(type_name: &'static str, method: &'static str) -> Self {
        PatternError::NotImplemented { type_name, method }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_message() {
        let err = PatternError::not_implemented("Leaf", "add");
        assert_eq!(err.to_string(), "Leaf has not implemented method 'add'");
    }

    #[test]
    fn test_incompatible_units_message() {
        let err = PatternError::IncompatibleUnits {
            left: "km/h".to_string(),
            right: "mi/h".to_string(),
        };
        assert!(err.to_string().contains("km/h vs mi/h"));
    }

    #[test]
    fn test_no_such_child_message() {
        let err = PatternError::NoSuchChild { index: 3, len: 1 };
        assert_eq!(err.to_string(), "no child at index 3 (composite has 1)");
    }
}
