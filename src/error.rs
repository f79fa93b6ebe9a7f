//! Error types for the configuration registry.

use std::fmt;

/// Errors surfaced by the registry and its wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A region lookup used a code that is not in the registry.
    ///
    /// Callers recover locally (skip the region or fall back to default styling).
    NotFound {
        /// The code that was looked up, verbatim
        code: String,
    },
    /// One or more fields violate their type or range.
    MalformedConfiguration {
        /// Every problem found, one human-readable line each
        problems: Vec<String>,
    },
    /// Wire text could not be parsed into the registry shape.
    Parse {
        /// Which wire format was being read ("json" or "js")
        format: &'static str,
        /// Underlying parser message
        message: String,
    },
}

impl RegistryError {
    /// Creates a `NotFound` error for the given code.
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    /// Returns true if this is a `NotFound` error.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { code } => write!(f, "Region '{code}' not found"),
            Self::MalformedConfiguration { problems } => {
                write!(f, "Malformed map configuration ({} problem", problems.len())?;
                if problems.len() != 1 {
                    write!(f, "s")?;
                }
                write!(f, "): {}", problems.join("; "))
            }
            Self::Parse { format, message } => {
                write!(f, "Failed to parse {format} map data: {message}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RegistryError::not_found("ZZ");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Region 'ZZ' not found");
    }

    #[test]
    fn test_malformed_display_lists_problems() {
        let err = RegistryError::MalformedConfiguration {
            problems: vec!["a is bad".to_string(), "b is bad".to_string()],
        };
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Malformed map configuration (2 problems): a is bad; b is bad"
        );

        let single = RegistryError::MalformedConfiguration {
            problems: vec!["only one".to_string()],
        };
        assert!(single.to_string().starts_with("Malformed map configuration (1 problem)"));
    }
}
