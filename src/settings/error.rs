use thiserror::Error;

use super::ValueType;

/// A raw value that cannot become a value of the declared type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The raw text has the wrong structure for the type.
    #[error("illegal value for {kind}: {value}")]
    Illegal {
        /// What was being parsed (e.g. "address")
        kind: &'static str,
        /// The offending raw text
        value: String,
    },

    /// A component was rejected by the type's constructor.
    #[error("invalid {kind} '{value}': {reason}")]
    Invalid {
        /// What was being constructed
        kind: &'static str,
        /// The offending raw text
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A value was assigned to a leaf declared with another type.
    #[error("expected a {expected} value, got a {actual} value")]
    TypeMismatch {
        /// Declared type of the leaf
        expected: ValueType,
        /// Type of the value offered
        actual: ValueType,
    },
}

impl ValueError {
    pub(crate) fn illegal(kind: &'static str, value: &str) -> Self {
        ValueError::Illegal {
            kind,
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid(kind: &'static str, value: &str, reason: impl Into<String>) -> Self {
        ValueError::Invalid {
            kind,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
