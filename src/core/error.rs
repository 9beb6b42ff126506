//! Error handling and error types for ensemble row sampling.
//!
//! Every failure in this crate is deterministic given the same inputs: there
//! is no I/O and no transient condition worth retrying.
//! The only recovery is reconfiguration by the caller.

use thiserror::Error;

/// Main error type for the sampling library.
#[derive(Error, Debug)]
pub enum SamplingError {
    /// Configuration errors detected while building a sampler
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the invalid configuration
        message: String,
    },

    /// Invalid arguments passed to `select`/`combine` or a sample accessor
    #[error("Invalid argument: {parameter} = {value}, {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        parameter: String,
        /// Rendered value of the argument
        value: String,
        /// Why the value is rejected
        reason: String,
    },

    /// Length mismatch between collections that must line up
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected shape
        expected: String,
        /// Actual shape
        actual: String,
    },

    /// Target column does not satisfy the grouping contract
    #[error("Invalid target column: {message}")]
    InvalidTarget {
        /// Description of the violation
        message: String,
    },

    /// Internal library errors (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the broken internal invariant
        message: String,
    },
}

/// Type alias for Results using SamplingError
pub type Result<T> = std::result::Result<T, SamplingError>;

impl SamplingError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        SamplingError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: ToString,
        R: Into<String>,
    {
        SamplingError::InvalidArgument {
            parameter: parameter.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        SamplingError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid target column error
    pub fn invalid_target<S: Into<String>>(message: S) -> Self {
        SamplingError::InvalidTarget {
            message: message.into(),
        }
    }

    /// Create an internal error (should be used sparingly)
    pub fn internal<S: Into<String>>(message: S) -> Self {
        SamplingError::Internal {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable.
    ///
    /// Always `false`: repeating the same call with the same inputs fails the
    /// same way.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SamplingError::Config { .. }
            | SamplingError::InvalidArgument { .. }
            | SamplingError::DimensionMismatch { .. }
            | SamplingError::InvalidTarget { .. }
            | SamplingError::Internal { .. } => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            SamplingError::Config { .. } => "config",
            SamplingError::InvalidArgument { .. } => "invalid_argument",
            SamplingError::DimensionMismatch { .. } => "dimension_mismatch",
            SamplingError::InvalidTarget { .. } => "invalid_target",
            SamplingError::Internal { .. } => "internal",
        }
    }
}

/// Convenience macro for configuration errors
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::core::error::SamplingError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::SamplingError::config(format!($fmt, $($arg)*))
    };
}

/// Early-return with the given error when the condition does not hold
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
