use thiserror::Error;

/// Everything that can stop an integration from running.
///
/// None of these are transient: each one names the offending value so the
/// caller can correct the input and try again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    #[error("only positive exponents supported, got {exponent}")]
    InvalidExponent {
        exponent: f64
    },

    #[error("fractional exponents not supported for negative inputs, got x = {x}")]
    Domain {
        x: f64
    },

    #[error("invalid bounds: [{lower} - {upper}], step_size: {step_size}")]
    InvalidBounds {
        lower: f64,
        upper: f64,
        step_size: f64
    },

    #[error("algorithm '{0}' not found, expected one of: midpoint, trapezoid, simpson")]
    UnknownAlgorithm(String),

    #[error("malformed polynomial coefficients '{input}': {reason}")]
    MalformedInput {
        input: String,
        reason: String
    },

    #[error("cannot integrate over {count} sample point(s), at least 2 are needed")]
    DegenerateSamples {
        count: usize
    }
}

pub type Result<T> = std::result::Result<T, IntegrationError>;

impl IntegrationError {
    pub fn malformed(input: &str, reason: impl Into<String>) -> IntegrationError {
        IntegrationError::MalformedInput {
            input: input.to_owned(),
            reason: reason.into()
        }
    }

    /// Errors raised while assembling a request, before any sample is evaluated.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            IntegrationError::InvalidExponent { .. }
                | IntegrationError::InvalidBounds { .. }
                | IntegrationError::UnknownAlgorithm(_)
                | IntegrationError::MalformedInput { .. }
        )
    }

    pub fn is_evaluation_error(&self) -> bool {
        matches!(
            self,
            IntegrationError::Domain { .. } | IntegrationError::DegenerateSamples { .. }
        )
    }
}
