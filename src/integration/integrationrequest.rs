use std::fmt;

use crate::integration::bounds::Bounds;
use crate::integration::integrationerror::{
    IntegrationError,
    Result
};
use crate::integration::quadraturerule::QuadratureRule;
use crate::math::curve::curve::Curve;
use crate::math::polynomial::polynomial::Polynomial;

pub const DEFAULT_LOWER: f64 = 0.0;
pub const DEFAULT_UPPER: f64 = 10.0;
pub const DEFAULT_STEP_SIZE: f64 = 1.0;
pub const DEFAULT_ALGORITHM: &str = "trapezoid";

/// A validated unit of work: what to integrate, where, and how.
///
/// Construction checks everything that could stop the run part way, so a
/// request either integrates fully or is never built.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationRequest {
    polynomial: Polynomial,
    bounds: Bounds,
    rule: QuadratureRule
}

impl IntegrationRequest {
    pub fn new(polynomial: Polynomial, bounds: Bounds, rule: QuadratureRule) -> Result<IntegrationRequest> {
        if let Some(min_x) = polynomial.min_x() {
            if bounds.lower() < min_x {
                return Err(IntegrationError::Domain { x: bounds.lower() });
            }
        }
        Ok(IntegrationRequest { polynomial, bounds, rule })
    }

    /// Builds a request from raw inputs, resolving the algorithm name first so
    /// an unknown name fails before anything else is looked at.
    pub fn from_parts<I>(coefficients: I,
                         lower: f64,
                         upper: f64,
                         step_size: f64,
                         algorithm: &str) -> Result<IntegrationRequest>
        where I: IntoIterator<Item = (f64, f64)> {
        let rule: QuadratureRule = algorithm.parse()?;
        let polynomial = Polynomial::new(coefficients)?;
        let bounds = Bounds::new(lower, upper, step_size)?;
        IntegrationRequest::new(polynomial, bounds, rule)
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn rule(&self) -> QuadratureRule {
        self.rule
    }
}

impl fmt::Display for IntegrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, Algorithm: {}", self.polynomial, self.bounds, self.rule)
    }
}
