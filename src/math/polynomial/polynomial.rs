use std::fmt;

use crate::integration::integrationerror::{
    IntegrationError,
    Result
};
use crate::math::curve::curve::Curve;
use crate::math::polynomial::coefficientparser::parse_coefficients;

// ─────────────────────────────────────────────
// Term
// ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    exponent: f64,
    coefficient: f64
}

impl Term {
    pub fn new(exponent: f64, coefficient: f64) -> Term {
        Term { exponent, coefficient }
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    pub fn is_fractional(&self) -> bool {
        self.exponent.fract() != 0.0
    }

    fn value(&self, x: f64) -> f64 {
        let power = if !self.is_fractional() && self.exponent <= i32::MAX as f64 {
            x.powi(self.exponent as i32)
        } else {
            x.powf(self.exponent)
        };
        power * self.coefficient
    }
}

impl fmt::Display for Term {
    /// Renders `3x^2`, `x^2`, `2x`, `x` or a bare constant. Zero terms render
    /// as an empty string; `Polynomial` skips them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient == 0.0 {
            return Ok(());
        }
        if self.exponent == 0.0 {
            return write!(f, "{}", self.coefficient);
        }
        if self.coefficient != 1.0 {
            write!(f, "{}", self.coefficient)?;
        }
        if self.exponent == 1.0 {
            write!(f, "x")
        } else {
            write!(f, "x^{}", self.exponent)
        }
    }
}

// ─────────────────────────────────────────────
// Polynomial
// ─────────────────────────────────────────────

/// Sparse single-variable polynomial `Σ c_d·x^d`.
///
/// Exponents are non-negative and may be fractional. Terms are kept in
/// descending exponent order, one term per exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
    fractional_exponents: bool
}

impl Polynomial {
    /// Builds a polynomial from `(exponent, coefficient)` pairs, e.g.
    /// `f(x) = 9x^5 + 3` is `[(5.0, 9.0), (0.0, 3.0)]`.
    ///
    /// A repeated exponent replaces the earlier coefficient.
    pub fn new<I>(coefficients: I) -> Result<Polynomial>
        where I: IntoIterator<Item = (f64, f64)> {
        let mut terms: Vec<Term> = Vec::new();
        for (exponent, coefficient) in coefficients {
            if !exponent.is_finite() || exponent < 0.0 {
                return Err(IntegrationError::InvalidExponent { exponent });
            }
            match terms.iter_mut().find(|t| t.exponent == exponent) {
                Some(term) => term.coefficient = coefficient,
                None => terms.push(Term::new(exponent, coefficient))
            }
        }
        terms.sort_by(|a, b| b.exponent.total_cmp(&a.exponent));

        let fractional_exponents = terms.iter().any(|t| t.is_fractional());
        Ok(Polynomial { terms, fractional_exponents })
    }

    /// Parses a `{exponent: coefficient, ...}` literal.
    pub fn from_literal(literal: &str) -> Result<Polynomial> {
        Polynomial::new(parse_coefficients(literal)?)
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn has_fractional_exponents(&self) -> bool {
        self.fractional_exponents
    }

    /// Highest exponent carrying a nonzero coefficient.
    pub fn degree(&self) -> Option<f64> {
        self.terms
            .iter()
            .find(|t| t.coefficient != 0.0)
            .map(|t| t.exponent)
    }

    pub fn evaluate(&self, x: f64) -> Result<f64> {
        if self.fractional_exponents && x < 0.0 {
            return Err(IntegrationError::Domain { x });
        }
        Ok(self.terms.iter().map(|t| t.value(x)).sum())
    }
}

impl Curve for Polynomial {
    fn value(&self, x: f64) -> Result<f64> {
        self.evaluate(x)
    }

    fn min_x(&self) -> Option<f64> {
        if self.fractional_exponents {
            Some(0.0)
        } else {
            None
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .terms
            .iter()
            .filter(|t| t.coefficient != 0.0)
            .map(|t| t.to_string())
            .collect();
        if rendered.is_empty() {
            write!(f, "f(x)=0")
        } else {
            write!(f, "f(x)={}", rendered.join(" + "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluate_quadratic() {
        let poly = Polynomial::new([(2.0, 1.0), (1.0, 2.0), (0.0, -2.0)]).unwrap();
        assert_eq!(poly.evaluate(3.0).unwrap(), 13.0);
        assert_eq!(poly.evaluate(0.0).unwrap(), -2.0);
        assert_eq!(poly.evaluate(-1.0).unwrap(), -3.0);
    }

    #[test]
    fn test_negative_exponent_rejected() {
        let result = Polynomial::new([(2.0, 1.0), (-1.0, 4.0)]);
        assert_eq!(result, Err(IntegrationError::InvalidExponent { exponent: -1.0 }));
    }

    #[test]
    fn test_non_finite_exponent_rejected() {
        assert!(matches!(
            Polynomial::new([(f64::NAN, 1.0)]),
            Err(IntegrationError::InvalidExponent { .. })
        ));
        assert!(matches!(
            Polynomial::new([(f64::INFINITY, 1.0)]),
            Err(IntegrationError::InvalidExponent { .. })
        ));
    }

    #[test]
    fn test_fractional_exponent() {
        let poly = Polynomial::new([(0.5, 1.0)]).unwrap();
        assert!(poly.has_fractional_exponents());
        assert_relative_eq!(poly.evaluate(4.0).unwrap(), 2.0, epsilon = 1e-12);
        assert_eq!(poly.evaluate(0.0).unwrap(), 0.0);
        assert_eq!(poly.evaluate(-4.0), Err(IntegrationError::Domain { x: -4.0 }));
        assert_eq!(poly.min_x(), Some(0.0));
    }

    #[test]
    fn test_fractional_polynomial_rejects_negative_even_for_integer_terms() {
        let poly = Polynomial::new([(2.0, 1.0), (1.5, 0.0)]).unwrap();
        assert!(poly.evaluate(-1.0).is_err());
    }

    #[test]
    fn test_integral_valued_float_exponent_is_not_fractional() {
        let poly = Polynomial::new([(3.0, 1.0)]).unwrap();
        assert!(!poly.has_fractional_exponents());
        assert_eq!(poly.evaluate(-2.0).unwrap(), -8.0);
        assert_eq!(poly.min_x(), None);
    }

    #[test]
    fn test_zero_coefficients_sum_harmlessly() {
        let poly = Polynomial::new([(3.0, 0.0), (1.0, 1.0)]).unwrap();
        assert_eq!(poly.evaluate(5.0).unwrap(), 5.0);
        assert_eq!(poly.degree(), Some(1.0));
        assert_eq!(poly.terms().len(), 2);
    }

    #[test]
    fn test_duplicate_exponent_keeps_last() {
        let poly = Polynomial::new([(1.0, 1.0), (1.0, 4.0)]).unwrap();
        assert_eq!(poly.terms(), &[Term::new(1.0, 4.0)]);
    }

    #[test]
    fn test_empty_polynomial() {
        let poly = Polynomial::new(Vec::new()).unwrap();
        assert!(poly.is_empty());
        assert_eq!(poly.evaluate(12.0).unwrap(), 0.0);
        assert_eq!(poly.degree(), None);
        assert_eq!(poly.to_string(), "f(x)=0");
    }

    #[test]
    fn test_display() {
        let poly = Polynomial::new([(0.0, -2.0), (1.0, 2.0), (2.0, 1.0)]).unwrap();
        assert_eq!(poly.to_string(), "f(x)=x^2 + 2x + -2");

        let poly = Polynomial::new([(5.0, 9.0), (0.0, 3.0), (2.0, 0.0)]).unwrap();
        assert_eq!(poly.to_string(), "f(x)=9x^5 + 3");

        let poly = Polynomial::new([(0.5, 1.0), (0.0, 1.0), (1.0, 1.0)]).unwrap();
        assert_eq!(poly.to_string(), "f(x)=x + x^0.5 + 1");

        let poly = Polynomial::new([(4.0, 0.0)]).unwrap();
        assert_eq!(poly.to_string(), "f(x)=0");
    }

    #[test]
    fn test_from_literal() {
        let poly = Polynomial::from_literal("{2:1, 1:2, 0:-2}").unwrap();
        assert_eq!(poly.evaluate(3.0).unwrap(), 13.0);

        assert!(matches!(
            Polynomial::from_literal("{2:-1, -2:1}"),
            Err(IntegrationError::InvalidExponent { exponent }) if exponent == -2.0
        ));
    }
}
