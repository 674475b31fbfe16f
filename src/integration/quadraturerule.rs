use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::integration::integrationerror::{
    IntegrationError,
    Result
};
use crate::math::curve::curve::Curve;

// ─────────────────────────────────────────────
// Single-slice rules
// ─────────────────────────────────────────────

/// Height at the centre of the slice times its width.
pub fn midpoint<C: Curve + ?Sized>(curve: &C, lower: f64, upper: f64) -> Result<f64> {
    let value = curve.value((upper + lower) / 2.0)?;
    Ok((upper - lower) * value)
}

/// Mean of the two edge heights times the width.
pub fn trapezoid<C: Curve + ?Sized>(curve: &C, lower: f64, upper: f64) -> Result<f64> {
    let lower_value = curve.value(lower)?;
    let upper_value = curve.value(upper)?;
    Ok((upper - lower) * ((lower_value + upper_value) / 2.0))
}

/// Area under the parabola through both edges and the centre. Exact for
/// polynomials up to degree 3.
pub fn simpson<C: Curve + ?Sized>(curve: &C, lower: f64, upper: f64) -> Result<f64> {
    let lower_value = curve.value(lower)?;
    let upper_value = curve.value(upper)?;
    let midpoint_value = curve.value((lower + upper) / 2.0)?;
    Ok(((upper - lower) / 6.0) * (lower_value + 4.0 * midpoint_value + upper_value))
}

// ─────────────────────────────────────────────
// QuadratureRule
// ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadratureRule {
    Midpoint,
    #[default]
    Trapezoid,
    Simpson
}

impl QuadratureRule {
    pub const ALL: [QuadratureRule; 3] = [
        QuadratureRule::Midpoint,
        QuadratureRule::Trapezoid,
        QuadratureRule::Simpson
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuadratureRule::Midpoint => "midpoint",
            QuadratureRule::Trapezoid => "trapezoid",
            QuadratureRule::Simpson => "simpson"
        }
    }

    /// Signed area estimate for the slice `[lower, upper]`.
    pub fn estimate<C: Curve + ?Sized>(&self, curve: &C, lower: f64, upper: f64) -> Result<f64> {
        match self {
            QuadratureRule::Midpoint => midpoint(curve, lower, upper),
            QuadratureRule::Trapezoid => trapezoid(curve, lower, upper),
            QuadratureRule::Simpson => simpson(curve, lower, upper)
        }
    }
}

impl FromStr for QuadratureRule {
    type Err = IntegrationError;

    /// Exact, case-sensitive name lookup.
    fn from_str(name: &str) -> Result<QuadratureRule> {
        QuadratureRule::ALL
            .into_iter()
            .find(|rule| rule.name() == name)
            .ok_or_else(|| IntegrationError::UnknownAlgorithm(name.to_owned()))
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::math::polynomial::polynomial::Polynomial;

    fn parabola() -> Polynomial {
        Polynomial::new([(2.0, 1.0)]).unwrap()
    }

    #[test]
    fn test_single_slice_parabola() {
        let poly = parabola();
        let exact = 8.0 / 3.0;

        assert_relative_eq!(simpson(&poly, 0.0, 2.0).unwrap(), exact, epsilon = 1e-12);
        assert_eq!(trapezoid(&poly, 0.0, 2.0).unwrap(), 4.0);
        assert_eq!(midpoint(&poly, 0.0, 2.0).unwrap(), 2.0);
        assert!(trapezoid(&poly, 0.0, 2.0).unwrap() > exact);
        assert!(midpoint(&poly, 0.0, 2.0).unwrap() < exact);
    }

    #[test]
    fn test_simpson_exact_for_cubic() {
        // x^3 - 2x + 1 over [-1, 3]: 81/4 - 9 + 3 - (1/4 - 1 - 1) = 16
        let poly = Polynomial::new([(3.0, 1.0), (1.0, -2.0), (0.0, 1.0)]).unwrap();
        assert_relative_eq!(simpson(&poly, -1.0, 3.0).unwrap(), 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_is_exact_for_every_rule() {
        let poly = Polynomial::new([(1.0, 3.0), (0.0, 1.0)]).unwrap();
        for rule in QuadratureRule::ALL {
            assert_relative_eq!(rule.estimate(&poly, 1.0, 4.0).unwrap(), 25.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_area() {
        let poly = Polynomial::new([(0.0, -2.0)]).unwrap();
        for rule in QuadratureRule::ALL {
            assert_eq!(rule.estimate(&poly, 0.0, 3.0).unwrap(), -6.0);
        }
    }

    #[test]
    fn test_domain_error_propagates() {
        let poly = Polynomial::new([(0.5, 1.0)]).unwrap();
        assert_eq!(
            trapezoid(&poly, -1.0, 1.0),
            Err(IntegrationError::Domain { x: -1.0 })
        );
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!("midpoint".parse::<QuadratureRule>().unwrap(), QuadratureRule::Midpoint);
        assert_eq!("trapezoid".parse::<QuadratureRule>().unwrap(), QuadratureRule::Trapezoid);
        assert_eq!("simpson".parse::<QuadratureRule>().unwrap(), QuadratureRule::Simpson);
        for rule in QuadratureRule::ALL {
            assert_eq!(rule.to_string().parse::<QuadratureRule>().unwrap(), rule);
        }
    }

    #[test]
    fn test_unknown_name() {
        for name in ["quadrature42", "Simpson", " simpson", "", "evaluate"] {
            assert_eq!(
                name.parse::<QuadratureRule>(),
                Err(IntegrationError::UnknownAlgorithm(name.to_owned()))
            );
        }
    }

    #[test]
    fn test_deserialize() {
        let rule: QuadratureRule = serde_json::from_str("\"simpson\"").unwrap();
        assert_eq!(rule, QuadratureRule::Simpson);
        assert!(serde_json::from_str::<QuadratureRule>("\"romberg\"").is_err());
        assert_eq!(QuadratureRule::default(), QuadratureRule::Trapezoid);
    }
}
