use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::integration::integrationerror::{
    IntegrationError,
    Result
};
use crate::integration::integrationrequest::{
    IntegrationRequest,
    DEFAULT_ALGORITHM,
    DEFAULT_LOWER,
    DEFAULT_STEP_SIZE,
    DEFAULT_UPPER
};
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::polynomial::coefficientparser::parse_coefficients;

/// `"polynomial"` may be a literal string or a JSON object keyed by exponent.
#[derive(Deserialize)]
#[serde(untagged)]
enum CoefficientsJsonProp {
    Literal(String),
    Mapping(BTreeMap<String, f64>)
}

impl CoefficientsJsonProp {
    fn to_pairs(&self) -> Result<Vec<(f64, f64)>> {
        let pairs = match self {
            CoefficientsJsonProp::Literal(literal) => parse_coefficients(literal)?,
            CoefficientsJsonProp::Mapping(mapping) => {
                let mut pairs = Vec::with_capacity(mapping.len());
                for (key, &coefficient) in mapping.iter() {
                    let exponent = key
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| IntegrationError::malformed(key, "exponent is not a number"))?;
                    pairs.push((exponent, coefficient));
                }
                pairs
            }
        };
        if pairs.is_empty() {
            return Err(IntegrationError::malformed(&self.to_string(), "polynomial has no terms"));
        }
        Ok(pairs)
    }
}

impl std::fmt::Display for CoefficientsJsonProp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoefficientsJsonProp::Literal(literal) => write!(f, "{}", literal),
            CoefficientsJsonProp::Mapping(mapping) => {
                let entries: Vec<String> = mapping
                    .iter()
                    .map(|(key, coefficient)| format!("{}: {}", key, coefficient))
                    .collect();
                write!(f, "{{{}}}", entries.join(", "))
            }
        }
    }
}

fn default_lower() -> f64 {
    DEFAULT_LOWER
}

fn default_upper() -> f64 {
    DEFAULT_UPPER
}

fn default_step_size() -> f64 {
    DEFAULT_STEP_SIZE
}

fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_owned()
}

#[derive(Deserialize)]
struct IntegrationRequestJsonProp {
    name: String,
    polynomial: CoefficientsJsonProp,
    #[serde(default = "default_lower")]
    lower: f64,
    #[serde(default = "default_upper")]
    upper: f64,
    #[serde(default = "default_step_size")]
    step_size: f64,
    #[serde(default = "default_algorithm")]
    algorithm: String
}

fn get_integration_request_from_json(json_value: serde_json::Value) -> std::result::Result<Arc<IntegrationRequest>, ManagerError> {
    let json_prop: IntegrationRequestJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let request = json_prop
        .polynomial
        .to_pairs()
        .and_then(|pairs| {
            IntegrationRequest::from_parts(
                pairs,
                json_prop.lower,
                json_prop.upper,
                json_prop.step_size,
                &json_prop.algorithm
            )
        })
        .map_err(|error| ManagerError::integration(&json_prop.name, error))?;
    log::debug!("loaded request '{}': {}", json_prop.name, request);
    Ok(Arc::new(request))
}


pub struct IntegrationRequestManager;


impl IntegrationRequestManager {
    pub fn new() -> Manager<Arc<IntegrationRequest>> {
        Manager::new(get_integration_request_from_json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::integration::quadraturerule::QuadratureRule;
    use crate::manager::manager::IManager;

    #[test]
    fn test_mapping_with_defaults() {
        let manager = IntegrationRequestManager::new();
        manager
            .insert_obj_from_json(json!({"name": "line", "polynomial": {"1": 1}}))
            .unwrap();

        let request = manager.get("line").unwrap();
        assert_eq!(request.bounds().lower(), 0.0);
        assert_eq!(request.bounds().upper(), 10.0);
        assert_eq!(request.bounds().step_size(), 1.0);
        assert_eq!(request.rule(), QuadratureRule::Trapezoid);
        assert_eq!(request.polynomial().to_string(), "f(x)=x");
    }

    #[test]
    fn test_literal_polynomial() {
        let manager = IntegrationRequestManager::new();
        manager
            .insert_obj_from_json(json!({
                "name": "parabola",
                "polynomial": "{2:1, 1:2, 0:-2}",
                "lower": 1,
                "upper": 50,
                "step_size": 0.1,
                "algorithm": "midpoint"
            }))
            .unwrap();

        let request = manager.get("parabola").unwrap();
        assert_eq!(request.rule(), QuadratureRule::Midpoint);
        assert_eq!(request.polynomial().evaluate(3.0).unwrap(), 13.0);
        assert_eq!(request.bounds().len(), 491);
    }

    #[test]
    fn test_fractional_mapping_key() {
        let manager = IntegrationRequestManager::new();
        manager
            .insert_obj_from_json(json!({"name": "root", "polynomial": {"0.5": 2, " 0 ": 1}}))
            .unwrap();
        assert!(manager.get("root").unwrap().polynomial().has_fractional_exponents());
    }

    #[test]
    fn test_invalid_entries_name_the_request() {
        let manager = IntegrationRequestManager::new();
        let cases = [
            (json!({"name": "a", "polynomial": {"x": 1}}), "exponent is not a number"),
            (json!({"name": "b", "polynomial": {}}), "polynomial has no terms"),
            (json!({"name": "c", "polynomial": "[1, 2]"}), "not a mapping"),
        ];
        for (json_value, expected_reason) in cases {
            let err = manager.insert_obj_from_json(json_value).unwrap_err();
            match err.integration_error() {
                Some(IntegrationError::MalformedInput { reason, .. }) => assert_eq!(reason, expected_reason),
                other => panic!("unexpected error {other:?}"),
            }
        }

        let err = manager
            .insert_obj_from_json(json!({"name": "d", "polynomial": {"2": 1}, "algorithm": "quadrature42"}))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "request 'd': algorithm 'quadrature42' not found, expected one of: midpoint, trapezoid, simpson"
        );

        let err = manager
            .insert_obj_from_json(json!({"name": "e", "polynomial": {"2": 1}, "lower": 4, "upper": 2}))
            .unwrap_err();
        assert!(matches!(err.integration_error(), Some(IntegrationError::InvalidBounds { .. })));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_wrong_field_type_is_a_parse_error() {
        let manager = IntegrationRequestManager::new();
        let result = manager.insert_obj_from_json(json!({"name": "a", "polynomial": 3}));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
