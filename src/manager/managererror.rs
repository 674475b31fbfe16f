use serde::Deserialize;
use thiserror::Error;

use crate::integration::integrationerror::IntegrationError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("request '{name}': {source}")]
    RequestError {
        name: String,
        #[source]
        source: IntegrationError
    }
}

impl ManagerError {
    pub fn from_json_or_json_parse_error <T> (json_value: serde_json::Value) -> Result<T, Self>
        where T : for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }

    pub fn integration(name: &str, source: IntegrationError) -> ManagerError {
        ManagerError::RequestError {
            name: name.to_owned(),
            source
        }
    }

    /// The underlying integration error, if this wraps one.
    pub fn integration_error(&self) -> Option<&IntegrationError> {
        match self {
            ManagerError::RequestError { source, .. } => Some(source),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ManagerError::map_elem_not_found("cubic").to_string(), "key 'cubic' not found");

        let err = ManagerError::integration(
            "cubic",
            IntegrationError::UnknownAlgorithm("romberg".to_owned())
        );
        assert_eq!(
            err.to_string(),
            "request 'cubic': algorithm 'romberg' not found, expected one of: midpoint, trapezoid, simpson"
        );
        assert!(err.integration_error().is_some());
    }
}
