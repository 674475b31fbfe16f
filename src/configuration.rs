use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use serde::Deserialize;

use crate::integration::integrationrequest::IntegrationRequest;
use crate::integration::integrationrequestmanager::IntegrationRequestManager;
use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    requests: Vec<serde_json::Value>
}

/// Named integration requests loaded from a JSON document of the form
/// `{"requests": [{"name": ..., "polynomial": ..., ...}, ...]}`.
pub struct Configuration {
    integration_request_manager: Manager<Arc<IntegrationRequest>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            integration_request_manager: IntegrationRequestManager::new()
        }
    }

    pub fn integration_request_manager(&self) -> &Manager<Arc<IntegrationRequest>> {
        &self.integration_request_manager
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        self.integration_request_manager.insert_obj_from_json_vec(&json_prop.requests)?;
        log::debug!("configuration holds {} request(s)", self.integration_request_manager.len());
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}
