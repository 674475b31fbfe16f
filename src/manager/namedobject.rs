use serde::Deserialize;

/// Just the `name` field of a registry entry; every other field is ignored.
#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
