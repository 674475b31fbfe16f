use std::cell::{
    RefCell,
    RefMut
};
use std::collections::BTreeMap;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;

/// Name-keyed registry of objects built from JSON entries.
pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, BTreeMap<String, V>>;

    /// Builds one entry without registering it.
    fn named_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError>;

    /// A later entry with the same name replaces the earlier one.
    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let (name, v) = self.named_obj_from_json(json_value)?;
        self.map().insert(name, v);
        Ok(())
    }

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    /// Registered names in ascending order.
    fn names(&self) -> Vec<String> {
        self.map().keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.map().len()
    }

    fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    /// All or nothing: the registry is untouched unless every entry builds.
    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        let built = json_vec
            .iter()
            .map(|j| self.named_obj_from_json(j.clone()))
            .collect::<Result<BTreeMap<String, V>, ManagerError>>()?;
        self.map().extend(built);
        Ok(())
    }
}


pub struct Manager<V> {
    map_cell: RefCell<BTreeMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(BTreeMap::new()), get_obj_from_json }
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, BTreeMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn named_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        Ok((named_object.name().to_owned(), v))
    }
}
