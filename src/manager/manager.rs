use std::cell::{
    Ref,
    RefCell
};
use std::collections::HashMap;

use super::configerror::ConfigError;

/// Named objects built from JSON values.
///
/// Each JSON value is turned into a `(name, object)` pair by the function
/// given at construction; inserting a name twice keeps the later object.
pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<(String, V), ConfigError>
}

impl<V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<(String, V), ConfigError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }

    pub fn map(&self) -> Ref<'_, HashMap<String, V>> {
        self.map_cell.borrow()
    }

    pub fn get(&self, name: &str) -> Result<V, ConfigError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::map_elem_not_found(name))
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ConfigError> {
        let (name, obj) = (self.get_obj_from_json)(json_value)?;
        self.map_cell.borrow_mut().insert(name, obj);
        Ok(())
    }

    pub fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ConfigError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}
