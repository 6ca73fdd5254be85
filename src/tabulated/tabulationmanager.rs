use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::function::function::Function;
use crate::manager::manager::Manager;
use crate::manager::manager::IManager;
use crate::manager::managererror::ManagerError;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::tabulator::tabulate;

#[derive(Deserialize)]
struct TabulationJsonProp {
    name: String,
    function: String,
    left_x: f64,
    right_x: f64,
    points_count: usize
}

/// Tabulations declared in configuration, resolved against a
/// registry of source functions.
pub struct TabulationManager {
    map_cell: RefCell<HashMap<String, Arc<ArrayTabulatedFunction>>>
}

impl TabulationManager {
    pub fn new() -> TabulationManager {
        TabulationManager { map_cell: RefCell::new(HashMap::new()) }
    }
}

impl Default for TabulationManager {
    fn default() -> Self {
        TabulationManager::new()
    }
}

impl IManager<Arc<ArrayTabulatedFunction>, Manager<Arc<dyn Function>>> for TabulationManager {
    fn map(&self) -> RefMut<'_, HashMap<String, Arc<ArrayTabulatedFunction>>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &Manager<Arc<dyn Function>>) -> Result<(), ManagerError> {
        let prop: TabulationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let function = supports.get(&prop.function)?;
        let tabulated = tabulate(function.as_ref(), prop.left_x, prop.right_x, prop.points_count)?;
        debug!("tabulated '{}' as '{}'", prop.function, prop.name);
        self.map().insert(prop.name, Arc::new(tabulated));
        Ok(())
    }
}
