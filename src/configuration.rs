use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::info;
use serde::Deserialize;

use crate::function::function::Function;
use crate::function::functionmanager::FunctionManager;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::ManagerError;
use crate::tabulated::tabulationmanager::TabulationManager;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    function: Vec<serde_json::Value>,
    #[serde(default)]
    tabulation: Vec<serde_json::Value>
}

/// Named source functions plus the tabulations built from them.
pub struct Configuration {
    function_manager: Manager<Arc<dyn Function>>,
    tabulation_manager: TabulationManager
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            function_manager: FunctionManager::new(),
            tabulation_manager: TabulationManager::new()
        }
    }

    pub fn function_manager(&self) -> &Manager<Arc<dyn Function>> {
        &self.function_manager
    }

    pub fn tabulation_manager(&self) -> &TabulationManager {
        &self.tabulation_manager
    }

    pub fn from_reader(&self, file_path: &Path) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        info!("loading configuration from {}", file_path.display());
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    // 先載入函數，tabulation 才能以名稱找到來源函數
    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        self.function_manager.insert_obj_from_json_vec(&json_prop.function, &())?;
        self.tabulation_manager.insert_obj_from_json_vec(&json_prop.tabulation, &self.function_manager)?;
        info!("{} functions, {} tabulations configured",
              self.function_manager.names().len(),
              self.tabulation_manager.names().len());
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
