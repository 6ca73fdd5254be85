use std::sync::Arc;

use serde::Deserialize;

use crate::function::basic::exp::Exp;
use crate::function::basic::log::Log;
use crate::function::basic::trigonometric::Trigonometric;
use crate::function::function::Function;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;

/// A source function as written in configuration, e.g.
/// `{"name": "ln", "type": "Log", "base": 2.718281828459045}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum FunctionDefinition {
    Sin,
    Cos,
    Tan,
    Exp,
    Log {
        base: f64
    }
}

impl FunctionDefinition {
    pub fn build(&self) -> Arc<dyn Function> {
        match *self {
            FunctionDefinition::Sin => Arc::new(Trigonometric::sin()),
            FunctionDefinition::Cos => Arc::new(Trigonometric::cos()),
            FunctionDefinition::Tan => Arc::new(Trigonometric::tan()),
            FunctionDefinition::Exp => Arc::new(Exp::new()),
            FunctionDefinition::Log { base } => Arc::new(Log::new(base))
        }
    }
}

fn get_function_from_json(json_value: serde_json::Value) -> Result<Arc<dyn Function>, ManagerError> {
    let definition: FunctionDefinition = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(definition.build())
}

pub struct FunctionManager;

impl FunctionManager {
    pub fn new() -> Manager<Arc<dyn Function>> {
        Manager::new(get_function_from_json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::manager::manager::IManager;

    #[test]
    fn builds_tagged_definitions() {
        let manager = FunctionManager::new();
        manager
            .insert_obj_from_json_vec(
                &[
                    json!({"name": "sin", "type": "Sin"}),
                    json!({"name": "log2", "type": "Log", "base": 2.0}),
                ],
                &(),
            )
            .unwrap();

        assert_eq!(manager.names(), vec!["log2".to_owned(), "sin".to_owned()]);
        assert!((manager.get("log2").unwrap().value(8.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_type_is_a_parse_error() {
        let manager = FunctionManager::new();
        let result = manager.insert_obj_from_json(json!({"name": "f", "type": "Sinh"}), &());
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
