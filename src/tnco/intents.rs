//! Request models for assembly intents.
//!
//! Assemblies are never created or mutated directly; every lifecycle change
//! is requested as an intent. Target fields (`assembly_id`/`assembly_name`)
//! are optional because either may identify the assembly.

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssemblyIntent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intended_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeAssemblyIntent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAssemblyIntent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAssemblyStateIntent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intended_state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealAssemblyIntent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broken_component_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broken_component_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broken_component_metric_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_intent_serializes_to_camel_case() {
        let intent = CreateAssemblyIntent {
            assembly_name: Some("base-a".to_string()),
            descriptor_name: Some("assembly::base::1.0".to_string()),
            intended_state: Some("Active".to_string()),
            properties: None,
        };
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            json!({
                "assemblyName": "base-a",
                "descriptorName": "assembly::base::1.0",
                "intendedState": "Active"
            })
        );
    }

    #[test]
    fn unset_target_fields_are_omitted() {
        let intent = DeleteAssemblyIntent {
            assembly_name: Some("base-a".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            json!({"assemblyName": "base-a"})
        );
    }

    #[test]
    fn heal_intent_carries_broken_component_fields() {
        let intent = HealAssemblyIntent {
            assembly_id: Some("123".to_string()),
            broken_component_name: Some("vnf-a".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            json!({"assemblyId": "123", "brokenComponentName": "vnf-a"})
        );
    }
}
