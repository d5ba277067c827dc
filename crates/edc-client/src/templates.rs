//! Document templates following the asset administration shell convention.
//!
//! These are skeletons for the caller to fill (`id_short`, `id`, and the
//! blob `value`) before submission. Every call builds a fresh owned value,
//! so mutating one template never affects another.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Skeleton of a submodel document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmodelTemplate {
    #[serde(rename = "idShort")]
    pub id_short: String,
    pub id: String,
    #[serde(rename = "semanticId")]
    pub semantic_id: SemanticId,
    #[serde(rename = "submodelElements")]
    pub submodel_elements: Vec<Value>,
    #[serde(rename = "modelType")]
    pub model_type: String,
}

impl SubmodelTemplate {
    /// Returns a fresh submodel skeleton with empty `idShort`/`id`.
    pub fn new() -> Self {
        Self {
            id_short: String::new(),
            id: String::new(),
            semantic_id: SemanticId::model_reference(
                "Submodel",
                "https://admin-shell.io/sinksubmodel",
            ),
            submodel_elements: Vec::new(),
            model_type: "Submodel".to_string(),
        }
    }
}

impl Default for SubmodelTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Skeleton of a blob submodel element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobTemplate {
    #[serde(rename = "idShort")]
    pub id_short: String,
    pub id: String,
    pub value: String,
    #[serde(rename = "semanticId")]
    pub semantic_id: SemanticId,
    #[serde(rename = "contentType")]
    pub content_type: String,
    #[serde(rename = "modelType")]
    pub model_type: String,
}

impl BlobTemplate {
    /// Returns a fresh blob skeleton with empty `idShort`/`id`/`value`.
    pub fn new() -> Self {
        Self {
            id_short: String::new(),
            id: String::new(),
            value: String::new(),
            semantic_id: SemanticId::model_reference("GlobalReference", "0173-1#02-AAM556#002"),
            content_type: "application/str".to_string(),
            model_type: "Blob".to_string(),
        }
    }
}

impl Default for BlobTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// A model reference with a single key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticId {
    #[serde(rename = "type")]
    pub reference_type: String,
    pub keys: Vec<ReferenceKey>,
}

impl SemanticId {
    fn model_reference(key_type: &str, key_value: &str) -> Self {
        Self {
            reference_type: "ModelReference".to_string(),
            keys: vec![ReferenceKey {
                key_type: key_type.to_string(),
                value: key_value.to_string(),
            }],
        }
    }
}

/// One key of a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submodel_template_shape() {
        let template = SubmodelTemplate::new();
        let value = serde_json::to_value(&template).unwrap();

        assert_eq!(
            value,
            json!({
                "idShort": "",
                "id": "",
                "semanticId": {
                    "type": "ModelReference",
                    "keys": [
                        { "type": "Submodel", "value": "https://admin-shell.io/sinksubmodel" }
                    ]
                },
                "submodelElements": [],
                "modelType": "Submodel"
            })
        );
    }

    #[test]
    fn test_blob_template_shape() {
        let template = BlobTemplate::new();
        let value = serde_json::to_value(&template).unwrap();

        assert_eq!(
            value,
            json!({
                "idShort": "",
                "id": "",
                "value": "",
                "semanticId": {
                    "type": "ModelReference",
                    "keys": [
                        { "type": "GlobalReference", "value": "0173-1#02-AAM556#002" }
                    ]
                },
                "contentType": "application/str",
                "modelType": "Blob"
            })
        );
    }

    #[test]
    fn test_templates_are_independent() {
        let mut first = SubmodelTemplate::new();
        let second = SubmodelTemplate::new();
        assert_eq!(first, second);

        first.id_short = "machineData".to_string();
        first.semantic_id.keys[0].value = "changed".to_string();

        assert_eq!(second.id_short, "");
        assert_eq!(
            second.semantic_id.keys[0].value,
            "https://admin-shell.io/sinksubmodel"
        );
    }

    #[test]
    fn test_blob_templates_are_independent() {
        let mut first = BlobTemplate::new();
        let second = BlobTemplate::new();
        assert_eq!(first, second);

        first.value = "payload".to_string();
        assert_eq!(second.value, "");
    }
}
