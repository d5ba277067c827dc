//! Contract definition request bodies.

use crate::ns::EDC_NS;
use serde::Serialize;

/// Request body binding one access policy and one usage policy to the
/// assets matched by the selector.
#[derive(Debug, Clone, Serialize)]
pub struct ContractDefinitionRequest {
    #[serde(rename = "@context")]
    context: VocabContext,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "accessPolicyId")]
    pub access_policy_id: String,
    #[serde(rename = "contractPolicyId")]
    pub contract_policy_id: String,
    #[serde(rename = "assetsSelector")]
    pub assets_selector: Vec<Criterion>,
}

impl ContractDefinitionRequest {
    /// Builds a contract definition selecting a single asset by exact id
    /// equality.
    ///
    /// The connector does not check at creation time that policies with
    /// the referenced ids exist; the builder mirrors that and performs no
    /// existence checks of its own.
    pub fn new(
        asset_id: &str,
        contract_id: &str,
        access_policy_id: &str,
        usage_policy_id: &str,
    ) -> Self {
        Self {
            context: VocabContext { vocab: EDC_NS },
            kind: "ContractDefinitionRequestDto",
            id: contract_id.to_string(),
            access_policy_id: access_policy_id.to_string(),
            contract_policy_id: usage_policy_id.to_string(),
            assets_selector: vec![Criterion::asset_id_equals(asset_id)],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct VocabContext {
    #[serde(rename = "@vocab")]
    vocab: &'static str,
}

/// A single selector criterion of the contract definition.
#[derive(Debug, Clone, Serialize)]
pub struct Criterion {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "operandLeft")]
    pub operand_left: String,
    pub operator: &'static str,
    #[serde(rename = "operandRight")]
    pub operand_right: String,
}

impl Criterion {
    fn asset_id_equals(asset_id: &str) -> Self {
        Self {
            kind: "CriterionDto",
            operand_left: format!("{}id", EDC_NS),
            operator: "=",
            operand_right: asset_id.to_string(),
        }
    }
}
