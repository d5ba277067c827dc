//! Policy definition request bodies.
//!
//! Two builders, structurally identical: access policies constrain *who*
//! may use an asset (business partner number match), usage policies
//! constrain *how* it may be used (a fixed terms-and-conditions match).

use crate::ns::{EDC_NS, ODRL_CONTEXT, TX_POLICY_CONTEXT};
use serde::Serialize;

/// Default ODRL action when the caller does not supply one.
pub const DEFAULT_ACTION: &str = "use";

/// Left operand of the access policy constraint.
const BPN_OPERAND: &str = "BusinessPartnerNumber";

/// Left operand of the usage policy constraint.
const USAGE_TERMS_OPERAND: &str = "https://factory-operator.com/terms/conditions";

/// Right operand of the usage policy constraint.
const USAGE_TERMS_VALUE: &str = "reproduce";

/// Request body for creating a policy definition on the connector's
/// management API.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyDefinitionRequest {
    #[serde(rename = "@context")]
    context: (&'static str, &'static str, VocabContext),
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub policy: PolicySet,
}

impl PolicyDefinitionRequest {
    /// Access policy: grants the default `"use"` action to the holder of
    /// an exactly matching business partner number.
    pub fn access(policy_id: &str, business_partner_number: &str) -> Self {
        Self::access_with_action(policy_id, business_partner_number, DEFAULT_ACTION)
    }

    /// Access policy with an explicit ODRL action name.
    pub fn access_with_action(
        policy_id: &str,
        business_partner_number: &str,
        action: &str,
    ) -> Self {
        Self::with_constraint(
            policy_id,
            action,
            Constraint::eq(BPN_OPERAND, business_partner_number),
        )
    }

    /// Usage policy: the constraint is fixed, an exact match against the
    /// `"reproduce"` term of the operator's conditions document.
    pub fn usage(policy_id: &str) -> Self {
        Self::usage_with_action(policy_id, DEFAULT_ACTION)
    }

    /// Usage policy with an explicit ODRL action name.
    pub fn usage_with_action(policy_id: &str, action: &str) -> Self {
        Self::with_constraint(
            policy_id,
            action,
            Constraint::eq(USAGE_TERMS_OPERAND, USAGE_TERMS_VALUE),
        )
    }

    fn with_constraint(policy_id: &str, action: &str, constraint: Constraint) -> Self {
        Self {
            context: (TX_POLICY_CONTEXT, ODRL_CONTEXT, VocabContext::edc()),
            kind: "PolicyDefinitionRequest",
            id: policy_id.to_string(),
            policy: PolicySet {
                kind: "Set",
                permission: vec![Permission {
                    action: action.to_string(),
                    constraint: vec![constraint],
                }],
            },
        }
    }
}

/// The `{"@vocab": ...}` entry of the policy `@context` array.
#[derive(Debug, Clone, Serialize)]
struct VocabContext {
    #[serde(rename = "@vocab")]
    vocab: &'static str,
}

impl VocabContext {
    fn edc() -> Self {
        Self { vocab: EDC_NS }
    }
}

/// ODRL policy set holding a single permission.
#[derive(Debug, Clone, Serialize)]
pub struct PolicySet {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub permission: Vec<Permission>,
}

/// A permitted action together with its constraints.
#[derive(Debug, Clone, Serialize)]
pub struct Permission {
    pub action: String,
    pub constraint: Vec<Constraint>,
}

/// An equality constraint on a single operand.
#[derive(Debug, Clone, Serialize)]
pub struct Constraint {
    #[serde(rename = "leftOperand")]
    pub left_operand: OperandValue,
    pub operator: &'static str,
    #[serde(rename = "rightOperand")]
    pub right_operand: String,
}

impl Constraint {
    fn eq(left: &str, right: &str) -> Self {
        Self {
            left_operand: OperandValue {
                value: left.to_string(),
            },
            operator: "eq",
            right_operand: right.to_string(),
        }
    }
}

/// A `{"@value": ...}` literal operand.
#[derive(Debug, Clone, Serialize)]
pub struct OperandValue {
    #[serde(rename = "@value")]
    pub value: String,
}
