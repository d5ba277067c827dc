//! JSON-LD namespace and context constants used in connector request bodies.
//!
//! These are fixed vocabulary identifiers of the target connector API and
//! must match it byte for byte.

/// EDC management API vocabulary.
pub const EDC_NS: &str = "https://w3id.org/edc/v0.0.1/ns/";

/// Catena-X common ontology.
pub const CX_COMMON_NS: &str = "https://w3id.org/catenax/ontology/common#";

/// Catena-X taxonomy (asset type identifiers).
pub const CX_TAXO_NS: &str = "https://w3id.org/catenax/taxonomy#";

/// Dublin Core terms.
pub const DCT_NS: &str = "http://purl.org/dc/terms/";

/// Tractus-X policy context entry.
pub const TX_POLICY_CONTEXT: &str = "https://w3id.org/tractusx/policy/v1.0.0";

/// ODRL context entry.
pub const ODRL_CONTEXT: &str = "http://www.w3.org/ns/odrl.jsonld";
