//! # edc-client
//!
//! Request-body builders and response renderers for EDC-style dataspace
//! connectors (Eclipse Dataspace Components control planes, e.g. Tractus-X).
//!
//! This crate covers the client-side paperwork of registering data with a
//! connector: asset descriptors, access and usage policy definitions, and
//! contract definitions binding the two together. It also renders tabular
//! console summaries of connector and digital-twin-registry list responses,
//! and provides submodel/blob document templates for the caller to fill.
//!
//! Transport is deliberately out of scope: callers perform the HTTP requests
//! themselves and hand responses in through [`ApiResponse`].

pub mod asset;
pub mod contract;
pub mod display;
pub mod error;
pub mod ns;
pub mod policy;
pub mod response;
pub mod templates;

pub use asset::CreateAssetRequest;
pub use contract::ContractDefinitionRequest;
pub use display::{
    print_assets, print_shell_descriptors, print_submodels, render_assets,
    render_shell_descriptors, render_submodels,
};
pub use error::{ConnectorError, ConnectorResult};
pub use policy::PolicyDefinitionRequest;
pub use response::ApiResponse;
pub use templates::{BlobTemplate, SubmodelTemplate};
