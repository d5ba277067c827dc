//! Asset registration request bodies.

use crate::ns::{CX_COMMON_NS, CX_TAXO_NS, DCT_NS, EDC_NS};
use serde::Serialize;

/// Request body for creating (or editing) an asset on the connector's
/// management API.
///
/// The asset points the connector at a backend data source behind
/// `baseUrl`; the connector proxies consumer requests to it, forwarding
/// query parameters and sub-paths but not the HTTP method, and attaching
/// the configured `Authorization` header on the way in.
///
/// No validation is performed on any input. Malformed URLs or empty
/// identifiers are passed through unchanged; the caller is responsible
/// for correctness.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAssetRequest {
    #[serde(rename = "@context")]
    context: AssetContext,
    #[serde(rename = "@id")]
    pub id: String,
    pub properties: AssetProperties,
    #[serde(rename = "privateProperties")]
    private_properties: EmptyObject,
    #[serde(rename = "dataAddress")]
    pub data_address: DataAddress,
}

impl CreateAssetRequest {
    /// Builds the registration body for an asset proxied through the
    /// connector.
    ///
    /// * `asset_id` - id under which the connector registers the asset
    /// * `asset_type` - semantic type per the Catena-X taxonomy, e.g.
    ///   `Submodel`, `DigitalTwinRegistry`, `Asset`
    /// * `target_url` - path to the registered data object
    /// * `proxy_auth_header` - pre-formatted header value (e.g. `"Basic "`
    ///   plus a base64 credential) the connector uses toward the backend
    pub fn new(asset_id: &str, asset_type: &str, target_url: &str, proxy_auth_header: &str) -> Self {
        Self {
            context: AssetContext::default(),
            id: asset_id.to_string(),
            properties: AssetProperties {
                dct_type: TypeReference {
                    id: format!("cx-taxo:{}", asset_type),
                },
                version: "3.0",
            },
            private_properties: EmptyObject {},
            data_address: DataAddress::http_proxy(target_url, proxy_auth_header),
        }
    }
}

/// Fixed `@context` prefixes of the asset request.
#[derive(Debug, Clone, Serialize)]
struct AssetContext {
    edc: &'static str,
    #[serde(rename = "cx-common")]
    cx_common: &'static str,
    #[serde(rename = "cx-taxo")]
    cx_taxo: &'static str,
    dct: &'static str,
}

impl Default for AssetContext {
    fn default() -> Self {
        Self {
            edc: EDC_NS,
            cx_common: CX_COMMON_NS,
            cx_taxo: CX_TAXO_NS,
            dct: DCT_NS,
        }
    }
}

/// Public properties of the asset.
#[derive(Debug, Clone, Serialize)]
pub struct AssetProperties {
    #[serde(rename = "dct:type")]
    pub dct_type: TypeReference,
    #[serde(rename = "cx-common:version")]
    version: &'static str,
}

/// A `{"@id": ...}` reference, used for the semantic asset type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeReference {
    #[serde(rename = "@id")]
    pub id: String,
}

/// Serializes as `{}`. The connector requires the key to be present even
/// when no private properties are set.
#[derive(Debug, Clone, Serialize)]
struct EmptyObject {}

/// `HttpData` address record with the proxy behavior flags the connector
/// expects as string literals.
#[derive(Debug, Clone, Serialize)]
pub struct DataAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "type")]
    address_type: &'static str,
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "proxyMethod")]
    proxy_method: &'static str,
    #[serde(rename = "proxyQueryParams")]
    proxy_query_params: &'static str,
    #[serde(rename = "proxyPath")]
    proxy_path: &'static str,
    #[serde(rename = "header:Authorization")]
    pub authorization: String,
}

impl DataAddress {
    fn http_proxy(base_url: &str, authorization: &str) -> Self {
        Self {
            kind: "DataAddress",
            address_type: "HttpData",
            base_url: base_url.to_string(),
            proxy_method: "false",
            proxy_query_params: "true",
            proxy_path: "true",
            authorization: authorization.to_string(),
        }
    }
}
