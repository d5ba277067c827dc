//! End-to-end registration paperwork for a single asset: asset body,
//! both policies, and the contract definition binding them, plus the
//! console rendering of the resulting asset list.

use edc_client::{
    render_assets, ApiResponse, ContractDefinitionRequest, CreateAssetRequest,
    PolicyDefinitionRequest,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[test]
fn registration_bodies_reference_each_other() {
    let asset = CreateAssetRequest::new(
        "machine-data",
        "Submodel",
        "https://factory.example.com/api/data",
        "Basic b3BlcmF0b3I6c2VjcmV0",
    );
    let access = PolicyDefinitionRequest::access("machine-data-access", "BPNL0000000001AB");
    let usage = PolicyDefinitionRequest::usage("machine-data-usage");
    let contract = ContractDefinitionRequest::new(
        "machine-data",
        "machine-data-contract",
        "machine-data-access",
        "machine-data-usage",
    );

    let asset = serde_json::to_value(&asset).unwrap();
    let access = serde_json::to_value(&access).unwrap();
    let usage = serde_json::to_value(&usage).unwrap();
    let contract = serde_json::to_value(&contract).unwrap();

    // The contract selects exactly the registered asset and names both
    // policies by the ids they were created under.
    assert_eq!(contract["assetsSelector"][0]["operandRight"], asset["@id"]);
    assert_eq!(contract["accessPolicyId"], access["@id"]);
    assert_eq!(contract["contractPolicyId"], usage["@id"]);

    // Every body declares the @type the management API dispatches on.
    assert_eq!(access["@type"], "PolicyDefinitionRequest");
    assert_eq!(usage["@type"], "PolicyDefinitionRequest");
    assert_eq!(contract["@type"], "ContractDefinitionRequestDto");
}

#[test]
fn asset_list_response_renders_registered_asset() {
    // The connector echoes assets back with the dct:type key expanded to
    // its full URI; the table shows the local name of the taxonomy term.
    let listed = json!([{
        "@id": "machine-data",
        "properties": {
            "http://purl.org/dc/terms/type": {
                "@id": "https://w3id.org/catenax/taxonomy#Submodel"
            }
        },
        "dataAddress": { "baseUrl": "https://factory.example.com/api/data" }
    }]);
    let response = ApiResponse::new(StatusCode::OK, listed.to_string());

    let table = render_assets(&response).unwrap();
    let row: Vec<&str> = table.lines().last().unwrap().split_whitespace().collect();
    assert_eq!(
        row,
        vec![
            "0:",
            "machine-data",
            "Submodel",
            "https://factory.example.com/api/data"
        ]
    );
}

#[tokio::test]
async fn from_http_preserves_status_and_body() {
    let raw = http::Response::builder()
        .status(200)
        .body(r#"{"result": [{"id": "urn:uuid:sub-1", "idShort": "temperature"}]}"#.to_string())
        .unwrap();
    let response = ApiResponse::from_http(reqwest::Response::from(raw))
        .await
        .unwrap();

    assert!(response.is_success());
    let body: Value = response.json().unwrap();
    assert_eq!(body["result"][0]["idShort"], "temperature");
}
