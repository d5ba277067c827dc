//! Console renderers for connector and registry list responses.
//!
//! Each renderer takes an already-fetched [`ApiResponse`] and produces a
//! fixed-width text table, one row per entry, in the order the response
//! delivers them. The first line is always the response representation;
//! on a non-200 status that line is all there is and the call still
//! succeeds. The output is informational, not machine-parseable.

use crate::error::{ConnectorError, ConnectorResult};
use crate::response::ApiResponse;
use serde_json::Value;
use tracing::debug;

/// Dublin Core type key as it appears expanded in asset list responses.
const DCT_TYPE_KEY: &str = "http://purl.org/dc/terms/type";

/// Maximum characters of an identifier before it is cut off.
const ID_CUTOFF: usize = 81;

/// Renders the asset list returned by the connector's asset query
/// endpoint (a flat JSON array of asset records).
pub fn render_assets(response: &ApiResponse) -> ConnectorResult<String> {
    let mut out = format!("{}\n", response);
    if !response.is_success() {
        debug!(status = %response.status(), "response not OK, skipping asset table");
        return Ok(out);
    }

    let body: Value = response.json()?;
    let entries = body.as_array().ok_or_else(|| {
        ConnectorError::InvalidResponse("expected a top-level asset array".to_string())
    })?;

    out.push_str(&format!(
        "{:<8} {:<42} {:<28} {:<81}\n",
        "Index", "id", "assetType", "baseUrl"
    ));
    out.push_str(&separator(&[8, 42, 28, 81]));

    for (idx, entry) in entries.iter().enumerate() {
        let id = str_field(entry, "@id", "@id")?;
        let type_uri = entry
            .get("properties")
            .and_then(|p| p.get(DCT_TYPE_KEY))
            .and_then(|t| t.get("@id"))
            .and_then(Value::as_str)
            .ok_or(ConnectorError::MissingField(
                "properties['http://purl.org/dc/terms/type']['@id']",
            ))?;
        let base_url = entry
            .get("dataAddress")
            .and_then(|a| a.get("baseUrl"))
            .and_then(Value::as_str)
            .ok_or(ConnectorError::MissingField("dataAddress['baseUrl']"))?;

        out.push_str(&format!(
            "{:<8} {:<42} {:<28} {:<81}\n",
            format!("{}:", idx),
            truncate(id, ID_CUTOFF),
            local_name(type_uri),
            base_url
        ));
    }

    Ok(out)
}

/// Renders the shell descriptor list returned by a digital twin registry
/// (an envelope with a `result` array). Descriptors without a
/// `globalAssetId` are skipped.
pub fn render_shell_descriptors(response: &ApiResponse) -> ConnectorResult<String> {
    let mut out = format!("{}\n", response);
    if !response.is_success() {
        debug!(status = %response.status(), "response not OK, skipping descriptor table");
        return Ok(out);
    }

    let body: Value = response.json()?;
    let entries = result_list(&body)?;

    out.push_str(&format!(
        "{:<8} {:<42} {:<42}\n",
        "Index", "globalAssetId", "idShort"
    ));
    out.push_str(&separator(&[8, 42, 42]));

    for (idx, entry) in entries.iter().enumerate() {
        let Some(global_asset_id) = entry.get("globalAssetId").and_then(Value::as_str) else {
            continue;
        };
        let id_short = str_field(entry, "idShort", "idShort")?;

        out.push_str(&format!(
            "{:<8} {:<42} {:<42}\n",
            format!("{}:", idx),
            global_asset_id,
            id_short
        ));
    }

    Ok(out)
}

/// Renders the submodel list returned by a submodel repository (an
/// envelope with a `result` array).
pub fn render_submodels(response: &ApiResponse) -> ConnectorResult<String> {
    let mut out = format!("{}\n", response);
    if !response.is_success() {
        debug!(status = %response.status(), "response not OK, skipping submodel table");
        return Ok(out);
    }

    let body: Value = response.json()?;
    let entries = result_list(&body)?;

    out.push_str(&format!("{:<8} {:<81} {:<42}\n", "Index", "id", "idShort"));
    out.push_str(&separator(&[8, 81, 42]));

    for (idx, entry) in entries.iter().enumerate() {
        let id = str_field(entry, "id", "id")?;
        let id_short = str_field(entry, "idShort", "idShort")?;

        out.push_str(&format!(
            "{:<8} {:<81} {:<42}\n",
            format!("{}:", idx),
            truncate(id, ID_CUTOFF),
            id_short
        ));
    }

    Ok(out)
}

/// Prints the asset table to stdout.
pub fn print_assets(response: &ApiResponse) -> ConnectorResult<()> {
    print!("{}", render_assets(response)?);
    Ok(())
}

/// Prints the shell descriptor table to stdout.
pub fn print_shell_descriptors(response: &ApiResponse) -> ConnectorResult<()> {
    print!("{}", render_shell_descriptors(response)?);
    Ok(())
}

/// Prints the submodel table to stdout.
pub fn print_submodels(response: &ApiResponse) -> ConnectorResult<()> {
    print!("{}", render_submodels(response)?);
    Ok(())
}

/// The `result` list of an envelope response.
fn result_list(body: &Value) -> ConnectorResult<&Vec<Value>> {
    body.get("result")
        .and_then(Value::as_array)
        .ok_or(ConnectorError::MissingField("result"))
}

/// A required string field of a response entry.
fn str_field<'a>(entry: &'a Value, key: &str, name: &'static str) -> ConnectorResult<&'a str> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .ok_or(ConnectorError::MissingField(name))
}

/// Header separator: one dash run per column, space separated.
fn separator(widths: &[usize]) -> String {
    let mut line = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join(" ");
    line.push('\n');
    line
}

/// The display value of a type URI: the segment after the final `/` and
/// the final `#`, e.g. `https://w3id.org/catenax/taxonomy#Submodel`
/// becomes `Submodel`.
fn local_name(uri: &str) -> &str {
    let after_slash = uri.rsplit('/').next().unwrap_or(uri);
    after_slash.rsplit('#').next().unwrap_or(after_slash)
}

/// Cuts a string off after `max` characters, respecting char boundaries.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
