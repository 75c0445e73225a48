use rrdns_domain::DomainError;
use serde::Deserialize;
use tracing::debug;

/// Marker that starts the payload of the rotation option.
pub const ROTATION_TOKEN_PREFIX: &str = "_rr_state=";

#[derive(Debug, Default, Deserialize)]
struct TokenPayload {
    #[serde(default)]
    ip: Vec<String>,
}

/// Decodes `_rr_state={"ip":[...]}` into the previous address order.
pub fn try_decode_token(raw: &str) -> Result<Vec<String>, DomainError> {
    let body = raw
        .strip_prefix(ROTATION_TOKEN_PREFIX)
        .ok_or_else(|| DomainError::InvalidRotationToken("missing prefix".to_string()))?;

    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str::<TokenPayload>(body)
        .map(|payload| payload.ip)
        .map_err(|e| DomainError::InvalidRotationToken(e.to_string()))
}

/// Lenient variant used on the request path: anything undecodable is the
/// same as having no previous order.
pub fn decode_token(raw: &str) -> Vec<String> {
    match try_decode_token(raw) {
        Ok(order) => order,
        Err(e) => {
            debug!(error = %e, "Ignoring rotation token");
            Vec::new()
        }
    }
}

pub fn encode_token(order: &[String]) -> String {
    format!(
        "{}{}",
        ROTATION_TOKEN_PREFIX,
        serde_json::json!({ "ip": order })
    )
}
