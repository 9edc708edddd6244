//! Sui JSON-RPC read adapter for fetching profile objects

use async_trait::async_trait;
use blucky_domain::{LinkRecord, Profile, ProfileReader, StoreError};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

/// Profile reader backed by a Sui fullnode's JSON-RPC API
pub struct SuiRpcReader {
    client: Client,
    rpc_url: String,
}

impl SuiRpcReader {
    pub fn new(rpc_url: String, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, rpc_url })
    }

    /// Reader with a 30 second request timeout
    pub fn with_url(rpc_url: String) -> Result<Self, StoreError> {
        Self::new(rpc_url, Duration::from_secs(30))
    }

    async fn get_object(&self, object_id: &str) -> Result<Value, StoreError> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "sui_getObject",
            "params": [object_id, { "showContent": true, "showOwner": true }],
        });

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rpc(format!("HTTP {}: {}", status, body)));
        }

        let rpc: RpcResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Rpc(e.to_string()))?;

        if let Some(error) = rpc.error {
            return Err(StoreError::Rpc(format!("{} ({})", error.message, error.code)));
        }

        let result = rpc
            .result
            .ok_or_else(|| StoreError::Rpc("Response has no result".to_string()))?;

        if result.get("error").is_some_and(|e| !e.is_null()) {
            return Err(StoreError::NotFound(object_id.to_string()));
        }

        result
            .get("data")
            .cloned()
            .filter(|d| !d.is_null())
            .ok_or_else(|| StoreError::NotFound(object_id.to_string()))
    }
}

#[async_trait]
impl ProfileReader for SuiRpcReader {
    async fn fetch_profile(&self, object_id: &str) -> Result<Profile, StoreError> {
        tracing::debug!(object_id = %object_id, rpc_url = %self.rpc_url, "Fetching profile");

        let data = self.get_object(object_id).await?;
        let profile = parse_profile(object_id, &data)?;

        tracing::info!(
            object_id = %object_id,
            links = profile.links.len(),
            "Fetched profile"
        );

        Ok(profile)
    }
}

/// Decode the `data` section of a `sui_getObject` response into a profile
pub fn parse_profile(object_id: &str, data: &Value) -> Result<Profile, StoreError> {
    let fields = data
        .pointer("/content/fields")
        .filter(|f| f.is_object())
        .ok_or_else(|| StoreError::InvalidProfile(object_id.to_string()))?;

    let owner = match data.get("owner") {
        Some(Value::Object(map)) => map
            .get("AddressOwner")
            .and_then(Value::as_str)
            .map(str::to_string),
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    };

    let theme = match fields.get("theme") {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(1),
        Some(Value::String(s)) => s.parse().unwrap_or(1),
        _ => 1,
    };

    let links: Vec<LinkRecord> = fields
        .get("links")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(position, item)| {
                    let link = item.get("fields").unwrap_or(item);
                    LinkRecord::new(
                        decode_text(link.get("label")),
                        decode_text(link.get("url")),
                        position,
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(Profile {
        object_id: data
            .get("objectId")
            .and_then(Value::as_str)
            .unwrap_or(object_id)
            .to_string(),
        owner,
        name: decode_text(fields.get("name")),
        bio: decode_text(fields.get("bio")),
        avatar_cid: decode_text(fields.get("avatar_cid")),
        theme,
        links,
    })
}

/// Move `vector<u8>` fields arrive as number arrays; `String` fields as text
fn decode_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => {
            let bytes: Vec<u8> = items
                .iter()
                .filter_map(Value::as_u64)
                .filter_map(|b| u8::try_from(b).ok())
                .collect();
            String::from_utf8_lossy(&bytes).into_owned()
        }
        _ => String::new(),
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn bytes(s: &str) -> Value {
        json!(s.as_bytes())
    }

    #[tokio::test]
    async fn test_fetch_profile_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "method": "sui_getObject",
                "params": ["0xprofile"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "data": {
                        "objectId": "0xprofile",
                        "owner": { "AddressOwner": "0xowner" },
                        "content": {
                            "dataType": "moveObject",
                            "fields": {
                                "name": bytes("Alice"),
                                "bio": bytes("Painter"),
                                "avatar_cid": bytes("creative"),
                                "theme": "4",
                                "links": [
                                    { "type": "Link", "fields": { "label": "Follow me", "url": "https://instagram.com/alice" } },
                                    { "label": bytes("Shop"), "url": bytes("https://etsy.com/shop/alice") }
                                ]
                            }
                        }
                    }
                }
            })))
            .mount(&mock_server)
            .await;

        let reader = SuiRpcReader::with_url(mock_server.uri()).unwrap();
        let profile = reader.fetch_profile("0xprofile").await.unwrap();

        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.bio, "Painter");
        assert_eq!(profile.avatar_cid, "creative");
        assert_eq!(profile.theme, 4);
        assert_eq!(profile.owner.as_deref(), Some("0xowner"));
        assert_eq!(profile.links.len(), 2);
        assert_eq!(profile.links[0].label, "Follow me");
        assert_eq!(profile.links[1].url, "https://etsy.com/shop/alice");
        assert_eq!(profile.links[1].position, 1);
    }

    #[tokio::test]
    async fn test_fetch_profile_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": { "error": { "code": "notExists", "object_id": "0xmissing" } }
            })))
            .mount(&mock_server)
            .await;

        let reader = SuiRpcReader::with_url(mock_server.uri()).unwrap();
        let result = reader.fetch_profile("0xmissing").await;

        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_fetch_non_profile_object() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": { "data": { "objectId": "0xcoin", "content": { "dataType": "package" } } }
            })))
            .mount(&mock_server)
            .await;

        let reader = SuiRpcReader::with_url(mock_server.uri()).unwrap();
        let result = reader.fetch_profile("0xcoin").await;

        assert!(matches!(result, Err(StoreError::InvalidProfile(_))));
    }

    #[tokio::test]
    async fn test_rpc_error_and_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "params": ["0xbad"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": -32602, "message": "Invalid params" }
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "params": ["0xdown"] })))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let reader = SuiRpcReader::with_url(mock_server.uri()).unwrap();

        assert!(matches!(
            reader.fetch_profile("0xbad").await,
            Err(StoreError::Rpc(_))
        ));
        assert!(matches!(
            reader.fetch_profile("0xdown").await,
            Err(StoreError::Rpc(_))
        ));
    }

    #[test]
    fn test_parse_profile_defaults() {
        let data = json!({ "content": { "fields": {} } });
        let profile = parse_profile("0xempty", &data).unwrap();

        assert_eq!(profile.object_id, "0xempty");
        assert_eq!(profile.name, "");
        assert_eq!(profile.theme, 1);
        assert!(profile.links.is_empty());
        assert!(profile.owner.is_none());
    }
}
