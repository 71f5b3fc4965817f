use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outgoing body: the API credentials merged beside the tagged request fields
#[derive(Serialize)]
pub struct ApiRequest<'a, T> {
    pub api_login: &'a str,
    pub api_password: &'a str,
    #[serde(flatten)]
    pub request: &'a T,
}

/*
{"error":0,"response":"https://games.example.com/launch/abc","session_id":"c0ffee"}
{"error":5,"message":"bad user"}
*/
/// Envelope every call answers with; `error == 0` is the only success signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub error: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.error == 0
    }
}
