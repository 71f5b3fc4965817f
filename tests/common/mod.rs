#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use spin_client::config::{Config, SpinConfig};
use spin_client::{HttpResponse, SpinError, Transport};
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://api.spin.test/v1";

pub fn create_test_config() -> Config {
    Config {
        spin: SpinConfig {
            api_login: "test_login".to_string(),
            api_password: "test_api_password".to_string(),
            base_url: BASE_URL.to_string(),
            home_url: "https://casino.test/".to_string(),
            cashier_url: "https://casino.test/cashier".to_string(),
        },
    }
}

/// Transport answering every call with the same canned reply and recording what was posted
#[derive(Clone)]
pub struct MockTransport {
    reply: Result<HttpResponse, String>,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockTransport {
    pub fn replying(body: Value) -> Self {
        Self::raw(200, &body.to_string())
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            calls: Arc::default(),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Posted bodies, parsed back into JSON
    pub fn bodies(&self) -> Vec<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn last_body(&self) -> Value {
        self.bodies().pop().expect("no request was posted")
    }

    pub fn last_url(&self) -> String {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|(url, _)| url.clone())
            .expect("no request was posted")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(&self, url: &str, body: String) -> spin_client::Result<HttpResponse> {
        let parsed: Value = serde_json::from_str(&body).expect("client posted invalid JSON");
        self.calls.lock().unwrap().push((url.to_string(), parsed));
        self.reply.clone().map_err(SpinError::Transport)
    }
}
