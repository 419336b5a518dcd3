use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

use crate::error::{Error, Result};
use crate::utils::build_query_string;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        eprintln!("{}", msg);
    }
}

/// HTTP client bound to one API base URL and token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("plans/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL including the query string.
    pub fn url_for(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let url = format!("{}{}", self.base_url, endpoint);
        if params.is_empty() {
            url
        } else {
            format!("{}?{}", url, build_query_string(params))
        }
    }

    /// GET `endpoint` and decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        self.log_request("GET", endpoint, params);
        tracing::debug!(endpoint, ?params, "API Request");

        let url = format!("{}{}", self.base_url, endpoint);
        let mut req = self.client.get(&url);
        if !self.token.is_empty() {
            req = req.bearer_auth(&self.token);
        }
        if !params.is_empty() {
            req = req.query(params);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "API Response");

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        log_output(format!(
            "Response:\n{}",
            Paint::new(format!("HTTP {}", status.as_u16())).rgb(100, 100, 100)
        ));
        Ok(serde_json::from_str(&body)?)
    }

    // Prints the request as an equivalent curl command line.
    fn log_request(&self, method: &str, endpoint: &str, params: &[(String, String)]) {
        let url_for_log = self.url_for(endpoint, params);

        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(&url_for_log).fg(yansi::Color::Cyan)));

        if !self.token.is_empty() {
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Authorization: Bearer ${API_TOKEN}'").fg(yansi::Color::Magenta)
            ));
        }
        log_output(format!("Request:\n{}", parts.join(" ")));
    }
}

/// Pull a human readable message out of an error body.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(v) => v
            .get("error")
            .and_then(|e| e.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| body.trim().to_string()),
        Err(_) => body.trim().to_string(),
    }
}
