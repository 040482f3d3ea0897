//! Thin HTTP client for the outreach server

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Body of `POST /generate`
#[derive(Debug, Clone, Serialize)]
pub struct GeneratePayload {
    pub your_company: String,
    pub your_name: String,
    pub your_title: String,
    pub target_company: String,
    pub company_profile: String,
}

/// Where the company profile text comes from
#[derive(Debug, Clone)]
pub enum ProfileSource<'a> {
    Inline(&'a str),
    File(&'a Path),
}

impl ProfileSource<'_> {
    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            Self::Inline(text) => Ok((*text).to_string()),
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read profile from {}", path.display())),
        }
    }
}

/// Join a base URL and an endpoint path
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// A `/generate` reply, split into its success and error shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Email { body: String, filename: String },
    Failed { error: String, hint: Option<String> },
}

impl GenerateOutcome {
    pub fn from_reply(reply: &Value) -> Self {
        let field = |name: &str| reply.get(name).and_then(Value::as_str).map(str::to_string);

        if let (Some(body), Some(filename)) = (field("email_body_en"), field("filename")) {
            return Self::Email { body, filename };
        }

        Self::Failed {
            error: field("error").unwrap_or_else(|| "Unexpected response from server".to_string()),
            hint: field("hint"),
        }
    }
}

pub async fn get_json(client: &reqwest::Client, url: &str) -> anyhow::Result<Value> {
    debug!(url, "GET");
    let reply = client.get(url).send().await?.json::<Value>().await?;
    Ok(reply)
}

pub async fn is_healthy(client: &reqwest::Client, base_url: &str) -> anyhow::Result<bool> {
    let reply = get_json(client, &endpoint_url(base_url, "/healthz")).await?;
    Ok(reply.get("ok").and_then(Value::as_bool) == Some(true))
}

pub async fn generate(
    client: &reqwest::Client,
    base_url: &str,
    payload: &GeneratePayload,
) -> anyhow::Result<Value> {
    let url = endpoint_url(base_url, "/generate");
    debug!(%url, target = %payload.target_company, "POST");

    let response = client.post(&url).json(payload).send().await?;
    let status = response.status();

    if status.is_server_error() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("HTTP {status}: {}", body.trim());
    }

    let reply = response.json::<Value>().await?;

    if status.is_client_error() {
        let message = reply
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("request rejected");
        anyhow::bail!("HTTP {status}: {message}");
    }

    Ok(reply)
}
