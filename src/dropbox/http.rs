// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! HTTP plumbing shared by the Dropbox API and OAuth calls

use super::types::ApiErrorBody;
use crate::error::{Result, SyncError};
use reqwest::blocking::Response;
use reqwest::header::RETRY_AFTER;
use serde::Serialize;

const DEFAULT_API_BASE: &str = "https://api.dropboxapi.com";
const DEFAULT_CONTENT_BASE: &str = "https://content.dropboxapi.com";
const DEFAULT_AUTHORIZE_URL: &str = "https://www.dropbox.com/oauth2/authorize";

/// Base URLs of the Dropbox services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropboxEndpoints {
    /// RPC endpoints and the OAuth token endpoint
    pub api: String,
    /// Content upload endpoints
    pub content: String,
    /// Page the user opens to grant access
    pub authorize: String,
}

impl Default for DropboxEndpoints {
    fn default() -> Self {
        Self {
            api: DEFAULT_API_BASE.to_string(),
            content: DEFAULT_CONTENT_BASE.to_string(),
            authorize: DEFAULT_AUTHORIZE_URL.to_string(),
        }
    }
}

impl DropboxEndpoints {
    /// Route every service to one host (mock servers, proxies)
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            api: base.to_string(),
            content: base.to_string(),
            authorize: format!("{}/oauth2/authorize", base),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            // Single uploads go up to 150 MiB
            timeout_secs: 300,
            user_agent: format!("dropsync/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Build a configured HTTP client
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::blocking::Client> {
    use std::time::Duration;

    Ok(reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(&config.user_agent)
        .build()?)
}

/// Map a non-success Dropbox response to an error
pub(crate) fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after_header = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    let body = response.text().unwrap_or_default();
    let parsed: Option<ApiErrorBody> = serde_json::from_str(&body).ok();
    let summary = parsed
        .as_ref()
        .and_then(|b| b.error_summary.clone())
        .unwrap_or_else(|| body.trim().to_string());

    Err(match status.as_u16() {
        401 => SyncError::Auth(if summary.is_empty() {
            "access token rejected".to_string()
        } else {
            summary
        }),
        429 => SyncError::RateLimited {
            retry_after_secs: retry_after_header
                .or_else(|| parsed.and_then(|b| b.retry_after()))
                .unwrap_or(0),
        },
        code => SyncError::Api {
            status: code,
            summary,
        },
    })
}

/// Serialize JSON for an HTTP header, escaping everything outside printable ASCII
///
/// Dropbox reads `Dropbox-API-Arg` as ASCII; other characters must arrive as `\uXXXX`.
pub fn header_safe_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let raw = serde_json::to_string(value)?;
    let mut out = String::with_capacity(raw.len());
    let mut units = [0u16; 2];

    for c in raw.chars() {
        if (' '..='~').contains(&c) {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_safe_json_ascii_untouched() {
        let value = json!({"path": "/a b.txt"});
        assert_eq!(header_safe_json(&value).unwrap(), r#"{"path":"/a b.txt"}"#);
    }

    #[test]
    fn test_header_safe_json_escapes_unicode() {
        let value = json!({"path": "/Загрузка.txt"});
        let header = header_safe_json(&value).unwrap();
        assert!(header.is_ascii());
        assert!(header.contains("\\u0417"));
        let back: serde_json::Value = serde_json::from_str(&header).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_header_safe_json_surrogate_pairs() {
        let value = json!({"path": "/😀.png"});
        let header = header_safe_json(&value).unwrap();
        assert!(header.contains("\\ud83d\\ude00"));
        let back: serde_json::Value = serde_json::from_str(&header).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_endpoints_with_base() {
        let endpoints = DropboxEndpoints::with_base("http://127.0.0.1:9000/");
        assert_eq!(endpoints.api, "http://127.0.0.1:9000");
        assert_eq!(endpoints.content, "http://127.0.0.1:9000");
        assert_eq!(endpoints.authorize, "http://127.0.0.1:9000/oauth2/authorize");
    }
}
