// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Dropbox API payloads

use serde::{Deserialize, Serialize};

/// Write mode for `files/upload`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    Overwrite,
}

/// `Dropbox-API-Arg` of `files/upload`
#[derive(Debug, Clone, Serialize)]
pub struct UploadArg<'a> {
    pub path: &'a str,
    pub mode: WriteMode,
    pub autorename: bool,
    pub mute: bool,
}

impl<'a> UploadArg<'a> {
    pub fn overwrite(path: &'a str) -> Self {
        Self {
            path,
            mode: WriteMode::Overwrite,
            autorename: false,
            mute: false,
        }
    }
}

/// Metadata returned for an uploaded file
#[derive(Debug, Clone, Deserialize)]
pub struct FileMetadata {
    pub name: String,
    #[serde(default)]
    pub path_display: Option<String>,
    #[serde(default)]
    pub size: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountName {
    pub display_name: String,
}

/// Result of `users/get_current_account`
#[derive(Debug, Clone, Deserialize)]
pub struct FullAccount {
    pub account_id: String,
    pub name: AccountName,
    #[serde(default)]
    pub email: Option<String>,
}

/// Result of the OAuth2 code exchange
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub account_id: Option<String>,
}

/// Error body of the API endpoints
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub error_summary: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub fn retry_after(&self) -> Option<u64> {
        self.error
            .as_ref()
            .and_then(|e| e.get("retry_after"))
            .and_then(|v| v.as_u64())
    }
}

/// Error body of the OAuth token endpoint
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OAuthErrorBody {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_arg_serialization() {
        let arg = serde_json::to_value(UploadArg::overwrite("/b.txt")).unwrap();
        assert_eq!(
            arg,
            serde_json::json!({
                "path": "/b.txt",
                "mode": "overwrite",
                "autorename": false,
                "mute": false
            })
        );
    }

    #[test]
    fn test_full_account_deserialization() {
        let json = r#"{
            "account_id": "dbid:AAH4f99T0taONIb-OurWxbNQ6ywGRopQngc",
            "name": {
                "given_name": "Franz",
                "surname": "Ferdinand",
                "familiar_name": "Franz",
                "display_name": "Franz Ferdinand (Personal)",
                "abbreviated_name": "FF"
            },
            "email": "franz@example.com",
            "email_verified": true,
            "disabled": false
        }"#;

        let account: FullAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.name.display_name, "Franz Ferdinand (Personal)");
        assert_eq!(account.email.as_deref(), Some("franz@example.com"));
    }

    #[test]
    fn test_rate_limit_retry_after_from_body() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"error_summary": "too_many_requests/..", "error": {"reason": {".tag": "too_many_requests"}, "retry_after": 15}}"#,
        )
        .unwrap();
        assert_eq!(body.retry_after(), Some(15));
    }
}
