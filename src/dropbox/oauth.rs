// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! OAuth2 authorization without a redirect URI
//!
//! The user opens the authorize URL, approves the app and pastes the code
//! Dropbox shows back into the CLI, which exchanges it for an access token.

use super::http::{build_http_client, DropboxEndpoints, HttpClientConfig};
use super::types::{AccessToken, OAuthErrorBody};
use crate::config::AppCredentials;
use crate::error::{Result, SyncError};

pub struct NoRedirectFlow {
    credentials: AppCredentials,
    endpoints: DropboxEndpoints,
    http_config: HttpClientConfig,
}

impl NoRedirectFlow {
    pub fn new(credentials: AppCredentials) -> Self {
        Self::with_endpoints(credentials, DropboxEndpoints::default())
    }

    pub fn with_endpoints(credentials: AppCredentials, endpoints: DropboxEndpoints) -> Self {
        Self {
            credentials,
            endpoints,
            http_config: HttpClientConfig::default(),
        }
    }

    /// URL the user opens to grant access
    pub fn start(&self) -> String {
        format!(
            "{}?response_type=code&client_id={}",
            self.endpoints.authorize,
            urlencoding::encode(&self.credentials.app_key)
        )
    }

    /// Exchange the code shown by Dropbox for an access token
    pub fn finish(&self, code: &str) -> Result<AccessToken> {
        let code = code.trim();
        if code.is_empty() {
            return Err(SyncError::Auth("Authorization code is empty".to_string()));
        }

        let url = format!("{}/oauth2/token", self.endpoints.api);
        let response = build_http_client(&self.http_config)?
            .post(&url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", self.credentials.app_key.as_str()),
                ("client_secret", self.credentials.app_secret.as_str()),
            ])
            .send()
            .map_err(|e| SyncError::Auth(format!("Token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = match serde_json::from_str::<OAuthErrorBody>(&body) {
                Ok(err) => match err.error_description {
                    Some(description) => format!("{}: {}", err.error, description),
                    None => err.error,
                },
                Err(_) => format!("HTTP {}", status),
            };
            return Err(SyncError::Auth(message));
        }

        let token: AccessToken = response
            .json()
            .map_err(|e| SyncError::Auth(format!("Unreadable token response: {}", e)))?;

        if token.access_token.is_empty() {
            return Err(SyncError::Auth("Dropbox returned an empty token".to_string()));
        }

        log::info!(
            "Authorized account {}",
            token.account_id.as_deref().unwrap_or("(unknown)")
        );

        Ok(token)
    }
}
