// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Dropbox API client
//!
//! Every call authenticates with the stored bearer token and builds its own
//! HTTP client, so nothing is held open between passes.

use super::http::{
    build_http_client, check_response, header_safe_json, DropboxEndpoints, HttpClientConfig,
};
use super::types::{FileMetadata, FullAccount, UploadArg};
use crate::error::{Result, SyncError};
use crate::storage::{RemoteStorage, UploadedFile};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

const API_ARG_HEADER: &str = "Dropbox-API-Arg";

pub struct DropboxClient {
    access_token: String,
    endpoints: DropboxEndpoints,
    http_config: HttpClientConfig,
}

impl DropboxClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_endpoints(access_token, DropboxEndpoints::default())
    }

    pub fn with_endpoints(access_token: impl Into<String>, endpoints: DropboxEndpoints) -> Self {
        Self {
            access_token: access_token.into(),
            endpoints,
            http_config: HttpClientConfig::default(),
        }
    }

    fn bearer(&self) -> Result<String> {
        if self.access_token.trim().is_empty() {
            return Err(SyncError::Auth(
                "No access token. Run 'dropsync auth' first.".to_string(),
            ));
        }
        Ok(format!("Bearer {}", self.access_token))
    }

    /// Upload a whole file in one request, replacing any file at `path`
    pub fn upload(&self, contents: Vec<u8>, path: &str) -> Result<FileMetadata> {
        let bearer = self.bearer()?;
        let arg = upload_arg_header(path)?;
        let url = format!("{}/2/files/upload", self.endpoints.content);

        let response = build_http_client(&self.http_config)?
            .post(&url)
            .header(AUTHORIZATION, bearer)
            .header(API_ARG_HEADER, arg)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(contents)
            .send()?;

        Ok(check_response(response)?.json()?)
    }

    /// Fetch the account the token belongs to
    pub fn get_current_account(&self) -> Result<FullAccount> {
        let bearer = self.bearer()?;
        let url = format!("{}/2/users/get_current_account", self.endpoints.api);

        let response = build_http_client(&self.http_config)?
            .post(&url)
            .header(AUTHORIZATION, bearer)
            .send()?;

        Ok(check_response(response)?.json()?)
    }
}

/// `Dropbox-API-Arg` value of an overwriting upload to `path`
pub fn upload_arg_header(path: &str) -> Result<String> {
    header_safe_json(&UploadArg::overwrite(path))
}

impl RemoteStorage for DropboxClient {
    fn name(&self) -> &'static str {
        "Dropbox"
    }

    fn upload(&self, contents: Vec<u8>, remote_path: &str) -> Result<UploadedFile> {
        let metadata = DropboxClient::upload(self, contents, remote_path)?;
        Ok(UploadedFile {
            path_display: metadata
                .path_display
                .unwrap_or_else(|| remote_path.to_string()),
            name: metadata.name,
            size: metadata.size,
        })
    }
}
