// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Dropbox API access
//!
//! Only what the uploader needs: single-request uploads, the current
//! account, and the OAuth2 code exchange.

pub mod client;
pub mod http;
pub mod oauth;
pub mod types;

pub use client::DropboxClient;
pub use http::{build_http_client, header_safe_json, DropboxEndpoints, HttpClientConfig};
pub use oauth::NoRedirectFlow;
pub use types::{AccessToken, AccountName, FileMetadata, FullAccount, UploadArg, WriteMode};
