// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Authorization commands

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::colors::{Status, StyledText};
use crate::config::{AppCredentials, Settings};
use crate::dropbox::{DropboxClient, NoRedirectFlow};

/// Run the OAuth2 code flow and save the resulting token
pub fn authorize(
    config_path: &Path,
    credentials: &AppCredentials,
    code: Option<&str>,
) -> Result<()> {
    let flow = NoRedirectFlow::new(credentials.clone());

    let code = match code {
        Some(code) => code.to_string(),
        None => prompt_for_code(&flow.start())?,
    };

    let token = flow.finish(&code)?;

    let mut settings = Settings::load_from(config_path)?;
    settings.access_token = Some(token.access_token.clone());
    settings.account_id = token.account_id.clone();
    settings.save_to(config_path)?;

    println!("{} Authorization successful", Status::ok());
    println!("    Token saved to {}", config_path.display().to_string().path());

    greet(&DropboxClient::new(token.access_token));
    Ok(())
}

fn prompt_for_code(authorize_url: &str) -> Result<String> {
    println!("{} Open this URL and allow access:", Status::info());
    println!();
    println!("    {}", authorize_url.path());
    println!();
    print!("Paste the authorization code from Dropbox: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Show the account the saved token belongs to
pub fn whoami(config_path: &Path) -> Result<()> {
    let settings = Settings::load_from(config_path)?;
    let client = DropboxClient::new(settings.require_token()?);

    let account = client.get_current_account()?;
    println!(
        "{} Hello, {}!",
        Status::ok(),
        account.name.display_name.header()
    );
    if let Some(email) = account.email {
        println!("    Email:   {}", email);
    }
    println!("    Account: {}", account.account_id.dim());
    Ok(())
}

fn greet(client: &DropboxClient) {
    match client.get_current_account() {
        Ok(account) => println!(
            "{} Hello, {}!",
            Status::ok(),
            account.name.display_name.header()
        ),
        Err(e) => eprintln!(
            "{} Could not fetch account details: {}",
            Status::warn(),
            e
        ),
    }
}
