// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! CLI argument definitions using clap derive macros

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{APP_KEY_ENV, APP_SECRET_ENV, CONFIG_PATH_ENV};

/// dropsync - Upload new files from a local folder to Dropbox
#[derive(Parser)]
#[command(name = "dropsync")]
#[command(author = "Nervosys")]
#[command(version)]
#[command(about = "Watch a local folder and upload new files to Dropbox", long_about = None)]
pub struct Cli {
    /// Settings file [default: <config dir>/dropsync/config.json]
    #[arg(long, global = true, env = CONFIG_PATH_ENV, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log more (-v info, -vv debug); RUST_LOG applies otherwise
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Dropbox app key
    #[arg(long, global = true, env = APP_KEY_ENV, hide_env_values = true)]
    pub app_key: Option<String>,

    /// Dropbox app secret
    #[arg(long, global = true, env = APP_SECRET_ENV, hide_env_values = true)]
    pub app_secret: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authorize dropsync with a Dropbox account
    #[command(visible_alias = "login")]
    Auth {
        /// Authorization code from Dropbox (prompted for when omitted)
        #[arg(long)]
        code: Option<String>,
    },

    /// Show the authorized Dropbox account
    #[command(visible_alias = "account")]
    Whoami,

    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Upload new files once
    Sync {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Upload new files every interval until Ctrl-C
    #[command(visible_alias = "run")]
    Watch {
        #[command(flatten)]
        target: TargetArgs,

        /// Seconds between passes [default: saved setting, 60]
        #[arg(long, short = 'i')]
        interval: Option<u64>,

        /// Stop after this many passes
        #[arg(long)]
        max_passes: Option<u64>,
    },
}

impl Commands {
    /// Whether the command needs the Dropbox app key and secret
    pub fn uses_dropbox(&self) -> bool {
        match self {
            Commands::Auth { .. } | Commands::Whoami => true,
            Commands::Sync { target } | Commands::Watch { target, .. } => target.mirror.is_none(),
            Commands::Config { .. } => false,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Folder to watch [default: saved setting]
    #[arg(long, short = 'l', value_name = "DIR")]
    pub local_folder: Option<PathBuf>,

    /// Destination folder in Dropbox [default: saved setting, "/"]
    #[arg(long, short = 'd', value_name = "PATH")]
    pub dropbox_folder: Option<String>,

    /// Copy files into this directory instead of uploading to Dropbox
    #[arg(long, value_name = "DIR")]
    pub mirror: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show saved settings
    Show,

    /// Change saved settings
    Set {
        /// Folder to watch
        #[arg(long, short = 'l', value_name = "DIR")]
        local_folder: Option<PathBuf>,

        /// Destination folder in Dropbox
        #[arg(long, short = 'd', value_name = "PATH")]
        dropbox_folder: Option<String>,

        /// Seconds between passes in watch mode
        #[arg(long, short = 'i')]
        interval: Option<u64>,
    },

    /// Forget the saved access token
    Logout,

    /// Print the settings file location
    Path,
}
