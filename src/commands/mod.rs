// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Command implementations

mod account;
mod settings;
mod upload;

pub use account::*;
pub use settings::*;
pub use upload::*;
