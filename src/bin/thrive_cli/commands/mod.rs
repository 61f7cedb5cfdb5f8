// ABOUTME: Command modules for thrive-cli
// ABOUTME: Growth assessment and nutrition analysis commands plus shared file loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

pub mod growth;
pub mod nutrition;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thrive_engine::errors::{AppError, AppResult};
use tracing::debug;

/// Read and deserialize a JSON input file
fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    debug!(path = %path.display(), "Loading input file");
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}", path.display())).with_source(e)
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::serialization(format!("Invalid JSON in {}", path.display())).with_source(e)
    })
}
