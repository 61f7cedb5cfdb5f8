// ABOUTME: Helper modules for thrive-cli
// ABOUTME: Provides report and JSON output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Thrive Contributors

pub mod display;
