// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Wisebites: the data core of a recipe-management app.
//!
//! Entities follow the snake_case JSON contract of the future recipe API;
//! the catalog service answers every query from an immutable in-process
//! fixture registry, and image analysis is simulated by a cancellable
//! fixed-delay task.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

use config::Config;
use services::{AnalysisService, CatalogService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalog: CatalogService,
    pub analysis: AnalysisService,
}
