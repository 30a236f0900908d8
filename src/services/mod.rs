// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Services module - business logic layer.

pub mod analysis;
pub mod catalog;
pub mod compose;
pub mod fixtures;

pub use analysis::{AnalysisKind, AnalysisRequest, AnalysisService, AnalysisTask};
pub use catalog::CatalogService;
pub use compose::RecipeDraft;
pub use fixtures::Fixtures;
