// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Wisebites demo binary
//!
//! Assembles the mock services, walks the catalog the way the app's screens
//! would, and runs one simulated capture analysis to completion.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wisebites::{
    config::Config,
    services::{AnalysisKind, AnalysisRequest, AnalysisService, CatalogService},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        analysis_delay_ms = config.analysis_delay.as_millis() as u64,
        deterministic_order = config.deterministic_order,
        "Starting Wisebites data core"
    );

    // Build shared state over the fixture registry
    let state = AppState {
        catalog: CatalogService::new(config.deterministic_order),
        analysis: AnalysisService::new(config.analysis_delay),
        config,
    };

    // Walk the catalog
    let latest = state.catalog.latest_recipes();
    tracing::info!(count = latest.len(), "Latest recipes");
    for collection in state.catalog.collections() {
        let members = state.catalog.recipes_in_collection(&collection);
        let names: Vec<&str> = members.iter().map(|r| r.name.as_str()).collect();
        tracing::info!(collection = %collection.name, recipes = ?names, "Collection listing");
    }
    tracing::info!(tags = ?state.catalog.filter_tags(), "Available filter tags");

    // Run one simulated analysis to completion
    let request = AnalysisRequest {
        kind: AnalysisKind::Dish,
        hint: "Homemade ramen".to_string(),
        image_data: vec![0u8; 1024],
    };
    let (tx, rx) = tokio::sync::oneshot::channel();
    let task = state.analysis.submit(request, move |done| {
        let _ = tx.send(done);
    })?;
    let done = rx.await?;
    task.join().await;
    tracing::info!(kind = done.kind.label(), hint = %done.hint, "Capture analyzed");

    Ok(())
}

/// Initialize structured logging.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wisebites=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
