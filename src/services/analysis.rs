// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Simulated image analysis with a fixed completion delay.
//!
//! No inference happens anywhere. A submitted capture spawns an explicit
//! timed task that waits the configured delay and then invokes its
//! completion callback exactly once. The returned handle can cancel the
//! task before the deadline, in which case the callback never runs.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::{AppError, Result};

/// What the captured photo should be analyzed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    /// A finished dish
    Dish,
    /// A photo of raw ingredients
    Ingredients,
}

impl AnalysisKind {
    /// Display label matching the capture screen's picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dish => "Dish",
            Self::Ingredients => "Ingredients",
        }
    }
}

/// A capture submitted for analysis.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// How to interpret the photo
    pub kind: AnalysisKind,
    /// Free-text hint entered by the user
    pub hint: String,
    /// Raw image bytes
    pub image_data: Vec<u8>,
}

/// Handle to an in-flight analysis task.
///
/// Dropping the handle without joining also cancels the task; hold it (or
/// `join` it) for as long as the completion callback should stay armed.
#[derive(Debug)]
pub struct AnalysisTask {
    cancel: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl AnalysisTask {
    /// Cancel the task. If it has not completed yet, the completion
    /// callback will never run.
    pub fn cancel(self) {
        let _ = self.cancel.send(());
    }

    /// Wait for the task to finish.
    pub async fn join(self) {
        let _ = self.handle.await;
    }

    /// Whether the task has already finished.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns simulated analysis tasks with a fixed delay.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    delay: Duration,
}

impl AnalysisService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Submit a capture for analysis.
    ///
    /// After the configured delay the task invokes `on_complete` once with
    /// the request. Submitting without image data is rejected up front.
    pub fn submit<F>(&self, request: AnalysisRequest, on_complete: F) -> Result<AnalysisTask>
    where
        F: FnOnce(AnalysisRequest) + Send + 'static,
    {
        if request.image_data.is_empty() {
            return Err(AppError::BadRequest("no image data selected".to_string()));
        }

        tracing::info!(
            kind = request.kind.label(),
            hint = %request.hint,
            bytes = request.image_data.len(),
            "Submitting capture for analysis"
        );

        let (cancel_tx, mut cancel_rx) = oneshot::channel();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    tracing::info!(kind = request.kind.label(), "Analysis complete (mock)");
                    on_complete(request);
                }
                _ = &mut cancel_rx => {
                    tracing::debug!("Analysis cancelled before completion");
                }
            }
        });

        Ok(AnalysisTask {
            cancel: cancel_tx,
            handle,
        })
    }
}
