// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Estimation entry point
//!
//! An [`Estimator`] only holds its pricing configuration, so one instance can
//! be shared across threads and called concurrently on separate buffers.

use crate::analysis::analyse;
use crate::pricing::{price, Estimate, PricingConfig};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// The caller must reject empty uploads before estimating
    #[error("upload is empty")]
    EmptyInput,
}

#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: PricingConfig,
}

impl Estimator {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Estimate an upload, stamped with the current time
    pub fn estimate(&self, filename: &str, data: &[u8]) -> Result<Estimate, EstimateError> {
        self.estimate_at(filename, data, Utc::now())
    }

    /// Estimate an upload with an explicit timestamp; identical inputs give
    /// identical estimates.
    pub fn estimate_at(
        &self,
        filename: &str,
        data: &[u8],
        generated_at: DateTime<Utc>,
    ) -> Result<Estimate, EstimateError> {
        if data.is_empty() {
            return Err(EstimateError::EmptyInput);
        }

        let analysis = analyse(filename, data);
        let quote = price(&analysis.geometry, &self.config);

        Ok(Estimate::assemble(
            filename,
            data.len() as u64,
            &analysis.geometry,
            &quote,
            &self.config,
            analysis.warnings,
            generated_at,
        ))
    }
}

/// Estimate with a one-off configuration
pub fn estimate(
    filename: &str,
    data: &[u8],
    config: &PricingConfig,
) -> Result<Estimate, EstimateError> {
    Estimator::new(config.clone()).estimate(filename, data)
}
