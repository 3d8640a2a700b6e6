// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Pricing module - configuration, the cost model, and the estimate it feeds

mod config;
mod estimate;
mod model;

pub use config::{ConfigError, PricingConfig};
pub use estimate::{Estimate, EstimateMetadata, JobAnalysis, JobSummary};
pub use model::{price, recommended_infill, Quote, MATERIAL, PLA_DENSITY_G_PER_CM3};
