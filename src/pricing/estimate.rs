// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Caller-facing estimate and the summary handed to job persistence
//!
//! Field names serialize in camelCase; the HTTP layer and stored jobs depend
//! on them.

use super::{PricingConfig, Quote, MATERIAL, PLA_DENSITY_G_PER_CM3};
use crate::geometry::{BoundingBox, Confidence, Geometry};
use crate::utils::math::{round1, round2};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateMetadata {
    pub generated_at: DateTime<Utc>,
}

/// Result of one estimation call, owned by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub file_name: String,
    pub file_size_bytes: u64,
    pub material: String,
    pub material_cost: f64,
    pub estimated_grams: f64,
    pub estimated_hours: f64,
    pub estimated_price: f64,
    pub setup_fee: f64,
    pub machine_rate: f64,
    pub print_speed: f64,
    pub density: f64,
    pub triangle_count: usize,
    pub bounding_box_mm: BoundingBox,
    pub volume_cm3: f64,
    pub surface_area_cm2: f64,
    pub confidence: Confidence,
    pub warnings: Vec<String>,
    pub recommended_infill: u8,
    pub metadata: EstimateMetadata,
}

impl Estimate {
    /// Round the quote and geometry for output and attach the echoed inputs
    pub fn assemble(
        file_name: &str,
        file_size_bytes: u64,
        geometry: &Geometry,
        quote: &Quote,
        config: &PricingConfig,
        warnings: Vec<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            file_name: file_name.to_string(),
            file_size_bytes,
            material: MATERIAL.to_string(),
            material_cost: round2(quote.material_cost),
            estimated_grams: round1(quote.grams),
            estimated_hours: round2(quote.hours),
            estimated_price: round2(quote.total),
            setup_fee: config.setup_fee,
            machine_rate: config.machine_rate_per_hour,
            print_speed: config.print_speed,
            density: PLA_DENSITY_G_PER_CM3,
            triangle_count: geometry.triangle_count,
            bounding_box_mm: geometry.bounding_box_mm,
            volume_cm3: round2(geometry.volume_cm3),
            surface_area_cm2: round2(geometry.surface_area_cm2),
            confidence: geometry.confidence,
            warnings,
            recommended_infill: quote.infill_percent,
            metadata: EstimateMetadata { generated_at },
        }
    }

    /// Price in minor currency units (cents)
    pub fn estimated_price_minor(&self) -> i64 {
        (self.estimated_price * 100.0).round() as i64
    }

    pub fn job_summary(&self) -> JobSummary {
        JobSummary {
            file_name: self.file_name.clone(),
            original_ext: Path::new(&self.file_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext))
                .unwrap_or_default(),
            estimated_grams: self.estimated_grams,
            estimated_hours: self.estimated_hours,
            estimated_price_minor: self.estimated_price_minor(),
            analysis: JobAnalysis {
                surface_area_cm2: self.surface_area_cm2,
                volume_cm3: self.volume_cm3,
                triangle_count: self.triangle_count,
                infill: self.recommended_infill,
            },
            bounding_box_mm: self.bounding_box_mm,
            generated_at: self.metadata.generated_at,
        }
    }
}

/// Geometry blob stored alongside a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    pub surface_area_cm2: f64,
    pub volume_cm3: f64,
    pub triangle_count: usize,
    pub infill: u8,
}

/// Subset of an estimate handed to the job-persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub file_name: String,
    pub original_ext: String,
    pub estimated_grams: f64,
    pub estimated_hours: f64,
    pub estimated_price_minor: i64,
    pub analysis: JobAnalysis,
    pub bounding_box_mm: BoundingBox,
    pub generated_at: DateTime<Utc>,
}
