// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry to cost/time model
//!
//! Every value here is full precision; rounding happens only when an
//! [`Estimate`](super::Estimate) is assembled.

use super::PricingConfig;
use crate::geometry::Geometry;

pub const MATERIAL: &str = "PLA";

/// PLA density in g/cm³
pub const PLA_DENSITY_G_PER_CM3: f64 = 1.24;

const MATERIAL_MARGIN: f64 = 1.05;
const MIN_GRAMS: f64 = 8.0;
const GRAMS_PER_HOUR: f64 = 12.0;
const GRAMS_PER_DIAGONAL_MM: f64 = 0.9;

/// Unrounded cost breakdown for one geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub grams: f64,
    pub hours: f64,
    pub material_cost: f64,
    pub machine_cost: f64,
    pub total: f64,
    pub infill_percent: u8,
}

pub fn price(geometry: &Geometry, config: &PricingConfig) -> Quote {
    let grams = if geometry.volume_cm3 == 0.0 {
        (geometry.bounding_box_mm.diagonal() * GRAMS_PER_DIAGONAL_MM).max(MIN_GRAMS)
    } else {
        (geometry.volume_cm3 * PLA_DENSITY_G_PER_CM3 * MATERIAL_MARGIN).max(MIN_GRAMS)
    };

    let mut hours = grams / GRAMS_PER_HOUR;
    if config.print_speed > 0.0 && geometry.volume_cm3 > 0.0 {
        // print_speed is mm³ per hour
        let print_hours = geometry.volume_cm3 * 1000.0 / config.print_speed;
        hours = hours.max(print_hours);
    }

    let material_cost = grams * config.material_cost_per_gram;
    let machine_cost = hours * config.machine_rate_per_hour;

    Quote {
        grams,
        hours,
        material_cost,
        machine_cost,
        total: config.setup_fee + machine_cost + material_cost,
        infill_percent: recommended_infill(grams),
    }
}

/// Step function on mass: heavier parts get sparser infill
pub fn recommended_infill(grams: f64) -> u8 {
    if grams > 120.0 {
        15
    } else if grams < 30.0 {
        25
    } else {
        20
    }
}
