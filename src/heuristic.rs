// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Byte-length estimator used when no decoder produced a mesh

use crate::geometry::{BoundingBox, Confidence, Geometry};
use crate::pricing::PLA_DENSITY_G_PER_CM3;
use crate::utils::math::clamp;
use nalgebra::Point3;

pub const HEURISTIC_WARNING: &str =
    "Used heuristic estimation because detailed geometry parsing failed.";

const BYTES_PER_GRAM: f64 = 7000.0;
const MIN_GRAMS: f64 = 8.0;
const MAX_GRAMS: f64 = 250.0;
const BYTES_PER_TRIANGLE: usize = 50;
const AREA_CM2_PER_GRAM: f64 = 1.5;

/// Plausible low-confidence geometry from the buffer length alone
pub fn estimate(byte_len: usize) -> Geometry {
    let grams = clamp(byte_len as f64 / BYTES_PER_GRAM, MIN_GRAMS, MAX_GRAMS);

    Geometry {
        triangle_count: byte_len / BYTES_PER_TRIANGLE,
        bounding_box_mm: BoundingBox::new(
            Point3::origin(),
            Point3::new(grams * 0.9, grams * 0.5, grams * 0.4),
        ),
        volume_cm3: grams / PLA_DENSITY_G_PER_CM3,
        surface_area_cm2: grams * AREA_CM2_PER_GRAM,
        confidence: Confidence::Low,
    }
}
