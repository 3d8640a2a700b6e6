// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Running totals over triangle soup
//!
//! Each triangle contributes the signed volume of the tetrahedron it forms
//! with the origin (divergence theorem) and its unsigned area. The totals are
//! carried in a plain `Copy` value that every step consumes and returns, so
//! partial accumulators built on separate batches can be merged in any
//! grouping.

use super::{BoundingBox, Confidence, Geometry};
use crate::io::{ParseError, ParseResult};
use nalgebra::Point3;

/// Three vertices in source winding order, in millimetres
pub type Facet = [Point3<f64>; 3];

const MM3_PER_CM3: f64 = 1000.0;
const MM2_PER_CM2: f64 = 100.0;

/// Signed volume contribution: `p1 · (p2 × p3) / 6`
pub fn signed_volume(facet: &Facet) -> f64 {
    let [a, b, c] = facet;
    a.coords.dot(&b.coords.cross(&c.coords)) / 6.0
}

/// Unsigned area: `|(p2 - p1) × (p3 - p1)| / 2`
pub fn area(facet: &Facet) -> f64 {
    let [a, b, c] = facet;
    (b - a).cross(&(c - a)).norm() * 0.5
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator {
    triangles: usize,
    signed_volume_mm3: f64,
    area_mm2: f64,
    bounds: BoundingBox,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            triangles: 0,
            signed_volume_mm3: 0.0,
            area_mm2: 0.0,
            bounds: BoundingBox::empty(),
        }
    }

    /// Extend the bounding box without counting a triangle
    #[must_use]
    pub fn visit_vertex(mut self, point: &Point3<f64>) -> Self {
        self.bounds.expand_to_include(point);
        self
    }

    /// Count a triangle's volume and area without touching the bounding box
    #[must_use]
    pub fn add_facet(mut self, facet: &Facet) -> Self {
        self.triangles += 1;
        self.signed_volume_mm3 += signed_volume(facet);
        self.area_mm2 += area(facet);
        self
    }

    /// Count a triangle and extend the bounding box by its vertices
    #[must_use]
    pub fn add_triangle(self, facet: &Facet) -> Self {
        facet
            .iter()
            .fold(self, |acc, vertex| acc.visit_vertex(vertex))
            .add_facet(facet)
    }

    /// Combine two partial accumulators
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            triangles: self.triangles + other.triangles,
            signed_volume_mm3: self.signed_volume_mm3 + other.signed_volume_mm3,
            area_mm2: self.area_mm2 + other.area_mm2,
            bounds: self.bounds.union(&other.bounds),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles
    }

    pub fn signed_volume_mm3(&self) -> f64 {
        self.signed_volume_mm3
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Convert the totals to a [`Geometry`] in cm³/cm².
    ///
    /// An accumulator that never saw a triangle is a failed parse, not a
    /// zero-volume object. Non-finite totals or bounds are failures too: a
    /// vertex that only extends the box still feeds the diagonal fallback.
    pub fn finish(self, confidence: Confidence) -> ParseResult<Geometry> {
        if self.triangles == 0 {
            return Err(ParseError::NoTriangles);
        }
        if !self.signed_volume_mm3.is_finite()
            || !self.area_mm2.is_finite()
            || !self.bounds.is_finite()
        {
            return Err(ParseError::NonFiniteGeometry);
        }

        Ok(Geometry {
            triangle_count: self.triangles,
            bounding_box_mm: self.bounds,
            volume_cm3: self.signed_volume_mm3.abs() / MM3_PER_CM3,
            surface_area_cm2: self.area_mm2 / MM2_PER_CM2,
            confidence,
        })
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}
