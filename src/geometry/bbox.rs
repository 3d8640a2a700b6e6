// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bounding box utilities

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Inverted box that any point will expand
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3<f64>>) -> Self {
        points
            .into_iter()
            .fold(Self::empty(), |bbox, point| bbox.including(point))
    }

    /// True until at least one point has been included
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Every corner coordinate is a finite number
    pub fn is_finite(&self) -> bool {
        self.min
            .coords
            .iter()
            .chain(self.max.coords.iter())
            .all(|value| value.is_finite())
    }

    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);

        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    #[must_use]
    pub fn including(mut self, point: &Point3<f64>) -> Self {
        self.expand_to_include(point);
        self
    }

    #[must_use]
    pub fn union(self, other: &BoundingBox) -> Self {
        if other.is_empty() {
            return self;
        }
        self.including(&other.min).including(&other.max)
    }

    pub fn size(&self) -> Vector3<f64> {
        if self.is_empty() {
            return Vector3::zeros();
        }
        self.max - self.min
    }

    /// Length of the main diagonal, zero for an empty box
    pub fn diagonal(&self) -> f64 {
        self.size().norm()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}
