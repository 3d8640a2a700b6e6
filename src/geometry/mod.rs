// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - triangle accumulation and derived mesh properties

mod accumulator;
mod bbox;
mod model;

pub use accumulator::{area, signed_volume, Accumulator, Facet};
pub use bbox::BoundingBox;
pub use model::{Confidence, Geometry};
