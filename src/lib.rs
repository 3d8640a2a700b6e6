// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Printquote estimation engine
//!
//! Derives triangle count, bounding box, volume and surface area from an
//! uploaded STL or OBJ buffer and turns them into a print cost/time
//! estimate. Uploads that cannot be decoded fall back to a byte-length
//! heuristic, so a non-empty upload always gets an estimate.

pub mod analysis;
pub mod cli;
pub mod estimator;
pub mod geometry;
pub mod heuristic;
pub mod io;
pub mod logging;
pub mod pricing;
pub mod utils;

pub use analysis::{analyse, Analysis};
pub use estimator::{estimate, EstimateError, Estimator};
pub use geometry::{BoundingBox, Confidence, Geometry};
pub use io::{Format, MeshDecoder, ParseError};
pub use pricing::{Estimate, JobSummary, PricingConfig};
