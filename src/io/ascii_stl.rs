// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Line-oriented ASCII STL recovery
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//! endsolid name
//! ```
//!
//! Only `vertex` and `endfacet` lines matter. Every parsed vertex extends the
//! bounding box. At `endfacet` the first three buffered vertices form the
//! triangle and any extras are dropped; a facet with fewer than three is
//! skipped. Both are accepted leniency for hand-edited files.

use super::{text_lines, ParseResult};
use crate::geometry::{Accumulator, Confidence, Geometry};
use nalgebra::Point3;

pub fn parse(data: &[u8]) -> ParseResult<Geometry> {
    let mut pending: Vec<Point3<f64>> = Vec::with_capacity(3);
    let mut accumulator = Accumulator::new();

    for line in text_lines(data) {
        if line.starts_with("vertex") {
            if let Some(point) = parse_vertex(line) {
                accumulator = accumulator.visit_vertex(&point);
                pending.push(point);
            }
        } else if line.starts_with("endfacet") {
            if let [a, b, c, ..] = pending[..] {
                accumulator = accumulator.add_facet(&[a, b, c]);
            }
            pending.clear();
        }
    }

    accumulator.finish(Confidence::Medium)
}

fn parse_vertex(line: &str) -> Option<Point3<f64>> {
    let mut tokens = line.split_whitespace();
    if tokens.next()? != "vertex" {
        return None;
    }
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    let z = tokens.next()?.parse().ok()?;
    Some(Point3::new(x, y, z))
}
