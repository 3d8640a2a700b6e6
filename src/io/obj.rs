// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wavefront OBJ decoder (vertex list + face indices)
//!
//! `v x y z` lines build the vertex list; `f a b c ...` lines reference it
//! with 1-based indices. Index tokens may carry texture/normal references
//! (`a/t/n`, `a//n`); only the position index is used. Faces with more than
//! three corners are fan triangulated. All other line kinds are ignored.

use super::{text_lines, ParseError, ParseResult};
use crate::geometry::{Accumulator, Confidence, Geometry};
use nalgebra::Point3;

pub fn parse(data: &[u8]) -> ParseResult<Geometry> {
    let mut vertices: Vec<Point3<f64>> = Vec::new();
    let mut faces: Vec<Vec<i64>> = Vec::new();

    for line in text_lines(data) {
        if line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                if let Some(point) = parse_vertex(tokens) {
                    vertices.push(point);
                }
            }
            Some("f") => {
                if let Some(face) = parse_face(tokens) {
                    faces.push(face);
                }
            }
            _ => {}
        }
    }

    if vertices.is_empty() {
        return Err(ParseError::MissingVertices);
    }
    if faces.is_empty() {
        return Err(ParseError::MissingFaces);
    }

    let mut accumulator = vertices
        .iter()
        .fold(Accumulator::new(), |acc, vertex| acc.visit_vertex(vertex));

    for face in &faces {
        let corners = face
            .iter()
            .map(|&index| resolve(index, &vertices))
            .collect::<ParseResult<Vec<_>>>()?;
        accumulator = corners[1..]
            .windows(2)
            .fold(accumulator, |acc, pair| acc.add_facet(&[corners[0], pair[0], pair[1]]));
    }

    accumulator.finish(Confidence::Medium)
}

fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<Point3<f64>> {
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    let z = tokens.next()?.parse().ok()?;
    Some(Point3::new(x, y, z))
}

/// Position indices of a face, or `None` when it has fewer than three
/// corners or an unreadable token
fn parse_face<'a>(tokens: impl Iterator<Item = &'a str>) -> Option<Vec<i64>> {
    let indices = tokens
        .map(|token| token.split('/').next().and_then(|i| i.parse().ok()))
        .collect::<Option<Vec<i64>>>()?;
    (indices.len() >= 3).then_some(indices)
}

/// Convert a 1-based index to the vertex it names
fn resolve(index: i64, vertices: &[Point3<f64>]) -> ParseResult<Point3<f64>> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| vertices.get(i).copied())
        .ok_or(ParseError::FaceIndexOutOfRange {
            index,
            vertex_count: vertices.len(),
        })
}
