// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Structural parse failures
//!
//! These never reach the caller of the estimator: the dispatcher recovers
//! from each one by moving to the next decoder or to the heuristic.

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("buffer too short: need at least {expected} bytes, got {got}")]
    TooShort { expected: usize, got: usize },

    #[error("declared {declared} triangles need {required} bytes, buffer has {actual}")]
    TruncatedBody {
        declared: u32,
        required: usize,
        actual: usize,
    },

    #[error("no triangles recognised")]
    NoTriangles,

    #[error("no vertices found")]
    MissingVertices,

    #[error("no faces found")]
    MissingFaces,

    #[error("face index {index} outside 1..={vertex_count}")]
    FaceIndexOutOfRange { index: i64, vertex_count: usize },

    #[error("integrated volume or area is not finite")]
    NonFiniteGeometry,
}
