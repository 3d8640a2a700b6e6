// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Fixed-record binary STL decoder
//!
//! ```text
//! UINT8[80]    - header (ignored)
//! UINT32       - triangle count, little endian
//! foreach triangle
//!     REAL32[3] - normal (ignored)
//!     REAL32[3] - vertex 1
//!     REAL32[3] - vertex 2
//!     REAL32[3] - vertex 3
//!     UINT16    - attribute byte count (ignored)
//! end
//! ```

use super::{ParseError, ParseResult};
use crate::geometry::{Accumulator, Confidence, Facet, Geometry};
use nalgebra::Point3;
use rayon::prelude::*;

pub const HEADER_SIZE: usize = 80;
pub const BODY_OFFSET: usize = HEADER_SIZE + 4;
pub const RECORD_SIZE: usize = 50;

const NORMAL_SIZE: usize = 12;
const PARALLEL_THRESHOLD: usize = 1000;
const CHUNK_RECORDS: usize = 1000;

/// Decode a binary STL buffer.
///
/// The declared triangle count must fit in the buffer; when it does not, the
/// count is untrustworthy (usually the file is really ASCII) and the buffer
/// is rejected outright. Trailing bytes after the last record are ignored.
pub fn parse(data: &[u8]) -> ParseResult<Geometry> {
    if data.len() < BODY_OFFSET {
        return Err(ParseError::TooShort {
            expected: BODY_OFFSET,
            got: data.len(),
        });
    }

    let declared = u32::from_le_bytes([
        data[HEADER_SIZE],
        data[HEADER_SIZE + 1],
        data[HEADER_SIZE + 2],
        data[HEADER_SIZE + 3],
    ]);
    let required = (declared as usize)
        .checked_mul(RECORD_SIZE)
        .and_then(|body| body.checked_add(BODY_OFFSET))
        .unwrap_or(usize::MAX);
    if required > data.len() {
        return Err(ParseError::TruncatedBody {
            declared,
            required,
            actual: data.len(),
        });
    }

    let records = &data[BODY_OFFSET..required];
    let accumulator = if declared as usize >= PARALLEL_THRESHOLD {
        records
            .par_chunks(RECORD_SIZE * CHUNK_RECORDS)
            .map(fold_records)
            .reduce(Accumulator::new, Accumulator::merge)
    } else {
        fold_records(records)
    };

    accumulator.finish(Confidence::High)
}

fn fold_records(records: &[u8]) -> Accumulator {
    records
        .chunks_exact(RECORD_SIZE)
        .fold(Accumulator::new(), |acc, record| {
            acc.add_triangle(&read_facet(record))
        })
}

fn read_facet(record: &[u8]) -> Facet {
    let base = NORMAL_SIZE;
    [
        read_vertex(&record[base..base + 12]),
        read_vertex(&record[base + 12..base + 24]),
        read_vertex(&record[base + 24..base + 36]),
    ]
}

fn read_vertex(buf: &[u8]) -> Point3<f64> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Point3::new(f64::from(x), f64::from(y), f64::from(z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stl_io::{Normal, Triangle, Vertex};

    fn triangle(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Triangle {
        Triangle {
            normal: Normal::new([0.0, 0.0, 0.0]),
            vertices: [Vertex::new(a), Vertex::new(b), Vertex::new(c)],
        }
    }

    fn encode(triangles: &[Triangle]) -> Vec<u8> {
        let mut bytes = Vec::new();
        stl_io::write_stl(&mut bytes, triangles.iter()).unwrap();
        bytes
    }

    /// Outward-wound tetrahedron with legs of `size` along each axis, shifted along x
    fn tetrahedron(size: f32, shift: f32) -> Vec<Triangle> {
        let o = [shift, 0.0, 0.0];
        let x = [shift + size, 0.0, 0.0];
        let y = [shift, size, 0.0];
        let z = [shift, 0.0, size];
        vec![
            triangle(o, y, x),
            triangle(o, x, z),
            triangle(o, z, y),
            triangle(x, y, z),
        ]
    }

    #[test]
    fn test_tetrahedron() {
        let geometry = parse(&encode(&tetrahedron(30.0, 0.0))).unwrap();
        assert_eq!(geometry.triangle_count, 4);
        assert_eq!(geometry.confidence, Confidence::High);
        // 30³ / 6 = 4500 mm³
        assert_relative_eq!(geometry.volume_cm3, 4.5, epsilon = 1e-6);
        assert_eq!(geometry.bounding_box_mm.max, Point3::new(30.0, 30.0, 30.0));
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            parse(&[0u8; 83]),
            Err(ParseError::TooShort { got: 83, .. })
        ));
    }

    #[test]
    fn test_declared_count_exceeds_buffer() {
        let mut bytes = encode(&tetrahedron(10.0, 0.0));
        bytes[HEADER_SIZE..BODY_OFFSET].copy_from_slice(&5u32.to_le_bytes());
        assert!(matches!(
            parse(&bytes),
            Err(ParseError::TruncatedBody { declared: 5, .. })
        ));
    }

    #[test]
    fn test_huge_declared_count() {
        let mut bytes = vec![0u8; BODY_OFFSET + RECORD_SIZE];
        bytes[HEADER_SIZE..BODY_OFFSET].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(parse(&bytes), Err(ParseError::TruncatedBody { .. })));
    }

    #[test]
    fn test_zero_triangles() {
        let bytes = vec![0u8; BODY_OFFSET];
        assert_eq!(parse(&bytes), Err(ParseError::NoTriangles));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = encode(&tetrahedron(10.0, 0.0));
        bytes.extend_from_slice(&[0xAB; 17]);
        assert_eq!(parse(&bytes).unwrap().triangle_count, 4);
    }

    #[test]
    fn test_parallel_path_matches_small_mesh_totals() {
        // 300 disjoint tetrahedra cross the parallel threshold
        let triangles: Vec<Triangle> = (0..300)
            .flat_map(|i| tetrahedron(10.0, i as f32 * 20.0))
            .collect();
        let geometry = parse(&encode(&triangles)).unwrap();
        assert_eq!(geometry.triangle_count, 1200);
        assert_relative_eq!(geometry.volume_cm3, 50.0, epsilon = 1e-6);
        assert_eq!(geometry.bounding_box_mm.max.x, 299.0 * 20.0 + 10.0);
    }
}
