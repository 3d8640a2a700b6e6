// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh fixtures shared by the integration tests

#![allow(dead_code)]

use stl_io::{Normal, Triangle, Vertex};

/// Closed, outward-wound axis-aligned cube with one corner at the origin
pub fn cube(size: f32) -> Vec<Triangle> {
    let corners = [
        [0.0, 0.0, 0.0],
        [size, 0.0, 0.0],
        [size, size, 0.0],
        [0.0, size, 0.0],
        [0.0, 0.0, size],
        [size, 0.0, size],
        [size, size, size],
        [0.0, size, size],
    ];
    let faces: [([usize; 3], [f32; 3]); 12] = [
        ([4, 5, 6], [0.0, 0.0, 1.0]),
        ([4, 6, 7], [0.0, 0.0, 1.0]),
        ([1, 0, 3], [0.0, 0.0, -1.0]),
        ([1, 3, 2], [0.0, 0.0, -1.0]),
        ([5, 1, 2], [1.0, 0.0, 0.0]),
        ([5, 2, 6], [1.0, 0.0, 0.0]),
        ([0, 4, 7], [-1.0, 0.0, 0.0]),
        ([0, 7, 3], [-1.0, 0.0, 0.0]),
        ([7, 6, 2], [0.0, 1.0, 0.0]),
        ([7, 2, 3], [0.0, 1.0, 0.0]),
        ([0, 1, 5], [0.0, -1.0, 0.0]),
        ([0, 5, 4], [0.0, -1.0, 0.0]),
    ];

    faces
        .iter()
        .map(|(indices, normal)| Triangle {
            normal: Normal::new(*normal),
            vertices: [
                Vertex::new(corners[indices[0]]),
                Vertex::new(corners[indices[1]]),
                Vertex::new(corners[indices[2]]),
            ],
        })
        .collect()
}

/// Same triangles with every winding flipped
pub fn reversed(triangles: &[Triangle]) -> Vec<Triangle> {
    triangles
        .iter()
        .map(|t| Triangle {
            normal: Normal::new([t.normal[0], t.normal[1], t.normal[2]]),
            vertices: [
                Vertex::new([t.vertices[0][0], t.vertices[0][1], t.vertices[0][2]]),
                Vertex::new([t.vertices[2][0], t.vertices[2][1], t.vertices[2][2]]),
                Vertex::new([t.vertices[1][0], t.vertices[1][1], t.vertices[1][2]]),
            ],
        })
        .collect()
}

pub fn binary_stl(triangles: &[Triangle]) -> Vec<u8> {
    let mut bytes = Vec::new();
    stl_io::write_stl(&mut bytes, triangles.iter()).expect("write to Vec cannot fail");
    bytes
}

pub fn ascii_stl(triangles: &[Triangle]) -> String {
    let mut text = String::from("solid fixture\n");
    for t in triangles {
        text.push_str("  facet normal 0 0 0\n    outer loop\n");
        for v in &t.vertices {
            let [x, y, z] = [v[0], v[1], v[2]];
            text.push_str(&format!("      vertex {} {} {}\n", x, y, z));
        }
        text.push_str("    endloop\n  endfacet\n");
    }
    text.push_str("endsolid fixture\n");
    text
}
