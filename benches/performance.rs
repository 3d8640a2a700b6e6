// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use printquote::{analyse, Estimator};
use stl_io::{Normal, Triangle, Vertex};

/// `count` disjoint right tetrahedra as a binary STL buffer
fn tetrahedra_stl(count: usize) -> Vec<u8> {
    let triangles: Vec<Triangle> = (0..count)
        .flat_map(|i| {
            let s = i as f32 * 3.0;
            let o = [s, 0.0, 0.0];
            let x = [s + 2.0, 0.0, 0.0];
            let y = [s, 2.0, 0.0];
            let z = [s, 0.0, 2.0];
            [[o, y, x], [o, x, z], [o, z, y], [x, y, z]]
        })
        .map(|[a, b, c]| Triangle {
            normal: Normal::new([0.0, 0.0, 0.0]),
            vertices: [Vertex::new(a), Vertex::new(b), Vertex::new(c)],
        })
        .collect();

    let mut bytes = Vec::new();
    stl_io::write_stl(&mut bytes, triangles.iter()).unwrap();
    bytes
}

fn ascii_strip(triangles: usize) -> String {
    let mut text = String::from("solid bench\n");
    for i in 0..triangles {
        let s = i as f32;
        text.push_str(&format!(
            "facet normal 0 0 1\nouter loop\nvertex {s} 0 0\nvertex {} 0 0\nvertex {s} 1 0\nendloop\nendfacet\n",
            s + 1.0
        ));
    }
    text.push_str("endsolid bench\n");
    text
}

fn bench_binary_stl(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_stl");

    for tetrahedra in [100, 10_000, 100_000] {
        let data = tetrahedra_stl(tetrahedra);
        group.bench_with_input(
            BenchmarkId::new("analyse", tetrahedra * 4),
            &data,
            |b, data| b.iter(|| analyse(black_box("bench.stl"), black_box(data))),
        );
    }

    group.finish();
}

fn bench_ascii_stl(c: &mut Criterion) {
    let data = ascii_strip(10_000);
    c.bench_function("ascii_stl_10k", |b| {
        b.iter(|| analyse(black_box("bench.stl"), black_box(data.as_bytes())))
    });
}

fn bench_estimate(c: &mut Criterion) {
    let estimator = Estimator::default();
    let data = tetrahedra_stl(2_500);
    c.bench_function("estimate_10k_triangles", |b| {
        b.iter(|| estimator.estimate(black_box("bench.stl"), black_box(&data)))
    });
}

criterion_group!(benches, bench_binary_stl, bench_ascii_stl, bench_estimate);
criterion_main!(benches);
