// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use fracnet::GeometryError;
use fracnet::geometry::{Point3, Polygon, Polygon3};
use fracnet::intersect::{GlobalIntersections, intersect_polygons_3d, suggested_tolerance};
use fracnet::numeric::frac_f64::FracF64;
use fracnet::numeric::scalar::Scalar;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn tol() -> FracF64 {
    FracF64::default_tolerance()
}

/// Vertices column-wise, one slice per coordinate axis.
fn poly(x: &[f64], y: &[f64], z: &[f64]) -> Polygon3<FracF64> {
    let verts = x
        .iter()
        .zip(y.iter())
        .zip(z.iter())
        .map(|((&x, &y), &z)| Point3::new(x, y, z))
        .collect();
    Polygon::new(verts)
}

fn fracture_1() -> Polygon3<FracF64> {
    poly(&[-1.0, 1.0, 1.0, -1.0], &[0.0; 4], &[-1.0, -1.0, 1.0, 1.0])
}

fn fracture_2() -> Polygon3<FracF64> {
    poly(&[0.0; 4], &[-1.0, 1.0, 1.0, -1.0], &[-0.7, -0.7, 0.8, 0.8])
}

/// Multiset comparison of the global point list against expectations,
/// duplicates counted.
fn assert_points(result: &GlobalIntersections<FracF64>, expected: &[[f64; 3]]) {
    assert_eq!(result.points.len(), expected.len(), "global point count");
    let mut used = vec![false; expected.len()];
    for p in &result.points {
        let hit = expected.iter().enumerate().find(|(i, e)| {
            !used[*i]
                && (p[0].0 - e[0]).abs() < 1e-6
                && (p[1].0 - e[1]).abs() < 1e-6
                && (p[2].0 - e[2]).abs() < 1e-6
        });
        match hit {
            Some((i, _)) => used[i] = true,
            None => panic!("unexpected intersection point {p:?}"),
        }
    }
}

fn flags_set(result: &GlobalIntersections<FracF64>, polygon: usize) -> usize {
    result.on_boundary[polygon].iter().filter(|f| **f).count()
}

#[test]
fn test_single_fracture() {
    let out = intersect_polygons_3d(&[fracture_1()], &tol()).unwrap();
    assert!(out.points.is_empty());
    assert_eq!(out.isect_points.len(), 1);
    assert!(out.isect_points[0].is_empty());
    assert_eq!(out.on_boundary.len(), 1);
    assert!(out.on_boundary[0].is_empty());
}

#[test]
fn test_two_intersecting_fractures() {
    let out = intersect_polygons_3d(&[fracture_1(), fracture_2()], &tol()).unwrap();

    assert_points(&out, &[[0.0, 0.0, -0.7], [0.0, 0.0, 0.8]]);
    let mut idx0 = out.isect_points[0].clone();
    let mut idx1 = out.isect_points[1].clone();
    idx0.sort();
    idx1.sort();
    assert_eq!(idx0, vec![0, 1]);
    assert_eq!(idx1, vec![0, 1]);
    assert_eq!(flags_set(&out, 0), 0);
    assert_eq!(flags_set(&out, 1), 0);
    assert_eq!(out.counterparts[0], vec![1]);
    assert_eq!(out.counterparts[1], vec![0]);
}

#[test]
fn test_order_independence_of_two_fractures() {
    let fwd = intersect_polygons_3d(&[fracture_1(), fracture_2()], &tol()).unwrap();
    let rev = intersect_polygons_3d(&[fracture_2(), fracture_1()], &tol()).unwrap();
    assert_points(&rev, &[[0.0, 0.0, -0.7], [0.0, 0.0, 0.8]]);
    assert_eq!(fwd.points.len(), rev.points.len());
    assert_eq!(fwd.isect_points[0].len(), rev.isect_points[1].len());
    assert_eq!(fwd.isect_points[1].len(), rev.isect_points[0].len());
}

#[test]
fn test_three_intersecting_fractures() {
    let f3 = poly(&[-1.0, 1.0, 1.0, -1.0], &[-1.0, -1.0, 1.0, 1.0], &[0.0; 4]);
    let out = intersect_polygons_3d(&[fracture_1(), fracture_2(), f3], &tol()).unwrap();

    assert_points(
        &out,
        &[
            [0.0, 0.0, -0.7],
            [0.0, 0.0, 0.8],
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
        ],
    );
    for i in 0..3 {
        assert_eq!(out.isect_points[i].len(), 4);
        assert_eq!(flags_set(&out, i), 0);
    }
}

#[test]
fn test_three_fractures_one_intersected_by_two() {
    let f3 = poly(
        &[0.5; 4],
        &[-1.0, 1.0, 1.0, -1.0],
        &[-0.7, -0.7, 0.8, 0.8],
    );
    let out = intersect_polygons_3d(&[fracture_1(), fracture_2(), f3], &tol()).unwrap();

    assert_points(
        &out,
        &[
            [0.0, 0.0, -0.7],
            [0.0, 0.0, 0.8],
            [0.5, 0.0, -0.7],
            [0.5, 0.0, 0.8],
        ],
    );
    assert_eq!(out.isect_points[0].len(), 4);
    assert_eq!(out.isect_points[1].len(), 2);
    assert_eq!(out.isect_points[2].len(), 2);
    for i in 0..3 {
        assert_eq!(flags_set(&out, i), 0);
    }
}

#[test]
fn test_three_fractures_sharing_a_segment() {
    // All three pairwise intersections coincide on the line x=0, y=0.
    // Records from different pairs are never coordinate-merged, so the
    // global set stores two points per pair.
    let f2 = poly(
        &[-1.0, 1.0, 1.0, -1.0],
        &[-1.0, 1.0, 1.0, -1.0],
        &[-1.0, -1.0, 1.0, 1.0],
    );
    let f3 = poly(&[0.0; 4], &[-1.0, 1.0, 1.0, -1.0], &[-1.0, -1.0, 1.0, 1.0]);
    let out = intersect_polygons_3d(&[fracture_1(), f2, f3], &tol()).unwrap();

    assert_points(
        &out,
        &[
            [0.0, 0.0, -1.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
            [0.0, 0.0, 1.0],
        ],
    );
    for i in 0..3 {
        assert_eq!(out.isect_points[i].len(), 4);
        assert_eq!(flags_set(&out, i), 0);
    }
}

#[test]
fn test_three_fractures_split_segment() {
    // Colinear intersections of different extent: the middle fracture
    // truncates two of the three records.
    let f2 = poly(
        &[-0.5, 0.5, 0.5, -0.5],
        &[-1.0, -1.0, 1.0, 1.0],
        &[-2.0, -2.0, 2.0, 2.0],
    );
    let f3 = poly(&[-1.0, 1.0, 1.0, -1.0], &[-1.0, -1.0, 1.0, 1.0], &[0.0; 4]);
    let out = intersect_polygons_3d(&[fracture_1(), f2, f3], &tol()).unwrap();

    assert_points(
        &out,
        &[
            [-1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [-0.5, 0.0, 0.0],
            [0.5, 0.0, 0.0],
            [-0.5, 0.0, 0.0],
            [0.5, 0.0, 0.0],
        ],
    );
    for i in 0..3 {
        assert_eq!(out.isect_points[i].len(), 4);
        assert_eq!(flags_set(&out, i), 0);
    }
}

#[test]
fn test_two_points_in_plane_of_other_fracture() {
    // One polygon has two non-consecutive vertices exactly in the
    // other's plane.
    let f1 = poly(
        &[-0.5, 0.5, 0.5, -0.5],
        &[-1.0, -1.0, 1.0, 1.0],
        &[-1.0, -1.0, 1.0, 1.0],
    );
    let f2 = poly(&[0.0; 4], &[-1.0, 1.0, 1.0, -1.0], &[-1.0, -1.0, 1.0, 1.0]);

    for order in [[f1.clone(), f2.clone()], [f2, f1]] {
        let out = intersect_polygons_3d(&order, &tol()).unwrap();
        assert_points(&out, &[[0.0, -1.0, -1.0], [0.0, 1.0, 1.0]]);
        assert_eq!(out.isect_points[0].len(), 2);
        assert_eq!(out.isect_points[1].len(), 2);
        assert_eq!(flags_set(&out, 0), 0);
        assert_eq!(flags_set(&out, 1), 0);
    }
}

#[test]
fn test_one_point_in_plane_of_other_fracture() {
    let f1 = poly(
        &[-0.5, 0.5, 0.5, -0.5],
        &[-1.0, -1.0, 1.0, 1.0],
        &[-1.0, -1.0, 1.0, 1.0],
    );
    let f2 = poly(&[0.0; 4], &[-1.0, 1.0, 1.0, -1.0], &[-1.0, -1.0, 2.0, 1.0]);

    let out = intersect_polygons_3d(&[f1, f2], &tol()).unwrap();
    assert_points(&out, &[[0.0, -1.0, -1.0], [0.0, 1.0, 1.0]]);
    assert_eq!(out.isect_points[0].len(), 2);
    assert_eq!(out.isect_points[1].len(), 2);
    assert_eq!(flags_set(&out, 0), 0);
    assert_eq!(flags_set(&out, 1), 0);
}

#[test]
fn test_l_intersection() {
    let f1 = poly(
        &[0.0, 1.0, 1.0, 0.0],
        &[0.0, 0.0, 1.0, 1.0],
        &[0.0; 4],
    );
    let f2 = poly(
        &[0.0; 4],
        &[0.3, 0.7, 0.7, 0.3],
        &[0.0, 0.0, 1.0, 1.0],
    );
    let out = intersect_polygons_3d(&[f1, f2], &tol()).unwrap();

    assert_points(&out, &[[0.0, 0.3, 0.0], [0.0, 0.7, 0.0]]);
    assert_eq!(out.isect_points[0].len(), 2);
    assert_eq!(out.isect_points[1].len(), 2);
    // The segment runs along one edge of each polygon: exactly one
    // boundary flag per polygon.
    assert_eq!(flags_set(&out, 0), 1);
    assert_eq!(flags_set(&out, 1), 1);
}

#[test]
fn test_l_intersection_one_node_common() {
    let f1 = poly(
        &[0.0, 1.0, 1.0, 0.0],
        &[0.0, 0.0, 1.0, 1.0],
        &[0.0; 4],
    );
    let f2 = poly(
        &[0.0; 4],
        &[0.3, 1.0, 1.0, 0.3],
        &[0.0, 0.0, 1.0, 1.0],
    );
    let out = intersect_polygons_3d(&[f1, f2], &tol()).unwrap();

    assert_points(&out, &[[0.0, 0.3, 0.0], [0.0, 1.0, 0.0]]);
    assert_eq!(flags_set(&out, 0), 1);
    assert_eq!(flags_set(&out, 1), 1);
}

#[test]
fn test_l_intersection_extends_beyond_each_other() {
    let f1 = poly(
        &[0.0, 1.0, 1.0, 0.0],
        &[0.0, 0.0, 1.0, 1.0],
        &[0.0; 4],
    );
    let f2 = poly(
        &[0.0; 4],
        &[0.3, 1.5, 1.5, 0.3],
        &[0.0, 0.0, 1.0, 1.0],
    );
    let out = intersect_polygons_3d(&[f1, f2], &tol()).unwrap();

    assert_points(&out, &[[0.0, 0.3, 0.0], [0.0, 1.0, 0.0]]);
    assert_eq!(flags_set(&out, 0), 1);
    assert_eq!(flags_set(&out, 1), 1);
}

fn unit_square_z0() -> Polygon3<FracF64> {
    poly(
        &[0.0, 1.0, 1.0, 0.0],
        &[0.0, 0.0, 1.0, 1.0],
        &[0.0; 4],
    )
}

#[test]
fn test_t_intersection_within_polygon() {
    let f2 = poly(&[0.5, 0.5, 0.5], &[0.5, 0.5, 0.9], &[1.0, 0.0, 0.0]);
    let out = intersect_polygons_3d(&[unit_square_z0(), f2], &tol()).unwrap();

    assert_points(&out, &[[0.5, 0.5, 0.0], [0.5, 0.9, 0.0]]);
    assert_eq!(flags_set(&out, 0), 0);
    assert_eq!(flags_set(&out, 1), 1);
}

#[test]
fn test_t_intersection_one_outside_polygon() {
    let f2 = poly(&[0.5, 0.5, 0.5], &[0.5, 0.5, 1.9], &[1.0, 0.0, 0.0]);
    let out = intersect_polygons_3d(&[unit_square_z0(), f2], &tol()).unwrap();

    assert_points(&out, &[[0.5, 0.5, 0.0], [0.5, 1.0, 0.0]]);
    assert_eq!(flags_set(&out, 0), 0);
    assert_eq!(flags_set(&out, 1), 1);
}

#[test]
fn test_t_intersection_one_outside_one_on_polygon() {
    let f2 = poly(&[0.5, 0.5, 0.5], &[0.5, 0.0, 1.9], &[1.0, 0.0, 0.0]);
    let out = intersect_polygons_3d(&[unit_square_z0(), f2], &tol()).unwrap();

    assert_points(&out, &[[0.5, 0.0, 0.0], [0.5, 1.0, 0.0]]);
    assert_eq!(flags_set(&out, 0), 0);
    assert_eq!(flags_set(&out, 1), 1);
}

#[test]
fn test_t_intersection_reversed_order() {
    let f2 = poly(&[0.5, 0.5, 0.5], &[0.5, 0.0, 1.9], &[1.0, 0.0, 0.0]);
    let out = intersect_polygons_3d(&[f2, unit_square_z0()], &tol()).unwrap();

    assert_points(&out, &[[0.5, 0.0, 0.0], [0.5, 1.0, 0.0]]);
    assert_eq!(flags_set(&out, 0), 1);
    assert_eq!(flags_set(&out, 1), 0);
}

#[test]
fn test_t_intersection_both_endpoints_on_boundary() {
    // Both endpoints land on the square's edges, yet the segment
    // crosses its interior: no flag for the square, one for the
    // triangle whose edge carries the segment.
    let f2 = poly(&[0.5, 0.5, 0.5], &[0.5, 0.0, 1.0], &[1.0, 0.0, 0.0]);
    let out = intersect_polygons_3d(&[unit_square_z0(), f2], &tol()).unwrap();

    assert_points(&out, &[[0.5, 0.0, 0.0], [0.5, 1.0, 0.0]]);
    assert_eq!(flags_set(&out, 0), 0);
    assert_eq!(flags_set(&out, 1), 1);
}

#[test]
fn test_vertex_touch_collapses_to_one_point() {
    let triangle = poly(&[0.5, 0.5, 0.5], &[0.5, 0.0, 1.0], &[0.0, 1.0, 1.0]);
    let out = intersect_polygons_3d(&[unit_square_z0(), triangle], &tol()).unwrap();

    assert_points(&out, &[[0.5, 0.5, 0.0]]);
    assert_eq!(out.isect_points[0], vec![0]);
    assert_eq!(out.isect_points[1], vec![0]);
    // Interior of the square, vertex of the triangle.
    assert_eq!(out.on_boundary[0], vec![false]);
    assert_eq!(out.on_boundary[1], vec![true]);
}

#[test]
fn test_coplanar_overlap_aborts_aggregation() {
    let f1 = fracture_1();
    let f2 = poly(&[0.0, 2.0, 2.0, 0.0], &[0.0; 4], &[-1.0, -1.0, 1.0, 1.0]);
    let err = intersect_polygons_3d(&[f1, fracture_2(), f2], &tol()).unwrap_err();
    assert_eq!(
        err,
        GeometryError::UnsupportedConfiguration { first: 0, second: 2 }
    );
}

#[test]
fn test_degenerate_input_aborts_before_any_pair() {
    let collinear = poly(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]);
    let err = intersect_polygons_3d(&[fracture_1(), collinear], &tol()).unwrap_err();
    assert_eq!(
        err,
        GeometryError::DegenerateInput {
            index: 1,
            reason: "vertices are collinear",
        }
    );
}

#[test]
fn test_idempotence() {
    let polys = [
        fracture_1(),
        fracture_2(),
        poly(&[-1.0, 1.0, 1.0, -1.0], &[-1.0, -1.0, 1.0, 1.0], &[0.0; 4]),
    ];
    let a = intersect_polygons_3d(&polys, &tol()).unwrap();
    let b = intersect_polygons_3d(&polys, &tol()).unwrap();

    assert_eq!(a.points, b.points);
    assert_eq!(a.isect_points, b.isect_points);
    assert_eq!(a.on_boundary, b.on_boundary);
    assert_eq!(a.counterparts, b.counterparts);
}

#[test]
fn test_order_independence_under_shuffles() {
    let base = [
        fracture_1(),
        fracture_2(),
        poly(&[-1.0, 1.0, 1.0, -1.0], &[-1.0, -1.0, 1.0, 1.0], &[0.0; 4]),
    ];
    let reference = intersect_polygons_3d(&base, &tol()).unwrap();
    let mut ref_counts: Vec<usize> = reference.isect_points.iter().map(|v| v.len()).collect();
    ref_counts.sort();

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        let mut order: Vec<usize> = (0..base.len()).collect();
        order.shuffle(&mut rng);
        let shuffled: Vec<Polygon3<FracF64>> = order.iter().map(|&i| base[i].clone()).collect();

        let out = intersect_polygons_3d(&shuffled, &tol()).unwrap();
        assert_eq!(out.points.len(), reference.points.len());
        let mut counts: Vec<usize> = out.isect_points.iter().map(|v| v.len()).collect();
        counts.sort();
        assert_eq!(counts, ref_counts);
        for i in 0..base.len() {
            assert_eq!(
                out.isect_points[i].len(),
                reference.isect_points[order[i]].len()
            );
        }
    }
}

#[test]
fn test_sub_tolerance_jitter_does_not_change_topology() {
    let base = [
        fracture_1(),
        fracture_2(),
        poly(&[-1.0, 1.0, 1.0, -1.0], &[-1.0, -1.0, 1.0, 1.0], &[0.0; 4]),
    ];
    let mut rng = StdRng::seed_from_u64(7);
    let jittered: Vec<Polygon3<FracF64>> = base
        .iter()
        .map(|p| {
            Polygon::new(
                p.vertices()
                    .iter()
                    .map(|v| {
                        Point3::new(
                            v[0].0 + rng.random_range(-1e-12..1e-12),
                            v[1].0 + rng.random_range(-1e-12..1e-12),
                            v[2].0 + rng.random_range(-1e-12..1e-12),
                        )
                    })
                    .collect(),
            )
        })
        .collect();

    let out = intersect_polygons_3d(&jittered, &tol()).unwrap();
    assert_eq!(out.points.len(), 6);
    for i in 0..3 {
        assert_eq!(out.isect_points[i].len(), 4);
        assert_eq!(flags_set(&out, i), 0);
    }
}

#[test]
fn test_suggested_tolerance_scales_with_input() {
    let small = [fracture_1()];
    assert!((suggested_tolerance(&small).0 - 1e-8).abs() < 1e-20);

    let big = [poly(
        &[-100.0, 100.0, 100.0, -100.0],
        &[0.0; 4],
        &[-100.0, -100.0, 100.0, 100.0],
    )];
    assert!((suggested_tolerance(&big).0 - 1e-6).abs() < 1e-16);
}
