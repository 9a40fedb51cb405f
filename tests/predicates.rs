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

use fracnet::geometry::polygon::newell_normal;
use fracnet::geometry::{Point2, Point3, Polygon};
use fracnet::kernel::{
    PointLocation, are_equal, is_planar, orient2d, point_in_polygon_2d,
    point_segment_distance_squared, segment_segment_overlap_1d,
};
use fracnet::numeric::frac_f64::FracF64;
use fracnet::numeric::scalar::Scalar;

fn tol() -> FracF64 {
    FracF64::default_tolerance()
}

fn unit_square() -> Polygon<FracF64, 2> {
    Polygon::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ])
}

#[test]
fn test_are_equal_within_tolerance() {
    let p1 = Point2::<FracF64>::new(1.0, 2.0);
    let p2 = Point2::new(1.0 + 0.5e-8, 2.0);
    assert!(are_equal(&p1, &p2, &tol()));

    let p3 = Point2::new(1.0 + 2.0e-8, 2.0);
    assert!(!are_equal(&p1, &p3, &tol()));
}

#[test]
fn test_are_equal_is_strict_at_the_boundary() {
    // A coordinate gap of exactly tol must not merge.
    let p1 = Point2::<FracF64>::new(0.0, 0.0);
    let p2 = Point2::new(1.0e-8, 0.0);
    assert!(!are_equal(&p1, &p2, &tol()));

    let p3 = Point2::new(0.9e-8, 0.0);
    assert!(are_equal(&p1, &p3, &tol()));
}

#[test]
fn test_orient2d_sign() {
    let a = Point2::<FracF64>::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    let left = Point2::new(0.0, 1.0);
    let right = Point2::new(0.0, -1.0);
    assert!(orient2d(&a, &b, &left).0 > 0.0);
    assert!(orient2d(&a, &b, &right).0 < 0.0);
}

#[test]
fn test_point_segment_distance() {
    let a = Point2::<FracF64>::new(0.0, 0.0);
    let b = Point2::new(2.0, 0.0);

    let above = Point2::new(1.0, 1.0);
    assert!((point_segment_distance_squared(&above, &a, &b).0 - 1.0).abs() < 1e-12);

    // Projection clamps to the nearer endpoint.
    let past = Point2::new(3.0, 1.0);
    assert!((point_segment_distance_squared(&past, &a, &b).0 - 2.0).abs() < 1e-12);
}

#[test]
fn test_is_planar() {
    let square = vec![
        Point3::<FracF64>::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    assert!(is_planar(&square, &tol()));

    let twisted = vec![
        Point3::<FracF64>::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.1),
        Point3::new(0.0, 1.0, 0.0),
    ];
    assert!(!is_planar(&twisted, &tol()));

    // Collinear points fit any plane through their line.
    let collinear = vec![
        Point3::<FracF64>::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, 2.0, 2.0),
        Point3::new(3.0, 3.0, 3.0),
    ];
    assert!(is_planar(&collinear, &tol()));
}

#[test]
fn test_newell_normal_of_ccw_square() {
    let square = vec![
        Point3::<FracF64>::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let n = newell_normal(&square);
    assert!((n[0].0).abs() < 1e-12);
    assert!((n[1].0).abs() < 1e-12);
    assert!((n[2].0 - 2.0).abs() < 1e-12);
}

#[test]
fn test_point_in_polygon_basic() {
    let square = unit_square();
    let t = tol();
    assert_eq!(
        point_in_polygon_2d(&square, &Point2::new(0.5, 0.5), &t),
        PointLocation::Inside
    );
    assert_eq!(
        point_in_polygon_2d(&square, &Point2::new(1.5, 0.5), &t),
        PointLocation::Outside
    );
    assert_eq!(
        point_in_polygon_2d(&square, &Point2::new(1.0, 0.5), &t),
        PointLocation::OnBoundary
    );
    assert_eq!(
        point_in_polygon_2d(&square, &Point2::new(0.0, 0.0), &t),
        PointLocation::OnBoundary
    );
}

#[test]
fn test_point_in_polygon_near_edge_wins() {
    // Within tol of an edge the parity test never runs, so the side
    // the round-off lands on cannot flip the answer.
    let square = unit_square();
    let t = tol();
    assert_eq!(
        point_in_polygon_2d(&square, &Point2::new(0.5, 1e-9), &t),
        PointLocation::OnBoundary
    );
    assert_eq!(
        point_in_polygon_2d(&square, &Point2::new(0.5, -1e-9), &t),
        PointLocation::OnBoundary
    );
}

#[test]
fn test_point_in_polygon_non_convex() {
    // Notched polygon from the clipping fixtures.
    let poly = Polygon::new(vec![
        Point2::<FracF64>::new(0.0, 0.0),
        Point2::new(0.5, 0.0),
        Point2::new(0.75, 0.25),
        Point2::new(1.0, 0.0),
        Point2::new(1.5, 0.0),
        Point2::new(1.5, 1.0),
        Point2::new(0.0, 1.0),
    ]);
    let t = tol();
    assert_eq!(
        point_in_polygon_2d(&poly, &Point2::new(0.75, 0.5), &t),
        PointLocation::Inside
    );
    // Inside the notch, below both notch edges.
    assert_eq!(
        point_in_polygon_2d(&poly, &Point2::new(0.75, 0.1), &t),
        PointLocation::Outside
    );
    assert_eq!(
        point_in_polygon_2d(&poly, &Point2::new(0.75, 0.25), &t),
        PointLocation::OnBoundary
    );
}

#[test]
fn test_overlap_1d_proper() {
    let t = tol();
    let ov = segment_segment_overlap_1d(
        &FracF64(0.0),
        &FracF64(2.0),
        &FracF64(1.0),
        &FracF64(3.0),
        &t,
    );
    let (lo, hi) = ov.expect("overlap");
    assert!((lo.0 - 1.0).abs() < 1e-12);
    assert!((hi.0 - 2.0).abs() < 1e-12);
}

#[test]
fn test_overlap_1d_unordered_inputs() {
    let t = tol();
    let ov = segment_segment_overlap_1d(
        &FracF64(2.0),
        &FracF64(0.0),
        &FracF64(3.0),
        &FracF64(1.0),
        &t,
    );
    let (lo, hi) = ov.expect("overlap");
    assert!((lo.0 - 1.0).abs() < 1e-12);
    assert!((hi.0 - 2.0).abs() < 1e-12);
}

#[test]
fn test_overlap_1d_disjoint() {
    let t = tol();
    let ov = segment_segment_overlap_1d(
        &FracF64(0.0),
        &FracF64(1.0),
        &FracF64(2.0),
        &FracF64(3.0),
        &t,
    );
    assert!(ov.is_none());
}

#[test]
fn test_overlap_1d_endpoint_touch_is_degenerate_overlap() {
    let t = tol();
    let ov = segment_segment_overlap_1d(
        &FracF64(0.0),
        &FracF64(1.0),
        &FracF64(1.0),
        &FracF64(2.0),
        &t,
    );
    let (lo, hi) = ov.expect("touch is a zero-length overlap, not none");
    assert_eq!(lo, hi);
    assert!((lo.0 - 1.0).abs() < 1e-12);
}

#[test]
fn test_overlap_1d_near_touch_within_tolerance() {
    let t = tol();
    // Gap of half a tolerance: still a touch.
    let ov = segment_segment_overlap_1d(
        &FracF64(0.0),
        &FracF64(1.0),
        &FracF64(1.0 + 0.5e-8),
        &FracF64(2.0),
        &t,
    );
    let (lo, hi) = ov.expect("sub-tolerance gap counts as touching");
    assert_eq!(lo, hi);

    // Gap of two tolerances: disjoint.
    let ov = segment_segment_overlap_1d(
        &FracF64(0.0),
        &FracF64(1.0),
        &FracF64(1.0 + 2e-8),
        &FracF64(2.0),
        &t,
    );
    assert!(ov.is_none());
}
