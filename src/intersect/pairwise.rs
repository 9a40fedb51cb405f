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

use std::ops::{Add, Div, Mul, Sub};

use crate::{
    error::GeometryError,
    geometry::{point::Point2, polygon::Polygon, segment::Segment3, vector::VectorOps},
    intersect::{clip::clip_line_to_polygon, validate::validate_polygon},
    kernel::predicates::{
        PointLocation, orient2d, point_in_polygon_2d, segment_segment_overlap_1d,
    },
    numeric::scalar::Scalar,
};

/// Outcome of intersecting one polygon pair. The aggregator consumes
/// this exhaustively; only the public wrapper turns `CoplanarOverlap`
/// into an error.
#[derive(Clone, Debug, PartialEq)]
pub enum PairIntersection<T: Scalar> {
    Empty,
    Segment(Segment3<T>),
    CoplanarOverlap,
}

/// Intersection segment of two polygons, `Ok(None)` when they miss each
/// other, `Err(UnsupportedConfiguration)` when they are coplanar with
/// overlapping area. Vertex or edge touches are `Ok(Some(..))` with a
/// zero-length segment.
pub fn polygon_segment_intersect<T: Scalar>(
    poly_a: &Polygon<T, 3>,
    poly_b: &Polygon<T, 3>,
    tol: &T,
) -> Result<Option<Segment3<T>>, GeometryError>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    validate_polygon(poly_a, 0, tol)?;
    validate_polygon(poly_b, 1, tol)?;
    match polygon_pair_intersection(poly_a, poly_b, tol) {
        PairIntersection::Empty => Ok(None),
        PairIntersection::Segment(seg) => Ok(Some(seg)),
        PairIntersection::CoplanarOverlap => Err(GeometryError::UnsupportedConfiguration {
            first: 0,
            second: 1,
        }),
    }
}

/// The tagged pairwise step. Expects validated polygons.
pub fn polygon_pair_intersection<T: Scalar>(
    poly_a: &Polygon<T, 3>,
    poly_b: &Polygon<T, 3>,
    tol: &T,
) -> PairIntersection<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let plane_a = poly_a.plane();
    let plane_b = poly_b.plane();

    let Some((anchor, dir)) = plane_a.intersection_line(&plane_b, tol) else {
        // Parallel planes: coincident iff some vertex of B reaches A's
        // plane within tol.
        let coincident = poly_b
            .vertices()
            .iter()
            .any(|v| &plane_a.signed_distance(v).abs() < tol);
        if coincident && coplanar_overlap(poly_a, poly_b, tol) {
            return PairIntersection::CoplanarOverlap;
        }
        return PairIntersection::Empty;
    };

    let ints_a = clip_line_to_polygon(poly_a, &anchor, &dir, tol);
    if ints_a.is_empty() {
        return PairIntersection::Empty;
    }
    let ints_b = clip_line_to_polygon(poly_b, &anchor, &dir, tol);

    // Both interval lists live on the same parameterized line; the
    // record is the longest 1D overlap (first wins ties), so a pair of
    // non-convex polygons still yields exactly one segment.
    let mut best: Option<(T, T)> = None;
    for (a0, a1) in &ints_a {
        for (b0, b1) in &ints_b {
            if let Some((lo, hi)) = segment_segment_overlap_1d(a0, a1, b0, b1, tol) {
                let longer = match &best {
                    None => true,
                    Some((c0, c1)) => {
                        let cur = &(&hi - &lo);
                        let prev = &(c1 - c0);
                        cur > prev
                    }
                };
                if longer {
                    best = Some((lo, hi));
                }
            }
        }
    }

    match best {
        None => PairIntersection::Empty,
        Some((lo, hi)) => {
            let pa = anchor.add_vector(&dir.scale(&lo));
            let pb = anchor.add_vector(&dir.scale(&hi));
            PairIntersection::Segment(Segment3::new(&pa, &pb))
        }
    }
}

/// Area-overlap test for coplanar polygons. Samples each polygon's
/// vertices, edge midpoints and centroid for strict containment in the
/// other and checks for proper edge crossings; boundary touches (shared
/// edge or vertex) are not overlap.
fn coplanar_overlap<T: Scalar>(poly_a: &Polygon<T, 3>, poly_b: &Polygon<T, 3>, tol: &T) -> bool
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let axes = poly_a.projection_axes();
    let a2 = poly_a.project_2d(axes);
    let b2 = poly_b.project_2d(axes);

    if any_sample_inside(&a2, &b2, tol) || any_sample_inside(&b2, &a2, tol) {
        return true;
    }

    // Proper crossings: each edge's endpoints strictly straddle the
    // other edge's line, both ways.
    for (a0, a1) in a2.edges() {
        for (b0, b1) in b2.edges() {
            let o1 = orient2d(a0, a1, b0);
            let o2 = orient2d(a0, a1, b1);
            let o3 = orient2d(b0, b1, a0);
            let o4 = orient2d(b0, b1, a1);
            let straddle_b = (&o1 * &o2).is_negative() && &o1.abs() > tol && &o2.abs() > tol;
            let straddle_a = (&o3 * &o4).is_negative() && &o3.abs() > tol && &o4.abs() > tol;
            if straddle_a && straddle_b {
                return true;
            }
        }
    }
    false
}

fn any_sample_inside<T: Scalar>(probe: &Polygon<T, 2>, target: &Polygon<T, 2>, tol: &T) -> bool
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let mut samples: Vec<Point2<T>> = probe.vertices().to_vec();
    for (a, b) in probe.edges() {
        samples.push(a.midpoint(b));
    }
    samples.push(probe.centroid());

    samples
        .iter()
        .any(|p| point_in_polygon_2d(target, p, tol) == PointLocation::Inside)
}
