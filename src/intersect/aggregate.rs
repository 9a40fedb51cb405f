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

use log::debug;

use crate::{
    error::GeometryError,
    geometry::{point::Point3, polygon::Polygon},
    intersect::{
        boundary::segment_on_polygon_boundary,
        pairwise::{PairIntersection, polygon_pair_intersection},
        validate::validate_polygon,
    },
    numeric::scalar::Scalar,
};

/// Everything the pairwise sweep produced, assembled for mesh topology
/// construction downstream.
///
/// Records from different pairs are kept independent even when their
/// endpoints coincide: merging nearly-equal coordinates across pairs is
/// not transitive and belongs to the consumer, which can use
/// `counterparts` to decide. Within one record, endpoints closer than
/// `tol` collapse to a single stored point (a touch intersection).
#[derive(Clone, Debug)]
pub struct GlobalIntersections<T: Scalar> {
    /// All intersection points, in pair-sweep order.
    pub points: Vec<Point3<T>>,
    /// Per input polygon: indices into `points`, two per crossing
    /// record (in segment order) and one per touch record.
    pub isect_points: Vec<Vec<usize>>,
    /// Per input polygon: one flag per record, set when the segment
    /// runs along that polygon's boundary.
    pub on_boundary: Vec<Vec<bool>>,
    /// Per input polygon: the other polygon of each record.
    pub counterparts: Vec<Vec<usize>>,
}

impl<T: Scalar> GlobalIntersections<T> {
    fn with_polygons(n: usize) -> Self {
        GlobalIntersections {
            points: Vec::new(),
            isect_points: vec![Vec::new(); n],
            on_boundary: vec![Vec::new(); n],
            counterparts: vec![Vec::new(); n],
        }
    }
}

/// Intersects every unordered pair of the input polygons and assembles
/// the global record set. Pure function of its inputs: same polygons
/// and tolerance, same output, including ordering.
///
/// Fails fast with [`GeometryError::DegenerateInput`] before any pair
/// is attempted, and aborts on the first coplanar-overlapping pair —
/// there is no partial result, since a silently dropped record would
/// corrupt the downstream mesh topology.
pub fn intersect_polygons_3d<T: Scalar>(
    polygons: &[Polygon<T, 3>],
    tol: &T,
) -> Result<GlobalIntersections<T>, GeometryError>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    for (i, polygon) in polygons.iter().enumerate() {
        validate_polygon(polygon, i, tol)?;
    }

    let n = polygons.len();
    let mut out = GlobalIntersections::with_polygons(n);
    let tol2 = tol * tol;

    for i in 0..n {
        for j in (i + 1)..n {
            match polygon_pair_intersection(&polygons[i], &polygons[j], tol) {
                PairIntersection::Empty => {}
                PairIntersection::CoplanarOverlap => {
                    debug!("pair ({i}, {j}): coplanar overlap, aborting");
                    return Err(GeometryError::UnsupportedConfiguration {
                        first: i,
                        second: j,
                    });
                }
                PairIntersection::Segment(seg) => {
                    let touch = &seg.length_squared() < &tol2;
                    let base = out.points.len();
                    let indices: Vec<usize> = if touch {
                        out.points.push(seg.a.clone());
                        vec![base]
                    } else {
                        out.points.push(seg.a.clone());
                        out.points.push(seg.b.clone());
                        vec![base, base + 1]
                    };
                    debug!(
                        "pair ({i}, {j}): {} point(s) at {:?}",
                        indices.len(),
                        &out.points[base..]
                    );

                    for (own, other) in [(i, j), (j, i)] {
                        out.isect_points[own].extend(indices.iter().copied());
                        out.on_boundary[own].push(segment_on_polygon_boundary(
                            &polygons[own],
                            &seg,
                            tol,
                        ));
                        out.counterparts[own].push(other);
                    }
                }
            }
        }
    }

    Ok(out)
}

/// Default tolerance scaled to the coordinate magnitude of the input,
/// for callers that do not track a tolerance of their own.
pub fn suggested_tolerance<T: Scalar>(polygons: &[Polygon<T, 3>]) -> T {
    let mut scale = T::one();
    for polygon in polygons {
        for v in polygon.vertices() {
            for c in v.coords() {
                let m = c.abs();
                if m > scale {
                    scale = m;
                }
            }
        }
    }
    T::default_tolerance() * scale
}
