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
    geometry::{point::Point3, polygon::Polygon, segment::Segment3},
    kernel::predicates::point_segment_distance_squared,
    numeric::scalar::Scalar,
};

/// True when `p` lies within `tol` of some edge (or vertex) of the
/// polygon's closed loop. Distances are taken in 3D, so the point need
/// not be pre-projected into the polygon's plane.
pub fn point_on_polygon_boundary<T: Scalar>(
    polygon: &Polygon<T, 3>,
    p: &Point3<T>,
    tol: &T,
) -> bool
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let tol2 = tol * tol;
    polygon
        .edges()
        .any(|(a, b)| &point_segment_distance_squared(p, a, b) < &tol2)
}

/// Whether an intersection segment runs along the polygon's boundary.
/// Both endpoints touching edges is not enough (an interior chord of a
/// rectangle does that); the midpoint must sit on the boundary too. A
/// point may be boundary on one polygon of a pair and interior on the
/// other.
pub fn segment_on_polygon_boundary<T: Scalar>(
    polygon: &Polygon<T, 3>,
    segment: &Segment3<T>,
    tol: &T,
) -> bool
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    point_on_polygon_boundary(polygon, &segment.a, tol)
        && point_on_polygon_boundary(polygon, &segment.b, tol)
        && point_on_polygon_boundary(polygon, &segment.midpoint(), tol)
}
