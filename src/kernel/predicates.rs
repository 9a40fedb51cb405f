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
    geometry::{
        point::{Point, Point2, Point3},
        polygon::{Polygon, newell_normal},
        vector::VectorOps,
    },
    numeric::scalar::Scalar,
};

/// Where a point sits relative to a polygon, assuming it already lies in
/// the polygon's plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointLocation {
    Outside,
    Inside,
    OnBoundary,
}

/// Coordinate-wise equality under a strict `< tol` comparison.
pub fn are_equal<T: Scalar, const N: usize>(p1: &Point<T, N>, p2: &Point<T, N>, tol: &T) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    for i in 0..N {
        if &(&p1.coords[i] - &p2.coords[i]).abs() >= tol {
            return false;
        }
    }
    true
}

/// `orient2d(a, b, c)`: twice the signed area of the triangle, positive
/// when `c` is left of `a -> b`.
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let abx = &b[0] - &a[0];
    let aby = &b[1] - &a[1];
    let acx = &c[0] - &a[0];
    let acy = &c[1] - &a[1];
    &(&abx * &acy) - &(&aby * &acx)
}

/// Squared distance from `p` to the segment `[a, b]` (clamped
/// projection), sqrt-free so the exact kernel stays exact.
pub fn point_segment_distance_squared<T: Scalar, const N: usize>(
    p: &Point<T, N>,
    a: &Point<T, N>,
    b: &Point<T, N>,
) -> T
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let mut len2 = T::zero();
    let mut proj = T::zero();
    for i in 0..N {
        let e = &b.coords[i] - &a.coords[i];
        let w = &p.coords[i] - &a.coords[i];
        len2 += &(&e * &e);
        proj += &(&e * &w);
    }
    if len2.is_zero() {
        return p.distance_squared_to(a);
    }

    let mut t = &proj / &len2;
    if t.is_negative() {
        t = T::zero();
    } else if t > T::one() {
        t = T::one();
    }

    let mut acc = T::zero();
    for i in 0..N {
        let e = &b.coords[i] - &a.coords[i];
        let closest = &a.coords[i] + &(&t * &e);
        let d = &p.coords[i] - &closest;
        acc += &(&d * &d);
    }
    acc
}

pub fn is_point_on_segment<T: Scalar, const N: usize>(
    p: &Point<T, N>,
    a: &Point<T, N>,
    b: &Point<T, N>,
    tol: &T,
) -> bool
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let d2 = point_segment_distance_squared(p, a, b);
    &d2 < &(tol * tol)
}

/// True when every point lies within `tol` of the Newell best-fit plane.
/// Collinear or near-degenerate sets fit any plane through them and are
/// vacuously planar; the polygon validation rejects those separately.
pub fn is_planar<T: Scalar>(points: &[Point3<T>], tol: &T) -> bool
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    if points.len() < 4 {
        return true;
    }
    let normal = newell_normal(points);
    let n2 = normal.norm_squared();
    if n2.is_zero() {
        return true;
    }

    let count: T = T::from(points.len() as i32);
    let mut acc = [T::zero(), T::zero(), T::zero()];
    for p in points {
        for i in 0..3 {
            acc[i] += &p.coords[i];
        }
    }
    let centroid = Point3::from(acc.map(|c| c / count.clone()));

    // |(p - c)·n| < tol * |n|, compared squared.
    let bound = &(tol * tol) * &n2;
    for p in points {
        let offset = centroid.vector_to(p);
        let e = offset.dot(&normal);
        let e2 = &e * &e;
        if &e2 >= &bound {
            return false;
        }
    }
    true
}

/// Classify `p` against a (possibly non-convex) polygon in the plane.
/// The near-edge test runs first so points within `tol` of the boundary
/// never fall through to the parity test, where round-off could put
/// them on either side.
pub fn point_in_polygon_2d<T: Scalar>(
    polygon: &Polygon<T, 2>,
    p: &Point2<T>,
    tol: &T,
) -> PointLocation
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let tol2 = tol * tol;
    for (a, b) in polygon.edges() {
        if &point_segment_distance_squared(p, a, b) < &tol2 {
            return PointLocation::OnBoundary;
        }
    }

    // Crossing-number parity against a +x ray.
    let mut inside = false;
    for (a, b) in polygon.edges() {
        if (&a[1] > &p[1]) != (&b[1] > &p[1]) {
            let dy = &b[1] - &a[1];
            let t = &(&p[1] - &a[1]) / &dy;
            let xi = &a[0] + &(&t * &(&b[0] - &a[0]));
            if &p[0] < &xi {
                inside = !inside;
            }
        }
    }
    if inside {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

/// Overlap of two intervals on a shared line, given by their endpoint
/// parameters in either order. Endpoints that only touch within `tol`
/// still count: the result collapses to the zero-length touch point.
pub fn segment_segment_overlap_1d<T: Scalar>(
    a0: &T,
    a1: &T,
    b0: &T,
    b1: &T,
    tol: &T,
) -> Option<(T, T)> {
    let (alo, ahi) = if a0 <= a1 { (a0, a1) } else { (a1, a0) };
    let (blo, bhi) = if b0 <= b1 { (b0, b1) } else { (b1, b0) };

    let lo = if alo >= blo { alo.clone() } else { blo.clone() };
    let hi = if ahi <= bhi { ahi.clone() } else { bhi.clone() };

    if lo <= hi {
        return Some((lo, hi));
    }
    let gap = lo.clone() - hi.clone();
    if &gap > tol {
        return None;
    }
    let mid = (lo + hi) / T::from(2);
    Some((mid.clone(), mid))
}
