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

use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Sub},
};

use log::trace;

use crate::{
    error::GeometryError,
    geometry::{
        point::{Point2, Point3},
        polygon::{Polygon, project_point},
        segment::IndexSegment,
        vector::{Vector2, Vector3, VectorOps},
    },
    intersect::{registry::PointRegistry, validate::validate_polygon_2d},
    kernel::predicates::{PointLocation, point_in_polygon_2d},
    numeric::scalar::Scalar,
};

/// Clips a batch of labeled segments against one (possibly non-convex)
/// polygon, keeping the parts that lie inside or on the boundary.
///
/// `lines` index into `points`; the returned segments index into the
/// returned pool, which is deduplicated by coordinate so sub-segments
/// from different input lines share endpoint indices.
pub fn intersect_polygon_lines<T: Scalar>(
    polygon: &Polygon<T, 2>,
    points: &[Point2<T>],
    lines: &[IndexSegment],
    tol: &T,
) -> Result<(Vec<Point2<T>>, Vec<IndexSegment>), GeometryError>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    validate_polygon_2d(polygon, tol)?;

    let mut registry = PointRegistry::new(tol.clone());
    let mut kept_lines: Vec<IndexSegment> = Vec::new();

    for line in lines {
        let a = &points[line.a];
        let b = &points[line.b];
        let dir = a.vector_to(b);
        let len = dir.norm();
        if &len < tol {
            trace!("dropping zero-length input segment {line:?}");
            continue;
        }
        let param_tol = tol / &len;

        let mut cuts: Vec<T> = Vec::new();
        cuts.push(T::zero());
        cuts.push(T::one());
        let lo = -param_tol.clone();
        let hi = &T::one() + &param_tol;
        for t in line_cut_params(polygon.vertices(), a, &dir, tol) {
            if &t < &lo || &t > &hi {
                continue;
            }
            cuts.push(clamp01(t));
        }
        sort_dedup(&mut cuts, &param_tol);

        for (t0, t1) in kept_intervals(&cuts, polygon, a, &dir, tol, false) {
            let pa = point_at(a, &dir, &t0);
            let pb = point_at(a, &dir, &t1);
            let ia = registry.insert(pa);
            let ib = registry.insert(pb);
            kept_lines.push(IndexSegment::new(ia, ib));
        }
    }

    Ok((registry.into_points(), kept_lines))
}

/// Clips the infinite line `anchor + t*dir` (with `dir` a unit vector,
/// so `t` is arc length) against a polygon, in the polygon's plane.
/// Returns the kept parameter intervals in increasing order; isolated
/// touch points come back as zero-width intervals.
pub(crate) fn clip_line_to_polygon<T: Scalar>(
    polygon: &Polygon<T, 3>,
    anchor: &Point3<T>,
    dir: &Vector3<T>,
    tol: &T,
) -> Vec<(T, T)>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let axes = polygon.projection_axes();
    let poly2 = polygon.project_2d(axes);
    let p2 = project_point(anchor, axes);
    // Dropping the dominant normal axis keeps the line parameter intact:
    // the projection is linear and dir spans the plane, so each cut's t
    // is the 3D arc-length parameter, not an approximation of it.
    let r2 = Vector2::from_vals([dir[axes[0]].clone(), dir[axes[1]].clone()]);

    let mut cuts = line_cut_params(poly2.vertices(), &p2, &r2, tol);
    sort_dedup(&mut cuts, tol);

    kept_intervals(&cuts, &poly2, &p2, &r2, tol, true)
}

/// Parameters along `p + t*dir` where the line meets the loop's edges.
/// Edges collinear with the line contribute the parameters of both of
/// their endpoints; so does any vertex within `tol` of the line, which
/// keeps exact vertex-on-line configurations from being dropped by the
/// edge test's parameter window.
fn line_cut_params<T: Scalar>(
    verts: &[Point2<T>],
    p: &Point2<T>,
    dir: &Vector2<T>,
    tol: &T,
) -> Vec<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let mut cuts: Vec<T> = Vec::new();
    let r2 = dir.norm_squared();
    let off_bound = &(tol * tol) * &r2;

    let n = verts.len();
    for i in 0..n {
        let c = &verts[i];
        let d = &verts[(i + 1) % n];
        let e = c.vector_to(d);
        let e_len = e.norm();
        if e_len.is_zero() {
            continue;
        }
        let w = p.vector_to(c);

        let denom = dir.cross(&e);
        if &denom.abs() < &(tol * &e_len) {
            // Parallel edge; collinear iff `c` sits on the line.
            let off = w.cross(dir);
            if &(&off * &off) < &off_bound {
                cuts.push(&w.dot(dir) / &r2);
                let wd = p.vector_to(d);
                cuts.push(&wd.dot(dir) / &r2);
            }
            continue;
        }

        let s = &w.cross(dir) / &denom;
        let s_tol = tol / &e_len;
        let s_lo = -s_tol.clone();
        let s_hi = &T::one() + &s_tol;
        if &s >= &s_lo && &s <= &s_hi {
            cuts.push(&w.cross(&e) / &denom);
        }
    }

    for v in verts {
        let w = p.vector_to(v);
        let off = w.cross(dir);
        if &(&off * &off) < &off_bound {
            cuts.push(&w.dot(dir) / &r2);
        }
    }

    cuts
}

/// Midpoint-classifies the intervals between consecutive cuts and keeps
/// the ones inside or on the boundary, merging adjacent survivors. With
/// `touches` set and nothing surviving, cut points that themselves lie
/// on the polygon come back as zero-width intervals (single-point
/// touches); the batch clipper leaves it unset and drops grazing
/// segments outright.
fn kept_intervals<T: Scalar>(
    cuts: &[T],
    polygon: &Polygon<T, 2>,
    p: &Point2<T>,
    dir: &Vector2<T>,
    tol: &T,
    touches: bool,
) -> Vec<(T, T)>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let mut kept: Vec<(T, T)> = Vec::new();

    for win in cuts.windows(2) {
        let mid = (&win[0] + &win[1]) / T::from(2);
        let at = point_at(p, dir, &mid);
        if point_in_polygon_2d(polygon, &at, tol) != PointLocation::Outside {
            if let Some(last) = kept.last_mut() {
                if last.1 == win[0] {
                    last.1 = win[1].clone();
                    continue;
                }
            }
            kept.push((win[0].clone(), win[1].clone()));
        }
    }

    if touches && kept.is_empty() {
        for t in cuts {
            let at = point_at(p, dir, t);
            if point_in_polygon_2d(polygon, &at, tol) != PointLocation::Outside {
                kept.push((t.clone(), t.clone()));
            }
        }
    }

    kept
}

fn point_at<T: Scalar>(p: &Point2<T>, dir: &Vector2<T>, t: &T) -> Point2<T>
where
    for<'a> &'a T: Add<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    Point2 {
        coords: [&p[0] + &(t * &dir[0]), &p[1] + &(t * &dir[1])],
    }
}

fn clamp01<T: Scalar>(t: T) -> T {
    if t.is_negative() {
        T::zero()
    } else if t > T::one() {
        T::one()
    } else {
        t
    }
}

fn sort_dedup<T: Scalar>(cuts: &mut Vec<T>, tol: &T)
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    cuts.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
    let mut uniq: Vec<T> = Vec::new();
    for t in cuts.drain(..) {
        let merged = uniq.last().map_or(false, |u| &(&t - u) <= tol);
        if !merged {
            uniq.push(t);
        }
    }
    *cuts = uniq;
}
