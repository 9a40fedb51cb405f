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
    geometry::{
        point::Point,
        polygon::{Polygon, newell_normal},
        vector::VectorOps,
    },
    kernel::predicates::{are_equal, is_planar},
    numeric::scalar::Scalar,
};

/// Rejects polygons the intersection machinery cannot handle, before
/// any pair is attempted. `index` is the polygon's position in the
/// caller's input, echoed in the error.
pub fn validate_polygon<T: Scalar>(
    polygon: &Polygon<T, 3>,
    index: usize,
    tol: &T,
) -> Result<(), GeometryError>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    if count_distinct(polygon, tol) < 3 {
        return Err(GeometryError::DegenerateInput {
            index,
            reason: "fewer than 3 distinct vertices",
        });
    }

    let normal = newell_normal(polygon.vertices());
    if &normal.norm_squared() < &(tol * tol) {
        return Err(GeometryError::DegenerateInput {
            index,
            reason: "vertices are collinear",
        });
    }

    if !is_planar(polygon.vertices(), tol) {
        return Err(GeometryError::DegenerateInput {
            index,
            reason: "vertices are not coplanar within tolerance",
        });
    }
    Ok(())
}

/// 2D counterpart used by the batch segment clipper.
pub fn validate_polygon_2d<T: Scalar>(
    polygon: &Polygon<T, 2>,
    tol: &T,
) -> Result<(), GeometryError>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    if count_distinct(polygon, tol) < 3 {
        return Err(GeometryError::DegenerateInput {
            index: 0,
            reason: "fewer than 3 distinct vertices",
        });
    }

    // Shoelace accumulation; zero area means a collapsed loop.
    let verts = polygon.vertices();
    let mut area2 = T::zero();
    for i in 0..verts.len() {
        let a = &verts[i];
        let b = &verts[(i + 1) % verts.len()];
        let term = &(&a[0] * &b[1]) - &(&a[1] * &b[0]);
        area2 += &term;
    }
    if &area2.abs() < tol {
        return Err(GeometryError::DegenerateInput {
            index: 0,
            reason: "vertices are collinear",
        });
    }
    Ok(())
}

fn count_distinct<T: Scalar, const N: usize>(polygon: &Polygon<T, N>, tol: &T) -> usize
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    let mut distinct: Vec<&Point<T, N>> = Vec::new();
    for v in polygon.vertices() {
        if !distinct.iter().any(|d| are_equal(*d, v, tol)) {
            distinct.push(v);
        }
    }
    distinct.len()
}
