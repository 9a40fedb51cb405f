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
        point::Point3,
        vector::{Vector, Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Plane in normal form `n·x + d = 0`, with `n` a unit vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane<T: Scalar> {
    pub normal: Vector3<T>,
    pub d: T,
}

/// Index of the largest-magnitude component; first wins ties.
pub fn dominant_axis<T: Scalar>(v: &Vector<T, 3>) -> usize {
    let mut k = 0;
    for i in 1..3 {
        if v[i].abs() > v[k].abs() {
            k = i;
        }
    }
    k
}

impl<T: Scalar> Plane<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    pub fn new(normal: Vector3<T>, d: T) -> Self {
        Plane { normal, d }
    }

    pub fn signed_distance(&self, p: &Point3<T>) -> T {
        &self.normal.dot(&p.as_vector()) + &self.d
    }

    /// Line shared by two planes, as an anchor point plus a unit
    /// direction, or `None` when the normals are parallel within `tol`.
    ///
    /// The anchor is found by zeroing the coordinate along the dominant
    /// direction axis and solving the remaining 2x2 system; its
    /// determinant is that same cross-product component, so it cannot
    /// vanish once the parallel test has passed.
    pub fn intersection_line(&self, other: &Self, tol: &T) -> Option<(Point3<T>, Vector3<T>)> {
        let cross = self.normal.cross(&other.normal);
        let sin2 = cross.norm_squared();
        if &sin2 < &(tol * tol) {
            return None;
        }
        let dir = cross.normalized();

        let k = dominant_axis(&dir);
        let (i, j) = match k {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };

        let n1 = &self.normal;
        let n2 = &other.normal;
        let det = &(&n1[i] * &n2[j]) - &(&n1[j] * &n2[i]);
        let xi = &(&(&n1[j] * &other.d) - &(&n2[j] * &self.d)) / &det;
        let xj = &(&(&n2[i] * &self.d) - &(&n1[i] * &other.d)) / &det;

        let mut coords = [T::zero(), T::zero(), T::zero()];
        coords[i] = xi;
        coords[j] = xj;
        Some((Point3::from(coords), dir))
    }
}
