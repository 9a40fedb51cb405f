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
    array::from_fn,
    ops::{Add, Div, Mul, Sub},
};

use crate::{
    geometry::{
        plane::{Plane, dominant_axis},
        point::{Point, Point2, Point3},
        vector::{Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// An ordered vertex loop, implicitly closed. Vertices are taken as-is;
/// planarity and non-degeneracy are checked by [`Polygon::validate`]
/// at the engine entry points, not at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<T: Scalar, const N: usize> {
    verts: Vec<Point<T, N>>,
}

impl<T: Scalar, const N: usize> Polygon<T, N> {
    pub fn new(verts: Vec<Point<T, N>>) -> Self {
        Polygon { verts }
    }

    pub fn vertices(&self) -> &[Point<T, N>] {
        &self.verts
    }

    pub fn len(&self) -> usize {
        self.verts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Edges of the closed loop, last vertex back to first included.
    pub fn edges(&self) -> impl Iterator<Item = (&Point<T, N>, &Point<T, N>)> {
        let n = self.verts.len();
        (0..n).map(move |i| (&self.verts[i], &self.verts[(i + 1) % n]))
    }

    pub fn centroid(&self) -> Point<T, N>
    where
        for<'a> &'a T: Add<&'a T, Output = T>,
    {
        let count: T = T::from(self.verts.len() as i32);
        let mut acc = [(); N].map(|_| T::zero());
        for v in &self.verts {
            for i in 0..N {
                acc[i] += &v.coords[i];
            }
        }
        Point {
            coords: acc.map(|c| c / count.clone()),
        }
    }
}

/// Normal by Newell accumulation over the whole loop; robust to locally
/// collinear vertex triples. The result is unnormalized (its norm is
/// twice the enclosed area).
pub fn newell_normal<T: Scalar>(verts: &[Point3<T>]) -> Vector3<T>
where
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let n = verts.len();
    let mut acc = [T::zero(), T::zero(), T::zero()];
    for i in 0..n {
        let p = &verts[i];
        let q = &verts[(i + 1) % n];
        acc[0] += &(&(&p[1] - &q[1]) * &(&p[2] + &q[2]));
        acc[1] += &(&(&p[2] - &q[2]) * &(&p[0] + &q[0]));
        acc[2] += &(&(&p[0] - &q[0]) * &(&p[1] + &q[1]));
    }
    Vector3 { coords: acc }
}

impl<T: Scalar> Polygon<T, 3>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    pub fn newell_normal(&self) -> Vector3<T> {
        newell_normal(&self.verts)
    }

    /// Unit normal; see [`newell_normal`] for the sign convention.
    pub fn normal(&self) -> Vector3<T> {
        self.newell_normal().normalized()
    }

    /// Supporting plane through the centroid. Callers must have
    /// validated the polygon; a degenerate loop has no plane.
    pub fn plane(&self) -> Plane<T> {
        let normal = self.normal();
        let d = -normal.dot(&self.centroid().as_vector());
        Plane::new(normal, d)
    }

    /// The two coordinate axes spanning the projection plane (the
    /// dominant normal axis is dropped), in increasing order.
    pub fn projection_axes(&self) -> [usize; 2] {
        match dominant_axis(&self.newell_normal()) {
            0 => [1, 2],
            1 => [0, 2],
            _ => [0, 1],
        }
    }

    pub fn project_2d(&self, axes: [usize; 2]) -> Polygon<T, 2> {
        Polygon::new(self.verts.iter().map(|v| project_point(v, axes)).collect())
    }
}

pub fn project_point<T: Scalar>(p: &Point3<T>, axes: [usize; 2]) -> Point2<T> {
    Point2 {
        coords: from_fn(|i| p[axes[i]].clone()),
    }
}

pub type Polygon2<T> = Polygon<T, 2>;
pub type Polygon3<T> = Polygon<T, 3>;
