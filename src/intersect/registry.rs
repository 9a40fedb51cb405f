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

use std::ops::Sub;

use crate::{geometry::point::Point, kernel::predicates::are_equal, numeric::scalar::Scalar};

/// Deduplicating point pool with tolerance-based equality.
///
/// Tolerance closeness is not an equivalence relation, so the policy is
/// first-seen-representative: an inserted point is matched against the
/// stored points in insertion order and the first one within `tol`
/// wins. No transitive closure — a chain A≈B, B≈C with A̸≈C keeps A as
/// the entry for B and stores C fresh.
#[derive(Clone, Debug)]
pub struct PointRegistry<T: Scalar, const N: usize> {
    points: Vec<Point<T, N>>,
    tol: T,
}

impl<T: Scalar, const N: usize> PointRegistry<T, N>
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    pub fn new(tol: T) -> Self {
        PointRegistry {
            points: Vec::new(),
            tol,
        }
    }

    /// Index of the matching stored point, inserting `p` if none is
    /// within tolerance.
    pub fn insert(&mut self, p: Point<T, N>) -> usize {
        for (i, q) in self.points.iter().enumerate() {
            if are_equal(q, &p, &self.tol) {
                return i;
            }
        }
        self.points.push(p);
        self.points.len() - 1
    }

    pub fn points(&self) -> &[Point<T, N>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point<T, N>> {
        self.points
    }
}
