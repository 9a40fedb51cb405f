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
    ops::{Add, Index, IndexMut, Mul, Sub},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

/// A position in N-dimensional space. Two points are only ever compared
/// through a tolerance (`kernel::predicates::are_equal`); the derived
/// `PartialEq` is exact and reserved for bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Point {
            coords: vals.map(|v| v.into()),
        }
    }

    pub fn coords(&self) -> &[T; N] {
        &self.coords
    }

    pub fn as_vector(&self) -> Vector<T, N> {
        Vector {
            coords: self.coords.clone(),
        }
    }

    pub fn vector_to(&self, other: &Self) -> Vector<T, N>
    where
        for<'a> &'a T: Sub<&'a T, Output = T>,
    {
        Vector {
            coords: from_fn(|i| &other.coords[i] - &self.coords[i]),
        }
    }

    pub fn add_vector(&self, v: &Vector<T, N>) -> Self
    where
        for<'a> &'a T: Add<&'a T, Output = T>,
    {
        Point {
            coords: from_fn(|i| &self.coords[i] + &v.coords[i]),
        }
    }

    pub fn midpoint(&self, other: &Self) -> Self
    where
        for<'a> &'a T: Add<&'a T, Output = T>,
    {
        let two: T = T::from(2);
        Point {
            coords: from_fn(|i| (&self.coords[i] + &other.coords[i]) / two.clone()),
        }
    }

    pub fn distance_squared_to(&self, other: &Self) -> T
    where
        for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
    {
        let mut acc = T::zero();
        for i in 0..N {
            let d = &self.coords[i] - &other.coords[i];
            acc += &(&d * &d);
        }
        acc
    }
}

impl<T: Scalar> Point<T, 2> {
    pub fn new(x: impl Into<T>, y: impl Into<T>) -> Self {
        Point {
            coords: [x.into(), y.into()],
        }
    }
}

impl<T: Scalar> Point<T, 3> {
    pub fn new(x: impl Into<T>, y: impl Into<T>, z: impl Into<T>) -> Self {
        Point {
            coords: [x.into(), y.into(), z.into()],
        }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: &'b Point<T, N>) -> Self::Output {
        let mut out = self.clone();
        for i in 0..N {
            out.coords[i] += &rhs.coords[i];
        }
        out
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn sub(self, rhs: &'b Point<T, N>) -> Self::Output {
        let mut out = self.clone();
        for i in 0..N {
            out.coords[i] -= &rhs.coords[i];
        }
        out
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;
