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
    ops::{Add, Div, Index, Mul, Sub},
};

use crate::numeric::scalar::Scalar;

/// Cross products are scalar-valued in 2D and vector-valued in 3D, hence
/// the associated type.
pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    type Cross;

    fn dot(&self, other: &Self) -> T;
    fn cross(&self, other: &Self) -> Self::Cross;
    fn norm_squared(&self) -> T;
    fn norm(&self) -> T;
    fn normalized(&self) -> Self;
    fn scale(&self, factor: &T) -> Self;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Vector {
            coords: vals.map(|v| v.into()),
        }
    }

    pub fn zero() -> Self {
        Vector {
            coords: from_fn(|_| T::zero()),
        }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar> VectorOps<T, 2> for Vector<T, 2>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    type Cross = T;

    fn dot(&self, other: &Self) -> T {
        &(&self[0] * &other[0]) + &(&self[1] * &other[1])
    }

    fn cross(&self, other: &Self) -> T {
        &(&self[0] * &other[1]) - &(&self[1] * &other[0])
    }

    fn norm_squared(&self) -> T {
        self.dot(self)
    }

    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    fn normalized(&self) -> Self {
        let n = self.norm();
        Vector {
            coords: [&self[0] / &n, &self[1] / &n],
        }
    }

    fn scale(&self, factor: &T) -> Self {
        Vector {
            coords: [&self[0] * factor, &self[1] * factor],
        }
    }
}

impl<T: Scalar> VectorOps<T, 3> for Vector<T, 3>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    type Cross = Vector<T, 3>;

    fn dot(&self, other: &Self) -> T {
        &(&(&self[0] * &other[0]) + &(&self[1] * &other[1])) + &(&self[2] * &other[2])
    }

    fn cross(&self, other: &Self) -> Vector<T, 3> {
        Vector {
            coords: [
                &(&self[1] * &other[2]) - &(&self[2] * &other[1]),
                &(&self[2] * &other[0]) - &(&self[0] * &other[2]),
                &(&self[0] * &other[1]) - &(&self[1] * &other[0]),
            ],
        }
    }

    fn norm_squared(&self) -> T {
        self.dot(self)
    }

    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    fn normalized(&self) -> Self {
        let n = self.norm();
        Vector {
            coords: [&self[0] / &n, &self[1] / &n, &self[2] / &n],
        }
    }

    fn scale(&self, factor: &T) -> Self {
        Vector {
            coords: [&self[0] * factor, &self[1] * factor, &self[2] * factor],
        }
    }
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
