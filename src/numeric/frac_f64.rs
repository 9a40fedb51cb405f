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

use num_traits::ToPrimitive;

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Sqrt, Zero},
};

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// `f64` kernel. All comparisons in the engine go through a tolerance,
/// so the wrapper carries the default one.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct FracF64(pub f64);

impl Scalar for FracF64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        FracF64(num as f64 / den as f64)
    }

    fn default_tolerance() -> Self {
        FracF64(1e-8)
    }
}

impl<'a, 'b> Add<&'b FracF64> for &'a FracF64 {
    type Output = FracF64;
    fn add(self, rhs: &'b FracF64) -> FracF64 {
        FracF64(self.0 + rhs.0)
    }
}

impl<'a, 'b> Sub<&'b FracF64> for &'a FracF64 {
    type Output = FracF64;
    fn sub(self, rhs: &'b FracF64) -> FracF64 {
        FracF64(self.0 - rhs.0)
    }
}

impl<'a, 'b> Mul<&'b FracF64> for &'a FracF64 {
    type Output = FracF64;
    fn mul(self, rhs: &'b FracF64) -> FracF64 {
        FracF64(self.0 * rhs.0)
    }
}

impl<'a, 'b> Div<&'b FracF64> for &'a FracF64 {
    type Output = FracF64;
    fn div(self, rhs: &'b FracF64) -> FracF64 {
        FracF64(self.0 / rhs.0)
    }
}

impl Add for FracF64 {
    type Output = FracF64;
    fn add(self, rhs: FracF64) -> FracF64 {
        FracF64(self.0 + rhs.0)
    }
}

impl Sub for FracF64 {
    type Output = FracF64;
    fn sub(self, rhs: FracF64) -> FracF64 {
        FracF64(self.0 - rhs.0)
    }
}

impl Mul for FracF64 {
    type Output = FracF64;
    fn mul(self, rhs: FracF64) -> FracF64 {
        FracF64(self.0 * rhs.0)
    }
}

impl Div for FracF64 {
    type Output = FracF64;
    fn div(self, rhs: FracF64) -> FracF64 {
        FracF64(self.0 / rhs.0)
    }
}

impl Neg for FracF64 {
    type Output = FracF64;
    fn neg(self) -> FracF64 {
        FracF64(-self.0)
    }
}

impl<'a> AddAssign<&'a FracF64> for FracF64 {
    fn add_assign(&mut self, rhs: &'a FracF64) {
        self.0 += rhs.0;
    }
}

impl<'a> SubAssign<&'a FracF64> for FracF64 {
    fn sub_assign(&mut self, rhs: &'a FracF64) {
        self.0 -= rhs.0;
    }
}

impl Abs for FracF64 {
    fn abs(&self) -> Self {
        FracF64(self.0.abs())
    }
}

impl Sqrt for FracF64 {
    fn sqrt(&self) -> Self {
        FracF64(self.0.sqrt())
    }
}

impl Zero for FracF64 {
    fn zero() -> Self {
        FracF64(0.0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
    fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
    fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

impl One for FracF64 {
    fn one() -> Self {
        FracF64(1.0)
    }
}

impl ToPrimitive for FracF64 {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl From<f64> for FracF64 {
    fn from(v: f64) -> Self {
        FracF64(v)
    }
}

impl From<i32> for FracF64 {
    fn from(v: i32) -> Self {
        FracF64(v as f64)
    }
}
