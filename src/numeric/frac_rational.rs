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
use rug::Rational;

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Sqrt, Zero},
};

use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Exact rational kernel. The sqrt-free predicates are exact under this
/// type; anything that normalizes a vector rounds through `f64` (see
/// [`Sqrt`] below) and is only as exact as that round trip.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct FracRational(pub Rational);

impl Scalar for FracRational {
    fn from_num_den(num: i32, den: i32) -> Self {
        FracRational(Rational::from((num, den)))
    }

    fn default_tolerance() -> Self {
        // The exact kernel still needs a nonzero tolerance: the engine's
        // equality is a strict `<` comparison, which no distance satisfies
        // against zero.
        Self::from_num_den(1, 1_000_000_000)
    }
}

impl<'a, 'b> Add<&'b FracRational> for &'a FracRational {
    type Output = FracRational;
    fn add(self, rhs: &'b FracRational) -> FracRational {
        let mut result = self.0.clone();
        result += &rhs.0;
        FracRational(result)
    }
}

impl<'a, 'b> Sub<&'b FracRational> for &'a FracRational {
    type Output = FracRational;
    fn sub(self, rhs: &'b FracRational) -> FracRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        FracRational(result)
    }
}

impl<'a, 'b> Mul<&'b FracRational> for &'a FracRational {
    type Output = FracRational;
    fn mul(self, rhs: &'b FracRational) -> FracRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        FracRational(result)
    }
}

impl<'a, 'b> Div<&'b FracRational> for &'a FracRational {
    type Output = FracRational;
    fn div(self, rhs: &'b FracRational) -> FracRational {
        let mut result = self.0.clone();
        result /= &rhs.0;
        FracRational(result)
    }
}

impl Add for FracRational {
    type Output = FracRational;
    fn add(self, rhs: FracRational) -> FracRational {
        FracRational(self.0 + rhs.0)
    }
}

impl Sub for FracRational {
    type Output = FracRational;
    fn sub(self, rhs: FracRational) -> FracRational {
        FracRational(self.0 - rhs.0)
    }
}

impl Mul for FracRational {
    type Output = FracRational;
    fn mul(self, rhs: FracRational) -> FracRational {
        FracRational(self.0 * rhs.0)
    }
}

impl Div for FracRational {
    type Output = FracRational;
    fn div(self, rhs: FracRational) -> FracRational {
        FracRational(self.0 / rhs.0)
    }
}

impl Neg for FracRational {
    type Output = FracRational;
    fn neg(self) -> FracRational {
        FracRational(-self.0)
    }
}

impl<'a> AddAssign<&'a FracRational> for FracRational {
    fn add_assign(&mut self, rhs: &'a FracRational) {
        self.0 += &rhs.0;
    }
}

impl<'a> SubAssign<&'a FracRational> for FracRational {
    fn sub_assign(&mut self, rhs: &'a FracRational) {
        self.0 -= &rhs.0;
    }
}

impl Abs for FracRational {
    fn abs(&self) -> Self {
        let mut r = self.0.clone();
        r.abs_mut();
        FracRational(r)
    }
}

impl Sqrt for FracRational {
    fn sqrt(&self) -> Self {
        // Exact square roots of rationals are generally irrational.
        let approx = self.0.to_f64().sqrt();
        match Rational::from_f64(approx) {
            Some(r) => FracRational(r),
            None => panic!("square root of {:?} is not finite", self.0),
        }
    }
}

impl Zero for FracRational {
    fn zero() -> Self {
        FracRational(Rational::new())
    }
    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
    fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }
    fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }
}

impl One for FracRational {
    fn one() -> Self {
        FracRational(Rational::from(1))
    }
}

impl ToPrimitive for FracRational {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_f64().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.0.to_f64().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl From<f64> for FracRational {
    fn from(v: f64) -> Self {
        match Rational::from_f64(v) {
            Some(r) => FracRational(r),
            None => panic!("{v} has no rational value"),
        }
    }
}

impl From<i32> for FracRational {
    fn from(v: i32) -> Self {
        FracRational(Rational::from(v))
    }
}
