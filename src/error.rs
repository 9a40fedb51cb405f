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

use thiserror::Error;

/// Hard failures of the intersection engine. An empty intersection is a
/// normal result, never an error; every variant here aborts the whole
/// call that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The polygon at `index` (in input order) cannot be intersected:
    /// fewer than 3 distinct vertices, collinear vertices, or vertices
    /// not coplanar within the tolerance.
    #[error("polygon {index} is degenerate: {reason}")]
    DegenerateInput { index: usize, reason: &'static str },

    /// Coplanar polygons with overlapping area intersect in a region,
    /// not a segment; the engine refuses rather than approximate.
    #[error("polygons {first} and {second} are coplanar with overlapping area")]
    UnsupportedConfiguration { first: usize, second: usize },
}
