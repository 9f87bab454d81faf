// ZoomView -- Zoom and pan core for interactive image viewers
//
// Copyright (c) 2024-2025 Martin van der Werff <github (at) newinnovations.nl>
//
// This file is part of ZoomView.
//
// ZoomView is free software: you can redistribute it and/or modify it under the terms of
// the GNU Affero General Public License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR
// IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND
// FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR
// BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
// STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::fmt::Debug;

/// A rectangle defined by two corner points (x0, y0) and (x1, y1).
/// The rectangle is valid when x0 <= x1 and y0 <= y1.
/// Empty rectangles have x0 >= x1 or y0 >= y1.
///
/// Generic over numeric types T that support basic arithmetic and comparison operations.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub x0: T,
    pub y0: T,
    pub x1: T,
    pub y1: T,
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Size<T> {
    width: T,
    height: T,
}

impl<T> Size<T>
where
    T: Copy + PartialOrd,
{
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> T {
        self.width
    }

    pub fn height(&self) -> T {
        self.height
    }

    /// Returns the smaller of the two dimensions.
    pub fn min_side(&self) -> T {
        if self.width <= self.height {
            self.width
        } else {
            self.height
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector<T> {
    x: T,
    y: T,
}

impl<T> Vector<T>
where
    T: Default
        + Copy
        + std::ops::Add<Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + std::ops::Div<Output = T>,
{
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Returns a new vector scaled by the given factor.
    pub fn scale(&self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Returns a new vector unscaled by the given factor.
    pub fn unscale(&self, factor: T) -> Self {
        Self::new(self.x / factor, self.y / factor)
    }
}

impl<T> std::ops::Add for Vector<T>
where
    T: Copy + std::ops::Add<Output = T>,
{
    type Output = Vector<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T> std::ops::Sub for Vector<T>
where
    T: Copy + std::ops::Sub<Output = T>,
{
    type Output = Vector<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T> Rect<T>
where
    T: Copy
        + PartialOrd
        + std::ops::Add<Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + std::ops::Div<Output = T>
        + Debug
        + Default,
{
    /// Creates a new rectangle with the given coordinates.
    /// No validation is performed - the rectangle may be invalid or empty.
    pub const fn new(x0: T, y0: T, x1: T, y1: T) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Creates a rectangle at the origin with the given size.
    pub fn new_from_size(size: Size<T>) -> Self {
        Self::new(T::default(), T::default(), size.width, size.height)
    }

    /// Returns true if the rectangle is empty (has zero or negative area).
    /// An empty rectangle has x0 >= x1 or y0 >= y1.
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Returns true if the point is contained within the rectangle.
    /// Uses half-open intervals: [x0, x1) and [y0, y1).
    /// Returns false for empty rectangles.
    pub fn contains(&self, p: Vector<T>) -> bool {
        if self.is_empty() {
            false
        } else {
            p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
        }
    }

    /// Returns the width of the rectangle.
    /// Returns zero for empty rectangles.
    pub fn width(&self) -> T {
        if self.is_empty() {
            T::default()
        } else {
            self.x1 - self.x0
        }
    }

    /// Returns the height of the rectangle.
    /// Returns zero for empty rectangles.
    pub fn height(&self) -> T {
        if self.is_empty() {
            T::default()
        } else {
            self.y1 - self.y0
        }
    }

    /// Returns the size of the rectangle.
    /// Returns zero for empty rectangles.
    pub fn size(&self) -> Size<T> {
        if self.is_empty() {
            Size::default()
        } else {
            Size {
                width: self.x1 - self.x0,
                height: self.y1 - self.y0,
            }
        }
    }

    /// Returns the intersection of this rectangle with another rectangle.
    /// The intersection is the largest rectangle contained in both rectangles.
    /// Returns an empty rectangle if there is no intersection.
    pub fn intersect(&self, other: &Self) -> Self {
        let x0 = if self.x0 >= other.x0 {
            self.x0
        } else {
            other.x0
        };
        let y0 = if self.y0 >= other.y0 {
            self.y0
        } else {
            other.y0
        };
        let x1 = if self.x1 <= other.x1 {
            self.x1
        } else {
            other.x1
        };
        let y1 = if self.y1 <= other.y1 {
            self.y1
        } else {
            other.y1
        };

        Self::new(x0, y0, x1, y1)
    }

    /// Returns a new rectangle scaled by the given factor.
    pub fn scale(&self, factor: T) -> Self {
        Self::new(
            self.x0 * factor,
            self.y0 * factor,
            self.x1 * factor,
            self.y1 * factor,
        )
    }

    /// Returns a new rectangle translated by the given offset.
    /// Both corner points are moved by (offset.x, offset.y).
    pub fn translate(&self, offset: Vector<T>) -> Self {
        Self::new(
            self.x0 + offset.x(),
            self.y0 + offset.y(),
            self.x1 + offset.x(),
            self.y1 + offset.y(),
        )
    }
}

impl Rect<f64> {
    pub fn center(&self) -> Vector<f64> {
        Vector::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }
}

// Type aliases for convenience
pub type RectI = Rect<i32>;
pub type RectD = Rect<f64>;
pub type SizeI = Size<i32>;
pub type SizeD = Size<f64>;
pub type VectorI = Vector<i32>;
pub type VectorD = Vector<f64>;
