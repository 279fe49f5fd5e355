/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */


use std::fmt;
use serde::{Serialize,Deserialize};
use imageproc::point::Point;

/// pixel region with top-left origin. The origin can be outside of an image (negative or beyond
/// its extent), extents are clipped by `clamped(..)` before a region is accessed
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32
}

impl Rect {
    pub fn new (x: i32, y: i32, width: u32, height: u32)->Self {
        Rect{ x, y, width, height }
    }

    /// the rect covering a whole image of the given dimensions
    pub fn full (width: u32, height: u32)->Self {
        Rect{ x: 0, y: 0, width, height }
    }

    /// smallest rect enclosing all points (inclusive, i.e. a single point has width and height 1)
    pub fn bounding (points: &[Point<i32>])->Option<Self> {
        let first = points.first()?;
        let (mut x_min, mut y_min, mut x_max, mut y_max) = (first.x, first.y, first.x, first.y);

        for p in &points[1..] {
            if p.x < x_min { x_min = p.x }
            if p.x > x_max { x_max = p.x }
            if p.y < y_min { y_min = p.y }
            if p.y > y_max { y_max = p.y }
        }

        Some( Rect{ x: x_min, y: y_min, width: (x_max - x_min + 1) as u32, height: (y_max - y_min + 1) as u32 } )
    }

    pub fn area (&self)->u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty (&self)->bool {
        self.width == 0 || self.height == 0
    }

    /// is this rect fully inside of an image with the given dimensions
    pub fn is_within (&self, img_width: u32, img_height: u32)->bool {
        self.x >= 0 && self.y >= 0 &&
        self.x as u64 + self.width as u64 <= img_width as u64 &&
        self.y as u64 + self.height as u64 <= img_height as u64
    }

    /// clip rect to image dimensions. Vertical and horizontal clamping are independent of each other
    /// and both only use the original image dimensions. The result is always within the image
    /// but can be empty if the origin lies beyond the image extent. This is a no-op for rects that
    /// are already within the image
    pub fn clamped (&self, img_width: u32, img_height: u32)->Rect {
        let y = (self.y as i64).clamp( 0, img_height as i64) as u32;
        let height = self.height.min( img_height - y);

        let x = (self.x as i64).clamp( 0, img_width as i64) as u32;
        let width = self.width.min( img_width - x);

        Rect{ x: x as i32, y: y as i32, width, height }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "x={}, y={}, width={}, height={}", self.x, self.y, self.width, self.height)
    }
}
