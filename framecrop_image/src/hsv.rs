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


use serde::{Serialize,Deserialize};

/// HSV conversion on a float scale: hue in degrees [0..360), saturation and value in [0..1]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    let h = if h < 0.0 { h + 360.0 } else { h };

    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s, max)
}

/// HSV conversion on the common 8-bit scale: H in [0..180) (half degrees), S and V in [0..255]
pub fn rgb_to_hsv8(r: u8, g: u8, b: u8) -> [u8;3] {
    let (h,s,_) = rgb_to_hsv( r, g, b);

    let h = ((h / 2.0).round() as u32 % 180) as u8;
    let s = (s * 255.0).round().min(255.0) as u8;
    let v = r.max(g).max(b);

    [h, s, v]
}

/// inclusive per-channel range of 8-bit HSV values
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub struct HsvRange {
    pub lower: [u8;3],
    pub upper: [u8;3]
}

impl HsvRange {
    pub const fn new (lower: [u8;3], upper: [u8;3])->Self {
        HsvRange { lower, upper }
    }

    pub fn contains (&self, hsv: &[u8;3])->bool {
        (0..3).all( |i| hsv[i] >= self.lower[i] && hsv[i] <= self.upper[i])
    }

    pub fn contains_rgb (&self, r: u8, g: u8, b: u8)->bool {
        self.contains( &rgb_to_hsv8( r, g, b))
    }
}

/// the fixed band of the blue reference frame (hue 180-260 degrees, ignoring dark and washed out pixels)
pub const BLUE_RANGE: HsvRange = HsvRange::new( [90, 50, 50], [130, 255, 255]);
