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


use std::path::Path;
use image::DynamicImage;
use imageproc::{contours::Contour, point::Point};
use tracing::{debug, info};
use crate::{errors::Result, hsv::BLUE_RANGE, mask::Mask, open_image, rect::Rect, FrameCropError};

/// radius of the square structuring element used to clean up the reference mask (5x5 pixels)
pub const KERNEL_RADIUS: u8 = 2;

/// find the bounding rect of the largest blue region in the reference image at the given path
pub fn locate<P> (path: P)->Result<Rect> where P: AsRef<Path> {
    let path = path.as_ref();
    let img = open_image( path).map_err( |e| FrameCropError::ImageReadError( format!("{}: {e}", path.display())))?;

    let rect = locate_in_image( &img)?;
    info!("located reference region {rect} in {}", path.display());
    Ok(rect)
}

/// find the bounding rect of the largest blue region in a decoded reference image
pub fn locate_in_image (img: &DynamicImage)->Result<Rect> {
    let mask = reference_mask( img);
    largest_region( &mask)
}

/// the thresholded reference mask after closing (to fill holes inside the frame) and
/// subsequent opening (to remove isolated false positive specks)
pub fn reference_mask (img: &DynamicImage)->Mask {
    let rgb = img.to_rgb8();
    Mask::from_hsv_range( &rgb, &BLUE_RANGE)
        .closed( KERNEL_RADIUS)
        .opened( KERNEL_RADIUS)
}

/// bounding rect of the external mask contour that encloses the largest area.
/// If several contours have the same max area the first one in extraction order is used
pub fn largest_region (mask: &Mask)->Result<Rect> {
    let contours = mask.external_contours();
    debug!("{} pixels set in reference mask, {} external contours", mask.count(), contours.len());

    let mut max_contour: Option<(f64,&Contour<i32>)> = None;
    for c in &contours {
        let area = contour_area( &c.points);
        if max_contour.map_or( true, |(max_area,_)| area > max_area) {
            max_contour = Some((area,c));
        }
    }

    let (area, contour) = max_contour.ok_or( FrameCropError::NoRegionFound("no pixels within hue range".into()))?;
    debug!("largest contour has {} points enclosing an area of {area}", contour.points.len());

    Rect::bounding( &contour.points).ok_or( FrameCropError::NoRegionFound("empty contour".into()))
}

/// area enclosed by a closed polygon (shoelace formula). Degenerate contours (single pixels
/// or lines) have zero area
pub fn contour_area (points: &[Point<i32>])->f64 {
    let n = points.len();
    if n < 3 { return 0.0 }

    let mut a2: i64 = 0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i+1) % n];
        a2 += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }

    a2.abs() as f64 / 2.0
}
