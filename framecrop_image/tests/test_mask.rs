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

#![allow(unused)]

use image::{GrayImage, Luma, Rgb, RgbImage};
use framecrop_image::{Mask, BLUE_RANGE};

// run with "cargo test test_xx -- --nocapture"

fn mask_with_rect (mask: &mut Mask, x0: usize, y0: usize, w: usize, h: usize) {
    for y in y0..y0+h {
        for x in x0..x0+w {
            mask.set( x, y);
        }
    }
}

fn set_pixels (mask: &Mask)->Vec<(usize,usize)> {
    mask.iter().collect()
}

#[test]
fn test_basic_ops() {
    let mut mask = Mask::new( 8, 4);
    assert!( mask.is_empty());
    assert_eq!( mask.dimensions(), (8,4));

    mask.set( 3, 2);
    mask.set( 0, 0);
    assert!( mask.get( 3, 2));
    assert!( !mask.get( 2, 3));
    assert_eq!( mask.count(), 2);
    assert_eq!( set_pixels( &mask), vec![(0,0), (3,2)]); // raster order

    assert!( mask.unset( 3, 2));
    assert!( !mask.unset( 3, 2));
    mask.unset( 0, 0);
    assert!( mask.is_empty());
}

#[test]
fn test_from_hsv_range() {
    let mut img = RgbImage::from_pixel( 10, 10, Rgb([255,255,255]));
    img.put_pixel( 1, 1, Rgb([0,0,255]));
    img.put_pixel( 5, 7, Rgb([20,40,180]));
    img.put_pixel( 6, 7, Rgb([255,0,0]));

    let mask = Mask::from_hsv_range( &img, &BLUE_RANGE);
    assert_eq!( mask.dimensions(), (10,10));
    assert_eq!( set_pixels( &mask), vec![(1,1), (5,7)]);
}

#[test]
fn test_luma8_conversion() {
    let mut mask = Mask::new( 6, 5);
    mask_with_rect( &mut mask, 1, 1, 3, 2);

    let img = mask.to_luma8_image();
    assert_eq!( img.dimensions(), (6,5));
    assert_eq!( img.get_pixel( 1, 1).0[0], 255);
    assert_eq!( img.get_pixel( 0, 0).0[0], 0);

    let mut gray = img.clone();
    gray.put_pixel( 5, 4, Luma([1])); // any non-zero value counts
    let mask2 = Mask::from_luma8_image( &gray);
    assert_eq!( mask2.count(), mask.count() + 1);
    assert!( mask2.get( 5, 4));
}

#[test]
fn test_close_fills_holes() {
    let mut mask = Mask::new( 20, 20);
    mask_with_rect( &mut mask, 5, 5, 10, 10);
    mask.unset( 10, 10);
    mask.unset( 11, 10);
    assert_eq!( mask.count(), 98);

    let closed = mask.closed( 2);
    assert!( closed.get( 10, 10));
    assert!( closed.get( 11, 10));
    assert_eq!( closed.count(), 100);
    assert!( !closed.get( 4, 4)); // does not grow the outline of the square
}

#[test]
fn test_close_bridges_small_gaps() {
    let mut mask = Mask::new( 30, 10);
    mask_with_rect( &mut mask, 2, 2, 10, 6);
    mask_with_rect( &mut mask, 14, 2, 10, 6); // 2 pixel gap in x

    assert_eq!( mask.external_contours().len(), 2);
    let closed = mask.closed( 2);
    assert!( closed.get( 12, 4));
    assert!( closed.get( 13, 4));
    assert_eq!( closed.external_contours().len(), 1);
}

#[test]
fn test_open_removes_specks() {
    let mut mask = Mask::new( 20, 20);
    mask_with_rect( &mut mask, 2, 2, 10, 10);
    mask.set( 17, 17);
    mask_with_rect( &mut mask, 15, 2, 3, 3); // smaller than structuring element

    let opened = mask.opened( 2);
    assert!( !opened.get( 17, 17));
    assert!( !opened.get( 16, 3));
    assert_eq!( opened.count(), 100);
    assert!( opened.get( 2, 2));
    assert!( opened.get( 11, 11));
}

#[test]
fn test_dilate_erode() {
    let mut mask = Mask::new( 9, 9);
    mask.set( 4, 4);

    let dilated = mask.dilated( 1);
    assert_eq!( dilated.count(), 9); // 3x3 square
    assert!( dilated.get( 3, 3) && dilated.get( 5, 5));

    let eroded = dilated.eroded( 1);
    assert_eq!( set_pixels( &eroded), vec![(4,4)]);
}

#[test]
fn test_external_contours() {
    let mut mask = Mask::new( 40, 40);

    // a frame with a separate blob inside of its hole
    mask_with_rect( &mut mask, 2, 2, 30, 3);
    mask_with_rect( &mut mask, 2, 29, 30, 3);
    mask_with_rect( &mut mask, 2, 2, 3, 30);
    mask_with_rect( &mut mask, 29, 2, 3, 30);
    mask_with_rect( &mut mask, 12, 12, 5, 5);

    // and a separate square outside
    mask_with_rect( &mut mask, 35, 35, 3, 3);

    let contours = mask.external_contours();
    assert_eq!( contours.len(), 2);

    let frame = &contours[0];
    let min_x = frame.points.iter().map(|p| p.x).min().unwrap();
    let max_x = frame.points.iter().map(|p| p.x).max().unwrap();
    assert_eq!( (min_x, max_x), (2, 31));
}

#[test]
fn test_empty_mask_has_no_contours() {
    let mask = Mask::new( 10, 10);
    assert!( mask.external_contours().is_empty());
    assert!( mask.closed( 2).opened( 2).is_empty());
}

#[test]
fn test_save_luma8() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("mask.png");

    let mut mask = Mask::new( 12, 9);
    mask_with_rect( &mut mask, 2, 3, 4, 5);
    mask.save_as_luma8_image( &path).unwrap();

    let loaded = Mask::from_luma8_image( &image::open( &path).unwrap().to_luma8());
    assert_eq!( loaded.dimensions(), (12,9));
    assert_eq!( set_pixels( &loaded), set_pixels( &mask));
}
