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
use bit_set::BitSet;
use image::{GrayImage, Luma, RgbImage};
use imageproc::{contours::{find_contours, BorderType, Contour}, distance_transform::Norm, morphology};
use crate::{errors::Result, hsv::HsvRange};

/// binary per-pixel mask
#[derive(Debug,Clone)]
pub struct Mask {
    width: usize,
    height: usize,
    data: BitSet
}

impl Mask {
    pub fn new (width: usize, height: usize)->Self {
        let data = BitSet::with_capacity(width*height);
        Mask{width,height,data}
    }

    /// set all pixels of img whose 8-bit HSV value is within range
    pub fn from_hsv_range (img: &RgbImage, range: &HsvRange)->Self {
        let (w,h) = img.dimensions();

        let mut mask = Mask::new( w as usize, h as usize);
        for (x, y, pixel) in img.enumerate_pixels() {
            let [r,g,b] = pixel.0;
            if range.contains_rgb( r, g, b) {
                mask.set( x as usize, y as usize);
            }
        }

        mask
    }

    /// every non-zero pixel is set
    pub fn from_luma8_image (img: &GrayImage)->Self {
        let (w,h) = img.dimensions();

        let mut mask = Mask::new( w as usize, h as usize);
        for (x, y, pixel) in img.enumerate_pixels() {
            if pixel.0[0] > 0 {
                mask.set( x as usize, y as usize);
            }
        }

        mask
    }

    pub fn to_luma8_image (&self)->GrayImage {
        let mut img = GrayImage::new( self.width as u32, self.height as u32);
        for (x,y) in self.iter() {
            img.put_pixel(x as u32, y as u32, Luma([255u8]));
        }
        img
    }

    pub fn save_as_luma8_image<P> (&self, path: P)->Result<()> where P: AsRef<Path> {
        Ok( self.to_luma8_image().save( path)? )
    }

    pub fn dimensions (&self)->(usize,usize) {
        (self.width,self.height)
    }

    pub fn get (&self, x: usize, y: usize)->bool {
        self.data.contains( y*self.width + x)
    }

    pub fn set (&mut self, x: usize, y: usize) {
        self.data.insert( y*self.width + x);
    }

    pub fn unset (&mut self, x: usize, y: usize)->bool {
        self.data.remove( y*self.width + x)
    }

    /// number of set pixels
    pub fn count (&self)->usize {
        self.data.len()
    }

    pub fn is_empty (&self)->bool {
        self.data.is_empty()
    }

    /* #region morphology ***********************************************************************************/

    // structuring elements are squares of (2k+1)x(2k+1) pixels. Pixels outside the mask
    // count as neither set nor unset, i.e. borders are not eroded

    pub fn dilated (&self, k: u8)->Self {
        Self::from_luma8_image( &morphology::dilate( &self.to_luma8_image(), Norm::LInf, k))
    }

    pub fn eroded (&self, k: u8)->Self {
        Self::from_luma8_image( &morphology::erode( &self.to_luma8_image(), Norm::LInf, k))
    }

    /// dilate then erode - fills holes and gaps smaller than the structuring element
    pub fn closed (&self, k: u8)->Self {
        Self::from_luma8_image( &morphology::close( &self.to_luma8_image(), Norm::LInf, k))
    }

    /// erode then dilate - removes specks smaller than the structuring element
    pub fn opened (&self, k: u8)->Self {
        Self::from_luma8_image( &morphology::open( &self.to_luma8_image(), Norm::LInf, k))
    }

    /* #endregion morphology */

    /// outer borders of all top level connected regions (8-connectivity). Borders of holes and of
    /// regions nested inside of holes are not included. Contours are in raster order of their first pixel
    pub fn external_contours (&self)->Vec<Contour<i32>> {
        find_contours::<i32>( &self.to_luma8_image()).into_iter()
            .filter( |c| matches!( c.border_type, BorderType::Outer) && c.parent.is_none())
            .collect()
    }

    pub fn iter (&self)->MaskIter<'_> {
        MaskIter{ iter: self.data.iter(), w: self.width }
    }
}

impl<'a> IntoIterator for &'a Mask {
    type Item = (usize,usize);
    type IntoIter = MaskIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// iterator over (x,y) coordinates of set pixels, in raster order
pub struct MaskIter<'a> {
    iter: bit_set::Iter<'a, u32>,
    w: usize
}

impl <'a> Iterator for MaskIter<'a> {
    type Item = (usize,usize);
    
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map( |n| (n % self.w, n / self.w))
    }
}
