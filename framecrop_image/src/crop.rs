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


use std::path::{Path,PathBuf};
use image::{imageops, ImageFormat, RgbImage};
use tracing::warn;
use crate::{errors::Result, open_image, rect::Rect, FrameCropError};

/// the outcome of processing one input file
#[derive(Debug)]
pub enum FileStatus {
    Cropped(PathBuf),
    Failed(FrameCropError)
}

#[derive(Debug)]
pub struct FileResult {
    pub input: PathBuf,
    pub status: FileStatus
}

impl FileResult {
    pub fn cropped (input: impl Into<PathBuf>, output: impl Into<PathBuf>)->Self {
        FileResult{ input: input.into(), status: FileStatus::Cropped(output.into()) }
    }

    pub fn failed (input: impl Into<PathBuf>, err: FrameCropError)->Self {
        FileResult{ input: input.into(), status: FileStatus::Failed(err) }
    }

    pub fn is_ok (&self)->bool {
        matches!( self.status, FileStatus::Cropped(_))
    }

    pub fn output (&self)->Option<&Path> {
        if let FileStatus::Cropped(path) = &self.status { Some(path.as_path()) } else { None }
    }

    pub fn error (&self)->Option<&FrameCropError> {
        if let FileStatus::Failed(e) = &self.status { Some(e) } else { None }
    }
}

/// extract the part of img that is covered by rect (after clamping it to the image dimensions)
pub fn crop_image (img: &RgbImage, rect: &Rect)->RgbImage {
    let (w,h) = img.dimensions();
    let r = rect.clamped( w, h);
    imageops::crop_imm( img, r.x as u32, r.y as u32, r.width, r.height).to_image()
}

/// crop the image stored in input to rect and save it as PNG to output.
/// This does not return errors - failures are logged and reported in the returned FileResult so
/// that callers can continue with other files
pub fn crop_file<P,Q> (input: P, output: Q, rect: &Rect)->FileResult where P: AsRef<Path>, Q: AsRef<Path> {
    let input = input.as_ref();
    let output = output.as_ref();

    match try_crop_file( input, output, rect) {
        Ok(()) => FileResult::cropped( input, output),
        Err(e) => {
            warn!("failed to crop {}: {e}", input.display());
            FileResult::failed( input, e)
        }
    }
}

fn try_crop_file (input: &Path, output: &Path, rect: &Rect)->Result<()> {
    let img = open_image( input)?.to_rgb8();
    let (w,h) = img.dimensions();

    let cropped = crop_image( &img, rect);
    if cropped.width() == 0 || cropped.height() == 0 {
        return Err( FrameCropError::InvalidRegion( format!("{rect} outside of {w}x{h} image")))
    }

    Ok( cropped.save_with_format( output, ImageFormat::Png)? )
}
