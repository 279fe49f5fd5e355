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


//! crop a directory of images to a blue reference frame that is located in a separate reference image.
//! The frame is detected once by HSV thresholding, morphological cleanup and contour analysis of the
//! reference image, its bounding rect is then applied to every input image

mod errors;
pub use errors::{Result,FrameCropError};

mod hsv;
pub use hsv::{rgb_to_hsv, rgb_to_hsv8, HsvRange, BLUE_RANGE};

mod rect;
pub use rect::Rect;

mod mask;
pub use mask::{Mask, MaskIter};

pub mod locate;
pub use locate::{locate, locate_in_image, reference_mask};

pub mod crop;
pub use crop::{crop_file, crop_image, FileResult, FileStatus};

pub mod batch;
pub use batch::{run, process_files, BatchSummary, CropConfig};

use std::path::Path;
use image::{DynamicImage, ImageReader};

/// decode the image stored in path. The format is detected from the file content, not from its
/// extension, i.e. a JPEG stored as `scan.png` or a file without extension are decoded
pub fn open_image<P> (path: P)->Result<DynamicImage> where P: AsRef<Path> {
    Ok( ImageReader::open( path)?.with_guessed_format()?.decode()? )
}
