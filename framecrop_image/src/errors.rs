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


use framecrop_common::{define_error, ron::ConfigError};

pub type Result<T> = std::result::Result<T, FrameCropError>;

define_error!{ pub FrameCropError = 
    ImageError(#[from] image::ImageError) : "Image error {0}",
    IOError(#[from] std::io::Error) : "IO error: {0}",
    ConfigError(#[from] ConfigError) : "{0}",
    ImageReadError(String) : "cannot read image: {0}",
    NoRegionFound(String) : "no reference region found: {0}",
    InvalidRegion(String) : "invalid region error: {0}",
    OpFailed(String) : "operation failed: {0}"
}
