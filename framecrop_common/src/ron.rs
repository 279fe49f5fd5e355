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


//! utility functions for RON deserialization of config files

use std::{fs, io, path::Path};
use serde::Deserialize;
use crate::define_error;

define_error!{ pub ConfigError = 
    IOError(#[from] io::Error) : "config IO error: {0}",
    ParseError(#[from] ron::error::SpannedError) : "config parse error: {0}"
}

/// load a config struct from a RON file
pub fn load_config<C,P> (path: P)->Result<C,ConfigError> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let data = fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}
