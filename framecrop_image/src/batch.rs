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


use std::{fmt, path::{Path,PathBuf}};
use serde::{Serialize,Deserialize};
use tracing::info;
use framecrop_common::{fs::{ensure_dir, existing_dir, files_with_extension}, ron::load_config};
use crate::{crop::{crop_file, FileResult, FileStatus}, errors::Result, locate::locate, rect::Rect, FrameCropError};

/// (case insensitive) extension of input files we process
pub const INPUT_EXTENSION: &str = "png";

/// the paths of a batch run, usually read from a RON file such as
/// ```ron
/// CropConfig(
///     reference_path: "maps/11map_1500.png",
///     input_dir: "maps/in",
///     output_dir: "maps/out",
/// )
/// ```
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CropConfig {
    pub reference_path: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf
}

impl CropConfig {
    pub fn new (reference_path: impl Into<PathBuf>, input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>)->Self {
        CropConfig { reference_path: reference_path.into(), input_dir: input_dir.into(), output_dir: output_dir.into() }
    }

    pub fn load<P> (path: P)->Result<Self> where P: AsRef<Path> {
        Ok( load_config( path)? )
    }
}

/// aggregated per-file results of a batch run
#[derive(Debug)]
pub struct BatchSummary {
    pub total: usize,
    pub results: Vec<FileResult>
}

impl BatchSummary {
    /// number of successfully cropped files
    pub fn processed (&self)->usize {
        self.results.iter().filter( |r| r.is_ok()).count()
    }

    pub fn failed (&self)->impl Iterator<Item=&FileResult> {
        self.results.iter().filter( |r| !r.is_ok())
    }

    pub fn outputs (&self)->impl Iterator<Item=&Path> {
        self.results.iter().filter_map( |r| r.output())
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "processed {}/{} files", self.processed(), self.total)
    }
}

/// locate the reference region and crop all matching files of the input dir to it.
/// Only reference and directory errors are returned, per-file errors are part of the summary
pub fn run (config: &CropConfig)->Result<BatchSummary> {
    ensure_dir( &config.output_dir)?;

    println!("analyzing reference image {}", config.reference_path.display());
    let rect = locate( &config.reference_path)?;
    println!("found reference region: {rect}");

    let files = input_files( &config.input_dir)?;
    let summary = process_files( &rect, &files, &config.output_dir);

    println!();
    println!("{summary}");
    Ok(summary)
}

/// sorted paths of all files in dir with our input extension
pub fn input_files<P> (dir: P)->Result<Vec<PathBuf>> where P: AsRef<Path> {
    let dir = dir.as_ref();
    existing_dir( dir)?;
    Ok( files_with_extension( &dir, INPUT_EXTENSION)? )
}

/// crop all files to rect, storing results under the same filename in output_dir.
/// This processes all files regardless of failures
pub fn process_files (rect: &Rect, files: &[PathBuf], output_dir: &Path)->BatchSummary {
    let total = files.len();
    let mut results = Vec::with_capacity( total);

    for (i, path) in files.iter().enumerate() {
        let result = match path.file_name() {
            Some(fname) => {
                println!("processing ({}/{}): {}", i+1, total, fname.to_string_lossy());
                crop_file( path, output_dir.join( fname), rect)
            }
            None => FileResult::failed( path, FrameCropError::OpFailed( format!("no filename in {}", path.display())))
        };

        if let FileStatus::Cropped(output) = &result.status {
            println!("saved cropped image to {}", output.display());
        }
        results.push( result);
    }

    let summary = BatchSummary{ total, results };
    info!("{summary}");
    summary
}
