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


use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path,PathBuf};
use regex::Regex;

use crate::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

/// create dir (including parents) if it does not exist yet. Calling this on an existing dir is a no-op
pub fn ensure_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// check if dir pathname exists, failing with NotFound otherwise
pub fn existing_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        Ok(())
    } else {
        Err( io_error!(ErrorKind::NotFound, "not a directory {:?}", path))
    }
}

/// get regular files in dir whose filename matches the provided regex. Order is whatever `read_dir` returns.
/// Filenames that are not valid UTF-8 are matched in their lossy form, the returned paths are unchanged
pub fn matching_files_in_dir<P: AsRef<Path>> (dir: &P, fname_regex: &Regex) -> Result<Vec<PathBuf>> {
    let dir: &Path = dir.as_ref();
    let mut list: Vec<PathBuf> = Vec::new();

    if dir.is_dir() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if fname_regex.is_match( &entry.file_name().to_string_lossy()) && entry.path().is_file() {
                list.push(entry.path())
            }
        }
    }

    Ok(list)
}

/// regex that matches filenames ending in `.<ext>`, ignoring case
pub fn extension_regex (ext: &str)->Regex {
    let ext = ext.trim_start_matches('.');
    // escaped literal can't produce an invalid pattern
    Regex::new( &format!(r"(?i)\.{}$", regex::escape(ext))).unwrap()
}

/// get regular files in dir with the given (case insensitive) extension, sorted by path
pub fn files_with_extension<P: AsRef<Path>> (dir: &P, ext: &str) -> Result<Vec<PathBuf>> {
    let re = extension_regex( ext);
    let mut files = matching_files_in_dir( dir, &re)?;
    files.sort();
    Ok(files)
}
