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


use anyhow::{anyhow,Result};
use tracing_subscriber::EnvFilter;
use framecrop_common::{define_cli, check_cli};
use framecrop_image::{open_image, reference_mask, run, CropConfig};

define_cli! { ARGS [about="crop all PNG images of a directory to the blue frame found in a reference image"] =
    config: Option<String> [help="optional RON config file with reference_path, input_dir and output_dir", long, short],
    mask: Option<String> [help="optional filename to store the cleaned up reference mask image", long],

    reference: Option<String> [help="reference image that contains the blue frame"],
    input_dir: Option<String> [help="directory with PNG images to crop"],
    output_dir: Option<String> [help="directory to store cropped images in (created if missing)"]
}

fn main() -> Result<()> {
    check_cli!(ARGS);

    // note this only succeeds if there is no global subscriber set yet
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .try_init();

    let config = get_config()?;

    if let Some(mask_file) = &ARGS.mask {
        let img = open_image( &config.reference_path)?;
        reference_mask( &img).save_as_luma8_image( mask_file)?;
        println!("saved reference mask to {mask_file}");
    }

    run( &config)?;
    Ok(())
}

/// positional args override respective config file fields
fn get_config ()->Result<CropConfig> {
    if let Some(path) = &ARGS.config {
        let mut config = CropConfig::load( path)?;
        if let Some(p) = &ARGS.reference { config.reference_path = p.into() }
        if let Some(p) = &ARGS.input_dir { config.input_dir = p.into() }
        if let Some(p) = &ARGS.output_dir { config.output_dir = p.into() }
        Ok(config)

    } else {
        match (&ARGS.reference, &ARGS.input_dir, &ARGS.output_dir) {
            (Some(reference), Some(input_dir), Some(output_dir)) => Ok( CropConfig::new( reference, input_dir, output_dir) ),
            _ => Err( anyhow!("either --config <file> or <reference> <input_dir> <output_dir> arguments required") )
        }
    }
}
