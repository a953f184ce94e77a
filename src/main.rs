// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{arg, command, value_parser, ArgAction};
use env_logger::Env;
use log::info;
use miette::{IntoDiagnostic, Result, WrapErr};

use bc7inspect::container::dds;
use bc7inspect::dimensions::Dimensioned;
use bc7inspect::inspect::debug_image;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = command!()
        .arg(
            arg!(<INPUT> "DDS file containing a BC7 texture")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(<OUTPUT> "PNG path for the block debug image")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--decoded <PATH> "Also write the decoded texture as a PNG")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(--serial "Decode on a single thread").action(ArgAction::SetTrue))
        .get_matches();

    let input = matches.get_one::<PathBuf>("INPUT").expect("required");
    let output = matches.get_one::<PathBuf>("OUTPUT").expect("required");

    let mut reader = BufReader::new(
        File::open(input)
            .into_diagnostic()
            .wrap_err_with(|| format!("Could not open {}", input.display()))?,
    );
    let texture = dds::read_texture(&mut reader)
        .into_diagnostic()
        .wrap_err_with(|| format!("Could not read {}", input.display()))?;

    let dimensions = texture.dimensions();
    info!(
        "Decoding {}x{} {} texture ({} blocks)",
        dimensions.width(),
        dimensions.height(),
        texture.format,
        texture.blocks().len()
    );

    let decoded = if matches.get_flag("serial") {
        texture.decode_serial()
    } else {
        texture.decode()
    }
    .into_diagnostic()?;

    debug_image(&decoded)
        .into_diagnostic()?
        .save(output)
        .into_diagnostic()
        .wrap_err_with(|| format!("Could not write {}", output.display()))?;
    info!("Wrote debug image to {}", output.display());

    if let Some(path) = matches.get_one::<PathBuf>("decoded") {
        decoded
            .to_image()
            .save(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Could not write {}", path.display()))?;
        info!("Wrote decoded image to {}", path.display());
    }

    Ok(())
}
