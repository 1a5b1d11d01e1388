//! Inspect command - print the header of a TPL file.

use std::path::PathBuf;

use clap::Args;
use tplconv::tpl::TplHeader;

use crate::error::CliError;

/// Arguments for `tplconv inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// TPL file to inspect
    pub file: PathBuf,
}

/// Run the inspect command.
pub fn run(args: InspectArgs) -> Result<(), CliError> {
    let bytes = std::fs::read(&args.file).map_err(|source| CliError::Io {
        path: args.file.clone(),
        source,
    })?;

    let header =
        TplHeader::from_bytes(&bytes).ok_or_else(|| CliError::NotTpl(args.file.clone()))?;
    print!("{}", describe(&header, bytes.len()));
    Ok(())
}

fn describe(header: &TplHeader, file_len: usize) -> String {
    let image = &header.image;
    let format = image
        .format()
        .map(|f| f.to_string())
        .unwrap_or_else(|| format!("unsupported ({})", image.format));

    let mut out = String::new();
    out.push_str(&format!("Images:      {}\n", header.file.image_count));
    out.push_str(&format!("Dimensions:  {}×{}\n", image.width, image.height));
    out.push_str(&format!("Format:      {}\n", format));
    out.push_str(&format!("Data offset: {}\n", image.data_offset));
    out.push_str(&format!(
        "Wrap:        {:?} / {:?}\n",
        image.wrap_s, image.wrap_t
    ));
    out.push_str(&format!(
        "Filter:      {:?} / {:?}\n",
        image.min_filter, image.mag_filter
    ));
    out.push_str(&format!("File size:   {} bytes\n", file_len));
    out
}
