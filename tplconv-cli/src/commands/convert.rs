//! Convert command - encode an image file as a TPL texture.

use std::path::{Path, PathBuf};

use clap::Args;
use tplconv::{TextureEncoder, TextureFormat, TplTextureEncoder};
use tracing::info;

use super::common::FormatArg;
use crate::error::CliError;

/// Arguments for `tplconv convert`.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Source image (any format the image crate can decode)
    pub input: PathBuf,

    /// Output file (defaults to the input path with a .tpl extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Texel format to encode
    #[arg(short, long, value_enum, default_value_t = FormatArg::Rgb5a3)]
    pub format: FormatArg,
}

/// Run the convert command.
pub fn run(args: ConvertArgs) -> Result<(), CliError> {
    let encoder = TplTextureEncoder::new(TextureFormat::from(args.format));
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input, &encoder));

    let image = image::open(&args.input).map_err(|source| CliError::ImageOpen {
        path: args.input.clone(),
        source,
    })?;

    let bytes = encoder.encode_source(&image)?;

    std::fs::write(&output, &bytes).map_err(|source| CliError::Io {
        path: output.clone(),
        source,
    })?;

    info!(
        input = %args.input.display(),
        output = %output.display(),
        format = %encoder.format(),
        bytes = bytes.len(),
        "Wrote TPL texture"
    );
    println!(
        "{} → {} ({}, {} bytes)",
        args.input.display(),
        output.display(),
        encoder.name(),
        bytes.len()
    );

    Ok(())
}

fn default_output_path(input: &Path, encoder: &TplTextureEncoder) -> PathBuf {
    input.with_extension(encoder.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tplconv::tpl::{TplHeader, HEADER_SIZE};

    #[test]
    fn test_default_output_path() {
        let encoder = TplTextureEncoder::new(TextureFormat::I4);
        assert_eq!(
            default_output_path(Path::new("art/logo.png"), &encoder),
            PathBuf::from("art/logo.tpl")
        );
    }

    #[test]
    fn test_convert_writes_tpl() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("pixel.png");
        RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]))
            .save(&input)
            .unwrap();

        run(ConvertArgs {
            input: input.clone(),
            output: None,
            format: FormatArg::Rgb5a3,
        })
        .unwrap();

        let bytes = std::fs::read(dir.path().join("pixel.tpl")).unwrap();
        let header = TplHeader::from_bytes(&bytes).unwrap();
        assert_eq!(header.image.width, 3);
        assert_eq!(header.image.format(), Some(TextureFormat::RGB5A3));
        assert_eq!(bytes.len(), HEADER_SIZE + 32);
        assert_eq!(&bytes[HEADER_SIZE..HEADER_SIZE + 2], &[0x80, 0x00]);
    }

    #[test]
    fn test_convert_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(ConvertArgs {
            input: dir.path().join("missing.png"),
            output: Some(dir.path().join("out.tpl")),
            format: FormatArg::I4,
        });

        assert!(matches!(result, Err(CliError::ImageOpen { .. })));
        assert!(!dir.path().join("out.tpl").exists());
    }
}
