//! CLI error types.

use std::fmt;
use std::path::PathBuf;

use tplconv::TextureError;

/// Errors reported by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// The input image could not be opened or decoded.
    ImageOpen {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Reading or writing a file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The conversion itself failed.
    Texture(TextureError),

    /// The file is not a TPL texture.
    NotTpl(PathBuf),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ImageOpen { path, source } => {
                write!(f, "Failed to open image {}: {}", path.display(), source)
            }
            CliError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            CliError::Texture(e) => write!(f, "Conversion failed: {}", e),
            CliError::NotTpl(path) => {
                write!(f, "{} is not a TPL texture", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ImageOpen { source, .. } => Some(source),
            CliError::Io { source, .. } => Some(source),
            CliError::Texture(e) => Some(e),
            CliError::NotTpl(_) => None,
        }
    }
}

impl From<TextureError> for CliError {
    fn from(e: TextureError) -> Self {
        CliError::Texture(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display_not_tpl() {
        let err = CliError::NotTpl(PathBuf::from("a.png"));
        assert_eq!(err.to_string(), "a.png is not a TPL texture");
    }

    #[test]
    fn test_cli_error_from_texture_error() {
        let err: CliError = TextureError::InvalidImage {
            width: 0,
            height: 0,
            reason: "dimensions must be non-zero".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Conversion failed: Invalid image 0×0: dimensions must be non-zero"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
