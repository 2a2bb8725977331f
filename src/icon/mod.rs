pub mod resample;

use std::fmt;
use std::path::PathBuf;

/// Error type for icon generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    InputNotFound { path: PathBuf },
    InvalidSize { size: u32 },
    NoSizes,
    OutputDirCreationFailed { path: PathBuf, reason: String },
    DecodeFailed { path: PathBuf, reason: String },
    ResizeFailed { size: u32, reason: String },
    WriteFailed { path: PathBuf, reason: String },
    ConfigError { path: PathBuf, reason: String },
    WorkingDirUnavailable { reason: String },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::InputNotFound { path } => {
                write!(f, "input file '{}' not found", path.display())
            }
            IconError::InvalidSize { size } => {
                write!(f, "invalid icon size {}: sizes must be at least 1 pixel", size)
            }
            IconError::NoSizes => write!(f, "no icon sizes configured"),
            IconError::OutputDirCreationFailed { path, reason } => {
                write!(
                    f,
                    "failed to create output directory '{}': {}",
                    path.display(),
                    reason
                )
            }
            IconError::DecodeFailed { path, reason } => {
                write!(f, "failed to decode '{}': {}", path.display(), reason)
            }
            IconError::ResizeFailed { size, reason } => {
                write!(f, "failed to resize to {}x{}: {}", size, size, reason)
            }
            IconError::WriteFailed { path, reason } => {
                write!(f, "failed to write '{}': {}", path.display(), reason)
            }
            IconError::ConfigError { path, reason } => {
                write!(f, "config error in '{}': {}", path.display(), reason)
            }
            IconError::WorkingDirUnavailable { reason } => {
                write!(f, "cannot determine the working directory: {}", reason)
            }
        }
    }
}

impl std::error::Error for IconError {}

/// Progress event emitted while icons are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Source image is not square and will be stretched
    NotSquare { width: u32, height: u32 },
    /// Icon written to disk
    Generated {
        path: PathBuf,
        size: u32,
        index: usize,
        total: usize,
    },
}

/// File name of the icon generated for `size`.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}.png", size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_includes_size() {
        assert_eq!(icon_file_name(16), "icon-16.png");
        assert_eq!(icon_file_name(128), "icon-128.png");
    }

    #[test]
    fn display_input_not_found() {
        let err = IconError::InputNotFound {
            path: PathBuf::from("assets/logo.png"),
        };
        assert_eq!(err.to_string(), "input file 'assets/logo.png' not found");
    }

    #[test]
    fn display_write_failed_includes_reason() {
        let err = IconError::WriteFailed {
            path: PathBuf::from("out/icon-16.png"),
            reason: "permission denied".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("out/icon-16.png"));
        assert!(message.contains("permission denied"));
    }
}
