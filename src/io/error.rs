//! Error types for atlas loading, map construction and export

use crate::tiles::autotile::AutoTile;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Main error type for all autotile operations
#[derive(Debug)]
pub enum AutotileError {
    /// Failed to decode a sprite sheet or mask image
    ImageLoad {
        /// Path to the image file (`<stream>` when read from a reader)
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Source data doesn't match the packed autotile layout
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Construction parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An autotile was destroyed while other owners still reference it
    StillReferenced {
        /// The handle passed to `destroy`, returned so the caller can retry
        tile: Arc<AutoTile>,
        /// Number of live references, including the one being destroyed
        references: usize,
    },

    /// Failed to save a rendered frame to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AutotileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::StillReferenced { references, .. } => {
                write!(
                    f,
                    "Autotile is still referenced by {} other owner(s)",
                    references.saturating_sub(1)
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AutotileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for autotile results
pub type Result<T> = std::result::Result<T, AutotileError>;

impl From<image::ImageError> for AutotileError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<stream>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AutotileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AutotileError {
    AutotileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> AutotileError {
    AutotileError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
