//! Error types for folder discovery, outfit generation and image handling

use crate::wardrobe::category::Category;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all outfit operations
#[derive(Debug)]
pub enum OutfitError {
    /// One or more of the top, bottom and shoes folders is unassigned or gone
    ///
    /// Lists every missing category, not just the first one found.
    MissingRequiredFolder {
        /// Required categories without a usable folder
        missing: Vec<Category>,
    },

    /// A category folder holds no supported image files
    EmptyCategoryFolder {
        /// Category the folder is assigned to
        category: Category,
        /// The empty folder
        path: PathBuf,
    },

    /// Failed to open or decode an image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a thumbnail to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// A directory could not be listed while searching or selecting
    InaccessibleDirectory {
        /// Directory that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
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

    /// User supplied value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for OutfitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredFolder { missing } => {
                let names = missing
                    .iter()
                    .map(|category| category.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Required folders are missing or invalid: {names}")
            }
            Self::EmptyCategoryFolder { category, path } => {
                write!(f, "No images found in {category} folder '{}'", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export image to '{}': {source}", path.display())
            }
            Self::InaccessibleDirectory { path, source } => {
                write!(f, "Cannot read directory '{}': {source}", path.display())
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for OutfitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::InaccessibleDirectory { source, .. } | Self::FileSystem { source, .. } => {
                Some(source)
            }
            Self::MissingRequiredFolder { .. }
            | Self::EmptyCategoryFolder { .. }
            | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for outfit results
pub type Result<T> = std::result::Result<T, OutfitError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> OutfitError {
    OutfitError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
