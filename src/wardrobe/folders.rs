//! Per-category folder assignments and image file listing

use crate::io::configuration::IMAGE_EXTENSIONS;
use crate::io::error::{OutfitError, Result};
use crate::wardrobe::category::Category;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Check whether a path names a supported image by its extension
///
/// Extensions are compared exactly as listed, so `photo.JPG` does not qualify.
/// Hidden files are never treated as images.
pub fn is_supported_image(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .is_none_or(|name| name.as_encoded_bytes().starts_with(b"."));

    !hidden
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

/// List the supported image files directly inside `folder`, sorted by path
///
/// # Errors
///
/// Returns [`OutfitError::InaccessibleDirectory`] if the folder cannot be read
pub fn list_images(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder).map_err(|e| OutfitError::InaccessibleDirectory {
        path: folder.to_path_buf(),
        source: e,
    })?;

    let mut images: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_supported_image(path) && path.is_file())
        .collect();
    images.sort();
    Ok(images)
}

/// Whether `folder` holds at least one supported image
///
/// Unreadable folders count as empty.
pub fn contains_images(folder: &Path) -> bool {
    std::fs::read_dir(folder).is_ok_and(|entries| {
        entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .any(|path| is_supported_image(&path) && path.is_file())
    })
}

/// Folder assigned to each category, either discovered or chosen manually
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wardrobe {
    folders: BTreeMap<Category, PathBuf>,
}

impl Wardrobe {
    /// Create a wardrobe with no folders assigned
    pub const fn new() -> Self {
        Self {
            folders: BTreeMap::new(),
        }
    }

    /// Folder assigned to `category`, if any
    pub fn folder(&self, category: Category) -> Option<&Path> {
        self.folders.get(&category).map(PathBuf::as_path)
    }

    /// Assign a folder to a category, replacing any previous assignment
    ///
    /// The folder's contents are not checked.
    pub fn set(&mut self, category: Category, folder: impl Into<PathBuf>) {
        self.folders.insert(category, folder.into());
    }

    /// Builder form of [`Wardrobe::set`]
    #[must_use]
    pub fn with(mut self, category: Category, folder: impl Into<PathBuf>) -> Self {
        self.set(category, folder);
        self
    }

    /// Whether `category` has a folder assigned
    pub fn contains(&self, category: Category) -> bool {
        self.folders.contains_key(&category)
    }

    /// Number of categories with a folder assigned
    pub fn assigned_count(&self) -> usize {
        self.folders.len()
    }

    /// Required categories whose folder is unassigned or no longer exists
    pub fn missing_required(&self) -> Vec<Category> {
        Category::REQUIRED
            .into_iter()
            .filter(|category| self.folder(*category).is_none_or(|folder| !folder.exists()))
            .collect()
    }
}
