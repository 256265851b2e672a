//! Fixed search, selection and thumbnail constants

use std::path::PathBuf;

// Folder discovery
/// Number of directory levels below each search root that are inspected
pub const MAX_SEARCH_DEPTH: usize = 3;

/// File extensions recognised as clothing images (matched case-sensitively)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

// Background substitution
/// Channel value each of R, G and B must exceed for a pixel to count as white
pub const WHITE_THRESHOLD: u8 = 240;

// Thumbnail bounds
/// Maximum thumbnail width in pixels
pub const THUMBNAIL_MAX_WIDTH: u32 = 250;
/// Maximum thumbnail height in pixels
pub const THUMBNAIL_MAX_HEIGHT: u32 = 180;

// Presentation defaults
/// Number of outfits generated per run
pub const DEFAULT_OUTFIT_COUNT: usize = 1;
/// Spinner refresh interval while scanning
pub const SPINNER_TICK_MS: u64 = 120;

/// Drive roots searched after the user directories
pub const DRIVE_ROOTS: [&str; 2] = ["C:\\", "D:\\"];

/// Ordered list of directories the folder search starts from
///
/// The home directory comes first, followed by its desktop, documents and
/// pictures folders, then the drive roots. Entries that cannot be determined
/// on this platform are left out.
pub fn default_search_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Some(home) = dirs::home_dir() {
        roots.push(home.clone());
        roots.push(home.join("Desktop"));
        roots.push(home.join("Documents"));
        roots.push(home.join("Pictures"));
    }

    roots.extend(DRIVE_ROOTS.iter().map(PathBuf::from));
    roots
}
