//! Bounded-depth discovery of category folders below a set of search roots

use crate::io::error::OutfitError;
use crate::wardrobe::category::{AliasTable, Category};
use crate::wardrobe::folders::{Wardrobe, contains_images};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Receives notifications while the folder search runs
///
/// All methods default to doing nothing.
pub trait ScanObserver {
    /// A search root is about to be walked
    fn root_started(&mut self, _root: &Path) {}

    /// A directory's children are about to be inspected
    ///
    /// `depth` counts levels below the search root, which has depth 0.
    fn directory_visited(&mut self, _directory: &Path, _depth: usize) {}

    /// A qualifying folder was assigned to a category
    fn folder_found(&mut self, _category: Category, _folder: &Path) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentScan;

impl ScanObserver for SilentScan {}

/// Search `roots` in order for a folder per category of `aliases`
///
/// See [`resolve_with`].
pub fn resolve(roots: &[PathBuf], aliases: &AliasTable, max_depth: usize) -> Wardrobe {
    resolve_with(roots, aliases, max_depth, &mut SilentScan)
}

/// Search `roots` in order for a folder per category of `aliases`, reporting progress
///
/// Directories less than `max_depth` levels below a root have their
/// subdirectory names compared against each unresolved category's aliases.
/// The first matching subdirectory that directly contains a supported image
/// is assigned. The search ends as soon as every category in the table has a
/// folder. Missing roots and unreadable directories are skipped.
pub fn resolve_with<O>(
    roots: &[PathBuf],
    aliases: &AliasTable,
    max_depth: usize,
    observer: &mut O,
) -> Wardrobe
where
    O: ScanObserver + ?Sized,
{
    let mut wardrobe = Wardrobe::new();

    if max_depth == 0 {
        return wardrobe;
    }

    for root in roots {
        if is_complete(&wardrobe, aliases) {
            break;
        }
        if !root.exists() {
            log::debug!("Search root does not exist: {}", root.display());
            continue;
        }

        observer.root_started(root);
        search_root(root, aliases, max_depth, &mut wardrobe, observer);
    }

    wardrobe
}

fn search_root<O>(
    root: &Path,
    aliases: &AliasTable,
    max_depth: usize,
    wardrobe: &mut Wardrobe,
    observer: &mut O,
) where
    O: ScanObserver + ?Sized,
{
    // Directories at max_depth are candidates only; their children are never read
    let walker = WalkDir::new(root)
        .max_depth(max_depth - 1)
        .sort_by_file_name()
        .into_iter();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        observer.directory_visited(entry.path(), entry.depth());

        let children = match subdirectory_names(entry.path()) {
            Ok(children) => children,
            Err(err) => {
                log::debug!("{err}");
                continue;
            }
        };

        for category in aliases.categories() {
            if wardrobe.contains(category) {
                continue;
            }
            if let Some(folder) = qualifying_folder(entry.path(), category, aliases, &children) {
                log::info!("Found {category} folder: {}", folder.display());
                observer.folder_found(category, &folder);
                wardrobe.set(category, folder);
            }
        }

        if is_complete(wardrobe, aliases) {
            return;
        }
    }
}

// First alias-named child that holds at least one image
fn qualifying_folder(
    parent: &Path,
    category: Category,
    aliases: &AliasTable,
    children: &[String],
) -> Option<PathBuf> {
    aliases
        .matching_names(category, children)
        .map(|name| parent.join(name))
        .find(|folder| contains_images(folder))
}

fn subdirectory_names(directory: &Path) -> Result<Vec<String>, OutfitError> {
    let entries =
        std::fs::read_dir(directory).map_err(|e| OutfitError::InaccessibleDirectory {
            path: directory.to_path_buf(),
            source: e,
        })?;

    Ok(entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect())
}

fn is_complete(wardrobe: &Wardrobe, aliases: &AliasTable) -> bool {
    aliases
        .categories()
        .all(|category| wardrobe.contains(category))
}
