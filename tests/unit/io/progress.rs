//! Tests for search progress tracking

#[cfg(test)]
mod tests {
    use outfit_roulette::io::progress::ProgressManager;
    use outfit_roulette::wardrobe::Category;
    use outfit_roulette::wardrobe::resolver::ScanObserver;
    use std::path::Path;

    // Tests visited directories are counted
    // Verified by not incrementing the counter
    #[test]
    fn test_directories_visited_counter() {
        let mut progress = ProgressManager::new();

        progress.root_started(Path::new("/home/u"));
        progress.directory_visited(Path::new("/home/u"), 0);
        progress.directory_visited(Path::new("/home/u/Closet"), 1);

        assert_eq!(progress.directories_visited(), 2);
        progress.finish();
    }

    // Tests found folders are not counted as visited directories
    // Verified by incrementing the counter on every notification
    #[test]
    fn test_found_folders_not_counted() {
        let mut progress = ProgressManager::default();

        progress.directory_visited(Path::new("/home/u"), 0);
        progress.folder_found(Category::Shoes, Path::new("/home/u/Shoes"));
        progress.folder_found(Category::Top, Path::new("/home/u/Top"));

        assert_eq!(progress.directories_visited(), 1);
        progress.finish();
    }
}
