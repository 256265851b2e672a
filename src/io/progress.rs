//! Spinner shown while the folder search walks the search roots

use crate::io::configuration::SPINNER_TICK_MS;
use crate::wardrobe::category::Category;
use crate::wardrobe::resolver::ScanObserver;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
});

/// Tracks folder search progress on the terminal
///
/// Shows the root currently being searched, how many directories have been
/// inspected and which categories have been found so far.
pub struct ProgressManager {
    spinner: ProgressBar,
    directories_visited: usize,
    found: Vec<Category>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create and start a spinner
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));

        Self {
            spinner,
            directories_visited: 0,
            found: Vec::new(),
        }
    }

    /// Number of directories inspected so far
    pub const fn directories_visited(&self) -> usize {
        self.directories_visited
    }

    /// Clear the spinner from the terminal
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    fn update_message(&self) {
        let found = if self.found.is_empty() {
            String::from("none")
        } else {
            self.found
                .iter()
                .map(|category| category.label())
                .collect::<Vec<_>>()
                .join(", ")
        };
        self.spinner.set_message(format!(
            "{} directories, found: {found}",
            self.directories_visited
        ));
    }
}

impl ScanObserver for ProgressManager {
    fn root_started(&mut self, root: &Path) {
        self.spinner.set_prefix(format!("Searching {}", root.display()));
        self.update_message();
    }

    fn directory_visited(&mut self, _directory: &Path, _depth: usize) {
        self.directories_visited += 1;
        self.update_message();
    }

    fn folder_found(&mut self, category: Category, _folder: &Path) {
        self.found.push(category);
        self.update_message();
    }
}
