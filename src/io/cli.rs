//! Command-line front end: folder discovery, switch handling and outfit display

use crate::io::configuration::{DEFAULT_OUTFIT_COUNT, MAX_SEARCH_DEPTH, default_search_roots};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_thumbnail;
use crate::io::progress::ProgressManager;
use crate::io::report::{folder_status, outfit_summary};
use crate::outfit::render::{RenderedSlot, SlotRender, render_outfit};
use crate::outfit::selector::generate_outfit;
use crate::outfit::toggles::{Toggle, ToggleEvent, ToggleState, apply_toggle};
use crate::wardrobe::category::{AliasTable, Category};
use crate::wardrobe::folders::Wardrobe;
use crate::wardrobe::resolver::{resolve, resolve_with};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "outfit-roulette")]
#[command(
    author,
    version,
    about = "Assemble a random outfit from your clothing image folders"
)]
/// Command-line arguments for outfit generation
// One flag per category switch
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Leave out the layer (jacket/hoodie) slot
    #[arg(long)]
    pub no_layer: bool,

    /// Show a short top instead of the regular top
    #[arg(long)]
    pub short_top: bool,

    /// Show shorts instead of the regular bottom
    #[arg(long)]
    pub short_bottom: bool,

    /// Show a button-up instead of the regular top (wins over --short-top)
    #[arg(long)]
    pub button_up: bool,

    /// Use this folder for tops instead of searching
    #[arg(long, value_name = "DIR")]
    pub top: Option<PathBuf>,

    /// Use this folder for layers instead of searching
    #[arg(long, value_name = "DIR")]
    pub layer: Option<PathBuf>,

    /// Use this folder for bottoms instead of searching
    #[arg(long, value_name = "DIR")]
    pub bottom: Option<PathBuf>,

    /// Use this folder for shoes instead of searching
    #[arg(long, value_name = "DIR")]
    pub shoes: Option<PathBuf>,

    /// Use this folder for short tops instead of searching
    #[arg(long, value_name = "DIR")]
    pub short_top_dir: Option<PathBuf>,

    /// Use this folder for shorts instead of searching
    #[arg(long, value_name = "DIR")]
    pub short_bottom_dir: Option<PathBuf>,

    /// Use this folder for button-ups instead of searching
    #[arg(long, value_name = "DIR")]
    pub button_up_dir: Option<PathBuf>,

    /// Random seed for reproducible picks
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of outfits to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_OUTFIT_COUNT)]
    pub count: usize,

    /// Write processed thumbnails as PNG files into this directory
    #[arg(short, long, value_name = "DIR")]
    pub render: Option<PathBuf>,

    /// Suppress the search spinner
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Switch positions requested on the command line
    ///
    /// Flags are applied as switch events on top of the default state, in the
    /// order layer, short top, short bottom, button-up.
    pub fn toggle_state(&self) -> ToggleState {
        let mut events = Vec::new();
        if self.no_layer {
            events.push(ToggleEvent::disable(Toggle::Layer));
        }
        if self.short_top {
            events.push(ToggleEvent::enable(Toggle::ShortTop));
        }
        if self.short_bottom {
            events.push(ToggleEvent::enable(Toggle::ShortBottom));
        }
        if self.button_up {
            events.push(ToggleEvent::enable(Toggle::ButtonUp));
        }

        events
            .into_iter()
            .fold(ToggleState::default(), apply_toggle)
    }

    /// Folders chosen manually on the command line
    pub fn overrides(&self) -> Vec<(Category, &Path)> {
        [
            (Category::Top, &self.top),
            (Category::Layer, &self.layer),
            (Category::Bottom, &self.bottom),
            (Category::Shoes, &self.shoes),
            (Category::ShortTop, &self.short_top_dir),
            (Category::ShortBottom, &self.short_bottom_dir),
            (Category::ButtonUp, &self.button_up_dir),
        ]
        .into_iter()
        .filter_map(|(category, folder)| folder.as_deref().map(|folder| (category, folder)))
        .collect()
    }

    /// Check if the search spinner should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check that the arguments describe something that can be run
    ///
    /// # Errors
    ///
    /// Returns an error if the outfit count is zero
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &"at least one outfit must be generated",
            ));
        }
        Ok(())
    }
}

/// Runs one session: discover folders, generate outfits, print and export them
pub struct OutfitSession {
    cli: Cli,
    roots: Vec<PathBuf>,
    aliases: AliasTable,
    max_depth: usize,
}

impl OutfitSession {
    /// Create a session that searches the default roots with the default aliases
    pub fn new(cli: Cli) -> Self {
        Self::with_search(cli, default_search_roots(), AliasTable::default(), MAX_SEARCH_DEPTH)
    }

    /// Create a session with explicit search settings
    pub const fn with_search(
        cli: Cli,
        roots: Vec<PathBuf>,
        aliases: AliasTable,
        max_depth: usize,
    ) -> Self {
        Self {
            cli,
            roots,
            aliases,
            max_depth,
        }
    }

    /// Search for category folders and apply the manual overrides
    pub fn discover(&self) -> Wardrobe {
        let wardrobe = if self.cli.should_show_progress() {
            let mut progress = ProgressManager::new();
            let wardrobe = resolve_with(&self.roots, &self.aliases, self.max_depth, &mut progress);
            progress.finish();
            log::debug!(
                "Search inspected {} directories",
                progress.directories_visited()
            );
            wardrobe
        } else {
            resolve(&self.roots, &self.aliases, self.max_depth)
        };
        log::debug!(
            "Search assigned {} of {} category folders",
            wardrobe.assigned_count(),
            Category::ALL.len()
        );

        self.cli
            .overrides()
            .into_iter()
            .fold(wardrobe, |wardrobe, (category, folder)| {
                log::info!("Using {category} folder: {}", folder.display());
                wardrobe.with(category, folder)
            })
    }

    /// Run the whole session, appending the printed report to `report`
    ///
    /// The folder status is written before any outfit is generated, so it is
    /// kept even when generation fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, a required folder is
    /// missing, or a thumbnail cannot be written
    pub fn run(&self, report: &mut String) -> Result<()> {
        self.cli.validate()?;

        let wardrobe = self.discover();
        report.push_str(&folder_status(&wardrobe));

        let toggles = self.cli.toggle_state();
        let mut rng = self
            .cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        for number in 1..=self.cli.count {
            let outfit = generate_outfit(&wardrobe, &toggles, &mut rng)?;
            let rendered = render_outfit(&outfit);

            if let Some(directory) = &self.cli.render {
                Self::export(directory, number, &rendered)?;
            }

            report.push('\n');
            report.push_str(&outfit_summary(number, &rendered));
        }

        Ok(())
    }

    fn export(directory: &Path, number: usize, rendered: &[RenderedSlot<'_>]) -> Result<()> {
        for slot in rendered {
            if let SlotRender::Loaded(thumbnail) = &slot.render {
                let path = Self::thumbnail_path(directory, number, slot);
                export_thumbnail(thumbnail, &path)?;
            }
        }
        Ok(())
    }

    fn thumbnail_path(directory: &Path, number: usize, rendered: &RenderedSlot<'_>) -> PathBuf {
        directory.join(format!("{number}_{}.png", rendered.slot.position.key()))
    }
}
