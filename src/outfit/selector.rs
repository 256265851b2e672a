//! Random outfit generation from the assigned category folders

use crate::io::error::{OutfitError, Result};
use crate::outfit::toggles::{Toggle, ToggleState, active_bottom, active_top};
use crate::wardrobe::category::Category;
use crate::wardrobe::folders::{Wardrobe, list_images};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::path::{Path, PathBuf};

/// Display position within a generated outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotPosition {
    /// Top, short top or button-up
    Top,
    /// Optional jacket or hoodie
    Layer,
    /// Bottom or shorts
    Bottom,
    /// Footwear
    Shoes,
}

impl SlotPosition {
    /// Stable lowercase identifier
    pub const fn key(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Layer => "layer",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
        }
    }
}

/// Outcome of drawing an image for one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    /// An image was drawn
    Selected(PathBuf),
    /// The folder exists but holds no supported images
    NoImageFound,
    /// No folder is assigned to the category, or it no longer exists
    FolderUnavailable,
}

impl Pick {
    /// Drawn image path, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Selected(path) => Some(path),
            Self::NoImageFound | Self::FolderUnavailable => None,
        }
    }
}

/// One displayed position of an outfit and what was drawn for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Where the slot is displayed
    pub position: SlotPosition,
    /// Category the image was drawn from
    pub category: Category,
    /// Drawn image or the reason there is none
    pub pick: Pick,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pick {
            Pick::Selected(path) => write!(f, "{}: {}", self.category, path.display()),
            Pick::NoImageFound => write!(f, "{}: no image found", self.category),
            Pick::FolderUnavailable => write!(f, "{}: not available", self.category),
        }
    }
}

/// A freshly drawn combination of clothing images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outfit {
    /// Top, short top or button-up
    pub top: Slot,
    /// Layer, present only when the layer switch is on
    pub layer: Option<Slot>,
    /// Bottom or shorts
    pub bottom: Slot,
    /// Shoes
    pub shoes: Slot,
}

impl Outfit {
    /// Displayed slots in order: top, layer (if requested), bottom, shoes
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        std::iter::once(&self.top)
            .chain(self.layer.as_ref())
            .chain([&self.bottom, &self.shoes])
    }
}

/// Draw one random image per displayed slot
///
/// The top and bottom categories follow the switch positions in `toggles`;
/// shoes are always drawn and the layer only when its switch is on. Each slot
/// is drawn independently and uniformly. Empty or missing folders give a
/// per-slot [`Pick`] instead of failing the whole outfit.
///
/// # Errors
///
/// Returns [`OutfitError::MissingRequiredFolder`] naming every one of top,
/// bottom and shoes that is unassigned or no longer exists. No image is drawn
/// in that case.
pub fn generate_outfit<R>(wardrobe: &Wardrobe, toggles: &ToggleState, rng: &mut R) -> Result<Outfit>
where
    R: Rng + ?Sized,
{
    let missing = wardrobe.missing_required();
    if !missing.is_empty() {
        return Err(OutfitError::MissingRequiredFolder { missing });
    }

    let top = draw_slot(wardrobe, SlotPosition::Top, active_top(toggles), rng);
    let layer = toggles
        .is_enabled(Toggle::Layer)
        .then(|| draw_slot(wardrobe, SlotPosition::Layer, Category::Layer, rng));
    let bottom = draw_slot(wardrobe, SlotPosition::Bottom, active_bottom(toggles), rng);
    let shoes = draw_slot(wardrobe, SlotPosition::Shoes, Category::Shoes, rng);

    Ok(Outfit {
        top,
        layer,
        bottom,
        shoes,
    })
}

fn draw_slot<R>(
    wardrobe: &Wardrobe,
    position: SlotPosition,
    category: Category,
    rng: &mut R,
) -> Slot
where
    R: Rng + ?Sized,
{
    Slot {
        position,
        category,
        pick: pick_image(wardrobe.folder(category), category, rng),
    }
}

/// Draw one supported image uniformly from `folder`
pub fn pick_image<R>(folder: Option<&Path>, category: Category, rng: &mut R) -> Pick
where
    R: Rng + ?Sized,
{
    let Some(folder) = folder.filter(|folder| folder.exists()) else {
        return Pick::FolderUnavailable;
    };

    let images = match list_images(folder) {
        Ok(images) => images,
        Err(err) => {
            log::warn!("{err}");
            return Pick::NoImageFound;
        }
    };

    images.choose(rng).map_or_else(
        || {
            let err = OutfitError::EmptyCategoryFolder {
                category,
                path: folder.to_path_buf(),
            };
            log::warn!("{err}");
            Pick::NoImageFound
        },
        |image| Pick::Selected(image.clone()),
    )
}
