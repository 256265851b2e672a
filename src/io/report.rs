//! Plain-text summaries of discovered folders and generated outfits

use crate::outfit::render::{RenderedSlot, SlotRender};
use crate::wardrobe::category::Category;
use crate::wardrobe::folders::Wardrobe;
use std::fmt::Write;

/// One line per category: a check mark and folder name, or a cross
pub fn folder_status(wardrobe: &Wardrobe) -> String {
    let mut status = String::from("Folders:\n");

    for category in Category::ALL {
        let label = category.label();
        match wardrobe.folder(category) {
            Some(folder) => {
                let name = folder
                    .file_name()
                    .map_or_else(|| folder.to_string_lossy(), |name| name.to_string_lossy());
                let _ = writeln!(status, "  {label:<13} ✓ {name}");
            }
            None => {
                let _ = writeln!(status, "  {label:<13} ✗ not found");
            }
        }
    }

    status
}

/// Text shown for a rendered slot
pub fn slot_line(rendered: &RenderedSlot<'_>) -> String {
    match (&rendered.render, rendered.slot.pick.path()) {
        (SlotRender::LoadFailed, Some(path)) => {
            format!("{}: failed to load {}", rendered.slot.category, path.display())
        }
        _ => rendered.slot.to_string(),
    }
}

/// Heading and slot lines for one outfit
pub fn outfit_summary(number: usize, slots: &[RenderedSlot<'_>]) -> String {
    let mut summary = format!("Outfit {number}:\n");
    for rendered in slots {
        let _ = writeln!(summary, "  {}", slot_line(rendered));
    }
    summary
}
