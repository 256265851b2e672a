//! Turning drawn slots into display-ready thumbnails

use crate::io::image::prepare_thumbnail;
use crate::outfit::selector::{Outfit, Pick, Slot};
use image::RgbaImage;

/// Display state of a single slot
#[derive(Debug, Clone, PartialEq)]
pub enum SlotRender {
    /// Processed thumbnail ready to show
    Loaded(RgbaImage),
    /// The category folder had no images
    NoImageFound,
    /// The category has no usable folder
    Unavailable,
    /// An image was drawn but could not be decoded
    LoadFailed,
}

/// A slot paired with its display state
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSlot<'a> {
    /// Slot this render belongs to
    pub slot: &'a Slot,
    /// What to show for it
    pub render: SlotRender,
}

/// Prepare the thumbnail for one slot
///
/// Decoding failures are logged and reported as [`SlotRender::LoadFailed`].
pub fn render_slot(slot: &Slot) -> SlotRender {
    match &slot.pick {
        Pick::Selected(path) => match prepare_thumbnail(path) {
            Ok(thumbnail) => SlotRender::Loaded(thumbnail),
            Err(err) => {
                log::warn!("{err}");
                SlotRender::LoadFailed
            }
        },
        Pick::NoImageFound => SlotRender::NoImageFound,
        Pick::FolderUnavailable => SlotRender::Unavailable,
    }
}

/// Prepare thumbnails for every displayed slot, in display order
pub fn render_outfit(outfit: &Outfit) -> Vec<RenderedSlot<'_>> {
    outfit
        .slots()
        .map(|slot| RenderedSlot {
            slot,
            render: render_slot(slot),
        })
        .collect()
}
