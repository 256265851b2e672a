//! Switch handling and outfit generation

/// Slot thumbnails ready for display
pub mod render;
/// Random image selection per slot
pub mod selector;
/// Category switches and their exclusivity rules
pub mod toggles;
