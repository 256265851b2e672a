//! Random outfit assembly from folders of clothing images
//!
//! Category folders (tops, bottoms, shoes and optional extras) are discovered
//! by name below a set of search roots. An outfit is then drawn by picking one
//! image per displayed slot, with a handful of switches deciding which
//! categories fill the top and bottom slots.

#![forbid(unsafe_code)]

/// Command-line front end, configuration, errors and image processing
pub mod io;
/// Category switches, outfit generation and thumbnail rendering
pub mod outfit;
/// Categories, their folder aliases and folder discovery
pub mod wardrobe;

pub use io::error::{OutfitError, Result};
