//! Where clothing images live

/// Category identities and folder-name aliases
pub mod category;
/// Folder assignments and image listing
pub mod folders;
/// Bounded-depth folder discovery
pub mod resolver;

pub use category::{AliasTable, Category};
pub use folders::Wardrobe;
