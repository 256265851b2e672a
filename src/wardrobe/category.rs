//! Clothing categories and the folder-name aliases that identify them

use std::collections::BTreeMap;
use std::fmt;

/// Logical clothing slot a folder of images belongs to
///
/// Ordering follows declaration order, which is also the order categories are
/// checked in during folder discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Regular long tops
    Top,
    /// Jackets and hoodies worn over the top
    Layer,
    /// Regular trousers
    Bottom,
    /// Footwear
    Shoes,
    /// T-shirts and other short tops
    ShortTop,
    /// Shorts
    ShortBottom,
    /// Shirts and blouses
    ButtonUp,
}

impl Category {
    /// Every category in discovery order
    pub const ALL: [Self; 7] = [
        Self::Top,
        Self::Layer,
        Self::Bottom,
        Self::Shoes,
        Self::ShortTop,
        Self::ShortBottom,
        Self::ButtonUp,
    ];

    /// Categories that must have a folder before an outfit can be generated
    pub const REQUIRED: [Self; 3] = [Self::Top, Self::Bottom, Self::Shoes];

    /// Stable snake-case identifier
    pub const fn key(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Layer => "layer",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
            Self::ShortTop => "short_top",
            Self::ShortBottom => "short_bottom",
            Self::ButtonUp => "button_up",
        }
    }

    /// Human readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Layer => "Layer",
            Self::Bottom => "Bottom",
            Self::Shoes => "Shoes",
            Self::ShortTop => "Short Top",
            Self::ShortBottom => "Short Bottom",
            Self::ButtonUp => "Button Up",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mapping from category to the directory names accepted for it
///
/// Names are kept in insertion order; earlier names win when a directory has
/// several matching children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<Category, Vec<String>>,
}

impl AliasTable {
    /// Create a table with no categories
    pub const fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add (or replace) the accepted names for a category
    #[must_use]
    pub fn with<I, S>(mut self, category: Category, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(category, names.into_iter().map(Into::into).collect());
        self
    }

    /// Accepted names for a category, empty if the category is not searched
    pub fn names(&self, category: Category) -> &[String] {
        self.entries.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Categories covered by this table, in discovery order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    /// Accepted names for `category` present in `candidates`, in table order
    ///
    /// Matching is exact and case-sensitive.
    pub fn matching_names<'a>(
        &'a self,
        category: Category,
        candidates: &'a [String],
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.names(category)
            .iter()
            .filter(|name| candidates.contains(name))
            .map(String::as_str)
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::empty()
            .with(
                Category::Top,
                ["Top", "top", "Tops", "tops", "Oberteile", "oberteile"],
            )
            .with(
                Category::Layer,
                [
                    "Layer", "layer", "Layers", "layers", "Jacken", "jacken", "Hoodies", "hoodies",
                ],
            )
            .with(
                Category::Bottom,
                [
                    "Bottom", "bottom", "Bottoms", "bottoms", "Hosen", "hosen", "Unten", "unten",
                ],
            )
            .with(
                Category::Shoes,
                ["Shoes", "shoes", "Schuhe", "schuhe", "Footwear", "footwear"],
            )
            .with(
                Category::ShortTop,
                [
                    "Short Top",
                    "short_top",
                    "Short_Top",
                    "ShortTop",
                    "Kurze Oberteile",
                    "kurze_oberteile",
                    "T-Shirts",
                    "tshirts",
                ],
            )
            .with(
                Category::ShortBottom,
                [
                    "Short Bottom",
                    "short_bottom",
                    "Short_Bottom",
                    "ShortBottom",
                    "Kurze Hosen",
                    "kurze_hosen",
                    "Shorts",
                    "shorts",
                ],
            )
            .with(
                Category::ButtonUp,
                [
                    "Button Up",
                    "button_up",
                    "Button_Up",
                    "ButtonUp",
                    "Hemden",
                    "hemden",
                    "Shirts",
                    "shirts",
                    "Blusen",
                    "blusen",
                ],
            )
    }
}
