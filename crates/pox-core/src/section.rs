//! Navigable sections and the ordered registry that describes them.
//!
//! A [`Section`] is a closed set of identifiers. Everything the shell needs
//! to know about a section (menu label, icon, content unit, footer) lives in
//! a [`SectionEntry`] inside a [`SectionRegistry`], so switching logic is a
//! table lookup and never a `match` over sections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

// ============================================================================
// Section
// ============================================================================

/// Identifier of a navigable section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Nfts,
    Swap,
    Lock,
    Roadmap,
}

impl Section {
    /// Every known section, in default menu order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Nfts,
        Section::Swap,
        Section::Lock,
        Section::Roadmap,
    ];

    /// Stable lowercase identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Nfts => "nfts",
            Section::Swap => "swap",
            Section::Lock => "lock",
            Section::Roadmap => "roadmap",
        }
    }

    /// Resolve an identifier, returning `None` for anything unknown.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| NavigationError::UnknownSection(s.to_string()))
    }
}

// ============================================================================
// Registry
// ============================================================================

/// What is mounted around a section's content unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Chrome {
    /// Content unit only.
    Bare,
    /// Content unit followed by the shared footer.
    #[default]
    WithFooter,
}

/// Registration record for one section.
///
/// `I` is the icon reference and `C` the content-unit constructor; both are
/// opaque to the core.
#[derive(Clone, Debug)]
pub struct SectionEntry<I, C> {
    pub section: Section,
    pub label: &'static str,
    pub icon: I,
    pub content: C,
    pub chrome: Chrome,
}

impl<I, C> SectionEntry<I, C> {
    pub fn new(section: Section, label: &'static str, icon: I, content: C) -> Self {
        Self {
            section,
            label,
            icon,
            content,
            chrome: Chrome::default(),
        }
    }

    /// Mount this section without the shared footer.
    pub fn bare(mut self) -> Self {
        self.chrome = Chrome::Bare;
        self
    }

    #[inline]
    pub fn has_footer(&self) -> bool {
        self.chrome == Chrome::WithFooter
    }
}

/// Ordered table of registered sections.
///
/// Registration order is menu order and is stable for the registry's
/// lifetime.
#[derive(Clone, Debug)]
pub struct SectionRegistry<I, C> {
    entries: Vec<SectionEntry<I, C>>,
}

impl<I, C> SectionRegistry<I, C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry. A section can only be registered once.
    pub fn register(&mut self, entry: SectionEntry<I, C>) -> Result<(), NavigationError> {
        if self.contains(entry.section) {
            return Err(NavigationError::DuplicateSection(entry.section));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, entry: SectionEntry<I, C>) -> Result<Self, NavigationError> {
        self.register(entry)?;
        Ok(self)
    }

    pub fn get(&self, section: Section) -> Option<&SectionEntry<I, C>> {
        self.entries.iter().find(|entry| entry.section == section)
    }

    /// Look up an entry by its string identifier.
    pub fn lookup(&self, id: &str) -> Result<&SectionEntry<I, C>, NavigationError> {
        let section: Section = id.parse()?;
        self.get(section)
            .ok_or(NavigationError::Unregistered(section))
    }

    #[inline]
    pub fn contains(&self, section: Section) -> bool {
        self.get(section).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionEntry<I, C>> {
        self.entries.iter()
    }

    /// Registered sections in registration order.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.entries.iter().map(|entry| entry.section)
    }

    /// The first registered section, used as the initial active section.
    pub fn first(&self) -> Option<Section> {
        self.entries.first().map(|entry| entry.section)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<I, C> Default for SectionRegistry<I, C> {
    fn default() -> Self {
        Self::new()
    }
}
