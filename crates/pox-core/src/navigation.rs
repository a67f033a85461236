//! Active-section state shared by every navigation consumer.

use crate::error::NavigationError;
use crate::section::{Section, SectionRegistry};

/// Single source of truth for the active section.
///
/// The model remembers which sections are registered so that a request for
/// anything else is rejected without touching `active`. Exactly one section
/// is active at any time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationModel {
    registered: Vec<Section>,
    active: Section,
}

impl NavigationModel {
    /// Creates a model over `registered` with `initial` active.
    pub fn new(
        registered: impl IntoIterator<Item = Section>,
        initial: Section,
    ) -> Result<Self, NavigationError> {
        let registered: Vec<Section> = registered.into_iter().collect();
        if registered.is_empty() {
            return Err(NavigationError::EmptyRegistry);
        }
        if !registered.contains(&initial) {
            return Err(NavigationError::Unregistered(initial));
        }
        Ok(Self {
            registered,
            active: initial,
        })
    }

    /// Creates a model over a registry's sections, starting on the first one.
    pub fn from_registry<I, C>(registry: &SectionRegistry<I, C>) -> Result<Self, NavigationError> {
        let initial = registry.first().ok_or(NavigationError::EmptyRegistry)?;
        Self::new(registry.sections(), initial)
    }

    #[inline]
    pub fn active(&self) -> Section {
        self.active
    }

    #[inline]
    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    #[inline]
    pub fn is_registered(&self, section: Section) -> bool {
        self.registered.contains(&section)
    }

    /// Registered sections in registration order.
    pub fn sections(&self) -> &[Section] {
        &self.registered
    }

    /// Makes `section` active. Re-selecting the active section is a no-op.
    ///
    /// An unregistered section is rejected and the model is left unchanged.
    pub fn set_active(&mut self, section: Section) -> Result<(), NavigationError> {
        if !self.is_registered(section) {
            return Err(NavigationError::Unregistered(section));
        }
        if self.active != section {
            log::debug!("navigation: {} -> {}", self.active, section);
        }
        self.active = section;
        Ok(())
    }

    /// Resolves `id` and makes it active, returning the new active section.
    pub fn request(&mut self, id: &str) -> Result<Section, NavigationError> {
        let section: Section = id.parse()?;
        self.set_active(section)?;
        Ok(section)
    }
}
