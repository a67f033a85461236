//! Exclusive mounting of section content units.

use crate::error::NavigationError;
use crate::section::{Section, SectionRegistry};

/// What is mounted for one section: its content unit and maybe the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountPlan {
    pub section: Section,
    pub footer: bool,
}

impl MountPlan {
    /// Resolves the plan for `section` from its registry entry.
    pub fn for_section<I, C>(
        registry: &SectionRegistry<I, C>,
        section: Section,
    ) -> Result<Self, NavigationError> {
        let entry = registry
            .get(section)
            .ok_or(NavigationError::Unregistered(section))?;
        Ok(Self {
            section,
            footer: entry.has_footer(),
        })
    }

    /// Number of units this plan mounts.
    #[inline]
    pub fn units(&self) -> usize {
        1 + usize::from(self.footer)
    }
}

/// Result of a [`ViewSwitcher::switch_to`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Nothing was mounted before.
    Mounted(MountPlan),
    /// `exiting` was unmounted before `entering` was mounted.
    Swapped {
        exiting: MountPlan,
        entering: MountPlan,
    },
    /// The requested section is already mounted.
    Unchanged,
}

/// Tracks the single mounted section.
///
/// At most one plan is current; a switch replaces it in one step, so two
/// content units are never mounted at once in the model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewSwitcher {
    current: Option<MountPlan>,
}

impl ViewSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Option<MountPlan> {
        self.current
    }

    /// Content and footer units currently mounted.
    pub fn mounted_units(&self) -> usize {
        self.current.map_or(0, |plan| plan.units())
    }

    /// Mounts `section`, unmounting whatever was mounted before.
    pub fn switch_to<I, C>(
        &mut self,
        registry: &SectionRegistry<I, C>,
        section: Section,
    ) -> Result<SwitchOutcome, NavigationError> {
        let entering = MountPlan::for_section(registry, section)?;
        let outcome = match self.current.replace(entering) {
            None => SwitchOutcome::Mounted(entering),
            Some(exiting) if exiting.section == section => SwitchOutcome::Unchanged,
            Some(exiting) => SwitchOutcome::Swapped { exiting, entering },
        };
        if outcome != SwitchOutcome::Unchanged {
            log::debug!("view: mounted {section} (footer: {})", entering.footer);
        }
        Ok(outcome)
    }

    /// Unmounts the current section, if any.
    pub fn unmount(&mut self) -> Option<MountPlan> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::tests::site_registry;

    #[test]
    fn test_home_is_bare() {
        let mut switcher = ViewSwitcher::new();
        let outcome = switcher.switch_to(&site_registry(), Section::Home).unwrap();
        assert_eq!(
            outcome,
            SwitchOutcome::Mounted(MountPlan {
                section: Section::Home,
                footer: false
            })
        );
        assert_eq!(switcher.mounted_units(), 1);
    }

    #[test]
    fn test_other_sections_have_footer() {
        let registry = site_registry();
        for section in &Section::ALL[1..] {
            let mut switcher = ViewSwitcher::new();
            switcher.switch_to(&registry, *section).unwrap();
            assert_eq!(switcher.current().map(|p| p.footer), Some(true));
            assert_eq!(switcher.mounted_units(), 2);
        }
    }

    #[test]
    fn test_swap_is_exclusive() {
        let registry = site_registry();
        let mut switcher = ViewSwitcher::new();
        switcher.switch_to(&registry, Section::Home).unwrap();

        let mut previous = Section::Home;
        for section in [Section::Swap, Section::Lock, Section::Home, Section::Roadmap] {
            match switcher.switch_to(&registry, section).unwrap() {
                SwitchOutcome::Swapped { exiting, entering } => {
                    assert_eq!(exiting.section, previous);
                    assert_eq!(entering.section, section);
                }
                other => panic!("expected swap, got {other:?}"),
            }
            assert_eq!(switcher.current().map(|p| p.section), Some(section));
            assert!(switcher.mounted_units() <= 2);
            previous = section;
        }
    }

    #[test]
    fn test_reselect_is_unchanged() {
        let registry = site_registry();
        let mut switcher = ViewSwitcher::new();
        switcher.switch_to(&registry, Section::Nfts).unwrap();
        assert_eq!(
            switcher.switch_to(&registry, Section::Nfts).unwrap(),
            SwitchOutcome::Unchanged
        );
        assert_eq!(switcher.mounted_units(), 2);
    }

    #[test]
    fn test_unregistered_keeps_current() {
        let mut registry = SectionRegistry::new();
        for entry in site_registry().iter().take(2).cloned() {
            registry.register(entry).unwrap();
        }

        let mut switcher = ViewSwitcher::new();
        switcher.switch_to(&registry, Section::Nfts).unwrap();
        assert_eq!(
            switcher.switch_to(&registry, Section::Lock),
            Err(NavigationError::Unregistered(Section::Lock))
        );
        assert_eq!(switcher.current().map(|p| p.section), Some(Section::Nfts));
    }

    #[test]
    fn test_unmount() {
        let mut switcher = ViewSwitcher::new();
        switcher.switch_to(&site_registry(), Section::Swap).unwrap();
        assert_eq!(switcher.unmount().map(|p| p.section), Some(Section::Swap));
        assert_eq!(switcher.mounted_units(), 0);
        assert_eq!(switcher.unmount(), None);
    }
}
