//! Menu rendering data and the mobile menu visibility state machine.

use crate::error::NavigationError;
use crate::navigation::NavigationModel;
use crate::section::{Section, SectionRegistry};

// ============================================================================
// Menu items
// ============================================================================

/// One selectable control in either menu variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem<I> {
    pub section: Section,
    pub label: &'static str,
    pub icon: I,
    pub active: bool,
}

/// Builds the menu controls in registration order.
///
/// Exactly one item is active: the one matching `nav.active()`.
pub fn nav_items<I: Copy, C>(
    registry: &SectionRegistry<I, C>,
    nav: &NavigationModel,
) -> Vec<NavItem<I>> {
    registry
        .iter()
        .map(|entry| NavItem {
            section: entry.section,
            label: entry.label,
            icon: entry.icon,
            active: nav.is_active(entry.section),
        })
        .collect()
}

// ============================================================================
// Mobile menu
// ============================================================================

/// Visibility of the mobile menu panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuVisibility {
    #[default]
    Closed,
    Open,
}

/// Inputs that drive the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The trigger control was activated.
    TriggerActivated,
    /// A section control inside the panel was activated.
    SectionActivated(Section),
    /// A pointer-down landed somewhere; `outside` is true when the target is
    /// outside both the panel and the trigger.
    PointerDown { outside: bool },
}

/// Mobile menu visibility, owned by the mobile navigation component.
///
/// ```text
/// closed --trigger--> open
/// open --trigger | section selected | outside pointer-down--> closed
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    visibility: MenuVisibility,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn visibility(&self) -> MenuVisibility {
        self.visibility
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.visibility == MenuVisibility::Open
    }

    /// Trigger control activated.
    pub fn toggle(&mut self) {
        self.visibility = match self.visibility {
            MenuVisibility::Closed => MenuVisibility::Open,
            MenuVisibility::Open => MenuVisibility::Closed,
        };
        log::debug!("mobile menu: {:?}", self.visibility);
    }

    pub fn close(&mut self) {
        if self.is_open() {
            log::debug!("mobile menu: Closed");
        }
        self.visibility = MenuVisibility::Closed;
    }

    /// Section control activated: navigate and close together.
    ///
    /// If `nav` rejects the section neither effect is applied.
    pub fn select(
        &mut self,
        nav: &mut NavigationModel,
        section: Section,
    ) -> Result<(), NavigationError> {
        nav.set_active(section)?;
        self.close();
        Ok(())
    }

    /// Pointer-down observed. Only acts while open.
    pub fn pointer_down(&mut self, outside: bool) {
        if self.is_open() && outside {
            self.close();
        }
    }

    /// Applies a single input event.
    pub fn apply(
        &mut self,
        event: MenuEvent,
        nav: &mut NavigationModel,
    ) -> Result<(), NavigationError> {
        match event {
            MenuEvent::TriggerActivated => self.toggle(),
            MenuEvent::SectionActivated(section) => self.select(nav, section)?,
            MenuEvent::PointerDown { outside } => self.pointer_down(outside),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::tests::site_registry;

    fn site_model() -> NavigationModel {
        NavigationModel::from_registry(&site_registry()).unwrap()
    }

    #[test]
    fn test_nav_items_order_and_labels() {
        let registry = site_registry();
        let items = nav_items(&registry, &site_model());
        let labels: Vec<_> = items.iter().map(|item| item.label).collect();
        assert_eq!(labels, ["Home", "NFTs", "Swap", "Lock", "Roadmap"]);
    }

    #[test]
    fn test_nav_items_single_active() {
        let registry = site_registry();
        let mut nav = site_model();
        for section in Section::ALL {
            nav.set_active(section).unwrap();
            let items = nav_items(&registry, &nav);
            assert_eq!(items.iter().filter(|item| item.active).count(), 1);
            assert!(items.iter().any(|item| item.active && item.section == section));
        }
    }

    #[test]
    fn test_starts_closed() {
        assert_eq!(MobileMenu::new().visibility(), MenuVisibility::Closed);
    }

    #[test]
    fn test_trigger_toggles() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_select_closes_and_navigates() {
        let mut nav = site_model();
        for section in Section::ALL {
            let mut menu = MobileMenu::new();
            menu.toggle();
            menu.select(&mut nav, section).unwrap();
            assert!(!menu.is_open());
            assert_eq!(nav.active(), section);
        }
    }

    #[test]
    fn test_select_unregistered_changes_nothing() {
        let mut nav = NavigationModel::new([Section::Home, Section::Swap], Section::Home).unwrap();
        let mut menu = MobileMenu::new();
        menu.toggle();

        let result = menu.select(&mut nav, Section::Roadmap);
        assert_eq!(result, Err(NavigationError::Unregistered(Section::Roadmap)));
        assert!(menu.is_open());
        assert_eq!(nav.active(), Section::Home);
    }

    #[test]
    fn test_outside_pointer_down_closes() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        menu.pointer_down(false);
        assert!(menu.is_open());
        menu.pointer_down(true);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_pointer_down_while_closed_is_ignored() {
        let mut menu = MobileMenu::new();
        menu.pointer_down(true);
        assert_eq!(menu.visibility(), MenuVisibility::Closed);
        menu.pointer_down(false);
        assert_eq!(menu.visibility(), MenuVisibility::Closed);
    }

    #[test]
    fn test_apply_event_sequence() {
        let mut nav = site_model();
        let mut menu = MobileMenu::new();

        let events = [
            (MenuEvent::TriggerActivated, MenuVisibility::Open),
            (MenuEvent::PointerDown { outside: false }, MenuVisibility::Open),
            (MenuEvent::SectionActivated(Section::Lock), MenuVisibility::Closed),
            (MenuEvent::PointerDown { outside: true }, MenuVisibility::Closed),
            (MenuEvent::TriggerActivated, MenuVisibility::Open),
            (MenuEvent::PointerDown { outside: true }, MenuVisibility::Closed),
        ];
        for (event, expected) in events {
            menu.apply(event, &mut nav).unwrap();
            assert_eq!(menu.visibility(), expected, "after {event:?}");
        }
        assert_eq!(nav.active(), Section::Lock);
    }
}
