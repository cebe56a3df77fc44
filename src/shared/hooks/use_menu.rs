//! Dropdown menu state.
//!
//! The menu is a two-state machine: `Closed` or `Open` with the anchor of the
//! trigger that opened it. Re-clicking the trigger toggles; it never stacks.
//! Close requests come from item selection, a backdrop click (the outside
//! click detector) or an equivalent dismiss signal, and always run
//! synchronously inside the handler, before any navigation side effect.

use dioxus::prelude::*;

/// Opaque reference to the trigger element an open menu is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorId(&'static str);

impl AnchorId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Dropdown state. The anchor is held if and only if the menu is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open {
        anchor: AnchorId,
    },
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open { .. })
    }

    /// Anchor of the open menu, `None` while closed.
    pub fn anchor(&self) -> Option<AnchorId> {
        match self {
            MenuState::Open { anchor } => Some(*anchor),
            MenuState::Closed => None,
        }
    }

    /// Trigger click: closed opens at `anchor`, open closes.
    pub fn toggled(&self, anchor: AnchorId) -> MenuState {
        match self {
            MenuState::Closed => MenuState::Open { anchor },
            MenuState::Open { .. } => MenuState::Closed,
        }
    }

    /// Any close request lands here.
    pub fn dismissed(&self) -> MenuState {
        MenuState::Closed
    }
}

/// Copyable handle owning the dropdown signal.
#[derive(Clone, Copy, PartialEq)]
pub struct MenuHandle {
    state: Signal<MenuState>,
}

impl MenuHandle {
    pub fn state(&self) -> MenuState {
        *self.state.read()
    }

    pub fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    pub fn toggle(&self, anchor: AnchorId) {
        let mut state = self.state;
        let current = *state.peek();
        state.set(current.toggled(anchor));
    }

    /// Dismiss without selecting. No signal write when already closed.
    pub fn dismiss(&self) {
        let mut state = self.state;
        let current = *state.peek();
        if current.is_open() {
            state.set(current.dismissed());
        }
    }

    /// Item selection: the close transition is mandatory and runs before any
    /// navigation the browser performs for the item's target.
    pub fn select(&self) {
        self.dismiss();
    }
}

/// Dropdown controller hook. Starts closed; resets with the owning component.
pub fn use_menu() -> MenuHandle {
    MenuHandle {
        state: use_signal(MenuState::default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: AnchorId = AnchorId::new("test-trigger");

    #[test]
    fn test_trigger_clicks_alternate() {
        let mut state = MenuState::default();
        let mut opens = 0;
        for _ in 0..6 {
            let next = state.toggled(TRIGGER);
            // Never two consecutive opens
            assert_ne!(next.is_open(), state.is_open());
            if next.is_open() {
                opens += 1;
            }
            state = next;
        }
        assert_eq!(opens, 3);
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn test_anchor_present_iff_open() {
        let closed = MenuState::default();
        assert_eq!(closed.anchor(), None);

        let open = closed.toggled(TRIGGER);
        assert_eq!(open.anchor(), Some(TRIGGER));

        assert_eq!(open.toggled(TRIGGER).anchor(), None);
    }

    #[test]
    fn test_selection_always_closes() {
        let open = MenuState::Open { anchor: TRIGGER };
        assert_eq!(open.dismissed(), MenuState::Closed);
        assert_eq!(MenuState::Closed.dismissed(), MenuState::Closed);
    }

    #[test]
    fn test_open_then_select_item_scenario() {
        // Mount: menu closed, drawer closed, light theme.
        use crate::shared::hooks::use_drawer::DrawerState;
        use crate::shared::state::ThemeMode;

        let drawer = DrawerState::default();
        let theme = ThemeMode::default();

        let menu = MenuState::default().toggled(TRIGGER);
        assert_eq!(menu, MenuState::Open { anchor: TRIGGER });

        // Selecting "Hydropower" closes the menu and touches nothing else.
        let menu = menu.dismissed();
        assert_eq!(menu, MenuState::Closed);
        assert_eq!(drawer, DrawerState::Closed);
        assert_eq!(theme, ThemeMode::Light);
    }
}
