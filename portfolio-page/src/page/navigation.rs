use constants::page::ACTIVE_CLASS;

use super::{ClassTarget, PageError};

/// Open/closed state of the collapsible menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[derive(Debug, Default)]
pub struct NavigationController {
    state: MenuState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Flip the menu between open and closed.
    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        self.state
    }

    /// A navigation entry was activated: the menu always ends up closed.
    pub fn entry_activated(&mut self) -> MenuState {
        self.state = MenuState::Closed;
        self.state
    }

    /// Reflect the current state onto the toggle control and menu container.
    pub fn apply<T: ClassTarget>(&self, toggle: &T, menu: &T) -> Result<(), PageError> {
        let open = self.state.is_open();
        toggle.set_class(ACTIVE_CLASS, open)?;
        menu.set_class(ACTIVE_CLASS, open)
    }
}
