//! Entries of the page header menu and what activating them does.

use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Key of an entry in the header menu.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
pub enum MenuKey {
    #[default]
    #[strum(serialize = "home")]
    Home,
    #[strum(serialize = "create-poll")]
    CreatePoll,
    #[strum(serialize = "setting:1")]
    ProfileUsername,
    #[strum(serialize = "setting:2")]
    ProfileEmail,
    #[strum(serialize = "setting:3")]
    ProfileCreatedAt,
    #[strum(serialize = "setting:4")]
    Logout,
}

impl MenuKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// The pages the header links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Dashboard,
    CreatePoll,
}

impl NavTarget {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::CreatePoll => "/create_poll",
        }
    }
}

/// What the header asks its collaborators to do after an entry was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderEffect {
    Navigate(NavTarget),
    Logout,
}

/// The highlighted entry of the header menu.
///
/// Purely cosmetic: the selection is never consulted to decide what is rendered
/// or which effect an activation has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuSelection {
    selected: MenuKey,
}

impl MenuSelection {
    #[must_use]
    pub const fn selected(&self) -> MenuKey {
        self.selected
    }

    #[must_use]
    pub fn is_selected(&self, key: MenuKey) -> bool {
        self.selected == key
    }

    /// Highlight `key` and return the effect activating it has, if any.
    pub fn activate(&mut self, key: MenuKey) -> Option<HeaderEffect> {
        self.selected = key;
        match key {
            MenuKey::Home => Some(HeaderEffect::Navigate(NavTarget::Dashboard)),
            MenuKey::CreatePoll => Some(HeaderEffect::Navigate(NavTarget::CreatePoll)),
            MenuKey::Logout => Some(HeaderEffect::Logout),
            MenuKey::ProfileUsername | MenuKey::ProfileEmail | MenuKey::ProfileCreatedAt => None,
        }
    }
}
