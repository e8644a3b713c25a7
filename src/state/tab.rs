// Top-level tabs
//
// The active tab is the only input to the view router.

/// The four top-level panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Recipes,
    About,
    Contact,
}

impl Tab {
    /// Tabs in navigation order
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Recipes, Tab::About, Tab::Contact];

    /// Display name for the nav bar and menu
    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Recipes => "Recipes",
            Tab::About => "About",
            Tab::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Recipes => 1,
            Tab::About => 2,
            Tab::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get the next tab in cycle
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Get the previous tab in cycle
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_around() {
        assert_eq!(Tab::Contact.next(), Tab::Home);
        assert_eq!(Tab::Home.prev(), Tab::Contact);
        assert_eq!(Tab::Home.next(), Tab::Recipes);
    }

    #[test]
    fn index_round_trips_for_every_tab() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(Tab::from_index(4), None);
    }
}
