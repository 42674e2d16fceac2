//! Named screens and the single-slot router that switches between them.

/// Every screen of the arcade. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Home,
    Notes,
    Memory,
    Guess,
    Final,
}

impl Screen {
    /// Stable element id, also used as a CSS hook.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Screen::Home => "homeScreen",
            Screen::Notes => "notesScreen",
            Screen::Memory => "memoryScreen",
            Screen::Guess => "guessScreen",
            Screen::Final => "finalScreen",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Valentine Arcade",
            Screen::Notes => "Love Notes",
            Screen::Memory => "Memory Match",
            Screen::Guess => "How Much Do I Love You?",
            Screen::Final => "You Did It",
        }
    }
}

/// Current screen. There is no history: showing a screen replaces the last one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenRouter {
    current: Screen,
}

impl ScreenRouter {
    #[must_use]
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Show `screen`. Returns `true` if the visible screen changed.
    pub fn show(&mut self, screen: Screen) -> bool {
        let changed = self.current != screen;
        self.current = screen;
        changed
    }

    /// The per-screen back button always leads home.
    pub fn back(&mut self) -> bool {
        self.show(Screen::Home)
    }
}
