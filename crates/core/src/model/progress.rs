use serde::{Deserialize, Serialize};

use crate::games::{GuessCounter, NotesCycler};

/// The three mini-games that gate the final screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MiniGame {
    Notes,
    Memory,
    Guess,
}

impl MiniGame {
    pub const ALL: [MiniGame; 3] = [MiniGame::Notes, MiniGame::Memory, MiniGame::Guess];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MiniGame::Notes => "Love Notes",
            MiniGame::Memory => "Memory Match",
            MiniGame::Guess => "Guess",
        }
    }
}

/// Per-sitting completion flags, one per mini-game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Completion {
    pub notes: bool,
    pub memory: bool,
    pub guess: bool,
}

impl Completion {
    #[must_use]
    pub fn get(&self, game: MiniGame) -> bool {
        match game {
            MiniGame::Notes => self.notes,
            MiniGame::Memory => self.memory,
            MiniGame::Guess => self.guess,
        }
    }

    pub fn set(&mut self, game: MiniGame, done: bool) {
        match game {
            MiniGame::Notes => self.notes = done,
            MiniGame::Memory => self.memory = done,
            MiniGame::Guess => self.guess = done,
        }
    }

    /// True once every mini-game is complete.
    #[must_use]
    pub fn all(&self) -> bool {
        self.notes && self.memory && self.guess
    }
}

/// Love Notes sub-state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesProgress {
    #[serde(rename = "notesRevealedCount")]
    pub(crate) revealed_count: u32,
    #[serde(rename = "noteIndex")]
    pub(crate) index: usize,
    #[serde(rename = "noteIsRevealed")]
    pub(crate) is_revealed: bool,
}

impl NotesProgress {
    #[must_use]
    pub fn revealed_count(&self) -> u32 {
        self.revealed_count
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.is_revealed
    }
}

/// Guess sub-state: submissions so far and the response on display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessProgress {
    #[serde(rename = "guessCount")]
    pub(crate) count: u32,
    #[serde(rename = "guessResponse")]
    pub(crate) response: Option<usize>,
}

impl GuessProgress {
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Index into the response list of the message currently shown.
    #[must_use]
    pub fn response(&self) -> Option<usize> {
        self.response
    }
}

/// The record persisted once per sitting.
///
/// Each mini-game only ever touches its own slice through the borrowing
/// accessors below; memory match has no persisted sub-state beyond its flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressState {
    pub completed: Completion,
    #[serde(flatten)]
    pub notes: NotesProgress,
    #[serde(flatten)]
    pub guess: GuessProgress,
}

impl ProgressState {
    #[must_use]
    pub fn all_complete(&self) -> bool {
        self.completed.all()
    }

    /// Borrow the Love Notes slice together with its completion flag.
    pub fn notes_cycler<'a>(&'a mut self, notes: &'a [String]) -> NotesCycler<'a> {
        NotesCycler::new(notes, &mut self.notes, &mut self.completed.notes)
    }

    /// Borrow the Guess slice together with its completion flag.
    pub fn guess_counter<'a>(&'a mut self, responses: &'a [String]) -> GuessCounter<'a> {
        GuessCounter::new(responses, &mut self.guess, &mut self.completed.guess)
    }

    pub fn set_memory_complete(&mut self, done: bool) {
        self.completed.memory = done;
    }
}
